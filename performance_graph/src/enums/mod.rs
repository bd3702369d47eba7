pub mod bench_target;
