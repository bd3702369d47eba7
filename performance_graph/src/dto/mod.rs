pub mod benchmark_row;
pub mod chart;
pub mod series_set;
