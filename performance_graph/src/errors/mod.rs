pub mod graph_error;
