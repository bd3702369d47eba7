pub mod chart_service;
pub mod csv_loader_service;
