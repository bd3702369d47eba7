pub mod chart_service_impl;
pub mod csv_loader_service_impl;
