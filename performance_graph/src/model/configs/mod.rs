pub mod chart_config;
pub mod chart_service_config;
pub mod system_config;
pub mod total_config;
