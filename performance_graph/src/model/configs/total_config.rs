use crate::common::*;

use crate::model::configs::{chart_config::*, chart_service_config::*, system_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    TotalConfig::new()
}

#[derive(Debug, Clone, Default, Deserialize, Getters)]
#[serde(default)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub system: SystemConfig,
    pub chart_service: ChartServiceConfig,
    pub chart: ChartConfig,
}

#[doc = "system 설정 정보"]
pub fn get_system_config_info() -> &'static SystemConfig {
    &TOTAL_CONFIG.system
}

#[doc = "Chart rendering service 설정 정보"]
pub fn get_chart_service_config_info() -> &'static ChartServiceConfig {
    &TOTAL_CONFIG.chart_service
}

#[doc = "Chart 이미지 설정 정보"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

impl TotalConfig {
    fn new() -> Self {
        match Self::load(&SERVER_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                /* The logger is configured from this file, so report on stderr as well */
                let err_msg = "Failed to convert the data from SERVER_CONFIG_PATH into the TotalConfig structure.";
                eprintln!("[TotalConfig->new] {} {:?}", err_msg, e);
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }

    #[doc = r#"
        Loads the configuration from a TOML file.

        A missing file is not an error: every section has defaults matching the
        fixed input/output names and the 1200x800 chart size. Missing keys inside
        an existing file fall back to the same defaults.

        # Arguments
        * `file_path` - Path of the TOML configuration file

        # Errors
        The file exists but cannot be read or is not valid TOML for `TotalConfig`.
    "#]
    pub fn load(file_path: &str) -> anyhow::Result<Self> {
        if !Path::new(file_path).exists() {
            return Ok(TotalConfig::default());
        }

        read_toml_from_file::<TotalConfig>(file_path)
            .with_context(|| format!("[TotalConfig->load] invalid config file: {}", file_path))
    }
}
