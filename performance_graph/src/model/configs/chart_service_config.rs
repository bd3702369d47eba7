use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[serde(default)]
#[getset(get = "pub")]
pub struct ChartServiceConfig {
    pub base_url: String,
    pub timeout_sec: u64,
    pub api_key: Option<String>,
    pub chart_js_version: Option<String>,
}

impl Default for ChartServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://quickchart.io".to_string(),
            timeout_sec: 60,
            api_key: None,
            chart_js_version: None,
        }
    }
}
