use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[serde(default)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub input_csv_path: String,
    pub output_image_path: String,
    pub log_directory: String,
    pub log_level: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            input_csv_path: "combined_performance_results.csv".to_string(),
            output_image_path: "performance_comparison_across_targets.png".to_string(),
            log_directory: "logs".to_string(),
            log_level: "info".to_string(),
        }
    }
}
