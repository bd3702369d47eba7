use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[serde(default)]
#[getset(get = "pub")]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    pub device_pixel_ratio: f64,
    pub format: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            background_color: "#ffffff".to_string(),
            device_pixel_ratio: 1.0,
            format: "png".to_string(),
        }
    }
}
