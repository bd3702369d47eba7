use crate::common::*;

#[doc = "Body of a render call to the chart service"]
#[derive(Debug, Clone, Serialize, Getters, new)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct ChartRenderRequest {
    pub chart: String,
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    pub device_pixel_ratio: f64,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}
