use crate::common::*;
use crate::dto::chart::chart_render_request::*;

#[async_trait]
pub trait ChartRenderRepository: Send + Sync {
    async fn render_chart(&self, request: &ChartRenderRequest) -> Result<Vec<u8>, anyhow::Error>;
}
