use crate::common::*;

use crate::dto::chart::chart_render_request::*;
use crate::errors::graph_error::*;
use crate::model::configs::chart_service_config::*;
use crate::traits::repository_traits::chart_render_repository::*;

#[derive(Debug, Clone)]
pub struct QuickChartRepositoryImpl {
    client: Client,
    chart_endpoint: String,
}

impl QuickChartRepositoryImpl {
    pub fn new(chart_service_config: &ChartServiceConfig) -> Result<Self, anyhow::Error> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(*chart_service_config.timeout_sec()))
            .build()
            .context("[QuickChartRepositoryImpl->new] failed to build http client")?;

        let chart_endpoint: String = format!(
            "{}/chart",
            chart_service_config.base_url().trim_end_matches('/')
        );

        Ok(QuickChartRepositoryImpl {
            client,
            chart_endpoint,
        })
    }
}

#[async_trait]
impl ChartRenderRepository for QuickChartRepositoryImpl {
    #[doc = "Function that POSTs a chart config to the rendering service and returns the image bytes"]
    async fn render_chart(&self, request: &ChartRenderRequest) -> Result<Vec<u8>, anyhow::Error> {
        let response: reqwest::Response = self
            .client
            .post(&self.chart_endpoint)
            .json(request)
            .send()
            .await
            .map_err(GraphError::from)
            .context("[QuickChartRepositoryImpl->render_chart] request failed")?;

        let status: StatusCode = response.status();

        if !status.is_success() {
            let body: String = response.text().await.unwrap_or_default();
            return Err(GraphError::service_error(format!(
                "{} responded with {}: {}",
                self.chart_endpoint,
                status,
                body.trim()
            ))
            .into());
        }

        let image: Vec<u8> = response
            .bytes()
            .await
            .map_err(GraphError::from)
            .context("[QuickChartRepositoryImpl->render_chart] failed to read response body")?
            .to_vec();

        if image.is_empty() {
            return Err(GraphError::service_error(format!(
                "{} returned an empty image",
                self.chart_endpoint
            ))
            .into());
        }

        info!(
            "Chart rendered by {} ({} bytes)",
            self.chart_endpoint,
            image.len()
        );

        Ok(image)
    }
}
