use crate::common::*;
use crate::dto::{chart::chart_spec::*, series_set::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "Axis ceiling of the chart: the largest timing of every target times 1.1"]
    fn calc_axis_ceiling(&self, series_set: &SeriesSet) -> anyhow::Result<f64>;

    #[doc = "Build the bar chart configuration for the given series set"]
    fn build_chart_spec(&self, series_set: &SeriesSet) -> anyhow::Result<ChartSpec>;

    #[doc = "
        Render the performance comparison bar chart and save it as an image file
        # Arguments
        * `series_set` - Benchmark timings of every target
        * `output_path` - Path where the chart image will be saved
    "]
    async fn generate_chart_image(
        &self,
        series_set: &SeriesSet,
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
