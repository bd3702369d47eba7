use crate::common::*;

use crate::dto::{
    chart::{chart_render_request::*, chart_spec::*},
    series_set::*,
};
use crate::enums::bench_target::*;
use crate::errors::graph_error::*;
use crate::model::configs::{chart_config::*, chart_service_config::*};
use crate::traits::{
    repository_traits::chart_render_repository::*, service_traits::chart_service::*,
};
use crate::utils_modules::io_utils::*;

const CHART_TITLE: &str = "Performance Comparison Across Targets";
const Y_AXIS_LABEL: &str = "Time (us)";
const AXIS_HEADROOM: f64 = 1.1;
const VALUE_LABEL_FORMATTER: &str = "function(value) { return value.toFixed(3) + ' us'; }";

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl<R: ChartRenderRepository> {
    render_repository: R,
    chart_config: ChartConfig,
    chart_service_config: ChartServiceConfig,
}

impl<R: ChartRenderRepository> ChartServiceImpl<R> {
    #[doc = "Wraps the chart spec into the payload expected by the rendering service"]
    fn build_render_request(&self, chart_spec: &ChartSpec) -> anyhow::Result<ChartRenderRequest> {
        let chart: String = chart_spec
            .to_js_literal()
            .context("[ChartServiceImpl->build_render_request] failed to serialize chart spec")?;

        Ok(ChartRenderRequest::new(
            chart,
            *self.chart_config.width(),
            *self.chart_config.height(),
            self.chart_config.background_color().to_string(),
            *self.chart_config.device_pixel_ratio(),
            self.chart_config.format().to_string(),
            self.chart_service_config.chart_js_version().clone(),
            self.chart_service_config.api_key().clone(),
        ))
    }
}

#[async_trait]
impl<R: ChartRenderRepository> ChartService for ChartServiceImpl<R> {
    fn calc_axis_ceiling(&self, series_set: &SeriesSet) -> anyhow::Result<f64> {
        let max_value: f64 = series_set.max_value().ok_or(GraphError::NoData)?;
        Ok(max_value * AXIS_HEADROOM)
    }

    fn build_chart_spec(&self, series_set: &SeriesSet) -> anyhow::Result<ChartSpec> {
        let suggested_max: f64 = self.calc_axis_ceiling(series_set)?;

        let datasets: Vec<ChartDataset> = BenchTarget::ALL
            .iter()
            .map(|target| {
                ChartDataset::new(
                    target.label().to_string(),
                    series_set.series(*target).to_vec(),
                    target.bar_color().to_string(),
                )
            })
            .collect();

        let y_axis: ChartAxis = ChartAxis::new(
            AxisTicks::new(true, suggested_max),
            ScaleLabel::new(true, Y_AXIS_LABEL.to_string()),
        );

        let data_labels: DataLabels = DataLabels::new(
            true,
            "top".to_string(),
            "end".to_string(),
            "black".to_string(),
            LabelFont::new("bold".to_string()),
            JsFunction::new(VALUE_LABEL_FORMATTER),
        );

        Ok(ChartSpec::new(
            "bar".to_string(),
            ChartData::new(series_set.test_names().clone(), datasets),
            ChartOptions::new(
                ChartScales::new(vec![y_axis]),
                ChartTitle::new(true, CHART_TITLE.to_string()),
                ChartPlugins::new(data_labels),
            ),
        ))
    }

    async fn generate_chart_image(
        &self,
        series_set: &SeriesSet,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        let chart_spec: ChartSpec = self.build_chart_spec(series_set)?;
        let request: ChartRenderRequest = self.build_render_request(&chart_spec)?;

        let image: Vec<u8> = self
            .render_repository
            .render_chart(&request)
            .await
            .context("[ChartServiceImpl->generate_chart_image] chart rendering failed")?;

        write_file_atomic(output_path, &image)
            .await
            .context("[ChartServiceImpl->generate_chart_image] failed to save chart image")?;

        info!(
            "Bar chart generated successfully: {:?} ({}x{})",
            output_path,
            self.chart_config.width(),
            self.chart_config.height()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::benchmark_row::*;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct FakeRenderRepository {
        image: Option<Vec<u8>>,
        requests: Mutex<Vec<ChartRenderRequest>>,
    }

    #[async_trait]
    impl ChartRenderRepository for FakeRenderRepository {
        async fn render_chart(
            &self,
            request: &ChartRenderRequest,
        ) -> Result<Vec<u8>, anyhow::Error> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.image {
                Some(image) => Ok(image.clone()),
                None => Err(GraphError::service_error("503 Service Unavailable").into()),
            }
        }
    }

    fn chart_service(image: Option<&[u8]>) -> ChartServiceImpl<FakeRenderRepository> {
        let repository = FakeRenderRepository {
            image: image.map(|bytes| bytes.to_vec()),
            requests: Mutex::new(Vec::new()),
        };
        ChartServiceImpl::new(
            repository,
            ChartConfig::default(),
            ChartServiceConfig::default(),
        )
    }

    fn series_set(rows: &[(&str, [f64; 5])]) -> SeriesSet {
        SeriesSet::from_rows(
            rows.iter()
                .map(|(name, timings)| BenchmarkRow::new(name.to_string(), *timings))
                .collect(),
        )
    }

    #[test]
    fn ceiling_is_max_times_headroom() {
        let service = chart_service(None);
        let set = series_set(&[("TestA", [10.0, 20.0, 5.0, 15.0, 8.0])]);

        let ceiling: f64 = service.calc_axis_ceiling(&set).unwrap();

        assert!((ceiling - 22.0).abs() < 1e-9);
    }

    #[test]
    fn ceiling_looks_at_every_target() {
        let service = chart_service(None);
        let set = series_set(&[
            ("a", [1.0, 1.0, 1.0, 1.0, 1.0]),
            ("b", [2.0, 3.0, 4.0, 5.0, 100.0]),
        ]);

        assert!((service.calc_axis_ceiling(&set).unwrap() - 110.0).abs() < 1e-9);
    }

    #[test]
    fn empty_series_set_has_no_ceiling() {
        let service = chart_service(None);
        let err: anyhow::Error = service
            .calc_axis_ceiling(&SeriesSet::default())
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::NoData)
        ));
        assert!(service.build_chart_spec(&SeriesSet::default()).is_err());
    }

    #[test]
    fn chart_spec_has_five_datasets_in_fixed_order() {
        let service = chart_service(None);

        for set in [
            series_set(&[("only", [1.0, 2.0, 3.0, 4.0, 5.0])]),
            series_set(&[
                ("a", [1.0, 2.0, 3.0, 4.0, 5.0]),
                ("b", [1.0, 2.0, 3.0, 4.0, 5.0]),
                ("c", [1.0, 2.0, 3.0, 4.0, 5.0]),
            ]),
        ] {
            let spec: ChartSpec = service.build_chart_spec(&set).unwrap();
            let labels: Vec<&str> = spec
                .data()
                .datasets()
                .iter()
                .map(|dataset| dataset.label().as_str())
                .collect();

            assert_eq!(
                labels,
                vec!["QEMU AARCH64", "QEMU RISCV64", "SPIKE", "BPIF3", "RASPI4"]
            );
        }
    }

    #[test]
    fn chart_spec_carries_data_and_options() {
        let service = chart_service(None);
        let set = series_set(&[("TestA", [10.0, 20.0, 5.0, 15.0, 8.0])]);

        let spec: ChartSpec = service.build_chart_spec(&set).unwrap();
        let value: Value = serde_json::to_value(&spec).unwrap();

        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["labels"], json!(["TestA"]));
        assert_eq!(value["data"]["datasets"][0]["data"], json!([10.0]));
        assert_eq!(
            value["data"]["datasets"][4]["backgroundColor"],
            "rgba(128, 0, 128, 0.85)"
        );

        let y_axis: &Value = &value["options"]["scales"]["yAxes"][0];
        assert_eq!(y_axis["ticks"]["beginAtZero"], true);
        assert!((y_axis["ticks"]["suggestedMax"].as_f64().unwrap() - 22.0).abs() < 1e-9);
        assert_eq!(y_axis["scaleLabel"]["display"], true);
        assert_eq!(y_axis["scaleLabel"]["labelString"], "Time (us)");

        assert_eq!(
            value["options"]["title"]["text"],
            "Performance Comparison Across Targets"
        );
        assert_eq!(
            spec.options().plugins().datalabels().formatter().source(),
            "function(value) { return value.toFixed(3) + ' us'; }"
        );
    }

    #[tokio::test]
    async fn generate_chart_image_writes_rendered_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let output: PathBuf = dir.path().join("performance_comparison_across_targets.png");
        let service = chart_service(Some(&b"\x89PNG\r\n"[..]));
        let set = series_set(&[("TestA", [10.0, 20.0, 5.0, 15.0, 8.0])]);

        service.generate_chart_image(&set, &output).await.unwrap();

        assert_eq!(fs::read(&output).unwrap(), b"\x89PNG\r\n");

        let requests = service.render_repository.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(*requests[0].width(), 1200);
        assert_eq!(*requests[0].height(), 800);
        assert!(requests[0]
            .chart()
            .contains("\"formatter\":function(value) { return value.toFixed(3) + ' us'; }"));
    }

    #[tokio::test]
    async fn service_failure_leaves_existing_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let output: PathBuf = dir.path().join("performance_comparison_across_targets.png");
        fs::write(&output, b"previous chart").unwrap();
        let service = chart_service(None);
        let set = series_set(&[("TestA", [10.0, 20.0, 5.0, 15.0, 8.0])]);

        let err: anyhow::Error = service.generate_chart_image(&set, &output).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::ServiceError { .. })
        ));
        assert_eq!(fs::read(&output).unwrap(), b"previous chart");
    }

    #[tokio::test]
    async fn empty_data_never_reaches_the_service() {
        let dir = tempfile::tempdir().unwrap();
        let output: PathBuf = dir.path().join("chart.png");
        let service = chart_service(Some(&b"png"[..]));

        let err: anyhow::Error = service
            .generate_chart_image(&SeriesSet::default(), &output)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::NoData)
        ));
        assert!(service.render_repository.requests.lock().unwrap().is_empty());
        assert!(!output.exists());
    }
}
