use crate::common::*;

use crate::dto::series_set::*;

use crate::traits::service_traits::{chart_service::*, csv_loader_service::*};

#[derive(Debug, new)]
pub struct MainController<L: CsvLoaderService, C: ChartService> {
    csv_loader_service: L,
    chart_service: C,
}

impl<L: CsvLoaderService, C: ChartService> MainController<L, C> {
    #[doc = r#"
        Runs the whole pipeline once: csv file -> series set -> rendered chart image.

        1. Loads the benchmark results at `input_csv_path` into per-target series
        2. Builds the chart config, has the rendering service draw it and saves the image to `output_image_path`
        3. Prints a one-line confirmation once the image is saved

        No step is retried; the first error ends the run.

        # Returns
        * `anyhow::Result<()>` - Ok(()) once the image is saved
    "#]
    pub async fn main_task(
        &self,
        input_csv_path: &Path,
        output_image_path: &Path,
    ) -> anyhow::Result<()> {
        let series_set: SeriesSet = self
            .csv_loader_service
            .load_series_set(input_csv_path)
            .await?;

        self.chart_service
            .generate_chart_image(&series_set, output_image_path)
            .await?;

        let output_filename: String = output_image_path.display().to_string();
        info!("Performance comparison chart saved to '{}'", output_filename);
        println!(
            "Performance comparison chart saved to '{}'",
            output_filename
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::chart::chart_render_request::*;
    use crate::errors::graph_error::*;
    use crate::model::configs::{chart_config::*, chart_service_config::*};
    use crate::service::{chart_service_impl::*, csv_loader_service_impl::*};
    use crate::traits::repository_traits::chart_render_repository::*;

    #[derive(Debug)]
    struct StaticImageRepository;

    #[async_trait]
    impl ChartRenderRepository for StaticImageRepository {
        async fn render_chart(
            &self,
            request: &ChartRenderRequest,
        ) -> Result<Vec<u8>, anyhow::Error> {
            Ok(request.chart().as_bytes().to_vec())
        }
    }

    fn controller() -> MainController<CsvLoaderServiceImpl, ChartServiceImpl<StaticImageRepository>>
    {
        MainController::new(
            CsvLoaderServiceImpl::new(),
            ChartServiceImpl::new(
                StaticImageRepository,
                ChartConfig::default(),
                ChartServiceConfig::default(),
            ),
        )
    }

    #[tokio::test]
    async fn renders_csv_into_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input: PathBuf = dir.path().join("combined_performance_results.csv");
        let output: PathBuf = dir.path().join("performance_comparison_across_targets.png");
        fs::write(
            &input,
            "name,qemu_aarch64_us,qemu_riscv64_us,spike_us,bpif3_us,raspi4_us\nvhadd_u16,1,2,3,4,5\n",
        )
        .unwrap();

        controller().main_task(&input, &output).await.unwrap();

        let written: String = fs::read_to_string(&output).unwrap();
        assert!(written.contains("\"labels\":[\"vhadd_u16\"]"));
        assert!(written.contains("\"label\":\"RASPI4\""));
    }

    #[tokio::test]
    async fn header_only_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input: PathBuf = dir.path().join("combined_performance_results.csv");
        let output: PathBuf = dir.path().join("performance_comparison_across_targets.png");
        fs::write(&input, "name,1,2,3,4,5\n").unwrap();

        let err: anyhow::Error = controller().main_task(&input, &output).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::NoData)
        ));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn missing_input_fails_before_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let output: PathBuf = dir.path().join("out.png");

        let err: anyhow::Error = controller()
            .main_task(&dir.path().join("missing.csv"), &output)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GraphError>(),
            Some(GraphError::FileNotFound { .. })
        ));
        assert!(!output.exists());
    }
}
