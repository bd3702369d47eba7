use crate::common::*;
use crate::dto::series_set::*;

#[async_trait]
pub trait CsvLoaderService: Send + Sync {
    #[doc = "
        Load the combined benchmark results csv into a series set
        # Arguments
        * `csv_path` - Path of the csv file (header row + one row per test)
    "]
    async fn load_series_set(&self, csv_path: &Path) -> anyhow::Result<SeriesSet>;
}
