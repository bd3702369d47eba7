use crate::common::*;

use crate::dto::{benchmark_row::*, series_set::*};
use crate::errors::graph_error::*;
use crate::traits::service_traits::csv_loader_service::*;

#[derive(Debug, Clone, new)]
pub struct CsvLoaderServiceImpl;

impl CsvLoaderServiceImpl {
    #[doc = r#"
        Parses combined benchmark results into a series set.

        The first record is the header and is skipped without checking its
        names, columns are positional. Every other record must hold the test
        name followed by one timing per target.

        # Arguments
        * `reader` - Source of the csv text

        # Errors
        * `GraphError::MalformedRow` - a record does not have six columns
        * `GraphError::ParseError`   - a timing is not a floating-point number
        * `GraphError::NonFiniteValue` - a timing is NaN or infinite
        * `GraphError::Csv`          - the input is not readable as csv (e.g. invalid UTF-8)
    "#]
    pub fn parse_series_set<R: Read>(&self, reader: R) -> GraphResult<SeriesSet> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut rows: Vec<BenchmarkRow> = Vec::new();

        for record in csv_reader.records() {
            let record: StringRecord = record?;
            let line: u64 = record.position().map(|pos| pos.line()).unwrap_or_default();

            rows.push(BenchmarkRow::from_csv_record(&record, line)?);
        }

        Ok(SeriesSet::from_rows(rows))
    }
}

#[async_trait]
impl CsvLoaderService for CsvLoaderServiceImpl {
    async fn load_series_set(&self, csv_path: &Path) -> anyhow::Result<SeriesSet> {
        let content: Vec<u8> = match tokio::fs::read(csv_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(GraphError::file_not_found(csv_path).into());
            }
            Err(e) => {
                return Err(anyhow::Error::from(GraphError::from(e)).context(format!(
                    "[CsvLoaderServiceImpl->load_series_set] failed to read {:?}",
                    csv_path
                )));
            }
        };

        let series_set: SeriesSet = self.parse_series_set(content.as_slice()).with_context(|| {
            format!(
                "[CsvLoaderServiceImpl->load_series_set] failed to parse {:?}",
                csv_path
            )
        })?;

        info!(
            "Loaded {} benchmark rows from {:?}",
            series_set.len(),
            csv_path
        );

        Ok(series_set)
    }
}
