use crate::common::*;

use crate::enums::bench_target::*;
use crate::errors::graph_error::*;

/* test name + one timing per target */
pub const BENCHMARK_ROW_COLUMNS: usize = 1 + BenchTarget::ALL.len();

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct BenchmarkRow {
    pub test_name: String,
    pub timings_us: [f64; 5],
}

impl BenchmarkRow {
    #[doc = r#"
        Converts one csv record into a benchmark row.

        The record must hold exactly six fields: the test name followed by the
        timings of every target in `BenchTarget::ALL` order. Timings tolerate
        surrounding whitespace.

        # Arguments
        * `record` - Raw csv record
        * `line`   - 1-based line number of the record, used in error reports

        # Errors
        * `GraphError::MalformedRow` - wrong column count
        * `GraphError::ParseError`     - a timing is not a floating-point number
        * `GraphError::NonFiniteValue` - a timing parses to NaN or an infinity
    "#]
    pub fn from_csv_record(record: &StringRecord, line: u64) -> GraphResult<Self> {
        if record.len() != BENCHMARK_ROW_COLUMNS {
            return Err(GraphError::MalformedRow {
                line,
                expected: BENCHMARK_ROW_COLUMNS,
                found: record.len(),
            });
        }

        let mut timings_us: [f64; 5] = [0.0; 5];

        for target in BenchTarget::ALL {
            let raw: &str = &record[target.index() + 1];
            let timing: f64 = raw.trim().parse::<f64>().map_err(|_| GraphError::ParseError {
                line,
                column: target.column_name().to_string(),
                value: raw.to_string(),
            })?;

            /* JSON has no NaN/Infinity, the chart payload would carry null instead */
            if !timing.is_finite() {
                return Err(GraphError::NonFiniteValue {
                    line,
                    column: target.column_name().to_string(),
                    value: raw.to_string(),
                });
            }

            timings_us[target.index()] = timing;
        }

        Ok(BenchmarkRow {
            test_name: record[0].to_string(),
            timings_us,
        })
    }

    pub fn timing(&self, target: BenchTarget) -> f64 {
        self.timings_us[target.index()]
    }
}
