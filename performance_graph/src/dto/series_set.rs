use crate::common::*;

use crate::dto::benchmark_row::*;
use crate::enums::bench_target::*;

#[doc = r#"
    Column view of the benchmark results.

    Holds the test names plus one timing series per target. Every series has
    the same length as `test_names` and index `i` of each refers to the i-th
    data row of the csv file. The set is immutable once built.
"#]
#[derive(Debug, Clone, Default, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct SeriesSet {
    test_names: Vec<String>,
    #[getset(skip)]
    timings_us: [Vec<f64>; 5],
}

impl SeriesSet {
    pub fn from_rows(rows: Vec<BenchmarkRow>) -> Self {
        let mut test_names: Vec<String> = Vec::with_capacity(rows.len());
        let mut timings_us: [Vec<f64>; 5] = Default::default();

        for row in rows {
            for target in BenchTarget::ALL {
                timings_us[target.index()].push(row.timing(target));
            }
            test_names.push(row.test_name);
        }

        SeriesSet {
            test_names,
            timings_us,
        }
    }

    #[doc = "Timing series of a single target"]
    pub fn series(&self, target: BenchTarget) -> &[f64] {
        &self.timings_us[target.index()]
    }

    pub fn len(&self) -> usize {
        self.test_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.test_names.is_empty()
    }

    #[doc = "Largest timing over every target. NaN values are skipped."]
    pub fn max_value(&self) -> Option<f64> {
        self.timings_us
            .iter()
            .flatten()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc: Option<f64>, v| {
                Some(acc.map_or(v, |cur| cur.max(v)))
            })
    }
}
