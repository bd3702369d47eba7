use crate::common::*;

use crate::errors::graph_error::*;

#[doc = r#"
    Chart.js (v2 schema) configuration rendered by the chart service.

    Serializes to plain JSON except for `JsFunction` values, which the
    rendering service has to receive as raw JavaScript. Use
    `to_js_literal()` to obtain the text that is actually sent.
"#]
#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartOptions {
    pub scales: ChartScales,
    pub title: ChartTitle,
    pub plugins: ChartPlugins,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct ChartScales {
    pub y_axes: Vec<ChartAxis>,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct ChartAxis {
    pub ticks: AxisTicks,
    pub scale_label: ScaleLabel,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct AxisTicks {
    pub begin_at_zero: bool,
    pub suggested_max: f64,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct ScaleLabel {
    pub display: bool,
    pub label_string: String,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartPlugins {
    pub datalabels: DataLabels,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct DataLabels {
    pub display: bool,
    pub align: String,
    pub anchor: String,
    pub color: String,
    pub font: LabelFont,
    pub formatter: JsFunction,
}

#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct LabelFont {
    pub weight: String,
}

/* JavaScript source embedded in the chart config */
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct JsFunction(String);

impl JsFunction {
    pub fn new(source: impl Into<String>) -> Self {
        JsFunction(source.into())
    }

    pub fn source(&self) -> &str {
        &self.0
    }
}

impl ChartSpec {
    /* (object key, function) pairs; keys are unique within the spec */
    fn js_functions(&self) -> Vec<(&'static str, &JsFunction)> {
        vec![("formatter", &self.options.plugins.datalabels.formatter)]
    }

    #[doc = r#"
        Serializes the spec as a JavaScript object literal.

        The output is the JSON form of the spec with every `JsFunction`
        unquoted, so the rendering service evaluates it as a function instead
        of treating it as a string.

        # Errors
        `GraphError::Json` if the spec cannot be serialized.
    "#]
    pub fn to_js_literal(&self) -> GraphResult<String> {
        let mut literal: String = serde_json::to_string(self)?;

        for (key, js_function) in self.js_functions() {
            let quoted: String = format!(
                "\"{}\":{}",
                key,
                serde_json::to_string(js_function.source())?
            );
            let raw: String = format!("\"{}\":{}", key, js_function.source());
            literal = literal.replacen(&quoted, &raw, 1);
        }

        Ok(literal)
    }
}
