use serde::Deserialize;

/// One trace as stored in a serialized plotly figure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmbeddedTrace {
    /// Legend name
    #[serde(default)]
    pub name: String,
    /// Time values
    #[serde(default)]
    pub x: Vec<f64>,
    /// Sample values; gaps are serialized as `null`
    #[serde(default)]
    pub y: Vec<Option<f64>>,
    /// Axis reference (`"y2"` for the secondary axis), absent for the primary axis
    #[serde(default, rename = "yaxis")]
    pub y_axis: Option<String>,
    /// Initial visibility (`"legendonly"` for hidden traces), absent when shown
    #[serde(default)]
    pub visible: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct FigureJson {
    #[serde(default)]
    data: Vec<EmbeddedTrace>,
}

/// Read the traces back from a figure's JSON specification
/// (as produced by [`super::Figure::to_json`]).
pub fn read_traces(json: &str) -> Result<Vec<EmbeddedTrace>, serde_json::Error> {
    let figure: FigureJson = serde_json::from_str(json)?;
    Ok(figure.data)
}
