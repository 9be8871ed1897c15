//! Serializable Plotly figure specs.
//!
//! A [`Figure`] is the `(data, layout)` pair a Plotly front end passes to
//! `Plotly.newPlot`. Only the attributes the dashboard uses are modelled.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// A chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Data traces, drawn in order.
    pub data: Vec<Trace>,
    /// Titles, axes and sizing.
    pub layout: Layout,
}

impl Figure {
    /// Creates a figure with no traces.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    /// Appends a trace.
    #[must_use]
    pub fn with_trace(mut self, trace: impl Into<Trace>) -> Self {
        self.data.push(trace.into());
        self
    }

    /// Serializes the figure to compact JSON.
    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string(self).map_err(|e| ChartError::Serialization(e.to_string()))
    }

    /// Serializes the figure to indented JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChartError::Serialization(e.to_string()))
    }

    /// Parses a figure from JSON.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json).map_err(|e| ChartError::Deserialization(e.to_string()))
    }
}

/// One data trace, tagged by Plotly trace type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// Pie or donut.
    Pie(PieTrace),
    /// Line/marker series.
    Scatter(ScatterTrace),
    /// Vertical bars.
    Bar(BarTrace),
}

impl From<PieTrace> for Trace {
    fn from(trace: PieTrace) -> Self {
        Trace::Pie(trace)
    }
}

impl From<ScatterTrace> for Trace {
    fn from(trace: ScatterTrace) -> Self {
        Trace::Scatter(trace)
    }
}

impl From<BarTrace> for Trace {
    fn from(trace: BarTrace) -> Self {
        Trace::Bar(trace)
    }
}

/// Pie slices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieTrace {
    /// Slice sizes.
    pub values: Vec<u64>,
    /// Slice labels, parallel to `values`.
    pub labels: Vec<String>,
    /// Slice colors.
    pub marker: Marker,
    /// Text drawn on each slice, e.g. `label+percent`.
    pub textinfo: String,
    /// Fraction of the radius cut out of the middle.
    pub hole: f64,
}

/// A named series of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    /// Category or date keys.
    pub x: Vec<String>,
    /// Values, parallel to `x`.
    pub y: Vec<u64>,
    /// Legend entry.
    pub name: String,
    /// Drawing mode, e.g. `lines+markers`.
    pub mode: String,
    /// Line and marker color.
    pub marker: Marker,
}

/// Bars over categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    /// Categories.
    pub x: Vec<String>,
    /// Bar heights, parallel to `x`.
    pub y: Vec<u64>,
    /// Bar color.
    pub marker: Marker,
}

/// Marker styling: one color for the whole trace or one per point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Single color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Per-point colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

impl Marker {
    /// A single-color marker.
    #[must_use]
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            colors: None,
        }
    }

    /// A per-point color marker.
    #[must_use]
    pub fn colors<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            color: None,
            colors: Some(colors.into_iter().map(Into::into).collect()),
        }
    }
}

/// Figure layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Chart title.
    pub title: String,
    /// Height in pixels.
    pub height: u32,
    /// Whether the legend is drawn; Plotly decides when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    /// Horizontal axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    /// Vertical axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

impl Layout {
    /// Creates a layout with a title and height.
    #[must_use]
    pub fn new(title: impl Into<String>, height: u32) -> Self {
        Self {
            title: title.into(),
            height,
            showlegend: None,
            xaxis: None,
            yaxis: None,
        }
    }

    /// Shows or hides the legend.
    #[must_use]
    pub fn with_legend(mut self, show: bool) -> Self {
        self.showlegend = Some(show);
        self
    }

    /// Titles both axes.
    #[must_use]
    pub fn with_axes(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.xaxis = Some(Axis::titled(x_title));
        self.yaxis = Some(Axis::titled(y_title));
        self
    }
}

/// An axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Axis title.
    pub title: String,
}

impl Axis {
    /// Creates a titled axis.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trace_type_tag() {
        let figure = Figure::new(Layout::new("Bars", 300)).with_trace(BarTrace {
            x: vec!["A".into()],
            y: vec![2],
            marker: Marker::color("#000000"),
        });
        let value: serde_json::Value = serde_json::from_str(&figure.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "data": [{"type": "bar", "x": ["A"], "y": [2], "marker": {"color": "#000000"}}],
                "layout": {"title": "Bars", "height": 300}
            })
        );
    }

    #[test]
    fn test_layout_optional_fields() {
        let layout = Layout::new("T", 400).with_legend(true).with_axes("Date", "Count");
        let value = serde_json::to_value(layout).unwrap();
        assert_eq!(value["showlegend"], true);
        assert_eq!(value["xaxis"]["title"], "Date");
        assert_eq!(value["yaxis"]["title"], "Count");
    }

    #[test]
    fn test_from_json_rejects_unknown_trace() {
        let err = Figure::from_json(r#"{"data":[{"type":"heatmap"}],"layout":{"title":"x","height":1}}"#)
            .unwrap_err();
        assert!(matches!(err, ChartError::Deserialization(_)));
    }

    #[test]
    fn test_marker_colors() {
        let marker = Marker::colors(["#1", "#2"]);
        assert_eq!(marker.colors.as_deref().map(<[String]>::len), Some(2));
        assert!(marker.color.is_none());
    }
}
