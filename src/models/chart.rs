use serde::Serialize;

/// Everything the line chart needs: ordered bucket labels plus one
/// index-aligned dataset per reviewer.
#[derive(Debug, Serialize, Clone)]
pub struct ChartData {
	pub labels: Vec<String>,
	pub datasets: Vec<ChartDataset>,
}

/// One reviewer's series, shaped for chart.js (hence the camelCase keys).
/// `data` and `points` both have exactly one slot per bucket label.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
	pub label: String,
	pub data: Vec<Option<f64>>,
	pub border_color: String,
	pub background_color: String,
	pub span_gaps: bool,
	pub points: Vec<Option<PointDetail>>,
}

/// Tooltip payload for one charted point.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PointDetail {
	pub restaurant_name: String,
	pub location: String,
	pub rating: f64,
	pub comment: String,
}
