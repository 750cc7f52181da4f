use serde::{Deserialize, Serialize};

/// The fixed reviewer roster, in chart display order.
pub const KNOWN_REVIEWERS: [&str; 3] = ["Gaëtan", "Ferdinand", "Lili-Rose"];

/// One review row as read back from the store.
///
/// `created_at` stays a raw string so that rows with a missing or mangled
/// timestamp still deserialize; the pivot simply leaves them out of the chart.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReviewEntry {
	pub id: Option<i64>,
	pub restaurant_name: String,
	pub reviewer_name: String,
	pub rating: f64,
	pub comment: String,
	pub location: String,
	pub created_at: Option<String>,
	#[serde(default)]
	pub umai: bool,
}

/// A validated row ready to be written to the store.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NewEntry {
	pub restaurant_name: String,
	pub reviewer_name: String,
	pub rating: f64,
	pub comment: String,
	pub location: String,
	pub created_at: String,
	pub umai: bool,
}

/// Raw form submission. `rating` arrives as text and may use a comma
/// decimal separator; `date` is `YYYY-MM-DD`.
#[derive(Debug, Deserialize, Clone)]
pub struct AddEntrySchema {
	pub restaurant_name: String,
	pub reviewer_name: String,
	pub rating: String,
	pub comment: String,
	pub location: String,
	pub date: String,
	pub umai: Option<bool>,
}
