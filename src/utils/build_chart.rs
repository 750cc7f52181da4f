use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Timelike, Utc};

use crate::models::{ChartData, ChartDataset, PointDetail, ReviewEntry, KNOWN_REVIEWERS};

const BORDER_COLORS: [&str; 3] = ["#e11d48", "#2563eb", "#059669"];
const BACKGROUND_COLORS: [&str; 3] = ["#fca5a5", "#93c5fd", "#6ee7b7"];

/// Meal occasion, derived from the UTC hour of an entry's timestamp.
/// Lunch sorts before Dinner within one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MealPeriod {
	Lunch,
	Dinner,
}

impl MealPeriod {
	pub fn from_utc_hour(hour: u32) -> MealPeriod {
		if hour < 17 {
			MealPeriod::Lunch
		} else {
			MealPeriod::Dinner
		}
	}
}

impl fmt::Display for MealPeriod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MealPeriod::Lunch => write!(f, "Lunch"),
			MealPeriod::Dinner => write!(f, "Dinner"),
		}
	}
}

/// One chart x-axis point: a UTC calendar date plus a meal period.
/// The derived ordering (date ascending, Lunch before Dinner) is the
/// chart's bucket ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bucket {
	pub date: NaiveDate,
	pub meal: MealPeriod,
}

impl Bucket {
	pub fn label(&self) -> String {
		format!("{} {}", self.date.format("%Y-%m-%d"), self.meal)
	}
}

/// Buckets one entry, or `None` when `created_at` is missing or does not
/// parse as an ISO 8601 timestamp. Such rows are left off the chart.
pub fn entry_bucket(entry: &ReviewEntry) -> Option<Bucket> {
	let raw = entry.created_at.as_deref()?;
	let timestamp = DateTime::parse_from_rfc3339(raw).ok()?.with_timezone(&Utc);

	Some(Bucket {
		date: timestamp.date_naive(),
		meal: MealPeriod::from_utc_hour(timestamp.hour()),
	})
}

/// Pivots the flat entry set into sorted bucket labels plus one
/// bucket-aligned series per known reviewer.
///
/// A single `(reviewer, bucket)` index is built up front, so the cost is
/// linear in the entry count. By convention each pair holds at most one
/// entry; if the store ever returns more, the first entry by input
/// position wins.
pub fn build_chart(entries: &[ReviewEntry]) -> ChartData {
	let mut buckets: Vec<Bucket> = Vec::new();
	let mut index: HashMap<(&str, Bucket), &ReviewEntry> = HashMap::new();

	for entry in entries {
		let Some(bucket) = entry_bucket(entry) else {
			continue;
		};
		if !buckets.contains(&bucket) {
			buckets.push(bucket);
		}
		index.entry((entry.reviewer_name.as_str(), bucket)).or_insert(entry);
	}

	buckets.sort();

	let datasets = KNOWN_REVIEWERS
		.iter()
		.enumerate()
		.map(|(idx, reviewer)| {
			let matches: Vec<Option<&ReviewEntry>> = buckets
				.iter()
				.map(|bucket| index.get(&(*reviewer, *bucket)).copied())
				.collect();

			ChartDataset {
				label: reviewer.to_string(),
				data: matches.iter().map(|entry| entry.map(|e| e.rating)).collect(),
				border_color: BORDER_COLORS[idx].to_string(),
				background_color: BACKGROUND_COLORS[idx].to_string(),
				span_gaps: true,
				points: matches
					.iter()
					.map(|entry| {
						entry.map(|e| PointDetail {
							restaurant_name: e.restaurant_name.clone(),
							location: e.location.clone(),
							rating: e.rating,
							comment: e.comment.clone(),
						})
					})
					.collect(),
			}
		})
		.collect();

	ChartData {
		labels: buckets.iter().map(Bucket::label).collect(),
		datasets,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(reviewer: &str, created_at: &str, rating: f64) -> ReviewEntry {
		ReviewEntry {
			id: None,
			restaurant_name: String::from("Chez Test"),
			reviewer_name: reviewer.to_string(),
			rating,
			comment: String::from("bon"),
			location: String::from("Paris"),
			created_at: Some(created_at.to_string()),
			umai: false,
		}
	}

	#[test]
	fn lunch_dinner_split_at_seventeen_utc() {
		assert_eq!(MealPeriod::from_utc_hour(0), MealPeriod::Lunch);
		assert_eq!(MealPeriod::from_utc_hour(16), MealPeriod::Lunch);
		assert_eq!(MealPeriod::from_utc_hour(17), MealPeriod::Dinner);
		assert_eq!(MealPeriod::from_utc_hour(23), MealPeriod::Dinner);
	}

	#[test]
	fn three_rows_pivot_into_aligned_series() {
		let entries = vec![
			entry("Gaëtan", "2024-01-01T03:00:00Z", 7.0),
			entry("Gaëtan", "2024-01-01T20:00:00Z", 9.0),
			entry("Ferdinand", "2024-01-01T03:00:00Z", 5.0),
		];

		let chart = build_chart(&entries);

		assert_eq!(chart.labels, vec!["2024-01-01 Lunch", "2024-01-01 Dinner"]);
		assert_eq!(chart.datasets[0].data, vec![Some(7.0), Some(9.0)]);
		assert_eq!(chart.datasets[1].data, vec![Some(5.0), None]);
		assert_eq!(chart.datasets[2].data, vec![None, None]);
	}

	#[test]
	fn buckets_are_distinct_and_cover_input() {
		let entries = vec![
			entry("Gaëtan", "2024-01-02T12:00:00Z", 6.0),
			entry("Ferdinand", "2024-01-02T13:30:00Z", 7.0),
			entry("Lili-Rose", "2024-01-02T12:00:00Z", 8.0),
		];

		let chart = build_chart(&entries);

		assert_eq!(chart.labels, vec!["2024-01-02 Lunch"]);
	}

	#[test]
	fn buckets_sort_by_date_then_lunch_before_dinner() {
		let entries = vec![
			entry("Gaëtan", "2024-03-05T21:00:00Z", 4.0),
			entry("Gaëtan", "2024-03-05T12:00:00Z", 5.0),
			entry("Gaëtan", "2024-02-01T21:00:00Z", 6.0),
		];

		let chart = build_chart(&entries);

		assert_eq!(
			chart.labels,
			vec!["2024-02-01 Dinner", "2024-03-05 Lunch", "2024-03-05 Dinner"]
		);
	}

	#[test]
	fn every_series_is_bucket_aligned() {
		let entries = vec![
			entry("Gaëtan", "2024-01-01T12:00:00Z", 7.0),
			entry("Ferdinand", "2024-01-02T21:00:00Z", 8.0),
			entry("Lili-Rose", "2024-01-03T12:00:00Z", 9.0),
		];

		let chart = build_chart(&entries);

		assert_eq!(chart.datasets.len(), KNOWN_REVIEWERS.len());
		for dataset in &chart.datasets {
			assert_eq!(dataset.data.len(), chart.labels.len());
			assert_eq!(dataset.points.len(), chart.labels.len());
		}
	}

	#[test]
	fn pivot_is_input_order_independent() {
		let mut entries = vec![
			entry("Gaëtan", "2024-01-01T03:00:00Z", 7.0),
			entry("Gaëtan", "2024-01-01T20:00:00Z", 9.0),
			entry("Ferdinand", "2024-01-01T03:00:00Z", 5.0),
			entry("Lili-Rose", "2024-01-02T12:00:00Z", 6.5),
		];

		let forward = serde_json::to_value(build_chart(&entries)).unwrap();
		entries.reverse();
		let reversed = serde_json::to_value(build_chart(&entries)).unwrap();

		assert_eq!(forward, reversed);
	}

	#[test]
	fn unparseable_timestamps_are_excluded() {
		let broken = entry("Gaëtan", "not-a-date", 3.0);
		let mut missing = entry("Ferdinand", "", 4.0);
		missing.created_at = None;

		let entries = vec![
			broken,
			missing,
			entry("Lili-Rose", "2024-01-01T12:00:00Z", 8.0),
		];

		let chart = build_chart(&entries);

		assert_eq!(chart.labels, vec!["2024-01-01 Lunch"]);
		assert_eq!(chart.datasets[2].data, vec![Some(8.0)]);
	}

	#[test]
	fn first_entry_by_input_position_wins_a_duplicated_pair() {
		let mut first = entry("Gaëtan", "2024-01-01T12:00:00Z", 7.0);
		first.comment = String::from("first");
		let mut second = entry("Gaëtan", "2024-01-01T13:00:00Z", 2.0);
		second.comment = String::from("second");

		let chart = build_chart(&[first, second]);

		assert_eq!(chart.datasets[0].data, vec![Some(7.0)]);
		let point = chart.datasets[0].points[0].as_ref().unwrap();
		assert_eq!(point.comment, "first");
	}

	#[test]
	fn points_carry_the_full_entry_details() {
		let mut reviewed = entry("Ferdinand", "2024-01-01T20:00:00Z", 9.5);
		reviewed.restaurant_name = String::from("Ramen Ichiban");
		reviewed.location = String::from("Lyon");
		reviewed.comment = String::from("umai!");

		let chart = build_chart(&[reviewed]);

		assert_eq!(
			chart.datasets[1].points[0],
			Some(PointDetail {
				restaurant_name: String::from("Ramen Ichiban"),
				location: String::from("Lyon"),
				rating: 9.5,
				comment: String::from("umai!"),
			})
		);
		assert_eq!(chart.datasets[0].points[0], None);
	}

	#[test]
	fn offset_timestamps_bucket_by_utc_hour() {
		// 18:00+02:00 is 16:00 UTC, still lunch
		let entries = vec![entry("Gaëtan", "2024-01-01T18:00:00+02:00", 7.0)];

		let chart = build_chart(&entries);

		assert_eq!(chart.labels, vec!["2024-01-01 Lunch"]);
	}
}
