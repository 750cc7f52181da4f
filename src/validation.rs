use chrono::{DateTime, Local, LocalResult, NaiveDate, SecondsFormat, TimeZone, Timelike, Utc};
use thiserror::Error;

use crate::models::{AddEntrySchema, NewEntry, KNOWN_REVIEWERS};

const LUNCH_HOUR: u32 = 12;
const DINNER_HOUR: u32 = 21;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
	#[error("{0} is required")]
	EmptyField(&'static str),

	#[error("unknown reviewer: {0}")]
	UnknownReviewer(String),

	#[error("rating must be a number")]
	InvalidRating,

	#[error("rating must be between 0 and 10")]
	RatingOutOfRange,

	#[error("date must be a valid YYYY-MM-DD date")]
	InvalidDate,
}

/// Normalizes a comma decimal separator to a dot, parses, and rejects
/// anything outside [0, 10] so no out-of-range rating is ever submitted.
pub fn parse_rating(raw: &str) -> Result<f64, ValidationError> {
	let normalized = raw.trim().replace(',', ".");
	if normalized.is_empty() {
		return Err(ValidationError::EmptyField("rating"));
	}

	let rating: f64 = normalized
		.parse()
		.map_err(|_| ValidationError::InvalidRating)?;

	if !(0.0..=10.0).contains(&rating) {
		return Err(ValidationError::RatingOutOfRange);
	}

	Ok(rating)
}

/// The entry timestamp is synthesized, not user-picked: the chosen date at
/// 12:00 local when "now" is before 17:00 local, else at 21:00 local,
/// converted to UTC.
pub fn meal_time_utc(
	date: NaiveDate,
	now: DateTime<Local>,
) -> Result<DateTime<Utc>, ValidationError> {
	let hour = if now.hour() < 17 { LUNCH_HOUR } else { DINNER_HOUR };
	let naive = date
		.and_hms_opt(hour, 0, 0)
		.ok_or(ValidationError::InvalidDate)?;

	let local = match Local.from_local_datetime(&naive) {
		LocalResult::Single(instant) => instant,
		LocalResult::Ambiguous(earliest, _) => earliest,
		LocalResult::None => return Err(ValidationError::InvalidDate),
	};

	Ok(local.with_timezone(&Utc))
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
	if value.trim().is_empty() {
		return Err(ValidationError::EmptyField(field));
	}
	Ok(())
}

/// Checks every form field and assembles the row to insert.
pub fn validate_entry(
	schema: &AddEntrySchema,
	now: DateTime<Local>,
) -> Result<NewEntry, ValidationError> {
	require("restaurant_name", &schema.restaurant_name)?;
	require("reviewer_name", &schema.reviewer_name)?;
	require("comment", &schema.comment)?;
	require("location", &schema.location)?;
	require("date", &schema.date)?;

	if !KNOWN_REVIEWERS.contains(&schema.reviewer_name.as_str()) {
		return Err(ValidationError::UnknownReviewer(
			schema.reviewer_name.clone(),
		));
	}

	let rating = parse_rating(&schema.rating)?;

	let date = NaiveDate::parse_from_str(schema.date.trim(), "%Y-%m-%d")
		.map_err(|_| ValidationError::InvalidDate)?;
	let created_at = meal_time_utc(date, now)?;

	Ok(NewEntry {
		restaurant_name: schema.restaurant_name.trim().to_string(),
		reviewer_name: schema.reviewer_name.clone(),
		rating,
		comment: schema.comment.trim().to_string(),
		location: schema.location.trim().to_string(),
		created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
		umai: schema.umai.unwrap_or(false),
	})
}
