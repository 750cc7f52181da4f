pub mod error;
pub mod supabase;

pub use self::error::StoreError;
pub use self::supabase::SupabaseStore;

use std::collections::HashSet;

use async_trait::async_trait;

use crate::models::{NewEntry, ReviewEntry};

/// The two user-extensible categorical columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryColumn {
	RestaurantName,
	Location,
}

impl EntryColumn {
	pub fn as_str(&self) -> &'static str {
		match self {
			EntryColumn::RestaurantName => "restaurant_name",
			EntryColumn::Location => "location",
		}
	}
}

/// The remote review table. Three operations, no caching, no retry;
/// every read pulls the full table and row order is not guaranteed.
#[async_trait]
pub trait EntryStore: Send + Sync {
	async fn list_entries(&self) -> Result<Vec<ReviewEntry>, StoreError>;

	/// Raw projection of one column, duplicates and all.
	async fn column_values(&self, column: EntryColumn) -> Result<Vec<String>, StoreError>;

	async fn insert_entry(&self, entry: &NewEntry) -> Result<(), StoreError>;

	/// De-duplicated column values, in first-occurrence order (not sorted).
	async fn distinct_values(&self, column: EntryColumn) -> Result<Vec<String>, StoreError> {
		Ok(dedup_first_occurrence(self.column_values(column).await?))
	}
}

/// Drops blank values and keeps the first occurrence of each remaining one.
pub fn dedup_first_occurrence(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	values
		.into_iter()
		.filter(|value| !value.is_empty())
		.filter(|value| seen.insert(value.clone()))
		.collect()
}
