use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde_json::Value;

use crate::config::Config;
use crate::models::{NewEntry, ReviewEntry};
use crate::store::{EntryColumn, EntryStore, StoreError};

/// PostgREST client for the review table. The endpoint and anon key are
/// opaque configuration; the table name may contain spaces and gets
/// percent-encoded into the path.
pub struct SupabaseStore {
	client: Client,
	base_url: String,
	api_key: String,
	table: String,
}

impl SupabaseStore {
	pub fn new(config: &Config) -> SupabaseStore {
		SupabaseStore {
			client: Client::new(),
			base_url: config.supabase_url.trim_end_matches('/').to_string(),
			api_key: config.supabase_anon_key.clone(),
			table: config.supabase_table.clone(),
		}
	}

	fn table_url(&self) -> String {
		format!(
			"{}/rest/v1/{}",
			self.base_url,
			urlencoding::encode(&self.table)
		)
	}

	fn headers(&self) -> HeaderMap<HeaderValue> {
		let mut headers = HeaderMap::new();
		if let Ok(key) = self.api_key.parse() {
			headers.insert("apikey", key);
		}
		if let Ok(bearer) = format!("Bearer {}", self.api_key).parse() {
			headers.insert(header::AUTHORIZATION, bearer);
		}
		headers
	}

	async fn check(response: Response) -> Result<Response, StoreError> {
		if response.status().is_success() {
			return Ok(response);
		}

		let status = response.status();
		let message = response.text().await.unwrap_or_default();
		if message.is_empty() {
			Err(StoreError::Rejected(status.to_string()))
		} else {
			Err(StoreError::Rejected(message))
		}
	}
}

#[async_trait]
impl EntryStore for SupabaseStore {
	async fn list_entries(&self) -> Result<Vec<ReviewEntry>, StoreError> {
		let response = self
			.client
			.get(self.table_url())
			.headers(self.headers())
			.query(&[("select", "*")])
			.send()
			.await?;

		let entries = Self::check(response).await?.json().await?;

		Ok(entries)
	}

	async fn column_values(&self, column: EntryColumn) -> Result<Vec<String>, StoreError> {
		let response = self
			.client
			.get(self.table_url())
			.headers(self.headers())
			.query(&[("select", column.as_str())])
			.send()
			.await?;

		let rows: Vec<Value> = Self::check(response).await?.json().await?;

		Ok(rows
			.iter()
			.filter_map(|row| row.get(column.as_str()))
			.filter_map(Value::as_str)
			.map(str::to_string)
			.collect())
	}

	async fn insert_entry(&self, entry: &NewEntry) -> Result<(), StoreError> {
		let response = self
			.client
			.post(self.table_url())
			.headers(self.headers())
			.header("Prefer", "return=minimal")
			.json(&[entry])
			.send()
			.await?;

		Self::check(response).await?;

		Ok(())
	}
}
