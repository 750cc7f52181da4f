use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::Local;
use serde_json::json;

use crate::models::{AddEntrySchema, ReviewEntry, KNOWN_REVIEWERS};
use crate::store::{EntryColumn, StoreError};
use crate::validation::validate_entry;
use crate::AppState;

// Read failures are swallowed into empty results on purpose: the page
// renders with no data and the diagnostic goes to the log.
fn entries_or_empty(result: Result<Vec<ReviewEntry>, StoreError>) -> Vec<ReviewEntry> {
	result.unwrap_or_else(|err| {
		log::error!("failed to read entries: {}", err);
		Vec::new()
	})
}

fn values_or_empty(column: EntryColumn, result: Result<Vec<String>, StoreError>) -> Vec<String> {
	result.unwrap_or_else(|err| {
		log::error!("failed to read {} values: {}", column.as_str(), err);
		Vec::new()
	})
}

#[get("/entries")]
pub async fn get_entries_handler(data: web::Data<AppState>) -> impl Responder {
	let entries = entries_or_empty(data.store.list_entries().await);

	HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({
			"entries": &entries,
			"entries_count": entries.len()
		})
	}))
}

#[get("/restaurants")]
pub async fn get_restaurants_handler(data: web::Data<AppState>) -> impl Responder {
	let column = EntryColumn::RestaurantName;
	let restaurants = values_or_empty(column, data.store.distinct_values(column).await);

	HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({ "restaurants": restaurants })
	}))
}

#[get("/locations")]
pub async fn get_locations_handler(data: web::Data<AppState>) -> impl Responder {
	let column = EntryColumn::Location;
	let locations = values_or_empty(column, data.store.distinct_values(column).await);

	HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({ "locations": locations })
	}))
}

// Everything the entry form needs in one round trip; the three reads are
// independent and issued concurrently.
#[get("/form")]
pub async fn get_form_handler(data: web::Data<AppState>) -> impl Responder {
	let (restaurants, locations, entries) = tokio::join!(
		data.store.distinct_values(EntryColumn::RestaurantName),
		data.store.distinct_values(EntryColumn::Location),
		data.store.list_entries(),
	);

	let restaurants = values_or_empty(EntryColumn::RestaurantName, restaurants);
	let locations = values_or_empty(EntryColumn::Location, locations);
	let entries = entries_or_empty(entries);

	HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({
			"restaurants": restaurants,
			"locations": locations,
			"reviewers": KNOWN_REVIEWERS,
			"entries_count": entries.len()
		})
	}))
}

#[post("/entry")]
pub async fn add_entry_handler(
	body: web::Json<AddEntrySchema>,
	data: web::Data<AppState>,
) -> impl Responder {
	let entry = match validate_entry(&body, Local::now()) {
		Ok(entry) => entry,
		Err(err) => {
			return HttpResponse::BadRequest()
				.json(json!({"status": "error", "message": err.to_string()}));
		}
	};

	match data.store.insert_entry(&entry).await {
		Ok(()) => HttpResponse::Ok().json(json!({"status": "success"})),
		Err(err) => HttpResponse::InternalServerError()
			.json(json!({"status": "error", "message": err.to_string()})),
	}
}
