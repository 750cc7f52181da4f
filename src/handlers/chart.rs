use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use crate::utils::build_chart;
use crate::AppState;

#[get("/chart")]
pub async fn get_chart_handler(data: web::Data<AppState>) -> impl Responder {
	let entries = match data.store.list_entries().await {
		Ok(entries) => entries,
		Err(err) => {
			log::error!("failed to read entries: {}", err);
			Vec::new()
		}
	};

	let chart = build_chart(&entries);

	HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({ "chart": &chart })
	}))
}
