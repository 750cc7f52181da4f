use actix_web::web;

use crate::handlers::chart::get_chart_handler;
use crate::handlers::entries::add_entry_handler;
use crate::handlers::entries::get_entries_handler;
use crate::handlers::entries::get_form_handler;
use crate::handlers::entries::get_locations_handler;
use crate::handlers::entries::get_restaurants_handler;

pub fn config(conf: &mut web::ServiceConfig) {
	let scope = web::scope("/api")
		.service(get_entries_handler)
		.service(get_restaurants_handler)
		.service(get_locations_handler)
		.service(get_form_handler)
		.service(get_chart_handler)
		.service(add_entry_handler);

	conf.service(scope);
}
