use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

use super_repas::config::Config;
use super_repas::handlers;
use super_repas::store::{EntryStore, SupabaseStore};
use super_repas::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	if std::env::var_os("RUST_LOG").is_none() {
		std::env::set_var("RUST_LOG", "actix_web=info");
	}
	dotenv().ok();
	env_logger::init();

	let config = Config::init();
	let store: Arc<dyn EntryStore> = Arc::new(SupabaseStore::new(&config));

	println!("🚀 Server started successfully");

	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(AppState {
				store: store.clone(),
			}))
			.configure(handlers::config)
			.wrap(Cors::permissive())
			.wrap(Logger::default())
	})
	.bind((config.host.as_str(), config.port))?
	.run()
	.await
}
