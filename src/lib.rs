pub mod config;
pub mod handlers;
pub mod models;
pub mod store;
pub mod utils;
pub mod validation;

use std::sync::Arc;

use store::EntryStore;

pub struct AppState {
	pub store: Arc<dyn EntryStore>,
}
