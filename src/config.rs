#[derive(Debug, Clone)]
pub struct Config {
	pub supabase_url: String,
	pub supabase_anon_key: String,
	pub supabase_table: String,
	pub host: String,
	pub port: u16,
}

impl Config {
	pub fn init() -> Config {
		let supabase_url = std::env::var("SUPABASE_URL").expect("SUPABASE_URL must be set");
		let supabase_anon_key =
			std::env::var("SUPABASE_ANON_KEY").expect("SUPABASE_ANON_KEY must be set");
		let supabase_table =
			std::env::var("SUPABASE_TABLE").unwrap_or_else(|_| String::from("super repas"));
		let host = std::env::var("HOST").unwrap_or_else(|_| String::from("127.0.0.1"));
		let port = std::env::var("PORT")
			.ok()
			.and_then(|port| port.parse().ok())
			.unwrap_or(8000);

		Config {
			supabase_url,
			supabase_anon_key,
			supabase_table,
			host,
			port,
		}
	}
}
