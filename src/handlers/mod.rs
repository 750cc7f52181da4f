pub mod chart;
pub mod config;
pub mod entries;

pub use self::config::config;
