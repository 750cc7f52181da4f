use thiserror::Error;

/// Any failure reading or writing the remote table. Read paths swallow
/// this into an empty result; write paths surface the message verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
	#[error("store unavailable: {0}")]
	Request(#[from] reqwest::Error),

	#[error("{0}")]
	Rejected(String),
}
