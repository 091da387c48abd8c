use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum TableApiError {
	#[error("HTTP client error: {0}")]
	Transport(#[from] reqwest::Error),

	#[error("{service} rejected record create with status {status}: {body}")]
	Api { service: &'static str, status: StatusCode, body: String },

	#[error("Missing credential: environment variable {0} is not set")]
	MissingCredential(&'static str),
}

impl TableApiError {
	pub fn api_error(service: &'static str, status: StatusCode, body: String) -> Self {
		TableApiError::Api { service, status, body }
	}
}
