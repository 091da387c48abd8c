use std::env;

use serde::{Deserialize, Serialize};

use crate::TableApiError;

pub const DEFAULT_BASEROW_API_URL: &str = "https://api.baserow.io";

pub const BASEROW_TOKEN_ENV: &str = "BASEROW_TOKEN";

pub struct BaserowClient {
	http: reqwest::Client,
	token: String,
	api_url: String,
	table_id: u32,
}

#[derive(Debug, Deserialize)]
pub struct CreatedRow {
	pub id: u64,
}

impl BaserowClient {
	pub fn new(token: String, api_url: String, table_id: u32) -> Self {
		BaserowClient {
			http: reqwest::Client::new(),
			token,
			api_url,
			table_id,
		}
	}

	pub fn from_env(api_url: String, table_id: u32) -> Result<Self, TableApiError> {
		let token = env::var(BASEROW_TOKEN_ENV).map_err(|_| TableApiError::MissingCredential(BASEROW_TOKEN_ENV))?;

		Ok(Self::new(token, api_url, table_id))
	}

	fn rows_url(&self) -> String {
		// user_field_names lets the row body use column names instead of
		// Baserow's internal field_NNN ids.
		format!("{}/api/database/rows/table/{}/?user_field_names=true", self.api_url.trim_end_matches('/'), self.table_id)
	}

	/// Creates one row. Unlike Airtable there is no envelope; the row
	/// serializes directly as the request body.
	pub async fn create_row<T: Serialize>(&self, row: &T) -> Result<CreatedRow, TableApiError> {
		let response = self
			.http
			.post(self.rows_url())
			.header("Authorization", format!("Token {}", self.token))
			.json(row)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(TableApiError::api_error("baserow", status, body));
		}

		Ok(response.json().await?)
	}
}
