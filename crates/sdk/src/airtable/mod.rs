use std::env;

use serde::{Deserialize, Serialize};

use crate::TableApiError;

pub const AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";

/// Name of the env var holding the Airtable API key. Kept as the bare
/// `KEY` the CI secret has always been stored under.
pub const AIRTABLE_KEY_ENV: &str = "KEY";

pub const DEFAULT_AIRTABLE_BASE_ID: &str = "appklERHZIa2OuacR";
pub const DEFAULT_AIRTABLE_TABLE_ID: &str = "tblb0yIYr91PzghXQ";

pub struct AirtableClient {
	http: reqwest::Client,
	api_key: String,
	base_id: String,
	table_id: String,
}

#[derive(Debug, Serialize)]
struct CreateRecordRequest<'a, T: Serialize> {
	fields: &'a T,
}

#[derive(Debug, Deserialize)]
pub struct CreatedRecord {
	pub id: String,
}

impl AirtableClient {
	pub fn new(api_key: String, base_id: String, table_id: String) -> Self {
		AirtableClient {
			http: reqwest::Client::new(),
			api_key,
			base_id,
			table_id,
		}
	}

	pub fn from_env(base_id: String, table_id: String) -> Result<Self, TableApiError> {
		let api_key = env::var(AIRTABLE_KEY_ENV).map_err(|_| TableApiError::MissingCredential(AIRTABLE_KEY_ENV))?;

		Ok(Self::new(api_key, base_id, table_id))
	}

	fn records_url(&self) -> String {
		format!("{AIRTABLE_API_URL}/{}/{}", self.base_id, self.table_id)
	}

	/// Creates one record. The record type's serialized keys must match
	/// the destination column names; Airtable wants them wrapped in a
	/// `fields` envelope.
	pub async fn create_record<T: Serialize>(&self, fields: &T) -> Result<CreatedRecord, TableApiError> {
		let response = self
			.http
			.post(self.records_url())
			.bearer_auth(&self.api_key)
			.json(&CreateRecordRequest { fields })
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(TableApiError::api_error("airtable", status, body));
		}

		Ok(response.json().await?)
	}
}
