mod config;

use anyhow::Context;
use clap::Parser;
use docket_parser::schema::DocketRecord;
use sdk::{AirtableClient, BaserowClient};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, Destination};

#[derive(Debug, Default)]
struct PushSummary {
	pushed: usize,
	failed: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let config = Config::parse();
	init_tracing();

	let html = fetch_calendar(&config.calendar_url).await?;
	let hearings = docket_parser::parse_docket(&html)?;
	let records: Vec<DocketRecord> = hearings.iter().filter(|hearing| hearing.should_sync()).map(DocketRecord::from).collect();

	tracing::info!(scraped = hearings.len(), syncable = records.len(), "parsed court calendar");

	if config.dry_run {
		for record in &records {
			tracing::info!(?record, "dry run, not pushing");
		}
		return Ok(());
	}

	let summary = push_records(&config, &records).await?;

	tracing::info!(pushed = summary.pushed, failed = summary.failed, "sync finished");

	if summary.pushed == 0 && !records.is_empty() {
		anyhow::bail!("no records could be pushed ({} attempted)", records.len());
	}

	Ok(())
}

fn init_tracing() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();
}

async fn fetch_calendar(url: &str) -> anyhow::Result<String> {
	let response = reqwest::get(url).await.context(format!("could not fetch {url}"))?;
	let response = response.error_for_status()?;

	Ok(response.text().await?)
}

async fn push_records(config: &Config, records: &[DocketRecord]) -> anyhow::Result<PushSummary> {
	let mut summary = PushSummary::default();

	match config.destination {
		Destination::Airtable => {
			let client = AirtableClient::from_env(config.airtable_base_id.clone(), config.airtable_table_id.clone())?;

			for record in records {
				match client.create_record(record).await {
					Ok(created) => {
						tracing::debug!(id = %created.id, case_number = %record.case_number, "record created");
						summary.pushed += 1;
					}
					Err(e) => {
						tracing::error!(error = %e, case_number = %record.case_number, "record create failed");
						summary.failed += 1;
					}
				}
			}
		}
		Destination::Baserow => {
			let table_id = config
				.baserow_table_id
				.context("--baserow-table-id (or BASEROW_TABLE_ID) is required for the baserow destination")?;
			let client = BaserowClient::from_env(config.baserow_api_url.clone(), table_id)?;

			for record in records {
				match client.create_row(record).await {
					Ok(created) => {
						tracing::debug!(id = created.id, case_number = %record.case_number, "row created");
						summary.pushed += 1;
					}
					Err(e) => {
						tracing::error!(error = %e, case_number = %record.case_number, "row create failed");
						summary.failed += 1;
					}
				}
			}
		}
	}

	Ok(summary)
}
