use clap::Parser;
use sdk::{DEFAULT_AIRTABLE_BASE_ID, DEFAULT_AIRTABLE_TABLE_ID, DEFAULT_BASEROW_API_URL};

pub const DEFAULT_CALENDAR_URL: &str = "https://www.superiorcourt.maricopa.gov/calendar/today/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Destination {
    Airtable,
    Baserow,
}

#[derive(Debug, Parser)]
#[command(name = "docket-sync")]
#[command(about = "Scrapes the county court calendar and pushes hearings to a hosted table", long_about = None)]
pub struct Config {
    /// Which hosted table service receives the records
    #[arg(long, value_enum, env = "DESTINATION", default_value = "airtable")]
    pub destination: Destination,

    /// Court calendar page to scrape
    #[arg(long, env = "CALENDAR_URL", default_value = DEFAULT_CALENDAR_URL)]
    pub calendar_url: String,

    /// Airtable base holding the docket table
    #[arg(long, env = "AIRTABLE_BASE_ID", default_value = DEFAULT_AIRTABLE_BASE_ID)]
    pub airtable_base_id: String,

    /// Airtable table receiving the records
    #[arg(long, env = "AIRTABLE_TABLE_ID", default_value = DEFAULT_AIRTABLE_TABLE_ID)]
    pub airtable_table_id: String,

    /// Baserow instance, api.baserow.io or self-hosted
    #[arg(long, env = "BASEROW_API_URL", default_value = DEFAULT_BASEROW_API_URL)]
    pub baserow_api_url: String,

    /// Baserow table id, required when destination is baserow
    #[arg(long, env = "BASEROW_TABLE_ID")]
    pub baserow_table_id: Option<u32>,

    /// Parse and filter only, push nothing
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
