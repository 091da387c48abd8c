pub mod error;
pub mod query_selectors;
pub mod schema;

use crate::error::DocketError;
use crate::query_selectors::DocketTableSelectors;
use crate::schema::Hearing;
use scraper::Html;

/// Parses the court calendar page and returns every data row of the
/// calendar table, header excluded. Filtering is the caller's business.
pub fn parse_docket(html: &str) -> Result<Vec<Hearing>, DocketError> {
	let document = Html::parse_document(html);
	let selectors = DocketTableSelectors::new();
	let rows = query_selectors::parse_docket_rows(&document, &selectors)?;
	Ok(rows.collect())
}
