use scraper::{ElementRef, Html, Selector};

use crate::error::DocketError;
use crate::schema::Hearing;

/// Element id of the calendar table on the court's daily page.
pub const CALENDAR_TABLE_ID: &str = "tblZebra";

pub struct DocketTableSelectors {
	pub table: Selector,
	pub row: Selector,
	pub cell: Selector,
}

impl DocketTableSelectors {
	pub fn new() -> Self {
		DocketTableSelectors {
			table: Selector::parse("table#tblZebra").unwrap(),
			row: Selector::parse("tr").unwrap(),
			cell: Selector::parse("td").unwrap(),
		}
	}
}

impl Default for DocketTableSelectors {
	fn default() -> Self {
		Self::new()
	}
}

pub struct DocketRowIterator<'a> {
	rows: std::iter::Skip<scraper::element_ref::Select<'a, 'a>>,
	selectors: &'a DocketTableSelectors,
}

impl<'a> DocketRowIterator<'a> {
	pub fn new(document: &'a Html, selectors: &'a DocketTableSelectors) -> Result<Self, DocketError> {
		let table = document
			.select(&selectors.table)
			.next()
			.ok_or_else(|| DocketError::missing_table_error(CALENDAR_TABLE_ID))?;

		Ok(DocketRowIterator {
			// First row is the header.
			rows: table.select(&selectors.row).skip(1),
			selectors,
		})
	}
}

impl<'a> Iterator for DocketRowIterator<'a> {
	type Item = Hearing;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let row = self.rows.next()?;
			let cells = collect_cells(row, self.selectors);

			if let Some(hearing) = Hearing::from_cells(&cells) {
				return Some(hearing);
			}

			tracing::debug!(cells = cells.len(), "skipping short calendar row");
		}
	}
}

fn collect_cells(row: ElementRef<'_>, selectors: &DocketTableSelectors) -> Vec<String> {
	row
		.select(&selectors.cell)
		.map(|cell| cell.text().collect::<String>().trim().to_string())
		.collect()
}

pub fn parse_docket_rows<'a>(document: &'a Html, selectors: &'a DocketTableSelectors) -> Result<DocketRowIterator<'a>, DocketError> {
	DocketRowIterator::new(document, selectors)
}


#[cfg(test)]
mod tests {
	use super::*;
	use crate::parse_docket;

	const CALENDAR_FIXTURE: &str = r#"
		<html><body>
		<table id="tblZebra">
			<tr>
				<th>Name</th><th>Type</th><th>Floor</th><th>Room</th>
				<th>Time</th><th>Case Number</th><th>Judge</th>
			</tr>
			<tr>
				<td> DOE, JOHN </td><td>Criminal</td><td>5</td><td>5A</td>
				<td>10:30 AM</td><td>CR2024-001234</td><td>Smith</td>
			</tr>
			<tr>
				<td>ROE, JANE</td><td>Criminal</td><td>2</td><td>2C</td>
				<td>11:00 AM</td><td>CR2024-005678</td><td>Jones</td>
			</tr>
			<tr>
				<td>POE, RICHARD</td><td>Criminal</td><td>6</td><td>6B</td>
				<td>8:30 AM</td><td>CR2024-009999</td><td>Smith</td>
			</tr>
			<tr>
				<td colspan="7">Continued on next page</td>
			</tr>
			<tr>
				<td>BLOGGS, JOE</td><td>Criminal</td><td>4</td><td>4D</td>
				<td>TBD</td><td>CR2024-004321</td><td>Jones</td>
			</tr>
		</table>
		</body></html>
	"#;

	#[test]
	fn test_parse_docket_skips_header_and_short_rows() {
		let hearings = parse_docket(CALENDAR_FIXTURE).unwrap();

		// 5 body rows, one of which is a single-cell separator.
		assert_eq!(hearings.len(), 4);
		assert_eq!(hearings[0].name, "DOE, JOHN");
		assert_eq!(hearings[0].room, "5A");
		assert_eq!(hearings[3].time, "TBD");
	}

	#[test]
	fn test_parse_docket_rows_then_filter() {
		let hearings = parse_docket(CALENDAR_FIXTURE).unwrap();
		let synced: Vec<_> = hearings.iter().filter(|h| h.should_sync()).collect();

		// Floor 2, the 8:30 AM row and the unparseable time all drop out.
		assert_eq!(synced.len(), 1);
		assert_eq!(synced[0].case_number, "CR2024-001234");
	}

	#[test]
	fn test_missing_table_is_an_error() {
		let document = Html::parse_document("<html><body><table id=\"other\"></table></body></html>");
		let selectors = DocketTableSelectors::new();

		let result = parse_docket_rows(&document, &selectors);

		assert!(matches!(result, Err(DocketError::MissingTable { .. })));
	}
}
