use std::str::FromStr;

use crate::schema::{Floor, HearingTime};

/// Column positions in the calendar table.
const COL_NAME: usize = 0;
const COL_FLOOR: usize = 2;
const COL_ROOM: usize = 3;
const COL_TIME: usize = 4;
const COL_CASE_NUMBER: usize = 5;

/// Rows narrower than this are separators or malformed markup.
pub const MIN_CELLS: usize = 7;

/// One data row of the public court calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct Hearing {
    pub name: String,
    pub floor: Floor,
    pub room: String,
    pub time: String,
    pub case_number: String,
}

impl Hearing {
    /// Builds a hearing from the trimmed cell texts of one `<tr>`.
    /// Returns `None` for rows with fewer than [`MIN_CELLS`] cells.
    pub fn from_cells(cells: &[String]) -> Option<Self> {
        if cells.len() < MIN_CELLS {
            return None;
        }

        Some(Hearing {
            name: cells[COL_NAME].clone(),
            floor: Floor::new(&cells[COL_FLOOR]),
            room: cells[COL_ROOM].clone(),
            time: cells[COL_TIME].clone(),
            case_number: cells[COL_CASE_NUMBER].clone(),
        })
    }

    /// The two sync filters: restricted floors are out, and so is
    /// anything scheduled before 9:00 AM. A time cell that does not
    /// parse counts as before nine.
    pub fn should_sync(&self) -> bool {
        if self.floor.is_restricted() {
            return false;
        }

        match HearingTime::from_str(&self.time) {
            Ok(time) => time.is_at_or_after_nine(),
            Err(_) => {
                tracing::debug!(time = %self.time, case_number = %self.case_number, "unparseable hearing time, treating as before nine");
                false
            }
        }
    }
}
