use std::str::FromStr;

use chrono::NaiveTime;

use crate::error::HearingTimeError;

/// Hearings that start before this are not synced.
fn nine_am() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap()
}

/// Start time of a hearing as printed on the calendar, 12-hour clock
/// (e.g. `10:30 AM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HearingTime(NaiveTime);

impl HearingTime {
    pub fn new(time: NaiveTime) -> Self {
        HearingTime(time)
    }

    pub fn is_at_or_after_nine(&self) -> bool {
        self.0 >= nine_am()
    }
}

impl FromStr for HearingTime {
    type Err = HearingTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s.trim(), "%I:%M %p")
            .map_err(|_| HearingTimeError::invalid_time_format_error(s))?;

        Ok(HearingTime(time))
    }
}
