use thiserror::Error;


#[derive(Debug, Error, PartialEq)]
pub enum HearingTimeError {
    #[error("Invalid hearing time format: {time}")]
    InvalidTimeFormat { time: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum DocketError {
    #[error("Calendar table #{table_id} not found in page")]
    MissingTable { table_id: String },
}

impl HearingTimeError {
    pub fn invalid_time_format_error(time: &str) -> Self {
        HearingTimeError::InvalidTimeFormat {
            time: time.to_string(),
        }
    }
}

impl DocketError {
    pub fn missing_table_error(table_id: &str) -> Self {
        DocketError::MissingTable {
            table_id: table_id.to_string(),
        }
    }
}
