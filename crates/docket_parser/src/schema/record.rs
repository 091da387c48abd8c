use serde::Serialize;

use crate::schema::Hearing;

/// Flat record shape pushed to the hosted table. Serde renames carry the
/// destination column names, so serializing a record *is* the field
/// mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocketRecord {
    #[serde(rename = "Suspect Name")]
    pub suspect_name: String,
    #[serde(rename = "Building")]
    pub building: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Case #")]
    pub case_number: String,
}

impl From<&Hearing> for DocketRecord {
    fn from(hearing: &Hearing) -> Self {
        DocketRecord {
            suspect_name: hearing.name.clone(),
            // The destination table tracks buildings; the calendar only
            // prints rooms, so the room value goes out as the building.
            building: hearing.room.clone(),
            time: hearing.time.clone(),
            case_number: hearing.case_number.clone(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Floor;

    #[test]
    fn test_record_field_names() {
        let record = DocketRecord {
            suspect_name: "DOE, JOHN".to_string(),
            building: "5A".to_string(),
            time: "10:30 AM".to_string(),
            case_number: "CR2024-001234".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "Suspect Name": "DOE, JOHN",
                "Building": "5A",
                "Time": "10:30 AM",
                "Case #": "CR2024-001234",
            })
        );
    }

    #[test]
    fn test_record_from_hearing_sends_room_as_building() {
        let hearing = Hearing {
            name: "DOE, JOHN".to_string(),
            floor: Floor::new("5"),
            room: "5A".to_string(),
            time: "10:30 AM".to_string(),
            case_number: "CR2024-001234".to_string(),
        };

        let record = DocketRecord::from(&hearing);

        assert_eq!(record.building, "5A");
        assert_eq!(record.suspect_name, "DOE, JOHN");
    }
}
