/// Floors whose hearings are never synced.
const RESTRICTED_FLOORS: [&str; 2] = ["2", "3"];

/// Floor value as printed in the calendar table. The page uses bare
/// numerals, so this stays a string rather than forcing a numeric parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor(String);

impl Floor {
    pub fn new(value: &str) -> Self {
        Floor(value.trim().to_string())
    }

    pub fn is_restricted(&self) -> bool {
        RESTRICTED_FLOORS.contains(&self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restricted_floors() {
        let test_cases = vec![
            ("2", true),
            ("3", true),
            ("1", false),
            ("4", false),
            ("12", false),
            ("", false),
            ("2A", false),
        ];

        for (input, expected) in test_cases {
            assert_eq!(Floor::new(input).is_restricted(), expected, "input: {input}");
        }
    }
}
