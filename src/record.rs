//! Record schema shared by the typed decoders and the generator

use serde::{Deserialize, Serialize};

/// First checksum field
pub const INTEGER_1: &str = "integer_1";
/// Second checksum field
pub const INTEGER_2: &str = "integer_2";

/// One input record in typed form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub integer_1: i64,
    pub integer_2: i64,
    pub float_1: f64,
    pub float_2: f64,
    pub bool: bool,
    pub words: Vec<String>,
    pub str: String,
    /// Kept as the raw string, never parsed
    pub datetime: String,
    pub coordinates: Coordinates,
    /// Required key, usually holding `null`
    pub null: serde_json::Value,
}

/// Nested coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Record {
    /// Sum of the two checksum fields
    pub fn checksum(&self) -> i64 {
        self.integer_1.wrapping_add(self.integer_2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_json() {
        let json = r#"{"integer_1": 5, "integer_2": -2, "float_1": 1.5, "float_2": 0, "bool": true, "words": ["a"], "str": "s", "datetime": "2024-01-01T00:00:00Z", "coordinates": {"longitude": 1.0, "latitude": 2.0}, "null": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.integer_1, 5);
        assert_eq!(record.float_2, 0.0);
        assert_eq!(record.words, vec!["a"]);
        assert_eq!(record.coordinates.latitude, 2.0);
        assert!(record.null.is_null());
        assert_eq!(record.checksum(), 3);
    }

    #[test]
    fn test_null_field_serializes_as_null() {
        let record = Record {
            integer_1: 1,
            integer_2: 2,
            float_1: 0.5,
            float_2: -0.5,
            bool: false,
            words: vec![],
            str: String::new(),
            datetime: "2020-01-01T00:00:00 UTC".to_string(),
            coordinates: Coordinates {
                longitude: 0.0,
                latitude: 0.0,
            },
            null: serde_json::Value::Null,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""null":null"#));
    }

    #[test]
    fn test_missing_null_key_is_rejected() {
        let json = r#"{"integer_1": 1, "integer_2": 1, "float_1": 1.5, "float_2": 0, "bool": true, "words": [], "str": "s", "datetime": "d", "coordinates": {"longitude": 1.0, "latitude": 2.0}}"#;
        let err = serde_json::from_str::<Record>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `null`"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"integer_2": 1, "float_1": 1.5, "float_2": 0, "bool": true, "words": [], "str": "s", "datetime": "d", "coordinates": {"longitude": 1.0, "latitude": 2.0}, "null": null}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}
