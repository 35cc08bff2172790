use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single grade given by a reviewer to a movie.
///
/// Field names serialize in PascalCase so existing `ratings.json` exports load
/// without conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Review {
    pub reviewer: i32,
    pub movie: i32,
    pub grade: i32, // Expected 1-5, not enforced
    #[serde(with = "review_date")]
    pub review_date: DateTime<Utc>,
}

impl Review {
    pub fn new(reviewer: i32, movie: i32, grade: i32, review_date: DateTime<Utc>) -> Self {
        Self {
            reviewer,
            movie,
            grade,
            review_date,
        }
    }
}

/// Review dates are written as RFC 3339. On read, timestamps without an offset
/// (`2005-09-06T00:00:00`) are taken as UTC.
mod review_date {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub(super) fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
            return Ok(date.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(|e| format!("invalid review date '{}': {}", raw, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_pascal_case_with_naive_date() {
        let json = r#"{"Reviewer":1,"Movie":822109,"Grade":4,"ReviewDate":"2005-09-06T00:00:00"}"#;
        let review: Review = serde_json::from_str(json).unwrap();

        assert_eq!(review.reviewer, 1);
        assert_eq!(review.movie, 822109);
        assert_eq!(review.grade, 4);
        assert_eq!(review.review_date, Utc.with_ymd_and_hms(2005, 9, 6, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_deserialize_date_with_offset() {
        let json = r#"{"Reviewer":2,"Movie":3,"Grade":5,"ReviewDate":"2020-01-01T12:00:00+02:00"}"#;
        let review: Review = serde_json::from_str(json).unwrap();

        assert_eq!(review.review_date, Utc.with_ymd_and_hms(2020, 1, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_serialize_uses_pascal_case() {
        let review = Review::new(7, 8, 3, Utc.with_ymd_and_hms(2021, 5, 4, 0, 0, 0).unwrap());
        let value = serde_json::to_value(&review).unwrap();

        assert_eq!(value["Reviewer"], 7);
        assert_eq!(value["Movie"], 8);
        assert_eq!(value["Grade"], 3);
        assert!(value["ReviewDate"].as_str().unwrap().starts_with("2021-05-04T00:00:00"));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let json = r#"{"Reviewer":1,"Movie":1,"Grade":1,"ReviewDate":"yesterday"}"#;
        assert!(serde_json::from_str::<Review>(json).is_err());
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let date = review_date::parse("2019-03-02T10:11:12.500").unwrap();
        assert_eq!(date.timestamp_subsec_millis(), 500);
    }
}
