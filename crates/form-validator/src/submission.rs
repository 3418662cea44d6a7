//! Raw Form Parsing

use crate::error::ParseError;
use serde::Deserialize;

/// Form fields exactly as posted.
///
/// Every field is optional so that a missing field reaches the parser and
/// is reported with its name, instead of being rejected by the form
/// deserializer upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubmission {
    pub name: Option<String>,
    pub age: Option<String>,
    pub bmi: Option<String>,
    pub glucose: Option<String>,
    pub bp: Option<String>,
    pub insulin: Option<String>,
}

/// A well-formed submission ready for risk evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub name: String,
    pub age: f64,
    pub bmi: f64,
    pub glucose: f64,
    pub bp: f64,
    pub insulin: f64,
}

impl RawSubmission {
    /// Parse into a well-formed submission.
    ///
    /// Fields are checked in form order and the first invalid one wins.
    /// The name may be any text; numeric fields parse as floating point
    /// after trimming surrounding whitespace.
    pub fn parse(self) -> Result<Submission, ParseError> {
        let name = self.name.ok_or(ParseError::MissingField("name"))?;
        let age = parse_number("age", self.age)?;
        let bmi = parse_number("bmi", self.bmi)?;
        let glucose = parse_number("glucose", self.glucose)?;
        let bp = parse_number("bp", self.bp)?;
        let insulin = parse_number("insulin", self.insulin)?;

        Ok(Submission {
            name,
            age,
            bmi,
            glucose,
            bp,
            insulin,
        })
    }
}

fn parse_number(field: &'static str, value: Option<String>) -> Result<f64, ParseError> {
    let value = value.ok_or(ParseError::MissingField(field))?;
    match value.trim().parse::<f64>() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(ParseError::NotNumeric { field, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, age: &str, bmi: &str, glucose: &str, bp: &str, insulin: &str) -> RawSubmission {
        RawSubmission {
            name: Some(name.to_string()),
            age: Some(age.to_string()),
            bmi: Some(bmi.to_string()),
            glucose: Some(glucose.to_string()),
            bp: Some(bp.to_string()),
            insulin: Some(insulin.to_string()),
        }
    }

    #[test]
    fn test_valid_submission() {
        let submission = raw("Alice", "50", "32", "100", "80", "15").parse().unwrap();
        assert_eq!(submission.name, "Alice");
        assert_eq!(submission.age, 50.0);
        assert_eq!(submission.bmi, 32.0);
        assert_eq!(submission.glucose, 100.0);
        assert_eq!(submission.bp, 80.0);
        assert_eq!(submission.insulin, 15.0);
    }

    #[test]
    fn test_whitespace_and_decimals() {
        let submission = raw("Bob", " 41.5 ", "28.1", "139.9", "72", "9.5").parse().unwrap();
        assert_eq!(submission.age, 41.5);
        assert_eq!(submission.glucose, 139.9);
    }

    #[test]
    fn test_missing_name() {
        let mut input = raw("x", "50", "32", "100", "80", "15");
        input.name = None;
        assert_eq!(input.parse().unwrap_err(), ParseError::MissingField("name"));
    }

    #[test]
    fn test_missing_numeric_field() {
        let mut input = raw("Alice", "50", "32", "100", "80", "15");
        input.insulin = None;
        assert_eq!(
            input.parse().unwrap_err(),
            ParseError::MissingField("insulin")
        );
    }

    #[test]
    fn test_non_numeric_field() {
        let err = raw("Alice", "abc", "32", "100", "80", "15").parse().unwrap_err();
        assert_eq!(
            err,
            ParseError::NotNumeric {
                field: "age",
                value: "abc".to_string()
            }
        );
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_first_invalid_field_wins() {
        let mut input = raw("Alice", "oops", "also bad", "100", "80", "15");
        input.glucose = None;
        assert_eq!(
            input.parse().unwrap_err(),
            ParseError::NotNumeric {
                field: "age",
                value: "oops".to_string()
            }
        );
    }

    #[test]
    fn test_empty_name_is_accepted() {
        // Only presence is required; the name is free text
        let submission = raw("", "30", "22", "90", "70", "10").parse().unwrap();
        assert_eq!(submission.name, "");
    }
}
