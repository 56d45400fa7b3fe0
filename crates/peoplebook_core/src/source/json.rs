//! JSON file record source.
//!
//! The payload is a JSON array of person objects with camelCase keys, the
//! same shape the static `people.json` resource is served in.

use crate::model::person::{validate_people, Person};
use crate::source::{PeopleSource, SourceError, SourceResult};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Reads the record list from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFilePeopleSource {
    path: PathBuf,
}

impl JsonFilePeopleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PeopleSource for JsonFilePeopleSource {
    fn fetch_people(&self) -> SourceResult<Vec<Person>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        match parse_people_json(&raw) {
            Ok(people) => {
                info!(
                    "event=people_read module=source status=ok count={}",
                    people.len()
                );
                Ok(people)
            }
            Err(err) => {
                warn!("event=people_read module=source status=error reason={err}");
                Err(err)
            }
        }
    }
}

/// Parses and validates a people payload.
pub fn parse_people_json(raw: &str) -> SourceResult<Vec<Person>> {
    let people: Vec<Person> = serde_json::from_str(raw)?;
    validate_people(&people)?;
    Ok(people)
}

#[cfg(test)]
mod tests {
    use super::parse_people_json;
    use crate::source::SourceError;

    #[test]
    fn parse_accepts_empty_array() {
        assert!(parse_people_json("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_accepts_slugs_outside_the_lowercase_alphabet() {
        let raw = r#"[
            {"slug":"Anna_Smith","name":"Anna Smith","sex":"f","born":1850,"died":1900},
            {"slug":"karl.1820","name":"Karl","sex":"m","born":1820,"died":1880}
        ]"#;
        let people = parse_people_json(raw).expect("payload should load");
        assert_eq!(people[0].slug, "Anna_Smith");
        assert_eq!(people.len(), 2);
    }

    #[test]
    fn parse_rejects_non_array_payload() {
        let err = parse_people_json(r#"{"people": []}"#).unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
    }

    #[test]
    fn parse_rejects_unknown_sex() {
        let raw = r#"[{"slug":"x","name":"X","sex":"q","born":1,"died":2}]"#;
        assert!(matches!(
            parse_people_json(raw).unwrap_err(),
            SourceError::Malformed(_)
        ));
    }

    #[test]
    fn parse_rejects_invariant_violations() {
        let raw = r#"[
            {"slug":"x","name":"X","sex":"m","born":1900,"died":1950},
            {"slug":"x","name":"Y","sex":"f","born":1900,"died":1950}
        ]"#;
        assert!(matches!(
            parse_people_json(raw).unwrap_err(),
            SourceError::Invalid(_)
        ));
    }
}
