use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Machine-readable record of a showcase run, written as pretty JSON when
/// a report path is configured.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShowcaseReport {
    pub id: String,
    pub timestamp: String,
    pub seed: u64,
    pub sections: Vec<SectionReport>,
}

impl ShowcaseReport {
    pub fn new(id: impl Into<String>, seed: u64, sections: Vec<SectionReport>) -> Self {
        Self {
            id: id.into(),
            timestamp: Utc::now().to_rfc3339(),
            seed,
            sections,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SectionReport {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transcript: Vec<String>,
    pub entities: serde_json::Value,
}

impl SectionReport {
    pub fn new(
        name: impl Into<String>,
        transcript: Vec<String>,
        entities: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            transcript,
            entities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_round_trips_through_json() {
        let report = ShowcaseReport::new(
            "run-test",
            42,
            vec![SectionReport::new(
                "heroes",
                vec!["line".into()],
                serde_json::json!([{ "name": "Iron Man" }]),
            )],
        );
        let encoded = serde_json::to_string_pretty(&report).unwrap();
        let decoded: ShowcaseReport = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.id, "run-test");
        assert_eq!(decoded.seed, 42);
        assert_eq!(decoded.sections.len(), 1);
    }
}
