//! Citation types shared by copilot responses

use serde::{Deserialize, Serialize};

/// Category label attached to a citation
///
/// The fixed set is used only for display color-coding; unknown labels are
/// preserved verbatim rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CitationCategory {
    /// A diagnosed condition
    Condition,
    /// A prescribed or administered medication
    Medication,
    /// A clinical observation
    Observation,
    /// A performed procedure
    Procedure,
    /// Patient demographics or identity
    Patient,
    /// Any other backend-supplied label, preserved verbatim
    Other(String),
}

impl From<String> for CitationCategory {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "condition" => Self::Condition,
            "medication" => Self::Medication,
            "observation" => Self::Observation,
            "procedure" => Self::Procedure,
            "patient" => Self::Patient,
            _ => Self::Other(s),
        }
    }
}

impl From<CitationCategory> for String {
    fn from(c: CitationCategory) -> Self {
        c.as_str().to_string()
    }
}

impl CitationCategory {
    /// Returns the wire label for this category
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Condition => "condition",
            Self::Medication => "medication",
            Self::Observation => "observation",
            Self::Procedure => "procedure",
            Self::Patient => "patient",
            Self::Other(s) => s,
        }
    }
}

/// Auxiliary citation metadata
///
/// Typed-or-absent: when the backend attaches extra detail it arrives as
/// known optional fields, never as an untyped bag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CitationExtra {
    /// Date the cited record was made
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Clinical code attached to the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Record status (e.g. active, resolved)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A backend-supplied evidence snippet shown to justify the answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Citation {
    /// Identifier of the cited record
    pub id: i64,

    /// Display text of the evidence snippet
    pub text: String,

    /// Category label, `type` on the wire
    #[serde(rename = "type")]
    pub category: CitationCategory,

    /// Advisory relevance score in [0, 1]; display-only, never used for
    /// re-sorting
    #[serde(default)]
    pub relevance: f64,

    /// Label of the source document the snippet came from
    #[serde(default)]
    pub source: String,

    /// Auxiliary metadata, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CitationExtra>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_parses_known_labels_case_insensitively() {
        assert_eq!(
            CitationCategory::from("Condition".to_string()),
            CitationCategory::Condition
        );
        assert_eq!(
            CitationCategory::from("MEDICATION".to_string()),
            CitationCategory::Medication
        );
    }

    #[test]
    fn category_preserves_unknown_label() {
        let c = CitationCategory::from("immunization".to_string());
        assert_eq!(c, CitationCategory::Other("immunization".to_string()));
        assert_eq!(c.as_str(), "immunization");
    }

    #[test]
    fn citation_deserializes_wire_type_field() {
        let v = json!({
            "id": 7,
            "text": "Essential hypertension",
            "type": "condition",
            "relevance": 0.91,
            "source": "conditions.json"
        });
        let c: Citation = serde_json::from_value(v).unwrap();
        assert_eq!(c.category, CitationCategory::Condition);
        assert!(c.metadata.is_none());
    }

    #[test]
    fn citation_metadata_is_typed_when_present() {
        let v = json!({
            "id": 1,
            "text": "Lisinopril 10mg",
            "type": "medication",
            "relevance": 0.7,
            "source": "medications.json",
            "metadata": { "status": "active" }
        });
        let c: Citation = serde_json::from_value(v).unwrap();
        let extra = c.metadata.unwrap();
        assert_eq!(extra.status.as_deref(), Some("active"));
        assert!(extra.date.is_none());
    }

    #[test]
    fn category_round_trips_through_wire_string() {
        let c: CitationCategory = serde_json::from_value(json!("procedure")).unwrap();
        assert_eq!(serde_json::to_value(&c).unwrap(), json!("procedure"));
    }
}
