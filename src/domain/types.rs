//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - parsed straight from the two JSON data documents
//! - used in-memory by the session/classifier
//! - re-emitted in reports without conversion layers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the customer-type catalog.
///
/// The wire format is camelCase (`primaryMotivations`, `communicationStyle`,
/// ...), matching the published `customer-types.json` schema. All fields are
/// required; a record missing any of them is rejected at the load boundary
/// rather than propagated half-empty into rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerType {
    /// Unique short identifier, referenced by answer options as a type-tag.
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub characteristics: Vec<String>,
    pub traits: Vec<String>,
    pub primary_motivations: Vec<String>,
    pub communication_style: String,
    pub decision_time: String,
    pub engagement_tips: Vec<String>,
}

/// One selectable answer of a quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    /// Type-tag linking this option to a `CustomerType::id`.
    #[serde(rename = "type")]
    pub type_tag: String,
}

/// One quiz question with its ordered answer options.
///
/// Question order and option order both come from the data file and are
/// significant for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub answers: Vec<AnswerOption>,
}

/// The loaded customer-type catalog: ordered, read-only after startup.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: Vec<CustomerType>,
}

impl TypeCatalog {
    pub fn new(types: Vec<CustomerType>) -> Self {
        Self { types }
    }

    /// Look up a type by id (type-tag).
    pub fn get(&self, id: &str) -> Option<&CustomerType> {
        self.types.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterate in catalog (presentation) order.
    pub fn iter(&self) -> impl Iterator<Item = &CustomerType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Occurrence count for one type-tag.
///
/// Scores are kept as an explicit ordered list (first-seen order, then
/// stable-sorted by count) instead of a map, so tie-breaking never depends on
/// the iteration order of an associative container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeScore {
    pub tag: String,
    pub count: usize,
}

/// Output of classifying a completed answer sequence.
///
/// Derived, never mutated; recomputed fresh each time a quiz completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// The dominant type (full catalog record).
    pub primary: CustomerType,
    /// Every tag that appeared in the answers, count descending, ties in
    /// first-seen order. Tags absent from the answers are absent here.
    pub scores: Vec<TypeScore>,
}

impl ClassificationResult {
    /// Total number of answers that were tallied.
    pub fn total_answers(&self) -> usize {
        self.scores.iter().map(|s| s.count).sum()
    }
}

/// The app's navigable sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Quiz,
    Types,
    Strategies,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Quiz,
        Section::Types,
        Section::Strategies,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Quiz => "Quiz",
            Section::Types => "Types",
            Section::Strategies => "Strategies",
        }
    }
}

/// Schema of the persisted progress entry.
///
/// This is the only state the app writes to disk: the list of visited
/// sections (for the progress display) plus a timestamp of the last write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressFile {
    pub visited: Vec<Section>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_type_parses_camel_case_wire_format() {
        let json = r#"{
            "id": "driver",
            "name": "The Driver",
            "icon": "X",
            "color": "red",
            "characteristics": ["direct"],
            "traits": ["decisive"],
            "primaryMotivations": ["results"],
            "communicationStyle": "Short and direct.",
            "decisionTime": "Fast.",
            "engagementTips": ["get to the point"]
        }"#;

        let t: CustomerType = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, "driver");
        assert_eq!(t.primary_motivations, vec!["results".to_string()]);
        assert_eq!(t.decision_time, "Fast.");
    }

    #[test]
    fn customer_type_rejects_missing_required_field() {
        // No communicationStyle.
        let json = r#"{
            "id": "driver",
            "name": "The Driver",
            "icon": "X",
            "color": "red",
            "characteristics": [],
            "traits": [],
            "primaryMotivations": [],
            "decisionTime": "Fast.",
            "engagementTips": []
        }"#;

        assert!(serde_json::from_str::<CustomerType>(json).is_err());
    }

    #[test]
    fn answer_option_maps_type_field() {
        let json = r#"{"text": "Show me the spec sheet", "type": "analytical"}"#;
        let opt: AnswerOption = serde_json::from_str(json).unwrap();
        assert_eq!(opt.type_tag, "analytical");
    }

    #[test]
    fn catalog_lookup_by_id() {
        let catalog = TypeCatalog::new(vec![sample_type("analytical"), sample_type("driver")]);
        assert!(catalog.contains("driver"));
        assert!(catalog.get("ghost-type").is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn section_round_trips_through_json_names() {
        let json = serde_json::to_string(&Section::Strategies).unwrap();
        assert_eq!(json, "\"strategies\"");
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Section::Strategies);
    }

    fn sample_type(id: &str) -> CustomerType {
        CustomerType {
            id: id.to_string(),
            name: format!("The {id}"),
            icon: "*".to_string(),
            color: "blue".to_string(),
            characteristics: vec!["c1".to_string()],
            traits: vec!["t1".to_string()],
            primary_motivations: vec!["m1".to_string()],
            communication_style: "style".to_string(),
            decision_time: "time".to_string(),
            engagement_tips: vec!["tip".to_string()],
        }
    }
}
