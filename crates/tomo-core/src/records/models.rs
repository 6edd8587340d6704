//! Record document shapes.
//!
//! These mirror the JSON written by the save extractor: one summary index
//! (`_summary.json`) and one detail document per character.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The summary index document: `{ "miis": { id: summary } }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryIndex {
    #[serde(default)]
    pub miis: BTreeMap<String, CharacterSummary>,
}

impl SummaryIndex {
    /// Summaries ordered by their stable `index`.
    pub fn into_sorted(self) -> Vec<CharacterSummary> {
        let mut summaries: Vec<_> = self.miis.into_values().collect();
        summaries.sort_by_key(|s| s.index);
        summaries
    }
}

/// One entry of the summary index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSummary {
    /// Stable ordering key.
    pub index: i64,
    /// Display name, also the join key for relationship targets.
    pub nickname: String,
    /// Detail document path, relative to the data directory.
    pub filename: String,
    #[serde(default)]
    pub personality_type: String,
}

impl CharacterSummary {
    /// Folder holding the character's documents and images.
    pub fn folder(&self) -> &str {
        self.filename.split('/').next().unwrap_or(&self.filename)
    }

    /// Relative path of an image inside the character's folder.
    pub fn image_path(&self, image: &str) -> String {
        format!("{}/{}", self.folder(), image)
    }
}

/// Per-character detail document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterDetail {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub personality: Personality,
    /// Raw relationship slots; decoded leniently by [`CharacterDetail::relationships`].
    #[serde(default)]
    pub relationships: Map<String, Value>,
}

impl CharacterDetail {
    /// Decoded relationship edges in slot order.
    ///
    /// Integer slot ids come first in numeric order, any other ids follow.
    /// Entries that do not decode are dropped.
    pub fn relationships(&self) -> Vec<RelationshipEdge> {
        let mut slots: Vec<(&String, &Value)> = self.relationships.iter().collect();
        slots.sort_by(|(a, _), (b, _)| compare_slot_ids(a, b));

        slots
            .into_iter()
            .filter_map(|(_, value)| RelationshipEdge::deserialize(value).ok())
            .collect()
    }
}

fn compare_slot_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Name and creator block of a detail document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub firstname: String,
    pub lastname: String,
    pub nickname: String,
    pub creator: String,
}

/// Personality block, e.g. `"easygoing dreamer"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personality {
    #[serde(rename = "type")]
    pub kind: String,
}

/// A single relationship slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipEdge {
    /// Relationship type code, `0` means "no relationship".
    #[serde(rename = "type", default)]
    pub kind: u32,
    #[serde(default)]
    pub type_name: String,
    /// Nickname of the other party.
    #[serde(default)]
    pub target_name: String,
    /// Relationship strength.
    #[serde(default)]
    pub value: f64,
}

/// A summary joined with its loaded detail document.
#[derive(Debug, Clone)]
pub struct Character {
    pub summary: CharacterSummary,
    pub detail: CharacterDetail,
}

impl Character {
    pub fn nickname(&self) -> &str {
        &self.summary.nickname
    }

    /// Personality string, preferring the detail document.
    pub fn personality_type(&self) -> &str {
        if self.detail.personality.kind.is_empty() {
            &self.summary.personality_type
        } else {
            &self.detail.personality.kind
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_sorted_by_index() {
        let index: SummaryIndex = serde_json::from_value(json!({
            "miis": {
                "a": {"index": 2, "nickname": "Bo", "filename": "bo/mii.json", "personality_type": "x"},
                "b": {"index": 0, "nickname": "Al", "filename": "al/mii.json"},
                "c": {"index": 1, "nickname": "Cy", "filename": "cy/mii.json"}
            }
        }))
        .unwrap();

        let names: Vec<_> = index.into_sorted().into_iter().map(|s| s.nickname).collect();
        assert_eq!(names, vec!["Al", "Cy", "Bo"]);
    }

    #[test]
    fn test_folder_and_images() {
        let summary = CharacterSummary {
            index: 0,
            nickname: "Al".into(),
            filename: "01_Al/mii.json".into(),
            personality_type: String::new(),
        };
        assert_eq!(summary.folder(), "01_Al");
        assert_eq!(summary.image_path("face.png"), "01_Al/face.png");
    }

    #[test]
    fn test_relationship_slots_numeric_order_and_lenient() {
        let detail: CharacterDetail = serde_json::from_value(json!({
            "profile": {"firstname": "Al"},
            "personality": {"type": "easygoing dreamer"},
            "relationships": {
                "10": {"type": 1, "type_name": "Friend", "target_name": "C", "value": 3},
                "2": {"type": 4, "type_name": "Spouse", "target_name": "B", "value": 90},
                "bad": "not an object",
                "3": {"type": 2, "target_name": "D"}
            }
        }))
        .unwrap();

        let edges = detail.relationships();
        let targets: Vec<_> = edges.iter().map(|e| e.target_name.as_str()).collect();
        assert_eq!(targets, vec!["B", "D", "C"]);
        assert_eq!(edges[1].value, 0.0);
        assert_eq!(edges[1].type_name, "");
    }
}
