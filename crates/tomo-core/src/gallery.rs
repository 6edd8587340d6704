//! Searchable character gallery.

use serde::Serialize;

use crate::personality::{color_for_value, group_for_value};
use crate::records::CharacterSummary;

/// Label of the unfiltered personality selection.
pub const ALL_PERSONALITIES: &str = "All personalities";

/// Search term and personality selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryQuery {
    pub search: String,
    /// A full subtype value such as `"easygoing dreamer"`, or `"all"`.
    pub personality: String,
}

impl GalleryQuery {
    pub fn new(search: impl Into<String>, personality: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            personality: personality.into(),
        }
    }

    fn personality_filter(&self) -> Option<String> {
        let value = self.personality.trim().to_lowercase();
        (!value.is_empty() && value != "all").then_some(value)
    }

    pub fn matches(&self, summary: &CharacterSummary) -> bool {
        let search = self.search.trim().to_lowercase();
        let matches_search = search.is_empty() || summary.nickname.to_lowercase().contains(&search);
        let matches_personality = match self.personality_filter() {
            Some(value) => summary.personality_type.to_lowercase() == value,
            None => true,
        };
        matches_search && matches_personality
    }

    /// Dropdown label, e.g. `"Easygoing · Dreamer"`.
    pub fn personality_label(&self) -> String {
        let Some(value) = self.personality_filter() else {
            return ALL_PERSONALITIES.to_string();
        };
        group_for_value(&value)
            .and_then(|g| {
                g.subtypes
                    .iter()
                    .find(|s| s.value == value)
                    .map(|s| format!("{} · {}", g.label, s.label))
            })
            .unwrap_or(value)
    }
}

/// One gallery tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryItem {
    pub index: i64,
    pub nickname: String,
    pub personality_type: String,
    pub face_image: String,
}

/// Gallery contents for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryView {
    pub items: Vec<GalleryItem>,
    pub visible: usize,
    pub total: usize,
    pub count_label: String,
    /// Set when nothing is visible.
    pub empty_message: Option<String>,
    pub personality_label: String,
    pub personality_color: Option<&'static str>,
}

/// Apply a query to the summary list.
///
/// `face_image` is the image file name inside each character's folder and
/// `asset_prefix` the URL prefix images are served under.
pub fn filter(
    summaries: &[CharacterSummary],
    query: &GalleryQuery,
    face_image: &str,
    asset_prefix: &str,
) -> GalleryView {
    let items: Vec<GalleryItem> = summaries
        .iter()
        .filter(|s| query.matches(s))
        .map(|s| GalleryItem {
            index: s.index,
            nickname: s.nickname.clone(),
            personality_type: s.personality_type.clone(),
            face_image: asset_url(asset_prefix, &s.image_path(face_image)),
        })
        .collect();

    let total = summaries.len();
    let visible = items.len();
    let empty_message = (visible == 0).then(|| empty_message(total, &query.search));

    GalleryView {
        items,
        visible,
        total,
        count_label: count_label(visible, total),
        empty_message,
        personality_label: query.personality_label(),
        personality_color: color_for_value(&query.personality),
    }
}

/// `"12 Miis"`, `"3 of 12 Miis"`, or empty without records.
pub fn count_label(visible: usize, total: usize) -> String {
    if total == 0 {
        String::new()
    } else if visible == total {
        format!("{} Miis", total)
    } else {
        format!("{} of {} Miis", visible, total)
    }
}

pub fn empty_message(total: usize, search: &str) -> String {
    if total > 0 {
        format!("No Miis match \"{}\".", search)
    } else {
        "No Miis available.".to_string()
    }
}

/// Join an asset prefix and a relative path.
pub fn asset_url(prefix: &str, relative: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(index: i64, nickname: &str, personality: &str) -> CharacterSummary {
        CharacterSummary {
            index,
            nickname: nickname.to_string(),
            filename: format!("{:02}_{}/mii.json", index, nickname),
            personality_type: personality.to_string(),
        }
    }

    fn summaries() -> Vec<CharacterSummary> {
        vec![
            summary(0, "Maria", "easygoing dreamer"),
            summary(1, "Mario", "outgoing leader"),
            summary(2, "Luigi", "Easygoing Dreamer"),
        ]
    }

    #[test]
    fn test_unfiltered() {
        let view = filter(&summaries(), &GalleryQuery::new("", "all"), "face.png", "/extracted_miis");
        assert_eq!(view.visible, 3);
        assert_eq!(view.count_label, "3 Miis");
        assert_eq!(view.items[0].face_image, "/extracted_miis/00_Maria/face.png");
        assert_eq!(view.personality_label, ALL_PERSONALITIES);
        assert!(view.empty_message.is_none());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let view = filter(&summaries(), &GalleryQuery::new("MAR", "all"), "face.png", "/x/");
        let names: Vec<_> = view.items.iter().map(|i| i.nickname.as_str()).collect();
        assert_eq!(names, vec!["Maria", "Mario"]);
        assert_eq!(view.count_label, "2 of 3 Miis");
        assert_eq!(view.items[0].face_image, "/x/00_Maria/face.png");
    }

    #[test]
    fn test_personality_exact_match() {
        let view = filter(&summaries(), &GalleryQuery::new("", "easygoing dreamer"), "face.png", "");
        let names: Vec<_> = view.items.iter().map(|i| i.nickname.as_str()).collect();
        assert_eq!(names, vec!["Maria", "Luigi"]);
        assert_eq!(view.personality_label, "Easygoing · Dreamer");
        assert_eq!(view.personality_color, Some("#ffc740"));

        let view = filter(&summaries(), &GalleryQuery::new("", "easygoing"), "face.png", "");
        assert_eq!(view.visible, 0);
    }

    #[test]
    fn test_empty_states() {
        let view = filter(&summaries(), &GalleryQuery::new("zelda", ""), "face.png", "");
        assert_eq!(view.empty_message.as_deref(), Some("No Miis match \"zelda\"."));
        assert_eq!(view.count_label, "0 of 3 Miis");

        let view = filter(&[], &GalleryQuery::default(), "face.png", "");
        assert_eq!(view.empty_message.as_deref(), Some("No Miis available."));
        assert_eq!(view.count_label, "");
    }
}
