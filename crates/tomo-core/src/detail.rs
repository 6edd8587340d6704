//! Character detail view.

use std::cmp::Ordering;

use serde::Serialize;

use crate::color::text_color_for_background;
use crate::gallery::asset_url;
use crate::personality::{describe, PersonalityGroup, PersonalitySubtype};
use crate::records::{Character, Profile, RelationshipEdge};
use crate::web::{color_of, RelationshipKind};

/// A relationship line of the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipLine {
    pub target_name: String,
    #[serde(rename = "type")]
    pub kind: u32,
    pub type_name: String,
    pub value: f64,
    pub color: &'static str,
}

/// Ranked relationships, split into the shown head and a hidden tail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRelationships {
    pub shown: Vec<RelationshipLine>,
    pub rest: Vec<RelationshipLine>,
    /// Length of `rest`.
    pub hidden: usize,
}

/// Personality block with display colors.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalityBlock {
    pub main_name: String,
    pub subtype_name: String,
    pub main: Option<&'static PersonalityGroup>,
    pub subtype: Option<&'static PersonalitySubtype>,
    pub main_text_color: &'static str,
    pub subtype_text_color: &'static str,
}

/// Everything the detail modal shows.
#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub index: i64,
    pub nickname: String,
    pub full_name: String,
    pub creator: String,
    pub face_image: String,
    pub body_image: String,
    pub personality: PersonalityBlock,
    pub relationships: RankedRelationships,
}

/// Image and ranking settings for [`DetailView::new`].
#[derive(Debug, Clone, Copy)]
pub struct DetailOptions<'a> {
    pub face_image: &'a str,
    pub body_image: &'a str,
    pub asset_prefix: &'a str,
    pub top: usize,
}

impl DetailView {
    pub fn new(character: &Character, options: DetailOptions<'_>) -> Self {
        let summary = &character.summary;
        let profile = &character.detail.profile;

        let info = describe(character.personality_type());
        let main_color = info.main.map(|m| m.color).unwrap_or_default();
        let subtype_color = info.subtype.map(|s| s.color).unwrap_or_default();

        Self {
            index: summary.index,
            nickname: if profile.nickname.is_empty() {
                summary.nickname.clone()
            } else {
                profile.nickname.clone()
            },
            full_name: full_name(profile),
            creator: profile.creator.clone(),
            face_image: asset_url(options.asset_prefix, &summary.image_path(options.face_image)),
            body_image: asset_url(options.asset_prefix, &summary.image_path(options.body_image)),
            personality: PersonalityBlock {
                main_text_color: text_color_for_background(main_color),
                subtype_text_color: text_color_for_background(subtype_color),
                main_name: info.main_name,
                subtype_name: info.subtype_name,
                main: info.main,
                subtype: info.subtype,
            },
            relationships: rank(&character.detail.relationships(), options.top),
        }
    }
}

/// `First 'Nick' Last`, or `First Last` when the nickname is the first name.
pub fn full_name(profile: &Profile) -> String {
    let first = &profile.firstname;
    let nick = &profile.nickname;
    if !nick.is_empty() && nick.to_lowercase() != first.to_lowercase() {
        format!("{} '{}' {}", first, nick, profile.lastname)
    } else {
        format!("{} {}", first, profile.lastname)
    }
}

fn order_of(code: u32) -> usize {
    RelationshipKind::ALL
        .iter()
        .position(|k| k.code() == code)
        .unwrap_or(RelationshipKind::ALL.len())
}

/// Drop empty slots and order by kind, strongest value first within a kind.
pub fn rank(edges: &[RelationshipEdge], top: usize) -> RankedRelationships {
    let mut lines: Vec<RelationshipLine> = edges
        .iter()
        .filter(|e| e.kind != 0)
        .map(|e| RelationshipLine {
            target_name: e.target_name.clone(),
            kind: e.kind,
            type_name: e.type_name.clone(),
            value: e.value,
            color: color_of(e.kind),
        })
        .collect();

    lines.sort_by(|a, b| {
        order_of(a.kind)
            .cmp(&order_of(b.kind))
            .then_with(|| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal))
    });

    let rest = if lines.len() > top {
        lines.split_off(top)
    } else {
        Vec::new()
    };

    RankedRelationships {
        hidden: rest.len(),
        shown: lines,
        rest,
    }
}
