//! Relationship type codes as stored in the save file.

use serde::{Deserialize, Serialize};

/// Color used for codes outside [`RelationshipKind`].
pub const UNKNOWN_KIND_COLOR: &str = "#cccccc";

/// The six meaningful relationship types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    Spouse,
    Lover,
    BestFriend,
    Ex,
    FriendInConflict,
    Friend,
}

impl RelationshipKind {
    /// All kinds, highest priority first.
    pub const ALL: [RelationshipKind; 6] = [
        RelationshipKind::Spouse,
        RelationshipKind::Lover,
        RelationshipKind::BestFriend,
        RelationshipKind::Ex,
        RelationshipKind::FriendInConflict,
        RelationshipKind::Friend,
    ];

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            4 => Some(Self::Spouse),
            2 => Some(Self::Lover),
            12 => Some(Self::BestFriend),
            3 => Some(Self::Ex),
            9 => Some(Self::FriendInConflict),
            1 => Some(Self::Friend),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Self::Spouse => 4,
            Self::Lover => 2,
            Self::BestFriend => 12,
            Self::Ex => 3,
            Self::FriendInConflict => 9,
            Self::Friend => 1,
        }
    }

    /// Rank used to pick the dominant type of a pair; higher wins.
    pub fn priority(self) -> u8 {
        match self {
            Self::Spouse => 6,
            Self::Lover => 5,
            Self::BestFriend => 4,
            Self::Ex => 3,
            Self::FriendInConflict => 2,
            Self::Friend => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Spouse => "Spouse",
            Self::Lover => "Lover",
            Self::BestFriend => "Best friend",
            Self::Ex => "Ex",
            Self::FriendInConflict => "Friend (in conflict)",
            Self::Friend => "Friend",
        }
    }

    /// Ribbon and list color, dark enough to read on white.
    pub fn color(self) -> &'static str {
        match self {
            Self::Spouse => "#c93d6b",
            Self::Lover => "#c45a6f",
            Self::BestFriend => "#c4a020",
            Self::Ex => "#606060",
            Self::FriendInConflict => "#c93d15",
            Self::Friend => "#2d8a83",
        }
    }
}

/// Priority of a raw code; unknown codes rank below every known kind.
pub fn priority_of(code: u32) -> u8 {
    RelationshipKind::from_code(code).map_or(0, RelationshipKind::priority)
}

/// Color of a raw code.
pub fn color_of(code: u32) -> &'static str {
    RelationshipKind::from_code(code).map_or(UNKNOWN_KIND_COLOR, RelationshipKind::color)
}
