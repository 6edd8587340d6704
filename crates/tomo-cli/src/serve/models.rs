//! API request and response types for the viewer.
//!
//! Most responses serialize `tomo-core` view models directly; the types here
//! cover query strings, the filter request and the relationship web payload.

use serde::{Deserialize, Serialize};

use tomo_core::render::RenderOutcome;
use tomo_core::web::{RelationshipKind, TypeMask};

// =============================================================================
// Gallery
// =============================================================================

/// Query parameters for `/api/miis`.
#[derive(Debug, Default, Deserialize)]
pub struct GalleryParams {
    /// Nickname search term.
    #[serde(default)]
    pub q: String,
    /// Personality value, `all` for no filter.
    #[serde(default)]
    pub personality: String,
}

// =============================================================================
// Relationship web
// =============================================================================

/// Body of `POST /api/web/filter`.
#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    /// Enabled relationship type codes.
    pub types: Vec<u32>,
}

impl FilterRequest {
    pub fn mask(&self) -> TypeMask {
        TypeMask::only(self.types.iter().copied())
    }
}

/// One relationship type checkbox.
#[derive(Debug, Serialize)]
pub struct KindEntry {
    pub code: u32,
    pub label: &'static str,
    pub color: &'static str,
    pub enabled: bool,
}

/// Relationship web payload: what to draw and the checkbox states.
#[derive(Debug, Serialize)]
pub struct WebResponse {
    pub outcome: RenderOutcome,
    pub kinds: Vec<KindEntry>,
}

impl WebResponse {
    pub fn new(outcome: RenderOutcome, mask: &TypeMask) -> Self {
        let kinds = RelationshipKind::ALL
            .iter()
            .map(|kind| KindEntry {
                code: kind.code(),
                label: kind.label(),
                color: kind.color(),
                enabled: mask.allows(kind.code()),
            })
            .collect();
        Self { outcome, kinds }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
