//! Default values for Tomo configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Data Source Defaults
// ============================================================================

/// Directory (or base URL) holding the extracted records.
pub const DEFAULT_DATA_DIR: &str = "extracted_miis";

/// Summary index document name, relative to the data directory.
pub const DEFAULT_SUMMARY_FILE: &str = "_summary.json";

/// Face image name inside a character's folder.
pub const DEFAULT_FACE_IMAGE: &str = "face.png";

/// Body image name inside a character's folder.
pub const DEFAULT_BODY_IMAGE: &str = "body.png";

// ============================================================================
// Server Defaults
// ============================================================================

/// Port the local viewer listens on.
pub const DEFAULT_PORT: u16 = 3333;

/// URL prefix the image assets are mounted under.
pub const DEFAULT_ASSET_PREFIX: &str = "/extracted_miis";

// ============================================================================
// Chord Diagram Defaults
// ============================================================================

/// Padding between adjacent arcs, in radians.
pub const DEFAULT_PAD_ANGLE: f64 = 0.03;

/// Upper bound for the diagram's square drawing area.
pub const DEFAULT_BASE_SIZE: f64 = 1000.0;

/// Extra room around the circle for the name labels.
pub const DEFAULT_LABEL_OFFSET: f64 = 100.0;

/// Outer radius is `base_size / 2 - radius_offset`.
pub const DEFAULT_RADIUS_OFFSET: f64 = 0.0;

/// Thickness of the arc band.
pub const DEFAULT_ARC_THICKNESS: f64 = 40.0;

/// Gap between the inner edge of the arcs and the ribbons.
pub const DEFAULT_RIBBON_INSET: f64 = 8.0;

/// Distance of the labels from the outer radius.
pub const DEFAULT_LABEL_GAP: f64 = 20.0;

// ============================================================================
// Detail View Defaults
// ============================================================================

/// Relationships shown before the "show more" toggle.
pub const DEFAULT_TOP_RELATIONSHIPS: usize = 5;
