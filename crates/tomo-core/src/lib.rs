pub mod chord;
pub mod color;
pub mod config;
pub mod detail;
pub mod gallery;
pub mod interaction;
pub mod personality;
pub mod records;
pub mod render;
pub mod web;

pub use config::Config;
pub use detail::DetailView;
pub use gallery::{GalleryQuery, GalleryView};
pub use interaction::{Hover, ViewController, VisualState};
pub use records::{Character, CharacterSummary, RecordError, RecordStore};
pub use render::{ChordRender, RenderOutcome};
pub use web::{TypeMask, WebError, WebGraph};
