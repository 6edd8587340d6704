//! Render-ready chord diagram.
//!
//! [`render`] turns a pruned [`WebGraph`] into plain data: arc and ribbon
//! path strings, colors, label placement and tooltips. The browser page and
//! the SVG snapshot both draw from a [`ChordRender`] without any further
//! geometry.

use serde::Serialize;

use crate::chord::geometry::{arc_path, label_placement, ribbon_path, LabelPlacement};
use crate::chord::{Chord, ChordLayout, ChordPrimitive, LayoutAdapter, LayoutError};
use crate::color::darker;
use crate::config::ChordConfig;
use crate::interaction::InteractionStyle;
use crate::personality::fill_color;
use crate::web::{color_of, EdgeInfo, WebGraph};

/// Shown when a filter leaves nothing to draw.
pub const NO_DATA_MESSAGE: &str = "No relationship data available.";

/// Type name used when a ribbon's edge carries none.
pub const UNKNOWN_TYPE_NAME: &str = "Unknown";

/// One node's arc and label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub index: usize,
    pub nickname: String,
    pub personality_type: String,
    pub fill: String,
    pub stroke: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub arc_path: String,
    pub label: LabelPlacement,
}

/// One ribbon between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRibbon {
    pub source: usize,
    pub target: usize,
    pub type_code: u32,
    pub type_name: String,
    pub color: String,
    pub value: f64,
    pub path: String,
    /// Tooltip lines: names, type, value.
    pub tooltip: Vec<String>,
}

/// A complete chord diagram, centered on the origin of a
/// `width` × `height` canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordRender {
    pub width: f64,
    pub height: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub nodes: Vec<RenderNode>,
    pub ribbons: Vec<RenderRibbon>,
    pub style: InteractionStyle,
}

impl ChordRender {
    /// Index of the ribbon joining `a` and `b` in either direction.
    pub fn ribbon_between(&self, a: usize, b: usize) -> Option<usize> {
        self.ribbons
            .iter()
            .position(|r| (r.source == a && r.target == b) || (r.source == b && r.target == a))
    }

    pub fn node_by_nickname(&self, nickname: &str) -> Option<&RenderNode> {
        self.nodes
            .iter()
            .find(|n| n.nickname.eq_ignore_ascii_case(nickname))
    }
}

/// What the relationship web shows after activation or a filter change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderOutcome {
    Rendered(ChordRender),
    NoData { message: String },
    Failed { message: String },
}

impl RenderOutcome {
    pub fn no_data() -> Self {
        Self::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn chord(&self) -> Option<&ChordRender> {
        match self {
            Self::Rendered(render) => Some(render),
            _ => None,
        }
    }
}

/// Lay out and draw a pruned web.
///
/// Returns `Ok(None)` when there is nothing to draw.
pub fn render(web: &WebGraph, config: &ChordConfig) -> Result<Option<ChordRender>, LayoutError> {
    render_with(web, &LayoutAdapter::new(config.pad_angle), config)
}

/// [`render`] through a specific layout adapter.
pub fn render_with<P: ChordPrimitive>(
    web: &WebGraph,
    adapter: &LayoutAdapter<P>,
    config: &ChordConfig,
) -> Result<Option<ChordRender>, LayoutError> {
    if web.is_empty() {
        return Ok(None);
    }

    let Some(layout) = adapter.layout(&web.graph.weights())? else {
        return Ok(None);
    };

    Ok(Some(draw(web, &layout, config)))
}

/// Turn a computed layout into render data.
pub fn draw(web: &WebGraph, layout: &ChordLayout, config: &ChordConfig) -> ChordRender {
    let outer = config.outer_radius();
    let inner = config.inner_radius();
    let ribbon_radius = config.ribbon_radius();

    let nodes = layout
        .groups
        .iter()
        .map(|group| {
            let character = &web.characters[group.index];
            let fill = fill_color(character.personality_type());
            RenderNode {
                index: group.index,
                nickname: character.nickname().to_string(),
                personality_type: character.personality_type().to_string(),
                fill: fill.to_string(),
                stroke: darker(fill, 0.5),
                start_angle: group.start_angle,
                end_angle: group.end_angle,
                arc_path: arc_path(group, inner, outer),
                label: label_placement(group, outer, config.label_gap),
            }
        })
        .collect();

    let ribbons = layout
        .chords
        .iter()
        .map(|chord| draw_ribbon(web, chord, ribbon_radius))
        .collect();

    let size = config.canvas_size();
    ChordRender {
        width: size,
        height: size,
        outer_radius: outer,
        inner_radius: inner,
        nodes,
        ribbons,
        style: InteractionStyle::default(),
    }
}

fn draw_ribbon(web: &WebGraph, chord: &Chord, radius: f64) -> RenderRibbon {
    let (source, target) = (chord.source.index, chord.target.index);
    let edge = ribbon_edge(web, source, target);

    let type_code = edge.map_or(0, |e| e.kind);
    let type_name = edge
        .map(|e| e.type_name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_TYPE_NAME)
        .to_string();
    let value = edge.map_or(0.0, |e| e.value);

    let tooltip = vec![
        format!(
            "{} → {}",
            web.nickname(source).unwrap_or_default(),
            web.nickname(target).unwrap_or_default()
        ),
        type_name.clone(),
        format!("Value: {}", value.round()),
    ];

    RenderRibbon {
        source,
        target,
        type_code,
        type_name,
        color: color_of(type_code).to_string(),
        value,
        path: ribbon_path(&chord.source, &chord.target, radius),
        tooltip,
    }
}

/// Edge metadata for a ribbon, falling back to the reverse direction.
fn ribbon_edge(web: &WebGraph, source: usize, target: usize) -> Option<&EdgeInfo> {
    web.graph
        .edge(source, target)
        .or_else(|| web.graph.edge(target, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Character, CharacterDetail, CharacterSummary};
    use crate::web::TypeMask;
    use serde_json::json;

    fn character(index: i64, nickname: &str, personality: &str, relationships: serde_json::Value) -> Character {
        let detail: CharacterDetail = serde_json::from_value(json!({
            "profile": {"nickname": nickname},
            "personality": {"type": personality},
            "relationships": relationships,
        }))
        .unwrap();
        Character {
            summary: CharacterSummary {
                index,
                nickname: nickname.to_string(),
                filename: format!("{nickname}/mii.json"),
                personality_type: personality.to_string(),
            },
            detail,
        }
    }

    fn web() -> WebGraph {
        WebGraph::baseline(vec![
            character(
                0,
                "Ann",
                "easygoing dreamer",
                json!({"0": {"type": 4, "type_name": "Spouse", "target_name": "Ben", "value": 80.4}}),
            ),
            character(1, "Ben", "outgoing leader", json!({})),
            character(
                2,
                "Cal",
                "",
                json!({"0": {"type": 1, "type_name": "", "target_name": "Ann", "value": 3}}),
            ),
        ])
    }

    #[test]
    fn test_nodes_follow_graph_order_and_colors() {
        let render = render(&web(), &ChordConfig::default()).unwrap().unwrap();

        let names: Vec<_> = render.nodes.iter().map(|n| n.nickname.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Ben", "Cal"]);
        assert_eq!(render.nodes[0].fill, "#ffc740");
        assert_eq!(render.nodes[1].fill, "#ff5100");
        assert_eq!(render.nodes[2].fill, "#cccccc");
        assert_eq!(render.nodes[2].stroke, darker("#cccccc", 0.5));
        assert_eq!(render.width, 1100.0);
        assert_eq!(render.outer_radius, 500.0);
        assert_eq!(render.inner_radius, 460.0);
    }

    #[test]
    fn test_ribbon_resolves_reverse_direction() {
        let render = render(&web(), &ChordConfig::default()).unwrap().unwrap();
        assert_eq!(render.ribbons.len(), 2);

        // Ben has no outgoing edge, the Ann -> Ben edge still colors the ribbon
        let i = render.ribbon_between(0, 1).unwrap();
        let ribbon = &render.ribbons[i];
        assert_eq!(ribbon.type_code, 4);
        assert_eq!(ribbon.color, "#c93d6b");
        assert_eq!(ribbon.tooltip[1], "Spouse");
        assert_eq!(ribbon.tooltip[2], "Value: 80");
    }

    #[test]
    fn test_tooltip_rounds_half_up() {
        let web = WebGraph::baseline(vec![
            character(0, "A", "", json!({"0": {"type": 1, "type_name": "Friend", "target_name": "B", "value": 2.5}})),
            character(1, "B", "", json!({"0": {"type": 1, "type_name": "Friend", "target_name": "A", "value": 2.5}})),
        ]);
        let render = render(&web, &ChordConfig::default()).unwrap().unwrap();
        assert_eq!(render.ribbons[0].tooltip, vec!["A → B", "Friend", "Value: 3"]);
    }

    #[test]
    fn test_missing_type_name_is_unknown() {
        let render = render(&web(), &ChordConfig::default()).unwrap().unwrap();
        let ribbon = &render.ribbons[render.ribbon_between(0, 2).unwrap()];
        assert_eq!(ribbon.type_name, UNKNOWN_TYPE_NAME);
        assert_eq!(ribbon.color, "#2d8a83");
        assert!(ribbon.tooltip[0].contains(" → "));
    }

    #[test]
    fn test_empty_web_renders_nothing() {
        let empty = web().filter(&TypeMask::only([12]));
        assert!(render(&empty, &ChordConfig::default()).unwrap().is_none());
    }

    #[test]
    fn test_outcome_serializes_with_status() {
        let value = serde_json::to_value(RenderOutcome::no_data()).unwrap();
        assert_eq!(value["status"], "no_data");
        assert_eq!(value["message"], NO_DATA_MESSAGE);
    }
}
