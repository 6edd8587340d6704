//! View state of the relationship web.
//!
//! A [`ViewController`] owns the [`WebContext`] built at activation: the
//! baseline graph, the active type mask and the current render. Filter
//! changes always re-filter from the baseline and swap in a fresh render;
//! hovering only changes the [`VisualState`].

use serde::Serialize;

use crate::chord::{ChordPrimitive, LayoutAdapter, StandardChord};
use crate::config::ChordConfig;
use crate::records::{Character, RecordStore};
use crate::render::{render_with, ChordRender, RenderOutcome};
use crate::web::{TypeMask, WebError, WebGraph};

/// Opacity and stroke values for each interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InteractionStyle {
    pub arc_opacity: f64,
    pub arc_stroke_width: f64,
    pub ribbon_fill_opacity: f64,
    pub label_opacity: f64,
    pub dimmed_arc_opacity: f64,
    pub focused_stroke_width: f64,
    pub dimmed_ribbon_opacity: f64,
    pub focused_ribbon_fill_opacity: f64,
    pub dimmed_label_opacity: f64,
    pub hovered_ribbon_fill_opacity: f64,
}

impl Default for InteractionStyle {
    fn default() -> Self {
        Self {
            arc_opacity: 1.0,
            arc_stroke_width: 1.0,
            ribbon_fill_opacity: 0.3,
            label_opacity: 1.0,
            dimmed_arc_opacity: 0.2,
            focused_stroke_width: 3.0,
            dimmed_ribbon_opacity: 0.1,
            focused_ribbon_fill_opacity: 0.7,
            dimmed_label_opacity: 0.3,
            hovered_ribbon_fill_opacity: 0.7,
        }
    }
}

/// What the pointer is over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Hover {
    #[default]
    None,
    Node(usize),
    Ribbon(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcState {
    pub opacity: f64,
    pub fill_opacity: f64,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RibbonState {
    pub opacity: f64,
    pub fill_opacity: f64,
}

/// Per-element presentation of a render, parallel to its nodes and ribbons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualState {
    pub hover: Hover,
    pub arcs: Vec<ArcState>,
    pub ribbons: Vec<RibbonState>,
    pub labels: Vec<f64>,
    pub tooltip: Option<Vec<String>>,
}

impl VisualState {
    /// Nothing hovered.
    pub fn baseline(render: &ChordRender) -> Self {
        let style = &render.style;
        Self {
            hover: Hover::None,
            arcs: vec![
                ArcState {
                    opacity: style.arc_opacity,
                    fill_opacity: style.arc_opacity,
                    stroke_width: style.arc_stroke_width,
                };
                render.nodes.len()
            ],
            ribbons: vec![
                RibbonState {
                    opacity: 1.0,
                    fill_opacity: style.ribbon_fill_opacity,
                };
                render.ribbons.len()
            ],
            labels: vec![style.label_opacity; render.nodes.len()],
            tooltip: None,
        }
    }

    /// One node and its ribbons in focus, everything else dimmed.
    ///
    /// `None` when `node` is not part of the render.
    pub fn node_focus(render: &ChordRender, node: usize) -> Option<Self> {
        let focused = render.nodes.get(node)?;
        let style = &render.style;
        let mut state = Self::baseline(render);
        state.hover = Hover::Node(node);

        for (i, arc) in state.arcs.iter_mut().enumerate() {
            if i == node {
                arc.stroke_width = style.focused_stroke_width;
            } else {
                arc.opacity = style.dimmed_arc_opacity;
                arc.fill_opacity = style.dimmed_arc_opacity;
            }
        }

        for (ribbon, shown) in state.ribbons.iter_mut().zip(&render.ribbons) {
            if shown.source == node || shown.target == node {
                ribbon.opacity = 1.0;
                ribbon.fill_opacity = style.focused_ribbon_fill_opacity;
            } else {
                ribbon.opacity = style.dimmed_ribbon_opacity;
                ribbon.fill_opacity = style.dimmed_ribbon_opacity;
            }
        }

        for (i, label) in state.labels.iter_mut().enumerate() {
            if i != node {
                *label = style.dimmed_label_opacity;
            }
        }

        state.tooltip = Some(vec![focused.nickname.clone()]);
        Some(state)
    }

    /// One ribbon highlighted, `None` when `ribbon` is out of range.
    pub fn ribbon_focus(render: &ChordRender, ribbon: usize) -> Option<Self> {
        let hovered = render.ribbons.get(ribbon)?;
        let mut state = Self::baseline(render);
        state.hover = Hover::Ribbon(ribbon);
        state.ribbons[ribbon].fill_opacity = render.style.hovered_ribbon_fill_opacity;
        state.tooltip = Some(hovered.tooltip.clone());
        Some(state)
    }
}

/// Everything the relationship web needs between interactions.
#[derive(Debug, Clone)]
pub struct WebContext {
    /// Characters with at least one valid relationship and their graph.
    pub baseline: WebGraph,
    pub mask: TypeMask,
    /// `baseline` filtered by `mask`.
    pub current: WebGraph,
    pub outcome: RenderOutcome,
}

/// Drives the relationship web through activation, filtering and hover.
#[derive(Debug, Clone)]
pub struct ViewController<P = StandardChord> {
    config: ChordConfig,
    adapter: LayoutAdapter<P>,
    context: Option<WebContext>,
    visual: Option<VisualState>,
}

impl ViewController<StandardChord> {
    pub fn new(config: ChordConfig) -> Self {
        Self::with_primitive(config, StandardChord)
    }
}

impl<P: ChordPrimitive> ViewController<P> {
    /// Controller laying the web out with `primitive`.
    pub fn with_primitive(config: ChordConfig, primitive: P) -> Self {
        let adapter = LayoutAdapter::with_primitive(primitive, config.pad_angle);
        Self {
            config,
            adapter,
            context: None,
            visual: None,
        }
    }

    pub fn context(&self) -> Option<&WebContext> {
        self.context.as_ref()
    }

    pub fn outcome(&self) -> Option<&RenderOutcome> {
        self.context.as_ref().map(|c| &c.outcome)
    }

    pub fn visual(&self) -> Option<&VisualState> {
        self.visual.as_ref()
    }

    /// Load every record and show the web with all types enabled.
    ///
    /// Any previous context is replaced, even when loading fails.
    pub async fn activate(&mut self, store: &RecordStore) -> RenderOutcome {
        match store.load_all().await {
            Ok(characters) => self.activate_with(characters),
            Err(e) => self.fail(WebError::from(e)),
        }
    }

    /// Activation from characters already in memory.
    pub fn activate_with(&mut self, characters: Vec<Character>) -> RenderOutcome {
        if characters.is_empty() {
            return self.fail(WebError::NoCharacters);
        }

        let baseline = WebGraph::baseline(characters);
        tracing::debug!(
            nodes = baseline.len(),
            edges = baseline.graph.edge_count(),
            "Built relationship web"
        );

        let mask = TypeMask::all();
        let current = baseline.clone();
        let outcome = self.render(&current);
        self.install(WebContext {
            baseline,
            mask,
            current,
            outcome,
        })
    }

    /// Re-filter the baseline with a new type selection and replace the render.
    pub fn on_filter_changed(&mut self, mask: TypeMask) -> RenderOutcome {
        let Some(context) = self.context.as_ref() else {
            return RenderOutcome::failed(WebError::NotActivated.to_string());
        };

        let current = context.baseline.filter(&mask);
        tracing::debug!(nodes = current.len(), "Filter changed");
        let outcome = self.render(&current);
        let baseline = context.baseline.clone();
        self.install(WebContext {
            baseline,
            mask,
            current,
            outcome,
        })
    }

    /// Focus a node. Out-of-range indices leave the state unchanged.
    pub fn on_node_hover(&mut self, node: usize) -> Option<&VisualState> {
        let state = VisualState::node_focus(self.chord()?, node)?;
        self.visual = Some(state);
        self.visual.as_ref()
    }

    /// Highlight a ribbon. Out-of-range indices leave the state unchanged.
    pub fn on_ribbon_hover(&mut self, ribbon: usize) -> Option<&VisualState> {
        let state = VisualState::ribbon_focus(self.chord()?, ribbon)?;
        self.visual = Some(state);
        self.visual.as_ref()
    }

    /// Back to the baseline presentation.
    pub fn on_hover_out(&mut self) -> Option<&VisualState> {
        let render = self.chord()?;
        self.visual = Some(VisualState::baseline(render));
        self.visual.as_ref()
    }

    /// Focus a node by nickname.
    pub fn focus(&mut self, nickname: &str) -> Option<&VisualState> {
        let node = self.chord()?.node_by_nickname(nickname)?.index;
        self.on_node_hover(node)
    }

    fn chord(&self) -> Option<&ChordRender> {
        self.context.as_ref()?.outcome.chord()
    }

    fn render(&self, web: &WebGraph) -> RenderOutcome {
        match render_with(web, &self.adapter, &self.config) {
            Ok(Some(chord)) => RenderOutcome::Rendered(chord),
            Ok(None) => RenderOutcome::no_data(),
            Err(e) => {
                let e = WebError::from(e);
                tracing::error!("{}", e);
                RenderOutcome::failed(e.to_string())
            }
        }
    }

    fn install(&mut self, context: WebContext) -> RenderOutcome {
        self.visual = context.outcome.chord().map(VisualState::baseline);
        let outcome = context.outcome.clone();
        self.context = Some(context);
        outcome
    }

    fn fail(&mut self, error: WebError) -> RenderOutcome {
        tracing::error!("Error loading relationship data: {}", error);
        let outcome = RenderOutcome::failed(error.to_string());
        self.context = None;
        self.visual = None;
        outcome
    }
}
