//! Static SVG export of the relationship web.

use std::fmt::Write;

use tomo_core::{ChordRender, VisualState};

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Draw a render with the given visual state as a standalone SVG document.
pub fn to_svg(render: &ChordRender, visual: &VisualState) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = render.width,
        h = render.height
    );
    let _ = writeln!(
        svg,
        r#"<g transform="translate({},{})">"#,
        render.width / 2.0,
        render.height / 2.0
    );

    svg.push_str("<g class=\"ribbons\">\n");
    for (ribbon, state) in render.ribbons.iter().zip(&visual.ribbons) {
        let _ = writeln!(
            svg,
            r#"<path d="{}" fill="{}" opacity="{}" fill-opacity="{}"><title>{}</title></path>"#,
            ribbon.path,
            ribbon.color,
            state.opacity,
            state.fill_opacity,
            escape(&ribbon.tooltip.join("\n"))
        );
    }
    svg.push_str("</g>\n<g class=\"arcs\">\n");

    for (node, state) in render.nodes.iter().zip(&visual.arcs) {
        let _ = writeln!(
            svg,
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="{}" opacity="{}" fill-opacity="{}"><title>{}</title></path>"#,
            node.arc_path,
            node.fill,
            node.stroke,
            state.stroke_width,
            state.opacity,
            state.fill_opacity,
            escape(&node.nickname)
        );
    }
    svg.push_str("</g>\n<g class=\"labels\">\n");

    for (node, opacity) in render.nodes.iter().zip(&visual.labels) {
        let _ = writeln!(
            svg,
            r##"<text dy=".35em" transform="{}" text-anchor="{}" font-size="12" fill="#000" opacity="{}">{}</text>"##,
            node.label.transform,
            node.label.anchor,
            opacity,
            escape(&node.nickname)
        );
    }
    svg.push_str("</g>\n</g>\n</svg>\n");
    svg
}
