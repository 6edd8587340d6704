//! SVG path data for arcs, ribbons and label placement.
//!
//! Layout angles are measured clockwise from 12 o'clock; SVG angles from
//! 3 o'clock, so every angle is shifted by a quarter turn before drawing.
//! All shapes are centered on the origin.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

use serde::Serialize;

use super::{ChordEnd, ChordGroup};

const EPSILON: f64 = 1e-6;

/// Accumulates SVG path commands.
#[derive(Debug, Default)]
struct PathBuilder {
    data: String,
    current: Option<(f64, f64)>,
}

impl PathBuilder {
    fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.data, "M{},{}", num(x), num(y));
        self.current = Some((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.data, "L{},{}", num(x), num(y));
        self.current = Some((x, y));
    }

    fn quadratic_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        let _ = write!(self.data, "Q{},{},{},{}", num(cx), num(cy), num(x), num(y));
        self.current = Some((x, y));
    }

    /// Circular arc around the origin from `a0` to `a1` (SVG angles).
    fn arc(&mut self, r: f64, a0: f64, a1: f64, counter_clockwise: bool) {
        let (x0, y0) = (r * a0.cos(), r * a0.sin());

        match self.current {
            None => self.move_to(x0, y0),
            Some((cx, cy)) if (cx - x0).abs() > EPSILON || (cy - y0).abs() > EPSILON => {
                self.line_to(x0, y0)
            }
            Some(_) => {}
        }

        if r <= 0.0 {
            return;
        }

        let sweep = if counter_clockwise { 0 } else { 1 };
        let mut da = if counter_clockwise { a0 - a1 } else { a1 - a0 };
        if da < 0.0 {
            da = da % TAU + TAU;
        }

        if da > TAU - EPSILON {
            // full circle, drawn as two half-turns
            let r_s = num(r);
            let _ = write!(
                self.data,
                "A{r_s},{r_s},0,1,{sweep},{},{}A{r_s},{r_s},0,1,{sweep},{},{}",
                num(-x0),
                num(-y0),
                num(x0),
                num(y0)
            );
            self.current = Some((x0, y0));
        } else if da > EPSILON {
            let (x1, y1) = (r * a1.cos(), r * a1.sin());
            let large = if da >= PI { 1 } else { 0 };
            let r_s = num(r);
            let _ = write!(
                self.data,
                "A{r_s},{r_s},0,{large},{sweep},{},{}",
                num(x1),
                num(y1)
            );
            self.current = Some((x1, y1));
        }
    }

    fn close(&mut self) {
        self.data.push('Z');
    }

    fn finish(self) -> String {
        self.data
    }
}

/// Fixed-precision number formatting without trailing zeros.
fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    // avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let mut s = format!("{:.3}", rounded);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// Annular sector between `inner` and `outer` radius spanning a group.
pub fn arc_path(group: &ChordGroup, inner: f64, outer: f64) -> String {
    let a0 = group.start_angle - FRAC_PI_2;
    let a1 = group.end_angle - FRAC_PI_2;
    let da = (a1 - a0).abs();
    let mut path = PathBuilder::default();

    if outer <= EPSILON {
        path.move_to(0.0, 0.0);
    } else if da > TAU - EPSILON {
        path.arc(outer, a0, a1, false);
        if inner > EPSILON {
            path.move_to(inner * a1.cos(), inner * a1.sin());
            path.arc(inner, a1, a0, true);
        }
    } else {
        path.move_to(outer * a0.cos(), outer * a0.sin());
        path.arc(outer, a0, a1, false);
        if inner > EPSILON {
            path.arc(inner, a1, a0, true);
        } else {
            path.line_to(0.0, 0.0);
        }
    }

    path.close();
    path.finish()
}

/// Ribbon between two chord ends at the given radius.
pub fn ribbon_path(source: &ChordEnd, target: &ChordEnd, radius: f64) -> String {
    let sa0 = source.start_angle - FRAC_PI_2;
    let sa1 = source.end_angle - FRAC_PI_2;
    let ta0 = target.start_angle - FRAC_PI_2;
    let ta1 = target.end_angle - FRAC_PI_2;

    let mut path = PathBuilder::default();
    path.move_to(radius * sa0.cos(), radius * sa0.sin());
    path.arc(radius, sa0, sa1, false);
    if sa0 != ta0 || sa1 != ta1 {
        path.quadratic_to(0.0, 0.0, radius * ta0.cos(), radius * ta0.sin());
        path.arc(radius, ta0, ta1, false);
    }
    path.quadratic_to(0.0, 0.0, radius * sa0.cos(), radius * sa0.sin());
    path.close();
    path.finish()
}

/// Where and how a group's name label is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelPlacement {
    /// Mid angle of the group, layout convention.
    pub angle: f64,
    /// Labels on the left half are turned upright and end-anchored.
    pub flipped: bool,
    /// SVG `text-anchor`.
    pub anchor: &'static str,
    /// SVG `transform` attribute.
    pub transform: String,
}

/// Place a label `offset` beyond `radius`, pointing outward.
pub fn label_placement(group: &ChordGroup, radius: f64, offset: f64) -> LabelPlacement {
    let angle = (group.start_angle + group.end_angle) / 2.0;
    let flipped = angle > PI;
    let rotate = angle.to_degrees() - 90.0;

    let mut transform = format!("rotate({}) translate({})", num(rotate), num(radius + offset));
    if flipped {
        transform.push_str(" rotate(180)");
    }

    LabelPlacement {
        angle,
        flipped,
        anchor: if flipped { "end" } else { "start" },
        transform,
    }
}
