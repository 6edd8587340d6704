//! Circular chord layout for the relationship web.
//!
//! [`LayoutAdapter`] sits between the relationship graph and a
//! [`ChordPrimitive`]. It owns the rules the diagram depends on regardless of
//! the primitive used: a fixed pad angle, natural matrix order (so arcs keep
//! their position across filter toggles), a short-circuit for empty input and
//! validation of whatever the primitive returns.

mod error;
pub mod geometry;
mod primitive;

pub use error::LayoutError;
pub use primitive::StandardChord;

use std::f64::consts::TAU;

use serde::Serialize;

/// Tolerance when checking angles returned by a primitive.
const ANGLE_TOLERANCE: f64 = 1e-9;

/// One node's arc.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordGroup {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Total weight the arc stands for.
    pub value: f64,
}

/// One end of a ribbon, a slice of a group's arc.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordEnd {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub value: f64,
}

/// A ribbon joining two groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chord {
    pub source: ChordEnd,
    pub target: ChordEnd,
}

/// Output of a chord layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChordLayout {
    pub groups: Vec<ChordGroup>,
    pub chords: Vec<Chord>,
}

/// Computes group arcs and ribbon ends from a square weight matrix.
pub trait ChordPrimitive {
    /// Lay out `matrix` with `pad_angle` radians between adjacent groups.
    ///
    /// Implementations must keep groups and subgroups in matrix order.
    fn compute(&self, matrix: &[Vec<f64>], pad_angle: f64) -> ChordLayout;
}

/// Enforces the diagram's layout rules around a [`ChordPrimitive`].
#[derive(Debug, Clone)]
pub struct LayoutAdapter<P = StandardChord> {
    primitive: P,
    pad_angle: f64,
}

impl LayoutAdapter<StandardChord> {
    pub fn new(pad_angle: f64) -> Self {
        Self::with_primitive(StandardChord, pad_angle)
    }
}

impl<P: ChordPrimitive> LayoutAdapter<P> {
    pub fn with_primitive(primitive: P, pad_angle: f64) -> Self {
        Self {
            primitive,
            pad_angle,
        }
    }

    pub fn pad_angle(&self) -> f64 {
        self.pad_angle
    }

    /// Lay out a weight matrix.
    ///
    /// Returns `Ok(None)` for a 0×0 matrix without calling the primitive;
    /// callers render a "no data" state for it.
    pub fn layout(&self, matrix: &[Vec<f64>]) -> Result<Option<ChordLayout>, LayoutError> {
        let n = matrix.len();
        if n == 0 {
            return Ok(None);
        }

        if let Some((row, r)) = matrix.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(LayoutError::NotSquare {
                row,
                len: r.len(),
                expected: n,
            });
        }

        let layout = self.primitive.compute(matrix, self.pad_angle);
        validate(&layout, n)?;
        Ok(Some(layout))
    }
}

fn finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Check a primitive's output against the rules the renderer relies on.
fn validate(layout: &ChordLayout, n: usize) -> Result<(), LayoutError> {
    if layout.groups.len() != n {
        return Err(LayoutError::Malformed(format!(
            "expected {} groups, got {}",
            n,
            layout.groups.len()
        )));
    }

    let mut previous_end = 0.0;
    for (k, group) in layout.groups.iter().enumerate() {
        if group.index != k {
            return Err(LayoutError::Malformed(format!(
                "group {} out of order (index {})",
                k, group.index
            )));
        }
        if !finite(&[group.start_angle, group.end_angle, group.value]) {
            return Err(LayoutError::Malformed(format!("group {} has non-finite angles", k)));
        }
        if group.end_angle < group.start_angle
            || group.start_angle + ANGLE_TOLERANCE < previous_end
            || group.end_angle > TAU + ANGLE_TOLERANCE
        {
            return Err(LayoutError::Malformed(format!(
                "group {} spans [{}, {}] out of range",
                k, group.start_angle, group.end_angle
            )));
        }
        previous_end = group.end_angle;
    }

    for chord in &layout.chords {
        for end in [&chord.source, &chord.target] {
            if end.index >= n {
                return Err(LayoutError::Malformed(format!(
                    "ribbon refers to group {} of {}",
                    end.index, n
                )));
            }
            if !finite(&[end.start_angle, end.end_angle]) {
                return Err(LayoutError::Malformed(format!(
                    "ribbon end on group {} has non-finite angles",
                    end.index
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scrambled;

    impl ChordPrimitive for Scrambled {
        fn compute(&self, matrix: &[Vec<f64>], pad_angle: f64) -> ChordLayout {
            let mut layout = StandardChord.compute(matrix, pad_angle);
            layout.groups.reverse();
            layout
        }
    }

    struct Broken;

    impl ChordPrimitive for Broken {
        fn compute(&self, _matrix: &[Vec<f64>], _pad_angle: f64) -> ChordLayout {
            ChordLayout {
                groups: vec![ChordGroup {
                    index: 0,
                    start_angle: f64::NAN,
                    end_angle: 1.0,
                    value: 1.0,
                }],
                chords: vec![],
            }
        }
    }

    struct Panics;

    impl ChordPrimitive for Panics {
        fn compute(&self, _matrix: &[Vec<f64>], _pad_angle: f64) -> ChordLayout {
            panic!("primitive must not run for empty input");
        }
    }

    #[test]
    fn test_empty_matrix_short_circuits() {
        let adapter = LayoutAdapter::with_primitive(Panics, 0.03);
        assert!(adapter.layout(&[]).unwrap().is_none());
    }

    #[test]
    fn test_standard_layout_passes_validation() {
        let adapter = LayoutAdapter::new(0.03);
        let matrix = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let layout = adapter.layout(&matrix).unwrap().unwrap();
        assert_eq!(layout.groups.len(), 2);
        assert_eq!(layout.chords.len(), 1);
    }

    #[test]
    fn test_sorted_groups_rejected() {
        let adapter = LayoutAdapter::with_primitive(Scrambled, 0.03);
        let matrix = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        assert!(matches!(adapter.layout(&matrix), Err(LayoutError::Malformed(_))));
    }

    #[test]
    fn test_non_finite_rejected() {
        let adapter = LayoutAdapter::with_primitive(Broken, 0.03);
        assert!(matches!(adapter.layout(&[vec![0.0]]), Err(LayoutError::Malformed(_))));
    }

    #[test]
    fn test_ragged_matrix_rejected() {
        let adapter = LayoutAdapter::new(0.03);
        let matrix = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(matches!(
            adapter.layout(&matrix),
            Err(LayoutError::NotSquare { row: 1, .. })
        ));
    }
}
