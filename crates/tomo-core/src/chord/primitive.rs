//! The chord layout primitive.
//!
//! Angles run clockwise from 12 o'clock over `[0, τ]`. Each group's arc is
//! proportional to its row sum; within a group, subgroups follow matrix
//! column order.

use std::f64::consts::TAU;

use super::{Chord, ChordEnd, ChordGroup, ChordLayout, ChordPrimitive};

/// Undirected chord layout without any sorting.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChord;

#[derive(Clone, Default)]
struct PendingChord {
    source: Option<ChordEnd>,
    target: Option<ChordEnd>,
}

impl ChordPrimitive for StandardChord {
    fn compute(&self, matrix: &[Vec<f64>], pad_angle: f64) -> ChordLayout {
        let n = matrix.len();
        if n == 0 {
            return ChordLayout::default();
        }

        let group_sums: Vec<f64> = matrix.iter().map(|row| row.iter().sum()).collect();
        let total: f64 = group_sums.iter().sum();

        let k = if total > 0.0 {
            (TAU - pad_angle * n as f64).max(0.0) / total
        } else {
            0.0
        };
        let dx = if k > 0.0 { pad_angle } else { TAU / n as f64 };

        let mut pending = vec![PendingChord::default(); n * n];
        let mut groups = Vec::with_capacity(n);
        let mut x = 0.0;

        for i in 0..n {
            let x0 = x;
            for j in 0..n {
                if matrix[i][j] == 0.0 && matrix[j][i] == 0.0 {
                    continue;
                }

                let value = matrix[i][j];
                let end = ChordEnd {
                    index: i,
                    start_angle: x,
                    end_angle: x + value * k,
                    value,
                };
                x = end.end_angle;

                if i < j {
                    pending[i * n + j].source = Some(end);
                } else {
                    let slot = &mut pending[j * n + i];
                    if i == j {
                        slot.source = Some(end.clone());
                    }
                    slot.target = Some(end);
                }
            }

            groups.push(ChordGroup {
                index: i,
                start_angle: x0,
                end_angle: x,
                value: group_sums[i],
            });
            x += dx;
        }

        let chords = pending
            .into_iter()
            .filter_map(|p| {
                let (source, target) = (p.source?, p.target?);
                // the heavier side is the source
                Some(if source.value < target.value {
                    Chord {
                        source: target,
                        target: source,
                    }
                } else {
                    Chord { source, target }
                })
            })
            .collect();

        ChordLayout { groups, chords }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_empty_matrix() {
        let layout = StandardChord.compute(&[], 0.03);
        assert!(layout.groups.is_empty());
        assert!(layout.chords.is_empty());
    }

    #[test]
    fn test_arc_sizes_proportional_to_row_sums() {
        let matrix = vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0],
        ];
        let pad = 0.03;
        let layout = StandardChord.compute(&matrix, pad);

        let spans: Vec<f64> = layout.groups.iter().map(|g| g.end_angle - g.start_angle).collect();
        assert!((spans[0] - 2.0 * spans[1]).abs() < EPS);
        assert!((spans[1] - spans[2]).abs() < EPS);

        let covered: f64 = spans.iter().sum();
        assert!((covered - (TAU - 3.0 * pad)).abs() < EPS);
    }

    #[test]
    fn test_groups_in_natural_order_with_padding() {
        let matrix = vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ];
        let layout = StandardChord.compute(&matrix, 0.05);
        for (k, group) in layout.groups.iter().enumerate() {
            assert_eq!(group.index, k);
        }
        for pair in layout.groups.windows(2) {
            assert!((pair[1].start_angle - pair[0].end_angle - 0.05).abs() < EPS);
        }
    }

    #[test]
    fn test_one_chord_per_pair_heavier_side_is_source() {
        // 0 -> 1 only; 1 keeps a zero-width subgroup for the pair
        let matrix = vec![vec![0.0, 1.0], vec![0.0, 0.0]];
        let layout = StandardChord.compute(&matrix, 0.0);

        assert_eq!(layout.chords.len(), 1);
        let chord = &layout.chords[0];
        assert_eq!(chord.source.index, 0);
        assert_eq!(chord.target.index, 1);
        assert_eq!(chord.target.value, 0.0);
        assert!((chord.target.end_angle - chord.target.start_angle).abs() < EPS);
    }

    #[test]
    fn test_reverse_only_edge_swaps_source() {
        let matrix = vec![vec![0.0, 0.0], vec![1.0, 0.0]];
        let layout = StandardChord.compute(&matrix, 0.0);
        assert_eq!(layout.chords[0].source.index, 1);
        assert_eq!(layout.chords[0].target.index, 0);
    }

    #[test]
    fn test_zero_matrix_spreads_groups_evenly() {
        let matrix = vec![vec![0.0; 4]; 4];
        let layout = StandardChord.compute(&matrix, 0.03);
        assert!(layout.chords.is_empty());
        assert!((layout.groups[1].start_angle - TAU / 4.0).abs() < EPS);
    }
}
