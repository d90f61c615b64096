use eframe::egui::Pos2;

/// Number of dots on each screen edge.
pub const DOTS_PER_SIDE: usize = 4;

/// Fraction of the screen height the dot columns span at spacing 1.0.
const COLUMN_SPAN: f32 = 0.8;
/// Fraction of the screen height above the first dot.
const COLUMN_TOP: f32 = 0.10;

/// Compute the 8 fixed anchor positions for the given screen size.
///
/// `edge_offset` is the horizontal inset as a fraction of the width,
/// `spacing` scales the vertical gutter (larger values pack the dots
/// tighter). The left column comes first, then the right column, both
/// sharing the same 4 ascending y steps. Degenerate inputs (spacing near 0)
/// produce very large gutters; the sliders keep callers in sane ranges.
pub fn anchor_positions(width: f32, height: f32, edge_offset: f32, spacing: f32) -> Vec<Pos2> {
    let gutter = (height * COLUMN_SPAN) / ((DOTS_PER_SIDE - 1) as f32 * spacing);
    let base_y = height * COLUMN_TOP;
    let left_x = width * edge_offset;
    let right_x = width - left_x;

    let ys: Vec<f32> = (0..DOTS_PER_SIDE)
        .map(|i| base_y + i as f32 * gutter)
        .collect();

    ys.iter()
        .map(|&y| Pos2::new(left_x, y))
        .chain(ys.iter().map(|&y| Pos2::new(right_x, y)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_one_spans_the_middle_eighty_percent() {
        let points = anchor_positions(1000.0, 1000.0, 0.1, 1.0);
        assert!((points[0].y - 100.0).abs() < 1e-3);
        assert!((points[DOTS_PER_SIDE - 1].y - points[0].y - 800.0).abs() < 1e-3);
    }

    #[test]
    fn both_columns_share_the_same_y_steps() {
        let points = anchor_positions(1366.0, 768.0, 0.02, 0.3);
        for i in 0..DOTS_PER_SIDE {
            assert_eq!(points[i].y, points[i + DOTS_PER_SIDE].y);
        }
    }
}
