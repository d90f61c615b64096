use dot_overlay::layout::{anchor_positions, DOTS_PER_SIDE};

#[test]
fn produces_eight_points_mirrored_about_the_midpoint() {
    let width = 1920.0;
    let points = anchor_positions(width, 1080.0, 0.10, 1.0);
    assert_eq!(points.len(), 2 * DOTS_PER_SIDE);

    for i in 0..DOTS_PER_SIDE {
        let left = points[i];
        let right = points[i + DOTS_PER_SIDE];
        assert!((left.x + right.x - width).abs() < 1e-3);
        assert_eq!(left.y, right.y);
    }
}

#[test]
fn y_steps_strictly_increase_on_both_sides() {
    let points = anchor_positions(2560.0, 1440.0, 0.05, 0.7);
    for i in 1..DOTS_PER_SIDE {
        assert!(points[i].y > points[i - 1].y);
        assert!(points[DOTS_PER_SIDE + i].y > points[DOTS_PER_SIDE + i - 1].y);
    }
}

#[test]
fn edge_offset_is_a_fraction_of_the_width() {
    let points = anchor_positions(1000.0, 500.0, 0.25, 1.0);
    assert_eq!(points[0].x, 250.0);
    assert_eq!(points[DOTS_PER_SIDE].x, 750.0);
}

#[test]
fn larger_spacing_packs_the_dots_tighter() {
    let dense = anchor_positions(1000.0, 1000.0, 0.1, 2.0);
    let sparse = anchor_positions(1000.0, 1000.0, 0.1, 0.5);
    let dense_gutter = dense[1].y - dense[0].y;
    let sparse_gutter = sparse[1].y - sparse[0].y;
    assert!(sparse_gutter > dense_gutter);
}
