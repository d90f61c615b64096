use dot_overlay::animator::DotField;
use eframe::egui::Vec2;

#[test]
fn one_render_tick_covers_twelve_percent_of_the_distance() {
    let mut field = DotField::new(8);
    field.apply_delta(Vec2::new(100.0, 0.0));
    field.step_render();
    for idx in 0..field.len() {
        assert!((field.current(idx).x - 12.0).abs() < 1e-4);
        assert_eq!(field.current(idx).y, 0.0);
    }
}

#[test]
fn render_converges_and_then_snaps_exactly_onto_the_target() {
    let mut field = DotField::new(1);
    field.apply_delta(Vec2::new(100.0, -40.0));
    let mut ticks = 0;
    while field.current(0) != field.target(0) {
        field.step_render();
        ticks += 1;
        assert!(ticks < 1000, "render step did not converge");
    }
    assert_eq!(field.current(0), field.target(0));
}

#[test]
fn return_decay_is_monotone_down_to_exactly_zero() {
    let mut field = DotField::new(8);
    field.apply_delta(Vec2::new(37.5, -12.25));
    assert!(field.is_returning());

    let mut previous = field.target(0).length();
    let mut ticks = 0;
    while field.is_returning() {
        field.step_return();
        let magnitude = field.target(0).length();
        assert!(magnitude <= previous);
        previous = magnitude;
        ticks += 1;
        assert!(ticks < 1000, "return step did not settle");
    }
    for idx in 0..field.len() {
        assert_eq!(field.target(idx), Vec2::ZERO);
    }
}

#[test]
fn settled_return_loop_schedules_no_further_work() {
    let mut field = DotField::new(2);
    field.apply_delta(Vec2::new(0.2, 0.0));
    while field.is_returning() {
        field.step_return();
    }
    let snapshot = field.target(0);
    field.step_return();
    assert!(!field.is_returning());
    assert_eq!(field.target(0), snapshot);
}

#[test]
fn movement_during_the_settle_back_rearms_the_loop() {
    let mut field = DotField::new(2);
    field.apply_delta(Vec2::new(0.2, 0.0));
    while field.is_returning() {
        field.step_return();
    }
    field.apply_delta(Vec2::new(5.0, 5.0));
    assert!(field.is_returning());
}

#[test]
fn deltas_hit_every_dot_in_lockstep() {
    let mut field = DotField::new(8);
    field.apply_delta(Vec2::new(3.0, -2.0));
    field.apply_delta(Vec2::new(1.0, 1.0));
    for idx in 0..field.len() {
        assert_eq!(field.target(idx), Vec2::new(4.0, -1.0));
    }
}
