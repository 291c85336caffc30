#![allow(missing_docs)]
//! Host-level tests for the tree's position table and layouts.

use core::f32::consts::{FRAC_PI_2, PI};

use christmas_lights::TREE_LEN;
use christmas_lights::layout::{Layout, POSITIONS, Position};

#[test]
fn position_table_has_one_entry_per_tree_pixel() {
    assert_eq!(POSITIONS.len(), TREE_LEN);
    assert!(TREE_LEN > 0);
}

#[test]
fn position_table_coordinates_are_in_range() {
    for (index, position) in POSITIONS.iter().enumerate() {
        assert!((0..=1000).contains(&position.y), "pixel {index}: {position:?}");
        assert!((-500..=500).contains(&position.x), "pixel {index}: {position:?}");
        assert!((-500..=500).contains(&position.z), "pixel {index}: {position:?}");
    }
}

#[test]
fn angles_are_measured_around_the_trunk() {
    assert!(Position::new(0, 0, 100).angle().abs() < 1e-6);
    assert!((Position::new(100, 0, 0).angle() - FRAC_PI_2).abs() < 1e-6);
    assert!((Position::new(-100, 0, 0).angle() + FRAC_PI_2).abs() < 1e-6);
    assert!((Position::new(0, 0, -100).angle() - PI).abs() < 1e-6);
}

#[test]
fn layout_precomputes_one_angle_per_pixel() {
    let positions = [
        Position::new(0, 10, 100),
        Position::new(100, 20, 0),
        Position::new(-50, 30, -50),
    ];
    let layout = Layout::new(&positions);
    assert_eq!(layout.positions(), &positions);
    assert_eq!(layout.angles().len(), 3);
    for (angle, position) in layout.angles().iter().zip(&positions) {
        assert!((angle - position.angle()).abs() < 1e-6);
    }
}

#[test]
fn linear_layout_climbs_straight_up() {
    let layout = Layout::<5>::linear();
    let heights: Vec<i16> = layout.positions().iter().map(|position| position.y).collect();
    assert_eq!(heights, [0, 200, 400, 600, 800]);
    assert!(layout.positions().iter().all(|position| position.x == 0 && position.z == 0));
}

#[test]
fn tree_layout_uses_the_position_table() {
    let layout = Layout::tree();
    assert_eq!(layout.angles().len(), TREE_LEN);
    assert_eq!(layout.positions(), &POSITIONS);
}
