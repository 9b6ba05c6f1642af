// Sanity checks on tuning constants and their relationships.

use tree_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_ordered() {
    assert!(FINGER_EXTENDED_RATIO > THUMB_EXTENDED_RATIO);
    assert!(THUMB_EXTENDED_RATIO > 1.0);
    assert!(OPEN_HAND_MIN_EXTENDED > FIST_MAX_EXTENDED + 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn speeds_are_positive_and_focus_is_snappiest() {
    for s in [ASSEMBLE_SPEED, EXPLODE_SPEED, DRIFT_SPEED, FOCUS_SPEED] {
        assert!(s > 0.0);
    }
    assert!(FOCUS_SPEED > EXPLODE_SPEED);
    assert!(EXPLODE_SPEED > ASSEMBLE_SPEED);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shells_and_focus_fit_the_scene() {
    assert!(SHELL_MIN_RADIUS > 0.0);
    assert!(PHOTO_SHELL_MIN_RADIUS >= SHELL_MIN_RADIUS);
    // Focused photo sits between the outer shell and the camera.
    assert!(CAMERA_Z - FOCUS_DISTANCE > 0.0);
    assert!(CAMERA_Z > SHELL_MIN_RADIUS + SHELL_RADIUS_SPAN);
    assert!(STAR_EXPLODED_Y > STAR_ASSEMBLED_Y);
    assert!(STAR_EXPLODED_SCALE > STAR_ASSEMBLED_SCALE);
    assert!(STAR_ASSEMBLED_Y > TREE_HALF_HEIGHT);
    assert!(SNOW_CEILING_Y > SNOW_FLOOR_Y);
}

#[test]
fn palettes_are_non_empty() {
    for cat in Category::ALL {
        assert!(!cat.palette().is_empty());
        assert!(cat.count() > 0);
    }
}
