// Host-side sanity checks for frontend constants.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use cab_core::{compose, ConfiguratorStore, SceneTuning, ViewMode};
use constants::*;

#[test]
fn default_scene_fits_the_initial_instance_buffer() {
    for view in ViewMode::ALL {
        let n = compose(&ConfiguratorStore::new(view), &SceneTuning::default())
            .elements
            .len();
        assert!(n <= INSTANCE_CAPACITY, "{view}: {n} elements");
    }
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [CANVAS_ID, SIDEBAR_ID, DEBUG_PANEL_ID, HELP_OVERLAY_ID];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn ranges_are_sane() {
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!((0.0..=1.0).contains(&HIGHLIGHT_STRENGTH));
    assert!(CYLINDER_SEGMENTS >= 3);
    assert!(CLICK_SLOP_PX > 0.0);
}
