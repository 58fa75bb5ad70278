// Host-side tests for sidebar and debug panel markup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod markup {
    include!("../src/markup.rs");
}

use cab_core::{
    Action, ConfiguratorStore, MaterialId, SceneTuning, SubPanel, TuningParam, ViewMode, Wall,
    Zone,
};
use markup::*;

fn store_with(actions: &[Action]) -> ConfiguratorStore {
    let mut store = ConfiguratorStore::default();
    for a in actions {
        store.dispatch(*a);
    }
    store
}

#[test]
fn swatches_are_disabled_exactly_when_nothing_is_selected() {
    let idle = sidebar_html(&ConfiguratorStore::default());
    assert_eq!(idle.matches("class=\"swatch disabled").count(), MaterialId::ALL.len());

    let busy = sidebar_html(&store_with(&[Action::SelectZone(Zone::Floor)]));
    assert_eq!(busy.matches("disabled").count(), 0);
    assert_eq!(busy.matches("data-material=").count(), MaterialId::ALL.len());
}

#[test]
fn selected_zone_material_is_marked_active() {
    let html = sidebar_html(&store_with(&[Action::SelectZone(Zone::Wall(Wall::Back))]));
    assert!(html.contains("class=\"swatch active\" data-material=\"woodLight\""));
    assert_eq!(html.matches("swatch active").count(), 1);
}

#[test]
fn sub_panel_buttons_follow_the_active_wall() {
    let none = sidebar_html(&ConfiguratorStore::default());
    assert!(!none.contains("data-sub="));

    let html = sidebar_html(&store_with(&[
        Action::SelectZone(Zone::Wall(Wall::Left)),
        Action::SelectSubPanel(SubPanel::P4),
    ]));
    assert_eq!(html.matches("data-sub=").count(), SubPanel::COUNT);
    assert!(html.contains("class=\"sub-btn selected\" data-sub=\"4\""));
    assert!(html.contains(">C4</button>"));
    assert!(html.contains("class=\"zone-btn contains-selected\" data-zone=\"C\""));
}

#[test]
fn active_view_button_is_marked() {
    let mut store = ConfiguratorStore::new(ViewMode::Straight);
    let html = sidebar_html(&store);
    assert!(html.contains("class=\"view-btn active\" data-view=\"straight\""));
    assert!(html.contains("class=\"view-btn\" data-view=\"front\""));
    store.dispatch(Action::ToggleViewMode);
    assert!(sidebar_html(&store).contains("class=\"view-btn active\" data-view=\"front\""));
}

#[test]
fn info_box_names_zone_and_material() {
    let html = sidebar_html(&store_with(&[
        Action::SelectZone(Zone::ButtonPanel),
        Action::ApplyMaterial(MaterialId::Bronze),
    ]));
    assert!(html.contains("<strong>H</strong> Button panel"));
    assert!(html.contains(MaterialId::Bronze.name()));
    assert!(sidebar_html(&ConfiguratorStore::default()).contains("class=\"hint\""));
}

#[test]
fn review_lists_every_zone_and_reset() {
    let html = sidebar_html(&ConfiguratorStore::default());
    assert_eq!(html.matches("<li data-zone=").count(), Zone::COUNT);
    assert!(html.contains("data-action=\"reset\""));
}

#[test]
fn every_control_decodes_to_an_action() {
    let html = sidebar_html(&store_with(&[Action::SelectZone(Zone::Wall(Wall::Right))]));
    for attr in SIDEBAR_CONTROLS {
        let needle = format!("data-{attr}=\"");
        for chunk in html.split(&needle).skip(1) {
            let value = &chunk[..chunk.find('"').unwrap()];
            assert!(
                Action::from_control(attr, value).is_ok(),
                "data-{attr}={value:?} does not decode"
            );
        }
    }
}

#[test]
fn swatch_background_uses_texture_when_present() {
    assert!(swatch_style(MaterialId::Stainless).contains("url('/download.jpeg')"));
    assert!(swatch_style(MaterialId::WoodLight).contains("url('/W2008_2.jpg')"));
    let flat = swatch_style(MaterialId::Bronze);
    assert_eq!(flat, "background-color:#B8860B");
}

#[test]
fn family_titles_are_escaped() {
    let html = sidebar_html(&ConfiguratorStore::default());
    assert!(html.contains("<h4>METALS</h4>"));
    assert!(html.contains("<h4>WOOD &amp; GLASS</h4>"));
}

#[test]
fn debug_panel_has_a_slider_per_parameter() {
    let html = debug_panel_html(&SceneTuning::default());
    assert_eq!(html.matches("type=\"range\"").count(), TuningParam::ALL.len());
    for p in TuningParam::ALL {
        assert!(html.contains(&format!("data-param=\"{}\"", p.key())));
        assert!(html.contains(&format!("id=\"tune-{}\"", p.key())));
    }
    assert!(html.contains("data-action=\"reset-tuning\""));
}

#[test]
fn toggle_values_read_as_on_off() {
    assert_eq!(format_value(TuningParam::Handrails, 1.0), "on");
    assert_eq!(format_value(TuningParam::CeilingLights, 0.0), "off");
    assert_eq!(format_value(TuningParam::Ambient, 0.25), "0.25");
}
