// Host-side tests for the configuration store, exercised through the
// public cab_core API the web frontend uses.

use cab_core::{
    Action, Configuration, ConfiguratorStore, MaterialId, Selection, SubPanel, ViewMode, Wall,
    Zone, CATALOG,
};

fn select_and_apply(store: &mut ConfiguratorStore, zone: Zone, material: MaterialId) {
    store.dispatch(Action::SelectZone(zone));
    store.dispatch(Action::ApplyMaterial(material));
}

#[test]
fn every_zone_starts_with_a_catalog_material() {
    let config = Configuration::default();
    let mut seen = 0;
    for (zone, material) in config.entries() {
        assert!(
            CATALOG.iter().any(|m| m.id == material),
            "{zone} has a material outside the catalog"
        );
        seen += 1;
    }
    assert_eq!(seen, Zone::COUNT);
}

#[test]
fn default_back_wall_is_light_wood_and_the_rest_stainless() {
    let config = Configuration::default();
    for (zone, material) in config.entries() {
        let expected = if zone.wall() == Some(Wall::Back) {
            MaterialId::WoodLight
        } else {
            MaterialId::Stainless
        };
        assert_eq!(material, expected, "zone {zone}");
    }
}

#[test]
fn applying_a_material_changes_only_the_selected_zone() {
    let mut store = ConfiguratorStore::default();
    let before = store.configuration().clone();
    select_and_apply(&mut store, Zone::Floor, MaterialId::WoodDark);

    assert_eq!(store.configuration().material(Zone::Floor), MaterialId::WoodDark);
    for zone in Zone::all().filter(|z| *z != Zone::Floor) {
        assert_eq!(
            store.configuration().material(zone),
            before.material(zone),
            "zone {zone} changed"
        );
    }
}

#[test]
fn back_wall_can_be_switched_to_stainless() {
    let mut store = ConfiguratorStore::default();
    let a = Zone::Wall(Wall::Back);
    assert_eq!(store.configuration().material(a), MaterialId::WoodLight);

    select_and_apply(&mut store, a, MaterialId::Stainless);

    assert_eq!(store.configuration().material(a), MaterialId::Stainless);
    let mut expected = Configuration::default();
    expected.assign(a, MaterialId::Stainless);
    assert_eq!(store.configuration(), &expected);
}

#[test]
fn apply_without_selection_is_a_no_op() {
    let mut store = ConfiguratorStore::default();
    assert!(!store.dispatch(Action::ApplyMaterial(MaterialId::Mirror)));
    assert_eq!(store.configuration(), &Configuration::default());
    assert_eq!(store.revision(), 0);
}

#[test]
fn wall_then_digit_selects_the_sub_panel() {
    let mut store = ConfiguratorStore::default();
    store.dispatch(Action::SelectZone(Zone::Wall(Wall::Back)));
    store.dispatch(Action::SelectSubPanel(SubPanel::P2));
    assert_eq!(
        store.selected_zone(),
        Some(Zone::WallPanel(Wall::Back, SubPanel::P2))
    );
    assert_eq!(store.selected_zone().map(|z| z.to_string()).as_deref(), Some("A2"));
    assert_eq!(store.active_wall(), Some(Wall::Back));
}

#[test]
fn sub_panel_without_active_wall_is_ignored() {
    let mut store = ConfiguratorStore::default();
    store.dispatch(Action::SelectZone(Zone::Ceiling));
    assert!(!store.dispatch(Action::SelectSubPanel(SubPanel::P1)));
    assert_eq!(store.selected_zone(), Some(Zone::Ceiling));
}

#[test]
fn selecting_a_sub_panel_zone_directly_activates_its_wall() {
    let mut store = ConfiguratorStore::default();
    store.dispatch(Action::SelectZone(Zone::WallPanel(Wall::Left, SubPanel::P5)));
    assert_eq!(store.active_wall(), Some(Wall::Left));
}

#[test]
fn switching_view_keeps_configuration_and_selection() {
    let mut store = ConfiguratorStore::default();
    select_and_apply(&mut store, Zone::AccentRight, MaterialId::Bronze);
    let config = store.configuration().clone();
    let selection = store.selection();

    assert!(store.dispatch(Action::SetViewMode(ViewMode::Straight)));
    assert_eq!(store.view_mode(), ViewMode::Straight);
    assert_eq!(store.configuration(), &config);
    assert_eq!(store.selection(), selection);

    assert!(store.dispatch(Action::ToggleViewMode));
    assert_eq!(store.view_mode(), ViewMode::Front);
    assert!(!store.dispatch(Action::SetViewMode(ViewMode::Front)));
}

#[test]
fn clear_selection_forgets_the_active_wall() {
    let mut store = ConfiguratorStore::default();
    store.dispatch(Action::SelectZone(Zone::Wall(Wall::Right)));
    assert!(store.dispatch(Action::ClearSelection));
    assert_eq!(store.selection(), Selection::default());
    assert!(!store.dispatch(Action::ClearSelection));
}

#[test]
fn selected_material_tracks_assignment() {
    let mut store = ConfiguratorStore::default();
    assert_eq!(store.selected_material(), None);
    select_and_apply(&mut store, Zone::ButtonPanel, MaterialId::Champagne);
    assert_eq!(store.selected_material(), Some(MaterialId::Champagne));
}

#[test]
fn revision_counts_observable_changes() {
    let mut store = ConfiguratorStore::default();
    let actions = [
        Action::SelectZone(Zone::Floor),
        Action::SelectZone(Zone::Floor),
        Action::ApplyMaterial(MaterialId::White),
        Action::ApplyMaterial(MaterialId::White),
        Action::ToggleViewMode,
        Action::Reset,
        Action::Reset,
    ];
    let changed = actions.into_iter().filter(|a| store.dispatch(*a)).count();
    assert_eq!(changed, 4);
    assert_eq!(store.revision(), 4);
}
