//! Configuration and selection state.
//!
//! `ConfiguratorStore` is the single owner of what the user has chosen. UI
//! code holds it behind `Rc<RefCell<_>>` and mutates it only through
//! [`ConfiguratorStore::dispatch`]; the renderer watches [`revision`] to know
//! when to recompose the scene.
//!
//! [`revision`]: ConfiguratorStore::revision

use crate::error::ParseError;
use crate::material::MaterialId;
use crate::view::ViewMode;
use crate::zone::{SubPanel, Wall, Zone};

/// Total zone → material assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    materials: [MaterialId; Zone::COUNT],
}

impl Default for Configuration {
    fn default() -> Self {
        let mut materials = [MaterialId::Stainless; Zone::COUNT];
        materials[Zone::Wall(Wall::Back).index()] = MaterialId::WoodLight;
        for p in SubPanel::ALL {
            materials[Zone::WallPanel(Wall::Back, p).index()] = MaterialId::WoodLight;
        }
        Self { materials }
    }
}

impl Configuration {
    pub fn material(&self, zone: Zone) -> MaterialId {
        self.materials[zone.index()]
    }

    /// Returns the previous material.
    pub fn assign(&mut self, zone: Zone, material: MaterialId) -> MaterialId {
        std::mem::replace(&mut self.materials[zone.index()], material)
    }

    /// Every zone with its material, in zone index order.
    pub fn entries(&self) -> impl Iterator<Item = (Zone, MaterialId)> + '_ {
        Zone::all().map(move |z| (z, self.material(z)))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub zone: Option<Zone>,
    /// Wall whose sub-panel buttons are on offer.
    pub active_wall: Option<Wall>,
}

/// Everything the UI can ask the store to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SelectZone(Zone),
    SelectSubPanel(SubPanel),
    ApplyMaterial(MaterialId),
    ClearSelection,
    SetViewMode(ViewMode),
    ToggleViewMode,
    Reset,
}

impl Action {
    /// Decode a sidebar control from its data attribute name and value,
    /// e.g. `("zone", "B")` or `("material", "woodDark")`.
    pub fn from_control(attr: &str, value: &str) -> Result<Action, ParseError> {
        match attr {
            "zone" => value.parse().map(Action::SelectZone),
            "sub" => value.parse().map(Action::SelectSubPanel),
            "material" => value.parse().map(Action::ApplyMaterial),
            "view" => value.parse().map(Action::SetViewMode),
            "action" => match value {
                "reset" => Ok(Action::Reset),
                "clear" => Ok(Action::ClearSelection),
                "toggle-view" => Ok(Action::ToggleViewMode),
                _ => Err(ParseError::UnknownControl(attr.into(), value.into())),
            },
            _ => Err(ParseError::UnknownControl(attr.into(), value.into())),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConfiguratorStore {
    config: Configuration,
    selection: Selection,
    view: ViewMode,
    revision: u64,
}

impl ConfiguratorStore {
    pub fn new(view: ViewMode) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_zone(&self) -> Option<Zone> {
        self.selection.zone
    }

    pub fn active_wall(&self) -> Option<Wall> {
        self.selection.active_wall
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    /// Bumped on every observable change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn selected_material(&self) -> Option<MaterialId> {
        self.selection.zone.map(|z| self.config.material(z))
    }

    /// Apply one action. Returns `true` when observable state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let changed = match action {
            Action::SelectZone(zone) => self.select_zone(zone),
            Action::SelectSubPanel(panel) => self.select_sub_panel(panel),
            Action::ApplyMaterial(material) => self.apply_material(material),
            Action::ClearSelection => self.clear_selection(),
            Action::SetViewMode(view) => self.set_view_mode(view),
            Action::ToggleViewMode => self.set_view_mode(self.view.toggled()),
            Action::Reset => self.reset(),
        };
        if changed {
            self.revision += 1;
            log::debug!("[store] {:?} -> revision {}", action, self.revision);
        }
        changed
    }

    fn select_zone(&mut self, zone: Zone) -> bool {
        let before = self.selection;
        self.selection.zone = Some(zone);
        if let Some(wall) = zone.wall() {
            self.selection.active_wall = Some(wall);
        }
        before != self.selection
    }

    fn select_sub_panel(&mut self, panel: SubPanel) -> bool {
        match self.selection.active_wall {
            Some(wall) => self.select_zone(Zone::WallPanel(wall, panel)),
            None => false,
        }
    }

    fn apply_material(&mut self, material: MaterialId) -> bool {
        match self.selection.zone {
            Some(zone) => self.config.assign(zone, material) != material,
            None => false,
        }
    }

    fn clear_selection(&mut self) -> bool {
        let before = self.selection;
        self.selection = Selection::default();
        before != self.selection
    }

    fn set_view_mode(&mut self, view: ViewMode) -> bool {
        std::mem::replace(&mut self.view, view) != view
    }

    fn reset(&mut self) -> bool {
        let fresh = Configuration::default();
        let changed = self.config != fresh || self.selection != Selection::default();
        self.config = fresh;
        self.selection = Selection::default();
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_bumps_revision_only_on_change() {
        let mut s = ConfiguratorStore::default();
        assert!(!s.dispatch(Action::ApplyMaterial(MaterialId::Bronze)));
        assert_eq!(s.revision(), 0);
        assert!(s.dispatch(Action::SelectZone(Zone::Floor)));
        assert!(!s.dispatch(Action::SelectZone(Zone::Floor)));
        assert_eq!(s.revision(), 1);
        // same material twice: second is a no-op
        assert!(s.dispatch(Action::ApplyMaterial(MaterialId::Bronze)));
        assert!(!s.dispatch(Action::ApplyMaterial(MaterialId::Bronze)));
        assert_eq!(s.revision(), 2);
    }

    #[test]
    fn non_wall_zone_keeps_active_wall() {
        let mut s = ConfiguratorStore::default();
        s.dispatch(Action::SelectZone(Zone::Wall(Wall::Right)));
        s.dispatch(Action::SelectZone(Zone::Ceiling));
        assert_eq!(s.active_wall(), Some(Wall::Right));
        s.dispatch(Action::SelectSubPanel(SubPanel::P4));
        assert_eq!(s.selected_zone(), Some(Zone::WallPanel(Wall::Right, SubPanel::P4)));
    }

    #[test]
    fn controls_decode_to_actions() {
        assert_eq!(
            Action::from_control("zone", "B3"),
            Ok(Action::SelectZone(Zone::WallPanel(Wall::Right, SubPanel::P3)))
        );
        assert_eq!(Action::from_control("sub", "2"), Ok(Action::SelectSubPanel(SubPanel::P2)));
        assert_eq!(
            Action::from_control("material", "glass"),
            Ok(Action::ApplyMaterial(MaterialId::Glass))
        );
        assert_eq!(
            Action::from_control("view", "straight"),
            Ok(Action::SetViewMode(ViewMode::Straight))
        );
        assert_eq!(Action::from_control("action", "reset"), Ok(Action::Reset));
        assert!(Action::from_control("action", "explode").is_err());
        assert!(matches!(
            Action::from_control("zone", "Z"),
            Err(ParseError::UnknownZone(_))
        ));
    }

    #[test]
    fn reset_restores_defaults_but_keeps_view() {
        let mut s = ConfiguratorStore::new(ViewMode::Straight);
        s.dispatch(Action::SelectZone(Zone::Floor));
        s.dispatch(Action::ApplyMaterial(MaterialId::WoodDark));
        assert!(s.dispatch(Action::Reset));
        assert_eq!(s.configuration(), &Configuration::default());
        assert_eq!(s.selection(), Selection::default());
        assert_eq!(s.view_mode(), ViewMode::Straight);
        assert!(!s.dispatch(Action::Reset));
    }
}
