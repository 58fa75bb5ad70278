//! Scene composition and picking.
//!
//! One parameterized description of the cab: a fixed layout of boxes and
//! cylinders whose appearance comes from the configuration and whose
//! visibility comes from the view mode. The result is a flat list of
//! elements in world space that the renderer instances directly.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

use crate::material::{Appearance, MaterialId};
use crate::store::ConfiguratorStore;
use crate::tuning::SceneTuning;
use crate::view::ViewMode;
use crate::zone::{SubPanel, Wall, Zone};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Unit cube scaled to size.
    Box,
    /// Y-axis unit cylinder scaled to (diameter, height, diameter).
    Cylinder,
}

#[derive(Clone, Debug)]
pub struct SceneElement {
    pub shape: Shape,
    /// Unit primitive to world, including the view's group rotation.
    pub transform: Mat4,
    pub appearance: Appearance,
    /// Zone selected when this element is clicked.
    pub zone: Option<Zone>,
    pub highlighted: bool,
}

/// Wall geometry: centre, yaw, width, height. Panels face the cab interior
/// along the wall's local +Z.
struct WallLayout {
    centre: Vec3,
    yaw: f32,
    width: f32,
    height: f32,
}

const WALL_THICKNESS: f32 = 0.08;
const PANEL_OFFSET: f32 = 0.045;
const PANEL_THICKNESS: f32 = 0.01;
const PANEL_GAP: f32 = 0.05;
const PANEL_MARGIN: f32 = 0.1;

fn wall_layout(wall: Wall) -> WallLayout {
    match wall {
        Wall::Back => WallLayout {
            centre: Vec3::new(0.0, 2.0, -2.0),
            yaw: 0.0,
            width: 4.0,
            height: 5.0,
        },
        Wall::Right => WallLayout {
            centre: Vec3::new(2.05, 2.0, -0.5),
            yaw: -FRAC_PI_2,
            width: 3.0,
            height: 5.0,
        },
        Wall::Left => WallLayout {
            centre: Vec3::new(-2.05, 2.0, -0.5),
            yaw: FRAC_PI_2,
            width: 3.0,
            height: 5.0,
        },
    }
}

const FLOOR_CENTRE: Vec3 = Vec3::new(0.0, -0.35, -0.5);
const FLOOR_SIZE: Vec3 = Vec3::new(4.0, 0.1, 3.0);
const CEILING_CENTRE: Vec3 = Vec3::new(0.0, 4.45, -0.5);
const CEILING_SIZE: Vec3 = Vec3::new(4.0, 0.08, 3.0);
const ACCENT_SIZE: Vec3 = Vec3::new(0.08, 4.5, 0.02);
const ACCENT_X: f32 = 1.96;
const ACCENT_Z: f32 = 0.95;
const BUTTON_PANEL_CENTRE: Vec3 = Vec3::new(1.85, 2.0, -1.75);
const BUTTON_PANEL_SIZE: Vec3 = Vec3::new(0.35, 1.2, 0.08);
const BUTTON_COUNT: usize = 10;
const HANDRAIL_SIZE: Vec3 = Vec3::new(0.05, 0.08, 2.8);
const HANDRAIL_X: f32 = 1.95;
const HANDRAIL_Y: f32 = 1.1;

const TRIM_HEX: u32 = 0xBBBBBB;
const FIXTURE_HEX: u32 = 0xDDDDDD;
const LIGHT_HEX: u32 = 0xFFFBF0;
const LIT_BUTTON_HEX: u32 = 0x4A9EFF;
const BUTTON_HEX: u32 = 0x2A2A2A;
const FRAME_HEX: u32 = 0x999999;

/// Local transform of a unit primitive: translate, yaw, then scale.
fn placed(centre: Vec3, yaw: f32, size: Vec3) -> Mat4 {
    Mat4::from_translation(centre) * Mat4::from_rotation_y(yaw) * Mat4::from_scale(size)
}

/// Top-to-bottom strip transform for a sub-panel, relative to the wall frame.
pub fn sub_panel_local(width: f32, height: f32, panel: SubPanel) -> Mat4 {
    let strip = height / SubPanel::COUNT as f32;
    let y = height / 2.0 - (panel.index() as f32 + 0.5) * strip;
    Mat4::from_translation(Vec3::new(0.0, y, PANEL_OFFSET))
        * Mat4::from_scale(Vec3::new(
            width - PANEL_MARGIN,
            strip - PANEL_GAP,
            PANEL_THICKNESS,
        ))
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub view: ViewMode,
    pub elements: Vec<SceneElement>,
}

struct Composer<'a> {
    store: &'a ConfiguratorStore,
    group: Mat4,
    elements: Vec<SceneElement>,
}

impl<'a> Composer<'a> {
    fn appearance(&self, zone: Zone) -> Appearance {
        Appearance::from(self.store.configuration().material(zone))
    }

    fn is_highlighted(&self, zone: Zone) -> bool {
        match (self.store.selected_zone(), zone) {
            (Some(sel), z) if sel == z => true,
            // a selected wall lights up its sub-panels too
            (Some(Zone::Wall(w)), Zone::WallPanel(pw, _)) => w == pw,
            _ => false,
        }
    }

    /// Zone body whose finish follows the configuration.
    fn surface(&mut self, shape: Shape, local: Mat4, zone: Zone) {
        let appearance = self.appearance(zone);
        let highlighted = self.is_highlighted(zone);
        self.elements.push(SceneElement {
            shape,
            transform: self.group * local,
            appearance,
            zone: Some(zone),
            highlighted,
        });
    }

    /// Fixed-finish part; still clickable when it belongs to a zone.
    fn trim(&mut self, shape: Shape, local: Mat4, appearance: Appearance, zone: Option<Zone>) {
        self.elements.push(SceneElement {
            shape,
            transform: self.group * local,
            appearance,
            zone,
            highlighted: false,
        });
    }

    fn wall(&mut self, wall: Wall) {
        let layout = wall_layout(wall);
        let frame = Mat4::from_translation(layout.centre) * Mat4::from_rotation_y(layout.yaw);
        let body = Mat4::from_scale(Vec3::new(layout.width, layout.height, WALL_THICKNESS));
        self.surface(Shape::Box, frame * body, Zone::Wall(wall));
        for p in SubPanel::ALL {
            let local = frame * sub_panel_local(layout.width, layout.height, p);
            self.surface(Shape::Box, local, Zone::WallPanel(wall, p));
        }
    }

    fn floor(&mut self) {
        self.surface(Shape::Box, placed(FLOOR_CENTRE, 0.0, FLOOR_SIZE), Zone::Floor);
        self.trim(
            Shape::Box,
            placed(
                FLOOR_CENTRE + Vec3::new(0.0, FLOOR_SIZE.y / 2.0 + 0.005, 0.0),
                0.0,
                Vec3::new(FLOOR_SIZE.x - 0.2, 0.01, 0.02),
            ),
            Appearance::flat(0xCCCCCC, 0.1, 0.9),
            Some(Zone::Floor),
        );
    }

    fn ceiling(&mut self, with_fixtures: bool) {
        self.surface(Shape::Box, placed(CEILING_CENTRE, 0.0, CEILING_SIZE), Zone::Ceiling);
        let under = CEILING_CENTRE.y - CEILING_SIZE.y / 2.0 - 0.01;
        let grid = Appearance::flat(TRIM_HEX, 0.5, 0.5);
        for i in [-0.5f32, 0.5] {
            self.trim(
                Shape::Box,
                placed(
                    Vec3::new(CEILING_CENTRE.x, under, CEILING_CENTRE.z + i * CEILING_SIZE.z / 3.0),
                    0.0,
                    Vec3::new(CEILING_SIZE.x - 0.1, 0.02, 0.03),
                ),
                grid,
                Some(Zone::Ceiling),
            );
            self.trim(
                Shape::Box,
                placed(
                    Vec3::new(CEILING_CENTRE.x + i * CEILING_SIZE.x / 3.0, under, CEILING_CENTRE.z),
                    0.0,
                    Vec3::new(0.03, 0.02, CEILING_SIZE.z - 0.1),
                ),
                grid,
                Some(Zone::Ceiling),
            );
        }
        if !with_fixtures {
            return;
        }
        for i in -1..=1 {
            for j in -1..=1 {
                let at = Vec3::new(
                    CEILING_CENTRE.x + i as f32 * CEILING_SIZE.x / 3.0,
                    CEILING_CENTRE.y - 0.06,
                    CEILING_CENTRE.z + j as f32 * CEILING_SIZE.z / 3.0,
                );
                self.trim(
                    Shape::Cylinder,
                    placed(at, 0.0, Vec3::new(0.4, 0.04, 0.4)),
                    Appearance::flat(FIXTURE_HEX, 0.4, 0.6),
                    Some(Zone::Ceiling),
                );
                self.trim(
                    Shape::Cylinder,
                    placed(at - Vec3::new(0.0, 0.015, 0.0), 0.0, Vec3::new(0.3, 0.02, 0.3)),
                    Appearance::glowing(LIGHT_HEX, 0.4),
                    Some(Zone::Ceiling),
                );
            }
        }
    }

    fn accent(&mut self, zone: Zone, x: f32) {
        self.surface(
            Shape::Box,
            placed(Vec3::new(x, 2.0, ACCENT_Z), 0.0, ACCENT_SIZE),
            zone,
        );
    }

    fn button_panel(&mut self) {
        let zone = Zone::ButtonPanel;
        self.surface(Shape::Box, placed(BUTTON_PANEL_CENTRE, 0.0, BUTTON_PANEL_SIZE), zone);
        let face_z = BUTTON_PANEL_CENTRE.z + BUTTON_PANEL_SIZE.z / 2.0;
        self.trim(
            Shape::Box,
            placed(
                Vec3::new(BUTTON_PANEL_CENTRE.x + 0.02, BUTTON_PANEL_CENTRE.y, face_z),
                0.0,
                Vec3::new(BUTTON_PANEL_SIZE.x - 0.03, BUTTON_PANEL_SIZE.y - 0.05, 0.02),
            ),
            Appearance::flat(FRAME_HEX, 0.4, 0.6),
            Some(zone),
        );
        for i in 0..BUTTON_COUNT {
            let row = (i / 2) as f32;
            let col = (i % 2) as f32;
            let centre = Vec3::new(
                BUTTON_PANEL_CENTRE.x + 0.03 + (col - 0.5) * 0.12,
                BUTTON_PANEL_CENTRE.y + 0.4 - row * 0.18,
                face_z + 0.0175,
            );
            // face the button towards the cab interior
            let local = Mat4::from_translation(centre)
                * Mat4::from_rotation_x(FRAC_PI_2)
                * Mat4::from_scale(Vec3::new(0.07, 0.015, 0.07));
            let appearance = if i == 0 {
                Appearance::glowing(LIT_BUTTON_HEX, 0.5)
            } else {
                Appearance::flat(BUTTON_HEX, 0.7, 0.3)
            };
            self.trim(Shape::Cylinder, local, appearance, Some(zone));
        }
    }

    fn handrail(&mut self, x: f32) {
        self.trim(
            Shape::Box,
            placed(Vec3::new(x, HANDRAIL_Y, -0.5), 0.0, HANDRAIL_SIZE),
            Appearance::from(MaterialId::Stainless),
            None,
        );
    }
}

/// Build the visible scene for the store's current view and configuration.
pub fn compose(store: &ConfiguratorStore, tuning: &SceneTuning) -> Scene {
    let view = store.view_mode();
    let mut c = Composer {
        store,
        group: view.group_transform(),
        elements: Vec::with_capacity(96),
    };

    for wall in Wall::ALL {
        if view.shows_wall(wall) {
            c.wall(wall);
        }
    }
    c.floor();
    c.ceiling(tuning.show_ceiling_lights);
    c.accent(Zone::AccentRight, ACCENT_X);
    if view.shows_zone(Zone::AccentLeft) {
        c.accent(Zone::AccentLeft, -ACCENT_X);
    }
    c.button_panel();
    if tuning.show_handrails {
        c.handrail(HANDRAIL_X);
        if view.shows_left_side() {
            c.handrail(-HANDRAIL_X);
        }
    }

    Scene {
        view,
        elements: c.elements,
    }
}

impl Scene {
    pub fn contains_zone(&self, zone: Zone) -> bool {
        self.elements.iter().any(|e| e.zone == Some(zone))
    }

    /// Nearest clickable zone along a world-space ray.
    pub fn pick(&self, origin: Vec3, dir: Vec3) -> Option<Zone> {
        self.elements
            .iter()
            .filter_map(|e| {
                let zone = e.zone?;
                let inv = e.transform.inverse();
                let t = ray_unit_box(inv.transform_point3(origin), inv.transform_vector3(dir))?;
                Some((t, zone))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, zone)| zone)
    }
}

/// Slab test against [-0.5, 0.5]^3. Returns the entry distance along the ray,
/// or the exit distance when the origin is inside. Non-finite rays never hit.
pub fn ray_unit_box(origin: Vec3, dir: Vec3) -> Option<f32> {
    if !origin.is_finite() || !dir.is_finite() {
        return None;
    }
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < 1e-9 {
            if o.abs() > 0.5 {
                return None;
            }
            continue;
        }
        let t0 = (-0.5 - o) / d;
        let t1 = (0.5 - o) / d;
        t_min = t_min.max(t0.min(t1));
        t_max = t_max.min(t0.max(t1));
    }
    if t_max < t_min || t_max < 0.0 {
        return None;
    }
    let t = if t_min >= 0.0 { t_min } else { t_max };
    t.is_finite().then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_box_hits_and_misses() {
        let t = ray_unit_box(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z).unwrap();
        assert!((t - 4.5).abs() < 1e-6);
        assert!(ray_unit_box(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z).is_none());
        assert!(ray_unit_box(Vec3::new(0.0, 0.0, 5.0), Vec3::Z).is_none());
        let inside = ray_unit_box(Vec3::ZERO, Vec3::X).unwrap();
        assert!((inside - 0.5).abs() < 1e-6);
    }

    #[test]
    fn non_finite_rays_miss() {
        assert_eq!(ray_unit_box(Vec3::ZERO, Vec3::NAN), None);
        assert_eq!(ray_unit_box(Vec3::NAN, Vec3::NEG_Z), None);
        let inf = Vec3::new(f32::INFINITY, 0.0, -1.0);
        assert_eq!(ray_unit_box(Vec3::new(0.0, 0.0, 5.0), inf), None);
    }

    #[test]
    fn wall_body_is_followed_by_its_panels() {
        let store = ConfiguratorStore::new(ViewMode::Straight);
        let scene = compose(&store, &SceneTuning::default());
        let zones: Vec<Zone> = scene.elements.iter().take(6).filter_map(|e| e.zone).collect();
        let mut expected = vec![Zone::Wall(Wall::Right)];
        expected.extend(SubPanel::ALL.map(|p| Zone::WallPanel(Wall::Right, p)));
        assert_eq!(zones, expected);
    }

    #[test]
    fn sub_panels_tile_the_wall_top_to_bottom() {
        let ys: Vec<f32> = SubPanel::ALL
            .into_iter()
            .map(|p| sub_panel_local(4.0, 5.0, p).transform_point3(Vec3::ZERO).y)
            .collect();
        assert!((ys[0] - 2.0).abs() < 1e-6);
        assert!((ys[2]).abs() < 1e-6);
        assert!((ys[4] + 2.0).abs() < 1e-6);
        assert!(ys.windows(2).all(|w| w[0] > w[1]));
    }
}
