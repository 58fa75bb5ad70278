// Host-side tests for GPU instance and uniform packing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod packing {
    include!("../src/render/packing.rs");
}

use cab_core::{
    compose, Action, ConfiguratorStore, MaterialId, SceneTuning, Shape, ViewMode, Wall, Zone,
};
use glam::{Mat4, Vec3};
use packing::*;

fn store_with(view: ViewMode, actions: &[Action]) -> ConfiguratorStore {
    let mut store = ConfiguratorStore::new(view);
    for a in actions {
        store.dispatch(*a);
    }
    store
}

#[test]
fn gpu_structs_match_wgsl_layout() {
    assert_eq!(std::mem::size_of::<InstanceRaw>(), 144);
    assert_eq!(std::mem::size_of::<Globals>(), 176);
    assert_eq!(std::mem::size_of::<Globals>() % 16, 0);
}

#[test]
fn batches_cover_every_element_once() {
    let scene = compose(
        &ConfiguratorStore::new(ViewMode::Straight),
        &SceneTuning::default(),
    );
    let b = batch(&scene, Vec3::new(0.0, 2.0, 6.5), 1.0);
    assert_eq!(b.instances.len(), scene.elements.len());
    let total: usize = b.opaque.iter().chain(b.translucent.iter()).map(|r| r.len()).sum();
    assert_eq!(total, scene.elements.len());
    // opaque ranges come first and are contiguous
    assert_eq!(b.opaque[0].start, 0);
    assert_eq!(b.opaque[0].end, b.opaque[1].start);
    assert_eq!(b.opaque[1].end, b.translucent[0].start);
    let cylinders = scene
        .elements
        .iter()
        .filter(|e| e.shape == Shape::Cylinder)
        .count();
    assert_eq!(b.opaque[shape_slot(Shape::Cylinder)].len(), cylinders);
    assert!(b.translucent.iter().all(|r| r.is_empty()));
}

#[test]
fn glass_goes_to_the_translucent_pass_far_first() {
    let store = store_with(
        ViewMode::Straight,
        &[
            Action::SelectZone(Zone::Wall(Wall::Right)),
            Action::ApplyMaterial(MaterialId::Glass),
            Action::SelectZone(Zone::Wall(Wall::Left)),
            Action::ApplyMaterial(MaterialId::Glass),
        ],
    );
    let scene = compose(&store, &SceneTuning::default());
    // eye off to the left: the right wall is farther and must draw first
    let eye = Vec3::new(-10.0, 2.0, -0.5);
    let b = batch(&scene, eye, 1.0);
    let range = b.translucent[shape_slot(Shape::Box)].clone();
    assert_eq!(range.len(), 2);
    let first = b.instances[range.start as usize].model[3];
    let second = b.instances[range.start as usize + 1].model[3];
    assert!(first[0] > 0.0 && second[0] < 0.0);
}

#[test]
fn highlight_lands_in_params_w() {
    let store = store_with(ViewMode::Front, &[Action::SelectZone(Zone::Floor)]);
    let scene = compose(&store, &SceneTuning::default());
    let b = batch(&scene, Vec3::ZERO, 0.8);
    let lit: Vec<_> = b.instances.iter().filter(|i| i.params[3] > 0.0).collect();
    assert_eq!(lit.len(), 1);
    assert_eq!(lit[0].params[3], 0.8);
}

#[test]
fn normal_matrix_undoes_non_uniform_scale() {
    let scene = compose(&ConfiguratorStore::default(), &SceneTuning::default());
    let e = scene
        .elements
        .iter()
        .find(|e| e.zone == Some(Zone::Floor))
        .unwrap();
    let raw = InstanceRaw::from_element(e, 0.0);
    let n = glam::Mat3::from_cols(
        Vec3::from_slice(&raw.normal[0][..3]),
        Vec3::from_slice(&raw.normal[1][..3]),
        Vec3::from_slice(&raw.normal[2][..3]),
    );
    // a face normal stays perpendicular to a transformed tangent
    let tangent = e.transform.transform_vector3(Vec3::X);
    let normal = n * Vec3::Y;
    assert!(tangent.dot(normal).abs() < 1e-4);
    assert_eq!(raw.model, e.transform.to_cols_array_2d());
    assert_ne!(raw.model, Mat4::IDENTITY.to_cols_array_2d());
}

#[test]
fn globals_follow_tuning() {
    let mut tuning = SceneTuning::default();
    let camera = tuning.camera(ViewMode::Front, 1.5);
    let g = Globals::new(&camera, &tuning, 3.0);
    assert_eq!(g.eye_time, [camera.eye.x, camera.eye.y, camera.eye.z, 3.0]);
    assert_eq!(g.ambient[0], tuning.ambient);
    assert_eq!(g.key_dir[3], tuning.key_light);
    assert!((Vec3::from_slice(&g.key_dir[..3]).length() - 1.0).abs() < 1e-5);
    assert_eq!(g.ceiling[3], tuning.ceiling_light);

    tuning.show_ceiling_lights = false;
    assert_eq!(Globals::new(&camera, &tuning, 0.0).ceiling[3], 0.0);
}
