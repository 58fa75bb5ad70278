use std::ops::Range;

use cab_core::{Camera, Scene, SceneElement, SceneTuning, Shape};
use glam::{Mat3, Vec3};

// Hemisphere colours, scaled by the tuned intensity
pub const SKY_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);
pub const GROUND_COLOR: Vec3 = Vec3::new(0.27, 0.27, 0.3);

// Directions towards the key and fill lights (world space)
pub const KEY_LIGHT_DIR: Vec3 = Vec3::new(5.0, 10.0, 5.0);
pub const FILL_LIGHT_DIR: Vec3 = Vec3::new(-5.0, 5.0, 5.0);

// Point light just below the ceiling fixtures
pub const CEILING_LIGHT_POS: Vec3 = Vec3::new(0.0, 4.2, -0.5);

/// Per-element instance data; layout matches `VsIn` locations 2..=10.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 3],
    pub color: [f32; 4],
    /// metalness, roughness, emissive, highlight
    pub params: [f32; 4],
}

impl InstanceRaw {
    pub fn from_element(e: &SceneElement, highlight: f32) -> Self {
        let n = Mat3::from_mat4(e.transform).inverse().transpose();
        let col = |v: Vec3| [v.x, v.y, v.z, 0.0];
        let a = &e.appearance;
        Self {
            model: e.transform.to_cols_array_2d(),
            normal: [col(n.x_axis), col(n.y_axis), col(n.z_axis)],
            color: a.color,
            params: [
                a.metalness,
                a.roughness,
                a.emissive,
                if e.highlighted { highlight } else { 0.0 },
            ],
        }
    }
}

#[inline]
pub fn shape_slot(shape: Shape) -> usize {
    match shape {
        Shape::Box => 0,
        Shape::Cylinder => 1,
    }
}

/// Instances grouped for drawing: all opaque ranges first, then translucent
/// ranges sorted far to near. Ranges are indexed by [`shape_slot`].
#[derive(Clone, Debug, Default)]
pub struct Batches {
    pub instances: Vec<InstanceRaw>,
    pub opaque: [Range<u32>; 2],
    pub translucent: [Range<u32>; 2],
}

fn push_group(
    out: &mut Vec<InstanceRaw>,
    mut group: Vec<&SceneElement>,
    eye: Vec3,
    highlight: f32,
    far_first: bool,
) -> Range<u32> {
    if far_first {
        let dist = |e: &SceneElement| e.transform.w_axis.truncate().distance_squared(eye);
        group.sort_by(|a, b| dist(b).total_cmp(&dist(a)));
    }
    let start = out.len() as u32;
    out.extend(group.into_iter().map(|e| InstanceRaw::from_element(e, highlight)));
    start..out.len() as u32
}

pub fn batch(scene: &Scene, eye: Vec3, highlight: f32) -> Batches {
    let mut out = Batches {
        instances: Vec::with_capacity(scene.elements.len()),
        ..Batches::default()
    };
    let select = |shape: Shape, translucent: bool| {
        scene
            .elements
            .iter()
            .filter(|e| e.shape == shape && e.appearance.is_translucent() == translucent)
            .collect::<Vec<_>>()
    };
    for shape in [Shape::Box, Shape::Cylinder] {
        out.opaque[shape_slot(shape)] =
            push_group(&mut out.instances, select(shape, false), eye, highlight, false);
    }
    for shape in [Shape::Box, Shape::Cylinder] {
        out.translucent[shape_slot(shape)] =
            push_group(&mut out.instances, select(shape, true), eye, highlight, true);
    }
    out
}

/// Camera and lighting uniform; every field is a vec4 on the WGSL side.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Globals {
    pub view_proj: [[f32; 4]; 4],
    pub eye_time: [f32; 4],
    pub ambient: [f32; 4],
    pub sky: [f32; 4],
    pub ground: [f32; 4],
    pub key_dir: [f32; 4],
    pub fill_dir: [f32; 4],
    pub ceiling: [f32; 4],
}

impl Globals {
    pub fn new(camera: &Camera, tuning: &SceneTuning, time: f32) -> Self {
        let rgb = |c: Vec3, k: f32| [c.x * k, c.y * k, c.z * k, 1.0];
        let dir = |d: Vec3, k: f32| {
            let d = d.normalize();
            [d.x, d.y, d.z, k]
        };
        let ceiling = if tuning.show_ceiling_lights {
            tuning.ceiling_light
        } else {
            0.0
        };
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye_time: [camera.eye.x, camera.eye.y, camera.eye.z, time],
            ambient: rgb(Vec3::ONE, tuning.ambient),
            sky: rgb(SKY_COLOR, tuning.hemisphere),
            ground: rgb(GROUND_COLOR, tuning.hemisphere),
            key_dir: dir(KEY_LIGHT_DIR, tuning.key_light),
            fill_dir: dir(FILL_LIGHT_DIR, tuning.fill_light),
            ceiling: [
                CEILING_LIGHT_POS.x,
                CEILING_LIGHT_POS.y,
                CEILING_LIGHT_POS.z,
                ceiling,
            ],
        }
    }
}
