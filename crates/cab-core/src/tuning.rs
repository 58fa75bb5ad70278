//! Live-tunable camera and lighting parameters.
//!
//! Defaults reproduce the fixed presets of the configurator. The debug panel
//! edits a `SceneTuning` through [`TuningParam`] so every slider has a known
//! range; nothing here touches the configuration or selection.

use std::str::FromStr;

use glam::Vec3;

use crate::camera::Camera;
use crate::error::ParseError;
use crate::view::ViewMode;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPreset {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_deg: f32,
}

impl CameraPreset {
    /// False when the eye sits on the target or straight above/below it;
    /// a Y-up look-at has no defined orientation there.
    pub fn has_view_direction(&self) -> bool {
        (self.eye - self.target).cross(Vec3::Y).length_squared() > 1e-6
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye,
            target: self.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: self.fov_deg.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneTuning {
    pub front: CameraPreset,
    pub straight: CameraPreset,
    pub ambient: f32,
    pub key_light: f32,
    pub fill_light: f32,
    pub hemisphere: f32,
    pub ceiling_light: f32,
    pub show_handrails: bool,
    pub show_ceiling_lights: bool,
}

impl Default for SceneTuning {
    fn default() -> Self {
        Self {
            front: CameraPreset {
                eye: Vec3::new(0.0, 2.0, 7.0),
                target: Vec3::new(0.0, 2.0, -0.5),
                fov_deg: 60.0,
            },
            straight: CameraPreset {
                eye: Vec3::new(0.0, 2.0, 6.5),
                target: Vec3::new(0.0, 2.0, 0.0),
                fov_deg: 60.0,
            },
            ambient: 0.25,
            key_light: 0.7,
            fill_light: 0.4,
            hemisphere: 0.35,
            ceiling_light: 0.6,
            show_handrails: true,
            show_ceiling_lights: true,
        }
    }
}

impl SceneTuning {
    pub fn preset(&self, view: ViewMode) -> &CameraPreset {
        match view {
            ViewMode::Front => &self.front,
            ViewMode::Straight => &self.straight,
        }
    }

    pub fn preset_mut(&mut self, view: ViewMode) -> &mut CameraPreset {
        match view {
            ViewMode::Front => &mut self.front,
            ViewMode::Straight => &mut self.straight,
        }
    }

    pub fn camera(&self, view: ViewMode, aspect: f32) -> Camera {
        self.preset(view).camera(aspect)
    }

    pub fn get(&self, param: TuningParam) -> f32 {
        use TuningParam::*;
        match param {
            CameraX(v) => self.preset(v).eye.x,
            CameraY(v) => self.preset(v).eye.y,
            CameraZ(v) => self.preset(v).eye.z,
            Fov(v) => self.preset(v).fov_deg,
            Ambient => self.ambient,
            KeyLight => self.key_light,
            FillLight => self.fill_light,
            Hemisphere => self.hemisphere,
            CeilingLight => self.ceiling_light,
            Handrails => bool_to_f32(self.show_handrails),
            CeilingLights => bool_to_f32(self.show_ceiling_lights),
        }
    }

    /// Set a parameter, clamped to its range. Returns the stored value.
    ///
    /// Non-finite input and camera moves that leave the preset without a
    /// view direction keep the previous value.
    pub fn set(&mut self, param: TuningParam, value: f32) -> f32 {
        use TuningParam::*;
        let range = param.range();
        let value = if value.is_finite() {
            value.clamp(range.min, range.max)
        } else {
            self.get(param)
        };
        let moved_camera = match param {
            CameraX(v) | CameraY(v) | CameraZ(v) => Some((v, *self.preset(v))),
            _ => None,
        };
        match param {
            CameraX(v) => self.preset_mut(v).eye.x = value,
            CameraY(v) => self.preset_mut(v).eye.y = value,
            CameraZ(v) => self.preset_mut(v).eye.z = value,
            Fov(v) => self.preset_mut(v).fov_deg = value,
            Ambient => self.ambient = value,
            KeyLight => self.key_light = value,
            FillLight => self.fill_light = value,
            Hemisphere => self.hemisphere = value,
            CeilingLight => self.ceiling_light = value,
            Handrails => self.show_handrails = value >= 0.5,
            CeilingLights => self.show_ceiling_lights = value >= 0.5,
        }
        if let Some((v, before)) = moved_camera {
            if !self.preset(v).has_view_direction() {
                log::warn!("[tune] {} = {value} puts the {v} camera on its axis", param.key());
                *self.preset_mut(v) = before;
            }
        }
        self.get(param)
    }
}

#[inline]
fn bool_to_f32(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

const fn range(min: f32, max: f32, step: f32) -> ParamRange {
    ParamRange { min, max, step }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TuningParam {
    CameraX(ViewMode),
    CameraY(ViewMode),
    CameraZ(ViewMode),
    Fov(ViewMode),
    Ambient,
    KeyLight,
    FillLight,
    Hemisphere,
    CeilingLight,
    Handrails,
    CeilingLights,
}

impl TuningParam {
    pub const ALL: [TuningParam; 15] = [
        TuningParam::CameraX(ViewMode::Front),
        TuningParam::CameraY(ViewMode::Front),
        TuningParam::CameraZ(ViewMode::Front),
        TuningParam::Fov(ViewMode::Front),
        TuningParam::CameraX(ViewMode::Straight),
        TuningParam::CameraY(ViewMode::Straight),
        TuningParam::CameraZ(ViewMode::Straight),
        TuningParam::Fov(ViewMode::Straight),
        TuningParam::Ambient,
        TuningParam::KeyLight,
        TuningParam::FillLight,
        TuningParam::Hemisphere,
        TuningParam::CeilingLight,
        TuningParam::Handrails,
        TuningParam::CeilingLights,
    ];

    pub fn range(self) -> ParamRange {
        use TuningParam::*;
        match self {
            CameraX(_) | CameraZ(_) => range(-20.0, 20.0, 0.1),
            CameraY(_) => range(-10.0, 10.0, 0.1),
            Fov(_) => range(20.0, 120.0, 1.0),
            Ambient | Hemisphere => range(0.0, 2.0, 0.05),
            KeyLight | FillLight | CeilingLight => range(0.0, 3.0, 0.05),
            Handrails | CeilingLights => range(0.0, 1.0, 1.0),
        }
    }

    pub fn is_toggle(self) -> bool {
        matches!(self, TuningParam::Handrails | TuningParam::CeilingLights)
    }

    /// Stable key used as the slider's data attribute.
    pub fn key(self) -> String {
        use TuningParam::*;
        match self {
            CameraX(v) => format!("{v}.x"),
            CameraY(v) => format!("{v}.y"),
            CameraZ(v) => format!("{v}.z"),
            Fov(v) => format!("{v}.fov"),
            Ambient => "ambient".into(),
            KeyLight => "key".into(),
            FillLight => "fill".into(),
            Hemisphere => "hemisphere".into(),
            CeilingLight => "ceiling".into(),
            Handrails => "handrails".into(),
            CeilingLights => "fixtures".into(),
        }
    }

    pub fn label(self) -> String {
        use TuningParam::*;
        match self {
            CameraX(v) => format!("{} camera X", v.label()),
            CameraY(v) => format!("{} camera Y", v.label()),
            CameraZ(v) => format!("{} camera Z", v.label()),
            Fov(v) => format!("{} FOV", v.label()),
            Ambient => "Ambient light".into(),
            KeyLight => "Key light".into(),
            FillLight => "Fill light".into(),
            Hemisphere => "Hemisphere light".into(),
            CeilingLight => "Ceiling light".into(),
            Handrails => "Handrails".into(),
            CeilingLights => "Ceiling fixtures".into(),
        }
    }
}

impl FromStr for TuningParam {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TuningParam::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| ParseError::UnknownTuningParam(s.to_string()))
    }
}
