use std::fmt;
use std::str::FromStr;

use glam::{EulerRot, Mat4};

use crate::error::ParseError;
use crate::zone::{Wall, Zone};

/// Camera/visibility preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Three-quarter view into the cab; the left wall is removed to expose the interior.
    #[default]
    Front,
    /// Head-on view through the doorway; the back wall is removed.
    Straight,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Front, ViewMode::Straight];

    pub fn id(self) -> &'static str {
        match self {
            ViewMode::Front => "front",
            ViewMode::Straight => "straight",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Front => "Front",
            ViewMode::Straight => "Straight",
        }
    }

    pub fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Front => ViewMode::Straight,
            ViewMode::Straight => ViewMode::Front,
        }
    }

    /// Map a location hash or path (`#/straight`, `/elevator`, ``) to a view.
    /// Unrecognised routes land on the front view.
    pub fn from_route(route: &str) -> ViewMode {
        let trimmed = route.trim_start_matches('#').trim_matches('/');
        match trimmed.to_ascii_lowercase().as_str() {
            "straight" => ViewMode::Straight,
            _ => ViewMode::Front,
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            ViewMode::Front => "#/elevator",
            ViewMode::Straight => "#/straight",
        }
    }

    /// Rotation applied to the whole cab group.
    pub fn group_transform(self) -> Mat4 {
        match self {
            ViewMode::Front => Mat4::from_euler(
                EulerRot::XYZ,
                -0.05,
                std::f32::consts::PI / 4.5,
                0.0,
            ),
            ViewMode::Straight => Mat4::IDENTITY,
        }
    }

    /// Whether structure on the given side is drawn in this view.
    pub fn shows_wall(self, wall: Wall) -> bool {
        !matches!(
            (self, wall),
            (ViewMode::Front, Wall::Left) | (ViewMode::Straight, Wall::Back)
        )
    }

    pub fn shows_left_side(self) -> bool {
        self.shows_wall(Wall::Left)
    }

    pub fn shows_zone(self, zone: Zone) -> bool {
        match zone {
            Zone::Wall(w) | Zone::WallPanel(w, _) => self.shows_wall(w),
            Zone::AccentLeft => self.shows_left_side(),
            _ => true,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ViewMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "front" => Ok(ViewMode::Front),
            "straight" => Ok(ViewMode::Straight),
            _ => Err(ParseError::UnknownViewMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_views() {
        assert_eq!(ViewMode::from_route("#/straight"), ViewMode::Straight);
        assert_eq!(ViewMode::from_route("/straight/"), ViewMode::Straight);
        assert_eq!(ViewMode::from_route("#/elevator"), ViewMode::Front);
        assert_eq!(ViewMode::from_route(""), ViewMode::Front);
        for v in ViewMode::ALL {
            assert_eq!(ViewMode::from_route(v.route()), v);
        }
    }

    #[test]
    fn each_view_hides_exactly_one_wall() {
        assert!(!ViewMode::Front.shows_wall(Wall::Left));
        assert!(ViewMode::Front.shows_wall(Wall::Back));
        assert!(!ViewMode::Straight.shows_wall(Wall::Back));
        assert!(ViewMode::Straight.shows_wall(Wall::Left));
        for v in ViewMode::ALL {
            assert!(v.shows_wall(Wall::Right));
        }
    }
}
