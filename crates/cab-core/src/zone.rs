//! Configurable regions of the cab.
//!
//! Zones form a closed set: eight lettered zones plus five numbered
//! sub-panels on each of the three hierarchical walls. Every zone has a dense
//! index so per-zone tables can be plain arrays.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Walls that are split into numbered sub-panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wall {
    Back,
    Right,
    Left,
}

impl Wall {
    pub const ALL: [Wall; 3] = [Wall::Back, Wall::Right, Wall::Left];

    pub const fn letter(self) -> char {
        match self {
            Wall::Back => 'A',
            Wall::Right => 'B',
            Wall::Left => 'C',
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Wall::Back => 0,
            Wall::Right => 1,
            Wall::Left => 2,
        }
    }

    pub fn from_letter(c: char) -> Option<Wall> {
        match c.to_ascii_uppercase() {
            'A' => Some(Wall::Back),
            'B' => Some(Wall::Right),
            'C' => Some(Wall::Left),
            _ => None,
        }
    }
}

/// Numbered strip on a hierarchical wall, top (`P1`) to bottom (`P5`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubPanel {
    P1,
    P2,
    P3,
    P4,
    P5,
}

impl SubPanel {
    pub const ALL: [SubPanel; 5] = [
        SubPanel::P1,
        SubPanel::P2,
        SubPanel::P3,
        SubPanel::P4,
        SubPanel::P5,
    ];
    pub const COUNT: usize = 5;

    /// 1-based number shown on the sidebar button.
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// 0-based position from the top of the wall.
    pub const fn index(self) -> usize {
        match self {
            SubPanel::P1 => 0,
            SubPanel::P2 => 1,
            SubPanel::P3 => 2,
            SubPanel::P4 => 3,
            SubPanel::P5 => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<SubPanel> {
        SubPanel::ALL.get((n as usize).checked_sub(1)?).copied()
    }
}

impl FromStr for SubPanel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(SubPanel::from_number)
            .ok_or_else(|| ParseError::UnknownSubPanel(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Whole wall `A`, `B` or `C`.
    Wall(Wall),
    /// Sub-panel `A1`..`C5`.
    WallPanel(Wall, SubPanel),
    /// `D`
    Floor,
    /// `E`
    Ceiling,
    /// `F`
    AccentRight,
    /// `G`
    AccentLeft,
    /// `H`
    ButtonPanel,
}

/// Zones offered as lettered buttons, in sidebar order.
pub const LETTER_ZONES: [Zone; 8] = [
    Zone::Wall(Wall::Back),
    Zone::Wall(Wall::Right),
    Zone::Wall(Wall::Left),
    Zone::Floor,
    Zone::Ceiling,
    Zone::AccentRight,
    Zone::AccentLeft,
    Zone::ButtonPanel,
];

impl Zone {
    pub const COUNT: usize = LETTER_ZONES.len() + Wall::ALL.len() * SubPanel::COUNT;

    /// Every zone in index order: letter zones first, then sub-panels grouped by wall.
    pub fn all() -> impl Iterator<Item = Zone> {
        LETTER_ZONES.into_iter().chain(
            Wall::ALL
                .into_iter()
                .flat_map(|w| SubPanel::ALL.into_iter().map(move |p| Zone::WallPanel(w, p))),
        )
    }

    pub const fn index(self) -> usize {
        match self {
            Zone::Wall(w) => w.index(),
            Zone::Floor => 3,
            Zone::Ceiling => 4,
            Zone::AccentRight => 5,
            Zone::AccentLeft => 6,
            Zone::ButtonPanel => 7,
            Zone::WallPanel(w, p) => LETTER_ZONES.len() + w.index() * SubPanel::COUNT + p.index(),
        }
    }

    /// Letter of the zone, or of the owning wall for a sub-panel.
    pub const fn letter(self) -> char {
        match self {
            Zone::Wall(w) | Zone::WallPanel(w, _) => w.letter(),
            Zone::Floor => 'D',
            Zone::Ceiling => 'E',
            Zone::AccentRight => 'F',
            Zone::AccentLeft => 'G',
            Zone::ButtonPanel => 'H',
        }
    }

    /// The hierarchical wall this zone belongs to, if any.
    pub const fn wall(self) -> Option<Wall> {
        match self {
            Zone::Wall(w) | Zone::WallPanel(w, _) => Some(w),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Zone::Wall(Wall::Back) => "Back wall",
            Zone::Wall(Wall::Right) => "Right wall",
            Zone::Wall(Wall::Left) => "Left wall",
            Zone::WallPanel(Wall::Back, _) => "Back wall panel",
            Zone::WallPanel(Wall::Right, _) => "Right wall panel",
            Zone::WallPanel(Wall::Left, _) => "Left wall panel",
            Zone::Floor => "Floor",
            Zone::Ceiling => "Ceiling",
            Zone::AccentRight => "Right accent strip",
            Zone::AccentLeft => "Left accent strip",
            Zone::ButtonPanel => "Button panel",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::WallPanel(w, p) => write!(f, "{}{}", w.letter(), p.number()),
            z => write!(f, "{}", z.letter()),
        }
    }
}

impl FromStr for Zone {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ParseError::UnknownZone(s.to_string());
        let mut chars = s.trim().chars();
        let letter = chars.next().ok_or_else(unknown)?.to_ascii_uppercase();
        let rest = chars.as_str();
        if rest.is_empty() {
            return LETTER_ZONES
                .into_iter()
                .find(|z| z.letter() == letter)
                .ok_or_else(unknown);
        }
        let wall = Wall::from_letter(letter).ok_or_else(unknown)?;
        let panel = rest.parse::<SubPanel>().map_err(|_| unknown())?;
        Ok(Zone::WallPanel(wall, panel))
    }
}
