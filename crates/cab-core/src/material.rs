//! Finish catalog.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialId {
    Stainless,
    Bronze,
    DarkSteel,
    Champagne,
    Mirror,
    White,
    WoodLight,
    WoodDark,
    Glass,
}

/// Swatch grouping in the material library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    Metals,
    WoodAndGlass,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::Metals, Family::WoodAndGlass];

    pub fn title(self) -> &'static str {
        match self {
            Family::Metals => "METALS",
            Family::WoodAndGlass => "WOOD & GLASS",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub id: MaterialId,
    pub name: &'static str,
    pub family: Family,
    /// sRGB color as 0xRRGGBB.
    pub color: u32,
    pub texture: Option<&'static str>,
    pub metalness: f32,
    pub roughness: f32,
    pub opacity: f32,
}

pub const CATALOG: [Material; 9] = [
    Material {
        id: MaterialId::Stainless,
        name: "Stainless Steel",
        family: Family::Metals,
        color: 0xC5C9CC,
        texture: Some("/download.jpeg"),
        metalness: 0.8,
        roughness: 0.2,
        opacity: 1.0,
    },
    Material {
        id: MaterialId::Bronze,
        name: "Bronze",
        family: Family::Metals,
        color: 0xB8860B,
        texture: None,
        metalness: 0.8,
        roughness: 0.3,
        opacity: 1.0,
    },
    Material {
        id: MaterialId::DarkSteel,
        name: "Dark Steel",
        family: Family::Metals,
        color: 0x3A3A3A,
        texture: None,
        metalness: 0.7,
        roughness: 0.35,
        opacity: 1.0,
    },
    Material {
        id: MaterialId::Champagne,
        name: "Champagne",
        family: Family::Metals,
        color: 0xD4AF87,
        texture: None,
        metalness: 0.75,
        roughness: 0.3,
        opacity: 1.0,
    },
    Material {
        id: MaterialId::Mirror,
        name: "Mirror",
        family: Family::Metals,
        color: 0xE8E8E8,
        texture: None,
        metalness: 1.0,
        roughness: 0.05,
        opacity: 1.0,
    },
    Material {
        id: MaterialId::White,
        name: "White",
        family: Family::Metals,
        color: 0xF5F5F5,
        texture: None,
        metalness: 0.0,
        roughness: 0.6,
        opacity: 1.0,
    },
    Material {
        id: MaterialId::WoodLight,
        name: "Light Wood",
        family: Family::WoodAndGlass,
        color: 0xC19A6B,
        texture: Some("/W2008_2.jpg"),
        metalness: 0.1,
        roughness: 0.7,
        opacity: 1.0,
    },
    Material {
        id: MaterialId::WoodDark,
        name: "Dark Wood",
        family: Family::WoodAndGlass,
        color: 0x654321,
        texture: None,
        metalness: 0.1,
        roughness: 0.7,
        opacity: 1.0,
    },
    Material {
        id: MaterialId::Glass,
        name: "Glass",
        family: Family::WoodAndGlass,
        color: 0xE0F0FF,
        texture: None,
        metalness: 0.1,
        roughness: 0.05,
        opacity: 0.35,
    },
];

impl MaterialId {
    pub const ALL: [MaterialId; 9] = [
        MaterialId::Stainless,
        MaterialId::Bronze,
        MaterialId::DarkSteel,
        MaterialId::Champagne,
        MaterialId::Mirror,
        MaterialId::White,
        MaterialId::WoodLight,
        MaterialId::WoodDark,
        MaterialId::Glass,
    ];

    /// Catalog entry. `CATALOG` is ordered like `ALL`, so this is a plain index.
    pub fn entry(self) -> &'static Material {
        &CATALOG[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn id(self) -> &'static str {
        match self {
            MaterialId::Stainless => "stainless",
            MaterialId::Bronze => "bronze",
            MaterialId::DarkSteel => "darkSteel",
            MaterialId::Champagne => "champagne",
            MaterialId::Mirror => "mirror",
            MaterialId::White => "white",
            MaterialId::WoodLight => "woodLight",
            MaterialId::WoodDark => "woodDark",
            MaterialId::Glass => "glass",
        }
    }

    pub fn in_family(family: Family) -> impl Iterator<Item = MaterialId> {
        MaterialId::ALL
            .into_iter()
            .filter(move |m| m.entry().family == family)
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MaterialId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MaterialId::ALL
            .into_iter()
            .find(|m| m.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownMaterial(s.to_string()))
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Split 0xRRGGBB into sRGB channels in [0, 1].
#[inline]
pub fn hex_to_srgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    hex_to_srgb(hex).map(srgb_to_linear)
}

/// Resolved render parameters for one surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    /// Linear RGB plus opacity.
    pub color: [f32; 4],
    pub metalness: f32,
    pub roughness: f32,
    pub emissive: f32,
}

impl Appearance {
    /// Plain finish for fixed trim (fixtures, buttons, dividers).
    pub fn flat(hex: u32, metalness: f32, roughness: f32) -> Self {
        let [r, g, b] = hex_to_linear(hex);
        Self {
            color: [r, g, b, 1.0],
            metalness,
            roughness,
            emissive: 0.0,
        }
    }

    pub fn glowing(hex: u32, emissive: f32) -> Self {
        Self {
            emissive,
            ..Self::flat(hex, 0.0, 0.5)
        }
    }

    pub fn is_translucent(&self) -> bool {
        self.color[3] < 0.999
    }
}

impl From<&Material> for Appearance {
    fn from(m: &Material) -> Self {
        let [r, g, b] = hex_to_linear(m.color);
        Self {
            color: [r, g, b, m.opacity],
            metalness: m.metalness,
            roughness: m.roughness,
            emissive: 0.0,
        }
    }
}

impl From<MaterialId> for Appearance {
    fn from(id: MaterialId) -> Self {
        Appearance::from(id.entry())
    }
}
