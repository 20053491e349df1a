use crate::{
    config::{SceneConfig, StrokeStyle},
    curve::params::CurveParams,
    foundation::core::Rgb8,
};

/// A named starting point: radii plus stroke styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub ring_radius: f64,
    pub wheel_radius: f64,
    pub pen_offset: f64,
    pub stroke_width: f64,
    pub stroke_color: Rgb8,
}

pub const PRESETS: [Preset; 6] = [
    Preset {
        id: "classic-flower",
        name: "Classic Flower",
        description: "A traditional pattern with 6 petals",
        ring_radius: 120.0,
        wheel_radius: 48.0,
        pen_offset: 84.0,
        stroke_width: 2.0,
        stroke_color: Rgb8::new(0x00, 0xd9, 0xff),
    },
    Preset {
        id: "neon-star",
        name: "Neon Star",
        description: "Sharp angular pattern with vibrant colors",
        ring_radius: 150.0,
        wheel_radius: 25.0,
        pen_offset: 50.0,
        stroke_width: 2.5,
        stroke_color: Rgb8::new(0xff, 0x00, 0x80),
    },
    Preset {
        id: "galaxy-spiral",
        name: "Galaxy Spiral",
        description: "Dense spiral resembling a galaxy",
        ring_radius: 180.0,
        wheel_radius: 72.0,
        pen_offset: 120.0,
        stroke_width: 1.5,
        stroke_color: Rgb8::new(0x8b, 0x5c, 0xf6),
    },
    Preset {
        id: "atomic-orbit",
        name: "Atomic Orbit",
        description: "Electron-like orbital pattern",
        ring_radius: 100.0,
        wheel_radius: 33.0,
        pen_offset: 60.0,
        stroke_width: 2.0,
        stroke_color: Rgb8::new(0x10, 0xb9, 0x81),
    },
    Preset {
        id: "golden-mandala",
        name: "Golden Mandala",
        description: "Complex symmetrical pattern",
        ring_radius: 140.0,
        wheel_radius: 56.0,
        pen_offset: 98.0,
        stroke_width: 2.0,
        stroke_color: Rgb8::new(0xf5, 0x9e, 0x0b),
    },
    Preset {
        id: "cosmic-web",
        name: "Cosmic Web",
        description: "Intricate web-like structure",
        ring_radius: 160.0,
        wheel_radius: 40.0,
        pen_offset: 110.0,
        stroke_width: 1.5,
        stroke_color: Rgb8::new(0x06, 0xb6, 0xd4),
    },
];

pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

impl Preset {
    /// Overlay this preset's radii and stroke onto `scene`, keeping everything else.
    pub fn apply_to(&self, scene: SceneConfig) -> SceneConfig {
        let curve = CurveParams {
            ring_radius: self.ring_radius,
            wheel_radius: self.wheel_radius,
            pen_offset: self.pen_offset,
            ..scene.curve
        };
        SceneConfig {
            name: self.id.to_string(),
            oscillations: scene.oscillations.centered_on(&curve),
            curve,
            stroke: StrokeStyle {
                color: self.stroke_color,
                width: self.stroke_width,
                ..scene.stroke
            },
            ..scene
        }
    }

    pub fn scene(&self) -> SceneConfig {
        self.apply_to(SceneConfig::default())
    }
}

#[cfg(test)]
#[path = "../tests/unit/preset.rs"]
mod tests;
