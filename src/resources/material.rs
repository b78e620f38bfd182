use glam::Vec4;

/// Converts a packed `0xRRGGBB` color to a linear-ish Vec4 (alpha 1).
///
/// Tones in this crate are authored as hex literals, matching the segment
/// highlight palette.
#[must_use]
pub fn color_from_hex(rgb: u32) -> Vec4 {
    let r = ((rgb >> 16) & 0xFF) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xFF) as f32 / 255.0;
    let b = (rgb & 0xFF) as f32 / 255.0;
    Vec4::new(r, g, b, 1.0)
}

/// PBR-style standard material.
///
/// Every segment mesh owns its own instance — materials are never shared
/// between meshes, so recoloring one segment cannot bleed into another.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardMaterial {
    pub color: Vec4,
    pub roughness: f32,
    pub metalness: f32,
}

impl StandardMaterial {
    #[must_use]
    pub fn new(color: Vec4) -> Self {
        Self {
            color,
            roughness: 1.0,
            metalness: 0.0,
        }
    }

    #[must_use]
    pub fn color(&self) -> Vec4 {
        self.color
    }

    pub fn set_color(&mut self, color: Vec4) {
        self.color = color;
    }
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self::new(Vec4::ONE)
    }
}
