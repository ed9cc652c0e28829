use crate::{Float, Point, AU};

pub const SCREEN_DIMS: (Float, Float) = (800.0, 800.0);

const TRAIL_MIN_ALPHA: f32 = 0.15;

/// Fixed affine map from simulation meters to window pixels.
#[derive(new, Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub pixels_per_meter: Float,
    pub center: [Float; 2],
}

impl Default for Projection {
    fn default() -> Self {
        // 1 AU = 250 pixels, origin in the middle of the window
        Self::new(250.0 / AU, [SCREEN_DIMS.0 / 2.0, SCREEN_DIMS.1 / 2.0])
    }
}

impl Projection {
    #[inline]
    pub fn to_screen(&self, pos: &Point) -> [Float; 2] {
        [
            pos.x * self.pixels_per_meter + self.center[0],
            pos.y * self.pixels_per_meter + self.center[1],
        ]
    }
}

pub fn format_distance_km(meters: Float) -> String {
    format!("{:.0}km", meters / 1000.0)
}

/// Alpha for trail point `index` out of `len`, oldest faintest.
pub fn trail_fade(index: usize, len: usize) -> f32 {
    if len <= 1 {
        return 1.0;
    }
    let t = index as f32 / (len - 1) as f32;
    num::clamp(t, TRAIL_MIN_ALPHA, 1.0)
}
