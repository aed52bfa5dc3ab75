use super::Color;

/// A color ramp defined by N evenly-spaced color stops.
/// `t = 0` maps to the first color, `t = 1` maps to the last.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<[f32; 3]>,
}

impl ColorRamp {
    /// Ramp through `stops`; fewer than two stops are padded so sampling
    /// stays well-defined.
    #[must_use]
    pub fn new(mut stops: Vec<[f32; 3]>) -> Self {
        match stops.len() {
            0 => stops = vec![[0.5, 0.5, 0.5]; 2],
            1 => stops.push(stops[0]),
            _ => {}
        }
        Self { stops }
    }

    /// Blue (cold, rigid) → red (hot, flexible).
    #[must_use]
    pub fn temperature() -> Self {
        Self::new(vec![[0.0, 0.0, 1.0], [1.0, 0.0, 0.0]])
    }

    /// Interpolate the ramp at position `t` in [0, 1].
    #[must_use]
    pub fn sample(&self, t: f32) -> [f32; 3] {
        let t = t.clamp(0.0, 1.0);
        let n = self.stops.len() - 1;
        let scaled = t * n as f32;
        let idx = (scaled as usize).min(n - 1);
        let frac = scaled - idx as f32;

        let a = &self.stops[idx];
        let b = &self.stops[idx + 1];
        [
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        ]
    }

    /// [`Self::sample`] quantized to an 8-bit color.
    #[must_use]
    pub fn color(&self, t: f32) -> Color {
        Color::from_unit(self.sample(t))
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::temperature()
    }
}
