//! One-shot opacity ramp of the surface material.

/// Opacity that climbs from 0 to a ceiling in fixed steps
#[derive(Debug, Clone)]
pub struct Fade {
    opacity: f32,
    max_opacity: f32,
    step: f32,
}

impl Fade {
    pub fn new(max_opacity: f32, step: f32) -> Self {
        Self {
            opacity: 0.0,
            max_opacity,
            step,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Advance the ramp by one tick; never passes the ceiling
    pub fn tick(&mut self) {
        if self.opacity < self.max_opacity {
            self.opacity = (self.opacity + self.step).min(self.max_opacity);
        }
    }

    /// Jump straight to the ceiling
    pub fn fill(&mut self) {
        self.opacity = self.max_opacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_monotonic_and_capped() {
        let mut fade = Fade::new(0.1, 0.0005);
        let mut last = fade.opacity();

        for _ in 0..500 {
            fade.tick();
            assert!(fade.opacity() >= last);
            assert!(fade.opacity() <= 0.1);
            last = fade.opacity();
        }
        assert_eq!(fade.opacity(), 0.1);
    }

    #[test]
    fn test_fade_reaches_ceiling_in_expected_ticks() {
        let mut fade = Fade::new(0.1, 0.0005);
        for _ in 0..150 {
            fade.tick();
        }
        assert!(fade.opacity() < 0.1);

        for _ in 0..60 {
            fade.tick();
        }
        assert_eq!(fade.opacity(), 0.1);
    }

    #[test]
    fn test_fill_bypasses_ramp() {
        let mut fade = Fade::new(0.1, 0.0005);
        fade.fill();
        assert_eq!(fade.opacity(), 0.1);

        fade.tick();
        assert_eq!(fade.opacity(), 0.1);
    }
}
