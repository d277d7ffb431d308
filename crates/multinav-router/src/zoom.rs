//! Shared zoom factor applied to every pane.

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 3.0;
pub const DEFAULT_ZOOM: f64 = 1.0;
/// Increment used by the zoom in/out shortcuts.
pub const ZOOM_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel(f64);

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

impl ZoomLevel {
    /// Build from a configured factor, normalizing it the same way `set` does.
    pub fn new(factor: f64) -> Self {
        normalize(factor).map(Self).unwrap_or_default()
    }

    pub fn get(&self) -> f64 {
        self.0
    }

    /// Round to two decimals, clamp to `[MIN_ZOOM, MAX_ZOOM]` and store.
    /// Non-finite input is ignored and returns `None`.
    pub fn set(&mut self, factor: f64) -> Option<f64> {
        let value = normalize(factor)?;
        self.0 = value;
        Some(value)
    }

    pub fn step(&mut self, delta: f64) -> Option<f64> {
        self.set(self.0 + delta)
    }

    pub fn reset(&mut self) -> f64 {
        self.0 = DEFAULT_ZOOM;
        self.0
    }
}

fn normalize(factor: f64) -> Option<f64> {
    if !factor.is_finite() {
        return None;
    }
    let rounded = (factor * 100.0).round() / 100.0;
    Some(rounded.clamp(MIN_ZOOM, MAX_ZOOM))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn clamps_high() {
        let mut z = ZoomLevel::default();
        assert_eq!(z.set(10.0), Some(3.0));
        assert!(approx(z.get(), 3.0));
    }

    #[test]
    fn clamps_low() {
        let mut z = ZoomLevel::default();
        assert_eq!(z.set(0.0), Some(0.25));
        assert!(approx(z.get(), 0.25));
    }

    #[test]
    fn rounds_to_two_decimals() {
        let mut z = ZoomLevel::default();
        z.set(1.23456);
        assert!(approx(z.get(), 1.23));
    }

    #[test]
    fn ignores_non_finite() {
        let mut z = ZoomLevel::new(1.5);
        assert_eq!(z.set(f64::NAN), None);
        assert_eq!(z.set(f64::INFINITY), None);
        assert!(approx(z.get(), 1.5));
    }

    #[test]
    fn steps_accumulate_without_drift() {
        let mut z = ZoomLevel::default();
        for _ in 0..3 {
            z.step(ZOOM_STEP);
        }
        assert!(approx(z.get(), 1.3));
        for _ in 0..40 {
            z.step(-ZOOM_STEP);
        }
        assert!(approx(z.get(), MIN_ZOOM));
    }

    #[test]
    fn reset_returns_to_default() {
        let mut z = ZoomLevel::new(2.0);
        assert!(approx(z.reset(), 1.0));
    }

    #[test]
    fn new_normalizes_config_value() {
        assert!(approx(ZoomLevel::new(9.0).get(), 3.0));
        assert!(approx(ZoomLevel::new(f64::NAN).get(), 1.0));
    }
}
