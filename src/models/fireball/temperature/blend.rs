//! Smoothstep transition between the rise and decay segments.

/// Transition window `[start, start + width]` in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct BlendWindow {
    start: f64,
    width: f64,
}

/// Blend weight `S` and its time derivative at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Weight {
    pub(super) value: f64,
    pub(super) rate: f64,
}

impl BlendWindow {
    /// Centers a window of `width` on `breakpoint`, clipped to start at `t = 0`.
    ///
    /// `width` must be positive.
    pub(super) fn centered(breakpoint: f64, width: f64) -> Self {
        Self {
            start: (breakpoint - width / 2.0).max(0.0),
            width,
        }
    }

    pub(super) fn start(&self) -> f64 {
        self.start
    }

    pub(super) fn end(&self) -> f64 {
        self.start + self.width
    }

    /// Smoothstep `S(s) = 3s² − 2s³` with `s = clamp((t − start) / width, 0, 1)`.
    pub(super) fn weight(&self, t_ms: f64) -> Weight {
        let s = ((t_ms - self.start) / self.width).clamp(0.0, 1.0);
        Weight {
            value: s * s * (3.0 - 2.0 * s),
            rate: 6.0 * s * (1.0 - s) / self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn window_is_centered_on_breakpoint() {
        let window = BlendWindow::centered(35.0, 12.0);
        assert_relative_eq!(window.start(), 29.0);
        assert_relative_eq!(window.end(), 41.0);
    }

    #[test]
    fn window_is_clipped_at_ignition() {
        let window = BlendWindow::centered(4.0, 12.0);
        assert_relative_eq!(window.start(), 0.0);
        assert_relative_eq!(window.end(), 12.0);
    }

    #[test]
    fn weight_saturates_outside_window() {
        let window = BlendWindow::centered(35.0, 12.0);
        assert_eq!(window.weight(10.0), Weight { value: 0.0, rate: 0.0 });
        assert_eq!(window.weight(100.0), Weight { value: 1.0, rate: 0.0 });
    }

    #[test]
    fn weight_is_half_at_center_with_peak_slope() {
        let window = BlendWindow::centered(35.0, 12.0);
        let w = window.weight(35.0);
        assert_relative_eq!(w.value, 0.5);
        assert_relative_eq!(w.rate, 1.5 / 12.0);
    }

    #[test]
    fn weight_rate_matches_finite_difference() {
        let window = BlendWindow::centered(35.0, 12.0);
        let t = 32.0;
        let h = 1e-6;
        let numerical = (window.weight(t + h).value - window.weight(t - h).value) / (2.0 * h);
        assert_relative_eq!(numerical, window.weight(t).rate, max_relative = 1e-6);
    }
}
