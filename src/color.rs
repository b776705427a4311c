use colorous::{Color, RED_BLUE};

const GRAY: Color = Color {
    r: 128,
    g: 128,
    b: 128,
};

/// Fixed diverging red-blue scale over a configurable domain.
///
/// The heatmap uses the inverted domain `[1, 0]`: value 1 maps to the
/// red end of RdBu, value 0 to the blue end. Values outside the domain
/// clamp to the nearest end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergingScale {
    lo: f64,
    hi: f64,
}

impl DivergingScale {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// RGBA pixel for one embedding value, full opacity. Non-finite
    /// values paint transparent gray.
    pub fn rgba(&self, value: f64) -> [u8; 4] {
        if !value.is_finite() {
            return [GRAY.r, GRAY.g, GRAY.b, 0];
        }
        let den = self.hi - self.lo;
        let t = if den.abs() < 1e-12 {
            0.0
        } else {
            ((value - self.lo) / den).clamp(0.0, 1.0)
        };
        let c = RED_BLUE.eval_continuous(t);
        [c.r, c.g, c.b, 255]
    }
}

impl Default for DivergingScale {
    /// The `[1, 0]` domain the heatmap is defined against.
    fn default() -> Self {
        Self { lo: 1.0, hi: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(t: f64) -> [u8; 4] {
        let c = RED_BLUE.eval_continuous(t);
        [c.r, c.g, c.b, 255]
    }

    #[test]
    fn domain_is_inverted() {
        let scale = DivergingScale::default();
        // value 1 sits at the start of the gradient, value 0 at the end.
        assert_eq!(scale.rgba(1.0), rgb(0.0));
        assert_eq!(scale.rgba(0.0), rgb(1.0));
        assert_eq!(scale.rgba(0.5), rgb(0.5));
    }

    #[test]
    fn out_of_domain_values_clamp() {
        let scale = DivergingScale::default();
        assert_eq!(scale.rgba(2.0), scale.rgba(1.0));
        assert_eq!(scale.rgba(-3.5), scale.rgba(0.0));
    }

    #[test]
    fn non_finite_paints_transparent_gray() {
        let scale = DivergingScale::default();
        assert_eq!(scale.rgba(f64::NAN), [128, 128, 128, 0]);
        assert_eq!(scale.rgba(f64::INFINITY), [128, 128, 128, 0]);
    }

    #[test]
    fn degenerate_domain_pins_to_start() {
        let scale = DivergingScale::new(0.5, 0.5);
        assert_eq!(scale.rgba(0.7), rgb(0.0));
    }
}
