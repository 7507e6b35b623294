#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InCubic,
    OutCubic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_stable() {
        for ease in [Ease::Linear, Ease::InCubic, Ease::OutCubic] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn in_cubic_lags_linear_at_midpoint() {
        // t^3 starts slow: the eased midpoint sits well below 0.5.
        assert!((Ease::InCubic.apply(0.5) - 0.125).abs() < 1e-12);
        assert!(Ease::InCubic.apply(0.5) < Ease::Linear.apply(0.5));
    }

    #[test]
    fn out_of_range_inputs_clamp() {
        assert_eq!(Ease::InCubic.apply(-1.0), 0.0);
        assert_eq!(Ease::InCubic.apply(2.0), 1.0);
    }
}
