use serde::Serialize;

/// 單一參數的滑桿範圍與預設值。
///
/// 範圍只是提供給輸入端的資料，membership function 本身不會 clamp。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRange {
    min: f64,
    max: f64,
    default: f64
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64, default: f64) -> ParameterRange {
        ParameterRange { min, max, default }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn default(&self) -> f64 {
        self.default
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// 與 `f64::clamp` 不同：min / max 為 NaN 時不 panic，NaN 輸入原樣回傳。
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// 下界改為 `min`，用於 trapezoidal 後一個參數不得小於前一個的情形。
    pub fn with_min(&self, min: f64) -> ParameterRange {
        ParameterRange { min, max: self.max, default: self.default }
    }
}

pub const UNIT_DOMAIN: ParameterRange = ParameterRange::new(0.0, 10.0, 5.0);

pub const TRIANGULAR_A: ParameterRange = ParameterRange::new(0.0, 10.0, 2.0);
pub const TRIANGULAR_B: ParameterRange = ParameterRange::new(0.0, 10.0, 5.0);
pub const TRIANGULAR_C: ParameterRange = ParameterRange::new(0.0, 10.0, 8.0);

pub const GAUSSIAN_MEAN: ParameterRange = UNIT_DOMAIN;
pub const GAUSSIAN_SIGMA: ParameterRange = ParameterRange::new(0.1, 5.0, 1.0);

pub const TRAPEZOIDAL_A: ParameterRange = ParameterRange::new(0.0, 10.0, 2.0);
pub const TRAPEZOIDAL_B: ParameterRange = ParameterRange::new(0.0, 10.0, 4.0);
pub const TRAPEZOIDAL_C: ParameterRange = ParameterRange::new(0.0, 10.0, 6.0);
pub const TRAPEZOIDAL_D: ParameterRange = ParameterRange::new(0.0, 10.0, 8.0);

pub const BELL_A: ParameterRange = ParameterRange::new(0.1, 5.0, 1.0);
pub const BELL_B: ParameterRange = ParameterRange::new(0.1, 10.0, 2.0);
pub const BELL_C: ParameterRange = UNIT_DOMAIN;

pub const SIGMOIDAL_A: ParameterRange = ParameterRange::new(0.1, 5.0, 1.0);
pub const SIGMOIDAL_C: ParameterRange = UNIT_DOMAIN;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_to_bounds() {
        assert_eq!(GAUSSIAN_SIGMA.clamp(0.0), 0.1);
        assert_eq!(GAUSSIAN_SIGMA.clamp(7.5), 5.0);
        assert_eq!(GAUSSIAN_SIGMA.clamp(2.5), 2.5);
        assert!(GAUSSIAN_SIGMA.clamp(f64::NAN).is_nan());
    }

    #[test]
    fn nan_lower_bound_does_not_panic() {
        let range = TRAPEZOIDAL_B.with_min(f64::NAN);
        assert_eq!(range.clamp(3.0), 3.0);
        assert_eq!(range.clamp(11.0), 10.0);
    }

    #[test]
    fn defaults_lie_within_ranges() {
        for range in [
            TRIANGULAR_A, TRIANGULAR_B, TRIANGULAR_C,
            GAUSSIAN_MEAN, GAUSSIAN_SIGMA,
            TRAPEZOIDAL_A, TRAPEZOIDAL_B, TRAPEZOIDAL_C, TRAPEZOIDAL_D,
            BELL_A, BELL_B, BELL_C,
            SIGMOIDAL_A, SIGMOIDAL_C
        ] {
            assert!(range.contains(range.default()));
        }
    }
}
