// `f64::min` / `f64::max` 遇到 NaN 會回傳另一個運算元，
// 這裡改為 NaN 一律往下傳遞，退化參數產生的 NaN 才不會被 0 或 1 吃掉。

pub fn nan_min(lhs: f64, rhs: f64) -> f64 {
    if lhs.is_nan() || rhs.is_nan() {
        f64::NAN
    } else {
        lhs.min(rhs)
    }
}

pub fn nan_max(lhs: f64, rhs: f64) -> f64 {
    if lhs.is_nan() || rhs.is_nan() {
        f64::NAN
    } else {
        lhs.max(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_wins_over_finite_operand() {
        assert!(nan_min(f64::NAN, 0.0).is_nan());
        assert!(nan_min(1.0, f64::NAN).is_nan());
        assert!(nan_max(f64::NAN, 0.0).is_nan());
        assert!(nan_max(0.0, f64::NAN).is_nan());
    }

    #[test]
    fn infinities_behave_like_std() {
        assert_eq!(nan_min(f64::INFINITY, 0.25), 0.25);
        assert_eq!(nan_max(f64::NEG_INFINITY, 0.0), 0.0);
        assert_eq!(nan_max(f64::INFINITY, 0.0), f64::INFINITY);
    }
}
