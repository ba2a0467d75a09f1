use crate::explorer::parameterset::ParameterSet;
use crate::membership::membershipfunction::MembershipFunction;
use crate::membership::membershipfunctiontype::MembershipFunctionType;

/// 1 / (1 + exp(-a (x - c)))
///
/// c 為反曲點（值為 0.5）。a > 0 遞增、a < 0 遞減、a == 0 為常數 0.5。
pub fn sigmoidal_mf(x: f64, a: f64, c: f64) -> f64 {
    1.0 / (1.0 + (-a * (x - c)).exp())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sigmoidal {
    a: f64,
    c: f64
}

impl Sigmoidal {
    pub fn new(a: f64, c: f64) -> Sigmoidal {
        Sigmoidal { a, c }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn c(&self) -> f64 {
        self.c
    }
}

impl MembershipFunction for Sigmoidal {
    fn function_type(&self) -> MembershipFunctionType {
        MembershipFunctionType::Sigmoidal
    }

    fn parameter_set(&self) -> ParameterSet {
        ParameterSet::Sigmoidal { a: self.a, c: self.c }
    }

    fn membership(&self, x: f64) -> f64 {
        sigmoidal_mf(x, self.a, self.c)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn inflection_and_tail() {
        let mf = Sigmoidal::new(1.0, 5.0);
        assert_eq!(mf.membership(5.0), 0.5);
        assert_abs_diff_eq!(mf.membership(15.0), 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(mf.membership(-5.0), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn zero_slope_is_flat() {
        for x in [-100.0, 0.0, 5.0, 42.0] {
            assert_eq!(sigmoidal_mf(x, 0.0, 5.0), 0.5);
        }
    }

    proptest! {
        #[test]
        fn half_at_inflection(a in -5.0f64..5.0, c in -10.0f64..10.0) {
            prop_assert_eq!(sigmoidal_mf(c, a, c), 0.5);
        }

        #[test]
        fn monotone_in_x(a in 0.01f64..5.0, c in 0.0f64..10.0, x1 in -20.0f64..20.0, dx in 0.0f64..20.0) {
            let x2 = x1 + dx;
            prop_assert!(sigmoidal_mf(x2, a, c) >= sigmoidal_mf(x1, a, c));
            prop_assert!(sigmoidal_mf(x2, -a, c) <= sigmoidal_mf(x1, -a, c));
        }
    }
}
