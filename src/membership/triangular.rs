use crate::explorer::parameterset::ParameterSet;
use crate::math::nanpropagation::{
    nan_max,
    nan_min
};
use crate::membership::membershipfunction::{
    MembershipError,
    MembershipFunction
};
use crate::membership::membershipfunctiontype::MembershipFunctionType;

pub const TRIANGULAR_ORDERING: &str = "a < b < c";

pub fn is_valid_triangular(a: f64, b: f64, c: f64) -> bool {
    a < b && b < c
}

pub fn validate_triangular(a: f64, b: f64, c: f64) -> Result<(), MembershipError> {
    if is_valid_triangular(a, b, c) {
        Ok(())
    } else {
        Err(MembershipError::InvalidParameterOrdering {
            function_type: MembershipFunctionType::Triangular,
            ordering: TRIANGULAR_ORDERING
        })
    }
}

/// max(min((x-a)/(b-a), (c-x)/(c-b)), 0)
///
/// a == b 或 b == c 時分母為零，結果可能是 NaN / Infinity，不做攔截。
pub fn triangular_mf(x: f64, a: f64, b: f64, c: f64) -> f64 {
    let rising = (x - a) / (b - a);
    let falling = (c - x) / (c - b);
    nan_max(nan_min(rising, falling), 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular {
    a: f64,
    b: f64,
    c: f64
}

impl Triangular {
    pub fn new(a: f64, b: f64, c: f64) -> Result<Triangular, MembershipError> {
        validate_triangular(a, b, c)?;
        Ok(Triangular { a, b, c })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }
}

impl MembershipFunction for Triangular {
    fn function_type(&self) -> MembershipFunctionType {
        MembershipFunctionType::Triangular
    }

    fn parameter_set(&self) -> ParameterSet {
        ParameterSet::Triangular { a: self.a, b: self.b, c: self.c }
    }

    fn membership(&self, x: f64) -> f64 {
        triangular_mf(x, self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn validator() {
        assert!(validate_triangular(2.0, 5.0, 8.0).is_ok());
        assert!(validate_triangular(5.0, 2.0, 8.0).is_err());
        assert!(!is_valid_triangular(2.0, 2.0, 8.0));
        assert!(!is_valid_triangular(2.0, 5.0, 5.0));
        assert!(!is_valid_triangular(f64::NAN, 5.0, 8.0));
    }

    #[test]
    fn rejected_parameters_do_not_build() {
        let error = Triangular::new(5.0, 2.0, 8.0).unwrap_err();
        assert_eq!(error.to_string(), "Parameters must satisfy: a < b < c");
    }

    #[test]
    fn shape() {
        let mf = Triangular::new(2.0, 5.0, 8.0).unwrap();
        assert_eq!(mf.membership(5.0), 1.0);
        assert_eq!(mf.membership(0.0), 0.0);
        assert_eq!(mf.membership(10.0), 0.0);
        assert_eq!(mf.membership(2.0), 0.0);
        assert_eq!(mf.membership(8.0), 0.0);
        assert_relative_eq!(mf.membership(3.5), 0.5, epsilon = 1e-12);
        assert_relative_eq!(mf.membership(6.5), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_left_edge_is_not_trapped() {
        // a == b：x == a 時 0/0
        assert!(triangular_mf(5.0, 5.0, 5.0, 8.0).is_nan());
        assert_eq!(triangular_mf(6.0, 5.0, 5.0, 8.0), (8.0 - 6.0) / 3.0);
    }

    proptest! {
        #[test]
        fn zero_outside_support(
            a in 0.0f64..10.0,
            db in 0.01f64..5.0,
            dc in 0.01f64..5.0,
            offset in 0.0f64..100.0
        ) {
            let b = a + db;
            let c = b + dc;
            prop_assert_eq!(triangular_mf(a - offset, a, b, c), 0.0);
            prop_assert_eq!(triangular_mf(c + offset, a, b, c), 0.0);
        }

        #[test]
        fn peak_is_exactly_one(a in -10.0f64..10.0, db in 0.01f64..5.0, dc in 0.01f64..5.0) {
            let b = a + db;
            let c = b + dc;
            prop_assert_eq!(triangular_mf(b, a, b, c), 1.0);
        }
    }
}
