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

pub const TRAPEZOIDAL_ORDERING: &str = "a < b < c < d";

pub fn is_valid_trapezoidal(a: f64, b: f64, c: f64, d: f64) -> bool {
    a < b && b < c && c < d
}

pub fn validate_trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<(), MembershipError> {
    if is_valid_trapezoidal(a, b, c, d) {
        Ok(())
    } else {
        Err(MembershipError::InvalidParameterOrdering {
            function_type: MembershipFunctionType::Trapezoidal,
            ordering: TRAPEZOIDAL_ORDERING
        })
    }
}

/// max(min(min((x-a)/(b-a), 1), (d-x)/(d-c)), 0)
pub fn trapezoidal_mf(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    let rising = nan_min((x - a) / (b - a), 1.0);
    let falling = (d - x) / (d - c);
    nan_max(nan_min(rising, falling), 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoidal {
    a: f64,
    b: f64,
    c: f64,
    d: f64
}

impl Trapezoidal {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Trapezoidal, MembershipError> {
        validate_trapezoidal(a, b, c, d)?;
        Ok(Trapezoidal { a, b, c, d })
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

    pub fn d(&self) -> f64 {
        self.d
    }
}

impl MembershipFunction for Trapezoidal {
    fn function_type(&self) -> MembershipFunctionType {
        MembershipFunctionType::Trapezoidal
    }

    fn parameter_set(&self) -> ParameterSet {
        ParameterSet::Trapezoidal { a: self.a, b: self.b, c: self.c, d: self.d }
    }

    fn membership(&self, x: f64) -> f64 {
        trapezoidal_mf(x, self.a, self.b, self.c, self.d)
    }
}
