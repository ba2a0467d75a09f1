use crate::explorer::parameterset::ParameterSet;
use crate::membership::membershipfunction::MembershipFunction;
use crate::membership::membershipfunctiontype::MembershipFunctionType;

/// Generalized bell：1 / (1 + |(x - c)/a|^(2b))
///
/// a 控制寬度，b 控制斜率，c 為中心。a == 0 會除以零，不檢查。
/// b <= 0 時中心點變成 0^0 或 0^負數，峰值不再是 1。
pub fn bell_mf(x: f64, a: f64, b: f64, c: f64) -> f64 {
    1.0 / (1.0 + ((x - c) / a).abs().powf(2.0 * b))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bell {
    a: f64,
    b: f64,
    c: f64
}

impl Bell {
    pub fn new(a: f64, b: f64, c: f64) -> Bell {
        Bell { a, b, c }
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

impl MembershipFunction for Bell {
    fn function_type(&self) -> MembershipFunctionType {
        MembershipFunctionType::Bell
    }

    fn parameter_set(&self) -> ParameterSet {
        ParameterSet::Bell { a: self.a, b: self.b, c: self.c }
    }

    fn membership(&self, x: f64) -> f64 {
        bell_mf(x, self.a, self.b, self.c)
    }
}
