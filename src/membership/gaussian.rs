use crate::explorer::parameterset::ParameterSet;
use crate::membership::membershipfunction::MembershipFunction;
use crate::membership::membershipfunctiontype::MembershipFunctionType;

/// exp(-(x - mean)^2 / (2 sigma^2))
///
/// sigma 預期為正數但不檢查；sigma == 0 時 x == mean 得 NaN，其他點得 0。
pub fn gaussian_mf(x: f64, mean: f64, sigma: f64) -> f64 {
    (-(x - mean).powi(2) / (2.0 * sigma.powi(2))).exp()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    mean: f64,
    sigma: f64
}

impl Gaussian {
    pub fn new(mean: f64, sigma: f64) -> Gaussian {
        Gaussian { mean, sigma }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl MembershipFunction for Gaussian {
    fn function_type(&self) -> MembershipFunctionType {
        MembershipFunctionType::Gaussian
    }

    fn parameter_set(&self) -> ParameterSet {
        ParameterSet::Gaussian { mean: self.mean, sigma: self.sigma }
    }

    fn membership(&self, x: f64) -> f64 {
        gaussian_mf(x, self.mean, self.sigma)
    }
}
