use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MembershipFunctionType {
    Triangular,
    Gaussian,
    Trapezoidal,
    Bell,
    Sigmoidal
}

impl MembershipFunctionType {
    pub const ALL: [MembershipFunctionType; 5] = [
        MembershipFunctionType::Triangular,
        MembershipFunctionType::Gaussian,
        MembershipFunctionType::Trapezoidal,
        MembershipFunctionType::Bell,
        MembershipFunctionType::Sigmoidal
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MembershipFunctionType::Triangular => "triangular",
            MembershipFunctionType::Gaussian => "gaussian",
            MembershipFunctionType::Trapezoidal => "trapezoidal",
            MembershipFunctionType::Bell => "bell",
            MembershipFunctionType::Sigmoidal => "sigmoidal"
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MembershipFunctionType::Triangular => "Triangular Membership Function",
            MembershipFunctionType::Gaussian => "Gaussian Membership Function",
            MembershipFunctionType::Trapezoidal => "Trapezoidal Membership Function",
            MembershipFunctionType::Bell => "Generalized Bell Membership Function",
            MembershipFunctionType::Sigmoidal => "Sigmoidal Membership Function"
        }
    }

    pub fn equation(&self) -> &'static str {
        match self {
            MembershipFunctionType::Triangular => "mu(x) = max(min((x - a)/(b - a), (c - x)/(c - b)), 0)",
            MembershipFunctionType::Gaussian => "mu(x) = exp(-(x - mean)^2 / (2 * sigma^2))",
            MembershipFunctionType::Trapezoidal => "mu(x) = max(min(min((x - a)/(b - a), 1), (d - x)/(d - c)), 0)",
            MembershipFunctionType::Bell => "mu(x) = 1 / (1 + |(x - c)/a|^(2b))",
            MembershipFunctionType::Sigmoidal => "mu(x) = 1 / (1 + exp(-a * (x - c)))"
        }
    }

    /// 參數名稱，順序與 `ParameterSet` 欄位一致。
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            MembershipFunctionType::Triangular => &["a", "b", "c"],
            MembershipFunctionType::Gaussian => &["mean", "sigma"],
            MembershipFunctionType::Trapezoidal => &["a", "b", "c", "d"],
            MembershipFunctionType::Bell => &["a", "b", "c"],
            MembershipFunctionType::Sigmoidal => &["a", "c"]
        }
    }
}

impl fmt::Display for MembershipFunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown membership function '{0}'")]
pub struct ParseMembershipFunctionTypeError(String);

impl FromStr for MembershipFunctionType {
    type Err = ParseMembershipFunctionTypeError;

    fn from_str(s: &str) -> Result<MembershipFunctionType, ParseMembershipFunctionTypeError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "triangular" | "tri" => Ok(MembershipFunctionType::Triangular),
            "gaussian" | "gauss" => Ok(MembershipFunctionType::Gaussian),
            "trapezoidal" | "trap" => Ok(MembershipFunctionType::Trapezoidal),
            "bell" | "generalized-bell" | "gbell" => Ok(MembershipFunctionType::Bell),
            "sigmoidal" | "sigmoid" | "sig" => Ok(MembershipFunctionType::Sigmoidal),
            _ => Err(ParseMembershipFunctionTypeError(s.to_owned()))
        }
    }
}
