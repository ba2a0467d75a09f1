use std::fmt;
use std::sync::Arc;

use serde::{
    Deserialize,
    Serialize
};

use crate::explorer::parameterrange::{
    self,
    ParameterRange
};
use crate::math::samplegrid::SampleGrid;
use crate::membership::bell::Bell;
use crate::membership::curveresult::CurveResult;
use crate::membership::gaussian::Gaussian;
use crate::membership::membershipfunction::{
    MembershipError,
    MembershipFunction
};
use crate::membership::membershipfunctiontype::MembershipFunctionType;
use crate::membership::sigmoidal::Sigmoidal;
use crate::membership::trapezoidal::{
    validate_trapezoidal,
    Trapezoidal
};
use crate::membership::triangular::{
    validate_triangular,
    Triangular
};

// ─────────────────────────────────────────────────────────────────────────────
// ParameterSet
// ─────────────────────────────────────────────────────────────────────────────

/// 輸入端送進來、尚未驗證的一組參數。
///
/// 每次輸入變動就建立一個新的 `ParameterSet`，評估完即丟棄，沒有全域狀態。
/// JSON 形式以 `function_type` 欄位區分種類：
///
/// ```json
/// {"function_type": "Triangular", "a": 2.0, "b": 5.0, "c": 8.0}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "function_type")]
pub enum ParameterSet {
    Triangular { a: f64, b: f64, c: f64 },
    Gaussian { mean: f64, sigma: f64 },
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    Bell { a: f64, b: f64, c: f64 },
    Sigmoidal { a: f64, c: f64 }
}

impl ParameterSet {
    pub fn default_for(function_type: MembershipFunctionType) -> ParameterSet {
        match function_type {
            MembershipFunctionType::Triangular => ParameterSet::Triangular {
                a: parameterrange::TRIANGULAR_A.default(),
                b: parameterrange::TRIANGULAR_B.default(),
                c: parameterrange::TRIANGULAR_C.default()
            },
            MembershipFunctionType::Gaussian => ParameterSet::Gaussian {
                mean: parameterrange::GAUSSIAN_MEAN.default(),
                sigma: parameterrange::GAUSSIAN_SIGMA.default()
            },
            MembershipFunctionType::Trapezoidal => ParameterSet::Trapezoidal {
                a: parameterrange::TRAPEZOIDAL_A.default(),
                b: parameterrange::TRAPEZOIDAL_B.default(),
                c: parameterrange::TRAPEZOIDAL_C.default(),
                d: parameterrange::TRAPEZOIDAL_D.default()
            },
            MembershipFunctionType::Bell => ParameterSet::Bell {
                a: parameterrange::BELL_A.default(),
                b: parameterrange::BELL_B.default(),
                c: parameterrange::BELL_C.default()
            },
            MembershipFunctionType::Sigmoidal => ParameterSet::Sigmoidal {
                a: parameterrange::SIGMOIDAL_A.default(),
                c: parameterrange::SIGMOIDAL_C.default()
            }
        }
    }

    pub fn function_type(&self) -> MembershipFunctionType {
        match self {
            ParameterSet::Triangular { .. } => MembershipFunctionType::Triangular,
            ParameterSet::Gaussian { .. } => MembershipFunctionType::Gaussian,
            ParameterSet::Trapezoidal { .. } => MembershipFunctionType::Trapezoidal,
            ParameterSet::Bell { .. } => MembershipFunctionType::Bell,
            ParameterSet::Sigmoidal { .. } => MembershipFunctionType::Sigmoidal
        }
    }

    /// 參數值，順序與 `MembershipFunctionType::parameter_names` 相同。
    pub fn values(&self) -> Vec<f64> {
        match *self {
            ParameterSet::Triangular { a, b, c } => vec![a, b, c],
            ParameterSet::Gaussian { mean, sigma } => vec![mean, sigma],
            ParameterSet::Trapezoidal { a, b, c, d } => vec![a, b, c, d],
            ParameterSet::Bell { a, b, c } => vec![a, b, c],
            ParameterSet::Sigmoidal { a, c } => vec![a, c]
        }
    }

    /// 每個參數目前適用的範圍。
    ///
    /// Trapezoidal 的 b、c、d 下界分別是目前的 a、b、c，所以範圍會隨參數值變動。
    pub fn ranges(&self) -> Vec<ParameterRange> {
        match *self {
            ParameterSet::Triangular { .. } => vec![
                parameterrange::TRIANGULAR_A,
                parameterrange::TRIANGULAR_B,
                parameterrange::TRIANGULAR_C
            ],
            ParameterSet::Gaussian { .. } => vec![
                parameterrange::GAUSSIAN_MEAN,
                parameterrange::GAUSSIAN_SIGMA
            ],
            ParameterSet::Trapezoidal { a, b, c, .. } => vec![
                parameterrange::TRAPEZOIDAL_A,
                parameterrange::TRAPEZOIDAL_B.with_min(a),
                parameterrange::TRAPEZOIDAL_C.with_min(b),
                parameterrange::TRAPEZOIDAL_D.with_min(c)
            ],
            ParameterSet::Bell { .. } => vec![
                parameterrange::BELL_A,
                parameterrange::BELL_B,
                parameterrange::BELL_C
            ],
            ParameterSet::Sigmoidal { .. } => vec![
                parameterrange::SIGMOIDAL_A,
                parameterrange::SIGMOIDAL_C
            ]
        }
    }

    /// 套用滑桿範圍。Trapezoidal 依 a → b → c → d 的順序逐一 clamp。
    pub fn clamped(&self) -> ParameterSet {
        match *self {
            ParameterSet::Triangular { a, b, c } => ParameterSet::Triangular {
                a: parameterrange::TRIANGULAR_A.clamp(a),
                b: parameterrange::TRIANGULAR_B.clamp(b),
                c: parameterrange::TRIANGULAR_C.clamp(c)
            },
            ParameterSet::Gaussian { mean, sigma } => ParameterSet::Gaussian {
                mean: parameterrange::GAUSSIAN_MEAN.clamp(mean),
                sigma: parameterrange::GAUSSIAN_SIGMA.clamp(sigma)
            },
            ParameterSet::Trapezoidal { a, b, c, d } => {
                let a = parameterrange::TRAPEZOIDAL_A.clamp(a);
                let b = parameterrange::TRAPEZOIDAL_B.with_min(a).clamp(b);
                let c = parameterrange::TRAPEZOIDAL_C.with_min(b).clamp(c);
                let d = parameterrange::TRAPEZOIDAL_D.with_min(c).clamp(d);
                ParameterSet::Trapezoidal { a, b, c, d }
            },
            ParameterSet::Bell { a, b, c } => ParameterSet::Bell {
                a: parameterrange::BELL_A.clamp(a),
                b: parameterrange::BELL_B.clamp(b),
                c: parameterrange::BELL_C.clamp(c)
            },
            ParameterSet::Sigmoidal { a, c } => ParameterSet::Sigmoidal {
                a: parameterrange::SIGMOIDAL_A.clamp(a),
                c: parameterrange::SIGMOIDAL_C.clamp(c)
            }
        }
    }

    /// 輸入端的 clamp 決定：`clamp` 為 true 時套用滑桿範圍，否則原樣保留，
    /// 超出範圍的值與退化參數（例如 sigma = 0）會直接進入求值。
    pub fn for_input(&self, clamp: bool) -> ParameterSet {
        if !clamp {
            return *self;
        }
        let clamped = self.clamped();
        if clamped != *self {
            log::info!("clamped {} to {}", self, clamped);
        }
        clamped
    }

    /// 只有 triangular 與 trapezoidal 有順序限制，其他種類一律通過。
    pub fn validate(&self) -> Result<(), MembershipError> {
        match *self {
            ParameterSet::Triangular { a, b, c } => validate_triangular(a, b, c),
            ParameterSet::Trapezoidal { a, b, c, d } => validate_trapezoidal(a, b, c, d),
            _ => Ok(())
        }
    }

    pub fn to_membership_function(&self) -> Result<Arc<dyn MembershipFunction>, MembershipError> {
        let membership_function: Arc<dyn MembershipFunction> = match *self {
            ParameterSet::Triangular { a, b, c } => Arc::new(Triangular::new(a, b, c)?),
            ParameterSet::Gaussian { mean, sigma } => Arc::new(Gaussian::new(mean, sigma)),
            ParameterSet::Trapezoidal { a, b, c, d } => Arc::new(Trapezoidal::new(a, b, c, d)?),
            ParameterSet::Bell { a, b, c } => Arc::new(Bell::new(a, b, c)),
            ParameterSet::Sigmoidal { a, c } => Arc::new(Sigmoidal::new(a, c))
        };
        Ok(membership_function)
    }

    /// 驗證後在整個網格上求值。驗證失敗時不產生任何曲線。
    pub fn evaluate(&self, grid: &Arc<SampleGrid>) -> Result<CurveResult, MembershipError> {
        let membership_function = self.to_membership_function().inspect_err(|error| {
            log::warn!("rejected {} parameters {:?}: {}", self.function_type(), self.values(), error);
        })?;
        log::debug!(
            "evaluating {} {:?} over {} points",
            self.function_type(),
            self.values(),
            grid.len()
        );
        Ok(membership_function.evaluate(grid))
    }
}

impl fmt::Display for ParameterSet {
    /// `triangular a=2, b=5, c=8`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let function_type = self.function_type();
        write!(f, "{}", function_type)?;
        for (i, (name, value)) in function_type.parameter_names().iter().zip(self.values()).enumerate() {
            let separator = if i == 0 { " " } else { ", " };
            write!(f, "{}{}={}", separator, name, value)?;
        }
        Ok(())
    }
}
