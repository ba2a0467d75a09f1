use std::sync::Arc;

use thiserror::Error;

use crate::explorer::parameterset::ParameterSet;
use crate::math::samplegrid::SampleGrid;
use crate::membership::curveresult::CurveResult;
use crate::membership::membershipfunctiontype::MembershipFunctionType;

// ─────────────────────────────────────────────────────────────────────────────
// MembershipError
// ─────────────────────────────────────────────────────────────────────────────

/// 只有參數順序錯誤會被拒絕。
///
/// 除以零、`0^0` 之類的數值退化不屬於錯誤：結果中的 NaN / Infinity
/// 依 IEEE-754 原樣留在曲線裡。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    #[error("Parameters must satisfy: {ordering}")]
    InvalidParameterOrdering {
        function_type: MembershipFunctionType,
        ordering: &'static str
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MembershipFunction
// ─────────────────────────────────────────────────────────────────────────────

/// 單一 membership function：x 映射到 [0, 1] 的隸屬度。
///
/// 每個點的計算彼此獨立，`evaluate` 只是逐點 `map`。
/// `Send + Sync` 讓 `Arc<dyn MembershipFunction>` 可跨執行緒共享。
pub trait MembershipFunction: Send + Sync {
    fn function_type(&self) -> MembershipFunctionType;

    fn parameter_set(&self) -> ParameterSet;

    fn membership(&self, x: f64) -> f64;

    fn evaluate(&self, grid: &Arc<SampleGrid>) -> CurveResult {
        let values = grid.values().map(|x| self.membership(x));
        CurveResult::new(Arc::clone(grid), values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_error_message_names_the_ordering() {
        let error = MembershipError::InvalidParameterOrdering {
            function_type: MembershipFunctionType::Triangular,
            ordering: "a < b < c"
        };
        assert_eq!(error.to_string(), "Parameters must satisfy: a < b < c");
    }
}
