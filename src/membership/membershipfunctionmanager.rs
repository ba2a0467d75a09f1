use std::sync::Arc;

use crate::explorer::parameterset::ParameterSet;
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::membership::membershipfunction::MembershipFunction;

/// `{"name": .., "function_type": .., <參數>}` → 驗證過的 membership function。
///
/// 未知的 `function_type` 或缺少參數屬於 `JsonParseError`；
/// 順序錯誤的 triangular / trapezoidal 屬於 `MembershipError`。
fn get_membership_function_from_json(json_value: serde_json::Value) -> Result<Arc<dyn MembershipFunction>, ManagerError> {
    let parameter_set: ParameterSet = ManagerError::from_json_or_json_parse_error(json_value)?;
    Ok(parameter_set.to_membership_function()?)
}

pub struct MembershipFunctionManager;

impl MembershipFunctionManager {
    pub fn new() -> Manager<Arc<dyn MembershipFunction>> {
        Manager::new(get_membership_function_from_json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::manager::manager::IManager;
    use crate::membership::membershipfunctiontype::MembershipFunctionType;

    #[test]
    fn builds_every_kind() {
        let manager = MembershipFunctionManager::new();
        manager.insert_obj_from_json_vec(&[
            json!({"name": "tri", "function_type": "Triangular", "a": 2.0, "b": 5.0, "c": 8.0}),
            json!({"name": "gauss", "function_type": "Gaussian", "mean": 5.0, "sigma": 1.0}),
            json!({"name": "trap", "function_type": "Trapezoidal", "a": 2.0, "b": 4.0, "c": 6.0, "d": 8.0}),
            json!({"name": "bell", "function_type": "Bell", "a": 1.0, "b": 2.0, "c": 5.0}),
            json!({"name": "sig", "function_type": "Sigmoidal", "a": 1.0, "c": 5.0})
        ]).unwrap();
        assert_eq!(manager.len(), 5);
        assert_eq!(manager.get("trap").unwrap().function_type(), MembershipFunctionType::Trapezoidal);
        assert_eq!(manager.get("tri").unwrap().membership(5.0), 1.0);
        assert_eq!(manager.get("sig").unwrap().membership(5.0), 0.5);
    }

    #[test]
    fn rejects_bad_ordering_on_load() {
        let manager = MembershipFunctionManager::new();
        let result = manager.insert_obj_from_json(
            json!({"name": "bad", "function_type": "Trapezoidal", "a": 2.0, "b": 6.0, "c": 4.0, "d": 8.0})
        );
        assert!(matches!(result, Err(ManagerError::MembershipError(_))));
        assert!(!manager.contains("bad"));
    }

    #[test]
    fn unknown_function_type_is_a_parse_error() {
        let manager = MembershipFunctionManager::new();
        let result = manager.insert_obj_from_json(json!({"name": "x", "function_type": "Cauchy", "a": 1.0}));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
