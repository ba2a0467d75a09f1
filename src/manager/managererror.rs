use serde::Deserialize;
use thiserror::Error;

use crate::math::samplegrid::SampleGridError;
use crate::membership::membershipfunction::MembershipError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error(transparent)]
    MembershipError(#[from] MembershipError),
    #[error(transparent)]
    SampleGridError(#[from] SampleGridError)
}

impl ManagerError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, Self>
        where T: for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::membershipfunctiontype::MembershipFunctionType;

    #[test]
    fn messages() {
        assert_eq!(ManagerError::map_elem_not_found("narrow").to_string(), "key 'narrow' not found");
        let error: ManagerError = MembershipError::InvalidParameterOrdering {
            function_type: MembershipFunctionType::Trapezoidal,
            ordering: "a < b < c < d"
        }.into();
        assert_eq!(error.to_string(), "Parameters must satisfy: a < b < c < d");
    }

    #[test]
    fn json_parse_error_is_wrapped() {
        let result: Result<u32, ManagerError> =
            ManagerError::from_json_or_json_parse_error(serde_json::json!("not a number"));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
