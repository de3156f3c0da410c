use keyrelay_core::OperationResult;
use serde::{Deserialize, Serialize};

/// Wire shape of a resolver answer: `{"data": {"success": ..}, "errors": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverResponse {
    pub data: ResponseData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl From<OperationResult> for ResolverResponse {
    fn from(result: OperationResult) -> Self {
        let success = result.is_success();
        let errors = result
            .into_errors()
            .into_iter()
            .map(|error| ErrorBody {
                code: error.code().to_string(),
                message: error.to_string(),
            })
            .collect();

        Self {
            data: ResponseData { success },
            errors,
        }
    }
}
