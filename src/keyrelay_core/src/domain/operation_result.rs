use crate::error::ResolverError;

/// Uniform outcome of a resolver invocation.
///
/// Either a success with no errors or a failure with exactly one error. No
/// other shape can be constructed.
#[derive(Debug)]
pub struct OperationResult {
    errors: Vec<ResolverError>,
}

impl OperationResult {
    pub fn success() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn failure(error: ResolverError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ResolverError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ResolverError> {
        self.errors
    }
}

impl From<Result<(), ResolverError>> for OperationResult {
    fn from(result: Result<(), ResolverError>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(error) => Self::failure(error),
        }
    }
}
