use crate::api_client::ApiError;

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    /// The backend reported the requested row as missing
    NotFound,
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> From<Result<T, ApiError>> for FetchState<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(ApiError::NotFound) => Self::NotFound,
            Err(ApiError::Failed(message)) => Self::Error(message),
        }
    }
}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }
}
