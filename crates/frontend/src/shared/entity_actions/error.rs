use crate::shared::api_utils::ApiError;
use contracts::enums::StatusEntity;
use thiserror::Error;

/// Shown when the backend gives no message of its own
pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// Deal stage change without an `order`
    #[error("Stage order is required to update a {0}")]
    MissingOrder(StatusEntity),

    /// Status change without a `status`
    #[error("Status is required to update a {0}")]
    MissingStatus(StatusEntity),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl DispatchError {
    /// Precondition errors never reach the network
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            DispatchError::MissingOrder(_) | DispatchError::MissingStatus(_)
        )
    }

    /// Text for the failure notification
    pub fn user_message(&self) -> String {
        match self {
            DispatchError::Api(api) => api
                .backend_message()
                .map(str::to_string)
                .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            precondition => precondition.to_string(),
        }
    }
}
