/// Returned by a [`GraphQLMiddleware`](crate::GraphQLMiddleware) hook to
/// stop the request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MiddlewareError {
    /// The request is not allowed through (bad credentials, forbidden
    /// operation, ...).
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The middleware itself could not do its job.
    #[error("middleware failed: {0}")]
    Failed(String),
}
