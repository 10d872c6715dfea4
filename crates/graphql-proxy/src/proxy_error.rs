use crate::MiddlewareError;
use graphql_astparser::ParseError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProxyError {
    #[error("invalid GraphQL request: {0}")]
    Parse(#[from] ParseError),

    /// The query parsed but defines no operation to forward.
    #[error("the request contains no operation")]
    NoOperation,

    #[error("middleware `{middleware}` stopped the request: {source}")]
    Middleware {
        middleware: &'static str,
        source: MiddlewareError,
    },
}
