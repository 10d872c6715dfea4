//! The layer that sits between an HTTP front end and a GraphQL backend.
//!
//! Given a request URI and its query text, a [`Proxy`] looks up where the
//! request should go ([`RequestConfigProvider`]), parses the query with
//! `graphql-astparser`, summarizes its operations ([`inspect_operations`])
//! and runs a chain of [`GraphQLMiddleware`] hooks around the backend call.
//! Transport is left to the caller.

mod invocation_context;
mod invoker;
mod middleware;
mod middleware_error;
mod operation_info;
mod proxy;
mod proxy_error;
mod request_config;

pub use invocation_context::InvocationContext;
pub use invoker::Invoker;
pub use middleware::GraphQLMiddleware;
pub use middleware_error::MiddlewareError;
pub use operation_info::inspect_operations;
pub use operation_info::OperationInfo;
pub use proxy::PreparedRequest;
pub use proxy::Proxy;
pub use proxy_error::ProxyError;
pub use request_config::RequestConfig;
pub use request_config::RequestConfigProvider;
pub use request_config::StaticRequestConfigProvider;
