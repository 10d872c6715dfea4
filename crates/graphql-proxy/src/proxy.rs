use crate::GraphQLMiddleware;
use crate::InvocationContext;
use crate::Invoker;
use crate::OperationInfo;
use crate::ProxyError;
use crate::RequestConfig;
use crate::RequestConfigProvider;
use crate::StaticRequestConfigProvider;
use graphql_astparser::pool::Pool;
use graphql_astparser::pool::Pooled;
use std::sync::Arc;
use url::Url;

/// Prepares GraphQL requests for forwarding and post-processes the
/// responses.
///
/// `Proxy` is `Sync`; share it between request handlers behind an `Arc`.
/// Invokers (and the parse buffers they own) are pooled, so steady-state
/// traffic reuses memory instead of allocating per request.
pub struct Proxy {
    provider: Box<dyn RequestConfigProvider>,
    invokers: Pool<Invoker>,
}

impl Proxy {
    pub fn new(
        provider: impl RequestConfigProvider + 'static,
        middlewares: Vec<Arc<dyn GraphQLMiddleware>>,
    ) -> Self {
        let middlewares: Arc<[Arc<dyn GraphQLMiddleware>]> = middlewares.into();
        Self {
            provider: Box::new(provider),
            invokers: Pool::new(move || Invoker::new(Arc::clone(&middlewares))),
        }
    }

    /// A proxy that sends every request to the same backend.
    pub fn with_static_config(
        config: RequestConfig,
        middlewares: Vec<Arc<dyn GraphQLMiddleware>>,
    ) -> Self {
        Self::new(StaticRequestConfigProvider::new(config), middlewares)
    }

    /// Resolves the backend for `request_uri`, parses `query` and runs the
    /// `before` hooks.
    ///
    /// `request_headers` are the incoming headers; only those named in the
    /// config's `add_headers_to_context` are kept.
    pub fn prepare(
        &self,
        request_uri: &[u8],
        query: &[u8],
        request_headers: &[(&[u8], &[u8])],
    ) -> Result<PreparedRequest<'_>, ProxyError> {
        let config = self.provider.request_config(request_uri);
        log::debug!(
            "resolved backend {} for {}",
            config.backend_url,
            String::from_utf8_lossy(request_uri),
        );
        let mut invoker = self.invokers.acquire();
        invoker.invoke_before(request_uri, query, &config, request_headers)?;
        Ok(PreparedRequest {
            backend_url: config.backend_url,
            invoker,
        })
    }

    /// Runs the `after` hooks over the backend's `response` and releases the
    /// request's buffers.
    pub fn complete(
        &self,
        mut prepared: PreparedRequest<'_>,
        response: &mut Vec<u8>,
    ) -> Result<(), ProxyError> {
        prepared.invoker.invoke_after(response)
    }

    /// Number of invokers waiting for a request.
    pub fn idle_invokers(&self) -> usize {
        self.invokers.idle_count()
    }
}

impl std::fmt::Debug for Proxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Proxy")
            .field("invokers", &self.invokers)
            .finish_non_exhaustive()
    }
}

/// A parsed request that passed the `before` hooks and is ready to be sent
/// to `backend_url`.
///
/// Dropping it without calling [`Proxy::complete`] skips the `after` hooks
/// but still returns its buffers to the pool.
#[derive(Debug)]
pub struct PreparedRequest<'proxy> {
    pub backend_url: Url,
    invoker: Pooled<'proxy, Invoker>,
}

impl PreparedRequest<'_> {
    pub fn operations(&self) -> &[OperationInfo] {
        self.invoker.context().operations()
    }

    /// Headers to send along with the query.
    pub fn headers(&self) -> &[(Vec<u8>, Vec<u8>)] {
        self.invoker.context().headers()
    }

    /// The query body to forward, unchanged.
    pub fn query(&self) -> &[u8] {
        self.invoker.context().input().bytes()
    }

    pub fn context(&self) -> &InvocationContext {
        self.invoker.context()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MiddlewareError;
    use graphql_astparser::ast::OperationType;

    struct StampResponse;

    impl GraphQLMiddleware for StampResponse {
        fn before(&self, context: &mut InvocationContext) -> Result<(), MiddlewareError> {
            let operation = context
                .operations()
                .first()
                .and_then(|operation| operation.name.clone())
                .unwrap_or_default();
            context.add_header("x-operation-name", operation);
            Ok(())
        }

        fn after(
            &self,
            context: &mut InvocationContext,
            response: &mut Vec<u8>,
        ) -> Result<(), MiddlewareError> {
            let name = context.header(b"x-operation-name").unwrap_or_default().to_vec();
            response.extend_from_slice(b" for ");
            response.extend_from_slice(&name);
            Ok(())
        }
    }

    fn backend(path: &str) -> Url {
        Url::parse("http://backend.test").unwrap().join(path).unwrap()
    }

    #[test]
    fn prepares_and_completes_a_request() {
        let proxy = Proxy::with_static_config(
            RequestConfig::new(backend("/graphql")),
            vec![Arc::new(StampResponse)],
        );
        let query = b"query Hero($episode: Episode) { hero(episode: $episode) { name } }";
        let prepared = proxy.prepare(b"/graphql", query, &[]).unwrap();
        assert_eq!(prepared.backend_url.as_str(), "http://backend.test/graphql");
        assert_eq!(prepared.query(), &query[..]);
        assert_eq!(prepared.operations().len(), 1);
        assert_eq!(prepared.operations()[0].operation_type, OperationType::Query);
        assert_eq!(
            prepared.headers(),
            &[(b"x-operation-name".to_vec(), b"Hero".to_vec())][..],
        );
        assert_eq!(proxy.idle_invokers(), 0);

        let mut response = b"{\"data\":{}}".to_vec();
        proxy.complete(prepared, &mut response).unwrap();
        assert_eq!(response, b"{\"data\":{}} for Hero");
        assert_eq!(proxy.idle_invokers(), 1);
    }

    #[test]
    fn routes_by_request_uri() {
        let proxy = Proxy::new(
            |uri: &[u8]| {
                if uri.starts_with(b"/v2") {
                    RequestConfig::new(backend("/v2/graphql"))
                } else {
                    RequestConfig::new(backend("/graphql"))
                }
            },
            vec![],
        );
        let prepared = proxy.prepare(b"/v2/query", b"{ a }", &[]).unwrap();
        assert_eq!(prepared.backend_url.path(), "/v2/graphql");
        drop(prepared);

        let prepared = proxy.prepare(b"/query", b"{ a }", &[]).unwrap();
        assert_eq!(prepared.backend_url.path(), "/graphql");
    }

    /// Verifies a failed request still returns its invoker to the pool.
    #[test]
    fn failed_requests_release_their_invoker() {
        let proxy = Proxy::with_static_config(RequestConfig::new(backend("/graphql")), vec![]);
        let error = proxy.prepare(b"/", b"query {", &[]).unwrap_err();
        assert!(matches!(error, ProxyError::Parse(_)));
        assert!(error.to_string().starts_with("invalid GraphQL request: <input>:1:8: error:"));
        assert_eq!(proxy.idle_invokers(), 1);

        let prepared = proxy.prepare(b"/", b"{ ok }", &[]).unwrap();
        assert_eq!(prepared.operations()[0].name, None);
        assert_eq!(proxy.idle_invokers(), 0);
    }

    #[test]
    fn proxy_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Proxy>();
    }
}
