use crate::inspect_operations;
use crate::GraphQLMiddleware;
use crate::InvocationContext;
use crate::ProxyError;
use crate::RequestConfig;
use graphql_astparser::pool::Reset;
use std::sync::Arc;

/// Runs the middleware chain for one request at a time.
///
/// An invoker owns the [`InvocationContext`] (and with it the parse
/// buffers) for the request in flight; reset it before reusing it for the
/// next request.
pub struct Invoker {
    middlewares: Arc<[Arc<dyn GraphQLMiddleware>]>,
    context: InvocationContext,
}

impl Invoker {
    pub fn new(middlewares: Arc<[Arc<dyn GraphQLMiddleware>]>) -> Self {
        Self {
            middlewares,
            context: InvocationContext::new(),
        }
    }

    pub fn context(&self) -> &InvocationContext {
        &self.context
    }

    /// Parses `query`, records its operations and the forwarded request
    /// headers, then runs every `before` hook.
    pub fn invoke_before(
        &mut self,
        request_uri: &[u8],
        query: &[u8],
        config: &RequestConfig,
        request_headers: &[(&[u8], &[u8])],
    ) -> Result<(), ProxyError> {
        self.context.reset();
        self.context.set_request_uri(request_uri);
        self.context.parse_context_mut().parse(query)?;

        let operations = inspect_operations(self.context.input(), self.context.document());
        if operations.is_empty() {
            return Err(ProxyError::NoOperation);
        }
        self.context.set_operations(operations);

        for (name, value) in request_headers {
            if config.forwards_header(name) {
                self.context.add_header(*name, *value);
            }
        }

        log::debug!(
            "running {} before hooks for {} operation(s)",
            self.middlewares.len(),
            self.context.operations().len(),
        );
        for middleware in self.middlewares.iter() {
            middleware
                .before(&mut self.context)
                .map_err(|source| ProxyError::Middleware {
                    middleware: middleware.name(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Runs every `after` hook, last registered first.
    pub fn invoke_after(&mut self, response: &mut Vec<u8>) -> Result<(), ProxyError> {
        log::debug!("running {} after hooks", self.middlewares.len());
        for middleware in self.middlewares.iter().rev() {
            middleware
                .after(&mut self.context, response)
                .map_err(|source| ProxyError::Middleware {
                    middleware: middleware.name(),
                    source,
                })?;
        }
        Ok(())
    }
}

impl Reset for Invoker {
    fn reset(&mut self) {
        self.context.reset();
    }
}

impl std::fmt::Debug for Invoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.middlewares.iter().map(|middleware| middleware.name()).collect();
        f.debug_struct("Invoker")
            .field("middlewares", &names)
            .field("context", &self.context)
            .finish()
    }
}
