use crate::InvocationContext;
use crate::MiddlewareError;

/// A hook run around every proxied request.
///
/// `before` hooks run in registration order once the query has been parsed;
/// `after` hooks run in reverse registration order on the backend response.
/// The first error stops the chain.
pub trait GraphQLMiddleware: Send + Sync {
    /// Name used in errors and logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn before(&self, _context: &mut InvocationContext) -> Result<(), MiddlewareError> {
        Ok(())
    }

    fn after(
        &self,
        _context: &mut InvocationContext,
        _response: &mut Vec<u8>,
    ) -> Result<(), MiddlewareError> {
        Ok(())
    }
}
