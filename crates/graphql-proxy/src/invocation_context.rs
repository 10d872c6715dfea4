use crate::OperationInfo;
use graphql_astparser::pool::Reset;
use graphql_astparser::Document;
use graphql_astparser::Input;
use graphql_astparser::ParseContext;

/// Per-request state shared by the middleware chain.
///
/// Holds the parsed query, the operations found in it, and the headers that
/// will be sent to the backend. Instances are pooled inside an
/// [`Invoker`](crate::Invoker), so every buffer here is reused across
/// requests.
#[derive(Debug, Default)]
pub struct InvocationContext {
    request_uri: Vec<u8>,
    parse_context: ParseContext,
    operations: Vec<OperationInfo>,
    headers: Vec<(Vec<u8>, Vec<u8>)>,
}

impl InvocationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_uri(&self) -> &[u8] {
        &self.request_uri
    }

    /// The raw query, as received.
    pub fn input(&self) -> &Input {
        &self.parse_context.input
    }

    pub fn document(&self) -> &Document {
        &self.parse_context.document
    }

    pub fn operations(&self) -> &[OperationInfo] {
        &self.operations
    }

    /// Headers to send to the backend, in insertion order.
    pub fn headers(&self) -> &[(Vec<u8>, Vec<u8>)] {
        &self.headers
    }

    /// Returns the first header named `name` (case-insensitive).
    pub fn header(&self, name: &[u8]) -> Option<&[u8]> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_slice())
    }

    pub fn add_header(&mut self, name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.headers.push((name.into(), value.into()));
    }

    pub(crate) fn set_request_uri(&mut self, request_uri: &[u8]) {
        self.request_uri.clear();
        self.request_uri.extend_from_slice(request_uri);
    }

    pub(crate) fn parse_context_mut(&mut self) -> &mut ParseContext {
        &mut self.parse_context
    }

    pub(crate) fn set_operations(&mut self, operations: Vec<OperationInfo>) {
        self.operations = operations;
    }
}

impl Reset for InvocationContext {
    fn reset(&mut self) {
        self.request_uri.clear();
        self.parse_context.reset();
        self.operations.clear();
        self.headers.clear();
    }
}
