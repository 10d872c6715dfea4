mod graphql_token;
mod keyword;

pub use graphql_token::Token;
pub use keyword::Keyword;
