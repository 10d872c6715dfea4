mod file_discovery;
mod parse;
mod tokens;

use crate::Cli;
use crate::CommandResult;
use parse::ParseCmd;
use tokens::TokensCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Parse GraphQL files and report syntax errors.
    Parse(Box<ParseCmd>),

    /// Print the token stream of a GraphQL file.
    Tokens(Box<TokensCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Parse(cmd) => cmd.run(cli).await,
            Self::Tokens(cmd) => cmd.run(cli).await,
        }
    }
}
