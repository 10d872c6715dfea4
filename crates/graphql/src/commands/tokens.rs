use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_astparser::token::Keyword;
use graphql_astparser::Input;
use graphql_astparser::Lexer;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        help="Path to the GraphQL file to tokenize.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match dump_tokens(&self.file_path) {
            Ok(dump) => CommandResult::stdout(format_args!("{dump}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}

/// Renders one `line:column  Keyword  literal` row per token, ending with
/// the `Eof` token.
fn dump_tokens(path: &std::path::Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let input = Input::from_bytes(bytes);
    let tokens = match Lexer::new(&input).tokens() {
        Ok(tokens) => tokens,
        Err(error) => {
            let source = std::str::from_utf8(input.bytes()).ok();
            anyhow::bail!(
                "{}",
                error
                    .with_file_name(path.display().to_string())
                    .format_detailed(source),
            );
        },
    };

    let mut dump = String::new();
    for token in &tokens {
        let location =
            format!("{}:{}", token.position.line(), token.position.column());
        let _ = write!(dump, "{location:<9} {:<18}", format!("{:?}", token.keyword));
        if token.keyword != Keyword::Eof {
            let _ = write!(dump, " {}", input.byte_slice_string(token.literal).escape_debug());
        }
        dump.push('\n');
    }
    let _ = write!(dump, "{} tokens", tokens.len());
    Ok(dump)
}
