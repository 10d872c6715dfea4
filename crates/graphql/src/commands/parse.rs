use crate::commands::file_discovery;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_astparser::pool::Pool;
use graphql_astparser::ParseContext;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Print each parsed document as JSON instead of a summary.",
        long,
    )]
    json: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be parsed.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug, Default)]
struct DocumentSummary {
    operations: usize,
    fragments: usize,
    type_system_definitions: usize,
    nodes: usize,
    json: Option<serde_json::Value>,
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let discovered = file_discovery::find_graphql_files(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
        );
        if !discovered.errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors while scanning input paths: {:#?}",
                output_utils::RED_X,
                discovered.errors,
            ));
        }

        let contexts = Arc::new(Pool::<ParseContext>::default());
        let tasks: Vec<_> =
            discovered.file_paths.iter()
                .map(|path| {
                    let contexts = Arc::clone(&contexts);
                    let path = path.clone();
                    let emit_json = self.json;
                    tokio::task::spawn_blocking(move || {
                        parse_file(&contexts, &path, emit_json)
                    })
                })
                .collect();

        let mut summaries = Vec::with_capacity(tasks.len());
        let mut errors = vec![];
        for (path, task) in discovered.file_paths.iter().zip(tasks) {
            match task.await {
                Ok(Ok(summary)) => summaries.push((path, summary)),
                Ok(Err(e)) => errors.push(format!("{e:#}")),
                Err(e) => errors.push(format!(
                    "{}: parse task failed: {e}",
                    path.display(),
                )),
            }
        }
        log::debug!(
            "Parsed {} files using {} pooled parse contexts.",
            discovered.file_paths.len(),
            contexts.idle_count(),
        );

        let result =
            if errors.is_empty() {
                CommandResult::success()
            } else {
                CommandResult::failure().with_stderr(format_args!(
                    "{} {} of {} files failed to parse:\n\n{}",
                    output_utils::RED_X,
                    errors.len(),
                    discovered.file_paths.len(),
                    errors.join("\n"),
                ))
            };

        if self.json {
            let documents: serde_json::Map<String, serde_json::Value> =
                summaries.into_iter()
                    .filter_map(|(path, summary)| {
                        Some((path.display().to_string(), summary.json?))
                    })
                    .collect();
            return match serde_json::to_string_pretty(&documents) {
                Ok(json) => result.with_stdout(format_args!("{json}")),
                Err(e) => CommandResult::stderr(format_args!(
                    "{} Failed to serialize documents: {e}",
                    output_utils::RED_X,
                )),
            };
        }

        if summaries.is_empty() {
            return result;
        }
        let total = summaries.iter().fold(
            DocumentSummary::default(),
            |mut total, (_, summary)| {
                total.operations += summary.operations;
                total.fragments += summary.fragments;
                total.type_system_definitions += summary.type_system_definitions;
                total.nodes += summary.nodes;
                total
            },
        );
        let status =
            if errors.is_empty() {
                format!("{} All GraphQL parsed successfully", output_utils::GREEN_CHECK)
            } else {
                format!("{} Some GraphQL parsed successfully", output_utils::RED_X)
            };
        result.with_stdout(format_args!(
            concat!(
                "{}:\n",
                "  * Parsed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Found {} operations.\n",
                "  * Found {} fragments.\n",
                "  * Found {} type system definitions.\n",
                "  * Built {} AST nodes.",
            ),
            status,
            summaries.len(),
            discovered.num_skipped,
            total.operations,
            total.fragments,
            total.type_system_definitions,
            total.nodes,
        ))
    }
}

fn parse_file(
    contexts: &Pool<ParseContext>,
    path: &Path,
    emit_json: bool,
) -> anyhow::Result<DocumentSummary> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    log::trace!("Parsing {path:#?} ({} bytes).", bytes.len());

    let mut context = contexts.acquire();
    if let Err(error) = context.parse(&bytes) {
        let source = std::str::from_utf8(&bytes).ok();
        anyhow::bail!(
            "{}",
            error
                .with_file_name(path.display().to_string())
                .format_detailed(source),
        );
    }

    let document = &context.document;
    let executable = document.root_nodes.iter()
        .filter(|root| root.kind.is_executable())
        .count();
    let json = if emit_json {
        Some(serde_json::to_value(document).with_context(|| {
            format!("failed to serialize the document of {}", path.display())
        })?)
    } else {
        None
    };
    Ok(DocumentSummary {
        operations: document.operation_definitions.len(),
        fragments: executable - document.operation_definitions.len(),
        type_system_definitions: document.root_nodes.len() - executable,
        nodes: document.node_count(),
        json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "graphql-cli-parse-{}-{name}",
            std::process::id(),
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn summarizes_mixed_documents() {
        let path = write_temp(
            "mixed.graphql",
            "type Query { me: User }\n\
             scalar Date\n\
             query Me { me { ...UserFields } }\n\
             fragment UserFields on User { id }\n",
        );
        let contexts = Pool::<ParseContext>::default();
        let summary = parse_file(&contexts, &path, false).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(summary.operations, 1);
        assert_eq!(summary.fragments, 1);
        assert_eq!(summary.type_system_definitions, 2);
        assert!(summary.nodes > 0);
        assert!(summary.json.is_none());
        assert_eq!(contexts.idle_count(), 1);
    }

    #[test]
    fn emits_json_when_requested() {
        let path = write_temp("json.graphql", "{ a }");
        let contexts = Pool::<ParseContext>::default();
        let summary = parse_file(&contexts, &path, true).unwrap();
        std::fs::remove_file(&path).unwrap();

        let Some(json) = summary.json else {
            panic!("Expected a JSON document, got: {summary:?}");
        };
        assert_eq!(json["operation_definitions"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn reports_syntax_errors_with_the_file_name() {
        let path = write_temp("broken.graphql", "type Person {\n  name String\n}");
        let contexts = Pool::<ParseContext>::default();
        let error = parse_file(&contexts, &path, false).unwrap_err().to_string();
        std::fs::remove_file(&path).unwrap();

        assert!(error.starts_with("error: expected `:`"));
        assert!(error.contains(&format!("--> {}:2:8", path.display())));
    }
}
