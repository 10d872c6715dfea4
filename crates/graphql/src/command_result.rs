use std::process::ExitCode;

/// What a command prints, and how the process exits.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self::failure().with_stderr(fmt_args)
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self::success().with_stdout(fmt_args)
    }

    pub fn success() -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: None,
        }
    }

    pub fn failure() -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            ..Self::success()
        }
    }

    pub fn with_stdout(mut self, fmt_args: std::fmt::Arguments<'_>) -> Self {
        self.stdout = Some(format!("{fmt_args}"));
        self
    }

    pub fn with_stderr(mut self, fmt_args: std::fmt::Arguments<'_>) -> Self {
        self.stderr = Some(format!("{fmt_args}"));
        self
    }
}
