use crate::ErrorNote;
use crate::ErrorNoteKind;
use crate::ErrorNotes;
use crate::LexErrorKind;
use crate::ParseErrorKind;
use crate::Position;

/// The first lexical or syntax error encountered while parsing a document.
///
/// Parsing is fail-fast: a `ParseError` aborts the whole parse and the target
/// [`Document`](crate::Document) must be discarded or reset.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct ParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "expected `:`, found `String`", "unterminated string"
    message: String,

    /// Where the error was detected. For "unexpected token" errors this is
    /// the offending token; at the end of input it is the position just
    /// past the last token and any trailing ignored characters.
    position: Position,

    /// Byte length of the offending token (0 when pointing at end of input).
    len: u32,

    kind: ParseErrorKind,
    notes: ErrorNotes,

    /// Optional file name shown in formatted output instead of `<input>`.
    file_name: Option<String>,
}

impl ParseError {
    /// Creates a new error with no notes.
    pub fn new(
        message: impl Into<String>,
        position: Position,
        len: u32,
        kind: ParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            position,
            len,
            kind,
            notes: ErrorNotes::new(),
            file_name: None,
        }
    }

    /// Creates a lexical error. The message is derived from `kind`.
    pub fn lex(kind: LexErrorKind, position: Position, len: u32) -> Self {
        Self::new(kind.to_string(), position, len, ParseErrorKind::Lex(kind))
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the position where the error was detected.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &ErrorNotes {
        &self.notes
    }

    /// Returns `true` if the input could not be tokenized.
    pub fn is_lex_error(&self) -> bool {
        self.kind.is_lex_error()
    }

    /// Returns `true` if the tokens did not match the grammar.
    pub fn is_syntax_error(&self) -> bool {
        self.kind.is_syntax_error()
    }

    /// Adds a general note without a position.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::general(message));
    }

    /// Adds a general note pointing at a related location.
    pub fn add_note_at(&mut self, message: impl Into<String>, position: Position) {
        self.notes.push(ErrorNote::general_at(message, position));
    }

    /// Adds a help note.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::help(message));
    }

    /// Adds a spec reference note.
    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(ErrorNote::spec(url));
    }

    /// Names the file this error came from in formatted output.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `:`, found `String`
    ///   --> schema.graphql:5:12
    ///    |
    ///  5 |     userName String
    ///    |              ^^^^^^
    ///    |
    ///    = help: ...
    /// ```
    ///
    /// When `source` is `None`, snippets are omitted but the location line is
    /// still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!(
            "  --> {}:{}:{}\n",
            self.display_file_name(),
            self.position.line(),
            self.position.column(),
        ));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                ErrorNoteKind::General => "note",
                ErrorNoteKind::Help => "help",
                ErrorNoteKind::Spec => "spec",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));

            if let (Some(position), Some(src)) = (note.position, source)
                && let Some(snippet) = Self::format_note_snippet(src, position)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// ```text
    /// schema.graphql:5:12: error: expected `:`, found `String`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}:{}: error: {}",
            self.display_file_name(),
            self.position.line(),
            self.position.column(),
            self.message,
        )
    }

    fn display_file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("<input>")
    }

    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let line_content = nth_line(source, self.position.line())?;
        let line_num = self.position.line();
        let width = line_num.to_string().len().max(2);
        let col_start = self.position.column().saturating_sub(1) as usize;

        // Underline the offending token, clipped to the end of its line.
        let start = self.position.byte_offset() as usize;
        let end = start.saturating_add(self.len as usize).min(source.len());
        let underline_len = source
            .get(start..end)
            .map(|text| text.lines().next().unwrap_or("").chars().count())
            .unwrap_or(0)
            .max(1);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", ""));
        output.push_str(&format!("{line_num:>width$} | {line_content}\n"));
        output.push_str(&format!(
            "{:>width$} | {:>col_start$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
        ));
        Some(output)
    }

    fn format_note_snippet(source: &str, position: Position) -> Option<String> {
        let line_content = nth_line(source, position.line())?;
        let line_num = position.line();
        let width = line_num.to_string().len().max(2);
        let col_start = position.column().saturating_sub(1) as usize;

        let mut output = String::new();
        output.push_str(&format!("     {line_num:>width$} | {line_content}\n"));
        output.push_str(&format!("     {:>width$} | {:>col_start$}-\n", "", ""));
        Some(output)
    }
}

/// Returns the 1-based `line` of `source`, honoring `\r\n`, `\r`, and `\n`
/// the same way the lexer does.
fn nth_line(source: &str, line: u32) -> Option<&str> {
    let target = line.checked_sub(1)? as usize;
    let mut current = 0usize;
    let mut line_start = 0usize;
    let bytes = source.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        let terminator_len = match bytes[i] {
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => 2,
            b'\r' | b'\n' => 1,
            _ => {
                i += 1;
                continue;
            },
        };
        if current == target {
            return source.get(line_start..i);
        }
        current += 1;
        i += terminator_len;
        line_start = i;
    }
    if current == target {
        source.get(line_start..)
    } else {
        None
    }
}
