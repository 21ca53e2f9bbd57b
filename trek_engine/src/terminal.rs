//! Terminal input and output for the default handlers.
//!
//! Input goes through a rustyline editor with history and completion over the
//! game's command words when stdin is a terminal, and through plain line reads
//! otherwise. Output is wrapped to the terminal width.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use textwrap::{fill, termwidth};

use crate::handlers::{DisplayHandler, InputHandler};

const DEFAULT_PROMPT: &str = "> ";

/// Completes the word under the cursor from a fixed list of command words.
struct CommandWords {
    words: Vec<String>,
}

impl Helper for CommandWords {}

impl Completer for CommandWords {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = word_start(line, pos);
        Ok((start, completions(&self.words, &line[start..pos])))
    }
}

impl Hinter for CommandWords {
    type Hint = String;
}

impl Highlighter for CommandWords {}

impl Validator for CommandWords {}

/// Byte offset where the word ending at `pos` begins.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(index, space)| index + space.len_utf8())
}

fn completions(words: &[String], prefix: &str) -> Vec<Pair> {
    if prefix.is_empty() {
        return Vec::new();
    }
    words
        .iter()
        .filter(|word| word.starts_with(prefix))
        .map(|word| Pair {
            display: word.clone(),
            replacement: word.clone(),
        })
        .collect()
}

/// Where one read attempt left us.
#[derive(Debug, PartialEq, Eq)]
enum Read {
    Line(String),
    /// Ctrl-C: nothing typed this time, but more may follow.
    Cancelled,
    /// End of input, or a failure that ends it.
    Closed,
}

impl From<Result<String, ReadlineError>> for Read {
    fn from(result: Result<String, ReadlineError>) -> Self {
        match result {
            Ok(line) => Read::Line(line),
            Err(ReadlineError::Interrupted) => Read::Cancelled,
            Err(ReadlineError::Eof) => Read::Closed,
            Err(err) => {
                warn!("terminal input failed: {err}");
                Read::Closed
            },
        }
    }
}

enum Source {
    Editor {
        editor: Box<Editor<CommandWords, DefaultHistory>>,
        history: Option<PathBuf>,
    },
    Stdin,
}

impl Source {
    fn open(words: &[String]) -> Self {
        if !io::stdin().is_terminal() {
            info!("stdin is not a terminal; reading plain lines");
            return Source::Stdin;
        }
        match Editor::new() {
            Ok(mut editor) => {
                editor.set_helper(Some(CommandWords { words: words.to_vec() }));
                let history = history_path();
                if let Some(path) = &history
                    && let Err(err) = editor.load_history(path)
                {
                    debug!("no history loaded from {}: {err}", path.display());
                }
                Source::Editor {
                    editor: Box::new(editor),
                    history,
                }
            },
            Err(err) => {
                warn!("line editor unavailable ({err}); reading plain lines");
                Source::Stdin
            },
        }
    }

    fn read(&mut self, prompt: &str) -> Read {
        match self {
            Source::Editor { editor, history } => {
                let read = Read::from(editor.readline(prompt));
                if let Read::Line(line) = &read
                    && !line.trim().is_empty()
                {
                    remember(editor, history.as_deref(), line);
                }
                read
            },
            Source::Stdin => read_plain_line(prompt, &mut io::stdin().lock()),
        }
    }
}

fn remember(editor: &mut Editor<CommandWords, DefaultHistory>, history: Option<&Path>, line: &str) {
    if let Err(err) = editor.add_history_entry(line) {
        warn!("failed to record history: {err}");
    }
    let Some(path) = history else { return };
    if let Some(dir) = path.parent()
        && let Err(err) = std::fs::create_dir_all(dir)
    {
        warn!("failed to create {}: {err}", dir.display());
        return;
    }
    if let Err(err) = editor.save_history(path) {
        warn!("failed to save history to {}: {err}", path.display());
    }
}

fn read_plain_line(prompt: &str, reader: &mut impl BufRead) -> Read {
    print!("{prompt}");
    if let Err(err) = io::stdout().flush() {
        debug!("failed to flush prompt: {err}");
    }
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Read::Closed,
        Ok(_) => Read::Line(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(err) => {
            warn!("failed to read from stdin: {err}");
            Read::Closed
        },
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|base| history_path_in(&base))
}

fn history_path_in(base: &Path) -> PathBuf {
    base.join("trek_engine").join("history.txt")
}

/// Default input handler: one line per call from the terminal, opened on first use.
///
/// Ctrl-C yields an empty line. End of input yields an empty line and marks the
/// handler exhausted.
pub struct TerminalInput {
    prompt: String,
    words: Vec<String>,
    source: Option<Source>,
    exhausted: bool,
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::with_completions(Vec::new())
    }
}

impl TerminalInput {
    /// Terminal input offering tab-completion over the given command words.
    pub fn with_completions(words: Vec<String>) -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            words,
            source: None,
            exhausted: false,
        }
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    fn accept(&mut self, read: Read) -> String {
        match read {
            Read::Line(line) => line,
            Read::Cancelled => {
                debug!("input cancelled");
                String::new()
            },
            Read::Closed => {
                info!("end of input reached");
                self.exhausted = true;
                String::new()
            },
        }
    }
}

impl InputHandler for TerminalInput {
    fn read_input(&mut self) -> String {
        if self.exhausted {
            return String::new();
        }
        let words = &self.words;
        let read = self.source.get_or_insert_with(|| Source::open(words)).read(&self.prompt);
        self.accept(read)
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Default display handler: prints text wrapped to the terminal width.
#[derive(Debug, Clone)]
pub struct TerminalDisplay {
    width: usize,
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self { width: termwidth() }
    }
}

impl TerminalDisplay {
    pub fn with_width(width: usize) -> Self {
        Self { width }
    }

    pub fn format(&self, text: &str) -> String {
        fill(text, self.width)
    }
}

impl DisplayHandler for TerminalDisplay {
    fn display(&mut self, text: &str) {
        println!("{}", self.format(text));
    }
}
