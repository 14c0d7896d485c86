//! Terminal input handling for the Escaple REPL.
//!
//! Wraps rustyline configuration and completion tailored to the engine's
//! command set and the hotspots of the current room.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Outcome of reading a line from the REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// What a line is being read for. Only commands go into the history file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Command,
    /// Answer to a modal prompt (codes, the solution word).
    Answer,
}

/// True if a line read as `kind` should be added to the persistent history.
fn records_history(line: &str, kind: LineKind) -> bool {
    kind == LineKind::Command && !line.trim().is_empty()
}

const PLAYER_COMMANDS: &[&str] = &[
    "click", "examine", "exit", "help", "inspect", "inventory", "look", "next", "prev", "quit",
];

const DEV_COMMANDS: &[&str] = &[":flags"];

/// Verbs whose argument is a hotspot label.
const HOTSPOT_VERBS: &[&str] = &["click", "use", "open"];

lazy_static! {
    static ref COMMAND_TERMS: Vec<&'static str> = {
        let mut terms: Vec<&'static str> = PLAYER_COMMANDS.to_vec();
        if crate::DEV_MODE {
            terms.extend_from_slice(DEV_COMMANDS);
        }
        terms.sort_unstable();
        terms
    };
}

type ReplEditor = rustyline::Editor<EscapleHelper, DefaultHistory>;

#[derive(Default)]
struct EscapleHelper {
    hotspot_labels: Vec<String>,
}

impl Helper for EscapleHelper {}

impl Completer for EscapleHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        Ok(complete_line(&self.hotspot_labels, line, pos))
    }
}

impl Hinter for EscapleHelper {
    type Hint = String;
}

impl Highlighter for EscapleHelper {}

impl Validator for EscapleHelper {}

/// Completion candidates for `line` with the cursor at `pos`.
fn complete_line(labels: &[String], line: &str, pos: usize) -> (usize, Vec<Pair>) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start();
    let start = pos - trimmed.len();
    if trimmed.is_empty() {
        return (start, Vec::new());
    }
    let lower = trimmed.to_lowercase();

    if let Some((verb, partial)) = lower.split_once(' ')
        && HOTSPOT_VERBS.contains(&verb)
    {
        let partial = partial.trim_start();
        let arg_start = pos - partial.len();
        let pairs = labels
            .iter()
            .filter(|label| label.to_lowercase().starts_with(partial))
            .map(|label| Pair {
                display: label.clone(),
                replacement: label.clone(),
            })
            .collect();
        return (arg_start, pairs);
    }

    let pairs = COMMAND_TERMS
        .iter()
        .filter(|term| term.starts_with(&lower))
        .map(|term| Pair {
            display: (*term).to_string(),
            replacement: (*term).to_string(),
        })
        .collect();
    (start, pairs)
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available, falling back to
/// a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new() {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Offer these labels when completing hotspot arguments.
    pub fn set_hotspot_labels(&mut self, labels: Vec<String>) {
        if let Backend::Rustyline(input) = &mut self.backend
            && let Some(helper) = input.editor.helper_mut()
        {
            helper.hotspot_labels = labels;
        }
    }

    /// Read a command line. Non-empty commands are kept in the history.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        self.read_as(prompt, LineKind::Command)
    }

    /// Read an answer to a modal prompt. Answers never reach the history file.
    pub fn read_answer(&mut self, prompt: &str) -> io::Result<InputEvent> {
        self.read_as(prompt, LineKind::Answer)
    }

    /// Read from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    fn read_as(&mut self, prompt: &str, kind: LineKind) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt, kind) {
            Ok(event) => Ok(event),
            Err(err) if self.backend.is_rustyline() => {
                warn!("rustyline input failed: {err} -- switching to basic stdin");
                self.backend = Backend::plain();
                self.backend.read_line(prompt, kind)
            },
            Err(err) => Err(err),
        }
    }
}

enum Backend {
    Rustyline(RustylineInput),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str, kind: LineKind) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt, kind),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: ReplEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    fn new() -> io::Result<Self> {
        let mut editor = ReplEditor::new().map_err(map_io_err)?;
        editor.set_helper(Some(EscapleHelper::default()));
        let history_path = history_file_path();

        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent()
                && let Err(err) = fs::create_dir_all(dir)
            {
                warn!("failed to create history directory {}: {err}", dir.display());
            }

            if let Err(err) = editor.load_history(path) {
                match err {
                    ReadlineError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                        info!("no prior history found at {}, starting fresh", path.display());
                    },
                    other => warn!("failed to load history from {}: {other}", path.display()),
                }
            }
        }

        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str, kind: LineKind) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if records_history(&line, kind) {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to append to history: {err}");
                    }
                    if let Some(path) = self.history_path.as_ref()
                        && let Err(err) = self.editor.save_history(path)
                    {
                        warn!("failed to persist history to {}: {err}", path.display());
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    base.join("escaple").join("history.txt")
}
