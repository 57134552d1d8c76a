//! Centralized game logger
//!
//! Renders [`GameEvent`]s for the terminal (plain text or one JSON object per
//! line) and carries the diagnostic log. Every message has a verbosity level;
//! messages above the configured level are dropped from stdout but can still
//! be captured into an in-memory buffer, which is how tests read the
//! transcript of a game.

use crate::error::MastermindError;
use crate::game::events::{EventSink, GameEvent};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, Ref, RefCell};
use std::io::{self, Write};
use std::ops::Deref;

/// Verbosity level for game output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output at all
    Silent = 0,
    /// Minimal - only the game outcome
    Minimal = 1,
    /// Normal - prompts, feedback and outcome (default)
    #[default]
    Normal = 2,
    /// Verbose - also diagnostics (seed, configuration fallbacks)
    Verbose = 3,
}

/// Output format for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// Machine-readable JSON output (one object per line)
    Json,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to in-memory buffer (no stdout)
    Memory,
}

/// A captured log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Verbosity level of this log entry
    pub level: VerbosityLevel,
    /// Rendered message, without trailing newline
    pub message: String,
    /// Optional category (e.g. "event", "diagnostic")
    pub category: Option<String>,
}

/// Guard type that provides read-only access to log entries
pub struct LogGuard<'a> {
    guard: Ref<'a, Vec<LogEntry>>,
}

impl<'a> Deref for LogGuard<'a> {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

/// Terminal printer and diagnostic log for a game
pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_format: OutputFormat,
    output_mode: OutputMode,
    log_buffer: RefCell<Vec<LogEntry>>,
    /// Set after the first failed stdout write, which is reported once
    write_failed: Cell<bool>,
}

impl GameLogger {
    /// Create a new logger with default verbosity (Normal)
    pub fn new() -> Self {
        Self::with_verbosity(VerbosityLevel::default())
    }

    /// Create a logger with specified verbosity
    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            output_format: OutputFormat::default(),
            output_mode: OutputMode::default(),
            log_buffer: RefCell::new(Vec::new()),
            write_failed: Cell::new(false),
        }
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output_format = format;
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Capture into the in-memory buffer and stop writing to stdout
    pub fn enable_capture(&mut self) {
        self.output_mode = OutputMode::Memory;
    }

    pub fn is_capturing(&self) -> bool {
        self.output_mode == OutputMode::Memory
    }

    /// Captured entries, in order
    pub fn logs(&self) -> LogGuard<'_> {
        LogGuard {
            guard: self.log_buffer.borrow(),
        }
    }

    /// Captured entries visible at the configured verbosity, as one transcript
    ///
    /// Entries are joined the same way they are written to stdout, so the
    /// result equals what a terminal would have shown.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for entry in self.logs().iter() {
            if entry.level <= self.verbosity {
                out.push_str(&entry.message);
                if !self.is_prompt(entry) {
                    out.push('\n');
                }
            }
        }
        out
    }

    pub fn clear_logs(&mut self) {
        self.log_buffer.borrow_mut().clear();
    }

    /// Print buffered logs to stdout, respecting verbosity, then clear them
    pub fn flush_buffer(&mut self) {
        let transcript = self.transcript();
        let mut stdout = io::stdout().lock();
        let written = write!(stdout, "{transcript}").and_then(|_| stdout.flush());
        if let Err(e) = written {
            self.report_write_failure(&e);
        }
        self.clear_logs();
    }

    /// Render an event in the configured output format
    pub fn render(&self, event: &GameEvent) -> Result<String, MastermindError> {
        match self.output_format {
            OutputFormat::Json => serde_json::to_string(event)
                .map_err(|e| MastermindError::SerializationError(e.to_string())),
            OutputFormat::Text => Ok(render_text(event)),
        }
    }

    /// Log a game event
    ///
    /// Outcome events are logged at Minimal, everything else at Normal.
    pub fn event(&self, event: &GameEvent) {
        let level = if event.is_outcome() {
            VerbosityLevel::Minimal
        } else {
            VerbosityLevel::Normal
        };
        // Text prompts leave the cursor after '>'
        let newline =
            !(self.output_format == OutputFormat::Text && matches!(event, GameEvent::Prompt { .. }));

        match self.render(event) {
            Ok(message) => self.write(level, message, "event", newline),
            Err(e) => eprintln!("Failed to render {event:?}: {e}"),
        }
    }

    /// Log a diagnostic at Verbose level
    pub fn verbose(&self, message: &str) {
        self.diagnostic(VerbosityLevel::Verbose, message);
    }

    fn diagnostic(&self, level: VerbosityLevel, message: &str) {
        let rendered = match self.output_format {
            OutputFormat::Text => format!("  {message}"),
            OutputFormat::Json => {
                serde_json::json!({ "log": message, "level": level }).to_string()
            }
        };
        self.write(level, rendered, "diagnostic", true);
    }

    fn write(&self, level: VerbosityLevel, message: String, category: &str, newline: bool) {
        let should_capture = self.is_capturing();
        let should_output = self.output_mode == OutputMode::Stdout
            && level <= self.verbosity
            && level != VerbosityLevel::Silent;

        if should_output {
            let mut stdout = io::stdout().lock();
            let written = if newline {
                writeln!(stdout, "{message}")
            } else {
                write!(stdout, "{message}").and_then(|_| stdout.flush())
            };
            if let Err(e) = written {
                self.report_write_failure(&e);
            }
        }

        if should_capture {
            let category = if newline {
                category.to_string()
            } else {
                format!("{category}:prompt")
            };
            self.log_buffer.borrow_mut().push(LogEntry {
                level,
                message,
                category: Some(category),
            });
        }
    }

    /// Whether a write to stdout has failed (e.g. a closed pipe)
    pub fn output_failed(&self) -> bool {
        self.write_failed.get()
    }

    fn report_write_failure(&self, error: &io::Error) {
        if !self.write_failed.replace(true) {
            eprintln!("Failed to write to stdout: {error}");
        }
    }

    fn is_prompt(&self, entry: &LogEntry) -> bool {
        entry
            .category
            .as_deref()
            .is_some_and(|c| c.ends_with(":prompt"))
    }
}

/// Plain-text wording of each event
fn render_text(event: &GameEvent) -> String {
    match event {
        GameEvent::Welcome => "Will you find the secret code?\nPlease enter a valid guess".to_string(),
        GameEvent::Prompt { round } => format!("---\nRound {round}\n>"),
        GameEvent::InvalidInput { .. } => "Wrong input!".to_string(),
        GameEvent::RoundResult {
            well_placed,
            misplaced,
        } => format!("Well placed pieces: {well_placed}\nMisplaced pieces: {misplaced}"),
        GameEvent::Won => "Congratz! You did it!".to_string(),
        GameEvent::Exhausted { secret } => {
            format!("Sorry! You didn't find the code. The code was {secret}")
        }
    }
}

impl EventSink for GameLogger {
    fn emit(&mut self, event: &GameEvent) {
        self.event(event);
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogger")
            .field("verbosity", &self.verbosity)
            .field("output_format", &self.output_format)
            .field("output_mode", &self.output_mode)
            .field("log_count", &self.log_buffer.borrow().len())
            .finish()
    }
}
