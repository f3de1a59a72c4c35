//! Console capabilities injected into the dispatcher.
//!
//! Commands never touch `stdout`, `stderr` or `stdin` directly. They write
//! through an [`Output`] sink and ask questions through an [`InputSource`], so
//! the whole workflow can run in tests without capturing process streams.

use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input};

/// Line-oriented sink for user-facing messages.
pub trait Output {
    /// Write one line to the standard channel.
    fn line(&mut self, text: &str);

    /// Write one line to the error channel.
    fn error_line(&mut self, text: &str);
}

/// Source of answers for interactive prompts.
pub trait InputSource {
    /// Ask for a value. Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> Option<String>;
}

/// [`Output`] backed by the process streams.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn error_line(&mut self, text: &str) {
        eprintln!("{}", text);
    }
}

/// [`InputSource`] reading from standard input.
///
/// On a terminal the prompt is rendered with `dialoguer`; otherwise a single
/// line is read from the piped input.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn prompt(&mut self, label: &str) -> Option<String> {
        if console::Term::stdout().is_term() && console::Term::stderr().is_term() {
            return Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(label)
                .allow_empty(true)
                .interact_text()
                .ok();
        }

        print!("{}: ", label);
        let _ = io::stdout().flush();
        read_line(&mut io::stdin().lock())
    }
}

/// Read one line, trimming the line terminator. `None` at end of input.
fn read_line(reader: &mut impl BufRead) -> Option<String> {
    let mut buf = String::new();
    match reader.read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim_end_matches(['\r', '\n']).to_string()),
    }
}
