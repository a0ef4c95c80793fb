//! Directory picker collaborators

use crate::error::Result;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Asks the user for a folder. `Ok(None)` means the pick was cancelled.
pub trait DirectoryPicker {
    fn pick_directory(&mut self, title: &str) -> Result<Option<PathBuf>>;
}

/// Picker that prompts on a text stream and reads one line back.
/// An empty line cancels; relative answers are resolved against the
/// current directory.
pub struct TerminalPicker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalPicker { input, output }
    }
}

impl TerminalPicker<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr, read from stdin
    pub fn stdio() -> Self {
        TerminalPicker::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> DirectoryPicker for TerminalPicker<R, W> {
    fn pick_directory(&mut self, title: &str) -> Result<Option<PathBuf>> {
        write!(self.output, "{}: ", title)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(None);
        }

        let path = PathBuf::from(answer);
        if path.is_absolute() {
            Ok(Some(path))
        } else {
            Ok(Some(std::env::current_dir()?.join(path)))
        }
    }
}

/// Picker with a predetermined answer, for hosts that already know the path
#[derive(Debug, Clone, Default)]
pub struct FixedPicker {
    answer: Option<PathBuf>,
}

impl FixedPicker {
    pub fn new(answer: Option<PathBuf>) -> Self {
        FixedPicker { answer }
    }
}

impl DirectoryPicker for FixedPicker {
    fn pick_directory(&mut self, _title: &str) -> Result<Option<PathBuf>> {
        Ok(self.answer.clone())
    }
}
