//! Line-oriented operator interaction.
//!
//! Handlers and menus never touch stdin/stdout directly; they talk to a
//! [`Console`]. The binary supplies a terminal implementation, tests drive the
//! same code with a [`ScriptedConsole`].

use std::collections::VecDeque;
use std::io;

/// Request/response text interaction with the operator.
pub trait Console {
    /// Shows `prompt` and returns the next input line without its line
    /// terminator.
    ///
    /// End of input is reported as `io::ErrorKind::UnexpectedEof`.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Prints a block of text followed by a newline.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Prints a menu heading. Implementations may style it.
    fn heading(&mut self, text: &str) -> io::Result<()> {
        self.print(text)
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        (**self).read_line(prompt)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        (**self).print(text)
    }

    fn heading(&mut self, text: &str) -> io::Result<()> {
        (**self).heading(text)
    }
}

/// In-memory console fed from a fixed list of input lines.
///
/// Everything printed, prompts included, is captured in order. Once the
/// scripted lines are exhausted `read_line` reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of scripted lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.output.push_str(prompt);
        let line = self
            .input
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))?;
        self.output.push_str(&line);
        self.output.push('\n');
        Ok(line)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }
}
