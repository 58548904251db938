//! Terminal console backed by stdin/stdout.
//!
//! Menu headings are styled with a termimad skin when color is enabled;
//! everything else is written as plain text so report rows reach the
//! terminal exactly as they are saved.

use std::io::{self, BufRead, Write};

use salesdesk_core::Console;
use termimad::{crossterm::style::Color, MadSkin};

/// Line-oriented console that can switch between styled and plain headings
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process' standard streams
    pub fn stdio(rich_enabled: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), rich_enabled)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W, rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Blue);

        Self {
            input,
            output,
            rich_enabled,
            skin,
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the shell prompt off the menu line.
            writeln!(self.output)?;
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn heading(&mut self, text: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return self.print(text);
        }
        for line in text.lines() {
            writeln!(self.output, "{}", self.skin.bold.apply_to(line))?;
        }
        Ok(())
    }
}
