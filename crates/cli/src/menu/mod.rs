//! Numbered text menus
//!
//! A [`Menu`] lists its options and handles one choice at a time.
//! [`run_menu`] drives it from a [`Prompter`] until the user picks an
//! exit option or input runs out. Menus never hold records between
//! choices; every action goes back to the repository.

pub mod inventory;
pub mod tasks;

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use console::style;
use stockroom_domain::RepositoryError;
use tracing::debug;

pub use inventory::InventoryMenu;
pub use tasks::TaskMenu;

/// What the loop does after a choice has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A numbered menu
pub trait Menu {
    /// Heading printed above the options
    const TITLE: &'static str;

    /// Option labels, shown numbered from 1
    fn options(&self) -> &'static [&'static str];

    /// Handle one trimmed choice
    fn dispatch<I: BufRead, O: Write>(
        &mut self,
        choice: &str,
        io: &mut Prompter<I, O>,
    ) -> anyhow::Result<Flow>;
}

/// Show the menu and dispatch choices until exit or end of input
pub fn run_menu<M: Menu, I: BufRead, O: Write>(
    menu: &mut M,
    io: &mut Prompter<I, O>,
) -> anyhow::Result<()> {
    loop {
        io.say("")?;
        io.say(style(M::TITLE).bold())?;
        for (number, label) in menu.options().iter().enumerate() {
            io.say(format_args!("{}. {}", number + 1, label))?;
        }

        let Some(choice) = io.ask("Choose an action: ")? else {
            debug!(menu = M::TITLE, "input closed, leaving menu");
            return Ok(());
        };

        if menu.dispatch(choice.trim(), io)? == Flow::Exit {
            return Ok(());
        }
    }
}

/// Result of asking for a whole number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberInput {
    Value(u64),
    /// The user just pressed enter
    Blank,
    /// Not a whole number; the user has already been told
    Invalid,
    /// Input ended
    Closed,
}

impl NumberInput {
    /// The number, treating a blank answer as invalid input
    pub fn required<I: BufRead, O: Write>(self, io: &mut Prompter<I, O>) -> io::Result<Option<u64>> {
        match self {
            NumberInput::Value(n) => Ok(Some(n)),
            NumberInput::Blank => {
                io.error("A number is required.")?;
                Ok(None)
            }
            NumberInput::Invalid | NumberInput::Closed => Ok(None),
        }
    }
}

/// Line-oriented prompt over any reader and writer
pub struct Prompter<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Prompter<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Print one line
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Print one line as an error
    pub fn error(&mut self, line: impl Display) -> io::Result<()> {
        self.say(style(line).red())
    }

    /// Print one line as a success message
    pub fn success(&mut self, line: impl Display) -> io::Result<()> {
        self.say(style(line).green())
    }

    /// Print `label` and read one line without its line ending.
    /// `None` means input has ended.
    pub fn ask(&mut self, label: impl Display) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Ask for a whole number, reporting anything that doesn't parse
    pub fn ask_number(&mut self, label: impl Display) -> io::Result<NumberInput> {
        let Some(raw) = self.ask(label)? else {
            return Ok(NumberInput::Closed);
        };

        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(NumberInput::Blank);
        }
        match raw.parse::<u64>() {
            Ok(n) => Ok(NumberInput::Value(n)),
            Err(_) => {
                self.error(format_args!("'{}' is not a whole number.", raw))?;
                Ok(NumberInput::Invalid)
            }
        }
    }

    /// Recover from a rejected operation by telling the user, or pass
    /// storage failures up to the caller.
    pub fn recover(&mut self, err: RepositoryError) -> anyhow::Result<()> {
        match err {
            RepositoryError::Persistence { .. } => Err(err.into()),
            other => {
                self.error(other)?;
                Ok(())
            }
        }
    }

    /// Take back the writer, mainly so tests can read what was printed
    pub fn into_output(self) -> O {
        self.output
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::io::Cursor;

    pub type TestPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    /// Prompter fed with `input`, printing into a buffer
    pub fn prompter(input: &str) -> TestPrompter {
        console::set_colors_enabled(false);
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    pub fn printed(io: TestPrompter) -> String {
        String::from_utf8(io.into_output()).unwrap()
    }
}
