//! Output context that handles the low-level writing for renderers
use crossterm::style::{style, Color, Stylize};
use std::fmt::Display;
use std::io::{self, Write};

pub struct TerminalContext<'a> {
    out: &'a mut dyn Write,
    color: bool,
}

impl<'a> TerminalContext<'a> {
    pub fn new(out: &'a mut dyn Write, color: bool) -> Self {
        Self { out, color }
    }

    /// Print text without newline
    pub fn print(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.out, "{}", text)
    }

    /// Print a line followed by a newline
    pub fn print_line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print colored text with automatic reset; plain text when color is off
    pub fn print_colored(&mut self, text: impl Display, color: TerminalColor) -> io::Result<()> {
        if self.color {
            write!(self.out, "{}", style(text).with(color.into()))
        } else {
            self.print(text)
        }
    }

    /// Terminate the current line
    pub fn end_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalColor {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
}

impl TerminalColor {
    /// Cycle used to tell neighbouring rows and rings apart.
    pub const PALETTE: [TerminalColor; 6] = [
        TerminalColor::Red,
        TerminalColor::Yellow,
        TerminalColor::Green,
        TerminalColor::Cyan,
        TerminalColor::Blue,
        TerminalColor::Magenta,
    ];

    /// Palette entry for a 1-based row or ring number.
    pub fn cycle(k: u64) -> Self {
        let len = Self::PALETTE.len() as u64;
        Self::PALETTE[(k.saturating_sub(1) % len) as usize]
    }
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Blue => Color::Blue,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
            TerminalColor::Magenta => Color::Magenta,
        }
    }
}
