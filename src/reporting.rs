use std::io;
use std::io::Write;

use colored::*;

use crate::error::WidgetError;
use crate::surface::Surface;

/// A `Surface` drawn as lines on a terminal. The input field lives in memory, since a terminal
/// has nowhere to keep it between commands.
#[derive(Debug)]
pub struct TerminalSurface<W : Write> {
    out : W,
    input : String,
    error : Option<io::Error>,
}

impl<W : Write> TerminalSurface<W> {
    pub fn new(out : W) -> Self {
        TerminalSurface {
            out,
            input : String::new(),
            error : None,
        }
    }

    /// Returns the first write failure since the last call, if there was one.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes a line, keeping the first failure for `take_error`.
    fn line(&mut self, text : std::fmt::Arguments) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = writeln!(self.out, "{}", text) {
            self.error = Some(error);
        }
    }

    /// Displays the command summary.
    pub fn help(&mut self) {
        self.line(format_args!("{}", "Commands:".bright_yellow().bold()));
        self.line(format_args!("    add <name>  add a friend to the list"));
        self.line(format_args!("    add         submit the current input again"));
        self.line(format_args!("    draw        draw the secret friend"));
        self.line(format_args!("    list        show the list"));
        self.line(format_args!("    quit        leave"));
    }

    /// Warns about a line that is not a command.
    pub fn unknown_command(&mut self, command : &str) {
        self.line(format_args!("{} unknown command '{}', try 'help'", "Warning:".yellow().bold(), command));
    }

    /// Warns about a names file cell that was skipped.
    pub fn skipped_cell(&mut self, line : u64, field : usize) {
        self.line(format_args!("{} empty name skipped (line: {}, field: {})", "Warning:".yellow().bold(), line, field + 1));
    }
}

impl<W : Write> Surface for TerminalSurface<W> {
    fn input_value(&self) -> &str {
        &self.input
    }

    fn set_input_value(&mut self, value : &str) {
        self.input = value.to_string();
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn set_error_visible(&mut self, visible : bool) {
        // Hiding has nothing to print; the next prompt replaces the line.
        if visible {
            self.line(format_args!("{} {}", "Error:".red().bold(), WidgetError::EmptyName));
        }
    }

    fn replace_list(&mut self, items : &[String]) {
        self.line(format_args!("{}", "Amigos:".bright_yellow().bold()));
        for item in items {
            self.line(format_args!("    {}", item));
        }
    }

    fn show_result(&mut self, message : &str) {
        self.line(format_args!("{}", message.bright_blue().bold()));
    }

    fn alert(&mut self, message : &str) {
        self.line(format_args!("{} {}", "Alerta:".red().bold(), message));
        if self.error.is_none() {
            if let Err(error) = self.out.flush() {
                self.error = Some(error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(surface : TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn list_has_one_line_per_name() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.replace_list(&["Ana".to_string(), "Beto".to_string(), "Ana".to_string()]);
        let text = output(surface);
        let lines : Vec<_> = text.lines().skip(1).collect();
        assert_eq!(lines, ["    Ana", "    Beto", "    Ana"]);
    }

    #[test]
    fn hiding_the_error_prints_nothing() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.set_error_visible(false);
        assert!(output(surface).is_empty());
    }

    #[test]
    fn alert_and_result_are_written() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.alert("Agrega al menos un amigo a la lista");
        surface.show_result("¡Ana es el amigo secreto!");
        let text = output(surface);
        assert!(text.contains("Agrega al menos un amigo a la lista"));
        assert!(text.contains("¡Ana es el amigo secreto!"));
    }

    #[test]
    fn input_is_kept_in_memory() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.set_input_value("  Ana");
        assert_eq!(surface.input_value(), "  Ana");
        surface.clear_input();
        assert_eq!(surface.input_value(), "");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _ : &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_are_kept() {
        let mut surface = TerminalSurface::new(Broken);
        surface.show_result("x");
        surface.show_result("y");
        let error = surface.take_error().unwrap();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
        assert!(surface.take_error().is_none());
    }
}
