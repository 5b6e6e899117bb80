//! Line-oriented `View` over any reader/writer pair.

use std::fmt;
use std::io::{self, BufRead, Write};

use birthday_core::format::messages;
use birthday_core::{Listing, View};

/// Reads commands and confirmations from `input`, writes rows and messages
/// to `output`. Both share one stream so a confirmation prompt consumes the
/// next line the user types.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Print `prompt` and read one line. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.output.write_fmt(args).and_then(|_| self.output.write_all(b"\n")) {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }
}

impl<R: BufRead, W: Write> View for Terminal<R, W> {
    fn show(&mut self, listing: &Listing) {
        match listing {
            Listing::Empty => self.say(format_args!("{}", messages::EMPTY_PLACEHOLDER)),
            Listing::Rows(rows) => {
                for row in rows {
                    self.say(format_args!("  {} [{} {}]", row.label, messages::DELETE_BUTTON, row.id));
                }
            }
        }
    }

    fn alert(&mut self, message: &str) {
        self.say(format_args!("! {message}"));
    }

    fn confirm(&mut self, question: &str) -> bool {
        match self.read_line(&format!("{question} [y/N] ")) {
            Ok(Some(answer)) => {
                let answer = answer.trim().to_lowercase();
                matches!(answer.as_str(), "y" | "yes" | "д" | "да")
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read confirmation");
                false
            }
        }
    }

    /// Form values live only in the command line that carried them.
    fn clear_form(&mut self) {}
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use birthday_core::Row;

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(t: &Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(t.output().clone()).unwrap()
    }

    #[test]
    fn shows_placeholder_for_empty_listing() {
        let mut t = terminal("");
        t.show(&Listing::Empty);
        assert_eq!(printed(&t), format!("{}\n", messages::EMPTY_PLACEHOLDER));
    }

    #[test]
    fn shows_one_line_per_row_with_delete_id() {
        let mut t = terminal("");
        t.show(&Listing::Rows(vec![
            Row { id: 1, label: "@alice — 02.05.1990".to_string() },
            Row { id: 2, label: "@bob — 30.11.1985".to_string() },
        ]));
        assert_eq!(
            printed(&t),
            "  @alice — 02.05.1990 [Удалить 1]\n  @bob — 30.11.1985 [Удалить 2]\n"
        );
    }

    #[test]
    fn confirm_accepts_yes_in_either_language() {
        assert!(terminal("y\n").confirm("?"));
        assert!(terminal("Да\n").confirm("?"));
        assert!(!terminal("n\n").confirm("?"));
        assert!(!terminal("\n").confirm("?"));
    }

    #[test]
    fn confirm_at_end_of_input_declines() {
        assert!(!terminal("").confirm("?"));
    }

    #[test]
    fn read_line_strips_line_ending() {
        let mut t = terminal("list\r\nquit\n");
        assert_eq!(t.read_line("> ").unwrap().as_deref(), Some("list"));
        assert_eq!(t.read_line("> ").unwrap().as_deref(), Some("quit"));
        assert_eq!(t.read_line("> ").unwrap(), None);
    }
}
