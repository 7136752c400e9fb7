// src/console/input.rs
use std::io::{BufRead, ErrorKind, Write};

use crate::error::{AppError, AppResult};

/// Line-oriented console over explicit handles.
///
/// The handles are injected at construction so every component reads
/// and writes through the same pair, and tests can script a session
/// with a `Cursor` and a `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline, flush, and read one line.
    pub fn prompt(&mut self, label: &str) -> AppResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt for a line and parse it as an integer after trimming.
    pub fn prompt_i64(&mut self, label: &str) -> AppResult<i64> {
        let line = self.prompt(label)?;
        Ok(line.trim().parse()?)
    }

    /// Prompt for a line and parse it as a year after trimming.
    pub fn prompt_i32(&mut self, label: &str) -> AppResult<i32> {
        let line = self.prompt(label)?;
        Ok(line.trim().parse()?)
    }

    /// Read one line, without its terminator.
    ///
    /// A closed input stream is an error: the session cannot continue
    /// without a prompt to answer, and looping on EOF would spin.
    pub fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(AppError::Io(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "input stream closed",
            )));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Print a full line and flush.
    pub fn write_line(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Consume the console and hand back the output handle, so a
    /// scripted session can be inspected after it ran.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn prompt_reads_one_line_without_terminator() {
        let mut console = console("JoSmith\nsecret\n");
        assert_eq!(console.prompt("Username: ").unwrap(), "JoSmith");
        assert_eq!(console.prompt("Password: ").unwrap(), "secret");
        assert_eq!(console.output, b"Username: Password: ");
    }

    #[test]
    fn crlf_is_stripped() {
        let mut console = console("JoSmith\r\n");
        assert_eq!(console.read_line().unwrap(), "JoSmith");
    }

    #[test]
    fn eof_is_an_io_error() {
        let mut console = console("");
        let err = console.read_line().unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn numeric_prompt_trims_before_parsing() {
        let mut console = console("  42 \n");
        assert_eq!(console.prompt_i64("Enter mission_id: ").unwrap(), 42);
    }

    #[test]
    fn non_numeric_input_is_an_invalid_number_error() {
        let mut console = console("forty-two\n");
        let err = console.prompt_i64("Enter mission_id: ").unwrap_err();
        assert!(matches!(err, AppError::InvalidNumber(_)));
    }
}
