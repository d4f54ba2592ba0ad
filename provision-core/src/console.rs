use crate::conf::ConfigError;
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;


/// Line-oriented operator I/O.
///
/// Prompts and diagnostics both go to `output`; logging stays on stderr.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `label` and block for one line of input, without its line terminator.
    pub fn prompt(&mut self, label: &str) -> Result<String, ConfigError> {
        write!(self.output, "{label} ").map_err(ConfigError::terminal)?;
        self.output.flush().map_err(ConfigError::terminal)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(ConfigError::terminal)?;

        if read == 0 {
            return Err(ConfigError::Cancelled {
                prompt: label.to_string(),
            });
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }

    /// Prompt for an integer. There is no retry: bad input is returned as an error.
    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> Result<T, ConfigError> {
        let answer = self.prompt(label)?;

        answer
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber {
                prompt: label.to_string(),
                input: answer,
            })
    }

    pub fn say(&mut self, line: impl Display) -> Result<(), ConfigError> {
        writeln!(self.output, "{line}").map_err(ConfigError::terminal)
    }
}
