//! Line-oriented prompting over any reader and writer

use std::io::{BufRead, Write};

use common::error::{Error, Result};
use tracing::debug;

/// Asks questions on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a new prompter
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output stream
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print a line
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `prompt` as is and read one trimmed line
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Input("input closed".to_string()));
        }
        Ok(line.trim().to_string())
    }

    /// Ask a question; a blank answer takes the default when there is one
    pub fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let question = match default {
            Some(default) => format!("{} [{}]: ", prompt, default),
            None => format!("{}: ", prompt),
        };

        let answer = self.read_line(&question)?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    /// Ask until `interpret` accepts the answer. Recoverable errors are
    /// reported and the question repeated; anything else is returned.
    pub fn ask_until<T, F>(&mut self, prompt: &str, default: Option<&str>, interpret: F) -> Result<T>
    where
        F: Fn(&str) -> Result<T>,
    {
        loop {
            let answer = self.ask(prompt, default)?;
            match interpret(&answer) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    debug!("Re-prompting after: {}", e);
                    self.say(&format!("{}. Please try again.", e))?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.output).unwrap()
    }

    #[test]
    fn test_ask_with_default() {
        let mut p = prompter("\n 42 \n");
        assert_eq!(p.ask("Amount", Some("100")).unwrap(), "100");
        assert_eq!(p.ask("Amount", Some("100")).unwrap(), "42");
        assert_eq!(written(p), "Amount [100]: Amount [100]: ");
    }

    #[test]
    fn test_ask_without_default() {
        let mut p = prompter("\n");
        assert_eq!(p.ask("Targets", None).unwrap(), "");
    }

    #[test]
    fn test_closed_input() {
        let mut p = prompter("");
        assert!(matches!(p.ask("Amount", None), Err(Error::Input(_))));
    }

    #[test]
    fn test_ask_until_retries_parse_errors() {
        let mut p = prompter("lots\n22.3kk\n22.3k\n");
        let value = p.ask_until("Amount", None, magnitude::parse_magnitude).unwrap();
        assert_eq!(value, 22_300.0);

        let out = written(p);
        assert!(out.contains("Could not parse money/supply value: 'lots'. Please try again."));
        assert!(out.contains("'22.3kk'"));
    }

    #[test]
    fn test_ask_until_stops_on_other_errors() {
        let mut p = prompter("x\n");
        let result: Result<f64> = p.ask_until("Amount", None, |_| Err(Error::InvalidSupply(0.0)));
        assert!(matches!(result, Err(Error::InvalidSupply(_))));
    }

    #[test]
    fn test_ask_until_gives_up_when_input_ends() {
        let mut p = prompter("nope\n");
        let result = p.ask_until("Amount", None, magnitude::parse_magnitude);
        assert!(matches!(result, Err(Error::Input(_))));
    }
}
