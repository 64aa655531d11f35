//! Line-oriented prompts for the interactive shell
//!
//! Every prompt returns `Ok(None)` once input is exhausted so the shell can
//! stop cleanly on EOF.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::warn;

use crate::error::TallyResult;
use crate::models::Money;

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of text followed by a newline
    pub fn say(&mut self, text: &str) -> TallyResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prompt for a trimmed line; `None` on EOF
    pub fn prompt_string(&mut self, prompt: &str) -> TallyResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until a non-blank answer is given
    pub fn prompt_required(&mut self, prompt: &str, field: &str) -> TallyResult<Option<String>> {
        loop {
            match self.prompt_string(prompt)? {
                None => return Ok(None),
                Some(answer) if answer.is_empty() => {
                    warn!(field, "blank input rejected");
                    self.say(&format!("{} cannot be empty.", capitalize(field)))?;
                }
                Some(answer) => return Ok(Some(answer)),
            }
        }
    }

    /// Prompt until a positive amount is given
    pub fn prompt_amount(&mut self, prompt: &str) -> TallyResult<Option<Money>> {
        loop {
            let Some(answer) = self.prompt_string(prompt)? else {
                return Ok(None);
            };
            match Money::parse(&answer) {
                Ok(amount) if amount.is_positive() => return Ok(Some(amount)),
                Ok(_) => {
                    warn!(input = %answer, "non-positive amount rejected");
                    self.say("Amount must be greater than zero.")?;
                }
                Err(e) => {
                    warn!(input = %answer, "unparsable amount rejected");
                    self.say(&format!("{}.", e))?;
                }
            }
        }
    }

    /// Prompt for a date in `format`; a blank answer means `today`
    pub fn prompt_date(
        &mut self,
        prompt: &str,
        format: &str,
        today: NaiveDate,
    ) -> TallyResult<Option<NaiveDate>> {
        loop {
            let Some(answer) = self.prompt_string(prompt)? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(today));
            }
            match NaiveDate::parse_from_str(&answer, format) {
                Ok(date) => return Ok(Some(date)),
                Err(_) => {
                    warn!(input = %answer, "unparsable date rejected");
                    self.say(&format!(
                        "Invalid date. Use the format {} or leave blank for today.",
                        format
                    ))?;
                }
            }
        }
    }

    /// Prompt for a menu number in `0..=max`
    pub fn prompt_choice(&mut self, prompt: &str, max: u32) -> TallyResult<Option<u32>> {
        loop {
            let Some(answer) = self.prompt_string(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<u32>() {
                Ok(n) if n <= max => return Ok(Some(n)),
                _ => {
                    warn!(input = %answer, "invalid menu choice");
                    self.say(&format!("Please enter a number from 0 to {}.", max))?;
                }
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(p: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output.clone()).unwrap()
    }

    #[test]
    fn test_prompt_string_trims() {
        let mut p = prompter("  hello  \n");
        assert_eq!(p.prompt_string("> ").unwrap(), Some("hello".to_string()));
        assert_eq!(p.prompt_string("> ").unwrap(), None);
    }

    #[test]
    fn test_required_reprompts_on_blank() {
        let mut p = prompter("\n   \nRent\n");
        assert_eq!(
            p.prompt_required("Description: ", "description").unwrap(),
            Some("Rent".to_string())
        );
        assert_eq!(written(&p).matches("Description cannot be empty.").count(), 2);
    }

    #[test]
    fn test_amount_reprompts_until_positive() {
        let mut p = prompter("abc\n0\n-5\n12.345\n12.34\n");
        assert_eq!(
            p.prompt_amount("Amount: ").unwrap(),
            Some(Money::from_cents(1234))
        );
        let out = written(&p);
        assert_eq!(out.matches("Amount must be greater than zero.").count(), 2);
        assert!(out.contains("Invalid money format: abc"));
        assert!(out.contains("more than two decimal places"));
    }

    #[test]
    fn test_blank_date_is_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut p = prompter("\n");
        assert_eq!(p.prompt_date("Date: ", "%Y-%m-%d", today).unwrap(), Some(today));
    }

    #[test]
    fn test_date_reprompts_on_garbage() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut p = prompter("yesterday\n2024-02-30\n2024-02-29\n");
        assert_eq!(
            p.prompt_date("Date: ", "%Y-%m-%d", today).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(written(&p).matches("Invalid date.").count(), 2);
    }

    #[test]
    fn test_choice_bounds() {
        let mut p = prompter("11\nx\n3\n");
        assert_eq!(p.prompt_choice("> ", 10).unwrap(), Some(3));
    }

    #[test]
    fn test_eof_mid_prompt() {
        let mut p = prompter("abc\n");
        assert_eq!(p.prompt_amount("Amount: ").unwrap(), None);
    }
}
