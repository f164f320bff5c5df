//! Step collection
//!
//! Two styles are supported:
//!
//! - **Interactive**: prompts for yaw, pitch, roll and length in turn.
//!   After the length, the rest of that line is dropped and one more line
//!   is awaited: any line starts another step, end of input finishes.
//! - **Batch**: one `yaw pitch roll length` record per line, separated by
//!   whitespace and/or commas. Blank lines and `#` comments are skipped.
//!
//! Every value must parse as a finite number; the core does not check.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use log::{debug, info};
use posefold_core::Step;

use crate::config::InputMode;
use crate::error::{Field, InputError};

/// Shown after each interactive step
pub const CONTINUE_PROMPT: &str =
    "Press enter to enter another element or press CTRL-D to end the input.";

/// Collect steps in the configured style
///
/// Prompts (interactive mode only) are written to `prompt`.
pub fn collect_steps<R: BufRead, W: Write>(
    mode: InputMode,
    reader: R,
    prompt: &mut W,
) -> Result<Vec<Step>, InputError> {
    let steps = match mode {
        InputMode::Interactive => read_interactive(reader, prompt)?,
        InputMode::Batch => read_batch(reader)?,
    };
    info!("Collected {} step(s) in {:?} mode", steps.len(), mode);
    Ok(steps)
}

/// Whitespace-separated tokens with line tracking
struct Tokens<R> {
    reader: R,
    line: usize,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            pending: VecDeque::new(),
        }
    }

    /// Read one raw line; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, InputError> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(buf))
    }

    fn next_token(&mut self) -> Result<Option<String>, InputError> {
        while self.pending.is_empty() {
            match self.read_line()? {
                Some(line) => self.pending.extend(line.split_whitespace().map(str::to_owned)),
                None => return Ok(None),
            }
        }
        Ok(self.pending.pop_front())
    }

    fn discard_rest_of_line(&mut self) {
        self.pending.clear();
    }
}

/// Prompted, field-by-field entry
pub fn read_interactive<R: BufRead, W: Write>(
    reader: R,
    prompt: &mut W,
) -> Result<Vec<Step>, InputError> {
    let mut tokens = Tokens::new(reader);
    let mut steps = Vec::new();

    loop {
        let mut values = [0.0; 4];
        for (slot, field) in values.iter_mut().zip(Field::ALL) {
            writeln!(prompt, "\nEnter in {}:", field)?;
            prompt.flush()?;

            let token = tokens
                .next_token()?
                .ok_or(InputError::UnexpectedEof { field })?;
            *slot = parse_value(field, &token, tokens.line)?;
        }

        let step = Step::new(values[0], values[1], values[2], values[3]);
        debug!("Step {}: {:?}", steps.len() + 1, step);
        steps.push(step);

        tokens.discard_rest_of_line();
        writeln!(prompt, "\n{}", CONTINUE_PROMPT)?;
        prompt.flush()?;

        if tokens.read_line()?.is_none() {
            break;
        }
    }

    Ok(steps)
}

/// One step per line, no prompts
pub fn read_batch<R: BufRead>(reader: R) -> Result<Vec<Step>, InputError> {
    let mut steps = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(step) = parse_step_line(&line, index + 1)? {
            debug!("Step {}: {:?}", steps.len() + 1, step);
            steps.push(step);
        }
    }

    Ok(steps)
}

/// Parse one batch line; `None` for blank and comment lines
pub fn parse_step_line(line: &str, line_no: usize) -> Result<Option<Step>, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() != Field::ALL.len() {
        return Err(InputError::WrongFieldCount {
            line: line_no,
            found: tokens.len(),
        });
    }

    let mut values = [0.0; 4];
    for ((slot, field), token) in values.iter_mut().zip(Field::ALL).zip(tokens) {
        *slot = parse_value(field, token, line_no)?;
    }

    Ok(Some(Step::new(values[0], values[1], values[2], values[3])))
}

/// Parse a finite number for `field`
fn parse_value(field: Field, token: &str, line: usize) -> Result<f64, InputError> {
    let value: f64 = token.parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: token.to_string(),
        line,
    })?;

    if !value.is_finite() {
        return Err(InputError::NonFinite { field, value, line });
    }

    Ok(value)
}
