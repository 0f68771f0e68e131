//! Interactive console input with validation and re-prompt loops.
//!
//! Both readers are generic over [`BufRead`]/[`Write`] so tests can script
//! the console with an in-memory cursor. Retry messages go to the same
//! output stream as the prompts; only genuine I/O failures (including the
//! input stream running dry) surface as errors.

use std::io::{self, BufRead, ErrorKind, Write};

use crate::error::AppResult;
use crate::person::MAX_AGE;

const EMPTY_RETRY: &str = "O valor não pode ser vazio. Tente novamente.";
const NOT_A_NUMBER_RETRY: &str = "Valor inválido. Digite um número inteiro.";

/// Shows `prompt` (flushed, no trailing newline) and reads one raw line.
fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> AppResult<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // The interactive loop is unbounded, but a scripted run that
        // exhausts its input must fail instead of spinning.
        return Err(io::Error::new(
            ErrorKind::UnexpectedEof,
            "entrada encerrada antes de um valor válido",
        )
        .into());
    }
    Ok(line)
}

/// Reads a non-empty line of text, re-prompting until one is entered.
///
/// The returned value is trimmed of surrounding whitespace.
pub fn read_required_text<R, W>(input: &mut R, output: &mut W, prompt: &str) -> AppResult<String>
where
    R: BufRead,
    W: Write,
{
    loop {
        let line = prompt_line(input, output, prompt)?;
        let value = line.trim();
        if value.is_empty() {
            writeln!(output, "{EMPTY_RETRY}")?;
            continue;
        }
        return Ok(value.to_string());
    }
}

/// Reads an age between 0 and [`MAX_AGE`], re-prompting on bad input.
///
/// Malformed numbers and out-of-range values get distinct retry messages.
/// `str::parse` accepts only ASCII digits with an optional sign, so the
/// format does not vary with the running locale.
pub fn read_age<R, W>(input: &mut R, output: &mut W, prompt: &str) -> AppResult<u8>
where
    R: BufRead,
    W: Write,
{
    loop {
        let line = prompt_line(input, output, prompt)?;
        let parsed: i64 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(output, "{NOT_A_NUMBER_RETRY}")?;
                continue;
            }
        };
        if !(0..=i64::from(MAX_AGE)).contains(&parsed) {
            writeln!(
                output,
                "Idade fora do intervalo (0 a {MAX_AGE}). Tente novamente."
            )?;
            continue;
        }
        return Ok(parsed as u8);
    }
}
