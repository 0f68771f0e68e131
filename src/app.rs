//! Orchestration of the full console workflow.
//!
//! Fixed sequence: banner, prompts, greeting, derived values, report.
//! No step here catches errors; everything propagates to `main` via `?`.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Local};
use tracing::info;

use crate::error::AppResult;
use crate::input;
use crate::person::Person;
use crate::report::{self, ReportWriter};
use crate::stats;

/// Title shown before the prompts.
const BANNER: &str = "Gerador de Relatório";

/// Grades averaged into the report. Fixed in this version, not user input.
pub const GRADES: [f64; 4] = [8.5, 7.0, 9.0, 6.5];

const MAX_UNDERLINE: usize = 60;

/// Prints `text` followed by a dashed underline.
///
/// Skipped entirely when `text` is blank. The underline is clipped to the
/// text's length and never exceeds 60 characters.
fn print_banner<W: Write>(output: &mut W, text: &str) -> AppResult<()> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(());
    }
    writeln!(output, "{text}")?;
    writeln!(output, "{}", "-".repeat(text.chars().count().min(MAX_UNDERLINE)))?;
    Ok(())
}

/// Writes the report and releases the writer before returning.
fn save_report(
    report_path: &Path,
    person: &Person,
    average: f64,
    now: DateTime<Local>,
) -> AppResult<PathBuf> {
    let mut writer = ReportWriter::create(report_path)?;
    report::write_report(&mut writer, person, average, now)?;
    Ok(writer.path().to_path_buf())
}

/// Runs the whole workflow against the given console streams.
///
/// Generic over [`BufRead`]/[`Write`] so end-to-end tests can script the
/// interaction; `main` passes the locked stdin/stdout and `Local::now()`.
pub fn run<R, W>(
    input: &mut R,
    output: &mut W,
    report_path: &Path,
    now: DateTime<Local>,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    print_banner(output, BANNER)?;

    let name = input::read_required_text(input, output, "Informe o nome: ")?;
    let age = input::read_age(input, output, "Informe a idade: ")?;
    let person = Person::new(name, age)?;

    writeln!(output, "Olá, {}!", person.name())?;

    let birth_year = stats::estimate_birth_year(&person, now.year())?;
    writeln!(output, "Ano de nascimento estimado: {birth_year}")?;

    let average = stats::compute_average(&GRADES)?;
    writeln!(output, "Média das notas: {average:.2}")?;

    let saved_at = save_report(report_path, &person, average, now)?;
    writeln!(output, "Relatório salvo em: {}", saved_at.display())?;
    info!("relatório gravado em {}", saved_at.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn shown(output: Vec<u8>) -> String {
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn banner_is_skipped_when_blank() {
        let mut output = Vec::new();
        print_banner(&mut output, "   ").unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn banner_underline_is_clipped_to_text_length() {
        let mut output = Vec::new();
        print_banner(&mut output, "Oi").unwrap();
        assert_eq!(shown(output), "Oi\n--\n");
    }

    #[test]
    fn banner_underline_caps_at_sixty_characters() {
        let long = "x".repeat(80);
        let mut output = Vec::new();
        print_banner(&mut output, &long).unwrap();
        assert_eq!(shown(output), format!("{long}\n{}\n", "-".repeat(60)));
    }

    #[test]
    fn full_run_with_scripted_console() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("saida").join("relatorio.txt");
        let now = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let mut input = Cursor::new("Ana\n30\n");
        let mut output = Vec::new();
        run(&mut input, &mut output, &path, now).unwrap();

        let text = shown(output);
        assert!(text.contains("Olá, Ana!"));
        assert!(text.contains("Ano de nascimento estimado: 1994"));
        assert!(text.contains("Média das notas: 7.75"));

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Relatório gerado em 2024-05-01 12:00:00");
        assert_eq!(lines[1], "Pessoa: Ana (30 anos)");
        assert_eq!(lines[2], "Média das notas: 7.75");
    }

    #[test]
    fn full_run_retries_before_accepting_input() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("relatorio.txt");
        let now = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let mut input = Cursor::new("   \nBruno\nabc\n200\n45\n");
        let mut output = Vec::new();
        run(&mut input, &mut output, &path, now).unwrap();

        let text = shown(output);
        assert_eq!(text.matches("O valor não pode ser vazio").count(), 1);
        assert_eq!(text.matches("Valor inválido").count(), 1);
        assert_eq!(text.matches("Idade fora do intervalo").count(), 1);
        assert!(text.contains("Olá, Bruno!"));
        assert!(text.contains("Ano de nascimento estimado: 1979"));
    }
}
