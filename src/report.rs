//! Plain-text report output.
//!
//! The writer resolves its destination to an absolute path, creates any
//! missing parent directories and flushes after every line, so an abnormal
//! exit between writes never leaves buffered data behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::person::Person;

/// Line-oriented writer over the report file.
///
/// A scoped resource: dropping it releases the file handle, on success and
/// error paths alike.
#[derive(Debug)]
pub struct ReportWriter {
    file: File,
    path: PathBuf,
}

impl ReportWriter {
    /// Opens `path` for writing, truncating any existing content.
    ///
    /// Rejects an empty or whitespace-only path. Missing parent
    /// directories are created first. `File::create` leaves the file
    /// readable by other processes while it is held open.
    pub fn create(path: &Path) -> AppResult<Self> {
        if path.to_string_lossy().trim().is_empty() {
            return Err(AppError::InvalidArgument {
                what: "o caminho do relatório não pode ser vazio".to_string(),
            });
        }

        let path = std::path::absolute(path)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        debug!("criando relatório em {}", path.display());
        let file = File::create(&path)?;
        Ok(Self { file, path })
    }

    /// Absolute path of the report file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes one line and flushes it to disk immediately.
    pub fn write_line(&mut self, line: &str) -> AppResult<()> {
        writeln!(self.file, "{line}")?;
        self.file.flush()?;
        Ok(())
    }
}

/// Writes the three report lines: timestamp header, person, grade average.
pub fn write_report(
    writer: &mut ReportWriter,
    person: &Person,
    average: f64,
    generated_at: DateTime<Local>,
) -> AppResult<()> {
    writer.write_line(&format!(
        "Relatório gerado em {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ))?;
    writer.write_line(&format!("Pessoa: {person}"))?;
    writer.write_line(&format!("Média das notas: {average:.2}"))?;
    Ok(())
}
