//! Command-line surface, parsed with clap.

use clap::Parser;
use std::path::PathBuf;

/// Lê nome e idade no console, calcula valores derivados e grava um
/// relatório em texto.
#[derive(Parser, Debug)]
#[command(name = "relatorio", version, about)]
pub struct Cli {
    /// Caminho do arquivo de relatório
    #[arg(
        short = 'o',
        long = "output",
        value_name = "ARQUIVO",
        default_value = "relatorio.txt"
    )]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_to_relatorio_txt() {
        let cli = Cli::parse_from(["relatorio"]);
        assert_eq!(cli.output, PathBuf::from("relatorio.txt"));
    }

    #[test]
    fn output_can_be_overridden() {
        let cli = Cli::parse_from(["relatorio", "-o", "saida/r.txt"]);
        assert_eq!(cli.output, PathBuf::from("saida/r.txt"));
    }
}
