use crate::lang::{Error, LineNumber, Result};
use crate::prog::Listing;
use ansi_term::Style;
use clap::Parser;
use std::path::{Path, PathBuf};

const UTF8_BOM: &str = "\u{feff}";

#[derive(Parser)]
#[command(name = "renum")]
#[command(version)]
#[command(about = "Renumber BASIC program lines")]
struct Cli {
    /// The input file
    #[arg(short = 'i', value_name = "FILE")]
    input: PathBuf,

    /// The output file
    #[arg(short = 'o', value_name = "FILE", default_value = "output.bas")]
    output: PathBuf,

    /// The starting line number
    #[arg(long, value_name = "LINE_NUMBER", default_value_t = 10)]
    start: LineNumber,

    /// Lines numbered below this keep their numbers
    #[arg(
        long,
        value_name = "LINE_NUMBER",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    old_start: Option<LineNumber>,

    /// The step between line numbers
    #[arg(
        long,
        value_name = "LINE_NUMBER",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    step: LineNumber,

    /// Keep going past missing line numbers and unresolvable references
    #[arg(long)]
    force: bool,
}

pub fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!(
            "{}",
            Style::new().bold().paint(format!("renum: error: {}", error))
        );
        std::process::exit(1);
    }
}

/// Loads the program, sorts it by line number, then either numbers it
/// for the first time or renumbers it, depending on whether the first
/// sorted line already has a number.
fn run(cli: &Cli) -> Result<()> {
    let (text, bom) = load(&cli.input)?;
    let mut listing = Listing::new(&text);
    listing.sort();
    match listing.first_number() {
        None => listing.add_line_numbers(cli.start, cli.step)?,
        Some(_) => listing.renumber(
            cli.start,
            cli.old_start.unwrap_or(0),
            cli.step,
            cli.force,
        )?,
    }
    save(&cli.output, &listing.to_string(), bom)
}

fn load(path: &Path) -> Result<(String, bool)> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Load {
        path: path.display().to_string(),
        source,
    })?;
    match text.strip_prefix(UTF8_BOM) {
        Some(rest) => Ok((rest.to_string(), true)),
        None => Ok((text, false)),
    }
}

fn save(path: &Path, text: &str, bom: bool) -> Result<()> {
    let mut data = String::with_capacity(UTF8_BOM.len() + text.len());
    if bom {
        data.push_str(UTF8_BOM);
    }
    data.push_str(text);
    std::fs::write(path, data).map_err(|source| Error::Save {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["renum", "-i", "in.bas"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.bas"));
        assert_eq!(cli.output, PathBuf::from("output.bas"));
        assert_eq!(cli.start, 10);
        assert_eq!(cli.old_start, None);
        assert_eq!(cli.step, 10);
        assert!(!cli.force);
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["renum"]).is_err());
    }

    #[test]
    fn test_zero_step_rejected() {
        assert!(Cli::try_parse_from(["renum", "-i", "in.bas", "--step", "0"]).is_err());
    }

    #[test]
    fn test_zero_old_start_rejected() {
        assert!(Cli::try_parse_from(["renum", "-i", "in.bas", "--old-start", "0"]).is_err());
        let cli = Cli::try_parse_from(["renum", "-i", "in.bas", "--old-start", "100"]).unwrap();
        assert_eq!(cli.old_start, Some(100));
    }

    #[test]
    fn test_load_save_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.bas");
        std::fs::write(&path, "\u{feff}10 PRINT\n").unwrap();
        let (text, bom) = load(&path).unwrap();
        assert!(bom);
        assert_eq!(text, "10 PRINT\n");
        let out = dir.path().join("out.bas");
        save(&out, &text, bom).unwrap();
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "\u{feff}10 PRINT\n"
        );
    }

    #[test]
    fn test_load_without_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.bas");
        std::fs::write(&path, "10 PRINT\n").unwrap();
        let (text, bom) = load(&path).unwrap();
        assert!(!bom);
        assert_eq!(text, "10 PRINT\n");
    }

    #[test]
    fn test_load_missing_file() {
        let error = load(Path::new("no-such-file.bas")).unwrap_err();
        assert!(matches!(error, Error::Load { .. }));
    }

    #[test]
    fn test_run_renumbers() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bas");
        let output = dir.path().join("out.bas");
        std::fs::write(&input, "20 GOTO 10\n10 PRINT\n").unwrap();
        let cli = Cli {
            input,
            output: output.clone(),
            start: 100,
            old_start: None,
            step: 10,
            force: false,
        };
        run(&cli).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "100 PRINT\n110 GOTO 100\n"
        );
    }

    #[test]
    fn test_run_adds_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bas");
        let output = dir.path().join("out.bas");
        std::fs::write(&input, "PRINT 1\n\nPRINT 2\n").unwrap();
        let cli = Cli {
            input,
            output: output.clone(),
            start: 10,
            old_start: None,
            step: 10,
            force: false,
        };
        run(&cli).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "10 PRINT 1\n20 '\n30 PRINT 2\n"
        );
    }

    #[test]
    fn test_run_keeps_bom() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bas");
        let output = dir.path().join("out.bas");
        std::fs::write(&input, "\u{feff}10 END\n").unwrap();
        let cli = Cli {
            input,
            output: output.clone(),
            start: 100,
            old_start: None,
            step: 10,
            force: false,
        };
        run(&cli).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "\u{feff}100 END\n"
        );
    }
}
