//! Batch conversion of a color list.

use crate::BatchArgs;
use anyhow::{Context, Result, bail};
use hct::Hct;
use rayon::prelude::*;
use tracing::{info, trace};

use super::{ColorReport, parse_color, print_json};

pub fn run(args: BatchArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), "batch::run");
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read: {}", args.input.display()))?;

    let results = convert_lines(&text);
    info!(colors = results.len(), "Batch conversion complete");

    let mut reports = Vec::with_capacity(results.len());
    let mut failed = 0;
    for (line, result) in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                failed += 1;
                eprintln!("Line {}: {:#}", line, e);
            }
        }
    }

    if args.json {
        print_json(&reports)?;
    } else {
        for report in &reports {
            println!("{}", report.line());
        }
    }
    if verbose > 0 {
        println!("Converted: {} success, {} failed", reports.len(), failed);
    }

    if failed > 0 {
        bail!("{} colors failed", failed);
    }
    Ok(())
}

/// Converts every non-blank line, in parallel, keeping input order.
///
/// Each result carries its 1-based line number.
pub fn convert_lines(text: &str) -> Vec<(usize, Result<ColorReport>)> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    lines
        .par_iter()
        .map(|&(number, line)| {
            let report = parse_color(line).map(|argb| ColorReport::exact(&Hct::from_argb(argb)));
            (number, report)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_lines_keeps_order() {
        let text = "#ff0000\n\n  #00ff00  \nnot-a-color\n0000ff\n";
        let results = convert_lines(text);
        let numbers: Vec<usize> = results.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, vec![1, 3, 4, 5]);

        let hexes: Vec<String> = results
            .iter()
            .filter_map(|(_, r)| r.as_ref().ok().map(|report| report.hex.clone()))
            .collect();
        assert_eq!(hexes, vec!["#ff0000", "#00ff00", "#0000ff"]);
        assert!(results[2].1.is_err());
    }

    #[test]
    fn test_run_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.txt");
        std::fs::write(&path, "#123456\nnope\n").unwrap();
        let args = BatchArgs {
            input: path,
            json: false,
        };
        assert!(run(args, 0).is_err());
    }

    #[test]
    fn test_run_missing_file() {
        let args = BatchArgs {
            input: "/nonexistent/colors.txt".into(),
            json: false,
        };
        assert!(run(args, 0).is_err());
    }
}
