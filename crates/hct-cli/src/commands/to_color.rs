//! HCT to hex color.

use crate::ToColorArgs;
use anyhow::{Context, Result};
use hct::Hct;
use tracing::{debug, trace};

use super::{ColorReport, print_json};

pub fn run(args: ToColorArgs, verbose: u8) -> Result<()> {
    trace!(hue = args.hue, chroma = args.chroma, tone = args.tone, "to_color::run");
    let hct = Hct::new(args.hue, args.chroma, args.tone).context("Invalid HCT")?;
    let report = ColorReport::resolved(&hct);
    debug!(requested = %hct, hex = %report.hex, "resolved");

    if args.json {
        return print_json(&report);
    }

    println!("{}", report.line());
    if verbose > 0 && report.chroma + 0.5 < args.chroma {
        println!("  chroma {:.3} is out of gamut, clamped", args.chroma);
    }
    Ok(())
}
