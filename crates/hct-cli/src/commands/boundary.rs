//! Maximum-chroma color at a hue and tone.

use crate::BoundaryArgs;
use anyhow::{Result, bail};
use hct::{Hct, max_chroma_argb};
use tracing::trace;

use super::{ColorReport, print_json};

pub fn run(args: BoundaryArgs, _verbose: u8) -> Result<()> {
    trace!(hue = args.hue, tone = args.tone, "boundary::run");
    if !args.hue.is_finite() || !(0.0..=100.0).contains(&args.tone) {
        bail!("Hue must be finite and tone in [0, 100]");
    }
    let report = ColorReport::exact(&Hct::from_argb(max_chroma_argb(args.hue, args.tone)));

    if args.json {
        return print_json(&report);
    }
    println!("{}", report.line());
    Ok(())
}
