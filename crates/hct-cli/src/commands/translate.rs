//! Viewing-conditions translation.

use crate::TranslateArgs;
use anyhow::Result;
use hct::Hct;
use serde::Serialize;
use tracing::{debug, trace};

use super::{ColorReport, parse_color, print_json, viewing_conditions};

#[derive(Serialize)]
struct TranslateOutput {
    source: ColorReport,
    translated: ColorReport,
}

pub fn run(args: TranslateArgs, verbose: u8) -> Result<()> {
    trace!(color = %args.color, "translate::run");
    let vc = viewing_conditions(&args.conditions)?;
    if verbose > 0 {
        println!(
            "Viewing conditions: L_A {:.3}, background L* {:.1}, {} surround{}",
            vc.adapting_luminance(),
            vc.background_lstar(),
            vc.surround(),
            if vc.discount_illuminant() { ", discounted" } else { "" }
        );
    }

    let source = Hct::from_argb(parse_color(&args.color)?);
    let translated = source.in_viewing_conditions(&vc);
    debug!(%source, %translated, "translated");

    let output = TranslateOutput {
        source: ColorReport::exact(&source),
        translated: ColorReport::exact(&translated),
    };
    if args.json {
        return print_json(&output);
    }
    println!("{}", output.source.line());
    println!("{}", output.translated.line());
    Ok(())
}
