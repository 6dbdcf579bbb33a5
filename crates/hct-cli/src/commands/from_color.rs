//! Hex color to HCT.

use crate::FromColorArgs;
use anyhow::Result;
use hct::Hct;
use hct_cam16::Cam16;
use serde::Serialize;
use tracing::{debug, trace};

use super::{ColorReport, parse_color, print_json};

#[derive(Serialize)]
struct FromColorOutput {
    #[serde(flatten)]
    color: ColorReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    cam16: Option<Cam16>,
}

pub fn run(args: FromColorArgs, verbose: u8) -> Result<()> {
    trace!(color = %args.color, "from_color::run");
    let argb = parse_color(&args.color)?;
    let hct = Hct::from_argb(argb);
    debug!(argb, %hct, "converted");

    let output = FromColorOutput {
        color: ColorReport::exact(&hct),
        cam16: args.cam.then(|| Cam16::from_argb(argb)),
    };

    if args.json {
        return print_json(&output);
    }

    println!("{}", output.color.line());
    if let Some(cam) = &output.cam16 {
        println!("  J  {:9.4}   Q  {:9.4}", cam.j(), cam.q());
        println!("  C  {:9.4}   M  {:9.4}   s  {:9.4}", cam.chroma(), cam.m(), cam.s());
        println!("  h  {:9.4}", cam.hue());
        println!("  J* {:9.4}   a* {:9.4}   b* {:9.4}", cam.jstar(), cam.astar(), cam.bstar());
    }
    if verbose > 0 && argb >> 24 != 0xFF {
        println!("  (alpha {:02x} ignored)", argb >> 24);
    }
    Ok(())
}
