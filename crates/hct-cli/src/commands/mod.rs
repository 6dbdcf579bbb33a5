//! CLI command implementations

pub mod batch;
pub mod boundary;
pub mod from_color;
pub mod to_color;
pub mod translate;

use anyhow::{Context, Result};
use hct::Hct;
use hct_cam16::{Surround, ViewingConditions, ViewingConditionsConfig};
use hct_transfer::{argb_from_hex, hex_from_argb};
use serde::Serialize;

use crate::ConditionsArgs;

/// Parses a hex color argument.
pub fn parse_color(input: &str) -> Result<u32> {
    argb_from_hex(input).with_context(|| format!("Invalid color: {}", input))
}

/// One converted color, as printed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub hex: String,
    pub hue: f64,
    pub chroma: f64,
    pub tone: f64,
}

impl ColorReport {
    /// Report for the color `hct` resolves to, with the triple it
    /// actually has.
    pub fn resolved(hct: &Hct) -> Self {
        let argb = hct.to_argb();
        let real = hct.resolved();
        Self {
            hex: hex_from_argb(argb),
            hue: real.hue(),
            chroma: real.chroma(),
            tone: real.tone(),
        }
    }

    /// Report that keeps the triple of `hct` as is.
    pub fn exact(hct: &Hct) -> Self {
        Self {
            hex: hex_from_argb(hct.to_argb()),
            hue: hct.hue(),
            chroma: hct.chroma(),
            tone: hct.tone(),
        }
    }

    /// Single-line text form.
    pub fn line(&self) -> String {
        format!(
            "{}  H {:7.3}  C {:7.3}  T {:7.3}",
            self.hex, self.hue, self.chroma, self.tone
        )
    }
}

/// Prints a serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

/// Builds viewing conditions from a YAML file and flag overrides.
pub fn viewing_conditions(args: &ConditionsArgs) -> Result<ViewingConditions> {
    let mut config = match &args.config {
        Some(path) => ViewingConditionsConfig::from_path(path)
            .with_context(|| format!("Failed to load viewing conditions: {}", path.display()))?,
        None => ViewingConditionsConfig::default(),
    };
    if let Some(lstar) = args.background_lstar {
        config.background_lstar = lstar;
    }
    if let Some(luminance) = args.adapting_luminance {
        config.adapting_luminance = luminance;
    }
    if let Some(surround) = &args.surround {
        config.surround = surround.parse::<Surround>()?;
    }
    if args.discount_illuminant {
        config.discount_illuminant = true;
    }
    Ok(config.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions() -> ConditionsArgs {
        ConditionsArgs {
            config: None,
            background_lstar: None,
            adapting_luminance: None,
            surround: None,
            discount_illuminant: false,
        }
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#0000ff").unwrap(), 0xFF00_00FF);
        assert_eq!(parse_color("f00").unwrap(), 0xFFFF_0000);
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("zzzzzz").is_err());
    }

    #[test]
    fn test_report_line() {
        let report = ColorReport::exact(&Hct::from_argb(0xFF00_00FF));
        assert_eq!(report.hex, "#0000ff");
        assert!(report.line().starts_with("#0000ff  H 282.788  C  87.231  T  32.303"));
    }

    #[test]
    fn test_resolved_report_clamps_chroma() {
        let hct = Hct::new(120.0, 500.0, 50.0).unwrap();
        let report = ColorReport::resolved(&hct);
        assert!(report.chroma < 500.0);
        assert!((report.tone - 50.0).abs() < 0.5);
    }

    #[test]
    fn test_default_conditions() {
        let vc = viewing_conditions(&conditions()).unwrap();
        assert_eq!(&vc, ViewingConditions::standard());
    }

    #[test]
    fn test_condition_overrides() {
        let args = ConditionsArgs {
            background_lstar: Some(10.0),
            surround: Some("dark".into()),
            discount_illuminant: true,
            ..conditions()
        };
        let vc = viewing_conditions(&args).unwrap();
        assert_eq!(vc.background_lstar(), 10.0);
        assert_eq!(vc.surround(), Surround::Dark);
        assert_eq!(vc.d(), 1.0);
    }

    #[test]
    fn test_condition_errors() {
        let bad_surround = ConditionsArgs {
            surround: Some("bright".into()),
            ..conditions()
        };
        assert!(viewing_conditions(&bad_surround).is_err());

        let bad_luminance = ConditionsArgs {
            adapting_luminance: Some(-1.0),
            ..conditions()
        };
        assert!(viewing_conditions(&bad_luminance).is_err());
    }

    #[test]
    fn test_conditions_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dark.yaml");
        std::fs::write(&path, "adapting_luminance: 11.72\nsurround: dim\n").unwrap();
        let args = ConditionsArgs {
            config: Some(path),
            background_lstar: Some(20.0),
            ..conditions()
        };
        let vc = viewing_conditions(&args).unwrap();
        assert_eq!(vc.surround(), Surround::Dim);
        assert_eq!(vc.adapting_luminance(), 11.72);
        assert_eq!(vc.background_lstar(), 20.0);
    }
}
