//! Golden reference tests.
//!
//! `tests/golden/hct_reference.json` holds CAM16 attributes of a set of
//! colors, solver outputs for a grid of HCT requests, and translations
//! into non-standard viewing conditions. Solver cases exclude requests
//! whose output channels sit within 0.01 of an 8-bit rounding boundary.

use std::path::Path;

use approx::assert_abs_diff_eq;
use hct::{Hct, solve};
use hct_cam16::{Cam16, ViewingConditionsConfig};
use hct_transfer::{argb_from_hex, hex_from_argb};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    version: String,
    cam16: Vec<CamEntry>,
    solver: Vec<SolverEntry>,
    translation: Vec<TranslationSet>,
}

#[derive(Debug, Deserialize)]
struct CamEntry {
    hex: String,
    hue: f64,
    chroma: f64,
    j: f64,
    q: f64,
    m: f64,
    s: f64,
    tone: f64,
}

#[derive(Debug, Deserialize)]
struct SolverEntry {
    hue: f64,
    chroma: f64,
    tone: f64,
    hex: String,
}

#[derive(Debug, Deserialize)]
struct TranslationSet {
    name: String,
    conditions: ViewingConditionsConfig,
    colors: Vec<TranslationEntry>,
}

#[derive(Debug, Deserialize)]
struct TranslationEntry {
    hex: String,
    hue: f64,
    chroma: f64,
    tone: f64,
}

fn load_golden() -> GoldenData {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../tests/golden/hct_reference.json");
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    serde_json::from_str(&content).expect("golden data should parse")
}

fn color(hex: &str) -> u32 {
    argb_from_hex(hex).expect("golden hex should parse")
}

#[test]
fn test_cam16_attributes() {
    let golden = load_golden();
    assert!(!golden.cam16.is_empty());
    for entry in &golden.cam16 {
        let argb = color(&entry.hex);
        let cam = Cam16::from_argb(argb);
        assert_abs_diff_eq!(cam.hue(), entry.hue, epsilon = 1e-6);
        assert_abs_diff_eq!(cam.chroma(), entry.chroma, epsilon = 1e-6);
        assert_abs_diff_eq!(cam.j(), entry.j, epsilon = 1e-6);
        assert_abs_diff_eq!(cam.q(), entry.q, epsilon = 1e-6);
        assert_abs_diff_eq!(cam.m(), entry.m, epsilon = 1e-6);
        assert_abs_diff_eq!(cam.s(), entry.s, epsilon = 1e-6);

        let hct = Hct::from_argb(argb);
        assert_abs_diff_eq!(hct.tone(), entry.tone, epsilon = 1e-6);
        assert_eq!(hct.to_argb(), argb);
    }
}

#[test]
fn test_solver_outputs() {
    let golden = load_golden();
    assert!(!golden.solver.is_empty());
    for entry in &golden.solver {
        let argb = solve(entry.hue, entry.chroma, entry.tone);
        assert_eq!(
            hex_from_argb(argb),
            entry.hex,
            "solve({}, {}, {})",
            entry.hue,
            entry.chroma,
            entry.tone
        );
    }
}

#[test]
fn test_translations() {
    let golden = load_golden();
    for set in &golden.translation {
        let vc = set.conditions.build().expect("golden conditions are valid");
        for entry in &set.colors {
            let translated = Hct::from_argb(color(&entry.hex)).in_viewing_conditions(&vc);
            let context = format!("{} {}", set.name, entry.hex);
            assert!((translated.hue() - entry.hue).abs() < 1e-4, "{} hue", context);
            assert!((translated.chroma() - entry.chroma).abs() < 1e-4, "{} chroma", context);
            assert!((translated.tone() - entry.tone).abs() < 1e-4, "{} tone", context);
        }
    }
}
