//! Parallel sweeps over the sRGB cube and the HCT grid.

use hct::{Hct, max_chroma_argb, solve};
use hct_cam16::Cam16;
use hct_math::difference_degrees;
use hct_transfer::{argb_from_rgb, lstar_from_argb};
use rayon::prelude::*;

/// Every 15th code per channel: 18^3 colors including all cube corners.
fn cube_colors() -> Vec<u32> {
    let codes: Vec<u8> = (0..=255u8).step_by(15).collect();
    let mut colors = Vec::with_capacity(codes.len().pow(3));
    for &r in &codes {
        for &g in &codes {
            for &b in &codes {
                colors.push(argb_from_rgb(r, g, b));
            }
        }
    }
    colors
}

#[test]
fn test_solver_reproduces_cube() {
    let failures: Vec<(u32, u32)> = cube_colors()
        .par_iter()
        .filter_map(|&argb| {
            let hct = Hct::from_argb(argb);
            let solved = solve(hct.hue(), hct.chroma(), hct.tone());
            (solved != argb).then_some((argb, solved))
        })
        .collect();
    assert!(failures.is_empty(), "{} mismatches, first {:08X?}", failures.len(), failures.first());
}

#[test]
fn test_ucs_roundtrip_cube() {
    cube_colors().par_iter().for_each(|&argb| {
        let cam = Cam16::from_argb(argb);
        let back = Cam16::from_ucs(cam.jstar(), cam.astar(), cam.bstar());
        assert!((back.j() - cam.j()).abs() < 1e-8, "{:08X}", argb);
        assert!((back.chroma() - cam.chroma()).abs() < 1e-8, "{:08X}", argb);
        assert_eq!(back.to_argb(), argb, "{:08X}", argb);
    });
}

/// (hue, tone) grid shared by the in-gamut sweeps.
fn hue_tone_grid(tones: impl Iterator<Item = u32> + Clone) -> Vec<(f64, f64)> {
    (0..360)
        .step_by(7)
        .flat_map(|hue| tones.clone().map(move |tone| (hue as f64, tone as f64)))
        .collect()
}

#[test]
fn test_in_gamut_hue_fidelity() {
    let worst = hue_tone_grid((10..=90).step_by(5))
        .par_iter()
        .flat_map_iter(|&(hue, tone)| {
            let boundary_chroma = Hct::from_argb(max_chroma_argb(hue, tone)).chroma();
            [0.5, 0.75, 0.95]
                .into_iter()
                .map(move |k| boundary_chroma * k)
                .filter(|&chroma| chroma >= 40.0)
                .map(move |chroma| {
                    let result = Hct::from_argb(solve(hue, chroma, tone));
                    difference_degrees(result.hue(), hue)
                })
        })
        .reduce(|| 0.0, f64::max);
    assert!(worst < 1.0, "worst hue error {}", worst);
}

#[test]
fn test_in_gamut_chroma_fidelity() {
    let worst = hue_tone_grid((20..=80).step_by(5))
        .par_iter()
        .flat_map_iter(|&(hue, tone)| {
            let boundary_chroma = Hct::from_argb(max_chroma_argb(hue, tone)).chroma();
            [0.5, 0.9]
                .into_iter()
                .map(move |k| boundary_chroma * k)
                .filter(|&chroma| chroma >= 10.0)
                .map(move |chroma| {
                    let result = Hct::from_argb(solve(hue, chroma, tone));
                    (result.chroma() - chroma).abs()
                })
        })
        .reduce(|| 0.0, f64::max);
    assert!(worst < 1.0, "worst chroma error {}", worst);
}

#[test]
fn test_tone_fidelity_dense() {
    let worst = hue_tone_grid((1..100).step_by(3))
        .par_iter()
        .flat_map_iter(|&(hue, tone)| {
            [5.0, 30.0, 80.0, 150.0]
                .into_iter()
                .map(move |chroma| (lstar_from_argb(solve(hue, chroma, tone)) - tone).abs())
        })
        .reduce(|| 0.0, f64::max);
    assert!(worst < 0.5, "worst tone error {}", worst);
}
