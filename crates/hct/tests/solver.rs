//! Solver fidelity over coarse grids of hue, chroma and tone.

use hct::{Hct, max_chroma_argb, solve};
use hct_math::difference_degrees;
use hct_transfer::{BLACK, WHITE, lstar_from_argb};

#[test]
fn test_grid_fidelity() {
    for hue in (15..=360).step_by(30) {
        for chroma in (0..=100).step_by(10) {
            for tone in (20..=80).step_by(10) {
                let (hue, chroma, tone) = (hue as f64, chroma as f64, tone as f64);
                let result = Hct::from_argb(solve(hue, chroma, tone));
                if chroma > 0.0 {
                    assert!(
                        difference_degrees(result.hue(), hue) <= 4.0,
                        "hue {} for request ({}, {}, {})",
                        result.hue(),
                        hue,
                        chroma,
                        tone
                    );
                }
                assert!(result.chroma() <= chroma + 2.5, "chroma {} for {}", result.chroma(), chroma);
                assert!((result.tone() - tone).abs() <= 0.5, "tone {} for {}", result.tone(), tone);
            }
        }
    }
}

#[test]
fn test_tone_fidelity() {
    for hue in (0..360).step_by(7) {
        for tone in (1..100).step_by(3) {
            for chroma in [5.0, 30.0, 80.0, 150.0] {
                let argb = solve(hue as f64, chroma, tone as f64);
                let error = (lstar_from_argb(argb) - tone as f64).abs();
                assert!(error < 0.5, "tone error {} at ({}, {}, {})", error, hue, chroma, tone);
            }
        }
    }
}

#[test]
fn test_chroma_clamps_to_boundary() {
    for hue in (0..360).step_by(11) {
        for tone in (5..=95).step_by(5) {
            let (hue, tone) = (hue as f64, tone as f64);
            let clamped = solve(hue, 200.0, tone);
            assert_eq!(clamped, solve(hue, 400.0, tone));
            assert_eq!(clamped, max_chroma_argb(hue, tone));

            let again = Hct::from_argb(clamped);
            assert_eq!(solve(again.hue(), again.chroma(), again.tone()), clamped);
        }
    }
}

#[test]
fn test_extremes() {
    for hue in [0.0, 90.0, 180.0, 270.0, 360.0] {
        for chroma in [0.0, 50.0, 150.0] {
            assert_eq!(solve(hue, chroma, 0.0), BLACK);
            assert_eq!(solve(hue, chroma, 100.0), WHITE);
        }
    }
}

#[test]
fn test_reference_blue() {
    assert_eq!(solve(282.788, 200.0, 32.302), 0xFF00_00FF);
    assert_eq!(Hct::new(282.788, 200.0, 32.302).unwrap().to_argb(), 0xFF00_00FF);
}

#[test]
fn test_concurrent_first_resolution() {
    let hct = Hct::new(150.0, 45.0, 55.0).unwrap();
    let expected = solve(150.0, 45.0, 55.0);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| hct.to_argb())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
    assert_eq!(hct.to_argb(), expected);
}
