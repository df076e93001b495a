//! Bilateral filter regression test
//!
//! Validates the parallel bilateral filter against the sequential
//! reference, and checks its limiting behavior: constant images are fixed
//! points, a vanishing range sigma gives the identity, and an unbounded
//! range sigma gives a plain spatial Gaussian blur.

use lumen_core::{Channels, FPix, Pix};
use lumen_filter::{
    BilateralParams, FilterError, SpatialWindow, bilateral_filter, bilateral_filter_fpix,
    bilateral_filter_fpix_reference, bilateral_filter_reference,
};
use lumen_test::{RegParams, images};

/// Spatial Gaussian blur with replicated borders, computed independently
/// of the filter code path.
fn gaussian_blur(pix: &Pix, window: &SpatialWindow) -> Pix {
    let (w, h) = pix.dimensions();
    let r = window.radius() as i32;
    let nch = pix.channels().count();
    let mut out = Pix::new(w, h, pix.channels()).unwrap();
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            for c in 0..nch {
                let mut sum = 0.0f64;
                let mut norm = 0.0f64;
                for dy in -r..=r {
                    for dx in -r..=r {
                        let sx = (x + dx).clamp(0, w as i32 - 1) as u32;
                        let sy = (y + dy).clamp(0, h as i32 - 1) as u32;
                        let k = window.get(dx, dy) as f64;
                        sum += k * pix.get_unchecked(sx, sy, c) as f64;
                        norm += k;
                    }
                }
                out.set_unchecked(x as u32, y as u32, c, (sum / norm + 0.5) as u8);
            }
        }
    }
    out
}

// ==========================================================================
// Test 1: parallel path agrees with the reference
// ==========================================================================

#[test]
fn bilateral_reg_matches_reference() {
    let mut rp = RegParams::new("bilateral_reference");

    let test_images = [
        images::ramp_gray(33, 17).unwrap(),
        images::step_edge_gray(24, 24, 50, 200).unwrap(),
        images::quadrants_rgb(30, 22).unwrap(),
        images::noise(19, 23, Channels::Gray, 1).unwrap(),
        images::noise(21, 18, Channels::Rgb, 2).unwrap(),
    ];
    let params = [
        BilateralParams::new(1.0, 5),
        BilateralParams::new(0.1, 2),
        BilateralParams::new(0.05, 1),
        BilateralParams::new(0.3, 4).with_spatial_sigma(3.0),
    ];

    for pix in &test_images {
        for p in &params {
            let fast = bilateral_filter(pix, p).unwrap();
            let slow = bilateral_filter_reference(pix, p).unwrap();
            rp.compare_values(pix.width() as f64, fast.width() as f64, 0.0);
            rp.compare_values(pix.height() as f64, fast.height() as f64, 0.0);
            rp.compare_pix_within(&fast, &slow, 1);
        }
    }

    assert!(rp.cleanup(), "bilateral_reference regression test failed");
}

// ==========================================================================
// Test 2: uniform input is a fixed point
// ==========================================================================

#[test]
fn bilateral_reg_constant_fixed_point() {
    let mut rp = RegParams::new("bilateral_constant");

    let pix = Pix::new_with_value(4, 4, Channels::Gray, 100).unwrap();
    for p in [
        BilateralParams::new(1.0, 1),
        BilateralParams::new(0.01, 2),
        BilateralParams::new(25.0, 3),
        BilateralParams::new(1.0, 10),
    ] {
        let out = bilateral_filter(&pix, &p).unwrap();
        rp.compare_pix(&pix, &out);
        let out = bilateral_filter_reference(&pix, &p).unwrap();
        rp.compare_pix(&pix, &out);
    }

    let rgb = Pix::new_with_value(6, 5, Channels::Rgb, 77).unwrap();
    let out = bilateral_filter(&rgb, &BilateralParams::default()).unwrap();
    rp.compare_pix(&rgb, &out);

    assert!(rp.cleanup(), "bilateral_constant regression test failed");
}

// ==========================================================================
// Test 3: vanishing range sigma is the identity
// ==========================================================================

#[test]
fn bilateral_reg_small_l2norm_identity() {
    let mut rp = RegParams::new("bilateral_identity");

    for pix in [
        images::noise(16, 16, Channels::Gray, 11).unwrap(),
        images::noise(12, 9, Channels::Rgb, 12).unwrap(),
    ] {
        let out = bilateral_filter(&pix, &BilateralParams::new(1e-4, 3)).unwrap();
        rp.compare_pix(&pix, &out);
    }

    assert!(rp.cleanup(), "bilateral_identity regression test failed");
}

// ==========================================================================
// Test 4: unbounded range sigma is a spatial Gaussian blur
// ==========================================================================

#[test]
fn bilateral_reg_large_l2norm_gaussian() {
    let mut rp = RegParams::new("bilateral_gaussian");

    let pix = images::noise(12, 10, Channels::Gray, 21).unwrap();
    // Radius covers the whole image
    let params = BilateralParams::new(1e6, 12).with_spatial_sigma(4.0);
    let window = SpatialWindow::new(params.radius, params.effective_spatial_sigma()).unwrap();
    let expected = gaussian_blur(&pix, &window);
    let out = bilateral_filter(&pix, &params).unwrap();
    rp.compare_pix_within(&expected, &out, 1);

    let rgb = images::quadrants_rgb(10, 10).unwrap();
    let params = BilateralParams::new(1e6, 3);
    let window = SpatialWindow::new(params.radius, params.effective_spatial_sigma()).unwrap();
    let out = bilateral_filter(&rgb, &params).unwrap();
    rp.compare_pix_within(&gaussian_blur(&rgb, &window), &out, 1);

    assert!(rp.cleanup(), "bilateral_gaussian regression test failed");
}

// ==========================================================================
// Test 5: determinism and channel consistency
// ==========================================================================

#[test]
fn bilateral_reg_determinism() {
    let mut rp = RegParams::new("bilateral_determinism");

    let pix = images::noise(40, 31, Channels::Rgb, 31).unwrap();
    let params = BilateralParams::new(0.2, 4);
    let first = bilateral_filter(&pix, &params).unwrap();
    for _ in 0..3 {
        let again = bilateral_filter(&pix, &params).unwrap();
        rp.compare_pix(&first, &again);
    }

    // Neutral input: identical weights on every channel keep it neutral
    let gray = images::noise(20, 20, Channels::Gray, 32).unwrap();
    let neutral_data: Vec<u8> = gray.data().iter().flat_map(|&v| [v, v, v]).collect();
    let neutral = Pix::from_data(20, 20, Channels::Rgb, neutral_data).unwrap();
    let out = bilateral_filter(&neutral, &params).unwrap();
    let all_neutral = out
        .data()
        .chunks_exact(3)
        .all(|px| px[0] == px[1] && px[1] == px[2]);
    rp.check(all_neutral, "neutral pixels stay neutral");

    assert!(rp.cleanup(), "bilateral_determinism regression test failed");
}

// ==========================================================================
// Test 6: floating-point input
// ==========================================================================

#[test]
fn bilateral_reg_fpix() {
    let mut rp = RegParams::new("bilateral_fpix");

    let hdr = images::hdr_log_ramp(24, 16, 0.5, 50.0).unwrap();
    let params = BilateralParams::new(2.0, 3);
    let fast = bilateral_filter_fpix(&hdr, &params).unwrap();
    let slow = bilateral_filter_fpix_reference(&hdr, &params).unwrap();
    rp.compare_fpix_within(&fast, &slow, 1e-3);

    // Filtered values stay within the input range
    let (lo, hi) = hdr
        .data()
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let in_range = fast.data().iter().all(|&v| v >= lo - 1e-3 && v <= hi + 1e-3);
    rp.check(in_range, "output within input range");

    let flat = FPix::new_with_value(5, 5, Channels::Rgb, 1234.5).unwrap();
    let out = bilateral_filter_fpix(&flat, &params).unwrap();
    rp.compare_fpix_within(&flat, &out, 1e-2);

    assert!(rp.cleanup(), "bilateral_fpix regression test failed");
}

// ==========================================================================
// Test 7: error conditions
// ==========================================================================

#[test]
fn bilateral_reg_errors() {
    let mut rp = RegParams::new("bilateral_errors");

    let pix = images::ramp_gray(8, 8).unwrap();
    for p in [
        BilateralParams::new(1.0, 0),
        BilateralParams::new(0.0, 2),
        BilateralParams::new(-0.5, 2),
        BilateralParams::new(f32::NAN, 2),
    ] {
        rp.check(
            matches!(bilateral_filter(&pix, &p), Err(FilterError::InvalidParameter(_))),
            &format!("parallel rejects {p:?}"),
        );
        rp.check(
            matches!(
                bilateral_filter_reference(&pix, &p),
                Err(FilterError::InvalidParameter(_))
            ),
            &format!("reference rejects {p:?}"),
        );
    }

    let mut bad = FPix::new(4, 4, Channels::Rgb).unwrap();
    bad.set(2, 3, 1, f32::INFINITY).unwrap();
    rp.check(
        matches!(
            bilateral_filter_fpix(&bad, &BilateralParams::default()),
            Err(FilterError::InvalidInput(_))
        ),
        "non-finite input rejected",
    );

    assert!(rp.cleanup(), "bilateral_errors regression test failed");
}

// ==========================================================================
// Test 8: samples near the top of the f32 range
// ==========================================================================

#[test]
fn bilateral_reg_extreme_samples() {
    let mut rp = RegParams::new("bilateral_extreme");

    let flat = FPix::new_with_value(4, 4, Channels::Gray, 3.0e38).unwrap();
    let params = BilateralParams::new(1.0, 1);
    let par = bilateral_filter_fpix(&flat, &params).unwrap();
    let seq = bilateral_filter_fpix_reference(&flat, &params).unwrap();
    rp.check(par.is_finite() && seq.is_finite(), "finite output for finite input");
    rp.check(par.data().iter().all(|&v| v == 3.0e38), "parallel fixed point");
    rp.check(seq.data().iter().all(|&v| v == 3.0e38), "reference fixed point");

    // Opposite extremes with the widest range sigma: every tap contributes
    let data: Vec<f32> = (0..36)
        .map(|i| if i % 6 < 3 { -3.0e38 } else { 3.0e38 })
        .collect();
    let step = FPix::from_data(6, 6, Channels::Gray, data).unwrap();
    let params = BilateralParams::new(f32::MAX, 2);
    for out in [
        bilateral_filter_fpix(&step, &params).unwrap(),
        bilateral_filter_fpix_reference(&step, &params).unwrap(),
    ] {
        rp.check(out.is_finite(), "wide range sigma keeps output finite");
        rp.check(
            out.data().iter().all(|v| (-3.0e38..=3.0e38).contains(v)),
            "output stays within the input range",
        );
    }

    assert!(rp.cleanup(), "bilateral_extreme regression test failed");
}
