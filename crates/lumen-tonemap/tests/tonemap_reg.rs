//! Tone mapping regression test
//!
//! Checks the normalization endpoints, the flat-image midpoint, ordering
//! and chrominance preservation, and agreement between the parallel
//! pipeline and the sequential reference.

use lumen_core::{Channels, FPix};
use lumen_tonemap::{
    FLAT_MIDPOINT, ToneMapError, ToneMapParams, tone_map, tone_map_normalized,
    tone_map_reference, tone_map_with,
};
use lumen_test::{RegParams, images};

// ==========================================================================
// Test 1: normalization endpoints
// ==========================================================================

#[test]
fn tonemap_reg_normalized_endpoints() {
    let mut rp = RegParams::new("tonemap_endpoints");

    let hdr = images::fpix_gray(3, 1, &[1.0, 10.0, 100.0]).unwrap();
    let n = tone_map_normalized(&hdr, &ToneMapParams::default()).unwrap();
    rp.compare_values(0.0, n.get(0, 0, 0).unwrap() as f64, 0.0);
    rp.compare_values(0.5, n.get(1, 0, 0).unwrap() as f64, 1e-5);
    rp.compare_values(1.0, n.get(2, 0, 0).unwrap() as f64, 0.0);

    let out = tone_map(&hdr).unwrap();
    rp.compare_values(0.0, out.get(0, 0, 0).unwrap() as f64, 0.0);
    rp.compare_values(15.0, out.get(1, 0, 0).unwrap() as f64, 0.0);
    rp.compare_values(255.0, out.get(2, 0, 0).unwrap() as f64, 0.0);

    assert!(rp.cleanup(), "tonemap endpoints regression test failed");
}

// ==========================================================================
// Test 2: flat luminance maps to the midpoint
// ==========================================================================

#[test]
fn tonemap_reg_flat_image() {
    let mut rp = RegParams::new("tonemap_flat");

    for value in [0.0f32, 1e-3, 1.0, 5000.0] {
        let gray = FPix::new_with_value(8, 6, Channels::Gray, value).unwrap();
        let n = tone_map_normalized(&gray, &ToneMapParams::default()).unwrap();
        rp.check(
            n.data().iter().all(|&v| v == FLAT_MIDPOINT),
            &format!("flat gray {value} normalizes to the midpoint"),
        );
    }

    let rgb = FPix::new_with_value(5, 5, Channels::Rgb, 42.0).unwrap();
    let out = tone_map(&rgb).unwrap();
    rp.check(
        out.data().iter().all(|&v| v == 15),
        "flat neutral RGB maps to display value 15",
    );

    assert!(rp.cleanup(), "tonemap flat regression test failed");
}

// ==========================================================================
// Test 3: range and extrema of a full HDR image
// ==========================================================================

#[test]
fn tonemap_reg_range() {
    let mut rp = RegParams::new("tonemap_range");
    let params = ToneMapParams::default();

    let noise = images::hdr_noise(40, 30, 11).unwrap();
    let n = tone_map_normalized(&noise, &params).unwrap();
    rp.check(
        n.data().iter().all(|v| (0.0..=1.0).contains(v)),
        "normalized values lie in [0, 1]",
    );
    rp.check(n.data().contains(&0.0), "darkest pixel normalizes to 0");
    rp.check(n.data().contains(&1.0), "brightest pixel normalizes to 1");

    // Darkest pixel of the ramp is at the top-left, brightest at the
    // bottom-right (rows add warm tint, which raises luminance)
    let (w, h) = (32u32, 8u32);
    let ramp = images::hdr_log_ramp(w, h, 0.005, 2.0e4).unwrap();
    let n = tone_map_normalized(&ramp, &params).unwrap();
    rp.compare_values(0.0, n.get(0, 0, 0).unwrap() as f64, 0.0);
    rp.compare_values(1.0, n.get(w - 1, h - 1, 0).unwrap() as f64, 0.0);
    let out = tone_map_with(&ramp, &params).unwrap();
    rp.check(
        out.pixel(0, 0).iter().all(|&v| v == 0),
        "darkest pixel maps to black",
    );
    rp.check(
        out.pixel(w - 1, h - 1).iter().any(|&v| v == 255),
        "brightest pixel reaches the top of the display range",
    );

    assert!(rp.cleanup(), "tonemap range regression test failed");
}

// ==========================================================================
// Test 4: ordering and chrominance are preserved
// ==========================================================================

#[test]
fn tonemap_reg_ordering_and_color() {
    let mut rp = RegParams::new("tonemap_order");

    let values: Vec<f32> = (0..64).map(|i| 1e-3 * 1.25f32.powi(i)).collect();
    let hdr = images::fpix_gray(64, 1, &values).unwrap();
    let out = tone_map(&hdr).unwrap();
    rp.check(
        out.data().windows(2).all(|p| p[0] <= p[1]),
        "brighter input never maps darker",
    );
    rp.compare_values(0.0, out.get(0, 0, 0).unwrap() as f64, 0.0);
    rp.compare_values(255.0, out.get(63, 0, 0).unwrap() as f64, 0.0);

    // dark neutral, orange mid-tone, bright neutral
    let data = vec![0.01, 0.01, 0.01, 0.8, 0.4, 0.2, 100.0, 100.0, 100.0];
    let hdr = FPix::from_data(3, 1, Channels::Rgb, data).unwrap();
    let out = tone_map(&hdr).unwrap();
    let px = out.pixel(1, 0);
    let (r, g, b) = (px[0] as f64, px[1] as f64, px[2] as f64);
    rp.check(r > g && g > b, "channel order kept");
    rp.compare_values(2.0, r / g, 0.2);
    rp.compare_values(2.0, g / b, 0.4);

    assert!(rp.cleanup(), "tonemap ordering regression test failed");
}

// ==========================================================================
// Test 5: parallel pipeline equals the sequential reference
// ==========================================================================

#[test]
fn tonemap_reg_matches_reference() {
    let mut rp = RegParams::new("tonemap_reference");
    let params = ToneMapParams::default();

    let test_images = [
        images::hdr_noise(257, 33, 5).unwrap(),
        images::hdr_log_ramp(100, 40, 1e-3, 1e5).unwrap(),
        images::fpix_gray(5, 2, &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap(),
    ];
    for fpix in &test_images {
        let a = tone_map_with(fpix, &params).unwrap();
        let b = tone_map_reference(fpix, &params).unwrap();
        rp.compare_pix(&a, &b);
    }

    let dim = ToneMapParams {
        display_max: 127.0,
        ..ToneMapParams::default()
    };
    for fpix in &test_images {
        let a = tone_map_with(fpix, &dim).unwrap();
        let b = tone_map_reference(fpix, &dim).unwrap();
        rp.compare_pix(&a, &b);
    }
    let gray = tone_map_with(&test_images[2], &dim).unwrap();
    rp.compare_values(127.0, *gray.data().iter().max().unwrap() as f64, 0.0);

    assert!(rp.cleanup(), "tonemap reference regression test failed");
}

// ==========================================================================
// Test 6: invalid input and parameters
// ==========================================================================

#[test]
fn tonemap_reg_errors() {
    let mut fpix = FPix::new_with_value(4, 4, Channels::Rgb, 1.0).unwrap();
    fpix.set(2, 3, 1, f32::NAN).unwrap();
    assert!(matches!(tone_map(&fpix), Err(ToneMapError::InvalidInput(_))));
    assert!(matches!(
        tone_map_reference(&fpix, &ToneMapParams::default()),
        Err(ToneMapError::InvalidInput(_))
    ));

    fpix.set(2, 3, 1, f32::NEG_INFINITY).unwrap();
    assert!(matches!(tone_map(&fpix), Err(ToneMapError::InvalidInput(_))));

    let ok = FPix::new_with_value(2, 2, Channels::Gray, 1.0).unwrap();
    let bad = ToneMapParams {
        epsilon: -1.0,
        ..ToneMapParams::default()
    };
    assert!(matches!(
        tone_map_with(&ok, &bad),
        Err(ToneMapError::InvalidParameter(_))
    ));
}
