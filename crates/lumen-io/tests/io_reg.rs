//! Image I/O regression test
//!
//! Writes images to a scratch directory and reads them back, checking
//! lossless formats exactly and Radiance HDR within its RGBE precision.

use lumen_core::{Channels, FPix};
use lumen_io::{
    ImageFormat, IoError, detect_format, read_fpix, read_pix, read_pix_mem, write_fpix, write_pix,
    write_pix_mem,
};
use lumen_test::{RegParams, images};
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lumen_io_{}_{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

// ==========================================================================
// Test 1: lossless 8-bit formats
// ==========================================================================

#[test]
fn io_reg_lossless() {
    let mut rp = RegParams::new("io_lossless");
    let dir = scratch_dir("lossless");

    let test_images = [
        images::ramp_gray(37, 11).unwrap(),
        images::quadrants_rgb(20, 14).unwrap(),
        images::noise(13, 9, Channels::Rgb, 4).unwrap(),
    ];
    for (i, pix) in test_images.iter().enumerate() {
        for ext in ["png", "tiff"] {
            let path = dir.join(format!("img{i}.{ext}"));
            write_pix(pix, &path).unwrap();
            let back = read_pix(&path).unwrap();
            rp.compare_pix(pix, &back);
        }
    }

    let path = dir.join("img0.png");
    rp.check(
        detect_format(&path).unwrap() == ImageFormat::Png,
        "written PNG is detected as PNG",
    );

    std::fs::remove_dir_all(&dir).ok();
    assert!(rp.cleanup(), "io lossless regression test failed");
}

// ==========================================================================
// Test 2: JPEG and in-memory encoding
// ==========================================================================

#[test]
fn io_reg_memory_and_jpeg() {
    let mut rp = RegParams::new("io_memory");

    let pix = images::quadrants_rgb(32, 32).unwrap();
    let bytes = write_pix_mem(&pix, ImageFormat::Png).unwrap();
    rp.compare_pix(&pix, &read_pix_mem(&bytes).unwrap());

    // flat quadrants survive JPEG closely away from the block edges
    let bytes = write_pix_mem(&pix, ImageFormat::Jpeg).unwrap();
    let back = read_pix_mem(&bytes).unwrap();
    rp.check(back.dimensions() == (32, 32), "jpeg keeps geometry");
    for (x, y) in [(4, 4), (27, 4), (4, 27), (27, 27)] {
        for c in 0..3 {
            let a = pix.get(x, y, c).unwrap() as f64;
            let b = back.get(x, y, c).unwrap() as f64;
            rp.compare_values(a, b, 12.0);
        }
    }

    assert!(rp.cleanup(), "io memory regression test failed");
}

// ==========================================================================
// Test 3: Radiance HDR keeps radiance values
// ==========================================================================

#[test]
fn io_reg_hdr() {
    let mut rp = RegParams::new("io_hdr");
    let dir = scratch_dir("hdr");

    let hdr = images::hdr_log_ramp(24, 6, 0.01, 500.0).unwrap();
    let path = dir.join("ramp.hdr");
    write_fpix(&hdr, &path).unwrap();
    rp.check(
        detect_format(&path).unwrap() == ImageFormat::Hdr,
        "written file is detected as Radiance HDR",
    );

    let back = read_fpix(&path).unwrap();
    rp.check(back.channels() == Channels::Rgb, "hdr reads as RGB");
    // RGBE keeps 8 mantissa bits per channel
    let mut worst = 0.0f64;
    for (&a, &b) in hdr.data().iter().zip(back.data()) {
        worst = worst.max(((a - b) / a).abs() as f64);
    }
    rp.compare_values(0.0, worst, 0.03);

    std::fs::remove_dir_all(&dir).ok();
    assert!(rp.cleanup(), "io hdr regression test failed");
}

// ==========================================================================
// Test 4: error paths
// ==========================================================================

#[test]
fn io_reg_errors() {
    let dir = scratch_dir("errors");

    assert!(matches!(
        read_pix(dir.join("missing.png")),
        Err(IoError::Io(_))
    ));

    let junk = dir.join("junk.png");
    std::fs::write(&junk, b"definitely not an image").unwrap();
    assert!(matches!(read_pix(&junk), Err(IoError::UnsupportedFormat(_))));

    let fpix = FPix::new_with_value(2, 2, Channels::Gray, 1.0).unwrap();
    assert!(matches!(
        write_fpix(&fpix, dir.join("out.png")),
        Err(IoError::UnsupportedFormat(_))
    ));

    let pix = images::ramp_gray(4, 4).unwrap();
    assert!(matches!(
        write_pix(&pix, dir.join("out.unknown")),
        Err(IoError::UnsupportedFormat(_))
    ));

    std::fs::remove_dir_all(&dir).ok();
}
