//! Conversion between `image::DynamicImage` and lumen images
//!
//! Images without color (luma, luma+alpha) become single-channel; all
//! others become RGB. Alpha is discarded.

use crate::{IoError, IoResult};
use image::{DynamicImage, GrayImage, ImageBuffer, Rgb32FImage, RgbImage};
use lumen_core::{Channels, FPix, Pix};

/// Dimensions of `img`; an empty decode is invalid input.
fn decoded_dimensions(img: &DynamicImage) -> IoResult<(u32, u32)> {
    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return Err(IoError::InvalidData(format!("empty image ({w}x{h})")));
    }
    Ok((w, h))
}

/// 8-bit image from a decoded image.
///
/// Deeper formats are scaled down to 8 bits.
pub fn pix_from_dynamic(img: &DynamicImage) -> IoResult<Pix> {
    let (w, h) = decoded_dimensions(img)?;
    let pix = if img.color().has_color() {
        Pix::from_data(w, h, Channels::Rgb, img.to_rgb8().into_raw())?
    } else {
        Pix::from_data(w, h, Channels::Gray, img.to_luma8().into_raw())?
    };
    Ok(pix)
}

/// Floating-point image from a decoded image.
///
/// Float formats (Radiance HDR, OpenEXR) keep their radiance values;
/// integer formats are mapped to `[0, 1]`.
pub fn fpix_from_dynamic(img: &DynamicImage) -> IoResult<FPix> {
    let (w, h) = decoded_dimensions(img)?;
    let fpix = if img.color().has_color() {
        FPix::from_data(w, h, Channels::Rgb, img.to_rgb32f().into_raw())?
    } else {
        FPix::from_data(w, h, Channels::Gray, img.to_luma32f().into_raw())?
    };
    Ok(fpix)
}

fn buffer_mismatch(w: u32, h: u32) -> IoError {
    IoError::InvalidData(format!("sample buffer does not match {w}x{h}"))
}

/// Decoded-image view of an 8-bit image.
pub fn pix_to_dynamic(pix: &Pix) -> IoResult<DynamicImage> {
    let (w, h) = pix.dimensions();
    let data = pix.data().to_vec();
    match pix.channels() {
        Channels::Gray => GrayImage::from_raw(w, h, data)
            .map(DynamicImage::ImageLuma8)
            .ok_or_else(|| buffer_mismatch(w, h)),
        Channels::Rgb => RgbImage::from_raw(w, h, data)
            .map(DynamicImage::ImageRgb8)
            .ok_or_else(|| buffer_mismatch(w, h)),
    }
}

/// RGB float image for the HDR encoders (gray is replicated to RGB).
pub fn fpix_to_dynamic(fpix: &FPix) -> IoResult<DynamicImage> {
    let (w, h) = fpix.dimensions();
    let data = match fpix.channels() {
        Channels::Rgb => fpix.data().to_vec(),
        Channels::Gray => fpix.data().iter().flat_map(|&v| [v, v, v]).collect(),
    };
    let buf: Option<Rgb32FImage> = ImageBuffer::from_raw(w, h, data);
    buf.map(DynamicImage::ImageRgb32F)
        .ok_or_else(|| buffer_mismatch(w, h))
}
