//! lumen-io - Image file I/O
//!
//! Reads and writes lumen images through the `image` crate codecs:
//!
//! - [`read_pix`] / [`write_pix`] - 8-bit images (PNG, JPEG, TIFF, BMP, PNM)
//! - [`read_fpix`] / [`write_fpix`] - floating-point images (Radiance HDR,
//!   OpenEXR, or any 8-bit format mapped to `[0, 1]`)
//! - [`detect_format`] - magic-number format detection

mod convert;
mod error;
mod format;

pub use convert::{fpix_from_dynamic, fpix_to_dynamic, pix_from_dynamic, pix_to_dynamic};
pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes, format_from_path, is_hdr_format};
pub use image::ImageFormat;

use image::DynamicImage;
use log::debug;
use lumen_core::{FPix, Pix};
use std::io::Cursor;
use std::path::Path;

fn decode(data: &[u8]) -> IoResult<DynamicImage> {
    let format = detect_format_from_bytes(data)?;
    debug!("decoding {} bytes as {:?}", data.len(), format);
    image::load_from_memory_with_format(data, format).map_err(IoError::from_decode)
}

/// Decode an 8-bit image from memory.
pub fn read_pix_mem(data: &[u8]) -> IoResult<Pix> {
    convert::pix_from_dynamic(&decode(data)?)
}

/// Decode a floating-point image from memory.
pub fn read_fpix_mem(data: &[u8]) -> IoResult<FPix> {
    convert::fpix_from_dynamic(&decode(data)?)
}

/// Read an 8-bit image from a file.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the header matches no known
/// format, or a decode error if the file is malformed.
pub fn read_pix<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    read_pix_mem(&std::fs::read(path)?)
}

/// Read a floating-point image from a file.
pub fn read_fpix<P: AsRef<Path>>(path: P) -> IoResult<FPix> {
    read_fpix_mem(&std::fs::read(path)?)
}

/// Encode an 8-bit image in `format`.
pub fn write_pix_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    convert::pix_to_dynamic(pix)?
        .write_to(&mut buf, format)
        .map_err(IoError::from_encode)?;
    Ok(buf.into_inner())
}

/// Write an 8-bit image, choosing the format from the file extension.
pub fn write_pix<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = format_from_path(path)?;
    write_pix_format(pix, path, format)
}

/// Write an 8-bit image in an explicit format.
pub fn write_pix_format<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let bytes = write_pix_mem(pix, format)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Write a floating-point image as Radiance HDR or OpenEXR, chosen by the
/// file extension.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the extension names an 8-bit
/// format.
pub fn write_fpix<P: AsRef<Path>>(fpix: &FPix, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = format_from_path(path)?;
    if !is_hdr_format(format) {
        return Err(IoError::UnsupportedFormat(format!(
            "{format:?} cannot hold floating-point samples"
        )));
    }
    let mut buf = Cursor::new(Vec::new());
    convert::fpix_to_dynamic(fpix)?
        .write_to(&mut buf, format)
        .map_err(IoError::from_encode)?;
    std::fs::write(path, buf.into_inner())?;
    Ok(())
}
