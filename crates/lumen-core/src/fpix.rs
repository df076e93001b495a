//! FPix - Floating-point image
//!
//! `FPix` stores one `f32` per sample with the same interleaved, row-major
//! layout as [`Pix`]. It carries HDR input (unbounded range) and the
//! intermediate planes of the filters, such as luminance and its logarithm.
//!
//! # Examples
//!
//! ```
//! use lumen_core::{Channels, FPix};
//!
//! let mut fpix = FPix::new(100, 100, Channels::Gray).unwrap();
//! fpix.set(10, 20, 0, 0.5).unwrap();
//! assert_eq!(fpix.get(10, 20, 0).unwrap(), 0.5);
//! ```

use crate::color;
use crate::error::{Error, Result};
use crate::pix::{Channels, Pix, check_dimensions};

/// Floating-point image
///
/// # Memory Layout
///
/// The sample of channel `c` at (x, y) is at index
/// `(y * width + x) * channels + c`.
#[derive(Debug, Clone, PartialEq)]
pub struct FPix {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<f32>,
}

impl FPix {
    /// Create a new FPix with all samples set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        Self::new_with_value(width, height, channels, 0.0)
    }

    /// Create a new FPix with all samples set to the specified value
    ///
    /// # Examples
    ///
    /// ```
    /// use lumen_core::{Channels, FPix};
    ///
    /// let fpix = FPix::new_with_value(8, 8, Channels::Rgb, 0.5).unwrap();
    /// assert_eq!(fpix.get(4, 4, 2).unwrap(), 0.5);
    /// ```
    pub fn new_with_value(width: u32, height: u32, channels: Channels, value: f32) -> Result<Self> {
        let npix = check_dimensions(width, height)?;
        Ok(FPix {
            width,
            height,
            channels,
            data: vec![value; npix * channels.count()],
        })
    }

    /// Create a FPix from raw interleaved data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, channels: Channels, data: Vec<f32>) -> Result<Self> {
        let npix = check_dimensions(width, height)?;
        let expected = npix * channels.count();
        if data.len() != expected {
            return Err(Error::DataLength {
                width,
                height,
                channels: channels.count(),
                expected,
                actual: data.len(),
            });
        }
        Ok(FPix {
            width,
            height,
            channels,
            data,
        })
    }

    /// Convert an 8-bit image sample for sample, without rescaling.
    pub fn from_pix(pix: &Pix) -> Self {
        FPix {
            width: pix.width(),
            height: pix.height(),
            channels: pix.channels(),
            data: pix.data().iter().map(|&v| v as f32).collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Number of pixels (not samples).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * self.channels.count()
    }

    fn check_access(&self, x: u32, y: u32, channel: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        if channel >= self.channels.count() {
            return Err(Error::ChannelOutOfRange {
                channel,
                count: self.channels.count(),
            });
        }
        Ok(self.offset(x, y) + channel)
    }

    /// Get the sample of `channel` at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    pub fn get(&self, x: u32, y: u32, channel: usize) -> Result<f32> {
        let idx = self.check_access(x, y, channel)?;
        Ok(self.data[idx])
    }

    /// Set the sample of `channel` at (x, y)
    pub fn set(&mut self, x: u32, y: u32, channel: usize, value: f32) -> Result<()> {
        let idx = self.check_access(x, y, channel)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Get a sample without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the sample lies outside the buffer.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32, channel: usize) -> f32 {
        self.data[self.offset(x, y) + channel]
    }

    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, channel: usize, value: f32) {
        let idx = self.offset(x, y) + channel;
        self.data[idx] = value;
    }

    /// All samples of the pixel at (x, y).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[f32] {
        let start = self.offset(x, y);
        &self.data[start..start + self.channels.count()]
    }

    /// Get a row of samples
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[f32] {
        let len = self.row_len();
        let start = (y as usize) * len;
        &self.data[start..start + len]
    }

    #[inline]
    pub fn row_len(&self) -> usize {
        (self.width as usize) * self.channels.count()
    }

    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Create an image of the same geometry with every sample zeroed.
    pub fn create_template(&self) -> FPix {
        FPix {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: vec![0.0; self.data.len()],
        }
    }

    /// Multiply every sample by `factor`, returning a new image.
    pub fn scaled(&self, factor: f32) -> FPix {
        FPix {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: self.data.iter().map(|&v| v * factor).collect(),
        }
    }

    /// Index and value of the first NaN or infinite sample, if any.
    pub fn first_non_finite(&self) -> Option<(usize, f32)> {
        self.data
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
            .map(|(i, &v)| (i, v))
    }

    /// Whether every sample is finite.
    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }

    /// Derive a one-channel luminance image.
    ///
    /// Gray images are copied; RGB images use [`color::luminance`].
    pub fn luminance(&self) -> FPix {
        let data = match self.channels {
            Channels::Gray => self.data.clone(),
            Channels::Rgb => self
                .data
                .chunks_exact(3)
                .map(|px| color::luminance(px[0], px[1], px[2]))
                .collect(),
        };
        FPix {
            width: self.width,
            height: self.height,
            channels: Channels::Gray,
            data,
        }
    }

    /// Convert to an 8-bit image.
    ///
    /// Samples are rounded half-up and clipped to `[0, 255]`; NaN maps to 0.
    pub fn to_pix(&self) -> Pix {
        let data = self.data.iter().map(|&v| color::clip_to_u8(v)).collect();
        Pix::from_parts(self.width, self.height, self.channels, data)
    }

    /// Check that `other` has the same size and channel layout.
    pub fn check_same_geometry(&self, other: &FPix) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        if self.channels != other.channels {
            return Err(Error::ChannelMismatch(self.channels, other.channels));
        }
        Ok(())
    }

    /// Largest absolute per-sample difference between two images.
    pub fn max_abs_diff(&self, other: &FPix) -> Result<f32> {
        self.check_same_geometry(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| (a - b).abs())
            .fold(0.0, f32::max))
    }
}
