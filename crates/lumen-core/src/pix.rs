//! Pix - Display-domain image
//!
//! `Pix` stores one `u8` per sample, with samples of a pixel interleaved
//! and rows laid out top to bottom with no padding. It is the input and
//! output format of the 8-bit paths of the filters.
//!
//! # Examples
//!
//! ```
//! use lumen_core::{Channels, Pix};
//!
//! let mut pix = Pix::new(4, 3, Channels::Rgb).unwrap();
//! pix.set(1, 2, 0, 200).unwrap();
//! assert_eq!(pix.get(1, 2, 0).unwrap(), 200);
//! assert_eq!(pix.pixel(1, 2), &[200, 0, 0]);
//! ```

use crate::error::{Error, Result};

/// Sample layout of a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    /// One luminance sample per pixel
    Gray,
    /// Red, green, blue samples, interleaved
    Rgb,
}

impl Channels {
    /// Number of samples per pixel.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }

    /// Layout with the given number of samples per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for anything other than 1 or 3.
    pub fn from_count(count: usize) -> Result<Self> {
        match count {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            _ => Err(Error::InvalidParameter(format!(
                "unsupported channel count {count}"
            ))),
        }
    }
}

/// 8-bit-per-sample image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pix {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok((width as usize) * (height as usize))
}

impl Pix {
    /// Create a new image with every sample set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        Self::new_with_value(width, height, channels, 0)
    }

    /// Create a new image with every sample set to `value`.
    pub fn new_with_value(width: u32, height: u32, channels: Channels, value: u8) -> Result<Self> {
        let npix = check_dimensions(width, height)?;
        Ok(Pix {
            width,
            height,
            channels,
            data: vec![value; npix * channels.count()],
        })
    }

    /// Create an image from interleaved row-major samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `data` does not hold exactly
    /// `width * height * channels` samples.
    pub fn from_data(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
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
        Ok(Pix {
            width,
            height,
            channels,
            data,
        })
    }

    /// Geometry already validated by the caller.
    pub(crate) fn from_parts(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * channels.count()
        );
        Pix {
            width,
            height,
            channels,
            data,
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

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
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

    /// Get one sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates or channel are out of range.
    pub fn get(&self, x: u32, y: u32, channel: usize) -> Result<u8> {
        let idx = self.check_access(x, y, channel)?;
        Ok(self.data[idx])
    }

    /// Set one sample.
    pub fn set(&mut self, x: u32, y: u32, channel: usize, value: u8) -> Result<()> {
        let idx = self.check_access(x, y, channel)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Get one sample without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the sample lies outside the buffer.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32, channel: usize) -> u8 {
        self.data[self.offset(x, y) + channel]
    }

    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, channel: usize, value: u8) {
        let idx = self.offset(x, y) + channel;
        self.data[idx] = value;
    }

    /// All samples of the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let start = self.offset(x, y);
        &self.data[start..start + self.channels.count()]
    }

    /// Samples of row `y`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let len = self.row_len();
        let start = (y as usize) * len;
        &self.data[start..start + len]
    }

    /// Number of samples in one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        (self.width as usize) * self.channels.count()
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return its sample buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Check that `other` has the same size and channel layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] or [`Error::ChannelMismatch`].
    pub fn check_same_geometry(&self, other: &Pix) -> Result<()> {
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
    ///
    /// # Errors
    ///
    /// Returns an error if the images differ in size or layout.
    pub fn max_abs_diff(&self, other: &Pix) -> Result<u8> {
        self.check_same_geometry(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a.abs_diff(b))
            .max()
            .unwrap_or(0))
    }
}
