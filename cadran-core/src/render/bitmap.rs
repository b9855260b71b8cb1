//! Background bitmap and the scaled-background cache
//!
//! The background asset is decoded once at engine creation and kept
//! unscaled. A single derived copy, resized to the current canvas
//! dimensions, is cached and regenerated only when the dimensions change.
//! The resize is the one O(width x height) path in the system.

use alloc::vec::Vec;

use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Errors decoding the background asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetError {
    /// Zero width or height
    Degenerate,
    /// Byte length does not match width x height x 2
    SizeMismatch,
}

/// Owned RGB565 pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl Bitmap {
    /// Decode a big-endian raw RGB565 byte slice
    ///
    /// This is the only decode path; the background asset is compiled into
    /// the host with `include_bytes!` and handed over here once.
    pub fn from_raw_rgb565(data: &[u8], width: u32, height: u32) -> Result<Self, AssetError> {
        if width == 0 || height == 0 {
            return Err(AssetError::Degenerate);
        }
        if data.len() != (width as usize) * (height as usize) * 2 {
            return Err(AssetError::SizeMismatch);
        }

        let pixels = data
            .chunks_exact(2)
            .map(|c| Rgb565::from(RawU16::new(u16::from_be_bytes([c[0], c[1]]))))
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a bitmap from already-decoded pixels
    pub fn from_pixels(pixels: Vec<Rgb565>, width: u32, height: u32) -> Result<Self, AssetError> {
        if width == 0 || height == 0 {
            return Err(AssetError::Degenerate);
        }
        if pixels.len() != (width as usize) * (height as usize) {
            return Err(AssetError::SizeMismatch);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Pixel at (x, y); row-major, no bounds check beyond the slice's own
    pub fn pixel(&self, x: u32, y: u32) -> Rgb565 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Row-major pixel slice
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    /// Filtered (bilinear) resize to exactly `width` x `height`
    ///
    /// Endpoint-aligned 16.16 fixed-point sampling, integer math only.
    pub fn scaled(&self, width: u32, height: u32) -> Bitmap {
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            let (y0, fy) = sample(y, self.height, height);
            let y1 = (y0 + 1).min(self.height - 1);

            for x in 0..width {
                let (x0, fx) = sample(x, self.width, width);
                let x1 = (x0 + 1).min(self.width - 1);

                let top = lerp(self.pixel(x0, y0), self.pixel(x1, y0), fx);
                let bottom = lerp(self.pixel(x0, y1), self.pixel(x1, y1), fx);
                pixels.push(lerp(top, bottom, fy));
            }
        }

        Bitmap {
            width,
            height,
            pixels,
        }
    }
}

/// Endpoint-aligned 16.16 source coordinate for destination index `i`
///
/// Divided per pixel rather than via a precomputed step so that the last
/// destination pixel lands exactly on the last source pixel.
fn sample(i: u32, src: u32, dst: u32) -> (u32, i32) {
    if dst <= 1 {
        return (0, 0);
    }
    let pos = (i as u64 * (((src - 1) as u64) << 16)) / (dst - 1) as u64;
    ((pos >> 16) as u32, (pos & 0xffff) as i32)
}

/// Per-channel linear interpolation with a 16.16 fraction
fn lerp(a: Rgb565, b: Rgb565, f: i32) -> Rgb565 {
    let ch = |a: u8, b: u8| -> u8 { (a as i32 + (((b as i32 - a as i32) * f) >> 16)) as u8 };
    Rgb565::new(ch(a.r(), b.r()), ch(a.g(), b.g()), ch(a.b(), b.b()))
}

/// Cache of the background resized to the current canvas dimensions
///
/// Invariant: the cached bitmap, when present, exactly matches the
/// dimensions of the last `get` call. The rebuild counter is diagnostic.
#[derive(Debug, Default)]
pub struct ScaledBackground {
    cached: Option<Bitmap>,
    rebuilds: u32,
}

impl ScaledBackground {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scaled background for `size`, regenerating iff absent or mismatched
    pub fn get(&mut self, source: &Bitmap, size: Size) -> &Bitmap {
        let hit = matches!(&self.cached, Some(cached) if cached.size() == size);
        if !hit {
            // Drop the stale copy first so the rebuild peaks at a
            // single scaled bitmap; RAM-constrained hosts rely on this.
            self.cached = None;
            self.rebuilds = self.rebuilds.wrapping_add(1);
            self.cached = Some(source.scaled(size.width, size.height));
        }
        self.cached.as_ref().unwrap()
    }

    /// Number of resize passes performed so far
    pub fn rebuilds(&self) -> u32 {
        self.rebuilds
    }
}
