use crate::core::data::colour::Rgba;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;
use std::slice::{ChunksExact, ChunksExactMut};

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    PixelOutsideBounds {
        pixel: Point,
        viewport: Viewport,
    },
    BoundsMismatch {
        viewport_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                viewport_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "viewport size {} does not match buffer size {}",
                    viewport_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, viewport } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} viewport",
                    pixel.x,
                    pixel.y,
                    viewport.width(),
                    viewport.height()
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// Row-major grid of packed colours, one per viewport pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    viewport: Viewport,
    pixels: Vec<Rgba>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            pixels: vec![Rgba::TRANSPARENT; viewport.size()],
        }
    }

    pub fn from_data(viewport: Viewport, pixels: Vec<Rgba>) -> Result<Self, FrameBufferError> {
        if viewport.size() != pixels.len() {
            return Err(FrameBufferError::BoundsMismatch {
                viewport_size: viewport.size(),
                buffer_size: pixels.len(),
            });
        }

        Ok(Self { viewport, pixels })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.viewport.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.viewport.height()
    }

    #[must_use]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Rgba> {
        self.index_of(pixel).map(|index| self.pixels[index])
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Rgba) -> Result<(), FrameBufferError> {
        let index = self
            .index_of(pixel)
            .ok_or(FrameBufferError::PixelOutsideBounds {
                pixel,
                viewport: self.viewport,
            })?;

        self.pixels[index] = colour;
        Ok(())
    }

    pub fn rows(&self) -> ChunksExact<'_, Rgba> {
        self.pixels.chunks_exact(self.viewport.width() as usize)
    }

    /// Mutable rows, each owned by exactly one writer.
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, Rgba> {
        self.pixels.chunks_exact_mut(self.viewport.width() as usize)
    }

    /// Row-major pixel storage, for sweeps that split it by row themselves.
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Writes the buffer as RGBA8 bytes into `dst`, which must hold exactly
    /// four bytes per pixel.
    ///
    /// # Panics
    /// Panics if `dst` has the wrong length.
    pub fn copy_into_rgba8(&self, dst: &mut [u8]) {
        let expected_dst_len = self.pixels.len() * 4;
        assert_eq!(
            dst.len(),
            expected_dst_len,
            "dst length {} does not match expected {}",
            dst.len(),
            expected_dst_len
        );

        for (colour, dst_pixel) in self.pixels.iter().zip(dst.chunks_exact_mut(4)) {
            dst_pixel.copy_from_slice(&colour.to_rgba8());
        }
    }

    /// RGB8 bytes with alpha dropped, in row-major order.
    #[must_use]
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|colour| colour.to_rgb8()).collect()
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if !self.viewport.contains_point(pixel) {
            return None;
        }

        Some(pixel.y as usize * self.viewport.width() as usize + pixel.x as usize)
    }
}
