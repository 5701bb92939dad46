//! Pixel buffers a picker samples from, and the coordinate spaces pointer
//! input arrives in.

use euclid::{Point2D, Rect, Size2D};

use crate::{models::Rgb, Component};

/// Unit for coordinates local to a canvas, in whole pixels.
#[derive(Clone, Copy, Debug)]
pub struct CanvasSpace;

/// Unit for pointer coordinates as reported by the windowing system.
#[derive(Clone, Copy, Debug)]
pub struct ClientSpace;

/// A pixel coordinate on a canvas.
pub type CanvasPoint = Point2D<u32, CanvasSpace>;

/// The dimensions of a canvas in pixels.
pub type CanvasSize = Size2D<u32, CanvasSpace>;

/// A pointer position in client coordinates.
pub type ClientPoint = Point2D<Component, ClientSpace>;

/// The box a canvas occupies on screen, in client coordinates.
pub type ClientRect = Rect<Component, ClientSpace>;

const BYTES_PER_PIXEL: usize = 4;

/// Errors creating an [`ImageBuffer`] from existing pixel data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    /// The pixel data does not hold `width * height` RGBA pixels.
    #[error("expected {expected} bytes of RGBA data for {width}x{height}, found {actual}")]
    SizeMismatch {
        /// Width of the buffer in pixels.
        width: u32,
        /// Height of the buffer in pixels.
        height: u32,
        /// Number of bytes the dimensions require.
        expected: usize,
        /// Number of bytes that were supplied.
        actual: usize,
    },
}

/// Row-major RGBA pixels with 8 bits per channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBuffer {
    size: CanvasSize,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Create a buffer with every pixel transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        Self {
            size: CanvasSize::new(width, height),
            data: vec![0; len],
        }
    }

    /// Wrap existing RGBA data.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CanvasError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(CanvasError::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            size: CanvasSize::new(width, height),
            data,
        })
    }

    /// Width of the buffer in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height of the buffer in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Dimensions of the buffer in pixels.
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// The raw RGBA bytes, row by row.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns true if the point lies on the buffer.
    pub fn contains(&self, point: CanvasPoint) -> bool {
        point.x < self.size.width && point.y < self.size.height
    }

    /// The color at `point`, or `None` if the point is off the buffer.
    pub fn get(&self, point: CanvasPoint) -> Option<Rgb> {
        self.contains(point)
            .then(|| sample_canvas_pixel(self, point.x, point.y))
    }

    /// Overwrite the pixel at `point` with an opaque color. Points off the
    /// buffer are ignored.
    pub fn put(&mut self, point: CanvasPoint, color: Rgb) {
        if !self.contains(point) {
            return;
        }

        let offset = self.offset(point.x, point.y);
        self.data[offset..offset + BYTES_PER_PIXEL]
            .copy_from_slice(&[color.red, color.green, color.blue, 255]);
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.size.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}

/// Read the color at `(x, y)`, ignoring alpha.
///
/// The coordinate must lie on the buffer; callers clamp pointer input first
/// (see [`clamp_to_bounds`]). Reading off the buffer panics.
pub fn sample_canvas_pixel(buffer: &ImageBuffer, x: u32, y: u32) -> Rgb {
    debug_assert!(
        x < buffer.width() && y < buffer.height(),
        "({x}, {y}) is outside a {}x{} buffer",
        buffer.width(),
        buffer.height()
    );

    let offset = buffer.offset(x, y);
    let pixel = &buffer.data[offset..offset + 3];
    Rgb::new(pixel[0], pixel[1], pixel[2])
}

/// Translate a pointer position into a pixel on a canvas that is displayed
/// in `bounds`. The canvas may be displayed scaled; positions outside the
/// bounds are clamped to the nearest edge pixel. Returns `None` if either
/// the bounds or the canvas are empty.
pub fn clamp_to_bounds(
    pointer: ClientPoint,
    bounds: ClientRect,
    canvas: CanvasSize,
) -> Option<CanvasPoint> {
    if canvas.width == 0 || canvas.height == 0 {
        return None;
    }

    if !(bounds.size.width > 0.0 && bounds.size.height > 0.0) {
        return None;
    }

    let local = pointer - bounds.origin;

    let axis = |offset: Component, extent: Component, pixels: u32| {
        let scaled = (offset / extent * pixels as Component).floor();
        // NaN saturates to 0 in the cast.
        (scaled.max(0.0) as u32).min(pixels - 1)
    };

    Some(CanvasPoint::new(
        axis(local.x, bounds.size.width, canvas.width),
        axis(local.y, bounds.size.height, canvas.height),
    ))
}
