use arrayvec::ArrayVec;

use crate::types::{PixelFormat, Size};

/// Maximum number of planes held inline by a [`RawFrame`].
/// Planar YUV layouts need at most three.
const MAX_PLANES: usize = 4;

/// A single plane of image data.
///
/// `bytes_per_row` (the row stride) may exceed the frame width when rows
/// are padded for alignment.
pub struct Plane<'a> {
    pub data: &'a [u8],
    pub bytes_per_row: usize,
}

/// A borrowed video frame. Lifetime tied to the acquisition scope (zero-copy).
///
/// Plane index 0 is the grayscale (luminance) channel for every
/// [`PixelFormat`] this crate knows about.
pub trait Frame {
    fn pixel_format(&self) -> PixelFormat;
    fn size(&self) -> Size;
    fn planes(&self) -> &[Plane<'_>];
}

/// A [`Frame`] over caller-provided plane buffers.
///
/// Useful for feeding raw pixel data that did not come from a camera
/// abstraction, e.g. a grayscale image already in memory.
pub struct RawFrame<'a> {
    pixel_format: PixelFormat,
    size: Size,
    planes: ArrayVec<Plane<'a>, MAX_PLANES>,
}

impl<'a> RawFrame<'a> {
    /// A single-plane `Gray8` frame over `data`.
    pub fn grayscale(size: Size, bytes_per_row: usize, data: &'a [u8]) -> Self {
        let mut planes = ArrayVec::new();
        planes.push(Plane {
            data,
            bytes_per_row,
        });
        RawFrame {
            pixel_format: PixelFormat::Gray8,
            size,
            planes,
        }
    }

    /// A frame over an explicit plane layout, in plane order.
    ///
    /// # Panics
    ///
    /// Panics if more than four planes are supplied.
    pub fn from_planes(
        pixel_format: PixelFormat,
        size: Size,
        planes: impl IntoIterator<Item = Plane<'a>>,
    ) -> Self {
        RawFrame {
            pixel_format,
            size,
            planes: planes.into_iter().collect(),
        }
    }
}

impl<'a> Frame for RawFrame<'a> {
    fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    fn size(&self) -> Size {
        self.size
    }

    fn planes(&self) -> &[Plane<'_>] {
        &self.planes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grayscale_frame_has_one_plane() {
        let data = [0u8; 16 * 8];
        let frame = RawFrame::grayscale(
            Size {
                width: 16,
                height: 8,
            },
            16,
            &data,
        );
        assert_eq!(frame.pixel_format(), PixelFormat::Gray8);
        assert_eq!(frame.planes().len(), 1);
        assert_eq!(frame.planes()[0].bytes_per_row, 16);
        assert_eq!(frame.planes()[0].data.len(), 16 * 8);
    }

    #[test]
    fn from_planes_preserves_plane_order() {
        let luma = [1u8; 8];
        let chroma = [2u8; 4];
        let frame = RawFrame::from_planes(
            PixelFormat::Nv12,
            Size {
                width: 4,
                height: 2,
            },
            [
                Plane {
                    data: &luma,
                    bytes_per_row: 4,
                },
                Plane {
                    data: &chroma,
                    bytes_per_row: 4,
                },
            ],
        );
        assert_eq!(frame.planes().len(), 2);
        assert_eq!(frame.planes()[0].data, &luma);
        assert_eq!(frame.planes()[1].data, &chroma);
    }
}
