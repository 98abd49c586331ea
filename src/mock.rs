use core::convert::Infallible;

use crate::decoder::KeySquareDecoder;
use crate::frame::RawFrame;
use crate::source::FrameSource;
use crate::types::Size;

/// A decoder that returns a canned JSON string.
pub struct MockDecoder {
    json: String,
}

impl MockDecoder {
    pub fn new(json: impl Into<String>) -> Self {
        MockDecoder { json: json.into() }
    }
}

impl Default for MockDecoder {
    /// Reports nothing decoded, like the native routine when it finds
    /// no key square.
    fn default() -> Self {
        MockDecoder::new("null")
    }
}

impl KeySquareDecoder for MockDecoder {
    type Error = Infallible;

    fn decode_key_square(
        &self,
        _width: u32,
        _height: u32,
        _bytes_per_row: usize,
        _grayscale: &[u8],
    ) -> Result<String, Infallible> {
        Ok(self.json.clone())
    }
}

/// A frame source that yields a fixed number of gray-ramp frames, then
/// runs dry. Frames borrow the source's internal buffer.
pub struct RampFrameSource {
    size: Size,
    data: Vec<u8>,
    remaining: usize,
}

impl RampFrameSource {
    pub fn new(size: Size, frame_count: usize) -> Self {
        let width = size.width as usize;
        let height = size.height as usize;
        let mut data = vec![0u8; width * height];
        for y in 0..height {
            for x in 0..width {
                data[y * width + x] = ((x + y) % 256) as u8;
            }
        }
        RampFrameSource {
            size,
            data,
            remaining: frame_count,
        }
    }
}

impl FrameSource for RampFrameSource {
    type Frame<'a> = RawFrame<'a>;

    fn acquire_latest_frame(&mut self) -> Option<RawFrame<'_>> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(RawFrame::grayscale(
            self.size,
            self.size.width as usize,
            &self.data,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{NO_FRAME_JSON, read_latest_key_square_json};
    use crate::frame::Frame;

    #[test]
    fn ramp_source_runs_dry_after_configured_count() {
        let mut source = RampFrameSource::new(
            Size {
                width: 32,
                height: 16,
            },
            2,
        );
        assert!(source.acquire_latest_frame().is_some());
        assert!(source.acquire_latest_frame().is_some());
        assert!(source.acquire_latest_frame().is_none());
    }

    #[test]
    fn ramp_frames_are_single_plane_and_unpadded() {
        let mut source = RampFrameSource::new(
            Size {
                width: 32,
                height: 16,
            },
            1,
        );
        let frame = source.acquire_latest_frame().unwrap();
        assert_eq!(frame.planes().len(), 1);
        assert_eq!(frame.planes()[0].bytes_per_row, 32);
        assert_eq!(frame.planes()[0].data.len(), 32 * 16);
    }

    #[test]
    fn dry_source_maps_to_sentinel() {
        let mut source = RampFrameSource::new(
            Size {
                width: 32,
                height: 16,
            },
            0,
        );
        let decoder = MockDecoder::new(r#"{"faces":[]}"#);
        let result = read_latest_key_square_json(&mut source, &decoder).unwrap();
        assert_eq!(result, NO_FRAME_JSON);
    }

    #[test]
    fn live_source_returns_canned_json() {
        let mut source = RampFrameSource::new(
            Size {
                width: 32,
                height: 16,
            },
            1,
        );
        let decoder = MockDecoder::new(r#"{"faces":[]}"#);
        let result = read_latest_key_square_json(&mut source, &decoder).unwrap();
        assert_eq!(result, r#"{"faces":[]}"#);
    }
}
