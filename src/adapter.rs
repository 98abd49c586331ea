use alloc::string::String;

use crate::decoder::KeySquareDecoder;
use crate::frame::Frame;
use crate::source::FrameSource;

/// Returned by [`read_latest_key_square_json`] when the source has no frame.
///
/// Matches the literal the native decoder itself emits when it cannot
/// produce a result, so callers only have one sentinel to check for.
pub const NO_FRAME_JSON: &str = "null";

/// Decode the key square visible in `frame`.
///
/// Forwards the frame's width, height, and the first plane's row stride and
/// buffer to the decoder, and returns the decoder's JSON output unmodified.
/// The plane buffer is borrowed only for the duration of the call.
///
/// # Panics
///
/// Panics if the frame has no planes. Plane count, dimensions, and buffer
/// size are otherwise left for the decoder to validate.
pub fn read_key_square_json<F, D>(frame: &F, decoder: &D) -> Result<String, D::Error>
where
    F: Frame,
    D: KeySquareDecoder,
{
    let size = frame.size();
    // The grayscale (luminance) channel is always plane 0.
    let grayscale_plane = &frame.planes()[0];
    decoder.decode_key_square(
        size.width,
        size.height,
        grayscale_plane.bytes_per_row,
        grayscale_plane.data,
    )
}

/// Acquire the latest frame from `source` and decode the key square in it.
///
/// Short-circuits to [`NO_FRAME_JSON`] without touching the decoder when no
/// frame is available.
pub fn read_latest_key_square_json<S, D>(source: &mut S, decoder: &D) -> Result<String, D::Error>
where
    S: FrameSource,
    D: KeySquareDecoder,
{
    match source.acquire_latest_frame() {
        Some(frame) => read_key_square_json(&frame, decoder),
        None => Ok(String::from(NO_FRAME_JSON)),
    }
}
