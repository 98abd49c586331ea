//! Bindings to the native key-square recognition library
//! (`libread-keysqr`). Enabled by the `native` cargo feature; point
//! `READ_KEYSQR_LIB_DIR` at the library when building.

use std::ffi::{CStr, c_char, c_int, c_void};
use std::ptr::NonNull;

use crate::decoder::KeySquareDecoder;
use crate::error::DecodeError;
use crate::frame::Frame;
use crate::types::Size;

unsafe extern "C" {
    #[link_name = "readKeySquareJson"]
    fn read_key_square_json_raw(
        width: c_int,
        height: c_int,
        bytes_per_row: usize,
        grayscale: *const u8,
    ) -> *mut c_char;

    #[link_name = "releaseKeySquareJson"]
    fn release_key_square_json_raw(json: *mut c_char);

    #[link_name = "keySquareProcessorNew"]
    fn processor_new_raw() -> *mut c_void;

    #[link_name = "keySquareProcessorDelete"]
    fn processor_delete_raw(processor: *mut c_void);

    #[link_name = "keySquareProcessorProcessImage"]
    fn processor_process_image_raw(
        processor: *mut c_void,
        width: c_int,
        height: c_int,
        bytes_per_row: usize,
        grayscale: *const u8,
    ) -> bool;

    #[link_name = "keySquareProcessorIsFinished"]
    fn processor_is_finished_raw(processor: *mut c_void) -> bool;

    #[link_name = "keySquareProcessorJsonRead"]
    fn processor_json_read_raw(processor: *mut c_void) -> *mut c_char;

    #[link_name = "keySquareProcessorRenderOverlay"]
    fn processor_render_overlay_raw(
        processor: *mut c_void,
        width: c_int,
        height: c_int,
        rgba: *mut u32,
    );
}

/// Copy a native result string into a `String` and release the native
/// allocation. A null pointer means the native side produced nothing.
fn take_native_string(raw: *mut c_char) -> Result<String, DecodeError> {
    if raw.is_null() {
        return Err(DecodeError::NullResult);
    }
    // SAFETY: raw is a non-null, NUL-terminated string allocated by the
    // native library, valid until released below.
    let result = unsafe { CStr::from_ptr(raw) }
        .to_str()
        .map(str::to_owned)
        .map_err(DecodeError::from);
    unsafe { release_key_square_json_raw(raw) };
    result
}

/// [`KeySquareDecoder`] backed by the native library's one-shot entry point.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDecoder;

impl KeySquareDecoder for NativeDecoder {
    type Error = DecodeError;

    fn decode_key_square(
        &self,
        width: u32,
        height: u32,
        bytes_per_row: usize,
        grayscale: &[u8],
    ) -> Result<String, DecodeError> {
        // SAFETY: the slice pointer is valid for the duration of the call;
        // the native routine reads the buffer and does not retain it.
        let raw = unsafe {
            read_key_square_json_raw(
                width as c_int,
                height as c_int,
                bytes_per_row,
                grayscale.as_ptr(),
            )
        };
        take_native_string(raw)
    }
}

/// Owned handle to the native incremental scanner.
///
/// Feed it successive frames with [`process_frame`](Self::process_frame);
/// the native side accumulates reads across frames until every face of the
/// key square has been resolved. Not `Send`: the native state's thread
/// affinity is unspecified.
pub struct KeySquareProcessor {
    handle: NonNull<c_void>,
}

impl KeySquareProcessor {
    /// Allocate a native processor. `None` if the native library could not
    /// create one.
    pub fn new() -> Option<Self> {
        // SAFETY: no arguments; a null return is handled.
        let handle = unsafe { processor_new_raw() };
        NonNull::new(handle).map(|handle| KeySquareProcessor { handle })
    }

    /// Scan one frame's grayscale plane. Returns true once a full key
    /// square has been read.
    ///
    /// # Panics
    ///
    /// Panics if the frame has no planes.
    pub fn process_frame<F: Frame>(&mut self, frame: &F) -> bool {
        let size = frame.size();
        let grayscale_plane = &frame.planes()[0];
        // SAFETY: handle is live; the plane buffer is valid for the call.
        unsafe {
            processor_process_image_raw(
                self.handle.as_ptr(),
                size.width as c_int,
                size.height as c_int,
                grayscale_plane.bytes_per_row,
                grayscale_plane.data.as_ptr(),
            )
        }
    }

    /// Whether the scanning loop has reached its termination condition.
    pub fn is_finished(&self) -> bool {
        // SAFETY: handle is live.
        unsafe { processor_is_finished_raw(self.handle.as_ptr()) }
    }

    /// JSON description of the key square read so far.
    pub fn json_read(&self) -> Result<String, DecodeError> {
        // SAFETY: handle is live; ownership of the returned string is
        // transferred to take_native_string.
        let raw = unsafe { processor_json_read_raw(self.handle.as_ptr()) };
        take_native_string(raw)
    }

    /// Overwrite `rgba` with a translucent overlay showing what has been
    /// read so far.
    ///
    /// # Panics
    ///
    /// Panics if `rgba` does not hold exactly `width * height` pixels.
    pub fn render_overlay(&self, size: Size, rgba: &mut [u32]) {
        assert_eq!(
            rgba.len(),
            size.width as usize * size.height as usize,
            "overlay buffer must hold width * height pixels",
        );
        // SAFETY: handle is live; the buffer is writable and exactly
        // width * height pixels, which is all the native side touches.
        unsafe {
            processor_render_overlay_raw(
                self.handle.as_ptr(),
                size.width as c_int,
                size.height as c_int,
                rgba.as_mut_ptr(),
            )
        }
    }
}

impl Drop for KeySquareProcessor {
    fn drop(&mut self) {
        // SAFETY: handle was allocated by processor_new_raw and is
        // released exactly once.
        unsafe { processor_delete_raw(self.handle.as_ptr()) }
    }
}
