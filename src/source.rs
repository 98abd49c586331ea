use crate::frame::Frame;

/// Pull-based access to the most recently captured frame.
///
/// The returned frame (and its plane buffers) is only valid until the next
/// call on the source; callers must finish reading it before acquiring
/// another frame.
pub trait FrameSource {
    type Frame<'a>: Frame
    where
        Self: 'a;

    /// The latest available frame, or `None` if the source has nothing
    /// to hand out right now.
    fn acquire_latest_frame(&mut self) -> Option<Self::Frame<'_>>;
}
