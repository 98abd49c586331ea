use alloc::string::String;

/// Decodes a key-square pattern from raw grayscale pixel data.
///
/// The contract is the native recognition library's: given the luminance
/// channel of an image, return a JSON-encoded description of the decoded
/// key square. Callers receive the string verbatim; this crate never
/// parses or rewrites it.
pub trait KeySquareDecoder {
    type Error: core::error::Error;

    fn decode_key_square(
        &self,
        width: u32,
        height: u32,
        bytes_per_row: usize,
        grayscale: &[u8],
    ) -> Result<String, Self::Error>;
}
