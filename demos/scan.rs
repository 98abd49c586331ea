use read_keysqr::adapter::{NO_FRAME_JSON, read_key_square_json, read_latest_key_square_json};
use read_keysqr::frame::RawFrame;
use read_keysqr::mock::{MockDecoder, RampFrameSource};
use read_keysqr::types::Size;

fn main() {
    let size = Size {
        width: 640,
        height: 480,
    };
    let decoder = MockDecoder::new(r#"{"faces":[]}"#);

    // Indirect path: drain a source until it runs dry.
    let mut source = RampFrameSource::new(size, 3);
    loop {
        let json = read_latest_key_square_json(&mut source, &decoder)
            .expect("mock decoder cannot fail");
        if json == NO_FRAME_JSON {
            println!("source dry: {json}");
            break;
        }
        println!("decoded: {json}");
    }

    // Direct path: wrap a raw grayscale buffer (rows padded to 704 bytes).
    let buffer = vec![0u8; 704 * size.height as usize];
    let frame = RawFrame::grayscale(size, 704, &buffer);
    let json = read_key_square_json(&frame, &decoder).expect("mock decoder cannot fail");
    println!("raw buffer: {json}");
}
