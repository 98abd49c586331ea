use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=READ_KEYSQR_LIB_DIR");
    // Only the `native` feature links against the key-square library.
    if env::var_os("CARGO_FEATURE_NATIVE").is_none() {
        return;
    }
    if let Some(dir) = env::var_os("READ_KEYSQR_LIB_DIR") {
        println!(
            "cargo:rustc-link-search=native={}",
            PathBuf::from(dir).display()
        );
    }
    println!("cargo:rustc-link-lib=read-keysqr");
}
