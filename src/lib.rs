#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod frame;
pub mod source;
pub mod types;

#[cfg(feature = "alloc")]
pub mod adapter;
#[cfg(feature = "alloc")]
pub mod decoder;
#[cfg(feature = "alloc")]
pub mod error;
#[cfg(feature = "mock")]
pub mod mock;
#[cfg(feature = "native")]
pub mod native;

// Re-exports
pub use frame::*;
pub use source::*;
pub use types::*;

#[cfg(feature = "alloc")]
pub use adapter::*;
#[cfg(feature = "alloc")]
pub use decoder::*;
#[cfg(feature = "alloc")]
pub use error::*;
