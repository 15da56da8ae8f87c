//! headers/mod.rs
//! Public module export for the container header.
//!
//! Notes:
//! - Fixed-size header (224 bytes in v1) enables deterministic IO.
//! - The layout is a per-version table; parsing dispatches on the version field.
//! - The header is not authenticated. Nothing in it is trusted for key material;
//!   the payload's AEAD tag is the only integrity guarantee.

pub mod layout;
pub mod types;
pub mod encode;
pub mod decode;

pub use layout::*;
pub use types::*;
pub use encode::*;
pub use decode::*;
