//! A barebones client for the portal's hosted object store.
//!
//! Write-only: the portal uploads release assets and hands the resulting
//! public URLs downstream; it never reads objects back.
#![deny(missing_docs)]

mod client;
pub use client::*;

mod path;
pub use path::*;
