//! A barebones client for the portal's hosted tabular store.
#![deny(missing_docs)]

mod client;
pub use client::*;

mod artist;
pub use artist::*;

mod release;
pub use release::*;

mod track;
pub use track::*;

mod functions;
pub use functions::*;

mod request;
