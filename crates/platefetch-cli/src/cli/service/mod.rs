//! Validation in front of the library.
//!
//! - [`fetch`] - [`fetch::FetchUrls`], checks the URL list and limit before
//!   dispatching.
//! - [`plate`] - parses raw index/code text and calls the codec.

pub mod fetch;
pub mod plate;
