#![doc = include_str!("../README.md")]

#[cfg(feature = "dispatch")]
mod dispatch;
mod error;
#[cfg(feature = "plate")]
mod plate;
#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "dispatch")]
pub use crate::dispatch::*;
pub use crate::error::*;
#[cfg(feature = "plate")]
pub use crate::plate::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
