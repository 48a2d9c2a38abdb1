#[cfg(feature = "dispatch")]
mod outcome;
#[cfg(feature = "plate")]
mod plate;

#[cfg(feature = "plate")]
pub use plate::*;
