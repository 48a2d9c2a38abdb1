mod block;
mod codec;
mod error;
mod index;
mod sequence;

pub use block::*;
pub use codec::*;
pub use error::*;
pub use index::*;
pub use sequence::*;
