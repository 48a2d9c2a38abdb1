mod cursor;
mod dispatcher;
mod error;
mod interface;
mod outcome;
mod session;

pub use dispatcher::*;
pub use error::*;
pub use interface::*;
pub use outcome::*;
pub use session::*;
