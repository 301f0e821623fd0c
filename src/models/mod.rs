//! Data models

mod request;
mod session;
mod volunteer;
mod write_result;

pub use request::*;
pub use session::*;
pub use volunteer::*;
pub use write_result::*;
