mod comment;
mod reaction;

pub use comment::*;
pub use reaction::*;
