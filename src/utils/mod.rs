mod avatar;
pub mod notify;

pub use avatar::{avatar_color, initials};
