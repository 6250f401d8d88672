mod add_comment;
mod avatar;
mod comment_card;
mod comment_section;

pub use add_comment::AddComment;
pub use avatar::Avatar;
pub use comment_card::CommentCard;
pub use comment_section::{refresh_list, CommentSection};
