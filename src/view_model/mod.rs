//! Browser-independent state behind the comment board views.
//!
//! Each type here is a plain value: the components keep it in a signal,
//! call a `begin_*`/`press` method before a request and the matching
//! `finish_*`/`complete` method once it settles.

mod add_form;
mod editor;
mod list;
mod reaction;

pub use add_form::AddCommentForm;
pub use editor::{Busy, CommentEditor};
pub use list::{CommentList, RefreshTicket, LOAD_ERROR, PREVIEW_LEN};
pub use reaction::{next_reaction, PendingToggle, ReactionButton, ReactionMachine};
