use std::collections::HashMap;

use crate::error::ApiError;
use crate::models::{Comment, CommentId, CommentPage};
use crate::view_model::{PendingToggle, ReactionButton, ReactionMachine};

/// How many comments are shown before the list is expanded.
pub const PREVIEW_LEN: usize = 3;

pub const LOAD_ERROR: &str = "Failed to load comments";

/// Issued by [`CommentList::begin_refresh`]; only the latest one is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// State behind the comment list view.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentList {
    items: Vec<Comment>,
    loading: bool,
    error: Option<String>,
    reveal_all: bool,
    issued: u64,
    // removed while a refresh was in flight
    removed: Vec<CommentId>,
    // kept here rather than in the cards so a remount cannot reset a pending toggle
    reactions: HashMap<CommentId, ReactionMachine>,
}

impl Default for CommentList {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentList {
    /// Starts in the loading state; the first fetch is issued on mount.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            reveal_all: false,
            issued: 0,
            removed: Vec::new(),
            reactions: HashMap::new(),
        }
    }

    #[inline]
    pub fn items(&self) -> &[Comment] {
        &self.items
    }

    #[inline]
    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.items.iter().find(|x| x.id == id)
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[inline]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[inline]
    pub fn reveal_all(&self) -> bool {
        self.reveal_all
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        RefreshTicket(self.issued)
    }

    /// Applies a list response. Returns `false` when a newer refresh was
    /// issued in the meantime and the response was dropped.
    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<CommentPage, ApiError>,
    ) -> bool {
        if ticket.0 != self.issued {
            tracing::debug!(
                "dropping superseded list response {} (latest {})",
                ticket.0,
                self.issued
            );
            return false;
        }

        match result {
            Ok(page) => {
                let removed = std::mem::take(&mut self.removed);
                self.items = page
                    .results
                    .into_iter()
                    .filter(|x| !removed.contains(&x.id))
                    .collect();
                let items = &self.items;
                self.reactions
                    .retain(|id, r| r.is_pending() || items.iter().any(|x| x.id == *id));
            }
            Err(_) => {
                self.removed.clear();
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Local removal after the server confirmed the delete.
    pub fn remove(&mut self, id: CommentId) -> bool {
        let before = self.items.len();
        self.items.retain(|x| x.id != id);
        if self.loading {
            self.removed.push(id);
        }
        self.reactions.remove(&id);
        self.items.len() != before
    }

    /// Reaction state for `id`; neutral until the first press.
    pub fn reaction(&self, id: CommentId) -> ReactionMachine {
        self.reactions.get(&id).copied().unwrap_or_default()
    }

    /// `None` while a toggle for `id` is still in flight.
    pub fn press_reaction(
        &mut self,
        id: CommentId,
        pressed: ReactionButton,
    ) -> Option<PendingToggle> {
        self.reactions.entry(id).or_default().press(pressed)
    }

    /// Commits the pending toggle for `id` and stores the server's count.
    pub fn complete_reaction(&mut self, id: CommentId, likes: i64) {
        if let Some(r) = self.reactions.get_mut(&id) {
            r.complete();
        }
        self.set_likes(id, likes);
    }

    pub fn abandon_reaction(&mut self, id: CommentId) {
        if let Some(r) = self.reactions.get_mut(&id) {
            r.abandon();
        }
    }

    pub fn set_likes(&mut self, id: CommentId, likes: i64) -> bool {
        match self.items.iter_mut().find(|x| x.id == id) {
            Some(comment) => {
                comment.likes = likes;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn toggle_reveal(&mut self) {
        self.reveal_all = !self.reveal_all;
    }

    pub fn visible(&self) -> &[Comment] {
        if self.reveal_all {
            &self.items
        } else {
            &self.items[..self.items.len().min(PREVIEW_LEN)]
        }
    }

    #[inline]
    pub fn has_more(&self) -> bool {
        self.items.len() > PREVIEW_LEN
    }

    pub fn reveal_label(&self) -> String {
        if self.reveal_all {
            "Show Less".to_string()
        } else {
            format!("Show All ({} comments)", self.items.len())
        }
    }
}
