use crate::models::CommentPatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Busy {
    Saving,
    Deleting,
}

/// Edit and delete controls of a single comment card. Saving and deleting
/// share one busy flag, so only one of them can be in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentEditor {
    editing: bool,
    draft: String,
    confirming_delete: bool,
    busy: Option<Busy>,
}

impl CommentEditor {
    #[inline]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    #[inline]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[inline]
    pub fn set_draft<T: ToString + ?Sized>(&mut self, draft: &T) {
        self.draft = draft.to_string();
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    #[inline]
    pub fn is_confirming_delete(&self) -> bool {
        self.confirming_delete
    }

    /// Enters edit mode seeded with the current text, or cancels it.
    pub fn toggle_editing(&mut self, current_text: &str) {
        if self.busy.is_some() {
            return;
        }
        self.editing = !self.editing;
        if self.editing {
            self.draft = current_text.to_string();
        }
    }

    #[inline]
    pub fn can_save(&self) -> bool {
        self.editing && self.busy.is_none() && !self.draft.trim().is_empty()
    }

    pub fn begin_save(&mut self) -> Option<CommentPatch> {
        if !self.can_save() {
            return None;
        }
        self.busy = Some(Busy::Saving);
        Some(CommentPatch::text(self.draft.trim()))
    }

    pub fn finish_save(&mut self, saved: bool) {
        self.busy = None;
        if saved {
            self.editing = false;
        }
    }

    pub fn request_delete(&mut self) {
        if self.busy.is_none() {
            self.confirming_delete = true;
        }
    }

    pub fn cancel_delete(&mut self) {
        if self.busy.is_none() {
            self.confirming_delete = false;
        }
    }

    /// Only valid after the user confirmed.
    pub fn begin_delete(&mut self) -> bool {
        if !self.confirming_delete || self.busy.is_some() {
            return false;
        }
        self.busy = Some(Busy::Deleting);
        true
    }

    pub fn finish_delete(&mut self, deleted: bool) {
        self.busy = None;
        if !deleted {
            self.confirming_delete = false;
        }
    }

    pub fn edit_label(&self) -> &'static str {
        if self.editing {
            "Cancel"
        } else {
            "Edit"
        }
    }

    pub fn save_label(&self) -> &'static str {
        match self.busy {
            Some(Busy::Saving) => "Saving...",
            _ => "Save",
        }
    }

    pub fn delete_label(&self) -> &'static str {
        match self.busy {
            Some(Busy::Deleting) => "Deleting...",
            _ => "Delete",
        }
    }
}
