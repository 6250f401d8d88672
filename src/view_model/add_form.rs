use crate::error::ValidationError;
use crate::models::NewComment;

/// Input state of the "Add a Comment" form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddCommentForm {
    text: String,
    submitting: bool,
}

impl AddCommentForm {
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn set_text<T: ToString + ?Sized>(&mut self, text: &T) {
        self.text = text.to_string();
    }

    #[inline]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[inline]
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.text.trim().is_empty()
    }

    /// Builds the payload and marks the form busy. Nothing should be sent
    /// when this returns an error.
    pub fn begin_submit(&mut self, author: &str) -> Result<NewComment, ValidationError> {
        if self.submitting {
            return Err(ValidationError::SubmissionPending);
        }
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        self.submitting = true;
        Ok(NewComment::new(author, text))
    }

    /// Clears the input only when the comment was stored.
    pub fn finish_submit(&mut self, stored: bool) {
        self.submitting = false;
        if stored {
            self.text.clear();
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Adding Comment..."
        } else {
            "Add Comment"
        }
    }
}
