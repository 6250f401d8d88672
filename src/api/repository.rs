use super::ApiClient;
use crate::error::ApiError;
use crate::models::{
    Comment, CommentId, CommentPage, CommentPatch, NewComment, Reaction, ReactionOutcome,
    ToggleReactionRequest,
};

/// Typed operations over the comments API.
///
/// No call retries; every failure is handed back to the caller.
#[allow(async_fn_in_trait)]
pub trait CommentRepository {
    async fn list_comments(&self) -> Result<CommentPage, ApiError>;

    async fn get_comment(&self, id: CommentId) -> Result<Comment, ApiError>;

    async fn create_comment(&self, comment: &NewComment) -> Result<Comment, ApiError>;

    async fn update_comment(&self, id: CommentId, patch: &CommentPatch)
        -> Result<Comment, ApiError>;

    async fn delete_comment(&self, id: CommentId) -> Result<(), ApiError>;

    /// Sends the previous state along with the new one so the server can
    /// apply the net delta in a single request.
    async fn toggle_reaction(
        &self,
        id: CommentId,
        action: Reaction,
        previous: Reaction,
    ) -> Result<ReactionOutcome, ApiError>;
}

#[inline]
fn comment_path(id: CommentId) -> String {
    format!("/comments/{id}/")
}

impl CommentRepository for ApiClient {
    #[tracing::instrument(skip(self))]
    async fn list_comments(&self) -> Result<CommentPage, ApiError> {
        self.get("/comments/").await.map_err(|x| {
            tracing::error!("Error fetching comments: {x}");
            x
        })
    }

    #[tracing::instrument(skip(self))]
    async fn get_comment(&self, id: CommentId) -> Result<Comment, ApiError> {
        self.get(&comment_path(id)).await.map_err(|x| {
            tracing::error!("Error fetching comment {id}: {x}");
            x.or_not_found(id)
        })
    }

    #[tracing::instrument(skip(self))]
    async fn create_comment(&self, comment: &NewComment) -> Result<Comment, ApiError> {
        self.post("/comments/", comment).await.map_err(|x| {
            tracing::error!("Error creating comment: {x}");
            x
        })
    }

    #[tracing::instrument(skip(self))]
    async fn update_comment(
        &self,
        id: CommentId,
        patch: &CommentPatch,
    ) -> Result<Comment, ApiError> {
        self.patch(&comment_path(id), patch).await.map_err(|x| {
            tracing::error!("Error updating comment: {x}");
            x.or_not_found(id)
        })
    }

    #[tracing::instrument(skip(self))]
    async fn delete_comment(&self, id: CommentId) -> Result<(), ApiError> {
        self.delete(&comment_path(id)).await.map_err(|x| {
            tracing::error!("Error deleting comment: {x}");
            x.or_not_found(id)
        })
    }

    #[tracing::instrument(skip(self))]
    async fn toggle_reaction(
        &self,
        id: CommentId,
        action: Reaction,
        previous: Reaction,
    ) -> Result<ReactionOutcome, ApiError> {
        let body = ToggleReactionRequest {
            action,
            previous_action: previous,
        };
        self.post(&format!("/comments/{id}/toggle-like/"), &body)
            .await
            .map_err(|x| {
                tracing::error!("Error toggling reaction: {x}");
                x.or_not_found(id)
            })
    }
}
