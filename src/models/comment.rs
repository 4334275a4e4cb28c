use serde::{Deserialize, Serialize};

use crate::entities::comment;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub comment_text: String,
    pub author_id: i64,
    pub post_id: i64,
}

impl From<comment::Model> for CommentResponse {
    fn from(comment: comment::Model) -> Self {
        CommentResponse {
            id: comment.id,
            comment_text: comment.comment_text,
            author_id: comment.author_id,
            post_id: comment.post_id,
        }
    }
}
