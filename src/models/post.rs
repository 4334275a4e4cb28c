use serde::{Deserialize, Serialize};

use crate::entities::post;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub user_id: i64,
}

impl From<post::Model> for PostResponse {
    fn from(post: post::Model) -> Self {
        PostResponse {
            id: post.id,
            user_id: post.user_id,
        }
    }
}
