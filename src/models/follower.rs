use serde::{Deserialize, Serialize};

use crate::entities::follower;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowerResponse {
    pub user_from_id: i64,
    pub user_to_id: i64,
}

impl From<follower::Model> for FollowerResponse {
    fn from(edge: follower::Model) -> Self {
        FollowerResponse {
            user_from_id: edge.user_from_id,
            user_to_id: edge.user_to_id,
        }
    }
}
