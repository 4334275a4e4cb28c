use serde::{Deserialize, Serialize};

use crate::entities::media::{self, MediaType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaResponse {
    pub id: i64,
    // serialized under the column name, as the enum's text value
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    pub post_id: i64,
}

impl From<media::Model> for MediaResponse {
    fn from(media: media::Model) -> Self {
        MediaResponse {
            id: media.id,
            media_type: media.media_type,
            url: media.url,
            post_id: media.post_id,
        }
    }
}
