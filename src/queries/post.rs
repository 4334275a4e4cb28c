use crate::db::DbPool;
use crate::entities::{comment, media, post};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};

pub async fn find_post(pool: &DbPool, id: i64) -> Result<Option<post::Model>, DbErr> {
    post::Entity::find_by_id(id).one(pool).await
}

pub async fn list_comments(pool: &DbPool, post_id: i64) -> Result<Vec<comment::Model>, DbErr> {
    comment::Entity::find()
        .filter(comment::Column::PostId.eq(post_id))
        .all(pool)
        .await
}

pub async fn list_media(pool: &DbPool, post_id: i64) -> Result<Vec<media::Model>, DbErr> {
    media::Entity::find()
        .filter(media::Column::PostId.eq(post_id))
        .all(pool)
        .await
}
