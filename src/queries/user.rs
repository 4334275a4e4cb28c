use crate::db::DbPool;
use crate::entities::{comment, follower, post, user};
use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait,
};

pub async fn find_user(pool: &DbPool, id: i64) -> Result<Option<user::Model>, DbErr> {
    user::Entity::find_by_id(id).one(pool).await
}

// Users that follow `user_id`: join User onto the edges pointing at them.
pub async fn list_followers(pool: &DbPool, user_id: i64) -> Result<Vec<user::Model>, DbErr> {
    user::Entity::find()
        .join_rev(JoinType::InnerJoin, follower::Relation::UserFrom.def())
        .filter(follower::Column::UserToId.eq(user_id))
        .all(pool)
        .await
}

// Users that `user_id` follows: same join through the opposite edge column.
pub async fn list_following(pool: &DbPool, user_id: i64) -> Result<Vec<user::Model>, DbErr> {
    user::Entity::find()
        .join_rev(JoinType::InnerJoin, follower::Relation::UserTo.def())
        .filter(follower::Column::UserFromId.eq(user_id))
        .all(pool)
        .await
}

pub async fn list_posts(pool: &DbPool, user_id: i64) -> Result<Vec<post::Model>, DbErr> {
    post::Entity::find()
        .filter(post::Column::UserId.eq(user_id))
        .all(pool)
        .await
}

pub async fn list_comments_by_author(
    pool: &DbPool,
    user_id: i64,
) -> Result<Vec<comment::Model>, DbErr> {
    comment::Entity::find()
        .filter(comment::Column::AuthorId.eq(user_id))
        .all(pool)
        .await
}
