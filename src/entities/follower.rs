use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// Directed edge: user_from follows user_to. The composite primary key is the
// only uniqueness guard; (a,b) and (b,a) are distinct edges and self-follows
// are not rejected here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "Follower")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_from_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_to_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserFromId",
        to = "super::user::Column::Id"
    )]
    UserFrom,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserToId",
        to = "super::user::Column::Id"
    )]
    UserTo,
}

impl ActiveModelBehavior for ActiveModel {}
