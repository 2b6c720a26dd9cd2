use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity::{Users, users::Column as UserCol},
    error::AppResult,
    models::User,
};

pub async fn list_users(db: &DatabaseConnection) -> AppResult<Vec<User>> {
    let users = Users::find()
        .order_by_asc(UserCol::Id)
        .all(db)
        .await?
        .into_iter()
        .map(User::from)
        .collect();
    Ok(users)
}
