use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait, sea_query::SimpleExpr,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    entity::{
        Favorites,
        favorites::{ActiveModel as FavoriteActive, Column as FavCol},
    },
    error::{AppError, AppResult},
    models::Favorite,
};

/// What a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    Person(i32),
}

impl FavoriteTarget {
    fn matches(self) -> SimpleExpr {
        match self {
            FavoriteTarget::Planet(id) => FavCol::PlanetId.eq(id),
            FavoriteTarget::Person(id) => FavCol::PeopleId.eq(id),
        }
    }

    fn planet_id(self) -> Option<i32> {
        match self {
            FavoriteTarget::Planet(id) => Some(id),
            FavoriteTarget::Person(_) => None,
        }
    }

    fn people_id(self) -> Option<i32> {
        match self {
            FavoriteTarget::Person(id) => Some(id),
            FavoriteTarget::Planet(_) => None,
        }
    }
}

pub async fn list_for_user(db: &DatabaseConnection, user_id: i32) -> AppResult<Vec<Favorite>> {
    let favorites = Favorites::find()
        .filter(FavCol::UserId.eq(user_id))
        .order_by_asc(FavCol::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Favorite::from)
        .collect();
    Ok(favorites)
}

/// Insert a favorite and commit right away.
///
/// Neither the user nor the target is checked for existence. A failed insert
/// rolls the transaction back and is reported as [`AppError::Persistence`].
pub async fn add_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    target: FavoriteTarget,
) -> AppResult<Favorite> {
    let txn = db.begin().await.map_err(AppError::Persistence)?;

    let inserted = FavoriteActive {
        id: NotSet,
        user_id: Set(user_id),
        planet_id: Set(target.planet_id()),
        people_id: Set(target.people_id()),
    }
    .insert(&txn)
    .await;

    let favorite = match inserted {
        Ok(model) => model,
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!(error = %rollback_err, "favorite rollback failed");
            }
            return Err(AppError::Persistence(err));
        }
    };

    txn.commit().await.map_err(AppError::Persistence)?;

    tracing::debug!(favorite_id = favorite.id, user_id, ?target, "favorite created");
    Ok(favorite.into())
}

/// Delete the first favorite of `user_id` pointing at `target`.
pub async fn remove_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    target: FavoriteTarget,
) -> AppResult<()> {
    let existing = Favorites::find()
        .filter(FavCol::UserId.eq(user_id))
        .filter(target.matches())
        .order_by_asc(FavCol::Id)
        .one(db)
        .await?;

    let Some(favorite) = existing else {
        return Err(AppError::NotFound("Favorite not found".into()));
    };

    let txn = db.begin().await?;
    let result = Favorites::delete_by_id(favorite.id).exec(&txn).await?;
    if result.rows_affected == 0 {
        // Removed by a concurrent request between lookup and delete.
        txn.rollback().await?;
        return Err(AppError::NotFound("Favorite not found".into()));
    }
    txn.commit().await?;

    tracing::debug!(favorite_id = favorite.id, user_id, ?target, "favorite deleted");
    Ok(())
}
