use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity::{Planets, planets::Column as PlanetCol},
    error::AppResult,
    models::Planet,
};

pub async fn list_planets(db: &DatabaseConnection) -> AppResult<Vec<Planet>> {
    let planets = Planets::find()
        .order_by_asc(PlanetCol::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Planet::from)
        .collect();
    Ok(planets)
}

pub async fn find_planet(db: &DatabaseConnection, id: i32) -> AppResult<Option<Planet>> {
    let planet = Planets::find_by_id(id).one(db).await?.map(Planet::from);
    Ok(planet)
}
