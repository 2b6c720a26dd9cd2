use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity::{People, people::Column as PeopleCol},
    error::AppResult,
    models::Person,
};

pub async fn list_people(db: &DatabaseConnection) -> AppResult<Vec<Person>> {
    let people = People::find()
        .order_by_asc(PeopleCol::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Person::from)
        .collect();
    Ok(people)
}

pub async fn find_person(db: &DatabaseConnection, id: i32) -> AppResult<Option<Person>> {
    let person = People::find_by_id(id).one(db).await?.map(Person::from);
    Ok(person)
}
