use sea_orm::{ActiveValue::NotSet, ConnectionTrait, EntityTrait, PaginatorTrait, Set};

use crate::entity::{
    People, Planets, Users, people::ActiveModel as PersonActive,
    planets::ActiveModel as PlanetActive, users::ActiveModel as UserActive,
};

const USERS: [&str; 3] = ["user1", "user2", "user3"];

const PEOPLE: [(&str, &str, &str, &str); 3] = [
    ("Luke Skywalker", "172", "77", "male"),
    ("Leia Organa", "150", "49", "female"),
    ("Darth Vader", "202", "136", "male"),
];

const PLANETS: [(&str, &str, &str); 3] = [
    ("Tatooine", "arid", "desert"),
    ("Hoth", "frozen", "ice caves"),
    ("Dagobah", "murky", "swamp"),
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub people: usize,
    pub planets: usize,
}

/// Bulk-load the sample users, people and planets.
///
/// Each table is only filled when it is empty, so running the seeder twice
/// leaves the data unchanged.
pub async fn seed_all<C>(db: &C) -> anyhow::Result<SeedReport>
where
    C: ConnectionTrait,
{
    let report = SeedReport {
        users: seed_users(db).await?,
        people: seed_people(db).await?,
        planets: seed_planets(db).await?,
    };
    tracing::info!(?report, "seed completed");
    Ok(report)
}

async fn seed_users<C: ConnectionTrait>(db: &C) -> anyhow::Result<usize> {
    if Users::find().count(db).await? > 0 {
        tracing::info!("users already seeded");
        return Ok(0);
    }

    let rows = USERS.iter().map(|username| UserActive {
        id: NotSet,
        username: Set(username.to_string()),
    });
    Users::insert_many(rows).exec(db).await?;
    Ok(USERS.len())
}

async fn seed_people<C: ConnectionTrait>(db: &C) -> anyhow::Result<usize> {
    if People::find().count(db).await? > 0 {
        tracing::info!("people already seeded");
        return Ok(0);
    }

    let rows = PEOPLE
        .iter()
        .map(|(name, height, mass, gender)| PersonActive {
            id: NotSet,
            name: Set(name.to_string()),
            height: Set(height.to_string()),
            mass: Set(mass.to_string()),
            gender: Set(gender.to_string()),
        });
    People::insert_many(rows).exec(db).await?;
    Ok(PEOPLE.len())
}

async fn seed_planets<C: ConnectionTrait>(db: &C) -> anyhow::Result<usize> {
    if Planets::find().count(db).await? > 0 {
        tracing::info!("planets already seeded");
        return Ok(0);
    }

    let rows = PLANETS.iter().map(|(name, climate, terrain)| PlanetActive {
        id: NotSet,
        name: Set(name.to_string()),
        climate: Set(climate.to_string()),
        terrain: Set(terrain.to_string()),
    });
    Planets::insert_many(rows).exec(db).await?;
    Ok(PLANETS.len())
}
