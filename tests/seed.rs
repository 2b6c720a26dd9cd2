use sea_orm::{EntityTrait, PaginatorTrait};
use starwars_blog_api::{
    db::{create_orm_conn, run_migrations},
    entity::{People, Planets, Users},
    seed::{SeedReport, seed_all},
};

#[tokio::test]
async fn seeding_twice_does_not_duplicate_rows() -> anyhow::Result<()> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    // Migrations are idempotent as well.
    run_migrations(&orm).await?;

    let first = seed_all(&orm).await?;
    assert_eq!(
        first,
        SeedReport {
            users: 3,
            people: 3,
            planets: 3
        }
    );

    let second = seed_all(&orm).await?;
    assert_eq!(second, SeedReport::default());

    assert_eq!(Users::find().count(&orm).await?, 3);
    assert_eq!(People::find().count(&orm).await?, 3);
    assert_eq!(Planets::find().count(&orm).await?, 3);
    Ok(())
}
