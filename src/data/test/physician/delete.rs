use super::*;

/// Tests deleting a single physician.
///
/// Expected: 1 row deleted, then 0 for the same id
#[tokio::test]
async fn deletes_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Physician)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let physician = factory::create_physician(db).await?;

    let repo = PhysicianRepository::new(db);

    assert_eq!(repo.delete(physician.id).await?, 1);
    assert_eq!(repo.delete(physician.id).await?, 0);
    assert!(repo.get_by_id(physician.id).await?.is_none());

    Ok(())
}

/// Tests deleting several physicians by id.
///
/// Expected: only the listed physicians are removed
#[tokio::test]
async fn deletes_by_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Physician)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_physicians(db, 5).await?;

    let repo = PhysicianRepository::new(db);
    let deleted = repo.delete_by_ids(&[1, 3, 5]).await?;

    assert_eq!(deleted, 3);
    assert_eq!(repo.ids_where(Condition::all()).await?, vec![2, 4]);
    assert_eq!(repo.delete_by_ids(&[]).await?, 0);

    Ok(())
}

/// Tests deleting physicians by condition.
///
/// Expected: the matching physician is removed and the rest remain
#[tokio::test]
async fn deletes_where_condition_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Physician)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::physician::PhysicianFactory::new(db)
        .name("Dr. Yang")
        .build()
        .await?;
    factory::create_physicians(db, 2).await?;

    let repo = PhysicianRepository::new(db);
    let deleted = repo
        .delete_where(Condition::all().add(Column::Name.eq("Dr. Yang")))
        .await?;

    assert_eq!(deleted, 1);
    assert_eq!(repo.count().await?, 2);

    Ok(())
}

/// Tests that an empty condition is refused.
///
/// Verifies that nothing is deleted when no condition is given.
///
/// Expected: Err(DbErr::Custom) and all rows still present
#[tokio::test]
async fn refuses_delete_without_condition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Physician)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_physicians(db, 3).await?;

    let repo = PhysicianRepository::new(db);
    let result = repo.delete_where(Condition::all()).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));
    assert_eq!(repo.count().await?, 3);

    Ok(())
}
