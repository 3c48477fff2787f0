use super::*;

/// Tests looking up a physician that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn get_by_id_returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Physician)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PhysicianRepository::new(db).get_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests looking up several physicians by id.
///
/// Verifies that unknown ids are skipped and results come back ordered by id
/// regardless of the order requested.
///
/// Expected: physicians 2 and 4
#[tokio::test]
async fn get_by_ids_skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Physician)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_physicians(db, 5).await?;

    let repo = PhysicianRepository::new(db);
    let found = repo.get_by_ids(&[4, 99, 2]).await?;
    let empty = repo.get_by_ids(&[]).await?;

    let ids: Vec<i32> = found.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 4]);
    assert!(empty.is_empty());

    Ok(())
}

/// Tests the first and last `n` helpers.
///
/// Expected: first(3) is [1, 2, 3], last(2) is [6, 5]
#[tokio::test]
async fn first_and_last_take_from_both_ends() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Physician)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_physicians(db, 6).await?;

    let repo = PhysicianRepository::new(db);
    let first: Vec<i32> = repo.first(3).await?.iter().map(|p| p.id).collect();
    let last: Vec<i32> = repo.last(2).await?.iter().map(|p| p.id).collect();

    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(last, vec![6, 5]);

    Ok(())
}

/// Tests listing and counting every physician.
///
/// Expected: all 4 physicians in id order and a count of 4
#[tokio::test]
async fn all_and_count_cover_every_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Physician)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_physicians(db, 4).await?;

    let repo = PhysicianRepository::new(db);
    let all = repo.all().await?;

    assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(repo.count().await?, 4);

    Ok(())
}

/// Tests selecting only the ids of matching physicians.
///
/// Expected: ids of the two cardiologists
#[tokio::test]
async fn ids_where_returns_matching_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Physician)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for introduction in ["Cardiology", "Neurology", "Cardiology", "Radiology"] {
        factory::physician::PhysicianFactory::new(db)
            .introduction(introduction)
            .build()
            .await?;
    }

    let ids = PhysicianRepository::new(db)
        .ids_where(Condition::all().add(Column::Introduction.eq("Cardiology")))
        .await?;

    assert_eq!(ids, vec![1, 3]);

    Ok(())
}
