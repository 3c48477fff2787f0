use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided field changes and `updated_at` moves forward.
///
/// Expected: new name, unchanged introduction
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Physician)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let physician = factory::physician::PhysicianFactory::new(db)
        .introduction("Pediatrics")
        .build()
        .await?;

    let updated = PhysicianRepository::new(db)
        .update(
            physician.id,
            UpdatePhysicianParam {
                name: Some("Dr. Robbins".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Dr. Robbins");
    assert_eq!(updated.introduction, "Pediatrics");
    assert_eq!(updated.created_at, physician.created_at);
    assert!(updated.updated_at >= physician.updated_at);

    Ok(())
}

/// Tests updating a physician that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Physician)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PhysicianRepository::new(db)
        .update(
            7,
            UpdatePhysicianParam {
                introduction: Some("Orthopedics".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
