use super::*;

/// Tests creating a physician.
///
/// Verifies that the repository assigns an id, stores the given fields and stamps
/// both timestamps with the same instant.
///
/// Expected: Ok with the stored physician
#[tokio::test]
async fn creates_physician() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Physician)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PhysicianRepository::new(db);
    let physician = repo
        .create(CreatePhysicianParam {
            name: "Dr. Grey".to_string(),
            introduction: "General surgery".to_string(),
        })
        .await?;

    assert_eq!(physician.id, 1);
    assert_eq!(physician.name, "Dr. Grey");
    assert_eq!(physician.introduction, "General surgery");
    assert_eq!(physician.created_at, physician.updated_at);

    let stored = repo.get_by_id(physician.id).await?;
    assert_eq!(stored, Some(physician));

    Ok(())
}

/// Tests that consecutive inserts get increasing ids.
///
/// Expected: ids 1, 2, 3 in insertion order
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Physician)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PhysicianRepository::new(db);
    let mut ids = Vec::new();
    for name in ["Dr. Bailey", "Dr. Webber", "Dr. Shepherd"] {
        let physician = repo
            .create(CreatePhysicianParam {
                name: name.to_string(),
                introduction: String::new(),
            })
            .await?;
        ids.push(physician.id);
    }

    assert_eq!(ids, vec![1, 2, 3]);

    Ok(())
}
