use super::*;

/// Tests attaching a picture to a physician.
///
/// Expected: owner type and id are stored from the `Imageable` value
#[tokio::test]
async fn attaches_picture_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let physician = factory::create_physician(db).await?;

    let repo = PictureRepository::new(db);
    let picture = repo
        .create(CreatePictureParam {
            name: "Portrait".to_string(),
            url: "https://img.example.com/portrait.png".to_string(),
            owner: Imageable::Physician(physician.id),
        })
        .await?;

    assert_eq!(picture.imageable_type, "Physician");
    assert_eq!(picture.imageable_id, physician.id);
    assert_eq!(
        repo.get_for_owner(Imageable::Physician(physician.id)).await?,
        vec![picture]
    );

    Ok(())
}

/// Tests changing a picture's URL.
///
/// Expected: new URL, same name and owner
#[tokio::test]
async fn updates_url() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let physician = factory::create_physician(db).await?;
    let picture = factory::create_picture(db, "Physician", physician.id).await?;

    let updated = PictureRepository::new(db)
        .update(
            picture.id,
            UpdatePictureParam {
                url: Some("https://img.example.com/new.png".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.url, "https://img.example.com/new.png");
    assert_eq!(updated.name, picture.name);
    assert_eq!(updated.imageable_id, physician.id);

    Ok(())
}

/// Tests listing pictures of an owner without any.
///
/// Expected: empty vector
#[tokio::test]
async fn owner_without_pictures_has_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let physician = factory::create_physician(db).await?;

    let pictures = PictureRepository::new(db)
        .get_for_owner(Imageable::Physician(physician.id))
        .await?;

    assert!(pictures.is_empty());

    Ok(())
}
