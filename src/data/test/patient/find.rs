use super::*;

/// Tests finding patients by condition.
///
/// Expected: both Smiths in id order; the first Smith for the single lookup
#[tokio::test]
async fn finds_patients_where_condition_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Patient)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mut smiths = Vec::new();
    for name in ["Anna Smith", "Ben Jones", "Carl Smith"] {
        let patient = factory::patient::PatientFactory::new(db)
            .name(name)
            .build()
            .await?;
        if name.ends_with("Smith") {
            smiths.push(patient);
        }
    }
    let filter = Condition::all().add(Column::Name.like("%Smith"));

    let repo = PatientRepository::new(db);

    assert_eq!(repo.find_where(filter.clone()).await?, smiths);
    assert_eq!(repo.find_one_where(filter).await?, Some(smiths[0].clone()));
    assert!(repo
        .find_one_where(Condition::all().add(Column::Name.eq("Dan Brown")))
        .await?
        .is_none());

    Ok(())
}
