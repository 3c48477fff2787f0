use super::*;

/// Tests loading a physician's appointments.
///
/// Expected: only the appointments booked with that physician, in id order
#[tokio::test]
async fn gets_appointments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let house = factory::create_physician(db).await?;
    let wilson = factory::create_physician(db).await?;
    let patient = factory::create_patient(db).await?;
    let first = factory::create_appointment(db, house.id, patient.id).await?;
    factory::create_appointment(db, wilson.id, patient.id).await?;
    let second = factory::create_appointment(db, house.id, patient.id).await?;

    let appointments = PhysicianRepository::new(db).get_appointments(house.id).await?;

    assert_eq!(appointments, vec![first, second]);

    Ok(())
}

/// Tests loading the patients of a physician through appointments.
///
/// Verifies that a patient with several appointments is listed once.
///
/// Expected: the two distinct patients, in id order
#[tokio::test]
async fn gets_distinct_patients() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let physician = factory::create_physician(db).await?;
    let other = factory::create_physician(db).await?;
    let patients = factory::create_patients(db, 3).await?;
    factory::create_appointment(db, physician.id, patients[1].id).await?;
    factory::create_appointment(db, physician.id, patients[0].id).await?;
    factory::create_appointment(db, physician.id, patients[1].id).await?;
    factory::create_appointment(db, other.id, patients[2].id).await?;

    let found = PhysicianRepository::new(db).get_patients(physician.id).await?;

    assert_eq!(found, vec![patients[0].clone(), patients[1].clone()]);

    Ok(())
}

/// Tests loading the pictures attached to a physician.
///
/// Verifies that pictures of other owners are excluded.
///
/// Expected: the physician's two pictures
#[tokio::test]
async fn gets_pictures() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let physician = factory::create_physician(db).await?;
    let other = factory::create_physician(db).await?;
    let portrait = factory::create_picture(db, "Physician", physician.id).await?;
    factory::create_picture(db, "Physician", other.id).await?;
    factory::create_picture(db, "Clinic", physician.id).await?;
    let badge = factory::create_picture(db, "Physician", physician.id).await?;

    let pictures = PhysicianRepository::new(db).get_pictures(physician.id).await?;

    assert_eq!(pictures, vec![portrait, badge]);

    Ok(())
}

/// Tests loading physicians together with their appointments.
///
/// Expected: each matching physician paired with its own appointments, including an
/// empty list for a physician without any
#[tokio::test]
async fn finds_with_appointments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let booked = factory::create_physician(db).await?;
    let idle = factory::create_physician(db).await?;
    let patient = factory::create_patient(db).await?;
    let appointment = factory::create_appointment(db, booked.id, patient.id).await?;

    let found = PhysicianRepository::new(db)
        .find_with_appointments(Condition::all())
        .await?;

    assert_eq!(found.len(), 2);
    assert_eq!(found[0], (booked, vec![appointment]));
    assert_eq!(found[1], (idle, vec![]));

    Ok(())
}
