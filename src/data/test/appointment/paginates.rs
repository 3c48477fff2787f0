use super::*;

/// Tests paging through one physician's appointments newest first.
///
/// Verifies that every matching appointment is seen exactly once going forward and
/// that walking back restores each earlier page.
///
/// Expected: forward pages cover `ids_where` reversed; backward pages match the forward ones
#[tokio::test]
async fn walks_physician_appointments_descending() -> Result<(), PaginationError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let booked = factory::create_physician(db).await?;
    let other = factory::create_physician(db).await?;
    let patient = factory::create_patient(db).await?;
    for i in 1..=23 {
        let physician_id = if i % 3 == 1 { other.id } else { booked.id };
        factory::create_appointment(db, physician_id, patient.id).await?;
    }
    let filter = Condition::all().add(Column::PhysicianId.eq(booked.id));
    let ids = |rows: Vec<entity::appointment::Model>| rows.iter().map(|a| a.id).collect::<Vec<_>>();

    let repo = AppointmentRepository::new(db);
    let mut expected = repo.ids_where(filter.clone()).await?;
    expected.reverse();

    let mut pages = repo
        .paginator()
        .filter(filter)
        .order_by(Column::Id, SortDirection::Desc)
        .page_size(4);

    let mut forward = vec![ids(pages.current().await?)];
    loop {
        match pages.next().await {
            Ok(rows) => forward.push(ids(rows)),
            Err(PaginationError::Boundary(PageBoundary::Last)) => break,
            Err(e) => return Err(e),
        }
    }

    assert_eq!(forward.concat(), expected);
    assert_eq!(expected.len(), 15);
    assert_eq!(pages.total_pages(), 4);
    assert_eq!(forward[0], vec![23, 21, 20, 18]);

    for index in (0..forward.len() - 1).rev() {
        assert_eq!(ids(pages.previous().await?), forward[index]);
    }
    assert!(matches!(
        pages.previous().await,
        Err(PaginationError::Boundary(PageBoundary::First))
    ));

    Ok(())
}
