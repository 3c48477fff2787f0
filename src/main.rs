use clinic_records::{
    config::Config,
    data::physician::PhysicianRepository,
    error::{pagination::PaginationError, AppError},
    pagination::SortDirection,
    startup,
};

/// Prints every page of physicians as one JSON line per page.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    startup::init_tracing(&config)?;

    let db = startup::connect_to_database(&config).await?;

    let mut pages = PhysicianRepository::new(&db)
        .paginator()
        .order_by(entity::physician::Column::Id, SortDirection::Asc)
        .page_size(config.page_size);

    let mut rows = pages.current().await?;
    tracing::info!(
        "Listing {} physicians over {} pages",
        pages.total_items(),
        pages.total_pages()
    );

    loop {
        let page = serde_json::json!({
            "cursor": pages.cursor(),
            "rows": rows,
        });
        println!("{}", serde_json::to_string(&page)?);

        rows = match pages.next().await {
            Ok(rows) => rows,
            Err(PaginationError::Boundary(_)) => break,
            Err(e) => return Err(e.into()),
        };
    }

    Ok(())
}
