use std::marker::PhantomData;

use sea_orm::{Condition, IdenStatic, Order};

use crate::error::pagination::{PageBoundary, PaginationError};

use super::{
    cursor::{normalize_page_size, page_count, PageCursor},
    direction::PageDirection,
    restrict,
    sort::{SortDirection, SortSpec},
    source::{KeysetEntity, PageQuery, RowSource},
};

/// Totals computed from a fresh count, not yet stored on the paginator.
#[derive(Debug, Clone, Copy)]
struct PageCount {
    page_size: u64,
    total_items: u64,
    total_pages: u64,
}

/// Keyset paginator for entity `E` reading from row source `S`.
///
/// Create one per listing request, configure it with [`filter`](Self::filter),
/// [`order_by`](Self::order_by) and [`page_size`](Self::page_size), load the first page with
/// [`current`](Self::current), then move with [`next`](Self::next) and
/// [`previous`](Self::previous). Navigation takes `&mut self`, so a paginator cannot be
/// driven from two tasks at once.
///
/// Every navigation call recounts the matching rows. A failed call leaves the cursor and
/// totals untouched.
///
/// # Example
///
/// ```rust,ignore
/// let mut pages = PhysicianRepository::new(&db)
///     .paginator()
///     .filter(Condition::all().add(physician::Column::Name.like("Dr.%")))
///     .order_by(physician::Column::Id, SortDirection::Asc)
///     .page_size(20);
///
/// let first = pages.current().await?;
/// let second = pages.next().await?;
/// ```
pub struct Paginator<E: KeysetEntity, S> {
    source: S,
    filter: Condition,
    sort: SortSpec<E::Column>,
    cursor: PageCursor,
    order_clause: Option<Vec<(E::Column, Order)>>,
    _entity: PhantomData<E>,
}

impl<E, S> Paginator<E, S>
where
    E: KeysetEntity,
    S: RowSource<E>,
{
    /// Creates a paginator with no filter, no sort order and the default page size.
    ///
    /// An identity column order must be added with [`order_by`](Self::order_by) before the
    /// first navigation call.
    pub fn new(source: S) -> Self {
        Self {
            source,
            filter: Condition::all(),
            sort: SortSpec::new(),
            cursor: PageCursor::default(),
            order_clause: None,
            _entity: PhantomData,
        }
    }

    /// Restricts pages to rows matching `filter`.
    pub fn filter(mut self, filter: Condition) -> Self {
        self.filter = filter;
        self
    }

    /// Adds (or redirects) a sort column. Columns are ordered by in the order added.
    pub fn order_by(mut self, column: E::Column, direction: SortDirection) -> Self {
        self.sort.set(column, direction);
        self.order_clause = None;
        self
    }

    /// Replaces the whole sort specification.
    pub fn sort(mut self, sort: SortSpec<E::Column>) -> Self {
        self.sort = sort;
        self.order_clause = None;
        self
    }

    /// Sets rows per page; zero selects the default of 10.
    pub fn page_size(mut self, page_size: u64) -> Self {
        self.cursor.page_size = normalize_page_size(page_size);
        self
    }

    /// Continues from a cursor previously taken with [`cursor`](Self::cursor).
    ///
    /// The filter and sort order must match those in effect when the cursor was taken.
    pub fn resume(mut self, cursor: PageCursor) -> Self {
        self.cursor = PageCursor {
            page_size: normalize_page_size(cursor.page_size),
            ..cursor
        };
        self
    }

    /// Snapshot of the cursor and totals.
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Zero-based index of the loaded page.
    pub fn page_index(&self) -> u64 {
        self.cursor.page_index
    }

    /// Page count from the most recent successful count.
    pub fn total_pages(&self) -> u64 {
        self.cursor.total_pages
    }

    /// Matching row count from the most recent successful count.
    pub fn total_items(&self) -> u64 {
        self.cursor.total_items
    }

    /// Recounts the matching rows and stores the totals.
    ///
    /// # Returns
    /// - `Ok(total_pages)` - `ceil(total_items / page_size)`, 0 when nothing matches
    /// - `Err(PaginationError::Storage)` - Count query failed
    pub async fn build_page_count(&mut self) -> Result<u64, PaginationError> {
        let count = self.count_pages().await?;
        self.store_count(count);
        Ok(count.total_pages)
    }

    /// Loads the current page without moving.
    ///
    /// The first call on a fresh paginator loads page 0. Later calls reload the rows between
    /// the stored first and last identity values.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Rows of the page, possibly empty
    /// - `Err(PaginationError::Configuration)` - Sort order lacks the identity column
    /// - `Err(PaginationError::Storage)` - Count or row query failed
    pub async fn current(&mut self) -> Result<Vec<E::Model>, PaginationError> {
        self.load(PageDirection::Current).await
    }

    /// Loads the page before the current one.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Rows of the previous page; the page index is decremented
    /// - `Err(PaginationError::Configuration)` - Sort order lacks the identity column
    /// - `Err(PaginationError::Boundary)` - Already on the first page
    /// - `Err(PaginationError::Storage)` - Count or row query failed
    pub async fn previous(&mut self) -> Result<Vec<E::Model>, PaginationError> {
        self.load(PageDirection::Previous).await
    }

    /// Loads the page after the current one.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Rows of the next page; the page index is incremented
    /// - `Err(PaginationError::Configuration)` - Sort order lacks the identity column
    /// - `Err(PaginationError::Boundary)` - Already on the last page
    /// - `Err(PaginationError::Storage)` - Count or row query failed
    pub async fn next(&mut self) -> Result<Vec<E::Model>, PaginationError> {
        self.load(PageDirection::Next).await
    }

    /// Dispatches to [`previous`](Self::previous), [`current`](Self::current) or
    /// [`next`](Self::next).
    pub async fn navigate(
        &mut self,
        direction: PageDirection,
    ) -> Result<Vec<E::Model>, PaginationError> {
        self.load(direction).await
    }

    /// Dispatches on a direction string: `"previous"`, `"current"` or `"next"`.
    ///
    /// Errors from the page load are returned unchanged.
    ///
    /// # Returns
    /// - `Err(PaginationError::InvalidArgument)` - Any other direction string; no query is
    ///   issued
    pub async fn get_page(&mut self, direction: &str) -> Result<Vec<E::Model>, PaginationError> {
        let direction = direction.parse::<PageDirection>()?;
        self.load(direction).await
    }

    async fn load(&mut self, direction: PageDirection) -> Result<Vec<E::Model>, PaginationError> {
        let identity_order = self.identity_order()?;
        let table = E::default().table_name();

        if direction == PageDirection::Previous && self.cursor.page_index == 0 {
            tracing::warn!("No page before page 0 of {}", table);
            return Err(PaginationError::Boundary(PageBoundary::First));
        }

        let count = self.count_pages().await?;

        if direction == PageDirection::Next && self.cursor.page_index + 1 >= count.total_pages {
            tracing::warn!(
                "No page after page {} of {} ({} pages)",
                self.cursor.page_index,
                table,
                count.total_pages
            );
            return Err(PaginationError::Boundary(PageBoundary::Last));
        }

        let restriction =
            restrict::id_restriction(E::id_column(), direction, identity_order, &self.cursor);
        let filter = restrict::conjoin(&self.filter, restriction);

        // Previous pages are read backwards from first_id and flipped into page order.
        let backwards = direction == PageDirection::Previous;
        let order = if backwards {
            self.sort.reversed().to_order()
        } else {
            self.order_clause().to_vec()
        };

        tracing::debug!(
            "Loading {} page of {} after page {} with {} LIMIT {}",
            direction,
            table,
            self.cursor.page_index,
            if backwards { self.sort.reversed() } else { self.sort.clone() },
            count.page_size
        );

        let mut rows = self
            .source
            .find_where(PageQuery {
                filter,
                order,
                limit: count.page_size,
            })
            .await?;

        if backwards {
            rows.reverse();
        }

        self.store_count(count);
        if let (Some(first), Some(last)) = (rows.first(), rows.last()) {
            self.cursor.first_id = E::row_id(first);
            self.cursor.last_id = E::row_id(last);
        }
        match direction {
            PageDirection::Previous => self.cursor.page_index -= 1,
            PageDirection::Next => self.cursor.page_index += 1,
            PageDirection::Current => {}
        }

        tracing::info!(
            "Loaded {} rows of {} on page {}/{} (ids {}..={})",
            rows.len(),
            table,
            self.cursor.page_index,
            self.cursor.total_pages,
            self.cursor.first_id,
            self.cursor.last_id
        );

        Ok(rows)
    }

    fn identity_order(&self) -> Result<SortDirection, PaginationError> {
        let column = E::id_column();
        self.sort
            .direction_of(column)
            .ok_or_else(|| PaginationError::Configuration {
                column: column.as_str().to_string(),
            })
    }

    fn order_clause(&mut self) -> &[(E::Column, Order)] {
        let sort = &self.sort;
        self.order_clause.get_or_insert_with(|| sort.to_order())
    }

    async fn count_pages(&self) -> Result<PageCount, PaginationError> {
        let page_size = normalize_page_size(self.cursor.page_size);
        tracing::debug!("Counting {} rows", E::default().table_name());
        let total_items = self.source.count_where(self.filter.clone()).await?;

        Ok(PageCount {
            page_size,
            total_items,
            total_pages: page_count(total_items, page_size),
        })
    }

    fn store_count(&mut self, count: PageCount) {
        self.cursor.page_size = count.page_size;
        self.cursor.total_items = count.total_items;
        self.cursor.total_pages = count.total_pages;
    }
}
