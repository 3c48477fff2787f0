use std::{fmt, str::FromStr};

use sea_orm::{ColumnTrait, Order};
use serde::{Deserialize, Serialize};

use crate::error::pagination::PaginationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = PaginationError;

    /// Parses `asc` or `desc`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(PaginationError::InvalidArgument(format!(
                "Unknown sort direction '{}', expected asc or desc",
                s
            ))),
        }
    }
}

/// Ordered list of `(column, direction)` pairs rendered into ORDER BY.
///
/// Columns are rendered in the order they were added, so the same specification always
/// produces the same query. Adding a column that is already present replaces its direction
/// and keeps its position.
#[derive(Debug, Clone)]
pub struct SortSpec<C> {
    entries: Vec<(C, SortDirection)>,
}

impl<C: ColumnTrait> SortSpec<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends `column` or, if already present, replaces its direction.
    pub fn then(mut self, column: C, direction: SortDirection) -> Self {
        self.set(column, direction);
        self
    }

    pub fn set(&mut self, column: C, direction: SortDirection) {
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.as_str() == column.as_str())
        {
            Some(entry) => entry.1 = direction,
            None => self.entries.push((column, direction)),
        }
    }

    /// Parses `(column name, direction)` pairs such as `("name", "asc")`.
    ///
    /// Column names are the snake_case database names of the entity's columns.
    ///
    /// # Returns
    /// - `Ok(SortSpec)` - All pairs parsed, in input order
    /// - `Err(PaginationError::InvalidArgument)` - Unknown column or direction
    pub fn parse<'a, I>(pairs: I) -> Result<Self, PaginationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut spec = Self::new();
        for (name, direction) in pairs {
            let column = C::from_str(name).map_err(|_| {
                PaginationError::InvalidArgument(format!("Unknown sort column '{}'", name))
            })?;
            spec.set(column, direction.parse()?);
        }
        Ok(spec)
    }

    pub fn direction_of(&self, column: C) -> Option<SortDirection> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_str() == column.as_str())
            .map(|(_, direction)| *direction)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(C, SortDirection)> {
        self.entries.iter()
    }

    /// Same columns with every direction flipped.
    pub fn reversed(&self) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(column, direction)| (*column, direction.reverse()))
                .collect(),
        }
    }

    /// ORDER BY terms in the form SeaORM's `QueryOrder::order_by` takes.
    pub fn to_order(&self) -> Vec<(C, Order)> {
        self.entries
            .iter()
            .map(|(column, direction)| (*column, Order::from(*direction)))
            .collect()
    }
}

impl<C: ColumnTrait> Default for SortSpec<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ColumnTrait> fmt::Display for SortSpec<C> {
    /// Renders as `ORDER BY name ASC, id DESC` for logging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return Ok(());
        }
        f.write_str("ORDER BY ")?;
        for (i, (column, direction)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", column.as_str(), direction)?;
        }
        Ok(())
    }
}
