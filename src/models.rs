//! Frontend Models
//!
//! Data structures matching the film API, plus the request/response
//! value objects the fetch layer works with.

use serde::{Deserialize, Serialize};

/// Film data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub film_id: u32,
    pub title: String,
    pub rental_rate: f64,
    pub rating: String,
    pub category: String,
    pub rental_count: u32,
}

/// Columns the backend accepts in the `sort` query parameter.
/// Rental rate and rating are display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Title,
    Category,
    RentalCount,
}

impl SortColumn {
    /// Wire name for the `sort` query parameter. The backend sorts
    /// categories by their `name` column.
    pub fn as_query(&self) -> &'static str {
        match self {
            SortColumn::Title => "title",
            SortColumn::Category => "name",
            SortColumn::RentalCount => "rental_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_query(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn toggled(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort state. `None` at the controller level means unsorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// Next sort state after a click on `column`'s header: toggle the
/// direction if the column is already active, otherwise sort by it
/// ascending.
pub fn toggle_sort(current: Option<Sort>, column: SortColumn) -> Sort {
    match current {
        Some(sort) if sort.column == column => Sort {
            column,
            direction: sort.direction.toggled(),
        },
        _ => Sort {
            column,
            direction: SortDirection::Ascending,
        },
    }
}

/// One page worth of request state, passed to the fetch function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
    pub sort: Option<Sort>,
}

impl PageRequest {
    /// Query string in the backend's expected shape. `sort` and `order`
    /// are always present, empty when no sort is active.
    pub fn query_string(&self) -> String {
        let (sort, order) = match self.sort {
            Some(s) => (s.column.as_query(), s.direction.as_query()),
            None => ("", ""),
        };
        format!(
            "page={}&limit={}&sort={}&order={}",
            self.page, self.page_size, sort, order
        )
    }
}

/// One page worth of response state, replaced wholesale on each fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    pub films: Vec<Film>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// Wire envelope (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilmListResponse {
    pub films: Vec<Film>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaginationMeta {
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    #[serde(rename = "totalResults")]
    pub total_results: u32,
}

impl From<FilmListResponse> for PageResponse {
    fn from(raw: FilmListResponse) -> Self {
        PageResponse {
            films: raw.films,
            total_pages: raw.pagination.total_pages,
            total_results: raw.pagination.total_results,
        }
    }
}

/// State of the in-flight fetch, driving the table placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Error(String),
}
