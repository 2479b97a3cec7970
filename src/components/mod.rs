//! UI Components
//!
//! Reusable Leptos components.

mod film_table;
mod pagination_bar;

pub use film_table::FilmTable;
pub use pagination_bar::Pagination;
