//! Core module containing sort state, anchors and query set sorting

pub mod anchor;
pub mod direction;
pub mod error;
pub mod field;
pub mod order;
pub mod params;
pub mod queryset;
pub mod request;

pub use anchor::{SortAnchor, render_sort_anchor};
pub use direction::SortDirection;
pub use error::SortError;
pub use field::FieldValue;
pub use order::OrderBy;
pub use params::QueryParams;
pub use queryset::{Model, Ordered, QuerySet, Sortable, sort_queryset};
pub use request::{SortRequest, get_order_by_from_request};
