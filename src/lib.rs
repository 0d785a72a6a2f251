//! # Sortable Columns
//!
//! Helpers for sortable table columns in server-rendered pages.
//!
//! ## Features
//!
//! - **Sort anchors**: column-header links that toggle `sort` / `dir` query parameters
//! - **Sort state**: read the requested sort specification from a request
//! - **Query set sorting**: native ordering for model fields, in-memory fallback for
//!   computed attributes
//! - **Axum integration**: [`SortRequest`](core::request::SortRequest) extractor and
//!   `IntoResponse` errors
//! - **Configuration**: icons and CSS class from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sortable::prelude::*;
//!
//! async fn list_players(request: SortRequest) -> Result<Html<String>, SortError> {
//!     let players = MemoryQuerySet::new(load_players());
//!     let players = sort_queryset(players, &request.order_by())?.into_records();
//!
//!     let header = request.sort_anchor("score", "Score", Some("-score"));
//!     Ok(Html(format!("<th>{}</th>{}", header, render_rows(&players))))
//! }
//! ```
//!
//! Sort specifications follow the usual query-engine convention: `field` is
//! ascending, `-field` descending and the empty string means no ordering.

pub mod config;
pub mod core;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        anchor::{SortAnchor, render_sort_anchor},
        direction::SortDirection,
        error::SortError,
        field::FieldValue,
        order::OrderBy,
        params::QueryParams,
        queryset::{Model, Ordered, QuerySet, Sortable, sort_queryset},
        request::{SortRequest, get_order_by_from_request},
    };

    // === Storage ===
    pub use crate::storage::MemoryQuerySet;

    // === Config ===
    pub use crate::config::{SortIcons, SortingConfig};

    // === Axum ===
    pub use axum::response::Html;
}
