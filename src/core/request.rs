//! Reading sort state from a request

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::Uri;
use axum::http::request::Parts;

use crate::config::SortingConfig;
use crate::core::anchor::{DIR_PARAM, SORT_PARAM, SortAnchor};
use crate::core::direction::SortDirection;
use crate::core::params::QueryParams;

/// Sort specification requested by the query parameters
///
/// `dir` gates the result: without a (non-empty) `dir` the result is empty
/// whatever `sort` says. `dir=desc` prefixes the field with `-`; any other
/// value sorts ascending.
///
/// A request with `dir=desc` but no `sort` yields a bare `-`, which
/// [`sort_queryset`](crate::core::queryset::sort_queryset) rejects.
pub fn get_order_by_from_request(params: &QueryParams) -> String {
    let Some(dir) = params.get(DIR_PARAM).filter(|d| !d.is_empty()) else {
        return String::new();
    };

    let field = params.get(SORT_PARAM).unwrap_or_default();
    match SortDirection::from_code(dir) {
        SortDirection::Descending => format!("-{}", field),
        _ => field.to_string(),
    }
}

/// Path and query parameters of the current request
///
/// Extracting never fails. Use it in handlers that render sortable tables:
///
/// ```rust,ignore
/// async fn list_users(request: SortRequest) -> Html<String> {
///     let users = sort_queryset(users_queryset(), &request.order_by())?;
///     let header = request.sort_anchor("name", "Name", Some("-created_at"));
///     // ...
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    pub path: String,
    pub params: QueryParams,
}

impl SortRequest {
    pub fn new(path: impl Into<String>, params: QueryParams) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    /// Build from a request URI
    pub fn from_uri(uri: &Uri) -> Self {
        let params = uri.query().map(QueryParams::parse).unwrap_or_default();
        Self::new(uri.path(), params)
    }

    /// Sort specification of this request
    pub fn order_by(&self) -> String {
        get_order_by_from_request(&self.params)
    }

    /// Anchor for a column header, with the default configuration
    pub fn sort_anchor(
        &self,
        field_name: &str,
        title: &str,
        default_sort: Option<&str>,
    ) -> SortAnchor {
        self.sort_anchor_with(&SortingConfig::default(), field_name, title, default_sort)
    }

    /// Anchor for a column header
    pub fn sort_anchor_with(
        &self,
        config: &SortingConfig,
        field_name: &str,
        title: &str,
        default_sort: Option<&str>,
    ) -> SortAnchor {
        config.sort_anchor(&self.params, &self.path, field_name, title, default_sort)
    }
}

impl<S> FromRequestParts<S> for SortRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_uri(&parts.uri))
    }
}
