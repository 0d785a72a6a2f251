//! Sort-toggle anchors for column headers
//!
//! An anchor links back to the current page with `sort` set to the column's
//! field and `dir` set to the direction the next click should apply. The
//! active column also shows an icon for its current direction.
//!
//! Title and field name are inserted into the markup unescaped; escaping is
//! left to the page renderer.

use std::fmt;

use crate::config::SortingConfig;
use crate::core::direction::SortDirection;
use crate::core::params::QueryParams;

/// Query parameter holding the sort field
pub const SORT_PARAM: &str = "sort";

/// Query parameter holding the sort direction code
pub const DIR_PARAM: &str = "dir";

/// A computed sort anchor, rendered to markup through [`fmt::Display`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortAnchor {
    /// Link target: path plus `?query` (query omitted when empty)
    pub href: String,

    /// Column title
    pub title: String,

    /// Icon of the current direction, empty for inactive columns
    pub icon: String,

    /// Direction requested by the link
    pub next: SortDirection,

    /// CSS class of the anchor element
    pub css_class: String,
}

impl fmt::Display for SortAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<a href="{}" title="{}" class="{}">{}{}</a>"#,
            self.href, self.title, self.css_class, self.title, self.icon
        )
    }
}

impl SortingConfig {
    /// Compute the anchor for a column
    ///
    /// `default_sort` is a sort specification (e.g. `-created_at`) applied
    /// when the page is first loaded, i.e. when the request has no `sort`
    /// parameter. It also seeds the direction of the active column when
    /// `dir` is missing. An empty `default_sort` counts as none.
    pub fn sort_anchor(
        &self,
        params: &QueryParams,
        path: &str,
        field_name: &str,
        title: &str,
        default_sort: Option<&str>,
    ) -> SortAnchor {
        let default_sort = default_sort.filter(|s| !s.is_empty());

        let sort_by = match (params.get(SORT_PARAM), default_sort) {
            (Some(sort), _) => Some(sort),
            (None, Some(default)) => Some(default.strip_prefix('-').unwrap_or(default)),
            (None, None) => None,
        };

        let (icon, next) = if sort_by == Some(field_name) {
            let current = match (params.get(DIR_PARAM), default_sort) {
                (None, Some(default)) if default.starts_with('-') => SortDirection::Descending,
                (None, Some(_)) => SortDirection::Ascending,
                (dir, _) => SortDirection::from_code(dir.unwrap_or_default()),
            };
            (current.icon(&self.icons).to_string(), current.next())
        } else {
            (String::new(), SortDirection::Ascending)
        };

        let next_params = params
            .with(SORT_PARAM, field_name)
            .with(DIR_PARAM, next.code());
        let href = if next_params.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, next_params.urlencode())
        };

        tracing::trace!(field = field_name, next = %next, "rendered sort anchor");

        SortAnchor {
            href,
            title: title.to_string(),
            icon,
            next,
            css_class: self.css_class.clone(),
        }
    }

    /// Render the anchor markup for a column
    pub fn render_sort_anchor(
        &self,
        params: &QueryParams,
        path: &str,
        field_name: &str,
        title: &str,
        default_sort: Option<&str>,
    ) -> String {
        self.sort_anchor(params, path, field_name, title, default_sort)
            .to_string()
    }
}

/// Render the anchor markup for a column with the default configuration
///
/// # Example
/// ```
/// use sortable::core::anchor::render_sort_anchor;
/// use sortable::core::params::QueryParams;
///
/// let params = QueryParams::parse("sort=name&dir=asc");
/// let html = render_sort_anchor(&params, "/users", "name", "Name", None);
///
/// assert_eq!(
///     html,
///     r#"<a href="/users?sort=name&dir=desc" title="Name" class="sort-column">Name&uarr;</a>"#
/// );
/// ```
pub fn render_sort_anchor(
    params: &QueryParams,
    path: &str,
    field_name: &str,
    title: &str,
    default_sort: Option<&str>,
) -> String {
    SortingConfig::default().render_sort_anchor(params, path, field_name, title, default_sort)
}
