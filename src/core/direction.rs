//! Sort direction and the click-to-toggle cycle

use serde::{Deserialize, Serialize};

use crate::config::SortIcons;

/// Direction of a sortable column
///
/// Each direction has a wire code used in the `dir` query parameter and a
/// successor used when the column header is clicked again:
///
/// | direction | code | next |
/// |---|---|---|
/// | `Ascending` | `asc` | `desc` |
/// | `Descending` | `desc` | `asc` |
/// | `Unset` | `""` | `asc` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    Unset,
}

impl SortDirection {
    /// Parse a `dir` parameter value
    ///
    /// Anything other than `asc` or `desc` is `Unset`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "asc" => SortDirection::Ascending,
            "desc" => SortDirection::Descending,
            _ => SortDirection::Unset,
        }
    }

    /// Wire code for the `dir` query parameter
    pub fn code(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
            SortDirection::Unset => "",
        }
    }

    /// Direction to request on the next click
    pub fn next(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending | SortDirection::Unset => SortDirection::Ascending,
        }
    }

    /// Icon shown next to the column title for this direction
    pub fn icon(self, icons: &SortIcons) -> &str {
        match self {
            SortDirection::Ascending => &icons.asc,
            SortDirection::Descending => &icons.desc,
            SortDirection::Unset => &icons.unset,
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SortDirection; 3] = [
        SortDirection::Ascending,
        SortDirection::Descending,
        SortDirection::Unset,
    ];

    #[test]
    fn test_codes_parse_back() {
        for dir in ALL {
            assert_eq!(SortDirection::from_code(dir.code()), dir);
        }
    }

    #[test]
    fn test_unknown_code_is_unset() {
        assert_eq!(SortDirection::from_code("up"), SortDirection::Unset);
        assert_eq!(SortDirection::from_code("DESC"), SortDirection::Unset);
    }

    #[test]
    fn test_cycle_is_closed() {
        // Every state reaches both asc and desc within two clicks
        for dir in ALL {
            let first = dir.next();
            let second = first.next();
            assert!(first != SortDirection::Unset);
            assert!([first, second].contains(&SortDirection::Ascending));
            assert!([first, second].contains(&SortDirection::Descending));
        }
    }

    #[test]
    fn test_icons() {
        let icons = SortIcons::default();
        assert_eq!(SortDirection::Ascending.icon(&icons), "&uarr;");
        assert_eq!(SortDirection::Descending.icon(&icons), "&darr;");
        assert_eq!(SortDirection::Unset.icon(&icons), "");
    }
}
