//! Integration tests for sort anchors and sort state

use sortable::prelude::*;

fn anchor(query: &str, field: &str, default_sort: Option<&str>) -> SortAnchor {
    SortingConfig::default().sort_anchor(
        &QueryParams::parse(query),
        "/players",
        field,
        "Column",
        default_sort,
    )
}

#[test]
fn test_non_active_columns_start_ascending() {
    let queries = ["", "sort=name", "sort=name&dir=asc", "sort=name&dir=desc", "dir=desc"];

    for query in queries {
        for field in ["joined", "score", "team__name"] {
            let a = anchor(query, field, None);
            assert_eq!(a.next, SortDirection::Ascending, "{} / {}", query, field);
            assert_eq!(a.icon, "");
        }
    }
}

#[test]
fn test_clicking_cycles_through_directions() {
    let config = SortingConfig::default();
    let mut params = QueryParams::new();
    let mut seen = Vec::new();

    for _ in 0..4 {
        let a = config.sort_anchor(&params, "/players", "name", "Name", None);
        seen.push(a.next);
        let query = a.href.split_once('?').map(|(_, q)| q).unwrap_or_default();
        params = QueryParams::parse(query);
    }

    assert_eq!(
        seen,
        vec![
            SortDirection::Ascending,
            SortDirection::Descending,
            SortDirection::Ascending,
            SortDirection::Descending,
        ]
    );
}

#[test]
fn test_caller_params_untouched() {
    let params = QueryParams::parse("sort=name&dir=asc&page=4");
    let before = params.clone();

    let html = render_sort_anchor(&params, "/players", "name", "Name", None);

    assert_eq!(params, before);
    assert!(html.contains("page=4"));
}

#[test]
fn test_multi_valued_filters_survive_the_link() {
    let params = QueryParams::parse("tag=red&tag=blue&sort=name&dir=asc");

    let html = render_sort_anchor(&params, "/items", "name", "Name", None);

    assert!(html.contains("tag=red"));
    assert!(html.contains(r#"href="/items?tag=red&tag=blue&sort=name&dir=desc""#));
    assert_eq!(get_order_by_from_request(&params), "name");
}

#[test]
fn test_repeated_sort_params_collapse_to_one() {
    let params = QueryParams::parse("sort=joined&dir=desc&sort=name&dir=asc");

    // The last value is the active one, and the link carries a single pair
    assert_eq!(get_order_by_from_request(&params), "name");
    let a = SortingConfig::default().sort_anchor(&params, "/players", "name", "Name", None);
    assert_eq!(a.href, "/players?sort=name&dir=desc");
}

#[test]
fn test_default_sort_only_on_first_load() {
    let first = anchor("", "joined", Some("-joined"));
    assert_eq!(first.icon, "&darr;");
    assert_eq!(first.href, "/players?sort=joined&dir=asc");

    // Explicit dir wins over the default's sign
    let later = anchor("sort=joined&dir=asc", "joined", Some("-joined"));
    assert_eq!(later.icon, "&uarr;");
    assert_eq!(later.href, "/players?sort=joined&dir=desc");
}

#[test]
fn test_anchor_markup() {
    let html = render_sort_anchor(
        &QueryParams::parse("q=top+players"),
        "/players",
        "score",
        "Score",
        None,
    );

    assert_eq!(
        html,
        r#"<a href="/players?q=top+players&sort=score&dir=asc" title="Score" class="sort-column">Score</a>"#
    );
}

#[test]
fn test_order_by_from_request() {
    let order_by = |q: &str| get_order_by_from_request(&QueryParams::parse(q));

    assert_eq!(order_by("sort=name"), "");
    assert_eq!(order_by("sort=name&dir=desc"), "-name");
    assert_eq!(order_by("sort=name&dir=asc"), "name");
}

#[test]
fn test_anchor_link_round_trips_to_order_by() {
    let a = anchor("sort=score&dir=asc", "score", None);
    let query = a.href.split_once('?').map(|(_, q)| q).unwrap_or_default();

    assert_eq!(get_order_by_from_request(&QueryParams::parse(query)), "-score");
}
