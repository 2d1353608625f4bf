use super::*;

fn filtered() -> ListQuery {
    ListQuery {
        category: Some(Category::Leadership),
        reviewed: ReviewFilter::Pending,
        page: 2,
        limit: PageLimit::Ten,
        sort: None,
    }
}

#[test]
fn default_query_is_first_page_of_ten() {
    let query = ListQuery::default();
    assert_eq!(query.page, 1);
    assert_eq!(query.limit, PageLimit::Ten);
    assert_eq!(query.query_string(), "page=1&limit=10");
}

#[test]
fn query_string_encodes_filters_in_wire_order() {
    assert_eq!(filtered().query_string(), "category=Leadership&reviewed=false&page=2&limit=10");
}

#[test]
fn query_string_percent_encodes_spaces_and_sort_prefix() {
    let query = ListQuery {
        category: Some(Category::WorkEnvironment),
        sort: Some(SortOrder::NewestFirst),
        ..ListQuery::default()
    };
    assert_eq!(
        query.query_string(),
        "category=Work%20Environment&page=1&limit=10&sort=-submissionTime"
    );
}

#[test]
fn filter_changes_reset_page_to_one() {
    let base = filtered();
    assert_eq!(base.with_category(Some(Category::Growth)).page, 1);
    assert_eq!(base.with_reviewed(ReviewFilter::Reviewed).page, 1);
    assert_eq!(base.with_limit(PageLimit::Fifty).page, 1);
    assert_eq!(base.with_sort(Some(SortOrder::OldestFirst)).page, 1);
}

#[test]
fn page_change_preserves_filters() {
    let moved = filtered().with_page(3);
    assert_eq!(moved.page, 3);
    assert_eq!(moved.category, Some(Category::Leadership));
    assert_eq!(moved.reviewed, ReviewFilter::Pending);
}

#[test]
fn page_is_floored_at_one() {
    assert_eq!(filtered().with_page(0).page, 1);
}
