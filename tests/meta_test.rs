use hcloud_domain::{Image, Meta, PageResults, Pagination};
use serde_json::json;

#[test]
fn test_parse_meta_empty_json() {
    let contents = [None, Some(json!("")), Some(json!({}))];
    for content in &contents {
        let result = Meta::parse_meta(content.as_ref());
        assert!(result.pagination.is_none());
    }
}

#[test]
fn test_parse_meta_json_no_pagination() {
    let content = json!({"meta": {}});
    let result = Meta::parse_meta(Some(&content));
    assert!(result.pagination.is_none());
}

#[test]
fn test_parse_meta_json_ok() {
    let content = json!({
        "meta": {
            "pagination": {
                "page": 2,
                "per_page": 10,
                "previous_page": 1,
                "next_page": 3,
                "last_page": 10,
                "total_entries": 100
            }
        }
    });

    let result = Meta::parse_meta(Some(&content));
    assert_eq!(
        result.pagination,
        Some(Pagination {
            page: 2,
            per_page: 10,
            previous_page: Some(1),
            next_page: Some(3),
            last_page: Some(10),
            total_entries: Some(100),
        })
    );
}

#[test]
fn test_image_list_page() {
    let response = json!({
        "images": [
            {"id": 4711, "name": "ubuntu-24.04", "type": "system", "status": "available"},
            {"id": 4712, "name": "debian-12", "type": "system", "status": "available"}
        ],
        "meta": {
            "pagination": {
                "page": 1,
                "per_page": 2,
                "previous_page": null,
                "next_page": 2,
                "last_page": 5,
                "total_entries": 10
            }
        }
    });

    let page: PageResults<Image> = PageResults::parse(&response, "images");

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].kind.as_deref(), Some(Image::TYPE_SYSTEM));
    assert_eq!(page.next_page(), Some(2));

    let pagination = page.meta.pagination.unwrap();
    assert_eq!(pagination.previous_page, None);
    assert_eq!(pagination.last_page, Some(5));
}
