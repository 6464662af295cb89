use serde_json::json;

use utilkit::array::{chunk, list_to_tree, tree_path, TreeOptions};
use utilkit::date::{format_duration, DateConfig, DateFormatter, DurationOutput, Locale};
use utilkit::object::{deep_clone, get, set};
use utilkit::strings::{template, truncate};
use utilkit::types::{is_empty, parse_json_str};
use utilkit::{AnyValue, UtilError};

#[test]
fn truncate_long_string_with_default_ellipsis() {
    assert_eq!(truncate("12345678901234567890", 10, None), "1234567...");
}

#[test]
fn chunk_ten_items_by_three() {
    let items: Vec<i32> = (1..=10).collect();
    assert_eq!(
        chunk(&items, 3),
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]
    );
    assert_eq!(chunk(&items, 0), vec![items.clone()]);
}

#[test]
fn format_duration_clock_template() {
    assert_eq!(
        format_duration(3_661_000, Some("HH:mm:ss")),
        DurationOutput::Text("01:01:01".to_string())
    );
    assert_eq!(format_duration(3_661_000, None).to_string(), "1 hour 1 minute 1 second");
    assert_eq!(format_duration(5_400_000, Some("H")), DurationOutput::Total(1.5));
}

#[test]
fn is_empty_scenarios() {
    assert!(is_empty(&AnyValue::from("   ")));
    assert!(!is_empty(&AnyValue::from(0)));
}

#[test]
fn parse_json_str_keeps_invalid_json_text() {
    assert_eq!(parse_json_str(Some("{invalid json}"), None), json!("{invalid json}"));
}

#[test]
fn deep_clone_strips_class_from_instances() {
    let user = AnyValue::instance("User", [("name", AnyValue::from("Ann"))]);
    let cloned = deep_clone(&user);
    assert_eq!(cloned, AnyValue::object([("name", AnyValue::from("Ann"))]));
}

#[test]
fn formatter_is_configured_explicitly() {
    let utc = DateFormatter::default();
    let shanghai = DateFormatter::new(DateConfig {
        locale: Locale::ZhCn,
        utc_offset_minutes: 8 * 60,
        ..DateConfig::default()
    });

    let instant = utc.parse("2024-03-01T16:30:00Z").unwrap();
    assert_eq!(utc.format(&instant, "YYYY-MM-DD HH:mm"), "2024-03-01 16:30");
    assert_eq!(shanghai.format(&instant, "YYYY-MM-DD HH:mm"), "2024-03-02 00:30");
    assert_eq!(utc.parse("not a date"), Err(UtilError::InvalidDate));
}

#[test]
fn tree_built_from_rows_and_searched() {
    let rows = vec![
        json!({"id": 1, "parentId": null, "name": "root"}),
        json!({"id": 2, "parentId": 1, "name": "docs"}),
        json!({"id": 3, "parentId": 2, "name": "guide"}),
    ];
    let options = TreeOptions::default();
    let tree = list_to_tree(&rows, &options);
    assert_eq!(tree.len(), 1);
    assert_eq!(get(&tree[0], "children[0].children[0].name"), Some(&json!("guide")));
    assert_eq!(
        tree_path(&tree, |n| n["name"] == "guide", &options),
        Some(vec![json!(1), json!(2), json!(3)])
    );
}

#[test]
fn template_reads_values_written_by_set() {
    let mut data = json!({});
    set(&mut data, "order.items[0].sku", json!("A-1")).unwrap();
    set(&mut data, "order.total", json!(9.5)).unwrap();
    assert_eq!(
        template("{{ order.items[0].sku }} costs ${order.total}", &data),
        "A-1 costs 9.5"
    );
}
