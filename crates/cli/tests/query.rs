use datadog_logs_cli::query::{SearchRequest, PAGE_LIMIT, SORT_FIELD};

#[test]
fn request_serializes_expected_shape() {
  let request = SearchRequest::new(
    "2024-06-01T15:00:00Z".to_string(),
    "2024-06-01T16:00:00Z".to_string(),
    "@logger:worker".to_string(),
  );

  let value = serde_json::to_value(request).expect("serialize request");
  assert_eq!(value["filter"]["from"], "2024-06-01T15:00:00Z");
  assert_eq!(value["filter"]["to"], "2024-06-01T16:00:00Z");
  assert_eq!(value["filter"]["query"], "@logger:worker");
  assert_eq!(value["sort"], "timestamp");
  assert_eq!(value["page"]["limit"], 200);
}

#[test]
fn sort_and_page_limit_are_fixed_regardless_of_inputs() {
  assert_eq!(SORT_FIELD, "timestamp");
  assert_eq!(PAGE_LIMIT, 200);

  let request = SearchRequest::new("a".to_string(), "b".to_string(), String::new());
  let value = serde_json::to_value(request).expect("serialize request");
  assert_eq!(value["sort"], "timestamp");
  assert_eq!(value["page"]["limit"], 200);
  assert_eq!(value["filter"]["query"], "");
}
