use chrono::{TimeZone, Utc};
use chrono_tz::America::Toronto;
use datadog_logs_cli::commands::search::{build_request, SearchArgs};

#[test]
fn one_hour_window_resolves_against_single_reference_instant() {
  // 2024-06-01 12:00:00 Toronto local.
  let reference = Toronto
    .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
    .single()
    .expect("reference instant")
    .with_timezone(&Utc);

  let args = SearchArgs {
    from: "-1h".to_string(),
    to: "now".to_string(),
    query: "@logger:worker".to_string(),
  };

  let request = build_request(&args, reference).expect("build request");
  let value = serde_json::to_value(request).expect("serialize request");
  assert_eq!(value["filter"]["from"], "2024-06-01T15:00:00Z");
  assert_eq!(value["filter"]["to"], "2024-06-01T16:00:00Z");
  assert_eq!(value["filter"]["query"], "@logger:worker");
  assert_eq!(value["sort"], "timestamp");
  assert_eq!(value["page"]["limit"], 200);
}

#[test]
fn invalid_from_token_maps_to_time_expression_code() {
  let reference = Utc
    .with_ymd_and_hms(2024, 6, 1, 16, 0, 0)
    .single()
    .expect("reference instant");

  let args = SearchArgs {
    from: "-0s".to_string(),
    to: "now".to_string(),
    query: String::new(),
  };

  let err = build_request(&args, reference).expect_err("expected invalid from token");
  assert_eq!(err.error_code, "INVALID_TIME_EXPRESSION");
  assert!(!err.ok);
  assert!(err.details.expect("details").contains("-0s"));
}
