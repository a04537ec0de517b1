use serde::Serialize;

pub const SORT_FIELD: &str = "timestamp";
pub const PAGE_LIMIT: u32 = 200;

#[derive(Debug, Serialize)]
pub struct SearchRequest {
  pub filter: SearchFilter,
  pub sort: &'static str,
  pub page: SearchPage,
}

#[derive(Debug, Serialize)]
pub struct SearchFilter {
  pub from: String,
  pub to: String,
  pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchPage {
  pub limit: u32,
}

impl SearchRequest {
  pub fn new(from: String, to: String, query: String) -> Self {
    Self {
      filter: SearchFilter { from, to, query },
      sort: SORT_FIELD,
      page: SearchPage { limit: PAGE_LIMIT },
    }
  }
}
