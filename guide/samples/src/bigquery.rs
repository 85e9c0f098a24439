// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! BigQuery snippets.

use crate::poll::Terminal;
use google_cloud_bigquery_v2::model::GetQueryResultsResponse;

pub mod create_dataset;
pub mod delete_dataset;
pub mod list_datasets;
pub mod query;

impl Terminal for GetQueryResultsResponse {
    fn is_terminal(&self) -> bool {
        self.job_complete.unwrap_or(false)
    }
}

/// Formats a row in the BigQuery wire format (`{"f": [{"v": ...}, ...]}`)
/// as comma separated values.
pub fn format_row(row: &google_cloud_wkt::Struct) -> String {
    row.get("f")
        .and_then(|f| f.as_array())
        .into_iter()
        .flatten()
        .map(|cell| match cell.get("v") {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => "NULL".to_string(),
            Some(v) => v.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
