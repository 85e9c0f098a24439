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

// [START bigquery_query]
use super::format_row;
use crate::poll::{PollingPolicy, until_terminal};
use google_cloud_bigquery_v2::client::JobService;
use google_cloud_bigquery_v2::model::{DataFormatOptions, GetQueryResultsResponse, QueryRequest};
use google_cloud_wkt::Struct;

/// Runs a GoogleSQL query and returns the first page of results.
///
/// The service waits a few seconds for the query to finish. Longer queries
/// are polled with `policy`.
pub async fn sample(
    client: &JobService,
    project_id: &str,
    sql: &str,
    policy: &PollingPolicy,
) -> anyhow::Result<Vec<Struct>> {
    let response = client
        .query()
        .set_project_id(project_id)
        .set_query_request(
            QueryRequest::new()
                .set_query(sql)
                .set_use_legacy_sql(false)
                .set_timeout_ms(10_000_u32),
        )
        .send()
        .await?;

    let rows = if response.job_complete.unwrap_or(false) {
        response.rows
    } else {
        let Some(job) = response.job_reference else {
            anyhow::bail!("the query is not complete and has no job reference");
        };
        let location = job.location.unwrap_or_default();
        println!("Waiting for query job {}", job.job_id);
        let results = until_terminal(policy, GetQueryResultsResponse::new(), || {
            client
                .get_query_results()
                .set_project_id(&job.project_id)
                .set_job_id(&job.job_id)
                .set_location(&location)
                .set_format_options(DataFormatOptions::new().set_use_int64_timestamp(true))
                .send()
        })
        .await?;
        results.rows
    };

    println!("Query results:");
    rows.iter().for_each(|row| println!("{}", format_row(row)));
    Ok(rows)
}
// [END bigquery_query]
