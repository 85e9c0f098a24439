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

// [START compute_usage_report_set]
use google_cloud_compute_v1::client::Projects;
use google_cloud_compute_v1::model::UsageExportLocation;
use google_cloud_lro::Poller;

/// Sends the daily usage reports to `bucket_name`.
///
/// Without a `prefix` the service uses `usage_gce`.
pub async fn sample(
    client: &Projects,
    project_id: &str,
    bucket_name: &str,
    prefix: Option<&str>,
) -> anyhow::Result<()> {
    let location = UsageExportLocation::new().set_bucket_name(bucket_name);
    let location = prefix
        .into_iter()
        .fold(location, |l, p| l.set_report_name_prefix(p));
    let operation = client
        .set_usage_export_bucket()
        .set_project(project_id)
        .set_body(location)
        .poller()
        .until_done()
        .await?
        .to_result()?;
    println!(
        "Usage reports for {project_id} go to bucket {bucket_name} with prefix {}: {operation:?}",
        prefix.unwrap_or("usage_gce")
    );

    Ok(())
}
// [END compute_usage_report_set]
