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

// [START compute_usage_report_get]
use google_cloud_compute_v1::client::Projects;
use google_cloud_compute_v1::model::UsageExportLocation;

const DEFAULT_PREFIX: &str = "usage_gce";

/// Returns where the daily usage reports go, or `None` if they are disabled.
///
/// The returned location always has a report name prefix, the service uses
/// `usage_gce` when none is configured.
pub async fn sample(
    client: &Projects,
    project_id: &str,
) -> anyhow::Result<Option<UsageExportLocation>> {
    let project = client.get().set_project(project_id).send().await?;
    let location = project.usage_export_location.as_ref();
    let bucket = location
        .and_then(|l| l.bucket_name.as_deref())
        .filter(|b| !b.is_empty());
    let Some(bucket) = bucket else {
        println!("Usage reports are disabled for {project_id}");
        return Ok(None);
    };
    let prefix = location
        .and_then(|l| l.report_name_prefix.as_deref())
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_PREFIX);
    println!("Usage reports for {project_id} go to bucket {bucket} with prefix {prefix}");

    Ok(Some(
        UsageExportLocation::new()
            .set_bucket_name(bucket)
            .set_report_name_prefix(prefix),
    ))
}
// [END compute_usage_report_get]
