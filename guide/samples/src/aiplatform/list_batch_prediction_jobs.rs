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

// [START aiplatform_list_batch_prediction_jobs_sample]
use google_cloud_aiplatform_v1::client::JobService;
use google_cloud_gax::paginator::ItemPaginator;

pub async fn sample(client: &JobService, project_id: &str, location: &str) -> anyhow::Result<()> {
    let mut jobs = client
        .list_batch_prediction_jobs()
        .set_parent(format!("projects/{project_id}/locations/{location}"))
        .by_item();
    while let Some(job) = jobs.next().await.transpose()? {
        println!(" - {} ({}): {:?}", job.name, job.display_name, job.state);
    }
    Ok(())
}
// [END aiplatform_list_batch_prediction_jobs_sample]
