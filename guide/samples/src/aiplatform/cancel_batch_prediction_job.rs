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

// [START aiplatform_cancel_batch_prediction_job_sample]
use google_cloud_aiplatform_v1::client::JobService;

/// Requests cancellation. The job moves to `CANCELLED` asynchronously.
pub async fn sample(client: &JobService, name: &str) -> anyhow::Result<()> {
    client
        .cancel_batch_prediction_job()
        .set_name(name)
        .send()
        .await?;
    println!("Cancellation requested for {name}");
    Ok(())
}
// [END aiplatform_cancel_batch_prediction_job_sample]
