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

use crate::poll::{PollingPolicy, until_terminal};
use google_cloud_aiplatform_v1::client::JobService;
use google_cloud_aiplatform_v1::model::{BatchPredictionJob, JobState};

/// Polls the job until it stops running.
///
/// Returns an error if the job did not succeed, at least partially.
pub async fn sample(
    client: &JobService,
    name: &str,
    policy: &PollingPolicy,
) -> anyhow::Result<BatchPredictionJob> {
    let query = || client.get_batch_prediction_job().set_name(name).send();
    let job = query().await?;
    let job = until_terminal(policy, job, query).await?;
    match job.state {
        JobState::Succeeded | JobState::PartiallySucceeded => {
            println!("Batch prediction job {name} finished: {:?}", job.state);
            Ok(job)
        }
        _ => Err(anyhow::anyhow!(
            "batch prediction job {name} ended in state {:?}, error={:?}",
            job.state,
            job.error
        )),
    }
}
