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

use super::client::BatchService;
use super::model::{Job, State};
use crate::poll::{PollingPolicy, until_terminal};

/// Polls the job until it succeeds, fails, or is cancelled.
///
/// Returns an error unless the job succeeded.
pub async fn sample(
    client: &BatchService,
    name: &str,
    policy: &PollingPolicy,
) -> anyhow::Result<Job> {
    let query = || client.get_job(name);
    let job = query().await?;
    let job = until_terminal(policy, job, query).await?;
    let state = job.state();
    if state != State::Succeeded {
        let last_event = job
            .status
            .as_ref()
            .and_then(|s| s.status_events.last())
            .map(|e| e.description.as_str());
        anyhow::bail!(
            "job {name} ended in state {state:?}: {}",
            last_event.unwrap_or_default()
        );
    }
    println!("Job {name} succeeded");
    Ok(job)
}
