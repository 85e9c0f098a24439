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

// [START batch_delete_job]
use super::client::BatchService;
use crate::poll::{PollingPolicy, until_terminal};

/// Deletes the job and waits until the deletion completes.
pub async fn sample(
    client: &BatchService,
    name: &str,
    policy: &PollingPolicy,
) -> anyhow::Result<()> {
    let operation = client.delete_job(name).await?;
    let operation = until_terminal(policy, operation.clone(), || {
        client.get_operation(&operation.name)
    })
    .await?;
    if let Some(error) = operation.error {
        anyhow::bail!("cannot delete job {name}: {} ({})", error.message, error.code);
    }
    println!("Deleted job {name}");
    Ok(())
}
// [END batch_delete_job]
