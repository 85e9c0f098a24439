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

// [START workflows_execute_without_arguments]
use crate::poll::{PollingPolicy, until_terminal};
use google_cloud_workflows_executions_v1::client::Executions;
use google_cloud_workflows_executions_v1::model::{Execution, execution::State};

/// Runs a workflow and waits for the execution to finish.
///
/// Returns the execution result on success. Executions that fail, are
/// cancelled, or become unavailable return an error with the execution error
/// payload.
///
/// # Parameters
/// - `argument`: a JSON object passed to the workflow, or empty for none.
pub async fn sample(
    client: &Executions,
    project_id: &str,
    location_id: &str,
    workflow_id: &str,
    argument: &str,
    policy: &PollingPolicy,
) -> anyhow::Result<String> {
    let parent = super::workflow_name(project_id, location_id, workflow_id);
    let execution = client
        .create_execution()
        .set_parent(&parent)
        .set_execution(Execution::new().set_argument(argument))
        .send()
        .await?;
    println!("Created execution {}", execution.name);

    let name = execution.name.clone();
    let execution = until_terminal(policy, execution, || {
        client.get_execution().set_name(&name).send()
    })
    .await?;

    match execution.state {
        State::Succeeded => {
            println!("Execution finished with result: {}", execution.result);
            Ok(execution.result)
        }
        state => {
            let payload = execution
                .error
                .as_ref()
                .map(|e| e.payload.as_str())
                .unwrap_or_default();
            Err(anyhow::anyhow!(
                "execution {name} finished in state {state:?}: {payload}"
            ))
        }
    }
}
// [END workflows_execute_without_arguments]
