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

// [START workflows_create_workflow]
use google_cloud_lro::Poller;
use google_cloud_workflows_v1::client::Workflows;
use google_cloud_workflows_v1::model::{Workflow, workflow::SourceCode};

/// A workflow that returns its `name` argument in a greeting.
pub const HELLO_WORKFLOW: &str = r###"main:
    params: [args]
    steps:
        - greet:
            return: ${"Hello " + default(map.get(args, "name"), "World")}
"###;

/// Creates a workflow from YAML or JSON `source` and waits for it to deploy.
pub async fn sample(
    client: &Workflows,
    project_id: &str,
    location_id: &str,
    workflow_id: &str,
    source: &str,
) -> anyhow::Result<Workflow> {
    let workflow = client
        .create_workflow()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_workflow_id(workflow_id)
        .set_workflow(
            Workflow::new()
                .set_labels([("created-by", "cloud-snippets")])
                .set_source_code(SourceCode::SourceContents(source.to_string())),
        )
        .poller()
        .until_done()
        .await?;
    println!("Created workflow {} in state {:?}", workflow.name, workflow.state);
    Ok(workflow)
}
// [END workflows_create_workflow]
