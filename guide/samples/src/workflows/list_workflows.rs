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

// [START workflows_list_workflows]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_workflows_v1::client::Workflows;

pub async fn sample(client: &Workflows, project_id: &str, location_id: &str) -> anyhow::Result<()> {
    let mut items = client
        .list_workflows()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .by_item();
    println!("Workflows:");
    while let Some(workflow) = items.next().await.transpose()? {
        println!("\t{} ({:?})", workflow.name, workflow.state);
    }
    Ok(())
}
// [END workflows_list_workflows]
