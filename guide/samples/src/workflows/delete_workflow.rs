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

// [START workflows_delete_workflow]
use google_cloud_lro::Poller;
use google_cloud_workflows_v1::client::Workflows;

pub async fn sample(client: &Workflows, name: &str) -> anyhow::Result<()> {
    client
        .delete_workflow()
        .set_name(name)
        .poller()
        .until_done()
        .await?;
    println!("Deleted workflow {name}");
    Ok(())
}
// [END workflows_delete_workflow]
