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

// [START bigquery_delete_dataset]
use google_cloud_bigquery_v2::client::DatasetService;

/// Deletes the dataset and any tables it contains.
pub async fn sample(
    client: &DatasetService,
    project_id: &str,
    dataset_id: &str,
) -> anyhow::Result<()> {
    client
        .delete_dataset()
        .set_project_id(project_id)
        .set_dataset_id(dataset_id)
        .set_delete_contents(true)
        .send()
        .await?;
    println!("Dataset {dataset_id} deleted.");
    Ok(())
}
// [END bigquery_delete_dataset]
