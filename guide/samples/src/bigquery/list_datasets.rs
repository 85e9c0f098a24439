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

// [START bigquery_list_datasets]
use google_cloud_bigquery_v2::client::DatasetService;

pub async fn sample(client: &DatasetService, project_id: &str) -> anyhow::Result<Vec<String>> {
    let mut ids = Vec::new();
    let mut page_token = String::new();
    loop {
        let page = client
            .list_datasets()
            .set_project_id(project_id)
            .set_page_token(&page_token)
            .send()
            .await?;
        ids.extend(
            page.datasets
                .into_iter()
                .filter_map(|d| d.dataset_reference)
                .map(|r| r.dataset_id),
        );
        if page.next_page_token.is_empty() {
            break;
        }
        page_token = page.next_page_token;
    }

    if ids.is_empty() {
        println!("{project_id} does not contain any datasets.");
    } else {
        println!("Datasets in project {project_id}:");
        ids.iter().for_each(|id| println!("\t{id}"));
    }
    Ok(ids)
}
// [END bigquery_list_datasets]
