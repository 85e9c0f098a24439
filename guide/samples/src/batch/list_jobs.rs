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

// [START batch_list_jobs]
use super::client::BatchService;

/// Prints every job in the region, returning their names.
pub async fn sample(
    client: &BatchService,
    project_id: &str,
    region: &str,
) -> anyhow::Result<Vec<String>> {
    let parent = super::parent(project_id, region);
    let mut names = Vec::new();
    let mut page_token = String::new();
    println!("Jobs:");
    loop {
        let page = client.list_jobs(&parent, page_token).await?;
        for job in page.jobs {
            println!("\t{} ({:?})", job.name, job.state());
            names.push(job.name);
        }
        if page.next_page_token.is_empty() {
            break;
        }
        page_token = page.next_page_token;
    }
    Ok(names)
}
// [END batch_list_jobs]
