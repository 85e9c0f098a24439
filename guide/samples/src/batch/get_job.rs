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

// [START batch_get_job]
use super::client::BatchService;
use super::model::Job;

pub async fn sample(client: &BatchService, name: &str) -> anyhow::Result<Job> {
    let job = client.get_job(name).await?;
    println!("{job:?}");
    Ok(job)
}
// [END batch_get_job]
