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

// [START cloudrun_delete_service]
use google_cloud_lro::Poller;
use google_cloud_run_v2::client::Services;

pub async fn sample(client: &Services, name: &str) -> anyhow::Result<()> {
    let service = client
        .delete_service()
        .set_name(name)
        .poller()
        .until_done()
        .await?;
    println!("Deleted service {}", service.name);
    Ok(())
}
// [END cloudrun_delete_service]
