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

// [START compute_instances_list]
pub async fn sample(project_id: &str, zone: &str) -> anyhow::Result<()> {
    use google_cloud_compute_v1::client::Instances;
    use google_cloud_gax::paginator::ItemPaginator;

    let client = Instances::builder().with_tracing().build().await?;
    println!("Instances found in zone {zone}:");
    let mut instances = client
        .list()
        .set_project(project_id)
        .set_zone(zone)
        .by_item();
    while let Some(item) = instances.next().await.transpose()? {
        println!(
            " - {} ({})",
            item.name.unwrap_or_default(),
            item.machine_type.unwrap_or_default()
        );
    }
    Ok(())
}
// [END compute_instances_list]
