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

// [START compute_firewall_create]
use google_cloud_compute_v1::client::Firewalls;
use google_cloud_compute_v1::model::{Firewall, firewall};
use google_cloud_lro::Poller;

/// Allows HTTP and HTTPS traffic into instances tagged `web`.
pub async fn sample(client: &Firewalls, project_id: &str, name: &str) -> anyhow::Result<()> {
    let rule = Firewall::new()
        .set_name(name)
        .set_description("Allow HTTP and HTTPS traffic to web servers.")
        .set_direction(firewall::Direction::Ingress)
        .set_network("global/networks/default")
        .set_priority(1000)
        .set_allowed([firewall::Allowed::new()
            .set_ip_protocol("tcp")
            .set_ports(["80", "443"])])
        .set_source_ranges(["0.0.0.0/0"])
        .set_target_tags(["web"]);

    let operation = client
        .insert()
        .set_project(project_id)
        .set_body(rule)
        .poller()
        .until_done()
        .await?
        .to_result()?;
    println!("Firewall rule {name} created: {operation:?}");

    Ok(())
}
// [END compute_firewall_create]
