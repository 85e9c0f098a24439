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

// [START cloudrun_create_service]
use google_cloud_lro::Poller;
use google_cloud_run_v2::client::Services;
use google_cloud_run_v2::model::{Container, RevisionTemplate, Service};

/// Deploys the sample `hello` container as a service.
///
/// Returns the URL of the service.
pub async fn sample(
    client: &Services,
    project_id: &str,
    location_id: &str,
    service_id: &str,
) -> anyhow::Result<String> {
    let container =
        Container::new().set_image("us-docker.pkg.dev/cloudrun/container/hello:latest");
    let service =
        Service::new().set_template(RevisionTemplate::new().set_containers([container]));

    let service = client
        .create_service()
        .set_parent(super::parent(project_id, location_id))
        .set_service_id(service_id)
        .set_service(service)
        .poller()
        .until_done()
        .await?;
    println!("Service {} is serving at {}", service.name, service.uri);
    Ok(service.uri)
}
// [END cloudrun_create_service]
