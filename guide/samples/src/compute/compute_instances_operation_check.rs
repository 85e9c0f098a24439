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

// [START compute_instances_operation_check]
use crate::poll::{PollingPolicy, until_terminal};
use google_cloud_compute_v1::client::{Instances, ZoneOperations};
use google_cloud_compute_v1::model::{
    AttachedDisk, AttachedDiskInitializeParams, Instance, NetworkInterface,
};

pub async fn sample(
    client: &Instances,
    operations: &ZoneOperations,
    project_id: &str,
    zone: &str,
    name: &str,
    policy: &PollingPolicy,
) -> anyhow::Result<()> {
    let instance = Instance::new()
        .set_machine_type(format!("zones/{zone}/machineTypes/f1-micro"))
        .set_name(name)
        .set_labels([("source", "compute_instances_operation_check")])
        .set_disks([AttachedDisk::new()
            .set_initialize_params(
                AttachedDiskInitializeParams::new()
                    .set_source_image("projects/cos-cloud/global/images/family/cos-stable"),
            )
            .set_boot(true)
            .set_auto_delete(true)])
        .set_network_interfaces([NetworkInterface::new().set_network("global/networks/default")]);

    // Start the operation without waiting for it to complete. In most cases
    // `.poller().until_done()` is simpler.
    let operation = client
        .insert()
        .set_project(project_id)
        .set_zone(zone)
        .set_body(instance)
        .send()
        .await?;
    let Some(operation_name) = operation.name.clone() else {
        anyhow::bail!("the operation name should be set, operation={operation:?}");
    };
    println!("Started operation {operation_name}");

    let operation = until_terminal(policy, operation, || {
        operations
            .get()
            .set_project(project_id)
            .set_zone(zone)
            .set_operation(&operation_name)
            .send()
    })
    .await?;
    println!("Operation {operation_name} finished: {operation:?}");

    if let Err(error) = operation.to_result() {
        anyhow::bail!("instance creation failed: {error:?}");
    }
    println!("Instance {name} created");

    Ok(())
}
// [END compute_instances_operation_check]
