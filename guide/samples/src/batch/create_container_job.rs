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

// [START batch_create_container_job]
use super::client::BatchService;
use super::model::{Container, Job, Runnable};

/// Creates a job that runs a `busybox` container in each task.
pub async fn sample(
    client: &BatchService,
    project_id: &str,
    region: &str,
    job_id: &str,
) -> anyhow::Result<Job> {
    let container = Container::new("gcr.io/google-containers/busybox")
        .set_entrypoint("/bin/sh")
        .set_commands(["-c", super::HELLO_COMMAND]);
    let runnable = Runnable::new().set_container(container);
    let job = client
        .create_job(
            super::parent(project_id, region),
            job_id,
            super::job_template(runnable, "container"),
        )
        .await?;
    println!("Created job {}", job.name);
    Ok(job)
}
// [END batch_create_container_job]
