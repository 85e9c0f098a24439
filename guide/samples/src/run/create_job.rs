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

// [START cloudrun_create_job]
use google_cloud_lro::Poller;
use google_cloud_run_v2::client::Jobs;
use google_cloud_run_v2::model::{Container, ExecutionTemplate, Job, TaskTemplate};

/// Creates a job running the sample job container.
pub async fn sample(
    client: &Jobs,
    project_id: &str,
    location_id: &str,
    job_id: &str,
) -> anyhow::Result<Job> {
    let container = Container::new().set_image("us-docker.pkg.dev/cloudrun/container/job:latest");
    let job = Job::new().set_template(
        ExecutionTemplate::new().set_template(TaskTemplate::new().set_containers([container])),
    );

    let job = client
        .create_job()
        .set_parent(super::parent(project_id, location_id))
        .set_job_id(job_id)
        .set_job(job)
        .poller()
        .until_done()
        .await?;
    println!("Created job {}", job.name);
    Ok(job)
}
// [END cloudrun_create_job]
