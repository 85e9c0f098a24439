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

// [START aiplatform_create_batch_prediction_job_sample]
use google_cloud_aiplatform_v1::client::JobService;
use google_cloud_aiplatform_v1::model::{
    BatchDedicatedResources, BatchPredictionJob, GcsDestination, GcsSource, MachineSpec,
    batch_prediction_job::{InputConfig, OutputConfig},
};

/// Starts a batch prediction job reading and writing JSON Lines files in
/// Cloud Storage.
///
/// # Parameters
/// - `model`: the full model name, for example
///   `projects/my-project/locations/us-central1/models/1234`.
/// - `gcs_source_uri`: for example `gs://my-bucket/instances.jsonl`.
/// - `gcs_destination_prefix`: for example `gs://my-bucket/output/`.
pub async fn sample(
    client: &JobService,
    project_id: &str,
    location: &str,
    display_name: &str,
    model: &str,
    gcs_source_uri: &str,
    gcs_destination_prefix: &str,
) -> anyhow::Result<BatchPredictionJob> {
    let job = BatchPredictionJob::new()
        .set_display_name(display_name)
        .set_model(model)
        .set_input_config(
            InputConfig::new()
                .set_instances_format("jsonl")
                .set_gcs_source(GcsSource::new().set_uris([gcs_source_uri])),
        )
        .set_output_config(
            OutputConfig::new()
                .set_predictions_format("jsonl")
                .set_gcs_destination(
                    GcsDestination::new().set_output_uri_prefix(gcs_destination_prefix),
                ),
        )
        .set_dedicated_resources(
            BatchDedicatedResources::new()
                .set_machine_spec(MachineSpec::new().set_machine_type("n1-standard-4"))
                .set_starting_replica_count(1)
                .set_max_replica_count(1),
        );

    let job = client
        .create_batch_prediction_job()
        .set_parent(format!("projects/{project_id}/locations/{location}"))
        .set_batch_prediction_job(job)
        .send()
        .await?;
    println!("Created batch prediction job {}: {:?}", job.name, job.state);

    Ok(job)
}
// [END aiplatform_create_batch_prediction_job_sample]
