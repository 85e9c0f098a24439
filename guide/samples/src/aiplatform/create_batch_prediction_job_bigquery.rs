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

// [START aiplatform_create_batch_prediction_job_bigquery_sample]
use google_cloud_aiplatform_v1::client::JobService;
use google_cloud_aiplatform_v1::model::{
    BatchPredictionJob, BigQueryDestination, BigQuerySource,
    batch_prediction_job::{InputConfig, OutputConfig},
};

/// Starts a batch prediction job reading from and writing to BigQuery.
///
/// # Parameters
/// - `bigquery_source_uri`: for example `bq://my-project.my_dataset.my_table`.
/// - `bigquery_destination_uri`: for example `bq://my-project`.
pub async fn sample(
    client: &JobService,
    project_id: &str,
    location: &str,
    display_name: &str,
    model: &str,
    bigquery_source_uri: &str,
    bigquery_destination_uri: &str,
) -> anyhow::Result<BatchPredictionJob> {
    let job = BatchPredictionJob::new()
        .set_display_name(display_name)
        .set_model(model)
        .set_input_config(
            InputConfig::new()
                .set_instances_format("bigquery")
                .set_bigquery_source(BigQuerySource::new().set_input_uri(bigquery_source_uri)),
        )
        .set_output_config(
            OutputConfig::new()
                .set_predictions_format("bigquery")
                .set_bigquery_destination(
                    BigQueryDestination::new().set_output_uri(bigquery_destination_uri),
                ),
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
// [END aiplatform_create_batch_prediction_job_bigquery_sample]
