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

//! Vertex AI snippets.
//!
//! Vertex AI uses regional endpoints. Create the clients for these snippets
//! with `.with_endpoint(format!("https://{location}-aiplatform.googleapis.com"))`,
//! except for the `global` location.

use crate::poll::Terminal;
use google_cloud_aiplatform_v1::model::{BatchPredictionJob, JobState};

pub mod cancel_batch_prediction_job;
pub mod create_batch_prediction_job_bigquery;
pub mod create_batch_prediction_job_gcs;
pub mod delete_batch_prediction_job;
pub mod generate_content;
pub mod get_batch_prediction_job;
pub mod list_batch_prediction_jobs;
pub mod wait_batch_prediction_job;

/// Returns the regional endpoint for `location`.
pub fn endpoint(location: &str) -> String {
    match location {
        "global" => "https://aiplatform.googleapis.com".to_string(),
        _ => format!("https://{location}-aiplatform.googleapis.com"),
    }
}

impl Terminal for BatchPredictionJob {
    fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            JobState::Succeeded
                | JobState::PartiallySucceeded
                | JobState::Failed
                | JobState::Cancelled
                | JobState::Expired
        )
    }
}
