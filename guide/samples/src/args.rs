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

//! Command-line arguments for the `snippets` binary.

use crate::poll::PollingPolicy;
use anyhow::bail;
use clap::{Parser, Subcommand};
use humantime::parse_duration;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::filter::LevelFilter;

/// Run Google Cloud API snippets.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// The project used by the snippets.
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project: String,

    /// The region (or location) for regional resources.
    #[arg(long, env = "GOOGLE_CLOUD_REGION", default_value = "us-central1")]
    pub region: String,

    /// The zone for zonal resources. Must be in `--region`.
    #[arg(long, env = "GOOGLE_CLOUD_ZONE", default_value = "us-central1-a")]
    pub zone: String,

    /// The delay before the first poll of a long-running operation.
    #[arg(long, value_parser = parse_duration, default_value = "1s")]
    pub poll_interval: Duration,

    /// The maximum delay between polls.
    #[arg(long, value_parser = parse_duration, default_value = "30s")]
    pub max_poll_interval: Duration,

    /// Poll at a fixed interval instead of doubling the delay.
    #[arg(long, default_value_t = false)]
    pub fixed_interval: bool,

    /// Give up after this many polls.
    #[arg(long)]
    pub max_polls: Option<u32>,

    /// Log more details. Repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Validates the arguments after parsing.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.project.is_empty() {
            bail!("the project id cannot be empty")
        }
        let in_region = self
            .zone
            .strip_prefix(self.region.as_str())
            .is_some_and(|suffix| suffix.starts_with('-'));
        if !in_region {
            bail!("zone {} is not in region {}", self.zone, self.region)
        }
        if self.poll_interval.is_zero() {
            bail!("the poll interval must be greater than zero")
        }
        if self.poll_interval > self.max_poll_interval {
            bail!(
                "the poll interval ({:?}) exceeds the maximum poll interval ({:?})",
                self.poll_interval,
                self.max_poll_interval
            )
        }
        Ok(())
    }

    /// The polling policy for snippets that poll resources.
    pub fn polling_policy(&self) -> PollingPolicy {
        let policy = if self.fixed_interval {
            PollingPolicy::fixed(self.poll_interval)
        } else {
            PollingPolicy::doubling(self.poll_interval, self.max_poll_interval)
        };
        match self.max_polls {
            Some(limit) => policy.with_attempt_limit(limit),
            None => policy,
        }
    }

    /// The default log level, unless `RUST_LOG` overrides it.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// The services with snippets.
#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Vertex AI.
    #[command(subcommand)]
    Aiplatform(Aiplatform),
    /// Cloud Batch.
    #[command(subcommand)]
    Batch(Batch),
    /// BigQuery.
    #[command(subcommand)]
    Bigquery(Bigquery),
    /// Compute Engine.
    #[command(subcommand)]
    Compute(Compute),
    /// Sensitive Data Protection.
    #[command(subcommand)]
    Dlp(Dlp),
    /// Cloud Run.
    #[command(subcommand)]
    Run(Run),
    /// Speech-to-Text.
    #[command(subcommand)]
    Speech(Speech),
    /// Cloud Translation.
    #[command(subcommand)]
    Translate(Translate),
    /// Video Intelligence.
    #[command(subcommand)]
    Video(Video),
    /// Workflows.
    #[command(subcommand)]
    Workflows(Workflows),
}

#[derive(Clone, Debug, Subcommand)]
pub enum Aiplatform {
    CreateBatchPredictionJobGcs {
        display_name: String,
        /// The full model name, for example `publishers/google/models/gemini-2.0-flash-001`.
        model: String,
        gcs_source_uri: String,
        gcs_destination_prefix: String,
    },
    CreateBatchPredictionJobBigquery {
        display_name: String,
        model: String,
        /// For example `bq://project.dataset.table`.
        bigquery_source_uri: String,
        bigquery_destination_uri: String,
    },
    GetBatchPredictionJob {
        name: String,
    },
    ListBatchPredictionJobs,
    WaitBatchPredictionJob {
        name: String,
    },
    CancelBatchPredictionJob {
        name: String,
    },
    DeleteBatchPredictionJob {
        name: String,
    },
    GenerateContent {
        prompt: String,
        #[arg(long, default_value = "gemini-2.0-flash-001")]
        model: String,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum Batch {
    CreateScriptJob { job_id: String },
    CreateContainerJob { job_id: String },
    GetJob { job_id: String },
    ListJobs,
    DeleteJob { job_id: String },
    WaitJob { job_id: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum Bigquery {
    CreateDataset {
        dataset_id: String,
        #[arg(long, default_value = "US")]
        location: String,
    },
    ListDatasets,
    DeleteDataset {
        dataset_id: String,
    },
    Query {
        #[arg(default_value = DEFAULT_QUERY)]
        sql: String,
    },
}

const DEFAULT_QUERY: &str = "SELECT name, SUM(number) AS total \
FROM `bigquery-public-data.usa_names.usa_1910_2013` \
GROUP BY name ORDER BY total DESC LIMIT 10";

#[derive(Clone, Debug, Subcommand)]
pub enum Compute {
    InstancesCreate {
        name: String,
    },
    InstancesDelete {
        name: String,
    },
    InstancesList,
    InstancesListAll,
    InstancesOperationCheck {
        name: String,
    },
    FirewallCreate {
        name: String,
    },
    FirewallList,
    FirewallDelete {
        name: String,
    },
    UsageReportGet,
    UsageReportSet {
        bucket_name: String,
        prefix: Option<String>,
    },
    ImagesListPage {
        #[arg(default_value = "debian-cloud")]
        image_project: String,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum Dlp {
    InspectString {
        text: String,
        /// Defaults to `PHONE_NUMBER` and `EMAIL_ADDRESS`.
        info_types: Vec<String>,
    },
    DeidentifyWithMask {
        text: String,
        #[arg(long, default_value = "*")]
        masking_character: String,
        /// Zero masks all the characters.
        #[arg(long, default_value_t = 0)]
        number_to_mask: i32,
    },
    DeidentifyWithReplacement {
        text: String,
        #[arg(long, default_value = "[email-address]")]
        replacement: String,
    },
    DeidentifyWithInfoType {
        text: String,
    },
    ListInfoTypes {
        #[arg(default_value = "supported_by=INSPECT")]
        filter: String,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum Run {
    CreateJob { job_id: String },
    RunJob { job_id: String },
    DeleteJob { job_id: String },
    CreateService { service_id: String },
    DeleteService { service_id: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum Speech {
    TranscribeGcs {
        #[arg(default_value = "gs://cloud-samples-data/speech/brooklyn_bridge.flac")]
        uri: String,
    },
    TranscribeBatch {
        #[arg(default_value = "gs://cloud-samples-data/speech/hello.wav")]
        uri: String,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum Translate {
    TranslateText {
        text: String,
        #[arg(default_value = "fr")]
        target_language: String,
    },
    TranslateTextWithModel {
        text: String,
        source_language: String,
        target_language: String,
        #[arg(long, default_value = "general/nmt")]
        model_id: String,
    },
    DetectLanguage {
        text: String,
    },
    ListLanguages {
        #[arg(default_value = "en")]
        display_language: String,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum Video {
    AnalyzeLabels {
        #[arg(default_value = DEFAULT_VIDEO)]
        uri: String,
    },
    AnalyzeShots {
        #[arg(default_value = DEFAULT_VIDEO)]
        uri: String,
    },
    AnalyzeExplicitContent {
        #[arg(default_value = DEFAULT_VIDEO)]
        uri: String,
    },
}

const DEFAULT_VIDEO: &str = "gs://cloud-samples-data/video/cat.mp4";

#[derive(Clone, Debug, Subcommand)]
pub enum Workflows {
    CreateWorkflow {
        workflow_id: String,
        /// Read the workflow definition from this file. Defaults to a
        /// workflow that returns a greeting.
        #[arg(long)]
        source_file: Option<PathBuf>,
    },
    ListWorkflows,
    ExecuteWorkflow {
        workflow_id: String,
        /// A JSON object, for example `{"name": "Rust"}`.
        argument: Option<String>,
    },
    DeleteWorkflow {
        workflow_id: String,
    },
}
