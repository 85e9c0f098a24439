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

use anyhow::Context;
use clap::Parser;
use cloud_snippets::args::{self, Args, Command};
use cloud_snippets::poll::PollingPolicy;
use cloud_snippets::{
    aiplatform, batch, bigquery, compute, dlp, run, speech, translate, video, workflows,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run_snippet(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("snippet failed: {e:#}");
            eprintln!("ERROR {e:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run_snippet(args: Args) -> anyhow::Result<()> {
    enable_tracing(&args)?;
    args.validate()?;
    tracing::info!("Configuration: {args:?}");

    let policy = args.polling_policy();
    match &args.command {
        Command::Aiplatform(command) => run_aiplatform(&args, command, &policy).await,
        Command::Batch(command) => run_batch(&args, command, &policy).await,
        Command::Bigquery(command) => run_bigquery(&args, command, &policy).await,
        Command::Compute(command) => run_compute(&args, command, &policy).await,
        Command::Dlp(command) => run_dlp(&args, command).await,
        Command::Run(command) => run_cloud_run(&args, command).await,
        Command::Speech(command) => run_speech(&args, command).await,
        Command::Translate(command) => run_translate(&args, command).await,
        Command::Video(command) => run_video(command).await,
        Command::Workflows(command) => run_workflows(&args, command, &policy).await,
    }
}

fn enable_tracing(args: &Args) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::builder()
        .with_default_directive(args.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

/// The full name of a regional resource in the configured project.
fn resource_name(args: &Args, collection: &str, id: &str) -> String {
    format!(
        "projects/{}/locations/{}/{collection}/{id}",
        args.project, args.region
    )
}

async fn run_aiplatform(
    args: &Args,
    command: &args::Aiplatform,
    policy: &PollingPolicy,
) -> anyhow::Result<()> {
    use args::Aiplatform as A;
    use google_cloud_aiplatform_v1::client::{JobService, PredictionService};

    let endpoint = aiplatform::endpoint(&args.region);
    let job_service = || {
        JobService::builder()
            .with_endpoint(endpoint.clone())
            .with_tracing()
            .build()
    };
    match command {
        A::CreateBatchPredictionJobGcs {
            display_name,
            model,
            gcs_source_uri,
            gcs_destination_prefix,
        } => {
            aiplatform::create_batch_prediction_job_gcs::sample(
                &job_service().await?,
                &args.project,
                &args.region,
                display_name,
                model,
                gcs_source_uri,
                gcs_destination_prefix,
            )
            .await?;
        }
        A::CreateBatchPredictionJobBigquery {
            display_name,
            model,
            bigquery_source_uri,
            bigquery_destination_uri,
        } => {
            aiplatform::create_batch_prediction_job_bigquery::sample(
                &job_service().await?,
                &args.project,
                &args.region,
                display_name,
                model,
                bigquery_source_uri,
                bigquery_destination_uri,
            )
            .await?;
        }
        A::GetBatchPredictionJob { name } => {
            let client = job_service().await?;
            aiplatform::get_batch_prediction_job::sample(&client, name).await?;
        }
        A::ListBatchPredictionJobs => {
            let client = job_service().await?;
            aiplatform::list_batch_prediction_jobs::sample(&client, &args.project, &args.region)
                .await?
        }
        A::WaitBatchPredictionJob { name } => {
            let client = job_service().await?;
            aiplatform::wait_batch_prediction_job::sample(&client, name, policy).await?;
        }
        A::CancelBatchPredictionJob { name } => {
            let client = job_service().await?;
            aiplatform::cancel_batch_prediction_job::sample(&client, name).await?
        }
        A::DeleteBatchPredictionJob { name } => {
            let client = job_service().await?;
            aiplatform::delete_batch_prediction_job::sample(&client, name).await?
        }
        A::GenerateContent { prompt, model } => {
            let client = PredictionService::builder()
                .with_endpoint(endpoint.clone())
                .with_tracing()
                .build()
                .await?;
            let (project, region) = (&args.project, &args.region);
            aiplatform::generate_content::sample(&client, project, region, model, prompt).await?;
        }
    }
    Ok(())
}

async fn run_batch(
    args: &Args,
    command: &args::Batch,
    policy: &PollingPolicy,
) -> anyhow::Result<()> {
    use args::Batch as B;
    use batch::client::BatchService;

    let client = BatchService::builder().with_tracing().build().await?;
    let project = &args.project;
    let region = &args.region;
    match command {
        B::CreateScriptJob { job_id } => {
            batch::create_script_job::sample(&client, project, region, job_id).await?;
        }
        B::CreateContainerJob { job_id } => {
            batch::create_container_job::sample(&client, project, region, job_id).await?;
        }
        B::GetJob { job_id } => {
            batch::get_job::sample(&client, &resource_name(args, "jobs", job_id)).await?;
        }
        B::ListJobs => {
            batch::list_jobs::sample(&client, project, region).await?;
        }
        B::DeleteJob { job_id } => {
            let name = resource_name(args, "jobs", job_id);
            batch::delete_job::sample(&client, &name, policy).await?;
        }
        B::WaitJob { job_id } => {
            let name = resource_name(args, "jobs", job_id);
            batch::wait_job::sample(&client, &name, policy).await?;
        }
    }
    Ok(())
}

async fn run_bigquery(
    args: &Args,
    command: &args::Bigquery,
    policy: &PollingPolicy,
) -> anyhow::Result<()> {
    use args::Bigquery as B;
    use google_cloud_bigquery_v2::client::{DatasetService, JobService};

    let project = &args.project;
    let datasets = || DatasetService::builder().with_tracing().build();
    match command {
        B::CreateDataset {
            dataset_id,
            location,
        } => {
            let client = datasets().await?;
            bigquery::create_dataset::sample(&client, project, dataset_id, location).await?;
        }
        B::ListDatasets => {
            bigquery::list_datasets::sample(&datasets().await?, project).await?;
        }
        B::DeleteDataset { dataset_id } => {
            bigquery::delete_dataset::sample(&datasets().await?, project, dataset_id).await?
        }
        B::Query { sql } => {
            let client = JobService::builder().with_tracing().build().await?;
            bigquery::query::sample(&client, project, sql, policy).await?;
        }
    }
    Ok(())
}

async fn run_compute(
    args: &Args,
    command: &args::Compute,
    policy: &PollingPolicy,
) -> anyhow::Result<()> {
    use args::Compute as C;
    use google_cloud_compute_v1::client::{Firewalls, Images, Instances, Projects, ZoneOperations};

    let project = &args.project;
    let zone = &args.zone;
    match command {
        C::InstancesCreate { name } => {
            let client = Instances::builder().with_tracing().build().await?;
            compute::compute_instances_create::sample(&client, project, zone, name).await
        }
        C::InstancesDelete { name } => {
            let client = Instances::builder().with_tracing().build().await?;
            compute::compute_instances_delete::sample(&client, project, zone, name).await
        }
        C::InstancesList => compute::compute_instances_list::sample(project, zone).await,
        C::InstancesListAll => {
            let client = Instances::builder().with_tracing().build().await?;
            compute::compute_instances_list_all::sample(&client, project).await
        }
        C::InstancesOperationCheck { name } => {
            let client = Instances::builder().with_tracing().build().await?;
            let operations = ZoneOperations::builder().with_tracing().build().await?;
            compute::compute_instances_operation_check::sample(
                &client,
                &operations,
                project,
                zone,
                name,
                policy,
            )
            .await
        }
        C::FirewallCreate { name } => {
            let client = Firewalls::builder().with_tracing().build().await?;
            compute::compute_firewall_create::sample(&client, project, name).await
        }
        C::FirewallList => {
            let client = Firewalls::builder().with_tracing().build().await?;
            compute::compute_firewall_list::sample(&client, project).await
        }
        C::FirewallDelete { name } => {
            let client = Firewalls::builder().with_tracing().build().await?;
            compute::compute_firewall_delete::sample(&client, project, name).await
        }
        C::UsageReportGet => {
            let client = Projects::builder().with_tracing().build().await?;
            compute::compute_usage_report_get::sample(&client, project).await?;
            Ok(())
        }
        C::UsageReportSet {
            bucket_name,
            prefix,
        } => {
            let client = Projects::builder().with_tracing().build().await?;
            compute::compute_usage_report_set::sample(
                &client,
                project,
                bucket_name,
                prefix.as_deref(),
            )
            .await
        }
        C::ImagesListPage { image_project } => {
            let client = Images::builder().with_tracing().build().await?;
            compute::compute_images_list_page::sample(&client, image_project).await
        }
    }
}

async fn run_dlp(args: &Args, command: &args::Dlp) -> anyhow::Result<()> {
    use args::Dlp as D;
    use google_cloud_privacy_dlp_v2::client::DlpService;

    let client = DlpService::builder().with_tracing().build().await?;
    let project = &args.project;
    match command {
        D::InspectString { text, info_types } => {
            dlp::inspect_string::sample(&client, project, text, info_types).await?;
        }
        D::DeidentifyWithMask {
            text,
            masking_character,
            number_to_mask,
        } => {
            dlp::deidentify_with_mask::sample(
                &client,
                project,
                text,
                masking_character,
                *number_to_mask,
            )
            .await?;
        }
        D::DeidentifyWithReplacement { text, replacement } => {
            dlp::deidentify_with_replacement::sample(&client, project, text, replacement).await?;
        }
        D::DeidentifyWithInfoType { text } => {
            dlp::deidentify_with_info_type::sample(&client, project, text).await?;
        }
        D::ListInfoTypes { filter } => dlp::list_info_types::sample(&client, filter).await?,
    }
    Ok(())
}

async fn run_cloud_run(args: &Args, command: &args::Run) -> anyhow::Result<()> {
    use args::Run as R;
    use google_cloud_run_v2::client::{Jobs, Services};

    let project = &args.project;
    let region = &args.region;
    match command {
        R::CreateJob { job_id } => {
            let client = Jobs::builder().with_tracing().build().await?;
            run::create_job::sample(&client, project, region, job_id).await?;
        }
        R::RunJob { job_id } => {
            let client = Jobs::builder().with_tracing().build().await?;
            run::run_job::sample(&client, &resource_name(args, "jobs", job_id)).await?;
        }
        R::DeleteJob { job_id } => {
            let client = Jobs::builder().with_tracing().build().await?;
            run::delete_job::sample(&client, &resource_name(args, "jobs", job_id)).await?;
        }
        R::CreateService { service_id } => {
            let client = Services::builder().with_tracing().build().await?;
            run::create_service::sample(&client, project, region, service_id).await?;
        }
        R::DeleteService { service_id } => {
            let client = Services::builder().with_tracing().build().await?;
            let name = resource_name(args, "services", service_id);
            run::delete_service::sample(&client, &name).await?;
        }
    }
    Ok(())
}

async fn run_speech(args: &Args, command: &args::Speech) -> anyhow::Result<()> {
    use args::Speech as S;
    use google_cloud_speech_v2::client::Speech;

    let client = Speech::builder().with_tracing().build().await?;
    match command {
        S::TranscribeGcs { uri } => {
            speech::transcribe_gcs::sample(&client, &args.project, uri).await?;
        }
        S::TranscribeBatch { uri } => {
            speech::transcribe_batch::sample(&client, &args.project, uri).await?;
        }
    }
    Ok(())
}

async fn run_translate(args: &Args, command: &args::Translate) -> anyhow::Result<()> {
    use args::Translate as T;
    use google_cloud_translation_v3::client::TranslationService;

    let client = TranslationService::builder().with_tracing().build().await?;
    let project = &args.project;
    match command {
        T::TranslateText {
            text,
            target_language,
        } => {
            translate::translate_text::sample(&client, project, text, target_language).await?;
        }
        T::TranslateTextWithModel {
            text,
            source_language,
            target_language,
            model_id,
        } => {
            translate::translate_text_with_model::sample(
                &client,
                project,
                &args.region,
                text,
                source_language,
                target_language,
                model_id,
            )
            .await?;
        }
        T::DetectLanguage { text } => {
            translate::detect_language::sample(&client, project, text).await?;
        }
        T::ListLanguages { display_language } => {
            translate::list_languages::sample(&client, project, display_language).await?
        }
    }
    Ok(())
}

async fn run_video(command: &args::Video) -> anyhow::Result<()> {
    use args::Video as V;
    use google_cloud_videointelligence_v1::client::VideoIntelligenceService;

    let client = VideoIntelligenceService::builder()
        .with_tracing()
        .build()
        .await?;
    match command {
        V::AnalyzeLabels { uri } => video::analyze_labels::sample(&client, uri).await,
        V::AnalyzeShots { uri } => video::analyze_shots::sample(&client, uri).await,
        V::AnalyzeExplicitContent { uri } => {
            video::analyze_explicit_content::sample(&client, uri).await
        }
    }
}

async fn run_workflows(
    args: &Args,
    command: &args::Workflows,
    policy: &PollingPolicy,
) -> anyhow::Result<()> {
    use args::Workflows as W;
    use google_cloud_workflows_executions_v1::client::Executions;
    use google_cloud_workflows_v1::client::Workflows;

    let project = &args.project;
    let region = &args.region;
    let workflow_client = || Workflows::builder().with_tracing().build();
    match command {
        W::CreateWorkflow {
            workflow_id,
            source_file,
        } => {
            let source = match source_file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read workflow source {}", path.display()))?,
                None => workflows::create_workflow::HELLO_WORKFLOW.to_string(),
            };
            let client = workflow_client().await?;
            workflows::create_workflow::sample(&client, project, region, workflow_id, &source)
                .await?;
        }
        W::ListWorkflows => {
            let client = workflow_client().await?;
            workflows::list_workflows::sample(&client, project, region).await?
        }
        W::ExecuteWorkflow {
            workflow_id,
            argument,
        } => {
            let client = Executions::builder().with_tracing().build().await?;
            let argument = argument.as_deref().unwrap_or_default();
            workflows::execute_workflow::sample(
                &client,
                project,
                region,
                workflow_id,
                argument,
                policy,
            )
            .await?;
        }
        W::DeleteWorkflow { workflow_id } => {
            let name = resource_name(args, "workflows", workflow_id);
            workflows::delete_workflow::sample(&workflow_client().await?, &name).await?;
        }
    }
    Ok(())
}
