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

//! Mock tests for the Vertex AI snippets.

#[cfg(test)]
mod tests {
    use aiplatform::model::{
        BatchPredictionJob, Candidate, Content, GenerateContentRequest, GenerateContentResponse,
        GetBatchPredictionJobRequest, JobState, Part,
    };
    use cloud_snippets::aiplatform as snippets;
    use cloud_snippets::poll::PollingPolicy;
    use gax::response::Response;
    use google_cloud_aiplatform_v1 as aiplatform;
    use google_cloud_gax as gax;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tokio::time::Instant;
    type Result<T> = anyhow::Result<T>;

    const JOB: &str = "projects/test-project/locations/us-central1/batchPredictionJobs/123";

    mockall::mock! {
        #[derive(Debug)]
        JobService {}
        impl aiplatform::stub::JobService for JobService {
            async fn get_batch_prediction_job(&self, req: GetBatchPredictionJobRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<BatchPredictionJob>>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        PredictionService {}
        impl aiplatform::stub::PredictionService for PredictionService {
            async fn generate_content(&self, req: GenerateContentRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<GenerateContentResponse>>;
        }
    }

    fn job_in(state: JobState) -> gax::Result<Response<BatchPredictionJob>> {
        Ok(Response::from(
            BatchPredictionJob::new().set_name(JOB).set_state(state),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn wait_succeeded() -> Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockJobService::new();
        mock.expect_get_batch_prediction_job()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.name == JOB)
            .returning(|_, _| job_in(JobState::Pending));
        mock.expect_get_batch_prediction_job()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_, _| job_in(JobState::Running));
        mock.expect_get_batch_prediction_job()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| job_in(JobState::Succeeded));

        let client = aiplatform::client::JobService::from_stub(mock);
        let start = Instant::now();
        let policy = PollingPolicy::doubling(Duration::from_secs(10), Duration::from_secs(60));
        let job = snippets::wait_batch_prediction_job::sample(&client, JOB, &policy).await?;
        assert_eq!(job.state, JobState::Succeeded);
        // 10s + 20s + 40s
        assert_eq!(start.elapsed(), Duration::from_secs(70));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn wait_failed() -> Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockJobService::new();
        mock.expect_get_batch_prediction_job()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| job_in(JobState::Running));
        mock.expect_get_batch_prediction_job()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| job_in(JobState::Failed));

        let client = aiplatform::client::JobService::from_stub(mock);
        let got = snippets::wait_batch_prediction_job::sample(&client, JOB, &PollingPolicy::default())
            .await;
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn generate_content() -> Result<()> {
        let mut mock = MockPredictionService::new();
        mock.expect_generate_content()
            .withf(|r, _| {
                let prompt = r
                    .contents
                    .first()
                    .and_then(|c| c.parts.first())
                    .and_then(|p| p.text())
                    .map(String::as_str);
                r.model
                    == "projects/test-project/locations/global/publishers/google/models/gemini-2.0-flash-001"
                    && prompt == Some("Why is the sky blue?")
            })
            .return_once(|_, _| {
                let content = Content::new().set_role("model").set_parts([
                    Part::new().set_text("Rayleigh "),
                    Part::new().set_text("scattering."),
                ]);
                Ok(Response::from(
                    GenerateContentResponse::new()
                        .set_candidates([Candidate::new().set_content(content)]),
                ))
            });

        let client = aiplatform::client::PredictionService::from_stub(mock);
        let got = snippets::generate_content::sample(
            &client,
            "test-project",
            "global",
            "gemini-2.0-flash-001",
            "Why is the sky blue?",
        )
        .await?;
        assert_eq!(got, "Rayleigh scattering.");
        Ok(())
    }

    #[tokio::test]
    async fn generate_content_without_candidates() -> Result<()> {
        let mut mock = MockPredictionService::new();
        mock.expect_generate_content()
            .return_once(|_, _| Ok(Response::from(GenerateContentResponse::new())));

        let client = aiplatform::client::PredictionService::from_stub(mock);
        let got =
            snippets::generate_content::sample(&client, "test-project", "global", "gemini", "hi")
                .await?;
        assert_eq!(got, "");
        Ok(())
    }
}
