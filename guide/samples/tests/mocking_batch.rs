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

//! Mock tests for the Cloud Batch snippets.

#[cfg(test)]
mod tests {
    use cloud_snippets::batch as snippets;
    use cloud_snippets::batch::client::BatchService;
    use cloud_snippets::batch::model::{
        Job, JobStatus, ListJobsResponse, Operation, State, StatusEvent,
    };
    use cloud_snippets::poll::PollingPolicy;
    use google_cloud_gax as gax;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    type Result<T> = anyhow::Result<T>;

    const PARENT: &str = "projects/test-project/locations/us-central1";
    const JOB: &str = "projects/test-project/locations/us-central1/jobs/test-job";
    const OPERATION: &str = "projects/test-project/locations/us-central1/operations/op-123";

    mockall::mock! {
        #[derive(Debug)]
        Batch {}
        impl snippets::stub::BatchService for Batch {
            async fn create_job(&self, parent: String, job_id: String, job: Job) -> gax::Result<Job>;
            async fn get_job(&self, name: String) -> gax::Result<Job>;
            async fn list_jobs(&self, parent: String, page_token: String) -> gax::Result<ListJobsResponse>;
            async fn delete_job(&self, name: String) -> gax::Result<Operation>;
            async fn get_operation(&self, name: String) -> gax::Result<Operation>;
        }
    }

    fn job_in(state: State) -> Job {
        Job::new().set_name(JOB).set_status(JobStatus::new(state))
    }

    fn sample_policy() -> PollingPolicy {
        PollingPolicy::doubling(Duration::from_secs(1), Duration::from_secs(4))
    }

    #[tokio::test]
    async fn create_script_job() -> Result<()> {
        let mut mock = MockBatch::new();
        mock.expect_create_job()
            .withf(|parent, job_id, _| parent == PARENT && job_id == "test-job")
            .return_once(|_, _, job| Ok(job.set_name(JOB)));

        let client = BatchService::from_stub(mock);
        let job =
            snippets::create_script_job::sample(&client, "test-project", "us-central1", "test-job")
                .await?;
        assert_eq!(job.name, JOB);
        let group = &job.task_groups[0];
        assert_eq!(group.task_count, 4);
        assert_eq!(group.parallelism, 2);
        let script = group
            .task_spec
            .as_ref()
            .and_then(|t| t.runnables.first())
            .and_then(|r| r.script())
            .expect("the runnable is a script");
        assert!(script.text.contains("BATCH_TASK_INDEX"), "{script:?}");
        Ok(())
    }

    #[tokio::test]
    async fn create_container_job() -> Result<()> {
        let mut mock = MockBatch::new();
        mock.expect_create_job().return_once(|_, _, job| Ok(job.set_name(JOB)));

        let client = BatchService::from_stub(mock);
        let job = snippets::create_container_job::sample(
            &client,
            "test-project",
            "us-central1",
            "test-job",
        )
        .await?;
        let container = job.task_groups[0]
            .task_spec
            .as_ref()
            .and_then(|t| t.runnables.first())
            .and_then(|r| r.container())
            .expect("the runnable is a container");
        assert_eq!(container.image_uri, "gcr.io/google-containers/busybox");
        assert_eq!(container.entrypoint, "/bin/sh");
        assert_eq!(container.commands.first().map(String::as_str), Some("-c"));
        Ok(())
    }

    #[tokio::test]
    async fn list_all_pages() -> Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockBatch::new();
        mock.expect_list_jobs()
            .once()
            .in_sequence(&mut seq)
            .withf(|parent, token| parent == PARENT && token.is_empty())
            .return_once(|_, _| {
                let jobs = [Job::new().set_name("job-1"), Job::new().set_name("job-2")];
                Ok(ListJobsResponse::new(jobs).set_next_page_token("page-2"))
            });
        mock.expect_list_jobs()
            .once()
            .in_sequence(&mut seq)
            .withf(|_, token| token == "page-2")
            .return_once(|_, _| Ok(ListJobsResponse::new([Job::new().set_name("job-3")])));

        let client = BatchService::from_stub(mock);
        let got = snippets::list_jobs::sample(&client, "test-project", "us-central1").await?;
        assert_eq!(got, vec!["job-1", "job-2", "job-3"]);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn wait_until_succeeded() -> Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockBatch::new();
        for state in [State::Queued, State::Scheduled, State::Running, State::Succeeded] {
            mock.expect_get_job()
                .once()
                .in_sequence(&mut seq)
                .withf(|name| name == JOB)
                .return_once(move |_| Ok(job_in(state)));
        }

        let client = BatchService::from_stub(mock);
        let job = snippets::wait_job::sample(&client, JOB, &sample_policy()).await?;
        assert_eq!(job.state(), State::Succeeded);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn wait_until_failed() -> Result<()> {
        let mut mock = MockBatch::new();
        mock.expect_get_job().return_once(|_| {
            let status = JobStatus::new(State::Failed)
                .set_status_events([StatusEvent::new("Task 3 exited with code 1")]);
            Ok(Job::new().set_name(JOB).set_status(status))
        });

        let client = BatchService::from_stub(mock);
        let got = snippets::wait_job::sample(&client, JOB, &PollingPolicy::default()).await;
        let err = got.expect_err("failed jobs should return an error");
        assert!(err.to_string().contains("Task 3 exited with code 1"), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn wait_until_cancelled() -> Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockBatch::new();
        for state in [State::Running, State::CancellationInProgress, State::Cancelled] {
            mock.expect_get_job()
                .once()
                .in_sequence(&mut seq)
                .return_once(move |_| Ok(job_in(state)));
        }

        let client = BatchService::from_stub(mock);
        // No attempt limit, the job state alone must stop the loop.
        let got = snippets::wait_job::sample(&client, JOB, &PollingPolicy::default()).await;
        let err = got.expect_err("cancelled jobs should return an error");
        assert!(err.to_string().contains("Cancelled"), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn delete_waits_for_operation() -> Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockBatch::new();
        mock.expect_delete_job()
            .once()
            .in_sequence(&mut seq)
            .withf(|name| name == JOB)
            .return_once(|_| Ok(Operation::new(OPERATION)));
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .withf(|name| name == OPERATION)
            .return_once(|_| Ok(Operation::new(OPERATION)));
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_| Ok(Operation::new(OPERATION).set_done(true)));

        let client = BatchService::from_stub(mock);
        snippets::delete_job::sample(&client, JOB, &sample_policy()).await?;
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn delete_reports_operation_error() -> Result<()> {
        let mut mock = MockBatch::new();
        mock.expect_delete_job().return_once(|_| {
            Ok(Operation::new(OPERATION)
                .set_done(true)
                .set_error(9, "job is still running"))
        });

        let client = BatchService::from_stub(mock);
        let got = snippets::delete_job::sample(&client, JOB, &sample_policy()).await;
        let err = got.expect_err("failed deletions should return an error");
        assert!(err.to_string().contains("job is still running"), "{err:?}");
        Ok(())
    }
}
