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

//! Mock tests for the Workflows snippets.

#[cfg(test)]
mod tests {
    use cloud_snippets::poll::{PollError, PollingPolicy};
    use cloud_snippets::workflows;
    use executions::model::{CreateExecutionRequest, Execution, GetExecutionRequest, execution};
    use gax::response::Response;
    use google_cloud_gax as gax;
    use google_cloud_workflows_executions_v1 as executions;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    type Result<T> = anyhow::Result<T>;

    const WORKFLOW: &str = "projects/test-project/locations/us-central1/workflows/hello";
    const EXECUTION: &str =
        "projects/test-project/locations/us-central1/workflows/hello/executions/e-123";

    mockall::mock! {
        #[derive(Debug)]
        Executions {}
        impl executions::stub::Executions for Executions {
            async fn create_execution(&self, req: CreateExecutionRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Execution>>;
            async fn get_execution(&self, req: GetExecutionRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Execution>>;
        }
    }

    fn running() -> Execution {
        Execution::new()
            .set_name(EXECUTION)
            .set_state(execution::State::Active)
    }

    fn policy() -> PollingPolicy {
        PollingPolicy::fixed(Duration::from_secs(1))
    }

    #[tokio::test(start_paused = true)]
    async fn success() -> Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockExecutions::new();
        mock.expect_create_execution()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| {
                r.parent == WORKFLOW
                    && r.execution.as_ref().map(|e| e.argument.as_str()) == Some(r#"{"name":"Rust"}"#)
            })
            .returning(|_, _| Ok(Response::from(running())));
        mock.expect_get_execution()
            .times(2)
            .in_sequence(&mut seq)
            .withf(|r, _| r.name == EXECUTION)
            .returning(|_, _| Ok(Response::from(running())));
        mock.expect_get_execution()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(
                    running()
                        .set_state(execution::State::Succeeded)
                        .set_result(r#""Hello Rust""#),
                ))
            });

        let client = executions::client::Executions::from_stub(mock);
        let got = workflows::execute_workflow::sample(
            &client,
            "test-project",
            "us-central1",
            "hello",
            r#"{"name":"Rust"}"#,
            &policy(),
        )
        .await?;
        assert_eq!(got, r#""Hello Rust""#);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn queued_then_failed() -> Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockExecutions::new();
        mock.expect_create_execution()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(
                    running().set_state(execution::State::Queued),
                ))
            });
        mock.expect_get_execution()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(
                    running().set_state(execution::State::Failed).set_error(
                        execution::Error::new().set_payload("division by zero"),
                    ),
                ))
            });

        let client = executions::client::Executions::from_stub(mock);
        let got = workflows::execute_workflow::sample(
            &client,
            "test-project",
            "us-central1",
            "hello",
            "",
            &policy(),
        )
        .await;
        let err = got.expect_err("failed executions should return an error");
        let message = err.to_string();
        assert!(message.contains("division by zero"), "{message}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled() -> Result<()> {
        let mut mock = MockExecutions::new();
        mock.expect_create_execution()
            .return_once(|_, _| Ok(Response::from(running())));
        mock.expect_get_execution().return_once(|_, _| {
            Ok(Response::from(
                running().set_state(execution::State::Cancelled),
            ))
        });

        let client = executions::client::Executions::from_stub(mock);
        let got = workflows::execute_workflow::sample(
            &client,
            "test-project",
            "us-central1",
            "hello",
            "",
            &policy(),
        )
        .await;
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn attempt_limit() -> Result<()> {
        let mut mock = MockExecutions::new();
        mock.expect_create_execution()
            .return_once(|_, _| Ok(Response::from(running())));
        mock.expect_get_execution()
            .times(3)
            .returning(|_, _| Ok(Response::from(running())));

        let client = executions::client::Executions::from_stub(mock);
        let got = workflows::execute_workflow::sample(
            &client,
            "test-project",
            "us-central1",
            "hello",
            "",
            &policy().with_attempt_limit(3),
        )
        .await;
        let err = got.expect_err("polling should give up");
        assert!(
            matches!(err.downcast_ref::<PollError>(), Some(PollError::Exhausted(3))),
            "{err:?}"
        );
        Ok(())
    }
}
