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

//! Cloud Batch snippets.
//!
//! There is no generated Rust client for Cloud Batch. These snippets call the
//! v1 REST API through the small client in [client].

pub mod client;
pub mod model;
pub mod stub;

pub mod create_container_job;
pub mod create_script_job;
pub mod delete_job;
pub mod get_job;
pub mod list_jobs;
pub mod wait_job;

use crate::poll::Terminal;
use model::{
    AllocationPolicy, ComputeResource, Destination, Job, LogsPolicy, Operation, Runnable, State,
    TaskGroup, TaskSpec,
};
use std::time::Duration;

/// Each task prints its index and the task count.
pub(crate) const HELLO_COMMAND: &str = "echo Hello world! This is task ${BATCH_TASK_INDEX}. \
This job has a total of ${BATCH_TASK_COUNT} tasks.";

pub(crate) fn parent(project_id: &str, region: &str) -> String {
    format!("projects/{project_id}/locations/{region}")
}

/// Builds a job that runs `runnable` in 4 tasks, 2 at a time.
pub(crate) fn job_template(runnable: Runnable, kind: &str) -> Job {
    let task = TaskSpec::new()
        .set_runnables([runnable])
        // In milliseconds of CPU time, 2000 is 2 vCPUs.
        .set_compute_resource(ComputeResource::new(2000, 16))
        .set_max_retry_count(2)
        .set_max_run_duration(Duration::from_secs(3600));
    let group = TaskGroup::new()
        .set_task_spec(task)
        .set_task_count(4)
        .set_parallelism(2);
    Job::new()
        .set_task_groups([group])
        .set_allocation_policy(AllocationPolicy::with_machine_type("e2-standard-4"))
        .set_labels([("env", "testing"), ("type", kind)])
        .set_logs_policy(LogsPolicy::new(Destination::CloudLogging))
}

impl Terminal for Job {
    fn is_terminal(&self) -> bool {
        matches!(self.state(), State::Succeeded | State::Failed | State::Cancelled)
    }
}

impl Terminal for Operation {
    fn is_terminal(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{JobStatus, Script};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(State::StateUnspecified, false)]
    #[test_case(State::Queued, false)]
    #[test_case(State::Scheduled, false)]
    #[test_case(State::Running, false)]
    #[test_case(State::CancellationInProgress, false)]
    #[test_case(State::DeletionInProgress, false)]
    #[test_case(State::Succeeded, true)]
    #[test_case(State::Failed, true)]
    #[test_case(State::Cancelled, true)]
    fn terminal(state: State, want: bool) {
        let job = Job::new().set_status(JobStatus::new(state));
        assert_eq!(job.is_terminal(), want, "{job:?}");
    }

    #[test]
    fn without_status() {
        assert!(!Job::new().is_terminal());
    }

    #[test]
    fn operation_terminal() {
        assert!(!Operation::new("op").is_terminal());
        assert!(Operation::new("op").set_done(true).is_terminal());
    }

    #[test]
    fn template() {
        let runnable = Runnable::new().set_script(Script::new(HELLO_COMMAND));
        let job = job_template(runnable.clone(), "script");
        assert_eq!(job.task_groups.len(), 1);
        let group = &job.task_groups[0];
        assert_eq!(group.task_count, 4);
        assert_eq!(group.parallelism, 2);
        let task = group.task_spec.as_ref().expect("task spec is set");
        assert_eq!(task.runnables, vec![runnable]);
        assert_eq!(task.max_run_duration, "3600s");
        let compute = task.compute_resource.as_ref().expect("compute resource is set");
        assert_eq!(compute.cpu_milli, 2000);
        assert_eq!(compute.memory_mib, 16);
        let machine_types = job
            .allocation_policy
            .as_ref()
            .map(|p| p.machine_types().collect::<Vec<_>>());
        assert_eq!(machine_types, Some(vec!["e2-standard-4"]));
        assert_eq!(job.labels.get("type").map(String::as_str), Some("script"));
        assert_eq!(
            job.logs_policy.map(|p| p.destination),
            Some(Destination::CloudLogging)
        );
    }
}
