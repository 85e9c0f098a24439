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

//! The subset of the Cloud Batch v1 REST resources used by the snippets.
//!
//! Fields use the JSON names of the REST API. `int64` fields are encoded as
//! strings, like every other Google Cloud JSON API.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use std::collections::HashMap;

/// A Cloud Batch job.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Job {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uid: String,
    pub task_groups: Vec<TaskGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_policy: Option<AllocationPolicy>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    #[serde(skip_serializing)]
    pub status: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs_policy: Option<LogsPolicy>,
}

impl Job {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    pub fn set_task_groups<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TaskGroup>,
    {
        self.task_groups = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_allocation_policy<T: Into<AllocationPolicy>>(mut self, v: T) -> Self {
        self.allocation_policy = Some(v.into());
        self
    }

    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_status<T: Into<JobStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    pub fn set_logs_policy<T: Into<LogsPolicy>>(mut self, v: T) -> Self {
        self.logs_policy = Some(v.into());
        self
    }

    /// The job state, [State::Unspecified] if the service did not report one.
    pub fn state(&self) -> State {
        self.status.as_ref().map(|s| s.state).unwrap_or_default()
    }
}

/// A group of identical tasks.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TaskGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_spec: Option<TaskSpec>,
    #[serde_as(as = "DisplayFromStr")]
    pub task_count: i64,
    #[serde_as(as = "DisplayFromStr")]
    pub parallelism: i64,
}

impl TaskGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_task_spec<T: Into<TaskSpec>>(mut self, v: T) -> Self {
        self.task_spec = Some(v.into());
        self
    }

    pub fn set_task_count(mut self, v: i64) -> Self {
        self.task_count = v;
        self
    }

    pub fn set_parallelism(mut self, v: i64) -> Self {
        self.parallelism = v;
        self
    }
}

/// What each task runs, and the resources it needs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TaskSpec {
    pub runnables: Vec<Runnable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_resource: Option<ComputeResource>,
    pub max_retry_count: i32,
    /// A duration in the JSON encoding of `google.protobuf.Duration`, e.g. `3600s`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub max_run_duration: String,
}

impl TaskSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_runnables<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Runnable>,
    {
        self.runnables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_compute_resource<T: Into<ComputeResource>>(mut self, v: T) -> Self {
        self.compute_resource = Some(v.into());
        self
    }

    pub fn set_max_retry_count(mut self, v: i32) -> Self {
        self.max_retry_count = v;
        self
    }

    pub fn set_max_run_duration(mut self, v: std::time::Duration) -> Self {
        self.max_run_duration = format!("{}s", v.as_secs());
        self
    }
}

/// A script or container. Exactly one of the two is set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Runnable {
    #[serde(skip_serializing_if = "Option::is_none")]
    script: Option<Script>,
    #[serde(skip_serializing_if = "Option::is_none")]
    container: Option<Container>,
}

impl Runnable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the runnable to a script, clearing any container.
    pub fn set_script<T: Into<Script>>(mut self, v: T) -> Self {
        self.script = Some(v.into());
        self.container = None;
        self
    }

    /// Sets the runnable to a container, clearing any script.
    pub fn set_container<T: Into<Container>>(mut self, v: T) -> Self {
        self.container = Some(v.into());
        self.script = None;
        self
    }

    pub fn script(&self) -> Option<&Script> {
        self.script.as_ref()
    }

    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Script {
    pub text: String,
}

impl Script {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Container {
    pub image_uri: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub entrypoint: String,
    pub commands: Vec<String>,
}

impl Container {
    pub fn new<T: Into<String>>(image_uri: T) -> Self {
        Self {
            image_uri: image_uri.into(),
            ..Default::default()
        }
    }

    pub fn set_entrypoint<T: Into<String>>(mut self, v: T) -> Self {
        self.entrypoint = v.into();
        self
    }

    pub fn set_commands<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.commands = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ComputeResource {
    /// Milli-vCPUs, 1000 is one vCPU.
    #[serde_as(as = "DisplayFromStr")]
    pub cpu_milli: i64,
    #[serde_as(as = "DisplayFromStr")]
    pub memory_mib: i64,
}

impl ComputeResource {
    pub fn new(cpu_milli: i64, memory_mib: i64) -> Self {
        Self {
            cpu_milli,
            memory_mib,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AllocationPolicy {
    pub instances: Vec<InstancePolicyOrTemplate>,
}

impl AllocationPolicy {
    /// A policy with a single instance type.
    pub fn with_machine_type<T: Into<String>>(machine_type: T) -> Self {
        let policy = InstancePolicy {
            machine_type: machine_type.into(),
        };
        Self {
            instances: vec![InstancePolicyOrTemplate {
                policy: Some(policy),
            }],
        }
    }

    /// The machine types named by the instance policies.
    pub fn machine_types(&self) -> impl Iterator<Item = &str> {
        self.instances
            .iter()
            .filter_map(|i| i.policy.as_ref())
            .map(|p| p.machine_type.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstancePolicyOrTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<InstancePolicy>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstancePolicy {
    pub machine_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogsPolicy {
    pub destination: Destination,
}

impl LogsPolicy {
    pub fn new(destination: Destination) -> Self {
        Self { destination }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Destination {
    CloudLogging,
    Path,
    #[default]
    #[serde(other)]
    DestinationUnspecified,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct JobStatus {
    pub state: State,
    pub status_events: Vec<StatusEvent>,
}

impl JobStatus {
    pub fn new(state: State) -> Self {
        Self {
            state,
            status_events: Vec::new(),
        }
    }

    pub fn set_status_events<T: IntoIterator<Item = StatusEvent>>(mut self, v: T) -> Self {
        self.status_events = v.into_iter().collect();
        self
    }
}

/// The job states reported by Cloud Batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum State {
    Queued,
    Scheduled,
    Running,
    Succeeded,
    Failed,
    DeletionInProgress,
    CancellationInProgress,
    Cancelled,
    #[default]
    #[serde(other)]
    StateUnspecified,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StatusEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub description: String,
    pub event_time: String,
}

impl StatusEvent {
    pub fn new<T: Into<String>>(description: T) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListJobsResponse {
    pub jobs: Vec<Job>,
    pub next_page_token: String,
    pub unreachable: Vec<String>,
}

impl ListJobsResponse {
    pub fn new<T: IntoIterator<Item = Job>>(jobs: T) -> Self {
        Self {
            jobs: jobs.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

/// A `google.longrunning.Operation` in its JSON form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    pub name: String,
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<OperationError>,
}

impl Operation {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn set_done(mut self, v: bool) -> Self {
        self.done = v;
        self
    }

    pub fn set_error(mut self, code: i32, message: impl Into<String>) -> Self {
        self.error = Some(OperationError {
            code,
            message: message.into(),
        });
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationError {
    pub code: i32,
    pub message: String,
}
