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

//! Workflows and Workflows Executions snippets.

pub mod create_workflow;
pub mod delete_workflow;
pub mod execute_workflow;
pub mod list_workflows;

use crate::poll::Terminal;
use google_cloud_workflows_executions_v1::model::{Execution, execution::State};

pub(crate) fn workflow_name(project_id: &str, location_id: &str, workflow_id: &str) -> String {
    format!("projects/{project_id}/locations/{location_id}/workflows/{workflow_id}")
}

impl Terminal for Execution {
    fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            State::Succeeded | State::Failed | State::Cancelled | State::Unavailable
        )
    }
}
