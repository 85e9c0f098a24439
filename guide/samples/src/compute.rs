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

//! Compute Engine snippets.
//!
//! Most Compute Engine mutations return a zonal, regional, or global
//! operation. The snippets wait for these with `.poller().until_done()`,
//! except for [compute_instances_operation_check], which shows how to poll
//! the operation directly.

use crate::poll::Terminal;
use google_cloud_compute_v1::model::{Operation, operation::Status};

pub mod compute_firewall_create;
pub mod compute_firewall_delete;
pub mod compute_firewall_list;
pub mod compute_images_list_page;
pub mod compute_instances_create;
pub mod compute_instances_delete;
pub mod compute_instances_list;
pub mod compute_instances_list_all;
pub mod compute_instances_operation_check;
pub mod compute_usage_report_get;
pub mod compute_usage_report_set;

impl Terminal for Operation {
    fn is_terminal(&self) -> bool {
        self.status.as_ref().is_some_and(|s| s == &Status::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal() {
        assert!(Operation::new().set_status(Status::Done).is_terminal());
        assert!(!Operation::new().set_status(Status::Running).is_terminal());
        assert!(!Operation::new().set_status(Status::Pending).is_terminal());
        assert!(!Operation::new().is_terminal());
    }
}
