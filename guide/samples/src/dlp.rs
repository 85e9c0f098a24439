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

//! Sensitive Data Protection (DLP) snippets.

pub mod deidentify_with_info_type;
pub mod deidentify_with_mask;
pub mod deidentify_with_replacement;
pub mod inspect_string;
pub mod list_info_types;

/// The parent for requests that do not need a specific location.
pub(crate) fn global_parent(project_id: &str) -> String {
    format!("projects/{project_id}/locations/global")
}
