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

//! Cloud Translation v3 snippets.

pub mod detect_language;
pub mod list_languages;
pub mod translate_text;
pub mod translate_text_with_model;

pub(crate) fn parent(project_id: &str, location: &str) -> String {
    format!("projects/{project_id}/locations/{location}")
}
