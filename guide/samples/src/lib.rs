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

//! Snippets showing how to call Google Cloud APIs from Rust.
//!
//! Each service has a module, and each snippet is a `sample()` function in
//! its own file. The snippets receive the clients they use, so they can be
//! called with production clients or with mocks. The `snippets` binary
//! runs any of them from the command line.

pub mod aiplatform;
pub mod args;
pub mod batch;
pub mod bigquery;
pub mod compute;
pub mod dlp;
pub mod poll;
pub mod run;
pub mod speech;
pub mod translate;
pub mod video;
pub mod workflows;
