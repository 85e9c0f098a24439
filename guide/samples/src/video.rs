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

//! Video Intelligence snippets.

pub mod analyze_explicit_content;
pub mod analyze_labels;
pub mod analyze_shots;

use google_cloud_videointelligence_v1::model::VideoSegment;
use google_cloud_wkt::Duration;

/// Converts a time offset into fractional seconds.
pub(crate) fn seconds(offset: Option<&Duration>) -> f64 {
    offset.map_or(0.0, |d| d.seconds() as f64 + d.nanos() as f64 / 1e9)
}

/// Formats a segment as `start-end`, in seconds.
pub(crate) fn format_segment(segment: &VideoSegment) -> String {
    format!(
        "{:.2}s-{:.2}s",
        seconds(segment.start_time_offset.as_ref()),
        seconds(segment.end_time_offset.as_ref())
    )
}
