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

// [START video_analyze_explicit_content]
use google_cloud_lro::Poller;
use google_cloud_videointelligence_v1::client::VideoIntelligenceService;
use google_cloud_videointelligence_v1::model::Feature;

/// Reports the likelihood of explicit content for each sampled frame.
pub async fn sample(client: &VideoIntelligenceService, uri: &str) -> anyhow::Result<()> {
    let response = client
        .annotate_video()
        .set_input_uri(uri)
        .set_features([Feature::ExplicitContentDetection])
        .poller()
        .until_done()
        .await?;

    for result in &response.annotation_results {
        let Some(annotation) = &result.explicit_annotation else {
            continue;
        };
        for frame in &annotation.frames {
            println!(
                "Time: {:.2}s pornography likelihood: {:?}",
                super::seconds(frame.time_offset.as_ref()),
                frame.pornography_likelihood
            );
        }
    }
    Ok(())
}
// [END video_analyze_explicit_content]
