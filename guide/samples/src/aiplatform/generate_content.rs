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

// [START generativeaionvertexai_gemini_text_input]
use google_cloud_aiplatform_v1::client::PredictionService;
use google_cloud_aiplatform_v1::model::{Content, Part};

/// Sends a text prompt to a Gemini model and returns the text of the first
/// candidate.
///
/// # Parameters
/// - `model`: the model id, for example `gemini-2.0-flash-001`.
pub async fn sample(
    client: &PredictionService,
    project_id: &str,
    location: &str,
    model: &str,
    prompt: &str,
) -> anyhow::Result<String> {
    let model =
        format!("projects/{project_id}/locations/{location}/publishers/google/models/{model}");
    let response = client
        .generate_content()
        .set_model(model)
        .set_contents([Content::new()
            .set_role("user")
            .set_parts([Part::new().set_text(prompt)])])
        .send()
        .await?;

    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|c| {
            c.parts
                .iter()
                .filter_map(|p| p.text())
                .map(|t| t.as_str())
                .collect::<String>()
        })
        .unwrap_or_default();
    println!("{text}");

    Ok(text)
}
// [END generativeaionvertexai_gemini_text_input]
