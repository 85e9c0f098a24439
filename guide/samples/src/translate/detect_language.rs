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

// [START translate_v3_detect_language]
use google_cloud_translation_v3::client::TranslationService;

/// Detects the language of `text`.
///
/// Returns the most likely language code, if any.
pub async fn sample(
    client: &TranslationService,
    project_id: &str,
    text: &str,
) -> anyhow::Result<Option<String>> {
    let response = client
        .detect_language()
        .set_parent(super::parent(project_id, "global"))
        .set_content(text)
        .set_mime_type("text/plain")
        .send()
        .await?;

    for language in &response.languages {
        println!(
            "Language code: {} (confidence: {})",
            language.language_code, language.confidence
        );
    }
    let best = response
        .languages
        .into_iter()
        .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
        .map(|l| l.language_code);
    Ok(best)
}
// [END translate_v3_detect_language]
