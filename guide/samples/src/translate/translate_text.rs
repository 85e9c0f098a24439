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

// [START translate_v3_translate_text]
use google_cloud_translation_v3::client::TranslationService;

/// Translates `text` into `target_language`, detecting the source language.
///
/// # Parameters
/// - `target_language`: a BCP-47 code, for example `fr`.
pub async fn sample(
    client: &TranslationService,
    project_id: &str,
    text: &str,
    target_language: &str,
) -> anyhow::Result<Vec<String>> {
    let response = client
        .translate_text()
        .set_parent(super::parent(project_id, "global"))
        .set_contents([text])
        .set_mime_type("text/plain")
        .set_target_language_code(target_language)
        .send()
        .await?;

    let mut translated = Vec::new();
    for translation in response.translations {
        println!(
            "Translated text: {} (detected language: {})",
            translation.translated_text, translation.detected_language_code
        );
        translated.push(translation.translated_text);
    }
    Ok(translated)
}
// [END translate_v3_translate_text]
