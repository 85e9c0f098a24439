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

// [START translate_v3_translate_text_with_model]
use google_cloud_translation_v3::client::TranslationService;

/// Translates `text` with a specific model.
///
/// # Parameters
/// - `model_id`: `general/nmt` for the default model, or the id of a custom
///   AutoML model in `location`.
pub async fn sample(
    client: &TranslationService,
    project_id: &str,
    location: &str,
    text: &str,
    source_language: &str,
    target_language: &str,
    model_id: &str,
) -> anyhow::Result<Vec<String>> {
    let parent = super::parent(project_id, location);
    let model = format!("{parent}/models/{model_id}");
    let response = client
        .translate_text()
        .set_parent(parent)
        .set_contents([text])
        .set_mime_type("text/plain")
        .set_source_language_code(source_language)
        .set_target_language_code(target_language)
        .set_model(model)
        .send()
        .await?;

    let mut translated = Vec::new();
    for translation in response.translations {
        println!("Translated text: {}", translation.translated_text);
        translated.push(translation.translated_text);
    }
    Ok(translated)
}
// [END translate_v3_translate_text_with_model]
