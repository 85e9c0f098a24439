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

// [START translate_v3_get_supported_languages_for_target]
use google_cloud_translation_v3::client::TranslationService;

/// Lists the supported languages, with names in `display_language`.
pub async fn sample(
    client: &TranslationService,
    project_id: &str,
    display_language: &str,
) -> anyhow::Result<()> {
    let response = client
        .get_supported_languages()
        .set_parent(super::parent(project_id, "global"))
        .set_display_language_code(display_language)
        .send()
        .await?;
    for language in response.languages {
        println!("{}: {}", language.language_code, language.display_name);
    }
    Ok(())
}
// [END translate_v3_get_supported_languages_for_target]
