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

// [START dlp_deidentify_masking]
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    CharacterMaskConfig, ContentItem, DeidentifyConfig, InfoTypeTransformations,
    PrimitiveTransformation, info_type_transformations::InfoTypeTransformation,
};

/// Replaces sensitive characters in `text` with `masking_character`.
///
/// Masks every character of each finding when `number_to_mask` is 0.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    text: &str,
    masking_character: &str,
    number_to_mask: i32,
) -> anyhow::Result<String> {
    let transformation = InfoTypeTransformation::new().set_primitive_transformation(
        PrimitiveTransformation::new().set_character_mask_config(
            CharacterMaskConfig::new()
                .set_masking_character(masking_character)
                .set_number_to_mask(number_to_mask),
        ),
    );
    let response = client
        .deidentify_content()
        .set_parent(super::global_parent(project_id))
        .set_deidentify_config(DeidentifyConfig::new().set_info_type_transformations(
            InfoTypeTransformations::new().set_transformations([transformation]),
        ))
        .set_item(ContentItem::new().set_value(text))
        .send()
        .await?;

    let masked = response
        .item
        .as_ref()
        .and_then(|item| item.value())
        .cloned()
        .unwrap_or_default();
    println!("{masked}");
    Ok(masked)
}
// [END dlp_deidentify_masking]
