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

// [START dlp_deidentify_replace]
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, DeidentifyConfig, InfoType, InfoTypeTransformations, InspectConfig,
    PrimitiveTransformation, ReplaceValueConfig, Value,
    info_type_transformations::InfoTypeTransformation,
};

/// Replaces the email addresses in `text` with `replacement`.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    text: &str,
    replacement: &str,
) -> anyhow::Result<String> {
    let email = InfoType::new().set_name("EMAIL_ADDRESS");
    let transformation = InfoTypeTransformation::new()
        .set_info_types([email.clone()])
        .set_primitive_transformation(PrimitiveTransformation::new().set_replace_config(
            ReplaceValueConfig::new().set_new_value(Value::new().set_string_value(replacement)),
        ));
    let response = client
        .deidentify_content()
        .set_parent(super::global_parent(project_id))
        .set_inspect_config(InspectConfig::new().set_info_types([email]))
        .set_deidentify_config(DeidentifyConfig::new().set_info_type_transformations(
            InfoTypeTransformations::new().set_transformations([transformation]),
        ))
        .set_item(ContentItem::new().set_value(text))
        .send()
        .await?;

    let replaced = response
        .item
        .as_ref()
        .and_then(|item| item.value())
        .cloned()
        .unwrap_or_default();
    println!("{replaced}");
    Ok(replaced)
}
// [END dlp_deidentify_replace]
