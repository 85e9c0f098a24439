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

// [START dlp_inspect_string]
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{ContentItem, Finding, InfoType, InspectConfig, Likelihood};

const DEFAULT_INFO_TYPES: [&str; 2] = ["PHONE_NUMBER", "EMAIL_ADDRESS"];

/// Inspects `text` for the given info types.
///
/// Uses phone numbers and email addresses if `info_types` is empty.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    text: &str,
    info_types: &[String],
) -> anyhow::Result<Vec<Finding>> {
    let info_types: Vec<InfoType> = if info_types.is_empty() {
        DEFAULT_INFO_TYPES
            .iter()
            .map(|name| InfoType::new().set_name(*name))
            .collect()
    } else {
        info_types
            .iter()
            .map(|name| InfoType::new().set_name(name))
            .collect()
    };

    let response = client
        .inspect_content()
        .set_parent(super::global_parent(project_id))
        .set_inspect_config(
            InspectConfig::new()
                .set_info_types(info_types)
                .set_min_likelihood(Likelihood::Possible)
                .set_include_quote(true),
        )
        .set_item(ContentItem::new().set_value(text))
        .send()
        .await?;

    let findings = response.result.map(|r| r.findings).unwrap_or_default();
    if findings.is_empty() {
        println!("No findings.");
    }
    for finding in &findings {
        println!("Quote: {}", finding.quote);
        println!(
            "Info type: {}",
            finding
                .info_type
                .as_ref()
                .map(|t| t.name.as_str())
                .unwrap_or_default()
        );
        println!("Likelihood: {:?}", finding.likelihood);
    }
    Ok(findings)
}
// [END dlp_inspect_string]
