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

// [START speech_transcribe_gcs]
use google_cloud_speech_v2::client::Speech;

/// Transcribes a short audio file stored in Cloud Storage.
///
/// # Parameters
/// - `uri`: for example `gs://cloud-samples-data/speech/brooklyn_bridge.flac`
pub async fn sample(client: &Speech, project_id: &str, uri: &str) -> anyhow::Result<Vec<String>> {
    let response = client
        .recognize()
        .set_recognizer(super::default_recognizer(project_id))
        .set_config(super::recognition_config())
        .set_uri(uri)
        .send()
        .await?;

    let transcripts = super::transcripts(&response.results);
    for transcript in &transcripts {
        println!("Transcript: {transcript}");
    }
    Ok(transcripts)
}
// [END speech_transcribe_gcs]
