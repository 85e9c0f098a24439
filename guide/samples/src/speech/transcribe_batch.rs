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

// [START speech_transcribe_batch]
use google_cloud_lro::Poller;
use google_cloud_speech_v2::client::Speech;
use google_cloud_speech_v2::model::{
    BatchRecognizeFileMetadata, InlineOutputConfig, RecognitionOutputConfig,
    batch_recognize_request::ProcessingStrategy,
};

/// Transcribes an audio file with a batch recognition request.
///
/// Dynamic batching is cheaper but may take longer to start.
pub async fn sample(client: &Speech, project_id: &str, uri: &str) -> anyhow::Result<Vec<String>> {
    let response = client
        .batch_recognize()
        .set_recognizer(super::default_recognizer(project_id))
        .set_config(super::recognition_config())
        .set_files([BatchRecognizeFileMetadata::new().set_uri(uri)])
        .set_recognition_output_config(
            RecognitionOutputConfig::new().set_inline_response_config(InlineOutputConfig::new()),
        )
        .set_processing_strategy(ProcessingStrategy::DynamicBatching)
        .poller()
        .until_done()
        .await?;

    let Some(file_result) = response.results.get(uri) else {
        anyhow::bail!("missing result for {uri} in {response:?}");
    };
    if let Some(status) = &file_result.error {
        anyhow::bail!("cannot transcribe {uri}: {status:?}");
    }
    let results = file_result
        .inline_result()
        .and_then(|r| r.transcript.as_ref())
        .map(|t| t.results.as_slice())
        .unwrap_or_default();
    let transcripts = super::transcripts(results);
    for transcript in &transcripts {
        println!("Transcript: {transcript}");
    }
    Ok(transcripts)
}
// [END speech_transcribe_batch]
