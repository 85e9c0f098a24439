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

//! Speech-to-Text v2 snippets.

pub mod transcribe_batch;
pub mod transcribe_gcs;

use google_cloud_speech_v2::model::{
    AutoDetectDecodingConfig, RecognitionConfig, SpeechRecognitionResult,
};

/// The default recognizer, which needs no setup.
pub(crate) fn default_recognizer(project_id: &str) -> String {
    format!("projects/{project_id}/locations/global/recognizers/_")
}

pub(crate) fn recognition_config() -> RecognitionConfig {
    RecognitionConfig::new()
        .set_language_codes(["en-US"])
        .set_model("short")
        .set_auto_decoding_config(AutoDetectDecodingConfig::new())
}

/// The top alternative of each result.
pub(crate) fn transcripts<'a, I>(results: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a SpeechRecognitionResult>,
{
    results
        .into_iter()
        .filter_map(|r| r.alternatives.first())
        .map(|a| a.transcript.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_speech_v2::model::SpeechRecognitionAlternative;
    use pretty_assertions::assert_eq;

    #[test]
    fn recognizer() {
        assert_eq!(
            default_recognizer("p"),
            "projects/p/locations/global/recognizers/_"
        );
    }

    #[test]
    fn top_alternatives() {
        let results = [
            SpeechRecognitionResult::new().set_alternatives([
                SpeechRecognitionAlternative::new().set_transcript("how old is"),
                SpeechRecognitionAlternative::new().set_transcript("how cold is"),
            ]),
            SpeechRecognitionResult::new(),
            SpeechRecognitionResult::new().set_alternatives([
                SpeechRecognitionAlternative::new().set_transcript("the Brooklyn Bridge"),
            ]),
        ];
        assert_eq!(
            transcripts(&results),
            vec!["how old is".to_string(), "the Brooklyn Bridge".to_string()]
        );
    }
}
