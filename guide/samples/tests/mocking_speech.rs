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

//! Mock tests for the Speech-to-Text snippets.

#[cfg(test)]
mod tests {
    use cloud_snippets::speech as snippets;
    use gax::response::Response;
    use google_cloud_gax as gax;
    use google_cloud_longrunning as longrunning;
    use google_cloud_speech_v2 as speech;
    use google_cloud_wkt as wkt;
    use longrunning::model::Operation;
    use longrunning::model::operation::Result as OperationResult;
    use pretty_assertions::assert_eq;
    use speech::model::{
        BatchRecognizeFileResult, BatchRecognizeRequest, BatchRecognizeResponse,
        BatchRecognizeResults, InlineResult, RecognizeRequest, RecognizeResponse,
        SpeechRecognitionAlternative, SpeechRecognitionResult, batch_recognize_request,
    };
    type Result<T> = anyhow::Result<T>;

    const URI: &str = "gs://cloud-samples-data/speech/hello.wav";
    const RECOGNIZER: &str = "projects/test-project/locations/global/recognizers/_";

    mockall::mock! {
        #[derive(Debug)]
        Speech {}
        impl speech::stub::Speech for Speech {
            async fn recognize(&self, req: RecognizeRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<RecognizeResponse>>;
            async fn batch_recognize(&self, req: BatchRecognizeRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Operation>>;
        }
    }

    fn result(transcript: &str) -> SpeechRecognitionResult {
        SpeechRecognitionResult::new()
            .set_alternatives([SpeechRecognitionAlternative::new().set_transcript(transcript)])
    }

    fn finished(response: &BatchRecognizeResponse) -> gax::Result<Response<Operation>> {
        let any = wkt::Any::from_msg(response).expect("test message should succeed");
        let operation = Operation::new()
            .set_done(true)
            .set_result(OperationResult::Response(any.into()));
        Ok(Response::from(operation))
    }

    #[tokio::test]
    async fn transcribe_gcs() -> Result<()> {
        let mut mock = MockSpeech::new();
        mock.expect_recognize()
            .withf(|r, _| {
                r.recognizer == RECOGNIZER
                    && r.uri().map(String::as_str) == Some(URI)
                    && r.config.as_ref().is_some_and(|c| {
                        c.model == "short"
                            && c.language_codes == ["en-US"]
                            && c.auto_decoding_config().is_some()
                    })
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    RecognizeResponse::new().set_results([result("hello"), result("world")]),
                ))
            });

        let client = speech::client::Speech::from_stub(mock);
        let got = snippets::transcribe_gcs::sample(&client, "test-project", URI).await?;
        assert_eq!(got, vec!["hello".to_string(), "world".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn transcribe_batch() -> Result<()> {
        let mut mock = MockSpeech::new();
        mock.expect_batch_recognize()
            .withf(|r, _| {
                r.recognizer == RECOGNIZER
                    && r.files.len() == 1
                    && r.files[0].uri().map(String::as_str) == Some(URI)
                    && r.processing_strategy == batch_recognize_request::ProcessingStrategy::DynamicBatching
                    && r.recognition_output_config
                        .as_ref()
                        .is_some_and(|c| c.inline_response_config().is_some())
            })
            .return_once(|_, _| {
                let file = BatchRecognizeFileResult::new().set_inline_result(
                    InlineResult::new().set_transcript(
                        BatchRecognizeResults::new().set_results([result("hello world")]),
                    ),
                );
                finished(&BatchRecognizeResponse::new().set_results([(URI, file)]))
            });

        let client = speech::client::Speech::from_stub(mock);
        let got = snippets::transcribe_batch::sample(&client, "test-project", URI).await?;
        assert_eq!(got, vec!["hello world".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn transcribe_batch_file_error() -> Result<()> {
        let mut mock = MockSpeech::new();
        mock.expect_batch_recognize().return_once(|_, _| {
            let file = BatchRecognizeFileResult::new().set_error(
                google_cloud_rpc::model::Status::new()
                    .set_code(5)
                    .set_message("file not found"),
            );
            finished(&BatchRecognizeResponse::new().set_results([(URI, file)]))
        });

        let client = speech::client::Speech::from_stub(mock);
        let got = snippets::transcribe_batch::sample(&client, "test-project", URI).await;
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn transcribe_batch_missing_file() -> Result<()> {
        let mut mock = MockSpeech::new();
        mock.expect_batch_recognize()
            .return_once(|_, _| finished(&BatchRecognizeResponse::new()));

        let client = speech::client::Speech::from_stub(mock);
        let got = snippets::transcribe_batch::sample(&client, "test-project", URI).await;
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }
}
