//! Wire-contract tests for the Speech to Text facade.

use cognitive_services::speech::{RecognizeOptions, SpeechToText};
use mockito::Matcher;
use serde_json::json;

fn wav_bytes() -> Vec<u8> {
    let mut wav = b"RIFF".to_vec();
    wav.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
    wav.extend_from_slice(b"WAVE");
    wav
}

fn recognition_body() -> String {
    json!({
        "results": [{
            "alternatives": [{
                "transcript": "several tornadoes touch down",
                "confidence": 0.91
            }],
            "final": true
        }],
        "result_index": 0
    })
    .to_string()
}

#[tokio::test]
async fn list_models_decodes_model_set() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/models")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "models": [{
                    "name": "en-US_NarrowbandModel",
                    "language": "en-US",
                    "rate": 8000,
                    "supported_features": {"custom_language_model": true}
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut service = SpeechToText::new().unwrap();
    service.set_endpoint(server.url());

    let models = service.list_models().await.unwrap();
    assert_eq!(models.models.len(), 1);
    let model = &models.models[0];
    assert_eq!(model.name, "en-US_NarrowbandModel");
    assert!(model.supported_features.is_some());
}

#[tokio::test]
async fn session_lifecycle_hits_expected_paths() {
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/v1/sessions")
        .match_query(Matcher::UrlEncoded(
            "model".into(),
            "en-US_BroadbandModel".into(),
        ))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({"session_id": "abc123"}).to_string())
        .create_async()
        .await;
    let status = server
        .mock("GET", "/v1/sessions/abc123/recognize")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"session": {"state": "initialized"}}).to_string())
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/v1/sessions/abc123")
        .with_status(204)
        .create_async()
        .await;

    let mut service = SpeechToText::new().unwrap();
    service.set_endpoint(server.url());

    let session = service.create_session("en-US_BroadbandModel").await.unwrap();
    assert_eq!(session.session_id, "abc123");

    let state = service.session_status(&session).await.unwrap();
    assert_eq!(state.session.state, "initialized");

    service.delete_session(&session).await.unwrap();

    create.assert_async().await;
    status.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn recognize_raw_body_sends_inferred_audio_content_type() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/recognize")
        .match_header("content-type", "audio/x-wav")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(recognition_body())
        .create_async()
        .await;

    let mut service = SpeechToText::new().unwrap();
    service.set_endpoint(server.url());

    let options = RecognizeOptions::builder()
        .with_body(wav_bytes())
        .build()
        .unwrap();
    let results = service.recognize(options).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        results.results[0].alternatives[0].transcript,
        "several tornadoes touch down"
    );
    assert_eq!(results.results[0].is_final, Some(true));
}

#[tokio::test]
async fn recognize_form_data_sends_multipart_with_metadata() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/sessions/abc123/recognize")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data.*".to_string()),
        )
        .match_body(Matcher::Regex("part_content_type".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(recognition_body())
        .create_async()
        .await;

    let mut service = SpeechToText::new().unwrap();
    service.set_endpoint(server.url());

    let options = RecognizeOptions::builder()
        .upload(wav_bytes())
        .file_name("test-audio.wav")
        .build()
        .unwrap();
    let results = service
        .recognize_with_session("abc123", options)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(!results.results.is_empty());
}
