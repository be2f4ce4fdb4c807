//! Integration tests for the edge-tts provider against a mock server

use ai_speech::{AudioFormat, EdgeTtsProvider, SpeechConfig, SpeechError, TextToSpeech, VoiceParams};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> SpeechConfig {
    SpeechConfig {
        base_url: server.uri(),
        ..Default::default()
    }
}

#[tokio::test]
async fn synthesize_sends_voice_params_and_returns_audio() {
    let server = MockServer::start().await;
    let fake_mp3 = vec![0xFF, 0xFB, 0x90, 0x00, 0x01, 0x02];

    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .and(body_partial_json(json!({
            "voice": "es-CO-SalomeNeural",
            "rate": "+18%",
            "pitch": "+13Hz",
            "format": "mp3"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(fake_mp3.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = EdgeTtsProvider::new(config_for(&server)).unwrap();
    let audio = provider.synthesize("Buenas tardes").await.unwrap();

    assert_eq!(audio.bytes, fake_mp3);
    assert_eq!(audio.format, AudioFormat::Mp3);
}

#[tokio::test]
async fn per_call_voice_params_override_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .and(body_partial_json(json!({
            "voice": "es-MX-DaliaNeural",
            "rate": "+0%",
            "pitch": "+0Hz"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 2, 3]))
        .expect(1)
        .mount(&server)
        .await;

    let provider = EdgeTtsProvider::new(config_for(&server)).unwrap();
    let params = VoiceParams {
        voice: "es-MX-DaliaNeural".to_string(),
        rate: "+0%".to_string(),
        pitch: "+0Hz".to_string(),
    };
    let audio = provider.synthesize_with("Hola", Some(&params)).await.unwrap();
    assert_eq!(audio.bytes, vec![1, 2, 3]);
}

#[tokio::test]
async fn empty_service_output_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(Vec::new()))
        .mount(&server)
        .await;

    let provider = EdgeTtsProvider::new(config_for(&server)).unwrap();
    let err = provider.synthesize("Hola").await.unwrap_err();
    assert!(matches!(err, SpeechError::SynthesisFailed(_)));
}

#[tokio::test]
async fn service_error_maps_to_synthesis_failed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/synthesize"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let provider = EdgeTtsProvider::new(config_for(&server)).unwrap();
    let err = provider.synthesize("Hola").await.unwrap_err();
    match err {
        SpeechError::SynthesisFailed(message) => assert!(message.contains("boom")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn health_check_hits_health_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let provider = EdgeTtsProvider::new(config_for(&server)).unwrap();
    assert!(provider.health_check().await.is_ok());
}
