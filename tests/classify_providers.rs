//! Integration tests for the classification provider chain against mock APIs.

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use linkstash::{Category, Classifier, ClassifyInput, Config, Platform};

fn config_for(server: &MockServer, gemini_key: Option<&str>, cohere_key: Option<&str>) -> Config {
    let mut config = Config::default();
    config.gemini.base_url = format!("{}/v1beta", server.uri());
    config.gemini.api_key = gemini_key.map(String::from);
    config.cohere.base_url = format!("{}/v2", server.uri());
    config.cohere.api_key = cohere_key.map(String::from);
    config
}

fn pasta() -> ClassifyInput {
    ClassifyInput {
        title: "chefmaria's Reel".into(),
        caption: "Creamy garlic butter pasta in 15 minutes #pasta #dinner".into(),
        platform: Platform::Instagram,
        author: "chefmaria".into(),
        url: "https://www.instagram.com/reel/Cx7yZ1qLk9W/".into(),
    }
}

fn gemini_reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

fn cohere_reply(text: &str) -> serde_json::Value {
    json!({
        "id": "c-1",
        "finish_reason": "COMPLETE",
        "message": {
            "role": "assistant",
            "content": [{ "type": "text", "text": text }]
        }
    })
}

const PASTA_JSON: &str = r##"{"title":"Creamy Garlic Butter Pasta","category":"Food","tags":["pasta","Garlic","#dinner","viral"],"summary":"A 15 minute creamy garlic butter pasta."}"##;

#[tokio::test]
async fn gemini_result_is_used_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "g-key"))
        .and(body_string_contains("Platform: instagram"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(PASTA_JSON)))
        .expect(1)
        .mount(&server)
        .await;

    let classifier = Classifier::from_config(&config_for(&server, Some("g-key"), None)).unwrap();
    let result = classifier.classify(&pasta()).await;

    assert_eq!(result.title, "Creamy Garlic Butter Pasta");
    assert_eq!(result.category, Category::Food);
    assert_eq!(result.tags, vec!["pasta", "garlic", "dinner"]);
}

#[tokio::test]
async fn cohere_runs_when_gemini_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/chat"))
        .and(header("authorization", "Bearer c-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(cohere_reply(&format!("```json\n{PASTA_JSON}\n```"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let classifier =
        Classifier::from_config(&config_for(&server, Some("g-key"), Some("c-key"))).unwrap();
    let result = classifier.classify(&pasta()).await;

    assert_eq!(result.category, Category::Food);
    assert_eq!(result.summary, "A 15 minute creamy garlic butter pasta.");
}

#[tokio::test]
async fn malformed_json_everywhere_falls_back_to_keywords() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("Sure! Category: Food")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cohere_reply("{\"title\": ")))
        .mount(&server)
        .await;

    let classifier =
        Classifier::from_config(&config_for(&server, Some("g-key"), Some("c-key"))).unwrap();
    let result = classifier.classify(&pasta()).await;

    // pasta, dinner, chef, cook... all Food keywords
    assert_eq!(result.category, Category::Food);
    assert_eq!(&result.tags[..2], ["pasta", "dinner"]);
    assert!(!result.summary.is_empty());
}

#[tokio::test]
async fn unconfigured_chain_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(PASTA_JSON)))
        .expect(0)
        .mount(&server)
        .await;

    let classifier = Classifier::from_config(&config_for(&server, None, None)).unwrap();
    let input = ClassifyInput {
        caption: "5 minute leg workout for beginners #fitness #legday".into(),
        platform: Platform::Instagram,
        ..Default::default()
    };
    let result = classifier.classify(&input).await;

    assert_eq!(result.category, Category::Fitness);
    assert!(result.tags.contains(&"fitness".to_string()));
    assert!(result.tags.contains(&"legday".to_string()));
}

#[tokio::test]
async fn unknown_provider_category_is_uncategorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cohere_reply(
            r#"{"title":"Creamy Garlic Butter Pasta","category":"Culinary Arts","tags":["pasta"],"summary":"Pasta."}"#,
        )))
        .mount(&server)
        .await;

    let classifier = Classifier::from_config(&config_for(&server, None, Some("c-key"))).unwrap();
    let result = classifier.classify(&pasta()).await;

    assert_eq!(result.category, Category::Uncategorized);
    assert_eq!(result.title, "Creamy Garlic Butter Pasta");
}
