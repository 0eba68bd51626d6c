//! Wire-contract tests for the Visual Recognition facade.

use cognitive_services::vision::{ClassifyOptions, VisualRecognition};
use mockito::Matcher;
use serde_json::json;

fn classify_body() -> String {
    json!({
        "images": [{
            "classifiers": [{
                "classifier_id": "default",
                "name": "default",
                "classes": [
                    {"class": "cat", "score": 0.99, "type_hierarchy": "/animal/cat"},
                    {"class": "animal", "score": 0.94}
                ]
            }],
            "resolved_url": "https://example.test/cat.jpg"
        }],
        "images_processed": 1
    })
    .to_string()
}

#[tokio::test]
async fn classify_url_sends_api_key_as_query_argument() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/classify")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "k123".into()),
            Matcher::UrlEncoded("version".into(), "2016-05-20".into()),
            Matcher::UrlEncoded("url".into(), "https://example.test/cat.jpg".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(classify_body())
        .create_async()
        .await;

    let mut vision = VisualRecognition::with_api_key("k123").unwrap();
    vision.set_endpoint(server.url());

    let result = vision
        .classify_url("https://example.test/cat.jpg")
        .await
        .unwrap();

    mock.assert_async().await;
    let classes = &result.images[0].classifiers[0].classes;
    assert_eq!(classes[0].class_name, "cat");
    assert_eq!(classes[0].type_hierarchy.as_deref(), Some("/animal/cat"));
    assert_eq!(classes[1].score, 0.94);
}

#[tokio::test]
async fn classify_image_uploads_multipart_file() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v3/classify")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "k123".into()),
            Matcher::UrlEncoded("version".into(), "2016-05-20".into()),
        ]))
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data.*".to_string()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(classify_body())
        .create_async()
        .await;

    let mut vision = VisualRecognition::with_api_key("k123").unwrap();
    vision.set_endpoint(server.url());

    let options = ClassifyOptions {
        file_name: Some("kitty.jpg".to_string()),
        ..ClassifyOptions::default()
    };
    let result = vision
        .classify_image(vec![0u8; 16], &options)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.images_processed, Some(1));
}
