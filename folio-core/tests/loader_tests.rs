use reqwest::Client;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use folio_core::loader::{parse_records, RecordSource};
use folio_core::{load_records, read_records, ContentListEngine};

fn sample_document() -> String {
    r#"{
  "blog": [
    { "id": 1, "title": "A", "content": "first", "author": "Zed", "category": "tech", "views": 5, "date": "March 26 2024" },
    { "id": 2, "title": "B", "content": "second", "author": "Ann", "category": "life", "views": 50, "date": "March 27 2024" }
  ]
}"#
    .to_string()
}

#[tokio::test]
async fn loads_records_from_relative_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blog/data.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(sample_document()),
        )
        .mount(&server)
        .await;

    let source = RecordSource::Url {
        base: format!("{}/blog/home.html", server.uri()),
        path: "data.json".into(),
    };
    let records = load_records(&source, &Client::new()).await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].author, "Ann");

    let mut engine = ContentListEngine::default();
    engine.load(records);
    assert_eq!(engine.view().records[0].id, 2);
}

#[tokio::test]
async fn http_error_yields_empty_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = RecordSource::Url {
        base: format!("{}/", server.uri()),
        path: "data.json".into(),
    };
    assert!(load_records(&source, &Client::new()).await.is_empty());
}

#[tokio::test]
async fn malformed_document_yields_empty_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ \"blog\": [ {"))
        .mount(&server)
        .await;

    let source = RecordSource::Url {
        base: format!("{}/", server.uri()),
        path: "data.json".into(),
    };
    assert!(load_records(&source, &Client::new()).await.is_empty());
}

#[tokio::test]
async fn reads_records_from_file_and_tolerates_missing_file() {
    let mut file = std::env::temp_dir();
    file.push(format!(
        "folio_records_{}.json",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    tokio::fs::write(&file, sample_document()).await.unwrap();

    let records = read_records(&file).await.unwrap();
    assert_eq!(records.len(), 2);

    let _ = tokio::fs::remove_file(&file).await;
    let missing = RecordSource::File { path: file.clone() };
    assert!(load_records(&missing, &Client::new()).await.is_empty());
}

#[test]
fn missing_blog_key_is_an_empty_set() {
    assert!(parse_records(b"{}").unwrap().is_empty());
    assert!(parse_records(b"42").is_err());
}

#[test]
fn relative_paths_resolve_against_the_page() {
    let url = RecordSource::resolve_url("https://example.com/blog/home.html", "data.json").unwrap();
    assert_eq!(url.as_str(), "https://example.com/blog/data.json");
    assert!(RecordSource::resolve_url("not a url", "data.json").is_err());
}
