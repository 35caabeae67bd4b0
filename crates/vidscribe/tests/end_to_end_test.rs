use serde_json::json;
use vidscribe::{Report, VidscribeConfig, build_pipeline};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TITLE_PROMPT: &str = "Write me a YouTube video title about black holes";
const RESEARCH: &str = "Page: Black hole\nSummary: A black hole is a region of spacetime.";

fn completion(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{"text": text, "index": 0, "finish_reason": "stop"}]
    }))
}

async fn mount_services(openai: &MockServer, wiki: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/completions"))
        .and(body_partial_json(json!({"prompt": TITLE_PROMPT, "temperature": 0.9})))
        .respond_with(completion("\n\nFalling Into a Black Hole"))
        .expect(1)
        .mount(openai)
        .await;

    let script_prompt = format!(
        "Write me a YouTube video script based on this title: \"Falling Into a Black Hole\" \
         while leveraging this Wikipedia research: {}",
        RESEARCH
    );
    Mock::given(method("POST"))
        .and(path("/v1/completions"))
        .and(body_partial_json(json!({"prompt": script_prompt})))
        .respond_with(completion("Welcome back! Today we fall into a black hole."))
        .expect(1)
        .mount(openai)
        .await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("list", "search"))
        .and(query_param("srsearch", "black holes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"search": [{"ns": 0, "title": "Black hole"}]}
        })))
        .expect(1)
        .mount(wiki)
        .await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("prop", "extracts"))
        .and(query_param("titles", "Black hole"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"pages": [{
                "pageid": 4650,
                "title": "Black hole",
                "extract": "A black hole is a region of spacetime."
            }]}
        })))
        .expect(1)
        .mount(wiki)
        .await;
}

fn config_for(openai: &MockServer, wiki: &MockServer) -> VidscribeConfig {
    VidscribeConfig::from_toml_str(&format!(
        "[completion]\nbase_url = \"{}/v1\"\nverbose = false\n\n[research]\nbase_url = \"{}\"\n",
        openai.uri(),
        wiki.uri()
    ))
    .expect("config")
}

#[tokio::test]
async fn test_configured_pipeline_runs_against_both_services() -> Result<(), Box<dyn std::error::Error>> {
    // SAFETY: this is the only test in this binary and it sets the key before
    // any client reads it.
    unsafe {
        std::env::set_var("OPENAI_API_KEY", "sk-test");
    }

    let openai = MockServer::start().await;
    let wiki = MockServer::start().await;
    mount_services(&openai, &wiki).await;

    let config = config_for(&openai, &wiki);
    let mut pipeline = build_pipeline(&config)?;

    let output = pipeline
        .submit("  black holes ")
        .await?
        .expect("topic is not empty");

    assert_eq!(output.title(), "Falling Into a Black Hole");
    assert_eq!(output.research(), RESEARCH);
    assert_eq!(output.script(), "Welcome back! Today we fall into a black hole.");

    let report = Report::new(&output, &pipeline);
    assert_eq!(report.topic, "black holes");
    assert_eq!(report.title_history.len(), 1);
    assert_eq!(report.script_history[0].input(), "Falling Into a Black Hole");

    let text = report.to_text();
    assert!(text.starts_with("== Generated Title ==\nFalling Into a Black Hole\n\n== Video Script =="));
    assert!(text.contains("== Title History ==\nHuman: black holes\nAI: Falling Into a Black Hole"));
    assert!(text.ends_with(&format!("== Wikipedia Research ==\n{}", RESEARCH)));

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["title"], "Falling Into a Black Hole");
    assert_eq!(json["title_history"][0]["input"], "black holes");
    assert_eq!(
        json["title_transcript"],
        pipeline.title_log().buffer().as_str()
    );
    Ok(())
}
