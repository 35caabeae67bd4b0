use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use vidscribe_chain::{ChainSettings, VideoPipeline, script_template, title_template};
use vidscribe_core::{GenerateRequest, GenerateResponse, Topic, Turn};
use vidscribe_error::{ServiceError, ServiceErrorKind, VidscribeResult};
use vidscribe_interface::{CompletionDriver, SummaryLookup};

/// Every service call, in the order the pipeline made it.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Completion(String),
    Lookup(String),
}

type CallLog = Arc<Mutex<Vec<Call>>>;

/// Mock completion service: titles are `TITLE(<topic>)`, scripts are `SCRIPT #n`.
struct MockDriver {
    calls: CallLog,
    fail_titles: bool,
}

#[async_trait]
impl CompletionDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> VidscribeResult<GenerateResponse> {
        let mut calls = self.calls.lock().expect("lock");
        calls.push(Call::Completion(req.prompt.clone()));

        if let Some(topic) = req
            .prompt
            .strip_prefix("Write me a YouTube video title about ")
        {
            if self.fail_titles {
                return Err(ServiceError::new(ServiceErrorKind::Api {
                    status: 503,
                    message: "overloaded".to_string(),
                })
                .into());
            }
            return Ok(GenerateResponse::text_only(format!("TITLE({})", topic)));
        }

        let scripts = calls
            .iter()
            .filter(|c| matches!(c, Call::Completion(p) if p.contains("video script")))
            .count();
        Ok(GenerateResponse::text_only(format!("SCRIPT #{}", scripts)))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

/// Mock lookup service: research is `RESEARCH(<query>)`.
struct MockLookup {
    calls: CallLog,
    fail: bool,
}

#[async_trait]
impl SummaryLookup for MockLookup {
    async fn lookup(&self, query: &str) -> VidscribeResult<String> {
        self.calls
            .lock()
            .expect("lock")
            .push(Call::Lookup(query.to_string()));
        if self.fail {
            return Err(ServiceError::new(ServiceErrorKind::Http("dns failure".to_string())).into());
        }
        Ok(format!("RESEARCH({})", query))
    }

    fn service_name(&self) -> &'static str {
        "mock-wiki"
    }
}

fn pipeline(fail_titles: bool, fail_lookup: bool) -> (VideoPipeline, CallLog) {
    let calls: CallLog = Arc::default();
    let driver = Arc::new(MockDriver {
        calls: Arc::clone(&calls),
        fail_titles,
    });
    let lookup = Arc::new(MockLookup {
        calls: Arc::clone(&calls),
        fail: fail_lookup,
    });
    let pipeline = VideoPipeline::new(driver, lookup).expect("pipeline");
    (pipeline, calls)
}

fn recorded(calls: &CallLog) -> Vec<Call> {
    calls.lock().expect("lock").clone()
}

#[tokio::test]
async fn test_black_holes_prompts_and_display_values() {
    let (mut pipeline, calls) = pipeline(false, false);

    let output = pipeline
        .submit("black holes")
        .await
        .expect("run")
        .expect("non-empty topic produces output");

    assert_eq!(
        recorded(&calls),
        vec![
            Call::Completion("Write me a YouTube video title about black holes".to_string()),
            Call::Lookup("black holes".to_string()),
            Call::Completion(
                "Write me a YouTube video script based on this title: \"TITLE(black holes)\" \
                 while leveraging this Wikipedia research: RESEARCH(black holes)"
                    .to_string()
            ),
        ]
    );
    assert_eq!(output.topic().as_str(), "black holes");
    assert_eq!(output.title(), "TITLE(black holes)");
    assert_eq!(output.research(), "RESEARCH(black holes)");
    assert_eq!(output.script(), "SCRIPT #1");
}

#[tokio::test]
async fn test_empty_topic_makes_no_calls() {
    let (mut pipeline, calls) = pipeline(false, false);

    assert!(pipeline.submit("").await.expect("empty is not an error").is_none());
    assert!(pipeline.submit("   \t").await.expect("blank is not an error").is_none());

    assert!(recorded(&calls).is_empty());
    assert!(pipeline.title_log().is_empty());
    assert!(pipeline.script_log().is_empty());
}

#[tokio::test]
async fn test_title_failure_stops_pipeline() {
    let (mut pipeline, calls) = pipeline(true, false);

    let err = pipeline
        .submit("cats")
        .await
        .expect_err("title failure propagates");

    assert!(err.is_service());
    assert_eq!(
        recorded(&calls),
        vec![Call::Completion(
            "Write me a YouTube video title about cats".to_string()
        )]
    );
    assert!(pipeline.title_log().is_empty());
    assert!(pipeline.script_log().is_empty());
}

#[tokio::test]
async fn test_lookup_failure_skips_script() {
    let (mut pipeline, calls) = pipeline(false, true);

    let err = pipeline.submit("cats").await.expect_err("lookup failure");

    assert!(err.is_service());
    let calls = recorded(&calls);
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1], Call::Lookup("cats".to_string()));
    // The title call already succeeded, so its turn stays recorded.
    assert_eq!(pipeline.title_log().len(), 1);
    assert!(pipeline.script_log().is_empty());
}

#[tokio::test]
async fn test_sequential_submissions_append_in_order() {
    let (mut pipeline, _calls) = pipeline(false, false);

    pipeline.submit("cats").await.expect("cats");
    pipeline.submit("dogs").await.expect("dogs");

    assert_eq!(
        pipeline.title_log().turns(),
        &[
            Turn::new("cats", "TITLE(cats)"),
            Turn::new("dogs", "TITLE(dogs)"),
        ]
    );
    assert_eq!(
        pipeline.script_log().turns(),
        &[
            Turn::new("TITLE(cats)", "SCRIPT #1"),
            Turn::new("TITLE(dogs)", "SCRIPT #2"),
        ]
    );
    assert_eq!(
        pipeline.title_log().buffer(),
        "Human: cats\nAI: TITLE(cats)\nHuman: dogs\nAI: TITLE(dogs)"
    );
}

#[tokio::test]
async fn test_identical_topics_are_not_cached() {
    let (mut pipeline, calls) = pipeline(false, false);

    let topic = Topic::new("cats").expect("topic");
    pipeline.run(&topic).await.expect("first");
    pipeline.run(&topic).await.expect("second");

    assert_eq!(recorded(&calls).len(), 6);
    assert_eq!(pipeline.title_log().len(), 2);
}

#[tokio::test]
async fn test_fresh_session_has_independent_logs() {
    let (mut first, calls) = pipeline(false, false);
    first.submit("cats").await.expect("cats");

    let mut second = first.fresh_session();
    assert!(second.title_log().is_empty());

    second.submit("dogs").await.expect("dogs");

    assert_eq!(first.title_log().turns(), &[Turn::new("cats", "TITLE(cats)")]);
    assert_eq!(second.title_log().turns(), &[Turn::new("dogs", "TITLE(dogs)")]);
    assert_eq!(recorded(&calls).len(), 6);
}

#[tokio::test]
async fn test_custom_prompts_and_settings() {
    let calls: CallLog = Arc::default();
    let driver = Arc::new(MockDriver {
        calls: Arc::clone(&calls),
        fail_titles: false,
    });
    let lookup = Arc::new(MockLookup {
        calls: Arc::clone(&calls),
        fail: false,
    });

    let mut pipeline = VideoPipeline::with_prompts(
        driver,
        lookup,
        title_template(None).expect("title"),
        script_template(Some("video script for {title}; notes: {wikipedia_research}"))
            .expect("script"),
        ChainSettings {
            verbose: false,
            ..ChainSettings::default()
        },
    )
    .expect("pipeline");

    let output = pipeline
        .submit("owls")
        .await
        .expect("run")
        .expect("output");

    assert_eq!(output.script(), "SCRIPT #1");
    assert_eq!(
        recorded(&calls)[2],
        Call::Completion("video script for TITLE(owls); notes: RESEARCH(owls)".to_string())
    );
}

#[tokio::test]
async fn test_output_serializes_for_display() {
    let (mut pipeline, _calls) = pipeline(false, false);
    let output = pipeline.submit("cats").await.expect("run").expect("output");

    let json = serde_json::to_value(&output).expect("serialize");
    assert_eq!(json["topic"], "cats");
    assert_eq!(json["title"], "TITLE(cats)");
    assert_eq!(json["script"], "SCRIPT #1");
}
