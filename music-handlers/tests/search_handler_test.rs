//! Tests for [`music_handlers::SearchHandler`] and [`music_handlers::CommandHandler`] with a mock search.
//!
//! Covers: one line per result in order, empty results, empty query never searching, search errors
//! turning into the failure reply, and commands answered without searching.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use mbot_core::{Chat, Handler, HandlerResponse, LinkButton, Message, Reply, User};
use music_client::{MusicApiError, MusicSearch, Track, Tracks};
use music_handlers::messages::{HELP, NO_RESULTS, SEARCH_FAILED, USAGE_HINT, WELCOME};
use music_handlers::{CommandHandler, SearchHandler};

/// Returns a canned result and records every query it receives.
struct MockSearch {
    result: Result<Vec<Track>, MusicApiError>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl MockSearch {
    fn returning(result: Result<Vec<Track>, MusicApiError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MusicSearch for MockSearch {
    async fn search(&self, query: &str) -> music_client::Result<Tracks> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        self.result.clone().map(Tracks::from)
    }
}

fn message(content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 7,
            username: Some("listener".to_string()),
            first_name: Some("Listener".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 42,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

fn reply_of(response: HandlerResponse) -> Reply {
    match response {
        HandlerResponse::Reply(reply) => reply,
        other => panic!("expected Reply, got {:?}", other),
    }
}

#[tokio::test]
async fn test_single_result_scenario() {
    let search = MockSearch::returning(Ok(vec![Track::new(
        "One More Time",
        "Daft Punk",
        "https://example/1",
    )]));
    let handler = SearchHandler::new(search.clone());

    let reply = reply_of(handler.handle(&message("daft punk")).await.unwrap());

    assert_eq!(reply.text, "One More Time — Daft Punk: https://example/1");
    assert_eq!(
        reply.buttons,
        vec![LinkButton {
            label: "Daft Punk - One More Time".to_string(),
            url: "https://example/1".to_string(),
        }]
    );
    assert_eq!(*search.queries.lock().unwrap(), vec!["daft punk".to_string()]);
}

#[tokio::test]
async fn test_one_line_per_result_in_api_order() {
    let tracks = vec![
        Track::new("Numb", "Linkin Park", "https://example/numb"),
        Track::new("In the End", "Linkin Park", "https://example/end"),
        Track::new("Faint", "Linkin Park", "https://example/faint"),
    ];
    let handler = SearchHandler::new(MockSearch::returning(Ok(tracks)));

    let reply = reply_of(handler.handle(&message("linkin park")).await.unwrap());
    let lines: Vec<&str> = reply.text.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Numb — Linkin Park: https://example/numb",
            "In the End — Linkin Park: https://example/end",
            "Faint — Linkin Park: https://example/faint",
        ]
    );
}

#[tokio::test]
async fn test_zero_results_reply() {
    let handler = SearchHandler::new(MockSearch::returning(Ok(Vec::new())));
    let reply = reply_of(handler.handle(&message("zzzz")).await.unwrap());
    assert_eq!(reply, Reply::text(NO_RESULTS));
}

#[tokio::test]
async fn test_empty_query_never_searches() {
    let search = MockSearch::returning(Ok(Vec::new()));
    let handler = SearchHandler::new(search.clone());

    for text in ["", "   ", "\n\t"] {
        let reply = reply_of(handler.handle(&message(text)).await.unwrap());
        assert_eq!(reply, Reply::text(USAGE_HINT));
    }
    assert_eq!(search.calls(), 0);
}

#[tokio::test]
async fn test_search_errors_become_failure_reply() {
    let errors = [
        MusicApiError::Network("connection refused".to_string()),
        MusicApiError::Auth("HTTP 401".to_string()),
        MusicApiError::RateLimited("HTTP 429".to_string()),
        MusicApiError::UnexpectedResponse("HTTP 500".to_string()),
    ];

    for err in errors {
        let handler = SearchHandler::new(MockSearch::returning(Err(err)));
        let response = handler.handle(&message("daft punk")).await;
        assert_eq!(reply_of(response.unwrap()), Reply::text(SEARCH_FAILED));
    }
}

#[tokio::test]
async fn test_invalid_input_from_client_becomes_usage_hint() {
    let handler = SearchHandler::new(MockSearch::returning(Err(MusicApiError::InvalidInput(
        "query is empty".to_string(),
    ))));
    let reply = reply_of(handler.handle(&message("x")).await.unwrap());
    assert_eq!(reply, Reply::text(USAGE_HINT));
}

#[tokio::test]
async fn test_commands() {
    let handler = CommandHandler;

    let start = reply_of(handler.handle(&message("/start")).await.unwrap());
    assert_eq!(start, Reply::text(WELCOME));

    let help = reply_of(handler.handle(&message("/help@music_bot")).await.unwrap());
    assert_eq!(help, Reply::text(HELP));

    let unknown = reply_of(handler.handle(&message("/play numb")).await.unwrap());
    assert_eq!(unknown, Reply::text(USAGE_HINT));

    assert_eq!(
        handler.handle(&message("daft punk")).await.unwrap(),
        HandlerResponse::Continue
    );
}
