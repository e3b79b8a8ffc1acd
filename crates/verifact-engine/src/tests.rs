//! Engine-level tests running the full turn pipeline against mock providers
//! and the in-memory checkpoint store.

use crate::{Workflow, WorkflowConfig, WorkflowError};
use std::sync::Arc;
use verifact_domain::traits::CheckpointStore;
use verifact_domain::{Role, SearchResult, ThreadId};
use verifact_providers::{MockCompletion, MockSearch};
use verifact_store::MemorySaver;

fn eiffel_results() -> Vec<SearchResult> {
    vec![
        SearchResult::new(
            "Eiffel Tower - Wikipedia",
            "https://en.wikipedia.org/wiki/Eiffel_Tower",
            "The Eiffel Tower is a wrought-iron lattice tower on the Champ de Mars in Paris, France.",
        ),
        SearchResult::new(
            "Eiffel Tower facts",
            "https://www.toureiffel.paris/en",
            "The tower has stood in Paris since 1889.",
        ),
    ]
}

fn workflow_with(
    search: MockSearch,
    completion: MockCompletion,
) -> Workflow<MockSearch, MockCompletion, MemorySaver> {
    Workflow::new(search, completion, MemorySaver::new(), WorkflowConfig::default()).unwrap()
}

#[tokio::test]
async fn successful_turn_returns_verdict_and_sources() {
    let search = MockSearch::new(eiffel_results());
    let completion = MockCompletion::new(
        "FALSE. The evidence places the Eiffel Tower in Paris, not Berlin.",
    );
    let workflow = workflow_with(search, completion);
    let thread = ThreadId::new("t1");

    let outcome = workflow
        .run(&thread, "The Eiffel Tower is located in Berlin.")
        .await
        .unwrap();

    assert!(outcome.verdict.starts_with("FALSE"));
    assert_eq!(outcome.sources.len(), 2);
    assert_eq!(outcome.sources[0].title, "Eiffel Tower - Wikipedia");
}

#[tokio::test]
async fn turn_appends_exactly_two_messages_in_order() {
    let workflow = workflow_with(
        MockSearch::new(eiffel_results()),
        MockCompletion::new("FALSE. It is in Paris."),
    );
    let thread = ThreadId::new("t1");

    workflow
        .run(&thread, "The Eiffel Tower is located in Berlin.")
        .await
        .unwrap();

    let state = workflow_store_state(&workflow, &thread).await;
    assert_eq!(state.message_count(), 2);
    assert_eq!(state.messages[0].role, Role::User);
    assert_eq!(state.messages[0].content, "The Eiffel Tower is located in Berlin.");
    assert_eq!(state.messages[1].role, Role::Assistant);
    assert_eq!(state.messages[1].content, "FALSE. It is in Paris.");
    assert_eq!(state.claim, "The Eiffel Tower is located in Berlin.");
}

#[tokio::test]
async fn prompt_carries_claim_and_evidence_to_the_completion_provider() {
    let completion = MockCompletion::new("PARTIALLY TRUE.");
    let workflow = workflow_with(MockSearch::new(eiffel_results()), completion.clone());

    workflow
        .run(&ThreadId::new("t1"), "The Eiffel Tower is in France.")
        .await
        .unwrap();

    let prompt = completion.last_prompt();
    assert_eq!(prompt.len(), 2);
    assert_eq!(prompt[0].role, Role::System);
    assert!(prompt[1].content.contains("Claim: The Eiffel Tower is in France."));
    assert!(prompt[1].content.contains("Champ de Mars in Paris"));
}

#[tokio::test]
async fn empty_search_results_still_reach_the_verdict_stage() {
    let completion = MockCompletion::new("PARTIALLY TRUE. Insufficient evidence.");
    let workflow = workflow_with(MockSearch::empty(), completion.clone());

    let outcome = workflow
        .run(&ThreadId::new("t1"), "Nothing is known about this.")
        .await
        .unwrap();

    assert_eq!(completion.call_count(), 1);
    assert!(outcome.sources.is_empty());
    assert!(completion.last_prompt()[1].content.ends_with("Evidence:\n"));
}

#[tokio::test]
async fn search_failure_leaves_store_untouched() {
    let search = MockSearch::empty();
    search.set_failing(true);
    let workflow = workflow_with(search, MockCompletion::default());
    let thread = ThreadId::new("t1");

    let result = workflow.run(&thread, "A claim.").await;
    assert!(matches!(result, Err(WorkflowError::Search(_))));

    let state = workflow_store_state(&workflow, &thread).await;
    assert!(state.messages.is_empty());
}

#[tokio::test]
async fn completion_failure_discards_the_whole_turn() {
    let completion = MockCompletion::default();
    let workflow = workflow_with(MockSearch::new(eiffel_results()), completion.clone());
    let thread = ThreadId::new("t1");

    // First turn succeeds and is persisted
    workflow.run(&thread, "First claim.").await.unwrap();
    let persisted = workflow_store_state(&workflow, &thread).await;
    assert_eq!(persisted.message_count(), 2);

    // Second turn fails in the verdict stage after a successful search
    completion.set_failing(true);
    let result = workflow.run(&thread, "Second claim.").await;
    assert!(matches!(result, Err(WorkflowError::Completion(_))));

    // Stored state is exactly the pre-invocation state: no partial claim,
    // evidence or user message from the failed turn
    let state = workflow_store_state(&workflow, &thread).await;
    assert_eq!(state, persisted);
}

#[tokio::test]
async fn threads_are_isolated_and_history_grows_monotonically() {
    let workflow = workflow_with(
        MockSearch::new(eiffel_results()),
        MockCompletion::new("TRUE."),
    );
    let alpha = ThreadId::new("alpha");
    let beta = ThreadId::new("beta");

    workflow.run(&alpha, "claim one").await.unwrap();
    workflow.run(&alpha, "claim two").await.unwrap();
    workflow.run(&beta, "other claim").await.unwrap();

    let alpha_state = workflow_store_state(&workflow, &alpha).await;
    let beta_state = workflow_store_state(&workflow, &beta).await;
    assert_eq!(alpha_state.message_count(), 4);
    assert_eq!(beta_state.message_count(), 2);
    assert_eq!(alpha_state.messages[0].content, "claim one");
    assert_eq!(alpha_state.messages[2].content, "claim two");
    assert_eq!(beta_state.messages[0].content, "other claim");
}

#[tokio::test]
async fn repeated_claims_fetch_evidence_independently() {
    let search = MockSearch::new(eiffel_results());
    let workflow = workflow_with(search.clone(), MockCompletion::new("FALSE."));
    let thread = ThreadId::new("t1");

    workflow
        .run(&thread, "The Eiffel Tower is located in Berlin.")
        .await
        .unwrap();
    workflow
        .run(&thread, "The Eiffel Tower is located in Berlin.")
        .await
        .unwrap();

    // No caching across turns: one search per turn
    assert_eq!(search.call_count(), 2);
    let state = workflow_store_state(&workflow, &thread).await;
    let verdicts: Vec<_> = state
        .messages
        .iter()
        .filter(|m| m.role == Role::Assistant)
        .collect();
    assert_eq!(verdicts.len(), 2);
}

#[tokio::test]
async fn latest_turn_overwrites_claim_evidence_verdict_sources() {
    let search = MockSearch::new(eiffel_results());
    let completion = MockCompletion::new("FALSE.");
    let workflow = workflow_with(search.clone(), completion.clone());
    let thread = ThreadId::new("t1");

    workflow.run(&thread, "first claim").await.unwrap();

    search.set_results(vec![SearchResult::new(
        "Other page",
        "https://other.example",
        "different evidence",
    )]);
    completion.set_response("TRUE.");
    workflow.run(&thread, "second claim").await.unwrap();

    let state = workflow_store_state(&workflow, &thread).await;
    assert_eq!(state.claim, "second claim");
    assert_eq!(state.evidence, "different evidence");
    assert_eq!(state.verdict, "TRUE.");
    assert_eq!(state.sources.len(), 1);
    assert_eq!(state.sources[0].url, "https://other.example");
}

#[tokio::test]
async fn concurrent_turns_on_one_thread_do_not_interleave() {
    let workflow = Arc::new(workflow_with(
        MockSearch::new(eiffel_results()),
        MockCompletion::new("TRUE."),
    ));
    let thread = ThreadId::new("contended");

    // Both turns race the same thread; the per-thread lock must serialize
    // each full load-stages-save span so neither read-modify-write is lost.
    let first = tokio::spawn({
        let workflow = Arc::clone(&workflow);
        let thread = thread.clone();
        async move { workflow.run(&thread, "claim a").await.unwrap() }
    });
    let second = tokio::spawn({
        let workflow = Arc::clone(&workflow);
        let thread = thread.clone();
        async move { workflow.run(&thread, "claim b").await.unwrap() }
    });
    first.await.unwrap();
    second.await.unwrap();

    let state = workflow_store_state(&workflow, &thread).await;
    assert_eq!(state.message_count(), 4);
    // Strict user/assistant alternation: each claim is immediately followed
    // by its own verdict
    for (i, message) in state.messages.iter().enumerate() {
        let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
        assert_eq!(message.role, expected, "message {} out of order", i);
    }
    let claims: Vec<_> = state
        .messages
        .iter()
        .filter(|m| m.role == Role::User)
        .map(|m| m.content.as_str())
        .collect();
    assert!(claims.contains(&"claim a"));
    assert!(claims.contains(&"claim b"));
}

#[tokio::test]
async fn empty_verdict_text_completes_the_turn() {
    let workflow = workflow_with(MockSearch::new(eiffel_results()), MockCompletion::new(""));
    let thread = ThreadId::new("t1");

    // An empty response is a caller-visible warning, not an engine error
    let outcome = workflow.run(&thread, "A claim.").await.unwrap();
    assert!(outcome.verdict.is_empty());

    let state = workflow_store_state(&workflow, &thread).await;
    assert_eq!(state.message_count(), 2);
}

async fn workflow_store_state(
    workflow: &Workflow<MockSearch, MockCompletion, MemorySaver>,
    thread: &ThreadId,
) -> verifact_domain::ConversationState {
    workflow.store().load(thread).await.unwrap()
}
