//! Turn orchestration
//!
//! `Workflow` wires the stage transforms to the provider and store seams and
//! enforces the persistence contract: state is saved only after every stage
//! of a turn has succeeded.

use crate::config::WorkflowConfig;
use crate::error::WorkflowError;
use crate::graph::{self, Stage};
use crate::prompt::build_verdict_prompt;
use crate::stages;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::time::timeout;
use tracing::{debug, info, warn};
use verifact_domain::traits::{CheckpointStore, CompletionProvider, SearchProvider};
use verifact_domain::{Source, ThreadId};

/// The result of one successful turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// The verdict text. May be empty if the completion provider returned an
    /// empty response; callers should treat that as "no verdict produced"
    /// and warn rather than crash.
    pub verdict: String,

    /// Citations for the verdict, at most three
    pub sources: Vec<Source>,
}

/// The fact-checking workflow engine.
///
/// Generic over the three infrastructure seams so tests run against mocks
/// and production runs against real providers. Provider handles are shared
/// and stateless with respect to conversation data; the only coordinated
/// mutable resource is the per-thread conversation state, which is guarded
/// by a per-thread lock held across one full turn (load, stages, save).
pub struct Workflow<S, C, K> {
    search: S,
    completion: C,
    store: K,
    config: WorkflowConfig,
    thread_locks: Mutex<HashMap<ThreadId, Arc<tokio::sync::Mutex<()>>>>,
}

impl<S, C, K> Workflow<S, C, K>
where
    S: SearchProvider,
    C: CompletionProvider,
    K: CheckpointStore,
{
    /// Create a new workflow engine.
    ///
    /// Validates the stage transition table up front; a malformed chain is a
    /// programming error surfaced before any turn can run.
    pub fn new(
        search: S,
        completion: C,
        store: K,
        config: WorkflowConfig,
    ) -> Result<Self, WorkflowError> {
        graph::validate_chain()?;
        Ok(Self {
            search,
            completion,
            store,
            config,
            thread_locks: Mutex::new(HashMap::new()),
        })
    }

    /// Run one fact-checking turn for `thread`.
    ///
    /// On success the conversation gains exactly two messages (the submitted
    /// user message and the verdict) and the new state is checkpointed. On
    /// any failure the stored state is left untouched, including the
    /// attempted user message.
    pub async fn run(
        &self,
        thread: &ThreadId,
        user_message: &str,
    ) -> Result<TurnOutcome, WorkflowError> {
        // Serialize whole turns per thread so concurrent submissions cannot
        // interleave their read-modify-write of the checkpoint.
        let turn_lock = self.thread_lock(thread);
        let _guard = turn_lock.lock().await;

        let mut state = self
            .store
            .load(thread)
            .await
            .map_err(|e| WorkflowError::Store(e.to_string()))?;

        let messages_before = state.message_count();
        state.push_user(user_message);

        let mut stage = Stage::Start;
        while let Some(next) = stage.next() {
            stage = next;
            match stage {
                Stage::Claim => {
                    stages::apply_claim(&mut state)?;
                    debug!(thread = %thread, claim = %state.claim, "claim captured");
                }
                Stage::Search => {
                    let results = timeout(
                        self.config.stage_timeout(),
                        self.search.search(&state.claim, self.config.max_results),
                    )
                    .await
                    .map_err(|_| WorkflowError::Timeout("search"))?
                    .map_err(|e| WorkflowError::Search(e.to_string()))?;

                    stages::apply_search(&mut state, &results);
                    debug!(
                        thread = %thread,
                        results = results.len(),
                        evidence_bytes = state.evidence.len(),
                        "evidence gathered"
                    );
                }
                Stage::Verdict => {
                    let prompt = build_verdict_prompt(&state.claim, &state.evidence);
                    let verdict = timeout(
                        self.config.stage_timeout(),
                        self.completion.complete(&prompt),
                    )
                    .await
                    .map_err(|_| WorkflowError::Timeout("verdict"))?
                    .map_err(|e| WorkflowError::Completion(e.to_string()))?;

                    stages::apply_verdict(&mut state, verdict);
                }
                Stage::Start | Stage::End => {}
            }
        }

        if state.verdict.is_empty() {
            warn!(thread = %thread, "completion provider returned an empty verdict");
        }
        debug_assert_eq!(state.message_count(), messages_before + 2);

        self.store
            .save(thread, &state)
            .await
            .map_err(|e| WorkflowError::Store(e.to_string()))?;

        info!(
            thread = %thread,
            messages = state.message_count(),
            sources = state.sources.len(),
            "turn complete"
        );

        Ok(TurnOutcome {
            verdict: state.verdict,
            sources: state.sources,
        })
    }

    /// The checkpoint store backing this engine.
    pub fn store(&self) -> &K {
        &self.store
    }

    fn thread_lock(&self, thread: &ThreadId) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self
            .thread_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            locks
                .entry(thread.clone())
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(()))),
        )
    }
}
