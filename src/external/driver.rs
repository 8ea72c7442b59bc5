//! Session Driver
//!
//! Owns one [`GameSession`] and wires it to its collaborators: the prompt
//! source, the results sink, and the memorization countdown timer. The
//! engine's state transitions stay synchronous; everything here is the
//! thin asynchronous shell around them.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::core::rng::derive_round_seed;
use crate::external::prompt::{fetch_prompt_or_fallback, PromptSource};
use crate::external::results::{GameResults, ResultsSink};
use crate::game::session::{GameSession, Phase, TransitionError};

/// Error from driver-level orchestration.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// A gated phase transition was rejected by the engine.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// Results could not be assembled from the session.
    #[error("session has no submitted evaluation")]
    ResultsUnavailable,
}

/// Completion signal invoked once, with no arguments, on the terminal
/// `done` transition. The caller owns what happens next.
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// Orchestrates one game session end to end.
pub struct SessionDriver<P, R> {
    session: Arc<Mutex<GameSession>>,
    prompt_source: P,
    results_sink: R,
    tick_interval: Duration,
    countdown: Option<JoinHandle<()>>,
    on_complete: Option<CompletionCallback>,
}

impl<P: PromptSource, R: ResultsSink> SessionDriver<P, R> {
    /// Wrap a session with its collaborators.
    pub fn new(session: GameSession, prompt_source: P, results_sink: R) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            prompt_source,
            results_sink,
            tick_interval: Duration::from_secs(1),
            countdown: None,
            on_complete: None,
        }
    }

    /// Override the countdown tick period (tests use short intervals).
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Register the one-shot completion callback.
    pub fn set_on_complete(&mut self, callback: CompletionCallback) {
        self.on_complete = Some(callback);
    }

    /// Shared handle to the session, for UI event handlers.
    pub fn session(&self) -> Arc<Mutex<GameSession>> {
        self.session.clone()
    }

    /// Fetch the prompt (falling back on failure) and advance
    /// loading → start. Never blocks the game on the prompt dependency.
    pub async fn load(&self) {
        let prompt = fetch_prompt_or_fallback(&self.prompt_source).await;
        self.session.lock().await.prompt_ready(prompt);
    }

    /// Record the player's instructions acknowledgement.
    pub async fn set_instructions_read(&self, read: bool) {
        self.session.lock().await.set_instructions_read(read);
    }

    /// Start the round and spawn the countdown timer task.
    ///
    /// The round seed is derived from the session id, participant id and
    /// start time, so the target arrangement is auditable afterward.
    pub async fn start_round(&mut self) -> Result<(), DriverError> {
        let now = Utc::now();
        {
            let mut session = self.session.lock().await;
            let seed = derive_round_seed(
                session.id().as_bytes(),
                session.participant_id().as_bytes(),
                now.timestamp_millis(),
            );
            session.start_round(seed, now)?;
        }
        self.spawn_countdown();
        Ok(())
    }

    /// Submit the evaluation, push results downstream, and return them.
    ///
    /// The score is computed locally before submission; a sink failure is
    /// logged and noted in telemetry, and the results are still returned
    /// so the player sees their score.
    pub async fn submit_evaluation(&self) -> Result<GameResults, DriverError> {
        let results = {
            let mut session = self.session.lock().await;
            session.submit_evaluation(Utc::now())?;
            GameResults::from_session(&session).ok_or(DriverError::ResultsUnavailable)?
        };

        if let Err(err) = self.results_sink.submit(&results).await {
            warn!("results submission failed, score retained locally: {err}");
            self.session
                .lock()
                .await
                .report_submit_failure(err.to_string());
        }

        Ok(results)
    }

    /// Run the terminal evaluate → done transition and fire the
    /// completion callback exactly once.
    pub async fn finish(&mut self) -> Result<(), DriverError> {
        self.session.lock().await.complete()?;
        self.cancel_countdown();
        if let Some(callback) = self.on_complete.take() {
            callback();
        }
        Ok(())
    }

    /// Spawn the countdown task: one `tick_countdown` per interval while
    /// the session is memorizing, then exit.
    fn spawn_countdown(&mut self) {
        self.cancel_countdown();

        let session = self.session.clone();
        let period = self.tick_interval;
        self.countdown = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first interval tick completes immediately; skip it so
            // the countdown runs at full periods.
            interval.tick().await;
            loop {
                interval.tick().await;
                let mut session = session.lock().await;
                if session.phase() != Phase::Memorize {
                    break;
                }
                session.tick_countdown();
                if session.phase() != Phase::Memorize {
                    break;
                }
            }
        }));
    }

    /// Abort the countdown task so no stray tick can fire after the
    /// driver has moved on or been torn down.
    fn cancel_countdown(&mut self) {
        if let Some(handle) = self.countdown.take() {
            handle.abort();
        }
    }
}

impl<P, R> Drop for SessionDriver<P, R> {
    fn drop(&mut self) {
        if let Some(handle) = self.countdown.take() {
            handle.abort();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
