//! Prompt Source
//!
//! Fetches the textual prompt ("theory") shown before the round. On any
//! failure a fixed fallback prompt is substituted so the game is never
//! blocked by this dependency.

use tracing::warn;

use crate::game::session::Prompt;

/// Error from a prompt source.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PromptError {
    /// The source could not deliver a prompt.
    #[error("prompt source unavailable: {0}")]
    Unavailable(String),
}

/// Provider of the pre-round prompt text.
#[allow(async_fn_in_trait)]
pub trait PromptSource: Send + Sync {
    /// Fetch the next prompt to show.
    async fn fetch_prompt(&self) -> Result<Prompt, PromptError>;
}

/// Source that always serves one fixed prompt (tests, offline demos).
#[derive(Debug, Clone)]
pub struct FixedPromptSource(pub Prompt);

impl PromptSource for FixedPromptSource {
    async fn fetch_prompt(&self) -> Result<Prompt, PromptError> {
        Ok(self.0.clone())
    }
}

/// Fetch a prompt, substituting the fixed fallback on failure.
///
/// Always yields a prompt; the failure is logged, never propagated.
pub async fn fetch_prompt_or_fallback<P: PromptSource>(source: &P) -> Prompt {
    match source.fetch_prompt().await {
        Ok(prompt) => prompt,
        Err(err) => {
            warn!("prompt fetch failed, using fallback: {err}");
            Prompt::fallback()
        }
    }
}
