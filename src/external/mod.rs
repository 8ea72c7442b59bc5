//! External Integrations
//!
//! Everything the deterministic game engine talks to but does not own:
//! telemetry recorders, the prompt service, the results endpoint, and
//! the async driver that orchestrates one session end to end. The
//! `game` module never imports from here; the dependency points inward.

pub mod driver;
pub mod prompt;
pub mod recorder;
pub mod results;

pub use driver::{DriverError, SessionDriver};
pub use prompt::{fetch_prompt_or_fallback, FixedPromptSource, PromptError, PromptSource};
pub use recorder::{ChannelRecorder, MemoryRecorder, NullRecorder};
pub use results::{GameResults, LoggingResultsSink, ResultsSink, SubmitError};
