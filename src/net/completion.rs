//! Per-turn completion request lifecycle.
//!
//! Drives one submission end to end against the transcript: the placeholder
//! turn shows the cycling-dot animation while the request is in flight, then
//! settles into either the typewriter reveal (success) or the fixed failure
//! text with the error detail inline (failure).
//!
//! Each in-flight turn owns its own [`PendingAnimation`] handle, so
//! overlapping submissions animate and settle independently.

#[cfg(test)]
#[path = "completion_test.rs"]
mod completion_test;

use crate::net::types::CompletionError;
use crate::state::transcript::TranscriptState;

/// Milliseconds between cycling-dot frames on a pending turn.
pub const DOT_TICK_MS: u32 = 300;

/// Milliseconds between revealed characters of a reply.
pub const TYPE_TICK_MS: u64 = 20;

/// Kick off the request lifecycle for the turn tagged `turn_id`.
///
/// Fire-and-forget: the driver runs as a local task on the browser event
/// loop. Outside a `csr` build this is a no-op.
pub fn spawn_completion(
    transcript: leptos::prelude::RwSignal<TranscriptState>,
    turn_id: String,
    prompt: String,
) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(run_completion(transcript, turn_id, prompt));
    #[cfg(not(feature = "csr"))]
    {
        let _ = (transcript, turn_id, prompt);
    }
}

#[cfg(feature = "csr")]
async fn run_completion(
    transcript: leptos::prelude::RwSignal<TranscriptState>,
    turn_id: String,
    prompt: String,
) {
    use leptos::prelude::Update;

    use crate::config::ChatConfig;
    use crate::net::api;

    let config = ChatConfig::from_build_env();

    let pending = PendingAnimation::start(transcript, turn_id.clone());
    let outcome = api::request_completion(&config.endpoint, &prompt).await;
    pending.cancel();

    if let Err(err) = &outcome {
        log::warn!("completion request failed: {err}");
    }

    let reveal = transcript
        .try_update(|t| apply_outcome(t, &turn_id, outcome))
        .flatten();

    if let Some(text) = reveal {
        run_typewriter(transcript, &turn_id, &text).await;
    }
}

/// Fold a settled request into the transcript.
///
/// Returns the trimmed reply text when there is one to reveal; on failure
/// the turn gets the fixed failure text with the error detail inline.
pub fn apply_outcome(
    transcript: &mut TranscriptState,
    turn_id: &str,
    outcome: Result<String, CompletionError>,
) -> Option<String> {
    match outcome {
        Ok(reply) => transcript.resolve_bot_turn(turn_id, &reply),
        Err(err) => {
            transcript.fail_bot_turn(turn_id, err.detail());
            None
        }
    }
}

/// Cycling-dot animation bound to one pending turn.
///
/// Starting clears the placeholder text, then each tick swaps in the next
/// dot frame. The timer stops when the handle is cancelled or dropped.
#[cfg(feature = "csr")]
struct PendingAnimation {
    interval: gloo_timers::callback::Interval,
}

#[cfg(feature = "csr")]
impl PendingAnimation {
    fn start(
        transcript: leptos::prelude::RwSignal<TranscriptState>,
        turn_id: String,
    ) -> Self {
        use leptos::prelude::Update;

        use crate::util::anim::dot_frame;

        transcript.update(|t| t.set_turn_text(&turn_id, String::new()));

        let mut tick: u32 = 0;
        let interval = gloo_timers::callback::Interval::new(DOT_TICK_MS, move || {
            tick = tick.wrapping_add(1);
            transcript.update(|t| t.set_turn_text(&turn_id, dot_frame(tick).to_owned()));
        });

        Self { interval }
    }

    fn cancel(self) {
        self.interval.cancel();
    }
}

/// Reveal `text` into the tagged turn one character per tick.
#[cfg(feature = "csr")]
async fn run_typewriter(
    transcript: leptos::prelude::RwSignal<TranscriptState>,
    turn_id: &str,
    text: &str,
) {
    use leptos::prelude::Update;

    use crate::util::anim::Typewriter;

    for frame in Typewriter::new(text) {
        transcript.update(|t| t.set_turn_text(turn_id, frame));
        gloo_timers::future::sleep(std::time::Duration::from_millis(TYPE_TICK_MS)).await;
    }
}
