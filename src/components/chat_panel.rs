//! Chat panel: the transcript plus the prompt composer.

use leptos::prelude::*;

use crate::net::completion;
use crate::state::transcript::{Role, TranscriptState, TurnPhase};
use crate::util::id::generate_unique_id;

/// Chat panel showing the conversation and an input for new prompts.
///
/// Submitting appends the user's turn, then a pending bot turn that the
/// completion driver animates and settles. Both the Send button and the
/// Enter key go through the single `do_send` entry point.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let transcript = expect_context::<RwSignal<TranscriptState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest content in view as turns are appended or revealed.
    Effect::new(move || {
        let _ = transcript.get().turns.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }
        input.set(String::new());

        transcript.update(|t| t.push_user_turn(&text));

        let turn_id = generate_unique_id();
        transcript.update(|t| t.push_placeholder(turn_id.clone()));

        completion::spawn_completion(transcript, turn_id, text);
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let turns = transcript.get().turns;
                    if turns.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }

                    turns
                        .iter()
                        .map(|turn| {
                            let is_bot = turn.role == Role::Bot;
                            let (avatar, alt) = if is_bot {
                                ("/assets/bot.svg", "bot")
                            } else {
                                ("/assets/user.svg", "user")
                            };
                            let text = turn.text.clone();
                            let detail = match &turn.phase {
                                TurnPhase::Failed { detail } => Some(detail.clone()),
                                _ => None,
                            };
                            view! {
                                <div class="chat-panel__turn" class:chat-panel__turn--bot=is_bot>
                                    <img class="chat-panel__avatar" src=avatar alt=alt/>
                                    <div class="chat-panel__bubble">
                                        <span class="chat-panel__text">{text}</span>
                                        {detail
                                            .map(|d| {
                                                view! { <span class="chat-panel__error">{d}</span> }
                                            })}
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    name="prompt"
                    placeholder="Ask anything..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
