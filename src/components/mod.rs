//! UI components for the chat widget.

pub mod chat_panel;
