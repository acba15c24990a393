//! Leptos view components for the parliament workspace.

pub mod activation_panel;
pub mod chat_panel;
pub mod notice_banner;
pub mod participant_rail;
pub mod proposal_panel;
pub mod session_controls;
pub mod status_bar;
pub mod upload_panel;
