//! Google Gemini session.
//!
//! Implements [`ModelSession`](crate::ModelSession) over the Generative
//! Language API. The conversation history lives client-side and is resent
//! with every `generateContent` call; callers only ever pass the new input.

mod api;
mod client;
mod wire;

pub use client::GeminiSession;
