#![allow(dead_code)]

mod scripted_prompter;
mod tokens;

pub use scripted_prompter::{Answer, ScriptedPrompter};
pub use tokens::compact_token;
