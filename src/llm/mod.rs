mod client;

pub use client::{ChatClient, OpenAiClient};
