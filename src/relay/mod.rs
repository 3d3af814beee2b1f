//! Prompt forwarding: trigger shapes in, one upstream call, one response out.

mod forwarder;
mod invocation;
mod response;
mod variant;

pub use forwarder::Forwarder;
pub use invocation::Invocation;
pub use response::{InboundResponse, Reply};
pub use variant::{ClientKind, DEFAULT_PROMPT, NO_RESPONSE_FALLBACK, Shaping, Variant};
