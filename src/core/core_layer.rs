// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "moderation/mod.rs"]
pub mod moderation;

#[path = "livekit/mod.rs"]
pub mod livekit;

#[path = "payments/mod.rs"]
pub mod payments;
