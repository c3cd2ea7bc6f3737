// The infra module contains implementations of core traits.
// Each feature implementation goes in its own submodule.

#[path = "livekit/mod.rs"]
pub mod livekit;

#[path = "payments/mod.rs"]
pub mod payments;
