// Core LiveKit module - access token issuing for video rooms.

pub mod livekit_models;
pub mod livekit_service;

pub use livekit_models::*;
pub use livekit_service::*;
