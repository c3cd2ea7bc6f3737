// Core payments module - checkout sessions and webhook intake.

pub mod payments_models;
pub mod payments_service;

pub use payments_models::*;
pub use payments_service::*;
