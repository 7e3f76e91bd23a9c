//! Shared library for the Indian Food skill Lambda functions.
//!
//! This crate provides the voice-platform envelope types, the nutrition facts client,
//! and the response builders used by the skill handler.

pub mod config;
pub mod error;
pub mod food;
pub mod models;
pub mod speechlet;

pub use config::Config;
pub use error::{Error, Result};
pub use food::{FoodClient, FoodLookup, NutritionRecord, Quantity};
pub use models::{
    Intent, RequestType, Session, SessionAttributes, SkillEvent, SkillRequest, SkillResponse,
    SpeechletResponse,
};
pub use speechlet::{build_response, build_speechlet_response};
