//! Workflow orchestration for the marketing factory.
//!
//! This crate sequences the AI vendor calls behind each product operation:
//! website onboarding, influencer persona creation, video generation, and
//! the later analysis runs. All vendor access goes through a [`Studio`] of
//! trait objects, so every workflow is testable against scripted fakes.
//!
//! Workflows never write to the database. Each returns plain values and the
//! HTTP layer persists them, which is what lets the video handler record a
//! status transition between stages.
//!
//! # Example
//!
//! ```rust,ignore
//! use workflows::{onboarding, Studio};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let studio = Studio::from_env()?;
//!     let result = onboarding::onboard(&studio, "https://example.com").await?;
//!     println!("Analyzed {}", result.analysis.name);
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod error;
pub mod onboarding;
pub mod parse;
pub mod persona;
pub mod prompts;
pub mod studio;
pub mod video;

pub use error::WorkflowError;
pub use onboarding::{Onboarding, SiteAnalysis};
pub use persona::{Persona, PersonaProfile};
pub use studio::Studio;
pub use video::{aspect_for, ScriptBrief, ScriptDraft};
