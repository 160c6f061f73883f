//! Terminal rendering for quiz sessions and recommendations.
//!
//! Nothing here decides anything: every line is derived from session state or
//! from a finished bundle.

pub mod bundle;
pub mod insights;
pub mod progress;

pub use bundle::render_bundle;
pub use insights::{education_tips, render_insights, social_proof, Insight};
pub use progress::{milestone, percent_complete, progress_line, NavigationState};
