mod answers;
mod app;
mod careers;
mod errors;
pub mod options;
mod prompt;
mod route;
mod session;
mod steps;

pub use answers::{
    AnswerSet, JOB_SLOTS, MAX_DEVELOP, MAX_INTERESTS, MAX_STRENGTHS, WORD_SLOTS,
};
pub use app::AppState;
pub use careers::{build_careers_request, CareersVariant, EXPLORING_SENTINEL};
pub use errors::WizardError;
pub use prompt::build_prompt;
pub use route::{Route, IMAGE_ROUTE_SEGMENT};
pub use session::{GeneratedArtifact, GenerationConfig, GenerationSession};
pub use steps::{AvatarField, FormWizard, StepId, StrengthPolicy, WizardConfig, STEP_ORDER};
