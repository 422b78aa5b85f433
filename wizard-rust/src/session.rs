use std::sync::Arc;

use avenir_sdk::{ImageRequest, ImageService};
use serde::{Deserialize, Serialize};

use crate::{
    answers::AnswerSet,
    careers::{build_careers_request, CareersVariant},
    errors::WizardError,
    prompt::build_prompt,
    route::Route,
};

/// Configuration of the generation flow.
/// # Default Values
/// - `careers_variant`: `Prompt`
/// - `max_suggested_careers`: 3
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub careers_variant: CareersVariant,
    /// The UI shows at most this many suggested careers, in server order.
    pub max_suggested_careers: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            careers_variant: CareersVariant::default(),
            max_suggested_careers: 3,
        }
    }
}

/// The outcome of one successful generation. Replaced wholesale each time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub url: String,
    pub revised_prompt: Option<String>,
    pub suggested_careers: Vec<String>,
    pub is_fallback_careers: bool,
    pub id: Option<String>,
}

impl GeneratedArtifact {
    /// The single-image route for this artifact, when it has an identifier.
    #[must_use]
    pub fn route(&self) -> Option<Route> {
        self.id.as_ref().map(|id| Route::Image { id: id.clone() })
    }
}

/// Sequences the careers call and the image call for one page session and
/// carries the UI-visible loading / error / result state.
///
/// Single-flight: a new generation is refused while one is outstanding,
/// matching a UI that disables its trigger while `loading` is true.
pub struct GenerationSession {
    service: Arc<dyn ImageService>,
    config: GenerationConfig,
    loading: bool,
    error: Option<String>,
    artifact: Option<GeneratedArtifact>,
}

impl GenerationSession {
    #[must_use]
    pub fn new(service: Arc<dyn ImageService>) -> Self {
        Self::with_config(service, GenerationConfig::default())
    }

    #[must_use]
    pub fn with_config(service: Arc<dyn ImageService>, config: GenerationConfig) -> Self {
        Self {
            service,
            config,
            loading: false,
            error: None,
            artifact: None,
        }
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The user-facing message of the last failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn artifact(&self) -> Option<&GeneratedArtifact> {
        self.artifact.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Build the prompt from the answers and run the full generation flow.
    pub async fn generate(
        &mut self,
        answers: &AnswerSet,
    ) -> Result<GeneratedArtifact, WizardError> {
        let prompt = build_prompt(answers);
        self.generate_with_prompt(answers, prompt).await
    }

    /// Run the generation flow with an explicit prompt, as when the user has
    /// edited the preview before sending.
    pub async fn generate_with_prompt(
        &mut self,
        answers: &AnswerSet,
        prompt: String,
    ) -> Result<GeneratedArtifact, WizardError> {
        if self.loading {
            return Err(WizardError::GenerationInFlight);
        }
        if prompt.trim().is_empty() {
            let error = WizardError::EmptySubmission;
            self.error = Some(error.user_message());
            return Err(error);
        }

        self.loading = true;
        self.error = None;
        self.artifact = None;

        let result = self.run(answers, prompt).await;
        self.loading = false;

        match result {
            Ok(artifact) => {
                self.artifact = Some(artifact.clone());
                Ok(artifact)
            }
            Err(error) => {
                tracing::error!(error = %error, "avatar generation failed");
                self.error = Some(error.user_message());
                Err(error)
            }
        }
    }

    async fn run(
        &self,
        answers: &AnswerSet,
        prompt: String,
    ) -> Result<GeneratedArtifact, WizardError> {
        let careers_request =
            build_careers_request(answers, self.config.careers_variant, &prompt);
        let suggestions = self.service.suggest_careers(careers_request).await?;

        let mut careers = suggestions.careers;
        careers.truncate(self.config.max_suggested_careers);
        let final_prompt = suggestions.enriched_prompt.unwrap_or(prompt);

        let image = self
            .service
            .generate_image(ImageRequest::new(final_prompt, careers.clone()))
            .await?;

        Ok(GeneratedArtifact {
            url: image.url,
            revised_prompt: image.revised_prompt,
            suggested_careers: careers,
            is_fallback_careers: suggestions.is_fallback,
            id: image.id,
        })
    }
}
