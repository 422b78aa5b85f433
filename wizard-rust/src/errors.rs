use avenir_sdk::ImageServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Image service error: {0}")]
    Service(#[from] ImageServiceError),
    /// The fully-built prompt was blank after trimming; nothing was sent.
    #[error("Complète au moins une section pour générer un prompt.")]
    EmptySubmission,
    /// A generation sequence is already outstanding on this session.
    #[error("Une génération est déjà en cours.")]
    GenerationInFlight,
}

impl WizardError {
    /// The message shown to the end user. Raw transport diagnostics are
    /// replaced by a generic French message; service-sent messages pass
    /// through verbatim.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Service(ImageServiceError::Transport(_)) => {
                "Impossible de contacter le service.".to_string()
            }
            Self::Service(
                ImageServiceError::StatusCode(_, message)
                | ImageServiceError::Invariant(_, message)
                | ImageServiceError::InvalidInput(message),
            ) => message.clone(),
            Self::Service(ImageServiceError::NotFound(_)) => "Image introuvable.".to_string(),
            other => other.to_string(),
        }
    }
}
