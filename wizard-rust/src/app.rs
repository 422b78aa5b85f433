use std::sync::Arc;

use avenir_sdk::{
    resolve_image_url, GalleryPager, GalleryPagerOptions, ImageService, ResolveOptions,
};

use crate::{
    answers::AnswerSet,
    errors::WizardError,
    route::Route,
    session::{GeneratedArtifact, GenerationConfig, GenerationSession},
    steps::{FormWizard, WizardConfig},
};

/// The whole client-side state of one page session: answers, wizard
/// position, generation state, gallery cache and active route. Everything a
/// view layer renders lives here; nothing here renders.
pub struct AppState {
    service: Arc<dyn ImageService>,
    pub answers: AnswerSet,
    pub wizard: FormWizard,
    pub session: GenerationSession,
    pub gallery: GalleryPager,
    route: Route,
    resolve_options: ResolveOptions,
    single_image_error: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(service: Arc<dyn ImageService>) -> Self {
        Self::with_configs(
            service,
            WizardConfig::default(),
            GenerationConfig::default(),
            GalleryPagerOptions::default(),
            ResolveOptions::default(),
        )
    }

    #[must_use]
    pub fn with_configs(
        service: Arc<dyn ImageService>,
        wizard_config: WizardConfig,
        generation_config: GenerationConfig,
        pager_options: GalleryPagerOptions,
        resolve_options: ResolveOptions,
    ) -> Self {
        Self {
            answers: AnswerSet::new(),
            wizard: FormWizard::new(wizard_config),
            session: GenerationSession::with_config(service.clone(), generation_config),
            gallery: GalleryPager::with_options(service.clone(), pager_options),
            service,
            route: Route::Form,
            resolve_options,
            single_image_error: None,
        }
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The user-facing message of the last failed single-image resolution.
    #[must_use]
    pub fn single_image_error(&self) -> Option<&str> {
        self.single_image_error.as_deref()
    }

    /// Switch the active view. Returning to the form from any other view
    /// resets the answers and rewinds the wizard.
    pub fn navigate(&mut self, route: Route) {
        if route == Route::Form && self.route != Route::Form {
            self.answers.reset();
            self.wizard.jump_to_start();
        }
        self.single_image_error = None;
        self.route = route;
    }

    /// Re-derive the view from a pathname, as on browser back/forward.
    pub fn handle_location_change(&mut self, pathname: &str) {
        self.navigate(Route::parse(pathname));
    }

    /// Run the generation flow for the current answers. On success with an
    /// identifier, the active route switches to the single-image view; the
    /// caller pushes `route().path()` into the browser history.
    pub async fn generate(&mut self) -> Result<GeneratedArtifact, WizardError> {
        let artifact = self.session.generate(&self.answers).await?;
        if let Some(route) = artifact.route() {
            self.route = route;
        }
        Ok(artifact)
    }

    /// Resolve the image of the active single-image route to its url.
    pub async fn resolve_current_image(&mut self) -> Result<String, WizardError> {
        let Route::Image { id } = &self.route else {
            return Err(WizardError::Service(
                avenir_sdk::ImageServiceError::InvalidInput(
                    "no single-image route is active".to_string(),
                ),
            ));
        };
        let id = id.clone();

        let latest = self.session.artifact().and_then(|artifact| {
            artifact
                .id
                .as_deref()
                .map(|artifact_id| (artifact_id, artifact.url.as_str()))
        });
        let result = resolve_image_url(
            self.service.as_ref(),
            &id,
            latest,
            self.gallery.items(),
            &self.resolve_options,
        )
        .await;

        match result {
            Ok(url) => {
                self.single_image_error = None;
                Ok(url)
            }
            Err(error) => {
                tracing::error!(error = %error, id = %id, "single-image resolution failed");
                let error = WizardError::from(error);
                self.single_image_error = Some(error.user_message());
                Err(error)
            }
        }
    }
}
