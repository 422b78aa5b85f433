use std::sync::Arc;

use avenir_sdk::{
    avenir_sdk_test::MockImageService, CareerSuggestions, CareersRequest, GeneratedImage,
    ImageServiceError,
};
use avenir_wizard::{
    AnswerSet, CareersVariant, GenerationConfig, GenerationSession, Route, WizardError,
};

fn suggestions(careers: &[&str], enriched_prompt: Option<&str>) -> CareerSuggestions {
    CareerSuggestions {
        careers: careers.iter().map(|c| (*c).to_string()).collect(),
        enriched_prompt: enriched_prompt.map(str::to_string),
        is_fallback: false,
    }
}

fn image(url: &str, id: Option<&str>) -> GeneratedImage {
    GeneratedImage {
        url: url.to_string(),
        revised_prompt: None,
        id: id.map(str::to_string),
        suggested_careers: Vec::new(),
    }
}

fn answers_with_job() -> AnswerSet {
    let mut answers = AnswerSet::new();
    answers.set_job(0, "Vétérinaire");
    answers
}

#[tokio::test]
async fn career_list_is_truncated_to_three_in_server_order() {
    let service = Arc::new(MockImageService::new());
    service.enqueue_careers(Ok(suggestions(
        &["Ingénieur", "Designer", "Vétérinaire", "Pilote"],
        None,
    )));
    service.enqueue_generate(Ok(image("https://cdn/img-a.png", Some("a"))));

    let mut session = GenerationSession::new(service.clone());
    let artifact = session.generate(&answers_with_job()).await.unwrap();

    assert_eq!(
        artifact.suggested_careers,
        vec!["Ingénieur", "Designer", "Vétérinaire"]
    );
    // The image call gets the same truncated list.
    let requests = service.tracked_image_requests();
    assert_eq!(
        requests[0].suggested_careers.as_deref(),
        Some(&["Ingénieur".to_string(), "Designer".to_string(), "Vétérinaire".to_string()][..])
    );
}

#[tokio::test]
async fn enriched_prompt_replaces_the_built_one() {
    let service = Arc::new(MockImageService::new());
    service.enqueue_careers(Ok(suggestions(&[], Some("prompt enrichi"))));
    service.enqueue_generate(Ok(image("https://cdn/img-a.png", Some("a"))));

    let mut session = GenerationSession::new(service.clone());
    session.generate(&answers_with_job()).await.unwrap();

    let requests = service.tracked_image_requests();
    assert_eq!(requests[0].prompt, "prompt enrichi");
    assert!(requests[0].suggested_careers.is_none());
}

#[tokio::test]
async fn without_an_enriched_prompt_the_built_one_is_sent() {
    let service = Arc::new(MockImageService::new());
    service.enqueue_careers(Ok(suggestions(&[], None)));
    service.enqueue_generate(Ok(image("https://cdn/img-a.png", Some("a"))));

    let mut session = GenerationSession::new(service.clone());
    session.generate(&answers_with_job()).await.unwrap();

    let requests = service.tracked_image_requests();
    assert!(requests[0].prompt.contains("Vétérinaire"));
    assert!(requests[0].prompt.contains("Crée un avatar inspirant"));
}

#[tokio::test]
async fn the_profile_variant_sends_raw_answers_to_the_careers_call() {
    let service = Arc::new(MockImageService::new());
    service.enqueue_careers(Ok(suggestions(&[], None)));
    service.enqueue_generate(Ok(image("https://cdn/img-a.png", Some("a"))));

    let mut session = GenerationSession::with_config(
        service.clone(),
        GenerationConfig {
            careers_variant: CareersVariant::Profile,
            ..GenerationConfig::default()
        },
    );
    session.generate(&answers_with_job()).await.unwrap();

    match &service.tracked_careers_requests()[0] {
        CareersRequest::Profile { metiers, .. } => {
            assert_eq!(metiers, &vec!["Vétérinaire".to_string()]);
        }
        CareersRequest::Prompt { .. } => panic!("expected the profile body"),
    }
}

#[tokio::test]
async fn a_careers_failure_aborts_before_the_image_call() {
    let service = Arc::new(MockImageService::new());
    service.enqueue_careers(Err(ImageServiceError::StatusCode(
        reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        "Service momentanément indisponible".to_string(),
    )));

    let mut session = GenerationSession::new(service.clone());
    let error = session.generate(&answers_with_job()).await.unwrap_err();

    assert!(matches!(error, WizardError::Service(_)));
    assert!(service.tracked_image_requests().is_empty());
    assert_eq!(
        session.error(),
        Some("Service momentanément indisponible")
    );
    assert!(session.artifact().is_none());
}

#[tokio::test]
async fn an_empty_edited_prompt_is_refused_locally() {
    let service = Arc::new(MockImageService::new());
    let mut session = GenerationSession::new(service.clone());

    let error = session
        .generate_with_prompt(&AnswerSet::new(), "   \n".to_string())
        .await
        .unwrap_err();

    assert!(matches!(error, WizardError::EmptySubmission));
    assert!(service.tracked_careers_requests().is_empty());
    assert!(service.tracked_image_requests().is_empty());
    assert_eq!(
        session.error(),
        Some("Complète au moins une section pour générer un prompt.")
    );
}

#[tokio::test]
async fn a_successful_generation_carries_the_single_image_route() {
    let service = Arc::new(MockImageService::new());
    service.enqueue_careers(Ok(suggestions(&["Ingénieur"], None)));
    service.enqueue_generate(Ok(image("https://cdn/img-abc123.png?sig=x", Some("abc123"))));

    let mut session = GenerationSession::new(service);
    let artifact = session.generate(&answers_with_job()).await.unwrap();

    assert_eq!(
        artifact.route(),
        Some(Route::Image {
            id: "abc123".to_string()
        })
    );
    assert_eq!(session.artifact(), Some(&artifact));
}

#[tokio::test]
async fn an_artifact_without_id_yields_no_route() {
    let service = Arc::new(MockImageService::new());
    service.enqueue_careers(Ok(suggestions(&[], None)));
    service.enqueue_generate(Ok(image("https://cdn/photo.jpeg", None)));

    let mut session = GenerationSession::new(service);
    let artifact = session.generate(&answers_with_job()).await.unwrap();
    assert_eq!(artifact.route(), None);
}

#[tokio::test]
async fn each_generation_replaces_the_artifact_wholesale() {
    let service = Arc::new(MockImageService::new());
    service.enqueue_careers(Ok(suggestions(&["Ingénieur"], None)));
    service.enqueue_generate(Ok(image("https://cdn/img-1.png", Some("1"))));
    service.enqueue_careers(Ok(suggestions(&[], None)));
    service.enqueue_generate(Ok(image("https://cdn/img-2.png", Some("2"))));

    let mut session = GenerationSession::new(service);
    session.generate(&answers_with_job()).await.unwrap();
    let second = session.generate(&answers_with_job()).await.unwrap();

    assert_eq!(second.id.as_deref(), Some("2"));
    assert!(second.suggested_careers.is_empty());
    assert_eq!(session.artifact(), Some(&second));
}
