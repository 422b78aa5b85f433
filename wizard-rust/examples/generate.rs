//! Walk the whole form programmatically and generate an avatar against the
//! live service. Set `AVENIR_API_URL` to point elsewhere.

use std::sync::Arc;

use avenir_sdk::google::GoogleImageService;
use avenir_wizard::{options, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let service = Arc::new(GoogleImageService::default());
    let mut app = AppState::new(service);

    app.answers.toggle_strength(options::COGNITIVE[0].label);
    app.answers.toggle_strength(options::EMOTIONAL[2].label);
    app.answers.toggle_strength(options::SOCIAL[1].label);
    app.answers.toggle_develop(options::DEVELOP[8].label);
    app.answers.toggle_interest(options::INTERESTS[0].label);
    app.answers.set_job(0, "Vétérinaire");
    app.answers.gender = "Peu importe".to_string();
    app.answers.expression = "Curieux".to_string();
    app.answers.toggle_posture(options::AVATAR_POSTURES[2]);
    app.answers.hair = "mi-longs, ondulés".to_string();
    app.answers.toggle_style(options::AVATAR_STYLES[1]);

    while !app.wizard.is_last_step() {
        assert!(app.wizard.next(&app.answers), "step should validate");
    }

    println!("--- prompt ---");
    println!("{}", avenir_wizard::build_prompt(&app.answers));

    let artifact = app.generate().await?;
    println!("--- result ---");
    println!("url: {}", artifact.url);
    println!("careers: {:?}", artifact.suggested_careers);
    println!("route: {}", app.route().path());

    Ok(())
}
