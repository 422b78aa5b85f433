//! Page through the gallery of previously generated avatars.

use std::sync::Arc;

use avenir_sdk::{google::GoogleImageService, GalleryPager};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let service = Arc::new(GoogleImageService::default());
    let mut pager = GalleryPager::new(service);

    let added = pager.load_next_page().await?;
    println!("first page: {added} image(s)");
    for item in pager.items() {
        println!("  #{} {}", item.id, item.url);
    }

    if pager.has_more() {
        let added = pager.load_next_page().await?;
        println!("second page: {added} more image(s)");
    }

    Ok(())
}
