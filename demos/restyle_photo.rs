//! Restyle a photo through a few catalog edits and undo one of them.
//!
//! ```bash
//! export GEMINI_API_KEY=...
//! cargo run --example restyle_photo -- photo.jpg
//! ```

use style_studio::{GeminiClient, ImageState, StudioSession};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "style_studio=debug".into()),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "photo.jpg".to_string());
    let bytes = std::fs::read(&path)?;

    let client = GeminiClient::from_env()?;
    let mut session = StudioSession::new(client);
    session.load_photo(ImageState::from_bytes("image/jpeg", &bytes));

    println!("Moving to a cyberpunk street...");
    session.apply_item("scene", "s_cyber").await?;

    println!("Suggested poses for this scene:");
    for pose in session.suggested_poses() {
        println!("  - {}", pose.name);
    }

    println!("Changing hair color...");
    session.apply_item("hair_color", "hc_blue").await?;

    println!("One custom touch...");
    session.apply_custom("add subtle neon reflections on the skin").await?;

    // Second thoughts about the custom touch
    session.undo()?;
    println!("History: {} states, cursor on the hair edit", session.history_len());

    if let Some(image) = session.current_image() {
        std::fs::write("restyled.png", image.decode()?)?;
        println!("Wrote restyled.png");
    }
    Ok(())
}
