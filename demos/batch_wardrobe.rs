//! Generate eight themed outfits, pick one, and save it to a wardrobe
//! file that survives across runs.
//!
//! ```bash
//! export GEMINI_API_KEY=...
//! cargo run --example batch_wardrobe -- photo.jpg
//! ```

use style_studio::{
    EditOutcome, GeminiClient, ImageState, JsonFileStore, StudioSession, Wardrobe,
};

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
    let wardrobe = Wardrobe::open(Box::new(JsonFileStore::new("wardrobe.json")));
    let mut session = StudioSession::with_wardrobe(client, wardrobe);
    session.load_photo(ImageState::from_bytes("image/jpeg", &bytes));

    println!("Generating the 8-style wardrobe batch (this takes a while)...");
    match session.apply_item("outfit", "o_batch").await? {
        EditOutcome::PendingReview { options } => {
            println!("{options} outfits came back; committing option 1");
            if let Some(pending) = session.pending_candidates() {
                for (i, reason) in pending.failures.iter().enumerate() {
                    eprintln!("  attempt {} failed: {reason}", i + 1);
                }
            }
            session.select_candidate(0).await?;
        }
        EditOutcome::Committed => println!("Committed directly"),
    }

    let look = session.save_look("Batch pick", "outfit")?;
    println!("Saved look {} ({})", look.name, look.id);
    println!("Wardrobe now holds {} look(s)", session.looks().len());

    if let Some(image) = session.current_image() {
        std::fs::write("outfit.png", image.decode()?)?;
        println!("Wrote outfit.png");
    }
    Ok(())
}
