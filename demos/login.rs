//! Example: logging in to Naver.
//!
//! Run with: NAVER_ID=... NAVER_PW=... cargo run --example login

use naver_jsrsa::{Credentials, NaverLogin};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for debug output (optional)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let id = std::env::var("NAVER_ID")?;
    let password = std::env::var("NAVER_PW")?;

    let client = NaverLogin::builder()
        // Optionally add proxy:
        // .proxy("http://127.0.0.1:8080")
        .build()?;

    match client.login(&Credentials::new(id, password)).await {
        Ok(session) => {
            println!("Success!");
            println!("  Cookie: {}", session.cookie_header());
        }
        Err(e) => {
            println!("Failed: {}", e);
        }
    }

    Ok(())
}
