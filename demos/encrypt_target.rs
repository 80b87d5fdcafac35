//! Encrypt credentials against a session info line, offline.
//!
//! Run with: cargo run --example encrypt_target -- "<sessionKey,keyName,modulus,exponent>" id pw

use naver_jsrsa::{Credentials, SessionInfo};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(line), Some(id), Some(password)) = (args.next(), args.next(), args.next()) else {
        anyhow::bail!("usage: encrypt_target <session info> <id> <password>");
    };

    let info: SessionInfo = line.parse()?;
    let target = Credentials::new(id, password).encrypt_target(&info.session_key)?;

    match info.public_key()?.encrypt(&target)? {
        Some(encpw) => println!("encpw={}\nencnm={}", encpw, info.key_name),
        None => println!("no ciphertext produced, run again"),
    }

    Ok(())
}
