//! Print the Argon2id digest of a password, for provisioning `[[users]]` entries.
//!
//! Usage: `hash-password <password>`, or pipe the password on stdin.

use std::io::BufRead;

use anyhow::bail;
use auth::PasswordHasher;

fn main() -> Result<(), anyhow::Error> {
    let password = match std::env::args().nth(1) {
        Some(password) => password,
        None => {
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        bail!("Password must not be empty");
    }

    let digest = PasswordHasher::new().hash(&password)?;
    println!("{digest}");

    Ok(())
}
