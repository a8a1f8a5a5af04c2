//! services/api/src/bin/hash_password.rs
//!
//! Prints the argon2 PHC string for a password, ready for ADMIN_PASSWORD_HASH.
//! Reads the password from the first line of stdin so it stays out of shell history.

use catalog_core::auth::hash_password;
use std::io::BufRead;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut password = String::new();
    std::io::stdin().lock().read_line(&mut password)?;
    let password = password.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        return Err("expected a password on stdin".into());
    }
    println!("{}", hash_password(password)?);
    Ok(())
}
