// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Generate an `OUTSIDELY_USERS` entry for a user.
//!
//! Usage: `hash-password <user> <password>`

use outsidely::middleware::auth::{generate_salt, hash_password};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(user), Some(password), None) = (args.next(), args.next(), args.next()) else {
        eprintln!("Usage: hash-password <user> <password>");
        std::process::exit(2);
    };

    if user.contains(':') || user.contains(',') {
        anyhow::bail!("User name must not contain ':' or ','");
    }

    let salt = generate_salt()?;
    println!("{}:{}:{}", user, salt, hash_password(&salt, &password));
    Ok(())
}
