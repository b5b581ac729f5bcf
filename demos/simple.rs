//! Basic rendering of a serializable struct.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_anno::{to_string_with_options, AnnoOptions};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    // Plain symbols for terminal output
    let text = to_string_with_options(&users, AnnoOptions::plain())?;
    println!("Rendered output:\n{}\n", text);

    // The default symbols target markup embedding
    let html = serde_anno::to_string(&users[0])?;
    println!("Markup output:\n{}", html);

    Ok(())
}
