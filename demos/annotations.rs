//! Attaching comments through an overlay.
//!
//! Run with: cargo run --example annotations

use serde::Serialize;
use serde_anno::{notes, to_string_annotated_with_options, AnnoOptions};
use std::error::Error;

#[derive(Serialize)]
struct ServerConfig {
    host: String,
    port: u16,
    limits: Limits,
    features: Vec<String>,
}

#[derive(Serialize)]
struct Limits {
    max_connections: u32,
    timeout_secs: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = ServerConfig {
        host: "0.0.0.0".to_string(),
        port: 8080,
        limits: Limits {
            max_connections: 512,
            timeout_secs: 30,
        },
        features: vec!["tls".to_string(), "http2".to_string()],
    };

    // The overlay mirrors the value's shape: trailing comments for entries,
    // nested overlays for children.
    let overlay = notes! {
        "port" => "behind the load balancer",
        "limits" => notes! {
            "max_connections" => "per worker",
            "timeout_secs" => "idle, not total",
        },
        "features" => notes! {
            "http2" => "requires tls",
        },
    };

    let text = to_string_annotated_with_options(&config, &overlay, AnnoOptions::plain())?;
    println!("{}", text);

    Ok(())
}
