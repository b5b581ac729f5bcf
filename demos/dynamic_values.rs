//! Building AnnoValue trees at runtime.
//!
//! Run with: cargo run --example dynamic_values

use serde_anno::{AnnoMap, AnnoOptions, AnnoValue, NoteMap, Renderer};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Build a tree without any serde derive in sight
    let mut totals = AnnoMap::new();
    totals.insert("requests".to_string(), AnnoValue::from(18_240));
    totals.insert("errors".to_string(), AnnoValue::from(12));
    totals.insert("error_rate".to_string(), AnnoValue::from(0.000_658));

    let mut report = AnnoMap::new();
    report.insert("window".to_string(), AnnoValue::from("24h"));
    report.insert("totals".to_string(), AnnoValue::Object(totals));
    report.insert(
        "regions".to_string(),
        AnnoValue::Array(vec![
            AnnoValue::from("eu-west"),
            AnnoValue::from("us-east"),
        ]),
    );

    // Annotate by exact value: the region string, not its position
    let mut region_notes = NoteMap::new();
    region_notes.insert_value(AnnoValue::from("us-east"), "primary");

    let mut overlay = NoteMap::new();
    overlay.insert("window", "rolling");
    overlay.insert("regions", region_notes);

    let renderer = Renderer::new(AnnoOptions::plain());
    println!("{}", renderer.stringify(&AnnoValue::Object(report), Some(&overlay)));

    Ok(())
}
