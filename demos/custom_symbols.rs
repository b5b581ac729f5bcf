//! Re-skinning the output symbol by symbol.
//!
//! Run with: cargo run --example custom_symbols

use serde_anno::{anno, AnnoOptions, Renderer};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let value = anno!({
        "engine": "v8",
        "threads": 4,
        "debug": false
    });

    // YAML-ish skin: no key quotes, no separators, hash comments
    let yamlish = AnnoOptions {
        indent_size: 2,
        symbol_object_key_quote: "".to_string(),
        symbol_item_separate: "".to_string(),
        symbol_comment: "  # ".to_string(),
        ..AnnoOptions::plain()
    };
    println!("{}\n", Renderer::new(yamlish).stringify(&value, None));

    // Lisp-ish skin
    let lispish = AnnoOptions {
        symbol_object_start: "(".to_string(),
        symbol_object_end: ")".to_string(),
        symbol_object_key_value_split: " . ".to_string(),
        ..AnnoOptions::plain()
    };
    println!("{}\n", Renderer::new(lispish).stringify(&value, None));

    // Tighter floats, no alignment
    let compact = AnnoOptions::plain()
        .with_float_precision(1)
        .with_align_object_value(false);
    let measurements = anno!({ "mean": 4.137, "stddev": 0.882 });
    println!("{}", Renderer::new(compact).stringify(&measurements, None));

    Ok(())
}
