// ABOUTME: Clipboard summarizer for the pitchdeck application
// ABOUTME: Formats a slide as plain text and writes it to the system clipboard

use crate::catalog::SlideRecord;
use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;

/// Format one slide as a deterministic plain-text block: id and title, the
/// visual blueprint, each bullet with a `- ` marker, and the power line in
/// quotes.
pub fn summarize(slide: &SlideRecord) -> String {
    let mut text = String::new();
    text.push_str(&format!("Slide {}: {}\n", slide.id, slide.title));
    text.push_str(&format!("Visual Blueprint: {}\n", slide.visual_blueprint));
    text.push_str("Key Bullets:\n");
    for bullet in slide.bullets {
        text.push_str(&format!("- {}\n", bullet));
    }
    text.push_str(&format!("Power Line: \"{}\"", slide.power_line));
    text
}

/// Write text to the system clipboard. Clipboard failures are deliberately
/// silent (the acknowledgement simply does not appear); returns whether the
/// write succeeded so the caller can decide about the acknowledgement flag.
pub fn copy_to_clipboard(text: &str) -> bool {
    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(text.to_string()) {
            Ok(()) => true,
            Err(e) => {
                debug!("Clipboard write failed: {}", e);
                false
            }
        },
        Err(e) => {
            debug!("Clipboard unavailable: {}", e);
            false
        }
    }
}
