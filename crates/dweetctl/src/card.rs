//! Card rendering for the terminal.
//!
//! Reproduces the widget card: bold title line, large status value, centered
//! time and date for the dweet's publish time, one orange line per failure
//! state, and a right-aligned footer with the render time. Presentation
//! only; all decisions about what to show were made by the view builder.

use chrono::{DateTime, Local};
use owo_colors::OwoColorize;

use dweet_common::{ViewModel, WidgetParams};

/// Card width in columns.
pub const CARD_WIDTH: usize = 42;

/// Card palette (RGB for true color terminals).
pub mod colors {
    /// Title line - white
    pub const TITLE: (u8, u8, u8) = (255, 255, 255);

    /// Status value - green
    pub const STATUS: (u8, u8, u8) = (50, 205, 50);

    /// Failure lines - orange
    pub const ERR: (u8, u8, u8) = (255, 165, 0);

    /// Time and date lines - light gray
    pub const BODY: (u8, u8, u8) = (160, 160, 160);

    /// Frame and footer - gray
    pub const DIM: (u8, u8, u8) = (128, 128, 128);
}

/// Render the card for one run.
///
/// `rendered_at` is the wall-clock moment of rendering (the footer line);
/// `color` false emits plain text for tests and non-TTY output.
pub fn render_card(
    params: &WidgetParams,
    view: &ViewModel,
    rendered_at: DateTime<Local>,
    color: bool,
) -> String {
    let hr = "─".repeat(CARD_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    lines.push(paint(&hr, colors::DIM, false, color));
    lines.push(paint(
        &title_line(&params.topic, &params.key),
        colors::TITLE,
        true,
        color,
    ));
    lines.push(String::new());

    match view {
        ViewModel::Success { value, timestamp, .. } => {
            let local = timestamp.with_timezone(&Local);
            lines.push(paint(&center(value), colors::STATUS, true, color));
            lines.push(paint(
                &center(&local.format("%H:%M:%S").to_string()),
                colors::BODY,
                false,
                color,
            ));
            lines.push(paint(
                &center(&local.format("%Y-%m-%d").to_string()),
                colors::BODY,
                false,
                color,
            ));
        }
        ViewModel::KeyMissing { key } => {
            lines.push(paint(
                &center(&format!("No {} found", key)),
                colors::ERR,
                false,
                color,
            ));
        }
        ViewModel::TopicMismatch { topic } => {
            lines.push(paint(
                &center(&format!("No '{}' topic found", topic)),
                colors::ERR,
                false,
                color,
            ));
        }
        ViewModel::FetchFailed | ViewModel::NetworkError { .. } => {
            lines.push(paint(
                &center("Error fetching dweet"),
                colors::ERR,
                false,
                color,
            ));
        }
    }

    lines.push(String::new());
    lines.push(paint(
        &right_align(&format!("Last updated: {}", rendered_at.format("%H:%M"))),
        colors::DIM,
        false,
        color,
    ));
    lines.push(paint(&hr, colors::DIM, false, color));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Title line: "topic : Key" with the key capitalized.
fn title_line(topic: &str, key: &str) -> String {
    format!("{} : {}", topic, capitalize(key))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Center text within the card; text wider than the card is left as-is.
fn center(text: &str) -> String {
    let len = text.chars().count();
    if len >= CARD_WIDTH {
        return text.to_string();
    }
    let pad = (CARD_WIDTH - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Right-align text within the card.
fn right_align(text: &str) -> String {
    let len = text.chars().count();
    if len >= CARD_WIDTH {
        return text.to_string();
    }
    format!("{}{}", " ".repeat(CARD_WIDTH - len), text)
}

fn paint(text: &str, rgb: (u8, u8, u8), bold: bool, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    let (r, g, b) = rgb;
    if bold {
        text.truecolor(r, g, b).bold().to_string()
    } else {
        text.truecolor(r, g, b).to_string()
    }
}
