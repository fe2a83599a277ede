//! HTML rendering of the operator page.

use std::fmt::Write;

use imds_core::types::ScheduledEventsDocument;
use imds_service::{EventSnapshot, ScenarioCatalog};

use crate::notice::Notice;

const STYLE: &str = "body{font-family:sans-serif;margin:2em;max-width:60em}\
section{margin-bottom:1.5em}\
.notice{padding:.5em 1em;border-radius:4px}\
.notice.success{background:#e6f4ea;color:#1e4620}\
.notice.error{background:#fdecea;color:#611a15}\
pre{background:#f5f5f5;padding:1em;overflow:auto}\
td,th{padding:.2em .8em;text-align:left}";

/// Escape text for interpolation into HTML content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full operator page.
pub fn render_index(
    catalog: &ScenarioCatalog,
    snapshot: &EventSnapshot,
    document: &ScheduledEventsDocument,
    notice: Option<&Notice>,
) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    html.push_str("<title>Scheduled Events Mock</title><style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body><h1>Scheduled Events Mock</h1>");

    if let Some(notice) = notice {
        let _ = write!(
            html,
            "<p class=\"notice {}\">{}</p>",
            notice.level,
            escape_html(&notice.message)
        );
    }

    render_selection(&mut html, catalog, snapshot);
    render_generate(&mut html, snapshot);
    render_catalog(&mut html, catalog);
    render_document(&mut html, snapshot, document);

    html.push_str("</body></html>");
    html
}

fn render_selection(html: &mut String, catalog: &ScenarioCatalog, snapshot: &EventSnapshot) {
    html.push_str("<section><h2>Scenario</h2>");
    match &snapshot.selected {
        Some(s) => {
            let _ = write!(
                html,
                "<p>Active scenario: <strong>{}</strong></p><p>{}</p>",
                escape_html(&s.name),
                escape_html(&s.scenario_description)
            );
        }
        None => html.push_str("<p>No scenario selected.</p>"),
    }

    html.push_str("<form method=\"post\" action=\"/set-scenario\"><select name=\"scenario\">");
    for template in catalog.iter() {
        let selected = snapshot
            .selected
            .as_ref()
            .is_some_and(|s| s.name == template.name);
        let name = escape_html(&template.name);
        let _ = write!(
            html,
            "<option value=\"{name}\"{}>{name}</option>",
            if selected { " selected" } else { "" }
        );
    }
    html.push_str("</select> <button type=\"submit\">Set scenario</button></form></section>");
}

fn render_generate(html: &mut String, snapshot: &EventSnapshot) {
    html.push_str("<section><h2>Event</h2>");
    if let Some(template) = &snapshot.selected {
        html.push_str(
            "<form method=\"post\" action=\"/generate-event\"><select name=\"event_status\">",
        );
        let suggested = snapshot.suggested_status();
        for status in template.statuses.iter() {
            let selected = suggested == Some(status);
            let status = escape_html(status.as_str());
            let _ = write!(
                html,
                "<option value=\"{status}\"{}>{status}</option>",
                if selected { " selected" } else { "" }
            );
        }
        html.push_str("</select> <button type=\"submit\">Generate event</button></form>");
    } else {
        html.push_str("<p>Select a scenario to generate events.</p>");
    }

    if let Some(event) = &snapshot.active {
        let _ = write!(
            html,
            "<p>Last event <code>{}</code>: {} ({}), generated {}</p>",
            event.event_id,
            escape_html(event.status.as_str()),
            escape_html(&event.scenario.name),
            event.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    html.push_str(
        "<form method=\"post\" action=\"/reset\"><button type=\"submit\">Clear event</button></form></section>",
    );
}

fn render_catalog(html: &mut String, catalog: &ScenarioCatalog) {
    html.push_str("<section><h2>Catalog</h2><table><tr><th>Name</th><th>Type</th>");
    html.push_str("<th>Source</th><th>Duration (s)</th><th>NotBefore delay (min)</th>");
    html.push_str("<th>Started phase (min)</th><th>Statuses</th></tr>");
    for t in catalog.iter() {
        let statuses: Vec<&str> = t.statuses.iter().map(|s| s.as_str()).collect();
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&t.name),
            escape_html(t.event_type.as_str()),
            escape_html(t.event_source.as_str()),
            t.duration_in_seconds,
            t.not_before_delay_minutes,
            t.started_duration_minutes,
            escape_html(&statuses.join(" → "))
        );
    }
    html.push_str("</table></section>");
}

fn render_document(
    html: &mut String,
    snapshot: &EventSnapshot,
    document: &ScheduledEventsDocument,
) {
    let json = serde_json::to_string_pretty(document)
        .unwrap_or_else(|e| format!("failed to render document: {e}"));
    let _ = write!(
        html,
        "<section><h2>/metadata/scheduledevents</h2><p>DocumentIncarnation: {}</p><pre>{}</pre></section>",
        snapshot.document_incarnation,
        escape_html(&json)
    );
}
