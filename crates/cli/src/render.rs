//! Card rendering onto a text surface.

use std::io::{self, Write};

use gigboard_core::{ApplyAction, Job};

/// Shown instead of cards when nothing is visible.
pub const EMPTY_STATE: &str = "No postings to show. Try widening your filters or check back later.";

/// Render the visible set, fully replacing any previous output.
///
/// An empty list renders only the empty-state indicator.
pub fn render_jobs<W: Write>(out: &mut W, list: &[&Job]) -> io::Result<()> {
    if list.is_empty() {
        writeln!(out, "{EMPTY_STATE}")?;
        return Ok(());
    }

    for (idx, job) in list.iter().enumerate() {
        render_card(out, idx + 1, job)?;
    }
    Ok(())
}

fn render_card<W: Write>(out: &mut W, position: usize, job: &Job) -> io::Result<()> {
    writeln!(out, "[{position}] ({}) {}", job.source, job.title)?;
    writeln!(out, "    {} | {} | {}", job.company, job.pay, job.location)?;
    if !job.description.is_empty() {
        writeln!(out, "    {}", job.description)?;
    }
    writeln!(out, "    shift: {}  distance: {}", job.shift, job.distance_label())?;

    match ApplyAction::resolve(job) {
        ApplyAction::OpenUrl(url) => writeln!(out, "    apply: {url}")?,
        ApplyAction::WhatsApp(link) => writeln!(out, "    apply (WhatsApp): {link}")?,
        ApplyAction::Notice(notice) => writeln!(out, "    {notice}")?,
    }

    writeln!(out)
}

/// Render the visible set as a JSON array of canonical records.
pub fn render_json<W: Write>(out: &mut W, list: &[&Job]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, list)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gigboard_core::fallback_jobs;
    use gigboard_core::map_jobs;
    use serde_json::json;

    fn rendered(list: &[&Job]) -> String {
        let mut buf = Vec::new();
        render_jobs(&mut buf, list).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_list_renders_the_empty_state_only() {
        let output = rendered(&[]);
        assert_eq!(output.trim_end(), EMPTY_STATE);
    }

    #[test]
    fn cards_show_every_display_field() {
        let jobs = fallback_jobs();
        let view: Vec<&Job> = jobs.iter().collect();
        let output = rendered(&view);

        assert!(!output.contains(EMPTY_STATE));
        assert!(output.contains("[1] (WhatsApp) Cashier"));
        assert!(output.contains("Sunny Market | $18/hr | San Francisco, CA"));
        assert!(output.contains("Evening cashier for a neighborhood grocery."));
        assert!(output.contains("shift: Mon-Fri 4pm-10pm  distance: 2 mi"));
        assert!(output.contains("[2] (Scraped) Barista"));
        assert!(output.contains("[3] (WhatsApp) Prep Cook"));
    }

    #[test]
    fn unknown_distance_shows_the_nearby_pill() {
        let jobs = map_jobs(&json!([{"title": "Courier", "business_name": "Go Go Go"}]));
        let view: Vec<&Job> = jobs.iter().collect();

        assert!(rendered(&view).contains("distance: Nearby"));
    }

    #[test]
    fn cta_prefers_the_apply_url() {
        let jobs = map_jobs(&json!([{
            "title": "Cashier",
            "business_name": "Sunny Market",
            "apply_url": "https://jobs.example/cashier",
            "contact_phone": "whatsapp:+14155550100"
        }]));
        let view: Vec<&Job> = jobs.iter().collect();
        let output = rendered(&view);

        assert!(output.contains("apply: https://jobs.example/cashier"));
        assert!(!output.contains("wa.me"));
    }

    #[test]
    fn cta_without_links_shows_the_notice() {
        let jobs = fallback_jobs();
        let view: Vec<&Job> = jobs.iter().collect();

        assert!(rendered(&view).contains("Apply to Cashier @ Sunny Market (no apply link provided)."));
    }

    #[test]
    fn json_mode_emits_canonical_records() {
        let jobs = fallback_jobs();
        let view: Vec<&Job> = jobs.iter().collect();

        let mut buf = Vec::new();
        render_json(&mut buf, &view).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 3);
        assert_eq!(parsed[0]["title"], "Cashier");
        assert_eq!(parsed[0]["pay_min"], 18.0);
        assert_eq!(parsed[2]["distance_mi"], 6.0);
    }
}
