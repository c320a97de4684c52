//! Call-to-action resolution for a job card.

use url::form_urlencoded;

use crate::job::Job;

/// What the apply button on a card resolves to.
///
/// Priority: a direct application link wins over a WhatsApp contact; with
/// neither, the card shows a notice instead of navigating anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyAction {
    /// Open the posting's own application link.
    OpenUrl(String),
    /// Open a WhatsApp deep link with a prefilled message.
    WhatsApp(String),
    /// No link of either kind; show this notice instead.
    Notice(String),
}

impl ApplyAction {
    pub fn resolve(job: &Job) -> Self {
        if let Some(apply_url) = &job.apply_url {
            return Self::OpenUrl(apply_url.clone());
        }
        if let Some(number) = &job.whatsapp_number {
            return Self::WhatsApp(whatsapp_link(number, &job.title, &job.company));
        }
        Self::Notice(format!(
            "Apply to {} @ {} (no apply link provided).",
            job.title, job.company
        ))
    }
}

/// Build the `wa.me` deep link for a contact number.
///
/// Numbers arrive from the messaging channel as `whatsapp:+14155550100`;
/// the deep link wants bare digits, and the prefilled text travels
/// url-encoded in the `text` query parameter.
fn whatsapp_link(number: &str, title: &str, company: &str) -> String {
    let digits = number.trim_start_matches("whatsapp:").trim_start_matches('+');
    let message = format!("Hi, I'm interested in the {title} role at {company}.");
    let text: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();
    format!("https://wa.me/{digits}?text={text}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::map_jobs;
    use serde_json::json;

    fn single(raw: serde_json::Value) -> Job {
        map_jobs(&json!([raw])).remove(0)
    }

    #[test]
    fn apply_url_wins_over_whatsapp_contact() {
        let job = single(json!({
            "title": "Cashier",
            "business_name": "Sunny Market",
            "apply_url": "https://jobs.example/cashier",
            "contact_phone": "whatsapp:+14155550100"
        }));

        assert_eq!(
            ApplyAction::resolve(&job),
            ApplyAction::OpenUrl("https://jobs.example/cashier".to_string())
        );
    }

    #[test]
    fn whatsapp_contact_builds_a_prefilled_deep_link() {
        let job = single(json!({
            "title": "Cashier",
            "business_name": "Sunny Market",
            "contact_phone": "whatsapp:+14155550100"
        }));

        assert_eq!(
            ApplyAction::resolve(&job),
            ApplyAction::WhatsApp(
                "https://wa.me/14155550100?text=Hi%2C+I%27m+interested+in+the+Cashier+role+at+Sunny+Market."
                    .to_string()
            )
        );
    }

    #[test]
    fn bare_numbers_pass_through_untouched() {
        let job = single(json!({
            "title": "Barista",
            "business_name": "Moonlight Cafe",
            "contact_phone": "14155550123"
        }));

        match ApplyAction::resolve(&job) {
            ApplyAction::WhatsApp(link) => {
                assert!(link.starts_with("https://wa.me/14155550123?text="));
            }
            other => panic!("expected WhatsApp link, got {other:?}"),
        }
    }

    #[test]
    fn no_link_resolves_to_a_notice() {
        let job = single(json!({
            "title": "Prep Cook",
            "business_name": "Taqueria Verde"
        }));

        assert_eq!(
            ApplyAction::resolve(&job),
            ApplyAction::Notice(
                "Apply to Prep Cook @ Taqueria Verde (no apply link provided).".to_string()
            )
        );
    }
}
