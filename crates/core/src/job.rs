//! Canonical job record and raw-feed normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A job posting after normalization.
///
/// Feeds disagree on field names (`company_name` vs `business_name`,
/// `shift` vs `shift_times`, ...). Mapping resolves each canonical field
/// from its synonyms and defaults the rest, so downstream code never sees
/// an absent display field: unknown text is an empty string, and only the
/// two numeric filter inputs carry "not present" states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    /// Code issued when the posting was published. Used only to scope the
    /// board to a single referred posting.
    pub confirmation_code: Option<String>,
    pub title: String,
    pub company: String,
    /// Pay as display text, e.g. `"$18/hr"`.
    pub pay: String,
    /// Numeric floor consumed by the pay filter.
    pub pay_min: f64,
    pub location: String,
    /// Distance in miles. Feeds that omit it (or send zero) produce
    /// `None`, which no distance ceiling restricts.
    pub distance_mi: Option<f64>,
    pub shift: String,
    pub description: String,
    /// Provenance label shown on the card pill.
    pub source: String,
    pub apply_url: Option<String>,
    pub whatsapp_number: Option<String>,
    pub pay_type: String,
    pub images: Vec<String>,
}

impl Job {
    /// Text for the distance pill.
    pub fn distance_label(&self) -> String {
        match self.distance_mi {
            Some(mi) => format!("{mi} mi"),
            None => "Nearby".to_string(),
        }
    }
}

/// Map a raw feed payload into canonical records.
///
/// A non-array payload maps to an empty list. Mapping is total: elements
/// of any shape produce a record, whatever fields they are missing.
pub fn map_jobs(payload: &Value) -> Vec<Job> {
    let Some(items) = payload.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .map(|(idx, raw)| map_job(raw, idx))
        .collect()
}

fn map_job(raw: &Value, idx: usize) -> Job {
    Job {
        id: text_field(raw, &["id"]).unwrap_or_else(|| format!("job-{idx}")),
        confirmation_code: text_field(raw, &["confirmation_code", "ref"]),
        title: text_field(raw, &["title"]).unwrap_or_default(),
        company: text_field(raw, &["company_name", "business_name"]).unwrap_or_default(),
        pay: text_field(raw, &["pay_display", "pay_rate"]).unwrap_or_default(),
        pay_min: number_field(raw, &["pay_min", "pay_rate_min"]).unwrap_or(0.0),
        location: text_field(raw, &["location", "location_city"]).unwrap_or_default(),
        distance_mi: number_field(raw, &["distance_mi"]),
        shift: text_field(raw, &["shift", "shift_times"]).unwrap_or_default(),
        description: text_field(raw, &["description"]).unwrap_or_default(),
        source: text_field(raw, &["source", "channel", "source_channel"])
            .unwrap_or_else(|| "Job".to_string()),
        apply_url: text_field(raw, &["apply_url"]),
        whatsapp_number: text_field(raw, &["contact_phone"]),
        pay_type: text_field(raw, &["pay_type", "payment_type"]).unwrap_or_default(),
        images: list_field(raw, &["images", "media_urls"]),
    }
}

/// First synonym that is present and non-blank, as display text.
///
/// Feeds occasionally send numbers where text is expected (a bare pay
/// rate, a numeric id); those keep their JSON display form. Blank strings
/// and zero numbers fall through to the next synonym.
fn text_field(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match raw.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v != 0.0) => Some(n.to_string()),
        _ => None,
    })
}

/// First synonym holding a usable non-zero number; numeric strings count.
fn number_field(raw: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| match raw.get(key) {
        Some(Value::Number(n)) => n.as_f64().filter(|v| *v != 0.0),
        Some(Value::String(s)) => s.parse::<f64>().ok().filter(|v| *v != 0.0),
        _ => None,
    })
}

/// First synonym holding an array, reduced to its string elements.
fn list_field(raw: &Value, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .find_map(|key| raw.get(key).and_then(Value::as_array))
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

/// Fixed sample set shown when the job service is unreachable.
pub fn fallback_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            confirmation_code: None,
            title: "Cashier".to_string(),
            company: "Sunny Market".to_string(),
            pay: "$18/hr".to_string(),
            pay_min: 18.0,
            location: "San Francisco, CA".to_string(),
            distance_mi: Some(2.0),
            shift: "Mon-Fri 4pm-10pm".to_string(),
            description: "Evening cashier for a neighborhood grocery. Friendly and quick with POS."
                .to_string(),
            source: "WhatsApp".to_string(),
            apply_url: None,
            whatsapp_number: None,
            pay_type: String::new(),
            images: Vec::new(),
        },
        Job {
            id: "2".to_string(),
            confirmation_code: None,
            title: "Barista".to_string(),
            company: "Moonlight Cafe".to_string(),
            pay: "$20/hr".to_string(),
            pay_min: 20.0,
            location: "Oakland, CA".to_string(),
            distance_mi: Some(9.0),
            shift: "Sat-Sun 7am-1pm".to_string(),
            description: "Craft coffee, latte art a plus. Weekend shifts only.".to_string(),
            source: "Scraped".to_string(),
            apply_url: None,
            whatsapp_number: None,
            pay_type: String::new(),
            images: Vec::new(),
        },
        Job {
            id: "3".to_string(),
            confirmation_code: None,
            title: "Prep Cook".to_string(),
            company: "Taqueria Verde".to_string(),
            pay: "$22/hr".to_string(),
            pay_min: 22.0,
            location: "Berkeley, CA".to_string(),
            distance_mi: Some(6.0),
            shift: "Thu-Sun 3pm-11pm".to_string(),
            description: "Chopping, grilling, line support. Bilingual preferred.".to_string(),
            source: "WhatsApp".to_string(),
            apply_url: None,
            whatsapp_number: None,
            pay_type: String::new(),
            images: Vec::new(),
        },
    ]
}
