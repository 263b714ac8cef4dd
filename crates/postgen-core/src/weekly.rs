//! Monday-reservation generator. Fills the placeholder folder of an existing
//! customer-API test collection with `weeks × customers` reservation
//! requests, one per customer per Monday, threading a single 0-based record
//! index through every rotation.

use crate::collection::{Body, Event, Header, Item, Request, Url};
use crate::config::{Customer, WeeklyConfig};
use crate::error::{PostgenError, Result};
use crate::merge::replace_placeholder_items;
use crate::rotation::Rotation;
use crate::schedule;
use chrono::{NaiveDate, Weekday};
use serde::Serialize;
use serde_json::Value;

/// The Mondays the generated records land on, in order.
pub fn monday_dates(config: &WeeklyConfig, today: NaiveDate) -> Vec<NaiveDate> {
    schedule::upcoming_weekdays(today, Weekday::Mon, config.weeks as usize)
}

/// Generate the full reservation sequence for the anchor date `today`.
pub fn generate(config: &WeeklyConfig, today: NaiveDate) -> Result<Vec<Item>> {
    let customers = Rotation::new("weekly.customers", config.customers.clone())?;
    let notes = Rotation::new("weekly.notes", config.notes.clone())?;
    let pax = Rotation::new("weekly.pax", config.pax.clone())?;

    let per_week = customers.len();
    let total = config.weeks as usize * per_week;
    let mondays = monday_dates(config, today);

    let mut records = Vec::with_capacity(total);
    for index in 0..total {
        let week = index / per_week;
        let record = reservation(
            config,
            index,
            week,
            mondays[week],
            customers.pick(index),
            notes.pick(index),
            *pax.pick(index),
        )?;
        records.push(record);
    }
    Ok(records)
}

/// Generate and splice the records into a loaded collection document.
/// A document without the target placeholder is an error; it is never
/// modified in that case.
pub fn generate_into(doc: &mut Value, config: &WeeklyConfig, today: NaiveDate) -> Result<usize> {
    let records = generate(config, today)?;
    if !replace_placeholder_items(doc, &config.target_label, &records)? {
        return Err(PostgenError::PlaceholderNotFound(config.target_label.clone()));
    }
    Ok(records.len())
}

#[derive(Serialize)]
struct ReservationBody<'a> {
    #[serde(rename = "restaurantId")]
    restaurant_id: &'a str,
    pax: u32,
    note: String,
    #[serde(rename = "slotId")]
    slot_id: String,
    date: String,
}

fn reservation(
    config: &WeeklyConfig,
    index: usize,
    week: usize,
    monday: NaiveDate,
    customer: &Customer,
    note: &str,
    pax: u32,
) -> Result<Item> {
    let slot_num = index % config.slot_cycle as usize + 1;

    let body = ReservationBody {
        restaurant_id: "{{restaurantId}}",
        pax,
        note: format!("{} - {}", note, customer.name),
        slot_id: format!("{{{{slot_id_{}}}}}", slot_num),
        date: monday.format("%Y-%m-%d").to_string(),
    };

    let request = Request::post(
        Url::from_template(&config.url),
        vec![
            Header::content_type_json(),
            Header::new("Authorization", format!("Bearer {{{{{}}}}}", customer.token)),
        ],
        Body::raw(serde_json::to_string_pretty(&body)?),
    );

    Ok(Item::request(
        format!(
            "Reservation {} - {} (Week {})",
            index + 1,
            customer.name,
            week + 1
        ),
        request,
        vec![Event::prerequest(slot_rewrite_script(
            index, slot_num, monday, customer,
        ))],
    ))
}

/// Pre-request script resolving the `{{slot_id_N}}` placeholder against the
/// `monday_slots` collection variable at run time. The text is an opaque
/// payload for the consuming tool; the generator only guarantees it is
/// syntactically valid.
fn slot_rewrite_script(
    index: usize,
    slot_num: usize,
    monday: NaiveDate,
    customer: &Customer,
) -> Vec<String> {
    vec![
        format!("// Reservation {} for {}", index + 1, monday.format("%Y-%m-%d")),
        "const mondaySlots = JSON.parse(pm.collectionVariables.get('monday_slots') || '[]');"
            .to_string(),
        "if (mondaySlots.length > 0) {".to_string(),
        format!("    const slotIndex = {};", slot_num - 1),
        "    const slot = mondaySlots[slotIndex % mondaySlots.length];".to_string(),
        format!(
            "    pm.request.body.raw = pm.request.body.raw.replace('\"{{{{slot_id_{}}}}}\"', `\"${{slot.id}}\"`);",
            slot_num
        ),
        format!(
            "    console.log(`Reservation for {} - slot ${{slot.start}}-${{slot.end}}`);",
            customer.name
        ),
        "} else {".to_string(),
        "    console.log('No Monday slots available');".to_string(),
        "}".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn anchor() -> NaiveDate {
        // A Wednesday; the first generated Monday is 2025-01-06
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn thirty_records_with_sequential_names() {
        let config = WeeklyConfig::default();
        let records = generate(&config, anchor()).unwrap();
        assert_eq!(records.len(), 30);

        for (i, record) in records.iter().enumerate() {
            let customer = &config.customers[i % 5];
            assert_eq!(
                record.name,
                format!("Reservation {} - {} (Week {})", i + 1, customer.name, i / 5 + 1)
            );
        }
    }

    #[test]
    fn authorization_header_follows_customer_rotation() {
        let records = generate(&WeeklyConfig::default(), anchor()).unwrap();
        let auth = |i: usize| {
            records[i].request.as_ref().unwrap().header[1].value.clone()
        };
        assert_eq!(auth(0), "Bearer {{customer1_token}}");
        assert_eq!(auth(4), "Bearer {{customer5_token}}");
        assert_eq!(auth(5), "Bearer {{customer1_token}}");
        assert_eq!(auth(29), "Bearer {{customer5_token}}");
    }

    #[test]
    fn body_fields_thread_every_rotation() {
        let config = WeeklyConfig::default();
        let records = generate(&config, anchor()).unwrap();

        let body = |i: usize| -> Value {
            let raw = &records[i].request.as_ref().unwrap().body.as_ref().unwrap().raw;
            serde_json::from_str(raw).unwrap()
        };

        let first = body(0);
        assert_eq!(first["restaurantId"], "{{restaurantId}}");
        assert_eq!(first["pax"], 2);
        assert_eq!(first["note"], "Cena romantica - Marco Rossi");
        assert_eq!(first["slotId"], "{{slot_id_1}}");
        assert_eq!(first["date"], "2025-01-06");

        // Record 5 is week 2: next Monday, notes and slot cycle advanced
        let sixth = body(5);
        assert_eq!(sixth["date"], "2025-01-13");
        assert_eq!(sixth["slotId"], "{{slot_id_3}}");
        assert_eq!(sixth["pax"], 5);

        // Pax rotation (period 12) wraps independently of the 5-customer cycle
        assert_eq!(body(12)["pax"], 2);
        assert_eq!(body(12)["note"], "Cena romantica - Andrea Verdi");
    }

    #[test]
    fn prerequest_script_targets_the_record_slot() {
        let records = generate(&WeeklyConfig::default(), anchor()).unwrap();
        let exec = &records[7].event[0].script.exec;
        assert_eq!(records[7].event[0].listen, "prerequest");
        assert_eq!(exec[0], "// Reservation 8 for 2025-01-13");
        assert!(exec.contains(&"    const slotIndex = 1;".to_string()));
        assert!(exec
            .iter()
            .any(|line| line.contains("'\"{{slot_id_2}}\"'")));
    }

    #[test]
    fn generation_is_idempotent() {
        let config = WeeklyConfig::default();
        let a = serde_json::to_value(generate(&config, anchor()).unwrap()).unwrap();
        let b = serde_json::to_value(generate(&config, anchor()).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generate_into_replaces_placeholder_children() {
        let config = WeeklyConfig::default();
        let mut doc = json!({
            "info": { "name": "suite" },
            "item": [
                { "name": "Step 1: Login" },
                { "name": config.target_label.clone(), "item": [ { "name": "stale" } ] }
            ]
        });
        let count = generate_into(&mut doc, &config, anchor()).unwrap();
        assert_eq!(count, 30);
        assert_eq!(doc["item"][1]["item"].as_array().unwrap().len(), 30);
        assert_eq!(doc["item"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn generate_into_without_placeholder_fails_and_leaves_doc() {
        let config = WeeklyConfig::default();
        let mut doc = json!({ "item": [ { "name": "unrelated" } ] });
        let before = doc.clone();
        let err = generate_into(&mut doc, &config, anchor()).unwrap_err();
        assert!(matches!(err, PostgenError::PlaceholderNotFound(_)));
        assert!(err.to_string().contains(&config.target_label));
        assert_eq!(doc, before);
    }

    #[test]
    fn empty_customer_roster_is_rejected() {
        let config = WeeklyConfig {
            customers: Vec::new(),
            ..WeeklyConfig::default()
        };
        let err = generate(&config, anchor()).unwrap_err();
        assert!(matches!(err, PostgenError::EmptyRotation("weekly.customers")));
    }
}
