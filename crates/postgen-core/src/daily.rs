//! Bulk daily-reservation generator. Builds a complete collection from
//! scratch: a login preamble, one restaurant-API reservation per day from
//! tomorrow out to `days`, and a closing verification request, cycling the
//! people and service rotations by day number.

use crate::collection::{
    Body, Collection, Event, Header, Info, Item, Request, Url, SCHEMA_V2_1,
};
use crate::config::{DailyConfig, Person, Service};
use crate::error::Result;
use crate::rotation::Rotation;
use crate::schedule;
use chrono::NaiveDate;
use serde::Serialize;

const LOGIN_URL: &str = "{{baseUrl}}/restaurant/user/auth/login";
const VERIFY_URL: &str =
    "{{baseUrl}}/restaurant/reservation/reservations?start={{queryStart}}&end={{queryEnd}}";
const LOGIN_BODY: &str =
    r#"{"username": "test@test.it", "password": "TestPass123!", "rememberMe": true}"#;

/// Build the full collection for the anchor date `today`: login, then
/// `days` dated reservations, then verification.
pub fn build(config: &DailyConfig, today: NaiveDate) -> Result<Collection> {
    let people = Rotation::new("daily.people", config.people.clone())?;
    let services = Rotation::new("daily.services", config.services.clone())?;

    let dates = schedule::following_days(today, config.days as usize);

    let mut items = Vec::with_capacity(config.days as usize + 2);
    items.push(login_item());
    for (offset, date) in dates.iter().enumerate() {
        let day = offset + 1;
        items.push(reservation(
            config,
            day,
            *date,
            people.pick(offset),
            services.pick(offset),
        )?);
    }
    items.push(verification_item(config.days));

    let days = config.days;
    Ok(Collection {
        info: Info {
            postman_id: format!("bulk-{days}-days"),
            name: format!("{days}-Day Bulk Reservations"),
            description: Some(format!(
                "Create {days} reservations (tomorrow to {days} days out) cycling through services and people"
            )),
            schema: SCHEMA_V2_1.to_string(),
        },
        item: items,
    })
}

/// Total covers across the whole run, for the process summary.
pub fn projected_pax(config: &DailyConfig) -> u32 {
    if config.people.is_empty() {
        return 0;
    }
    (0..config.days as usize)
        .map(|i| config.people[i % config.people.len()].pax)
        .sum()
}

#[derive(Serialize)]
struct ReservationBody<'a> {
    #[serde(rename = "userName")]
    user_name: &'a str,
    #[serde(rename = "userEmail")]
    user_email: &'a str,
    #[serde(rename = "userPhoneNumber")]
    user_phone_number: &'a str,
    #[serde(rename = "idSlot")]
    id_slot: u32,
    pax: u32,
    kids: u32,
    notes: String,
    #[serde(rename = "reservationDay")]
    reservation_day: &'a str,
}

fn reservation(
    config: &DailyConfig,
    day: usize,
    date: NaiveDate,
    person: &Person,
    service: &Service,
) -> Result<Item> {
    let body = ReservationBody {
        user_name: &person.name,
        user_email: &person.email,
        user_phone_number: &person.phone,
        id_slot: service.slot_id,
        pax: person.pax,
        kids: person.kids,
        notes: format!("Day {} - {}", day, service.name),
        reservation_day: "{{resDate}}",
    };

    let request = Request::post(
        Url::from_template(&config.url),
        vec![
            Header::new("Authorization", "Bearer {{restaurantToken}}"),
            Header::content_type_json(),
        ],
        Body::raw(serde_json::to_string(&body)?),
    );

    Ok(Item::request(
        format!("Day {}: {} ({})", day, date.format("%d-%m"), service.name),
        request,
        vec![
            Event::prerequest(vec![res_date_script(day)]),
            Event::test(vec![outcome_script(day, &service.name)]),
        ],
    ))
}

/// Sets `resDate` inside the consuming tool so the booked day stays relative
/// to the run date, not the generation date.
fn res_date_script(day: usize) -> String {
    format!(
        "const d = new Date();\n\
         d.setDate(d.getDate() + {day});\n\
         const s = d.getFullYear() + '-' + String(d.getMonth() + 1).padStart(2, '0') + '-' + String(d.getDate()).padStart(2, '0');\n\
         pm.environment.set('resDate', s);"
    )
}

fn outcome_script(day: usize, service: &str) -> String {
    [
        "if (pm.response.code === 201 || pm.response.code === 200) {".to_string(),
        "  try {".to_string(),
        "    var d = pm.response.json();".to_string(),
        format!("    if (d.id) console.log('Day {day} - ID: ' + d.id + ' ({service})');"),
        "  } catch(e) {}".to_string(),
        "} else {".to_string(),
        format!("  console.log('Day {day} FAILED - Status: ' + pm.response.code);"),
        "}".to_string(),
    ]
    .join("\n")
}

fn login_item() -> Item {
    let script = vec![
        "console.log('LOGIN');".to_string(),
        "if (pm.response.code === 200) {".to_string(),
        "    var jsonData = pm.response.json();".to_string(),
        "    pm.environment.set('restaurantToken', jsonData.jwt);".to_string(),
        "    pm.environment.set('restaurantId', jsonData.user.restaurantId);".to_string(),
        "    console.log('Token saved, Restaurant ID:', jsonData.user.restaurantId);".to_string(),
        "}".to_string(),
    ];

    Item::request(
        "Step 1: Login",
        Request::post(
            Url::from_template(LOGIN_URL),
            vec![Header::content_type_json()],
            Body::raw(LOGIN_BODY),
        ),
        vec![Event::test(script)],
    )
}

fn verification_item(days: u32) -> Item {
    // Query window: 10 days back to 90 days out, wide enough to catch every
    // generated reservation regardless of when the suite is run.
    let window_script = vec![
        "const start = new Date();".to_string(),
        "start.setDate(start.getDate() - 10);".to_string(),
        "const end = new Date();".to_string(),
        "end.setDate(end.getDate() + 90);".to_string(),
        "const startStr = start.getFullYear() + '-' + String(start.getMonth() + 1).padStart(2, '0') + '-' + String(start.getDate()).padStart(2, '0');".to_string(),
        "const endStr = end.getFullYear() + '-' + String(end.getMonth() + 1).padStart(2, '0') + '-' + String(end.getDate()).padStart(2, '0');".to_string(),
        "pm.environment.set('queryStart', startStr);".to_string(),
        "pm.environment.set('queryEnd', endStr);".to_string(),
    ];

    let tally_script = vec![
        "console.log('FINAL VERIFICATION');".to_string(),
        "if (pm.response.code === 200) {".to_string(),
        "    const data = pm.response.json();".to_string(),
        "    if (Array.isArray(data)) {".to_string(),
        "        console.log('Total reservations:', data.length);".to_string(),
        "        const byService = {};".to_string(),
        "        let totalPax = 0;".to_string(),
        "        data.forEach(r => {".to_string(),
        "            totalPax += r.pax || 0;".to_string(),
        "            if (r.slot && r.slot.service) {".to_string(),
        "                const svc = r.slot.service.name;".to_string(),
        "                byService[svc] = (byService[svc] || 0) + 1;".to_string(),
        "            }".to_string(),
        "        });".to_string(),
        "        console.log('Total pax:', totalPax);".to_string(),
        "        console.log('By service:', byService);".to_string(),
        "    }".to_string(),
        "}".to_string(),
    ];

    Item::request(
        format!("Step 2: Verify All {} Reservations", days),
        Request::get(
            Url::from_template(VERIFY_URL),
            vec![Header::new("Authorization", "Bearer {{restaurantToken}}")],
        ),
        vec![
            Event::prerequest(window_script),
            Event::test(tally_script),
        ],
    )
}
