//! Generator configuration. Every knob has a built-in default reproducing
//! the fixture data the test suites were seeded with, so the tool runs with
//! no config file at all; a YAML file can override any subset.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Rotation entries
// ---------------------------------------------------------------------------

/// A registered customer placing reservations through the customer API.
/// `token` names the collection variable holding that customer's JWT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub token: String,
    pub email: String,
}

/// A walk-in party booked through the restaurant API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pax: u32,
    pub kids: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub slot_id: u32,
}

// ---------------------------------------------------------------------------
// WeeklyConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyConfig {
    /// How many consecutive Mondays to fill.
    #[serde(default = "default_weeks")]
    pub weeks: u32,

    /// Name of the top-level collection item whose children are replaced.
    #[serde(default = "default_target_label")]
    pub target_label: String,

    #[serde(default = "default_reservation_url")]
    pub url: String,

    #[serde(default = "default_customers")]
    pub customers: Vec<Customer>,

    #[serde(default = "default_notes")]
    pub notes: Vec<String>,

    #[serde(default = "default_pax")]
    pub pax: Vec<u32>,

    /// Period of the `{{slot_id_N}}` placeholder cycle.
    #[serde(default = "default_slot_cycle")]
    pub slot_cycle: u32,
}

fn default_weeks() -> u32 {
    6
}

fn default_target_label() -> String {
    "🍽️ Step 3: Create 30 Monday Reservations".to_string()
}

fn default_reservation_url() -> String {
    "{{baseUrl}}/customer/reservation".to_string()
}

fn default_customers() -> Vec<Customer> {
    [
        ("Marco Rossi", "customer1_token", "marco.rossi@example.com"),
        ("Giulia Bianchi", "customer2_token", "giulia.bianchi@example.com"),
        ("Andrea Verdi", "customer3_token", "andrea.verdi@example.com"),
        ("Francesca Neri", "customer4_token", "francesca.neri@example.com"),
        ("Lorenzo Ferrari", "customer5_token", "lorenzo.ferrari@example.com"),
    ]
    .into_iter()
    .map(|(name, token, email)| Customer {
        name: name.to_string(),
        token: token.to_string(),
        email: email.to_string(),
    })
    .collect()
}

fn default_notes() -> Vec<String> {
    [
        "Cena romantica",
        "Pranzo di lavoro",
        "Cena con amici",
        "Compleanno famiglia",
        "Appuntamento importante",
        "Anniversario",
        "Cena informale",
        "Pranzo domenicale",
        "Festeggiamento",
        "Incontro clienti",
        "Cena di gruppo",
        "Tavolo riservato",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_pax() -> Vec<u32> {
    vec![2, 2, 3, 4, 2, 5, 6, 3, 4, 2, 3, 4]
}

fn default_slot_cycle() -> u32 {
    3
}

impl Default for WeeklyConfig {
    fn default() -> Self {
        Self {
            weeks: default_weeks(),
            target_label: default_target_label(),
            url: default_reservation_url(),
            customers: default_customers(),
            notes: default_notes(),
            pax: default_pax(),
            slot_cycle: default_slot_cycle(),
        }
    }
}

// ---------------------------------------------------------------------------
// DailyConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyConfig {
    /// How many consecutive days to book, starting tomorrow.
    #[serde(default = "default_days")]
    pub days: u32,

    #[serde(default = "default_new_reservation_url")]
    pub url: String,

    #[serde(default = "default_people")]
    pub people: Vec<Person>,

    #[serde(default = "default_services")]
    pub services: Vec<Service>,
}

fn default_days() -> u32 {
    60
}

fn default_new_reservation_url() -> String {
    "{{baseUrl}}/restaurant/reservation/new".to_string()
}

fn default_people() -> Vec<Person> {
    [
        ("Marco Rossi", "marco@example.com", "+39 333 1234567", 2, 0),
        ("Giovanni Verdi", "giovanni@example.com", "+39 333 7654321", 4, 2),
        ("Lucia Bianchi", "lucia@example.com", "+39 333 5555555", 3, 1),
    ]
    .into_iter()
    .map(|(name, email, phone, pax, kids)| Person {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        pax,
        kids,
    })
    .collect()
}

fn default_services() -> Vec<Service> {
    [("Colazione", 202), ("Pranzo", 203), ("Cena", 204)]
        .into_iter()
        .map(|(name, slot_id)| Service {
            name: name.to_string(),
            slot_id,
        })
        .collect()
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            url: default_new_reservation_url(),
            people: default_people(),
            services: default_services(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub weekly: WeeklyConfig,
    #[serde(default)]
    pub daily: DailyConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_seeded_fixture_data() {
        let cfg = Config::default();
        assert_eq!(cfg.weekly.weeks, 6);
        assert_eq!(cfg.weekly.customers.len(), 5);
        assert_eq!(cfg.weekly.notes.len(), 12);
        assert_eq!(cfg.weekly.pax.len(), 12);
        assert_eq!(cfg.weekly.slot_cycle, 3);
        assert_eq!(cfg.weekly.customers[0].token, "customer1_token");
        assert_eq!(cfg.daily.days, 60);
        assert_eq!(cfg.daily.people.len(), 3);
        assert_eq!(cfg.daily.services.len(), 3);
        assert_eq!(cfg.daily.services[1].slot_id, 203);
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg.weekly.weeks, 6);
        assert_eq!(cfg.daily.days, 60);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let yaml = "weekly:\n  weeks: 2\ndaily:\n  days: 7\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.weekly.weeks, 2);
        assert_eq!(cfg.weekly.customers.len(), 5);
        assert_eq!(cfg.daily.days, 7);
        assert_eq!(cfg.daily.people.len(), 3);
    }

    #[test]
    fn roster_override_replaces_wholesale() {
        let yaml = r#"
weekly:
  customers:
    - name: Test Customer
      token: test_token
      email: test@example.com
"#;
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.weekly.customers.len(), 1);
        assert_eq!(cfg.weekly.customers[0].token, "test_token");
    }

    #[test]
    fn config_roundtrip() {
        let cfg = Config::default();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.weekly.target_label, cfg.weekly.target_label);
        assert_eq!(parsed.daily.services.len(), 3);
    }
}
