//! Typed model of the Postman collection v2.1 format, restricted to the
//! subset the generators emit. Foreign documents being merged into are
//! handled as untyped JSON instead (see `merge`).

use serde::{Deserialize, Serialize};

pub const SCHEMA_V2_1: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

pub const SCRIPT_TYPE_JS: &str = "text/javascript";

// ---------------------------------------------------------------------------
// Collection / Info
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub info: Info,
    pub item: Vec<Item>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    #[serde(rename = "_postman_id")]
    pub postman_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub schema: String,
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// A request item, or a folder when `item` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Request>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<Event>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<Item>>,
}

impl Item {
    pub fn request(name: impl Into<String>, request: Request, event: Vec<Event>) -> Self {
        Self {
            name: name.into(),
            request: Some(request),
            event,
            item: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Request / Header / Body / Url
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    pub url: Url,
}

impl Request {
    pub fn post(url: Url, header: Vec<Header>, body: Body) -> Self {
        Self {
            method: "POST".to_string(),
            header,
            body: Some(body),
            url,
        }
    }

    pub fn get(url: Url, header: Vec<Header>) -> Self {
        Self {
            method: "GET".to_string(),
            header,
            body: None,
            url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn content_type_json() -> Self {
        Self::new("Content-Type", "application/json")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub mode: String,
    pub raw: String,
}

impl Body {
    pub fn raw(raw: impl Into<String>) -> Self {
        Self {
            mode: "raw".to_string(),
            raw: raw.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<QueryParam>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
}

impl Url {
    /// Split a templated URL like `{{baseUrl}}/customer/reservation` into
    /// its host segment, path segments, and (if present) query parameters.
    /// The first `/`-separated segment is the host; `{{...}}` placeholders
    /// pass through verbatim for the consuming tool to resolve.
    pub fn from_template(raw: &str) -> Self {
        let (base, query_str) = match raw.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (raw, None),
        };

        let mut segments = base.split('/').filter(|s| !s.is_empty());
        let host = segments.next().map(str::to_string).into_iter().collect();
        let path = segments.map(str::to_string).collect();

        let query = query_str
            .map(|q| {
                q.split('&')
                    .filter(|pair| !pair.is_empty())
                    .map(|pair| {
                        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                        QueryParam {
                            key: key.to_string(),
                            value: value.to_string(),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            raw: raw.to_string(),
            host,
            path,
            query,
        }
    }
}

// ---------------------------------------------------------------------------
// Event / Script
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub listen: String,
    pub script: Script,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    pub exec: Vec<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub script_type: Option<String>,
}

impl Event {
    pub fn prerequest(exec: Vec<String>) -> Self {
        Self::new("prerequest", exec)
    }

    pub fn test(exec: Vec<String>) -> Self {
        Self::new("test", exec)
    }

    fn new(listen: &str, exec: Vec<String>) -> Self {
        Self {
            listen: listen.to_string(),
            script: Script {
                exec,
                script_type: Some(SCRIPT_TYPE_JS.to_string()),
            },
        }
    }
}
