//! REST client for a single user record (JSONPlaceholder shape).

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::fetch::{self, FetchError};

/// Default timeout for the user fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    #[serde(rename = "lat")]
    pub latitude: String,
    #[serde(rename = "lng")]
    pub longitude: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    #[serde(rename = "zipcode")]
    pub zip_code: String,
    pub geo: Geo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

/// A user record. Missing fields decode to empty values; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub company: Company,
}

/// GETs `url` and decodes the body as a [`User`]. Requires 200 OK.
pub fn fetch_user(url: &str, timeout: Duration) -> Result<User, FetchError> {
    let user: User = fetch::get_json(url, timeout)?;
    tracing::debug!(id = user.id, "fetched user");
    Ok(user)
}

/// Two-space indented JSON, as printed by `wirecheck user`.
pub fn to_pretty_json(user: &User) -> serde_json::Result<String> {
    serde_json::to_string_pretty(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 2,
        "name": "Ervin Howell",
        "username": "Antonette",
        "email": "Shanna@melissa.tv",
        "address": {
            "street": "Victor Plains",
            "suite": "Suite 879",
            "city": "Wisokyburgh",
            "zipcode": "90566-7771",
            "geo": { "lat": "-43.9509", "lng": "-34.4618" }
        },
        "phone": "010-692-6593 x09125",
        "website": "anastasia.net",
        "company": {
            "name": "Deckow-Crist",
            "catchPhrase": "Proactive didactic contingency",
            "bs": "synergize scalable supply-chains"
        }
    }"#;

    #[test]
    fn decodes_full_record() {
        let u: User = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(u.id, 2);
        assert_eq!(u.email, "Shanna@melissa.tv");
        assert_eq!(u.company.catch_phrase, "Proactive didactic contingency");
        let addr = u.address.as_ref().unwrap();
        assert_eq!(addr.zip_code, "90566-7771");
        assert_eq!(addr.geo.longitude, "-34.4618");
    }

    #[test]
    fn missing_fields_default() {
        let u: User = serde_json::from_str(r#"{"id": 7, "extra": [1, 2]}"#).unwrap();
        assert_eq!(u.id, 7);
        assert!(u.email.is_empty());
        assert!(u.address.is_none());
        assert_eq!(u.company, Company::default());
    }

    #[test]
    fn pretty_output_uses_wire_names_and_two_space_indent() {
        let u = User {
            id: 1,
            email: "a@b.c".to_string(),
            phone: "123".to_string(),
            company: Company {
                name: "Acme".to_string(),
                catch_phrase: "We make things".to_string(),
                bs: "things".to_string(),
            },
            ..User::default()
        };
        let out = to_pretty_json(&u).unwrap();
        assert!(out.starts_with("{\n  \"id\": 1,"), "{}", out);
        assert!(out.contains("\"catchPhrase\": \"We make things\""));
        assert!(!out.contains("\"address\""));
        assert!(!out.contains("\"website\""));
    }
}
