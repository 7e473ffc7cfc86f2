//! Types and serde helpers shared across v1 resources.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A postal address used for order recipients.
///
/// All fields are optional to support partial address data.
///
/// # Example
///
/// ```rust
/// use printify_api::rest::resources::v1::Address;
///
/// let address = Address {
///     first_name: Some("Jane".to_string()),
///     last_name: Some("Doe".to_string()),
///     address1: Some("500 Market St".to_string()),
///     city: Some("San Francisco".to_string()),
///     region: Some("CA".to_string()),
///     zip: Some("94105".to_string()),
///     country: Some("US".to_string()),
///     ..Default::default()
/// };
/// assert!(address.company.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Address {
    /// The recipient's first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The recipient's last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The recipient's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The recipient's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// State, province or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// First address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// Second address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// How canvas sides are printed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrintOnSide {
    /// The print area extends to the sides of the canvas.
    Regular,
    /// The print area is kept and mirrored onto the sides.
    Mirror,
    /// Nothing is printed on the sides.
    Off,
}

/// Side printing details for canvas products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PrintDetails {
    /// The side printing mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_on_side: Option<PrintOnSide>,

    /// Separator type, when the provider supports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator_type: Option<String>,
}

/// Timestamps in Printify payloads.
///
/// The API mixes RFC 3339 (`2023-05-26T09:40:32+00:00`) with a space
/// separated form (`2023-05-26 09:40:32+00:00`), sometimes without an
/// offset. All are accepted; values are written back as RFC 3339.
pub(crate) mod timestamp {
    use super::{de, DateTime, Deserialize, Deserializer, NaiveDateTime, Serializer, TimeZone, Utc};

    pub fn parse(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(value)
            .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%:z"))
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                    .map(|naive| Utc.from_utc_datetime(&naive))
            })
    }

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        match value.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => parse(s).map(Some).map_err(de::Error::custom),
        }
    }
}

/// Accepts a JSON object, an array of objects, or null.
pub(crate) mod one_or_many {
    use super::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
            Some(OneOrMany::Many(items)) => items,
            Some(OneOrMany::One(item)) => vec![item],
            None => Vec::new(),
        })
    }
}

/// Accepts an amount written either as a number or as a numeric string.
pub(crate) mod flexible_amount {
    use super::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(u64),
        Text(String),
    }

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Amount::deserialize(deserializer)? {
            Amount::Number(n) => Ok(n),
            Amount::Text(s) => s.trim().parse().map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
        #[serde(default, with = "timestamp")]
        at: Option<DateTime<Utc>>,
    }

    #[derive(Debug, Deserialize)]
    struct Details {
        #[serde(default, deserialize_with = "one_or_many::deserialize")]
        details: Vec<PrintDetails>,
    }

    #[derive(Debug, Deserialize)]
    struct Cost {
        #[serde(with = "flexible_amount")]
        cost: u64,
    }

    #[test]
    fn test_timestamp_accepts_both_formats() {
        let a: Stamped =
            serde_json::from_value(json!({"at": "2023-05-26 09:40:32+00:00"})).unwrap();
        let b: Stamped = serde_json::from_value(json!({"at": "2023-05-26T09:40:32Z"})).unwrap();
        let c: Stamped = serde_json::from_value(json!({"at": "2023-05-26 09:40:32"})).unwrap();

        assert_eq!(a.at, b.at);
        assert_eq!(b.at, c.at);
        assert_eq!(a.at.unwrap().year(), 2023);
    }

    #[test]
    fn test_timestamp_missing_null_or_empty() {
        let missing: Stamped = serde_json::from_value(json!({})).unwrap();
        let null: Stamped = serde_json::from_value(json!({"at": null})).unwrap();
        let empty: Stamped = serde_json::from_value(json!({"at": ""})).unwrap();
        assert!(missing.at.is_none());
        assert!(null.at.is_none());
        assert!(empty.at.is_none());

        assert!(serde_json::from_value::<Stamped>(json!({"at": "yesterday"})).is_err());
    }

    #[test]
    fn test_timestamp_serializes_as_rfc3339() {
        let stamped: Stamped =
            serde_json::from_value(json!({"at": "2020-01-02 03:04:05+00:00"})).unwrap();
        let value = serde_json::to_value(&stamped).unwrap();
        assert_eq!(value["at"], "2020-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_print_details_object_or_list() {
        let one: Details =
            serde_json::from_value(json!({"details": {"print_on_side": "mirror"}})).unwrap();
        assert_eq!(one.details.len(), 1);
        assert_eq!(one.details[0].print_on_side, Some(PrintOnSide::Mirror));

        let many: Details = serde_json::from_value(json!({"details": []})).unwrap();
        assert!(many.details.is_empty());

        let null: Details = serde_json::from_value(json!({"details": null})).unwrap();
        assert!(null.details.is_empty());
    }

    #[test]
    fn test_flexible_amount() {
        let n: Cost = serde_json::from_value(json!({"cost": 450})).unwrap();
        let s: Cost = serde_json::from_value(json!({"cost": "450"})).unwrap();
        assert_eq!(n.cost, 450);
        assert_eq!(s.cost, 450);
        assert!(serde_json::from_value::<Cost>(json!({"cost": "4.50"})).is_err());
    }

    #[test]
    fn test_address_skips_empty_fields() {
        let address = Address {
            first_name: Some("Jane".to_string()),
            country: Some("US".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&address).unwrap();
        assert_eq!(value, json!({"first_name": "Jane", "country": "US"}));
    }
}
