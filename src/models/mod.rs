//! Zoho Books model types.

use serde::{Deserialize, Serialize};

/// Declare a closed set of wire strings as an enum.
///
/// Generates the serde mapping, an explicit `as_str` table, `ALL`,
/// `parse`, `Display`, and the conversion into a [`FilterValue`] so the
/// value can be placed into a filter set.
///
/// [`FilterValue`]: crate::filter::FilterValue
macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The string sent on the wire.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            /// Look up a value by its wire string.
            pub fn parse(value: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.as_str() == value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for crate::filter::FilterValue {
            fn from(value: $name) -> Self {
                crate::filter::FilterValue::Text(value.as_str().to_string())
            }
        }
    };
}

mod bill;
mod contact;
mod invoice;
mod item;

pub use bill::*;
pub use contact::*;
pub use invoice::*;
pub use item::*;

/// A user-defined field attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    /// Position of the field (1 to 10).
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Serde adapters for the service's date and timestamp strings.
///
/// Dates are `YYYY-MM-DD`, timestamps `YYYY-MM-DDTHH:MM:SS+hhmm`. The
/// service sends empty strings for unset values; those read as `None`.
pub(crate) mod wire_time {
    pub mod date {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer};

        use crate::filter::DATE_FORMAT;

        pub fn serialize<S: Serializer>(
            value: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            match raw.as_deref().map(str::trim) {
                None | Some("") => Ok(None),
                Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
            }
        }
    }

    pub mod timestamp {
        use chrono::{DateTime, FixedOffset};
        use serde::{Deserialize, Deserializer, Serializer};

        use crate::filter::DATE_TIME_FORMAT;

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<FixedOffset>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(ts) => serializer.collect_str(&ts.format(DATE_TIME_FORMAT)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            match raw.as_deref().map(str::trim) {
                None | Some("") => Ok(None),
                Some(s) => DateTime::parse_from_str(s, DATE_TIME_FORMAT)
                    .or_else(|_| DateTime::parse_from_rfc3339(s))
                    .map(Some)
                    .map_err(serde::de::Error::custom),
            }
        }
    }
}
