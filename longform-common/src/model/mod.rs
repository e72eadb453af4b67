pub mod post;

use derive_where::derive_where;
use serde::{
    Deserialize, Deserializer,
    de::{Error, Unexpected},
};
use std::{fmt::Display, marker::PhantomData};
use thiserror::Error;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The id is empty.")]
pub struct EmptyIdError;

#[derive_where(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize)]
#[serde(transparent)]
pub struct Id<Marker>(String, #[serde(skip)] PhantomData<Marker>);

impl<Marker> Id<Marker> {
    pub fn new(id: impl Into<String>) -> Result<Self, EmptyIdError> {
        let id = id.into();
        if id.is_empty() {
            Err(EmptyIdError)
        } else {
            Ok(Self(id, PhantomData))
        }
    }

    #[must_use]
    pub fn get(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<Marker> Display for Id<Marker> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<'de, Marker> Deserialize<'de> for Id<Marker> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = String::deserialize(deserializer)?;
        Id::new(inner).map_err(|_| Error::invalid_value(Unexpected::Str(""), &"a non-empty id"))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{EmptyIdError, Id, post::PostMarker};

    #[test]
    fn empty_id_is_rejected() {
        assert_eq!(Id::<PostMarker>::new(""), Err(EmptyIdError));
        assert!(Id::<PostMarker>::new("p-1").is_ok());
    }

    #[test]
    fn id_serde_is_transparent() {
        let id = Id::<PostMarker>::new("p-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p-1\"");

        let parsed: Id<PostMarker> = serde_json::from_str("\"p-1\"").unwrap();
        assert_eq!(parsed, id);

        assert!(serde_json::from_str::<Id<PostMarker>>("\"\"").is_err());
    }
}
