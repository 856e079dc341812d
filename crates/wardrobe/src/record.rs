use jiff::Timestamp;
use patternfit_core::{Fabric, Style};
use patternfit_measure::Measurements;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The id and display name of the fabric a fit was made in.
///
/// Only the reference is kept; custom swatch data lives on the fabric shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FabricRef {
    pub id: String,
    pub name: String,
}

impl From<&Fabric> for FabricRef {
    fn from(fabric: &Fabric) -> Self {
        Self {
            id: fabric.id.clone(),
            name: fabric.name.clone(),
        }
    }
}

/// A completed fitting kept in the wardrobe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFit {
    pub id: Uuid,
    pub created_at: Timestamp,
    pub style: Style,
    pub fabric: FabricRef,
    /// Sleeve length or design variant, when the style offers one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<String>,
    pub measurements: Measurements,
    pub feedback: String,
    #[serde(rename = "generatedImageBase64", with = "base64_bytes")]
    pub generated_image: Vec<u8>,
}

impl SavedFit {
    /// Creates a fit with a fresh id, stamped with the current time.
    #[must_use]
    pub fn new(
        style: Style,
        fabric: &Fabric,
        design: Option<String>,
        measurements: Measurements,
        feedback: impl Into<String>,
        generated_image: Vec<u8>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Timestamp::now(),
            style,
            fabric: fabric.into(),
            design,
            measurements,
            feedback: feedback.into(),
            generated_image,
        }
    }

    /// Returns a copy with the given creation time.
    #[must_use]
    pub fn with_created_at(self, created_at: Timestamp) -> Self {
        Self { created_at, ..self }
    }
}

/// Serializes bytes as a standard base64 string.
pub(crate) mod base64_bytes {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(D::Error::custom)
    }
}
