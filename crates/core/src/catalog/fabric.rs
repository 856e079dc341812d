/// Id prefix for fabrics supplied by the user rather than the catalog.
pub const CUSTOM_FABRIC_PREFIX: &str = "custom-";

/// Where a fabric's swatch image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FabricImage {
    /// A catalog swatch hosted at a URL.
    Url(String),
    /// An uploaded swatch carried inline.
    Inline { mime_type: String, data: Vec<u8> },
}

/// A fabric or print the garment is made from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fabric {
    pub id: String,
    pub name: String,
    pub image: FabricImage,
}

impl Fabric {
    /// Creates a catalog fabric backed by an image URL.
    #[must_use]
    pub fn from_url(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: FabricImage::Url(url.into()),
        }
    }

    /// Creates a user-supplied fabric from raw image data.
    ///
    /// The id is prefixed with [`CUSTOM_FABRIC_PREFIX`] unless it already is.
    #[must_use]
    pub fn custom(
        id: impl Into<String>,
        name: impl Into<String>,
        mime_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        let id = id.into();
        let id = if id.starts_with(CUSTOM_FABRIC_PREFIX) {
            id
        } else {
            format!("{CUSTOM_FABRIC_PREFIX}{id}")
        };
        Self {
            id,
            name: name.into(),
            image: FabricImage::Inline {
                mime_type: mime_type.into(),
                data,
            },
        }
    }

    /// Returns `true` for user-supplied fabrics.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.id.starts_with(CUSTOM_FABRIC_PREFIX)
    }
}

const FABRICS: [(&str, &str, &str); 4] = [
    (
        "ankara",
        "Ankara",
        "https://images.pexels.com/photos/1848472/pexels-photo-1848472.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    (
        "aso-oke",
        "Aso Oke",
        "https://images.pexels.com/photos/20299949/pexels-photo-20299949.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    (
        "adire",
        "Adire",
        "https://images.pexels.com/photos/16333333/pexels-photo-16333333/free-photo-of-a-woman-in-a-blue-and-white-patterned-dress.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
    (
        "lace",
        "Lace",
        "https://images.pexels.com/photos/8810248/pexels-photo-8810248.jpeg?auto=compress&cs=tinysrgb&w=400",
    ),
];

/// Returns every built-in fabric.
#[must_use]
pub fn fabrics() -> Vec<Fabric> {
    FABRICS
        .iter()
        .map(|&(id, name, url)| Fabric::from_url(id, name, url))
        .collect()
}

/// Looks up a built-in fabric by id.
#[must_use]
pub fn find_fabric(id: &str) -> Option<Fabric> {
    fabrics().into_iter().find(|f| f.id == id)
}
