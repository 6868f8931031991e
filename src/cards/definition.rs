//! Card types - static card data.
//!
//! `CardType` holds the immutable properties of one kind of card: its
//! identifier, display name, and the asset the presentation layer draws on
//! the face. Each type appears exactly twice in a deal.

use serde::{Deserialize, Serialize};

/// Card type identifier.
///
/// The engine only compares these for equality. Two cards match iff
/// their type ids are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardTypeId(pub u32);

impl CardTypeId {
    /// Create a new card type ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Type({})", self.0)
    }
}

/// Reference to the face image of a card type.
///
/// Opaque to the engine; passed through to the view untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    #[must_use]
    pub fn new(asset: impl Into<String>) -> Self {
        Self(asset.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Static card type definition.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{CardType, CardTypeId};
///
/// let pikachu = CardType::new(CardTypeId::new(0), "Pikachu", "images/Pickachu.png");
/// assert_eq!(pikachu.asset.as_str(), "images/Pickachu.png");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardType {
    /// Unique identifier for this type.
    pub id: CardTypeId,

    /// Type name (for display/debugging).
    pub name: String,

    /// Face image reference.
    pub asset: AssetRef,
}

impl CardType {
    /// Create a new card type.
    #[must_use]
    pub fn new(id: CardTypeId, name: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            asset: AssetRef::new(asset),
        }
    }
}
