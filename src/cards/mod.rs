//! Card system: types, dealt instances, card sets, and deck building.
//!
//! ## Key Types
//!
//! - `CardTypeId`: Opaque type identifier; equality decides a match
//! - `CardType`: Static type data (name, face asset)
//! - `CardInstance`: One dealt card (type + position)
//! - `CardSet`: Validated set of unique types for a session
//! - `build_deck`: Two of every type, shuffled
//! - `lay_out`: Assign positions to a type sequence

pub mod deck;
pub mod definition;
pub mod instance;
pub mod registry;

pub use deck::{build_deck, lay_out};
pub use definition::{AssetRef, CardType, CardTypeId};
pub use instance::CardInstance;
pub use registry::{CardSet, MAX_CARD_TYPES};
