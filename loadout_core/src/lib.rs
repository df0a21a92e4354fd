pub mod cosmetics;
pub mod definitions;
pub mod export;
pub mod ids;
pub mod profile;
pub mod resolver;
pub mod time;

pub use cosmetics::{Cosmetics, MAX_VISIBLE_PERKS, PlugKind, ResolvedPlug, classify, plug_kinds};
pub use definitions::{DefinitionSource, INVENTORY_ITEM_DEFINITION, ItemDefinition};
pub use export::{EquippedItemRecord, LoadoutExport, NamedPlug};
pub use ids::{CharacterId, ItemHash, ItemInstanceId, MembershipId, MembershipType};
pub use profile::{ProfileSnapshot, SocketState};
pub use resolver::{
    CharacterSelector, EquippedItem, ResolveError, equipped_items, select_character, sockets_for,
};
pub use time::Timestamp;
