//! Typed view of the profile snapshot returned by the remote profile call.
//!
//! Every sub-tree is optional: the server only includes the components that
//! were requested and the caller may lack privacy permissions for some of
//! them. Missing pieces deserialize to empty values instead of failing.

use std::collections::HashMap;

use serde::Deserialize;

use crate::ids::{CharacterId, ItemHash, ItemInstanceId};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    #[serde(default)]
    pub profile: ComponentResponse<ProfileComponent>,
    #[serde(default)]
    pub characters: ComponentResponse<HashMap<String, CharacterComponent>>,
    #[serde(default)]
    pub character_equipment: ComponentResponse<HashMap<String, InventoryComponent>>,
    #[serde(default)]
    pub item_components: ItemComponentSet,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ComponentResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Default for ComponentResponse<T> {
    fn default() -> Self {
        Self { data: None }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileComponent {
    #[serde(default)]
    pub character_ids: Vec<CharacterId>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CharacterComponent {
    #[serde(default)]
    pub date_last_played: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct InventoryComponent {
    #[serde(default)]
    pub items: Vec<ItemComponent>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemComponent {
    #[serde(default)]
    pub item_hash: Option<ItemHash>,
    #[serde(default)]
    pub item_instance_id: Option<ItemInstanceId>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ItemComponentSet {
    #[serde(default)]
    pub sockets: ComponentResponse<HashMap<String, ItemSocketsComponent>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ItemSocketsComponent {
    #[serde(default)]
    pub sockets: Vec<SocketState>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocketState {
    #[serde(default)]
    pub plug_hash: Option<ItemHash>,
    #[serde(default)]
    pub plug: Option<SocketPlug>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocketPlug {
    #[serde(default)]
    pub plug_item_hash: Option<ItemHash>,
}

impl SocketState {
    /// The item currently plugged into this socket.
    ///
    /// Responses carry it either as `plug.plugItemHash` or as `plugHash`; the
    /// first non-empty one wins.
    pub fn plugged_item_hash(&self) -> Option<ItemHash> {
        self.plug
            .as_ref()
            .and_then(|plug| plug.plug_item_hash)
            .filter(|hash| !hash.is_empty())
            .or_else(|| self.plug_hash.filter(|hash| !hash.is_empty()))
    }
}

impl ProfileSnapshot {
    pub fn character_ids(&self) -> &[CharacterId] {
        self.profile
            .data
            .as_ref()
            .map(|profile| profile.character_ids.as_slice())
            .unwrap_or_default()
    }

    pub fn character(&self, character_id: &CharacterId) -> Option<&CharacterComponent> {
        self.characters.data.as_ref()?.get(&character_id.0)
    }

    pub fn equipment(&self, character_id: &CharacterId) -> Option<&InventoryComponent> {
        self.character_equipment.data.as_ref()?.get(&character_id.0)
    }

    pub fn item_sockets(&self, instance_id: &ItemInstanceId) -> Option<&ItemSocketsComponent> {
        self.item_components.sockets.data.as_ref()?.get(&instance_id.0)
    }
}

#[cfg(test)]
impl SocketState {
    pub(crate) fn with_plug_hash(hash: u32) -> Self {
        Self {
            plug_hash: Some(ItemHash(hash)),
            ..Self::default()
        }
    }
}
