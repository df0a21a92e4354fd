use serde::{Deserialize, Serialize};

use crate::{
    cosmetics::{Cosmetics, ResolvedPlug},
    definitions::ItemDefinition,
    ids::{CharacterId, ItemHash, ItemInstanceId, MembershipId, MembershipType},
};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoadoutExport {
    pub membership_type: MembershipType,
    pub membership_id: MembershipId,
    pub character_id: CharacterId,
    pub items: Vec<EquippedItemRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EquippedItemRecord {
    pub item_hash: ItemHash,
    pub item_name: String,
    pub item_type: Option<String>,
    /// Relative to the remote host.
    pub icon: Option<String>,
    pub instance_id: Option<ItemInstanceId>,
    pub applied_shader: Option<NamedPlug>,
    pub applied_ornament: Option<NamedPlug>,
    pub visible_perks: Vec<NamedPlug>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NamedPlug {
    pub item_hash: ItemHash,
    pub name: String,
}

impl From<&ResolvedPlug> for NamedPlug {
    fn from(plug: &ResolvedPlug) -> Self {
        Self {
            item_hash: plug.hash,
            name: plug.name(),
        }
    }
}

impl EquippedItemRecord {
    /// Builds the record from the item's own definition, if it could be
    /// fetched, and its classified plugs.
    pub fn assemble(
        item_hash: ItemHash,
        instance_id: Option<ItemInstanceId>,
        definition: Option<&ItemDefinition>,
        cosmetics: &Cosmetics,
    ) -> Self {
        Self {
            item_hash,
            item_name: definition
                .map(|definition| definition.name_or_hash(item_hash))
                .unwrap_or_else(|| item_hash.to_string()),
            item_type: definition
                .and_then(ItemDefinition::type_label)
                .map(ToOwned::to_owned),
            icon: definition
                .and_then(ItemDefinition::icon)
                .map(ToOwned::to_owned),
            instance_id,
            applied_shader: cosmetics.shader.as_ref().map(NamedPlug::from),
            applied_ornament: cosmetics.ornament.as_ref().map(NamedPlug::from),
            visible_perks: cosmetics.perks.iter().map(NamedPlug::from).collect(),
        }
    }
}
