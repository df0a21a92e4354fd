use async_trait::async_trait;
use serde::Deserialize;

use crate::ids::ItemHash;

/// Catalog type name of inventory item definitions, used for both items and plugs.
pub const INVENTORY_ITEM_DEFINITION: &str = "DestinyInventoryItemDefinition";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    #[serde(default)]
    pub display_properties: DisplayProperties,
    #[serde(default)]
    pub item_type_display_name: Option<String>,
    #[serde(default)]
    pub item_type_and_tier_display_name: Option<String>,
    #[serde(default)]
    pub plug: Option<PlugDefinition>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DisplayProperties {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlugDefinition {
    #[serde(default)]
    pub plug_category_identifier: Option<String>,
}

impl ItemDefinition {
    pub fn name(&self) -> Option<&str> {
        self.display_properties
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
    }

    pub fn icon(&self) -> Option<&str> {
        self.display_properties
            .icon
            .as_deref()
            .filter(|icon| !icon.is_empty())
    }

    pub fn type_label(&self) -> Option<&str> {
        self.item_type_display_name
            .as_deref()
            .filter(|label| !label.is_empty())
            .or_else(|| {
                self.item_type_and_tier_display_name
                    .as_deref()
                    .filter(|label| !label.is_empty())
            })
    }

    pub fn type_display_name(&self) -> &str {
        self.item_type_display_name.as_deref().unwrap_or_default()
    }

    pub fn plug_category_identifier(&self) -> &str {
        self.plug
            .as_ref()
            .and_then(|plug| plug.plug_category_identifier.as_deref())
            .unwrap_or_default()
    }

    /// Display name, or the raw hash when the catalog has none.
    pub fn name_or_hash(&self, hash: ItemHash) -> String {
        self.name()
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| hash.to_string())
    }
}

/// Lookup of single item definitions by hash.
///
/// Implementations are expected to hit the remote catalog on every call.
#[async_trait]
pub trait DefinitionSource {
    type Error: std::fmt::Display + Send + Sync + 'static;

    async fn item_definition(&self, hash: ItemHash) -> Result<ItemDefinition, Self::Error>;
}
