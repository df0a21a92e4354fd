use std::path::{Path, PathBuf};

use loadout_bungie::{BungieApi, EXPORT_COMPONENTS};
use loadout_core::{
    CharacterId, CharacterSelector, EquippedItem, EquippedItemRecord, LoadoutExport,
    ProfileSnapshot, classify, equipped_items, select_character, sockets_for,
};

use crate::{AppError, export::write_export};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSummary {
    pub output_path: PathBuf,
    pub character_id: CharacterId,
    pub item_count: usize,
}

/// Drives one export run against a Platform API.
pub struct LoadoutExporter<A>
where
    A: BungieApi,
{
    api: A,
}

impl<A> LoadoutExporter<A>
where
    A: BungieApi,
{
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Collects the loadout and writes it. Nothing is written when any step
    /// before the export fails.
    pub async fn run(
        &self,
        selector: &CharacterSelector,
        output_path: impl AsRef<Path>,
    ) -> Result<ExportSummary, AppError> {
        let output_path = output_path.as_ref();
        let export = self.collect(selector).await?;
        let item_count = write_export(output_path, &export)?;

        Ok(ExportSummary {
            output_path: output_path.to_path_buf(),
            character_id: export.character_id,
            item_count,
        })
    }

    pub async fn collect(&self, selector: &CharacterSelector) -> Result<LoadoutExport, AppError> {
        let memberships = self.api.get_memberships_for_current_user().await?;
        let membership = memberships.first_destiny_membership()?;
        log::info!(
            "using membership {} (type {})",
            membership.membership_id,
            membership.membership_type
        );

        let snapshot = self
            .api
            .get_profile(
                membership.membership_type,
                &membership.membership_id,
                &EXPORT_COMPONENTS,
            )
            .await?;

        let character_id = select_character(&snapshot, selector)?;
        let equipped = equipped_items(&snapshot, &character_id);
        log::info!(
            "character {character_id} has {} equipped items",
            equipped.len()
        );

        let mut items = Vec::with_capacity(equipped.len());
        for item in equipped {
            items.push(self.describe_item(&snapshot, item).await);
        }

        Ok(LoadoutExport {
            membership_type: membership.membership_type,
            membership_id: membership.membership_id.clone(),
            character_id,
            items,
        })
    }

    async fn describe_item(
        &self,
        snapshot: &ProfileSnapshot,
        item: EquippedItem,
    ) -> EquippedItemRecord {
        let definition = match self.api.item_definition(item.item_hash).await {
            Ok(definition) => Some(definition),
            Err(err) => {
                log::warn!(
                    "definition lookup for item {} failed, using raw hash: {}",
                    item.item_hash,
                    err.display_chain()
                );
                None
            }
        };

        let sockets = sockets_for(snapshot, item.instance_id.as_ref());
        let cosmetics = classify(&self.api, sockets).await;

        EquippedItemRecord::assemble(
            item.item_hash,
            item.instance_id,
            definition.as_ref(),
            &cosmetics,
        )
    }
}
