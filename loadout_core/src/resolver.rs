use std::{convert::Infallible, fmt, str::FromStr};

use crate::{
    ids::{CharacterId, ItemHash, ItemInstanceId},
    profile::{ProfileSnapshot, SocketState},
    time::Timestamp,
};

pub const LATEST_SELECTOR: &str = "latest";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no characters found on this profile")]
    NoCharactersFound,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CharacterSelector {
    /// The character with the most recent last-played time.
    Latest,
    /// An exact character id, used as given.
    Id(CharacterId),
}

impl FromStr for CharacterSelector {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case(LATEST_SELECTOR) {
            Ok(Self::Latest)
        } else {
            Ok(Self::Id(CharacterId(raw.to_owned())))
        }
    }
}

impl fmt::Display for CharacterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "{LATEST_SELECTOR}"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquippedItem {
    pub item_hash: ItemHash,
    pub instance_id: Option<ItemInstanceId>,
}

pub fn select_character(
    snapshot: &ProfileSnapshot,
    selector: &CharacterSelector,
) -> Result<CharacterId, ResolveError> {
    let character_ids = snapshot.character_ids();
    let Some(first) = character_ids.first() else {
        return Err(ResolveError::NoCharactersFound);
    };

    let selected = match selector {
        CharacterSelector::Id(id) => id.clone(),
        CharacterSelector::Latest => {
            let mut latest: Option<(Timestamp, &CharacterId)> = None;
            for character_id in character_ids {
                let Some(played_at) = snapshot
                    .character(character_id)
                    .and_then(|character| character.date_last_played.as_deref())
                    .and_then(Timestamp::parse_api)
                else {
                    log::trace!("character {character_id} has no usable last-played time");
                    continue;
                };

                if latest.is_none_or(|(best, _)| played_at > best) {
                    latest = Some((played_at, character_id));
                }
            }

            latest.map_or(first, |(_, id)| id).clone()
        }
    };

    log::debug!("selected character {selected} for selector {selector}");
    Ok(selected)
}

/// Equipped items for a character in equipment order. Entries without an
/// item hash are skipped.
pub fn equipped_items(snapshot: &ProfileSnapshot, character_id: &CharacterId) -> Vec<EquippedItem> {
    let Some(equipment) = snapshot.equipment(character_id) else {
        return Vec::new();
    };

    equipment
        .items
        .iter()
        .filter_map(|item| {
            let item_hash = item.item_hash.filter(|hash| !hash.is_empty())?;
            Some(EquippedItem {
                item_hash,
                instance_id: item.item_instance_id.clone(),
            })
        })
        .collect()
}

pub fn sockets_for<'a>(
    snapshot: &'a ProfileSnapshot,
    instance_id: Option<&ItemInstanceId>,
) -> &'a [SocketState] {
    instance_id
        .and_then(|id| snapshot.item_sockets(id))
        .map(|component| component.sockets.as_slice())
        .unwrap_or_default()
}
