use loadout_core::ids::{MembershipId, MembershipType};
use serde::Deserialize;
use serde_json::Value;

use crate::{BungieError, BungieResult};

/// `ErrorCode` of a successful Platform call.
const PLATFORM_SUCCESS: i64 = 1;

/// Sub-trees of the profile response, selected by integer code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentType {
    Profiles,
    Characters,
    CharacterEquipment,
    ItemSockets,
}

impl ComponentType {
    pub fn code(self) -> u16 {
        match self {
            Self::Profiles => 100,
            Self::Characters => 200,
            Self::CharacterEquipment => 205,
            Self::ItemSockets => 305,
        }
    }

    pub fn join(components: &[Self]) -> String {
        components
            .iter()
            .map(|component| component.code().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub const EXPORT_COMPONENTS: [ComponentType; 4] = [
    ComponentType::Profiles,
    ComponentType::Characters,
    ComponentType::CharacterEquipment,
    ComponentType::ItemSockets,
];

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PlatformEnvelope {
    #[serde(default)]
    pub response: Option<Value>,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error_status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PlatformEnvelope {
    pub fn into_response(self) -> BungieResult<Value> {
        if self.error_code != PLATFORM_SUCCESS {
            return Err(BungieError::Api {
                error_code: self.error_code,
                error_status: self.error_status.unwrap_or_default(),
                message: self.message.unwrap_or_default(),
            });
        }

        self.response
            .ok_or_else(|| BungieError::message("platform response carried no Response payload"))
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserMemberships {
    #[serde(default)]
    pub destiny_memberships: Vec<DestinyMembership>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DestinyMembership {
    pub membership_type: MembershipType,
    pub membership_id: MembershipId,
}

impl UserMemberships {
    /// The first linked game membership, used without further disambiguation.
    pub fn first_destiny_membership(&self) -> BungieResult<&DestinyMembership> {
        self.destiny_memberships
            .first()
            .ok_or(BungieError::NoDestinyMembership)
    }
}
