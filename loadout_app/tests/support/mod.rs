use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use async_trait::async_trait;
use loadout_bungie::{BungieApi, BungieError, BungieResult, ComponentType, UserMemberships};
use loadout_core::{
    DefinitionSource, ItemDefinition, ItemHash, MembershipId, MembershipType, ProfileSnapshot,
};
use serde_json::{Value, json};
use tempfile::TempDir;

pub struct MockBungieApi {
    memberships: Value,
    profile: Value,
    definitions: HashMap<u32, Value>,
    pub definition_requests: Mutex<Vec<u32>>,
    pub profile_requests: Mutex<Vec<(MembershipType, MembershipId, Vec<ComponentType>)>>,
}

impl MockBungieApi {
    pub fn new(profile: Value) -> Self {
        Self {
            memberships: json!({
                "destinyMemberships": [
                    {"membershipType": 3, "membershipId": "4611686018467000001"}
                ]
            }),
            profile,
            definitions: HashMap::new(),
            definition_requests: Mutex::new(Vec::new()),
            profile_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn without_memberships(mut self) -> Self {
        self.memberships = json!({"destinyMemberships": []});
        self
    }

    pub fn with_item(mut self, hash: u32, name: &str, type_name: &str, icon: &str) -> Self {
        self.definitions.insert(
            hash,
            json!({
                "displayProperties": {"name": name, "icon": icon},
                "itemTypeDisplayName": type_name
            }),
        );
        self
    }

    pub fn with_plug(mut self, hash: u32, name: &str, category: &str, type_name: &str) -> Self {
        self.definitions.insert(
            hash,
            json!({
                "displayProperties": {"name": name},
                "itemTypeDisplayName": type_name,
                "plug": {"plugCategoryIdentifier": category}
            }),
        );
        self
    }
}

#[async_trait]
impl DefinitionSource for MockBungieApi {
    type Error = BungieError;

    async fn item_definition(&self, hash: ItemHash) -> BungieResult<ItemDefinition> {
        self.definition_requests
            .lock()
            .expect("requests lock")
            .push(hash.0);
        let raw = self.definitions.get(&hash.0).cloned().ok_or(BungieError::Http {
            status: 500,
            body: format!("no definition for {hash}"),
        })?;
        Ok(serde_json::from_value(raw)?)
    }
}

#[async_trait]
impl BungieApi for MockBungieApi {
    async fn get_memberships_for_current_user(&self) -> BungieResult<UserMemberships> {
        Ok(serde_json::from_value(self.memberships.clone())?)
    }

    async fn get_profile(
        &self,
        membership_type: MembershipType,
        membership_id: &MembershipId,
        components: &[ComponentType],
    ) -> BungieResult<ProfileSnapshot> {
        self.profile_requests.lock().expect("requests lock").push((
            membership_type,
            membership_id.clone(),
            components.to_vec(),
        ));
        Ok(serde_json::from_value(self.profile.clone())?)
    }
}

pub struct TestHarness {
    _temp_dir: TempDir,
    output_path: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let output_path = temp_dir.path().join("equipped_cosmetics.json");
        Self {
            _temp_dir: temp_dir,
            output_path,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn read_output(&self) -> Value {
        let raw = fs::read_to_string(&self.output_path).expect("read output");
        serde_json::from_str(&raw).expect("parse output")
    }
}

/// Profile with one character `c1` wearing `items`, each as `(hash, instance, plugs)`.
pub fn single_character_profile(items: &[(u32, &str, &[u32])]) -> Value {
    let equipment: Vec<Value> = items
        .iter()
        .map(|(hash, instance, _)| json!({"itemHash": hash, "itemInstanceId": instance}))
        .collect();
    let sockets: serde_json::Map<String, Value> = items
        .iter()
        .map(|(_, instance, plugs)| {
            let states: Vec<Value> = plugs
                .iter()
                .map(|plug| json!({"plugHash": plug, "isEnabled": true, "isVisible": true}))
                .collect();
            ((*instance).to_owned(), json!({"sockets": states}))
        })
        .collect();

    json!({
        "profile": {"data": {"characterIds": ["c1"]}},
        "characters": {"data": {"c1": {"dateLastPlayed": "2024-05-01T10:00:00Z"}}},
        "characterEquipment": {"data": {"c1": {"items": equipment}}},
        "itemComponents": {"sockets": {"data": sockets}}
    })
}
