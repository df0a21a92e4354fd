use loadout_app::{AppError, LoadoutExporter};
use loadout_bungie::{BungieError, EXPORT_COMPONENTS};
use loadout_core::{
    CharacterId, CharacterSelector, LoadoutExport, MembershipId, MembershipType, ResolveError,
};
use serde_json::json;

mod support;

use support::{MockBungieApi, TestHarness, single_character_profile};

#[tokio::test]
async fn bare_item_exports_with_empty_cosmetics() {
    let h = TestHarness::new();
    let api = MockBungieApi::new(single_character_profile(&[(111, "9001", &[])]));
    let exporter = LoadoutExporter::new(api);

    let summary = exporter
        .run(&CharacterSelector::Latest, h.output_path())
        .await
        .expect("export should succeed");

    assert_eq!(summary.item_count, 1);
    assert_eq!(summary.character_id, CharacterId("c1".into()));
    assert_eq!(
        h.read_output(),
        json!({
            "membershipType": 3,
            "membershipId": "4611686018467000001",
            "characterId": "c1",
            "items": [{
                "itemHash": 111,
                "itemName": "111",
                "itemType": null,
                "icon": null,
                "instanceId": "9001",
                "appliedShader": null,
                "appliedOrnament": null,
                "visiblePerks": []
            }]
        })
    );

    let round_trip: LoadoutExport =
        serde_json::from_value(h.read_output()).expect("output should parse back");
    let collected = exporter
        .collect(&CharacterSelector::Latest)
        .await
        .expect("collect should succeed");
    assert_eq!(round_trip, collected);
}

#[tokio::test]
async fn decorated_item_carries_shader_ornament_and_perks() {
    let h = TestHarness::new();
    let api = MockBungieApi::new(single_character_profile(&[(
        347366834,
        "6917529000000000001",
        &[10, 20, 30, 40, 50],
    )]))
    .with_item(347366834, "Ace of Spades", "Hand Cannon", "/ace.jpg")
    .with_plug(10, "Memento Mori", "intrinsics", "Intrinsic")
    .with_plug(20, "Firefly", "traits", "Trait")
    .with_plug(30, "Bombardiers", "v400.weapon.mod_guns", "Weapon Mod")
    .with_plug(40, "Gloom", "shader", "Shader")
    .with_plug(50, "Crowned Ace", "exotic_all_skins", "Ornament");

    let summary = LoadoutExporter::new(api)
        .run(&CharacterSelector::Latest, h.output_path())
        .await
        .expect("export should succeed");

    assert_eq!(summary.item_count, 1);
    let item = &h.read_output()["items"][0];
    assert_eq!(item["itemName"], json!("Ace of Spades"));
    assert_eq!(item["itemType"], json!("Hand Cannon"));
    assert_eq!(item["icon"], json!("/ace.jpg"));
    assert_eq!(item["appliedShader"], json!({"itemHash": 40, "name": "Gloom"}));
    assert_eq!(
        item["appliedOrnament"],
        json!({"itemHash": 50, "name": "Crowned Ace"})
    );
    assert_eq!(
        item["visiblePerks"],
        json!([
            {"itemHash": 10, "name": "Memento Mori"},
            {"itemHash": 20, "name": "Firefly"}
        ])
    );
}

#[tokio::test]
async fn failed_plug_lookup_keeps_the_item() {
    let h = TestHarness::new();
    let api = MockBungieApi::new(single_character_profile(&[(111, "1", &[404, 20])]))
        .with_item(111, "Helmet", "Helmet", "/helmet.jpg")
        .with_plug(20, "Frame", "frames", "Intrinsic");
    let exporter = LoadoutExporter::new(api);

    exporter
        .run(&CharacterSelector::Latest, h.output_path())
        .await
        .expect("export should succeed");

    let item = &h.read_output()["items"][0];
    assert_eq!(item["itemName"], json!("Helmet"));
    assert_eq!(item["appliedShader"], json!(null));
    assert_eq!(item["visiblePerks"], json!([{"itemHash": 20, "name": "Frame"}]));
    assert_eq!(
        *exporter
            .api()
            .definition_requests
            .lock()
            .expect("requests lock"),
        vec![111, 404, 20]
    );
}

#[tokio::test]
async fn latest_selector_exports_most_recent_character() {
    let h = TestHarness::new();
    let api = MockBungieApi::new(json!({
        "profile": {"data": {"characterIds": ["old", "new"]}},
        "characters": {"data": {
            "old": {"dateLastPlayed": "2023-01-01T00:00:00Z"},
            "new": {"dateLastPlayed": "2024-01-01T00:00:00Z"}
        }},
        "characterEquipment": {"data": {
            "old": {"items": [{"itemHash": 1, "itemInstanceId": "a"}]},
            "new": {"items": [
                {"itemHash": 2, "itemInstanceId": "b"},
                {"itemHash": 3, "itemInstanceId": "c"}
            ]}
        }}
    }));
    let exporter = LoadoutExporter::new(api);

    let summary = exporter
        .run(&CharacterSelector::Latest, h.output_path())
        .await
        .expect("export should succeed");

    assert_eq!(summary.character_id, CharacterId("new".into()));
    assert_eq!(summary.item_count, 2);
    let output = h.read_output();
    assert_eq!(output["items"][0]["itemHash"], json!(2));
    assert_eq!(output["items"][1]["itemHash"], json!(3));

    let profile_requests = exporter
        .api()
        .profile_requests
        .lock()
        .expect("requests lock")
        .clone();
    assert_eq!(
        profile_requests,
        vec![(
            MembershipType(3),
            MembershipId("4611686018467000001".into()),
            EXPORT_COMPONENTS.to_vec()
        )]
    );
}

#[tokio::test]
async fn account_without_memberships_writes_nothing() {
    let h = TestHarness::new();
    let api = MockBungieApi::new(single_character_profile(&[])).without_memberships();

    let err = LoadoutExporter::new(api)
        .run(&CharacterSelector::Latest, h.output_path())
        .await
        .expect_err("export should fail");

    assert!(matches!(
        err,
        AppError::Bungie(BungieError::NoDestinyMembership)
    ));
    assert!(!h.output_path().exists());
}

#[tokio::test]
async fn profile_without_characters_writes_nothing() {
    let h = TestHarness::new();
    let api = MockBungieApi::new(json!({"profile": {"data": {"characterIds": []}}}));

    let err = LoadoutExporter::new(api)
        .run(&CharacterSelector::Latest, h.output_path())
        .await
        .expect_err("export should fail");

    assert!(matches!(
        err,
        AppError::Resolve(ResolveError::NoCharactersFound)
    ));
    assert!(!h.output_path().exists());
}

#[tokio::test]
async fn output_is_indented_json() {
    let h = TestHarness::new();
    let api = MockBungieApi::new(single_character_profile(&[(111, "1", &[])]));

    LoadoutExporter::new(api)
        .run(
            &CharacterSelector::Id(CharacterId("c1".into())),
            h.output_path(),
        )
        .await
        .expect("export should succeed");

    let raw = std::fs::read_to_string(h.output_path()).expect("read output");
    assert!(raw.starts_with("{\n  \"membershipType\": 3,"));
}
