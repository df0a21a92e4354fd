//! Heuristic classification of socketed plugs into shaders, ornaments and perks.
//!
//! The catalog has no closed enum for these roles. Plug category identifiers
//! and type display names are free-text conventions, so the rules below are
//! substring matches evaluated in a fixed order. False positives and
//! negatives are a known limitation.

use crate::{
    definitions::{DefinitionSource, ItemDefinition},
    ids::ItemHash,
    profile::SocketState,
};

pub const MAX_VISIBLE_PERKS: usize = 6;

/// Category identifier fragments of weapon and armor perk plugs.
pub const PERK_CATEGORY_FRAGMENTS: [&str; 6] = [
    "intrinsics",
    "barrels",
    "magazines",
    "frames",
    "traits",
    "origin",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlugKind {
    Shader,
    Ornament,
    Perk,
}

struct PlugFacts {
    category: String,
    type_name: String,
}

impl PlugFacts {
    fn of(definition: &ItemDefinition) -> Self {
        Self {
            category: definition.plug_category_identifier().to_lowercase(),
            type_name: definition.type_display_name().to_lowercase(),
        }
    }
}

struct PlugRule {
    kind: PlugKind,
    matches: fn(&PlugFacts) -> bool,
}

const PLUG_RULES: [PlugRule; 3] = [
    PlugRule {
        kind: PlugKind::Shader,
        matches: looks_like_shader,
    },
    PlugRule {
        kind: PlugKind::Ornament,
        matches: looks_like_ornament,
    },
    PlugRule {
        kind: PlugKind::Perk,
        matches: looks_like_perk,
    },
];

fn looks_like_shader(facts: &PlugFacts) -> bool {
    facts.category.contains("shader") || facts.type_name == "shader"
}

fn looks_like_ornament(facts: &PlugFacts) -> bool {
    facts.type_name.contains("ornament") || facts.category.contains("skin")
}

fn looks_like_perk(facts: &PlugFacts) -> bool {
    !looks_like_shader(facts)
        && !looks_like_ornament(facts)
        && PERK_CATEGORY_FRAGMENTS
            .iter()
            .any(|fragment| facts.category.contains(fragment))
}

/// Every kind the plug matches, in rule order. A plug may be both shader and
/// ornament; a perk is never either.
pub fn plug_kinds(definition: &ItemDefinition) -> Vec<PlugKind> {
    let facts = PlugFacts::of(definition);
    PLUG_RULES
        .iter()
        .filter(|rule| (rule.matches)(&facts))
        .map(|rule| rule.kind)
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedPlug {
    pub hash: ItemHash,
    pub definition: ItemDefinition,
}

impl ResolvedPlug {
    pub fn name(&self) -> String {
        self.definition.name_or_hash(self.hash)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cosmetics {
    pub shader: Option<ResolvedPlug>,
    pub ornament: Option<ResolvedPlug>,
    pub perks: Vec<ResolvedPlug>,
}

/// Resolves and classifies the plugs of one item, socket by socket.
///
/// The first shader and first ornament win. Perks keep socket order and are
/// capped at [`MAX_VISIBLE_PERKS`]. A socket whose definition cannot be
/// fetched is skipped.
pub async fn classify<D>(source: &D, sockets: &[SocketState]) -> Cosmetics
where
    D: DefinitionSource + ?Sized,
{
    let mut cosmetics = Cosmetics::default();

    for (index, socket) in sockets.iter().enumerate() {
        let Some(hash) = socket.plugged_item_hash() else {
            continue;
        };

        let definition = match source.item_definition(hash).await {
            Ok(definition) => definition,
            Err(err) => {
                log::debug!("skipping socket {index}: lookup of plug {hash} failed: {err}");
                continue;
            }
        };

        let kinds = plug_kinds(&definition);
        log::trace!("socket {index} plug {hash} classified as {kinds:?}");

        let plug = ResolvedPlug { hash, definition };
        if kinds.contains(&PlugKind::Shader) && cosmetics.shader.is_none() {
            cosmetics.shader = Some(plug.clone());
        }
        if kinds.contains(&PlugKind::Ornament) && cosmetics.ornament.is_none() {
            cosmetics.ornament = Some(plug.clone());
        }
        if kinds.contains(&PlugKind::Perk) {
            cosmetics.perks.push(plug);
        }
    }

    cosmetics.perks.truncate(MAX_VISIBLE_PERKS);
    cosmetics
}
