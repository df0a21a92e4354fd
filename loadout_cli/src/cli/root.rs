use std::path::PathBuf;

use clap::{ArgAction, Parser};
use loadout_app::{ExportSummary, LoadoutExporter};
use loadout_bungie::BungieClient;
use loadout_core::CharacterSelector;

use crate::cli::common::{load_bungie_config, tokens_path};

const DEFAULT_OUTPUT: &str = "equipped_cosmetics.json";

pub(crate) fn get_args() -> CliOpts {
    CliOpts::parse()
}

/// Export the equipped items of a Destiny 2 character, with their applied
/// shader, ornament and visible perks, to a JSON file.
#[derive(Debug, Parser)]
#[command(version = clap::crate_version!())]
pub(crate) struct CliOpts {
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Character id to export, or "latest" for the most recently played one.
    #[arg(long, default_value = "latest")]
    character: String,

    /// Output JSON file.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    out: PathBuf,

    /// Token file; defaults to $BUNGIE_TOKENS_PATH or tokens.json.
    #[arg(long)]
    tokens: Option<PathBuf>,
}

impl CliOpts {
    pub(crate) fn verbose(&self) -> u8 {
        self.verbose
    }

    pub(crate) async fn run(&self) -> anyhow::Result<ExportSummary> {
        let selector: CharacterSelector = self.character.parse()?;
        let config = load_bungie_config();
        let tokens_path = tokens_path(self.tokens.as_deref());

        let client = BungieClient::from_config(&config, &tokens_path)?;
        let summary = LoadoutExporter::new(client)
            .run(&selector, &self.out)
            .await?;
        Ok(summary)
    }
}

pub(crate) fn summary_line(summary: &ExportSummary) -> String {
    format!(
        "Wrote {} with {} equipped items for character {}.",
        summary.output_path.display(),
        summary.item_count,
        summary.character_id
    )
}
