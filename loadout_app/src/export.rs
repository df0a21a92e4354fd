use std::{fs, path::Path};

use loadout_core::LoadoutExport;

use crate::AppError;

/// Writes the export as indented JSON, replacing any existing file, and
/// returns the number of items written.
pub fn write_export(path: &Path, export: &LoadoutExport) -> Result<usize, AppError> {
    let mut raw = serde_json::to_string_pretty(export)?;
    raw.push('\n');
    fs::write(path, raw).map_err(|source| AppError::ExportWrite {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "wrote {} equipped items to {}",
        export.items.len(),
        path.display()
    );
    Ok(export.items.len())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use loadout_core::{CharacterId, LoadoutExport, MembershipId, MembershipType};

    use super::write_export;
    use crate::AppError;

    fn empty_export() -> LoadoutExport {
        LoadoutExport {
            membership_type: MembershipType(3),
            membership_id: MembershipId("1".into()),
            character_id: CharacterId("2".into()),
            items: Vec::new(),
        }
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.json");
        fs::write(&path, "stale contents that are much longer than the export").expect("seed");

        let count = write_export(&path, &empty_export()).expect("write should succeed");

        assert_eq!(count, 0);
        let parsed: LoadoutExport =
            serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(parsed, empty_export());
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing-dir").join("out.json");

        let err = write_export(&path, &empty_export()).expect_err("write should fail");

        assert!(matches!(err, AppError::ExportWrite { .. }));
    }
}
