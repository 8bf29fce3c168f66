use kdam::tqdm;
use std::path::Path;

use super::export_error::ExportError;
use crate::model::DistanceRecord;

/// writes ranked records to a delimited file at the destination path,
/// replacing any existing file. rows land in the order given, one per
/// ranked pairing, under a `Plant,Port,Distance,Production` header.
pub fn write_rankings<P: AsRef<Path>>(
    records: &[DistanceRecord],
    destination: P,
) -> Result<(), ExportError> {
    let path = destination.as_ref();
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| ExportError::DestinationUnwritable {
            path: path.to_path_buf(),
            source: e,
        })?;
    for record in tqdm!(
        records.iter(),
        desc = "writing rankings",
        total = records.len()
    ) {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::write_rankings;
    use crate::export::ExportError;
    use crate::model::DistanceRecord;
    use std::path::PathBuf;

    fn ranked_fixture() -> Vec<DistanceRecord> {
        vec![
            DistanceRecord {
                plant: String::from("Plant Lon:0.0 Lat:0.0"),
                port: String::from("Port Lon:3.0 Lat:4.0"),
                distance: 5.0,
                production: Some(1000.0),
            },
            DistanceRecord {
                plant: String::from("Plant Lon:0.0 Lat:0.0"),
                port: String::from("Port Lon:6.0 Lat:8.0"),
                distance: 10.0,
                production: None,
            },
        ]
    }

    #[test]
    fn test_write_rankings() {
        let out_path = std::env::temp_dir().join("siterank_export_rankings.csv");
        let _ = std::fs::remove_file(&out_path);
        write_rankings(&ranked_fixture(), &out_path).unwrap();
        let written = std::fs::read_to_string(&out_path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Plant,Port,Distance,Production",
                "Plant Lon:0.0 Lat:0.0,Port Lon:3.0 Lat:4.0,5.0,1000.0",
                "Plant Lon:0.0 Lat:0.0,Port Lon:6.0 Lat:8.0,10.0,",
            ]
        );
        let _ = std::fs::remove_file(&out_path);
    }

    #[test]
    fn test_write_rankings_replaces_existing_file() {
        let out_path = std::env::temp_dir().join("siterank_export_overwrite.csv");
        std::fs::write(&out_path, "stale contents\n").unwrap();
        write_rankings(&ranked_fixture(), &out_path).unwrap();
        let written = std::fs::read_to_string(&out_path).unwrap();
        assert!(written.starts_with("Plant,Port,Distance,Production"));
        assert!(!written.contains("stale contents"));
        let _ = std::fs::remove_file(&out_path);
    }

    /// headers come from serde on the first record, so an empty ranking
    /// produces an empty file rather than a lone header row.
    #[test]
    fn test_write_rankings_empty_input() {
        let out_path = std::env::temp_dir().join("siterank_export_empty.csv");
        let _ = std::fs::remove_file(&out_path);
        write_rankings(&[], &out_path).unwrap();
        let written = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(written, "");
        let _ = std::fs::remove_file(&out_path);
    }

    #[test]
    fn test_write_rankings_unwritable_destination() {
        let out_path = PathBuf::from("no-such-directory/rankings.csv");
        let error = write_rankings(&ranked_fixture(), &out_path).unwrap_err();
        assert!(matches!(error, ExportError::DestinationUnwritable { .. }));
    }
}
