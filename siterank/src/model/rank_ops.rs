use itertools::Itertools;

use super::distance_record::DistanceRecord;
use super::site::Site;

/// ranks every (plant, port) pairing by planar distance, closest pair first.
///
/// the cross product is enumerated plants-major, ports-minor and the sort is
/// stable with no secondary key, so pairings at equal distance keep their
/// enumeration order. inputs are trusted to hold the kind their name says;
/// a mis-tagged site is ranked like any other.
///
/// empty input on either side produces an empty ranking.
pub fn rank_pairs(plants: &[Site], ports: &[Site]) -> Vec<DistanceRecord> {
    let mut records = plants
        .iter()
        .flat_map(|plant| {
            ports.iter().map(|port| DistanceRecord {
                plant: plant.label(),
                port: port.label(),
                distance: plant.distance_to(port),
                production: plant.production,
            })
        })
        .collect_vec();
    records.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    records
}
