use serde::{Deserialize, Serialize};

/// one ranked (plant, port) pairing: the two site labels and the planar
/// distance between them, with the plant's production capacity carried
/// through for downstream use. field names serialize in PascalCase so a
/// delimited export gets the `Plant,Port,Distance,Production` header.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DistanceRecord {
    pub plant: String,
    pub port: String,
    pub distance: f64,
    pub production: Option<f64>,
}
