use geo::{Distance, Euclidean, Point};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use super::site_error::SiteError;

/// the categories of candidate site considered by the siting model.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKind {
    Plant,
    Port,
}

impl FromStr for SiteKind {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Plant" => Ok(SiteKind::Plant),
            "Port" => Ok(SiteKind::Port),
            _ => Err(SiteError::InvalidKind(String::from(s))),
        }
    }
}

impl Display for SiteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteKind::Plant => write!(f, "Plant"),
            SiteKind::Port => write!(f, "Port"),
        }
    }
}

/// a geographic point of interest in the siting model. stores the coordinate,
/// the kind of site found there, and, for plants, the production capacity.
/// sites are built once by the loader and never modified.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Site {
    pub longitude: f64,
    pub latitude: f64,
    pub kind: SiteKind,
    /// production capacity of the site. set for plant rows; ports carry none.
    pub production: Option<f64>,
}

impl Site {
    pub fn plant(longitude: f64, latitude: f64, production: Option<f64>) -> Site {
        Site {
            longitude,
            latitude,
            kind: SiteKind::Plant,
            production,
        }
    }

    pub fn port(longitude: f64, latitude: f64) -> Site {
        Site {
            longitude,
            latitude,
            kind: SiteKind::Port,
            production: None,
        }
    }

    /// builds a site from a raw kind tag, for callers holding untyped
    /// records. tags outside the recognized set fail.
    pub fn tagged(
        longitude: f64,
        latitude: f64,
        tag: &str,
        production: Option<f64>,
    ) -> Result<Site, SiteError> {
        let kind = SiteKind::from_str(tag)?;
        Ok(Site {
            longitude,
            latitude,
            kind,
            production,
        })
    }

    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// planar euclidean distance from this site to another. purely geometric:
    /// kind and production play no part, so two sites at the same coordinate
    /// are at distance zero regardless of what sits there.
    pub fn distance_to(&self, other: &Site) -> f64 {
        Euclidean.distance(self.point(), other.point())
    }

    /// the human-facing identifier used in ranked output. two sites sharing
    /// kind and coordinates render the same label; the model accepts this.
    pub fn label(&self) -> String {
        format!(
            "{} Lon:{:?} Lat:{:?}",
            self.kind, self.longitude, self.latitude
        )
    }
}

impl Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
