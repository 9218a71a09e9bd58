//! Decoding of the game's universe report into a [`Catalog`].
//!
//! The report is the JSON document returned by the game's full universe
//! request. Stars and players are keyed by stringified integers and star
//! coordinates arrive as strings; both are normalised here so the rest of the
//! crate only ever sees integer identifiers and `f64` positions. Either the
//! full response (`{"report": {...}}`) or the bare report object is accepted.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::{Catalog, Player, PlayerId, Star, StarId, StarPosition, Technology};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct RawReport {
    player_uid: PlayerId,
    #[serde(default)]
    stars: BTreeMap<String, RawStar>,
    #[serde(default)]
    players: BTreeMap<String, RawPlayer>,
}

#[derive(Debug, Deserialize)]
struct RawStar {
    uid: StarId,
    #[serde(rename = "n")]
    name: String,
    #[serde(rename = "puid", default)]
    owner: Option<PlayerId>,
    x: RawCoordinate,
    y: RawCoordinate,
    #[serde(rename = "i", default)]
    industry: u32,
    #[serde(rename = "ga", default)]
    gate: i64,
}

/// Coordinates are usually strings in the report but plain numbers are
/// accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCoordinate {
    Number(f64),
    Text(String),
}

impl RawCoordinate {
    /// Positions must be finite; `"NaN"` and `"inf"` parse as `f64` but are
    /// rejected all the same.
    fn resolve(&self, star: StarId) -> Result<f64> {
        let (value, raw) = match self {
            RawCoordinate::Number(value) => (Some(*value), value.to_string()),
            RawCoordinate::Text(text) => (text.trim().parse::<f64>().ok(), text.clone()),
        };
        value
            .filter(|value| value.is_finite())
            .ok_or(Error::InvalidCoordinate { star, value: raw })
    }
}

#[derive(Debug, Deserialize)]
struct RawPlayer {
    #[serde(default)]
    alias: String,
    #[serde(default)]
    tech: HashMap<String, RawTechnology>,
}

#[derive(Debug, Deserialize)]
struct RawTechnology {
    #[serde(default)]
    level: i64,
    #[serde(default)]
    value: f64,
}

impl RawReport {
    fn into_catalog(self) -> Result<Catalog> {
        // Keys are visited in sorted order so the first reported error is stable.
        let mut seen_stars = BTreeSet::new();
        let mut stars = Vec::with_capacity(self.stars.len());
        for (key, raw) in self.stars {
            let id = parse_star_key(&key)?;
            if id != raw.uid {
                return Err(Error::StarIdMismatch { key, uid: raw.uid });
            }
            if !seen_stars.insert(id) {
                return Err(Error::DuplicateStarId { key, uid: id });
            }
            stars.push(raw.into_star()?);
        }

        let mut seen_players = BTreeSet::new();
        let mut players = Vec::with_capacity(self.players.len());
        for (key, raw) in self.players {
            let id = parse_player_key(&key)?;
            if !seen_players.insert(id) {
                return Err(Error::DuplicatePlayerId { key, player: id });
            }
            players.push(raw.into_player(id));
        }

        if !players.iter().any(|player| player.id == self.player_uid) {
            warn!(player = self.player_uid, "snapshot does not describe its own player");
        }

        Ok(Catalog::new(self.player_uid, stars, players))
    }
}

impl RawStar {
    fn into_star(self) -> Result<Star> {
        let position = StarPosition {
            x: self.x.resolve(self.uid)?,
            y: self.y.resolve(self.uid)?,
        };
        Ok(Star {
            id: self.uid,
            name: self.name,
            position,
            // Unclaimed stars report -1 (older reports use 0).
            owner: self.owner.filter(|owner| *owner > 0),
            industry: self.industry,
            has_gate: self.gate != 0,
        })
    }
}

impl RawPlayer {
    fn into_player(self, id: PlayerId) -> Player {
        let tech = self
            .tech
            .into_iter()
            .map(|(name, raw)| {
                (
                    name,
                    Technology {
                        level: raw.level,
                        value: raw.value,
                    },
                )
            })
            .collect();
        Player {
            id,
            name: self.alias,
            tech,
        }
    }
}

fn parse_star_key(key: &str) -> Result<StarId> {
    key.trim().parse().map_err(|_| Error::InvalidStarId {
        key: key.to_string(),
    })
}

fn parse_player_key(key: &str) -> Result<PlayerId> {
    key.trim().parse().map_err(|_| Error::InvalidPlayerId {
        key: key.to_string(),
    })
}

impl Catalog {
    /// Decode a universe report (wrapped or bare) into a catalog.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(json)?;
        let report = match document {
            Value::Object(mut map) => match map.remove("report") {
                Some(report) => report,
                None => Value::Object(map),
            },
            other => other,
        };

        let raw: RawReport = serde_json::from_value(report)?;
        raw.into_catalog()
    }
}

/// Load and decode a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(Error::SnapshotNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let catalog = Catalog::from_json_str(&contents)?;
    debug!(
        path = %path.display(),
        stars = catalog.star_count(),
        player = catalog.player_id(),
        "loaded snapshot"
    );
    Ok(catalog)
}
