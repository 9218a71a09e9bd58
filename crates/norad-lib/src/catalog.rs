use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::{Error, Result};

/// Numeric identifier for a star.
pub type StarId = i64;

/// Numeric identifier for a player.
pub type PlayerId = i64;

/// Technology that governs hyperspace jump range.
pub const PROPULSION: &str = "propulsion";

/// Minimum Jaro-Winkler similarity for a star name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Galaxy coordinates of a star, in raw map units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarPosition {
    pub x: f64,
    pub y: f64,
}

impl StarPosition {
    /// Calculate the Euclidean distance to another position in map units.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A star system as reported by the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    pub id: StarId,
    pub name: String,
    pub position: StarPosition,
    /// Owning player, `None` when the star is unclaimed.
    pub owner: Option<PlayerId>,
    pub industry: u32,
    pub has_gate: bool,
}

impl Star {
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// Owned stars with industry are the ones carriers are built at.
    pub fn is_production_for(&self, player: PlayerId) -> bool {
        self.is_owned_by(player) && self.industry > 0
    }
}

/// Research state for a single technology.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Technology {
    pub level: i64,
    /// Effective value shown in the game UI; not used for range checks.
    pub value: f64,
}

/// A player and their research table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub tech: HashMap<String, Technology>,
}

impl Player {
    /// Lookup a technology by its snapshot name (e.g. `"propulsion"`).
    pub fn technology(&self, name: &str) -> Option<&Technology> {
        self.tech.get(name)
    }
}

/// Immutable view of one galaxy snapshot from the perspective of a player.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    player_id: PlayerId,
    stars: BTreeMap<StarId, Star>,
    players: HashMap<PlayerId, Player>,
    name_to_id: HashMap<String, StarId>,
}

impl Catalog {
    /// Assemble a catalog for `player_id` from decoded stars and players.
    ///
    /// Names are indexed case-sensitively. If several stars share a name the
    /// lowest identifier is the one returned by name lookups.
    pub fn new(
        player_id: PlayerId,
        stars: impl IntoIterator<Item = Star>,
        players: impl IntoIterator<Item = Player>,
    ) -> Self {
        let stars: BTreeMap<StarId, Star> = stars.into_iter().map(|star| (star.id, star)).collect();
        let players = players
            .into_iter()
            .map(|player| (player.id, player))
            .collect();

        let mut name_to_id = HashMap::new();
        for star in stars.values() {
            name_to_id.entry(star.name.clone()).or_insert(star.id);
        }

        Self {
            player_id,
            stars,
            players,
            name_to_id,
        }
    }

    /// Identifier of the player the snapshot was fetched for.
    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    /// All stars in ascending identifier order.
    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.stars.values()
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub fn star(&self, id: StarId) -> Option<&Star> {
        self.stars.get(&id)
    }

    /// Lookup a star identifier by its case-sensitive name.
    pub fn star_id_by_name(&self, name: &str) -> Option<StarId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a star name by identifier.
    pub fn star_name(&self, id: StarId) -> Option<&str> {
        self.stars.get(&id).map(|star| star.name.as_str())
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// The player the snapshot belongs to, if the snapshot lists them.
    pub fn current_player(&self) -> Option<&Player> {
        self.player(self.player_id)
    }

    /// Stars owned by the current player, in identifier order.
    pub fn own_stars(&self) -> impl Iterator<Item = &Star> {
        let player = self.player_id;
        self.stars().filter(move |star| star.is_owned_by(player))
    }

    /// Owned stars with positive industry, in identifier order.
    pub fn production_stars(&self) -> impl Iterator<Item = &Star> {
        let player = self.player_id;
        self.stars().filter(move |star| star.is_production_for(player))
    }

    /// Owned stars that carry a warp gate, in identifier order.
    pub fn gate_stars(&self) -> impl Iterator<Item = &Star> {
        self.own_stars().filter(|star| star.has_gate)
    }

    /// Propulsion research of the current player.
    pub fn propulsion(&self) -> Result<&Technology> {
        let player = self
            .current_player()
            .ok_or(Error::UnknownPlayer {
                player: self.player_id,
            })?;
        player
            .technology(PROPULSION)
            .ok_or_else(|| Error::MissingTechnology {
                player: player.id,
                technology: PROPULSION.to_string(),
            })
    }

    /// Star names resembling `name`, best match first.
    pub fn fuzzy_star_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .name_to_id
            .keys()
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}

/// Resolve a star by exact name.
///
/// Unknown names produce [`Error::StarNotFound`] with up to three similar
/// names attached as suggestions.
pub fn find_star_by_name<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Star> {
    catalog
        .star_id_by_name(name)
        .and_then(|id| catalog.star(id))
        .ok_or_else(|| Error::StarNotFound {
            name: name.to_string(),
            suggestions: catalog.fuzzy_star_matches(name, 3),
        })
}
