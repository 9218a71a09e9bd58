//! Common test utilities and fixture helpers.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;

use norad_lib::{Catalog, Player, PlayerId, Star, StarId, StarPosition, Technology, PROPULSION};

/// Path to the fixtures directory shared by the workspace tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the checked-in universe report.
pub fn fixture_snapshot_path() -> PathBuf {
    fixtures_dir().join("snapshot.json")
}

/// Builder for small hand-made catalogs.
pub struct CatalogBuilder {
    player_id: PlayerId,
    stars: Vec<Star>,
    players: Vec<Player>,
}

impl CatalogBuilder {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            stars: Vec::new(),
            players: Vec::new(),
        }
    }

    /// Add an unowned star at raw map coordinates.
    pub fn star(self, id: StarId, name: &str, x: f64, y: f64) -> Self {
        self.star_with(id, name, x, y, None, 0)
    }

    /// Add a star with an owner and industry level.
    pub fn star_with(
        mut self,
        id: StarId,
        name: &str,
        x: f64,
        y: f64,
        owner: Option<PlayerId>,
        industry: u32,
    ) -> Self {
        self.stars.push(Star {
            id,
            name: name.to_string(),
            position: StarPosition { x, y },
            owner,
            industry,
            has_gate: false,
        });
        self
    }

    /// Add a player with the given propulsion level.
    pub fn player(mut self, id: PlayerId, name: &str, propulsion: i64) -> Self {
        let tech = HashMap::from([(
            PROPULSION.to_string(),
            Technology {
                level: propulsion,
                value: propulsion as f64 * 0.125,
            },
        )]);
        self.players.push(Player {
            id,
            name: name.to_string(),
            tech,
        });
        self
    }

    pub fn build(self) -> Catalog {
        Catalog::new(self.player_id, self.stars, self.players)
    }
}

/// Three stars A(0,0), B(4,0), C(4,3) owned by player 1 at propulsion 29.
///
/// A–B is 32ly, B–C 24ly and A–C 40ly.
pub fn triangle_catalog() -> Catalog {
    CatalogBuilder::new(1)
        .star_with(1, "A", 0.0, 0.0, Some(1), 1)
        .star(2, "B", 4.0, 0.0)
        .star(3, "C", 4.0, 3.0)
        .player(1, "Ada", 29)
        .build()
}

/// Four stars on a unit square: two equal-cost ways from 1 to 4.
pub fn square_catalog() -> Catalog {
    CatalogBuilder::new(1)
        .star(1, "North", 0.0, 0.0)
        .star(2, "East", 1.0, 0.0)
        .star(3, "West", 0.0, 1.0)
        .star(4, "South", 1.0, 1.0)
        .player(1, "Ada", 5)
        .build()
}
