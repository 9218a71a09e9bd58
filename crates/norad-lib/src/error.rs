use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::PlayerId;

/// Convenient result alias for the Norad library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Snapshot could not be located at the resolved path.
    #[error("snapshot not found at {path}")]
    SnapshotNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the snapshot location")]
    ProjectDirsUnavailable,

    /// Raised when a star name could not be found in the catalog.
    #[error("unknown star name: {name}{}", format_suggestions(.suggestions))]
    StarNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no source was requested and the player owns no production star.
    #[error("player {player} has no production star to route from; pass a source explicitly")]
    NoDefaultSource { player: PlayerId },

    /// Raised when the snapshot does not carry the requested player.
    #[error("player {player} is not present in the snapshot")]
    UnknownPlayer { player: PlayerId },

    /// Raised when a player lacks a technology needed for route planning.
    #[error("player {player} has no {technology} technology in the snapshot")]
    MissingTechnology {
        player: PlayerId,
        technology: String,
    },

    /// Raised when a computed route plan lacks any stars.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when a star key in the snapshot is not an integer.
    #[error("star key {key:?} is not a valid star identifier")]
    InvalidStarId { key: String },

    /// Raised when a player key in the snapshot is not an integer.
    #[error("player key {key:?} is not a valid player identifier")]
    InvalidPlayerId { key: String },

    /// Raised when a star is filed under a key that disagrees with its `uid`.
    #[error("star filed under key {key:?} reports uid {uid}")]
    StarIdMismatch { key: String, uid: i64 },

    /// Raised when two star keys decode to the same identifier.
    #[error("star key {key:?} repeats star identifier {uid}")]
    DuplicateStarId { key: String, uid: i64 },

    /// Raised when two player keys decode to the same identifier.
    #[error("player key {key:?} repeats player identifier {player}")]
    DuplicatePlayerId { key: String, player: i64 },

    /// Raised when a star coordinate is not a finite number.
    #[error("star {star} has an invalid coordinate {value:?}")]
    InvalidCoordinate { star: i64, value: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_not_found_without_suggestions_is_bare() {
        let err = Error::StarNotFound {
            name: "Nowhere".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown star name: Nowhere");
    }

    #[test]
    fn star_not_found_lists_suggestions() {
        let err = Error::StarNotFound {
            name: "Alhpa".to_string(),
            suggestions: vec!["Alpha".to_string(), "Alphard".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown star name: Alhpa. Did you mean one of: 'Alpha', 'Alphard'?"
        );
    }
}
