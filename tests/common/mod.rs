//! Shared fixtures for integration tests

#![allow(dead_code)]

use sortable::prelude::*;

/// A player row: `name` and `joined` are persisted, `score` is computed
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub joined: i64,
    pub wins: i64,
    pub games: i64,
    pub team: Option<String>,
}

impl Player {
    pub fn new(name: &str, joined: i64, wins: i64, games: i64) -> Self {
        Self {
            name: name.to_string(),
            joined,
            wins,
            games,
            team: None,
        }
    }

    /// Win ratio, not stored
    pub fn score(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

impl Sortable for Player {
    fn attribute(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "joined" => Some(self.joined.into()),
            "score" => Some(self.score().into()),
            "team__name" => Some(self.team.clone().into()),
            _ => None,
        }
    }
}

impl Model for Player {
    fn declared_fields() -> &'static [&'static str] {
        &["name", "joined", "wins", "games", "team"]
    }
}

pub fn players() -> Vec<Player> {
    vec![
        Player::new("carol", 3, 1, 4),
        Player::new("alice", 1, 3, 4),
        Player::new("bob", 2, 2, 4),
        Player::new("dave", 4, 3, 4),
    ]
}

pub fn names(players: &[Player]) -> Vec<&str> {
    players.iter().map(|p| p.name.as_str()).collect()
}
