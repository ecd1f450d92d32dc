use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of the player created first at roster setup. That seat belongs to the
/// person hosting the table and is exempt from drawing Mr. White.
pub const HOST_PLAYER_ID: &str = "player-0";

const AVATARS: [&str; 10] = ["👤", "👨", "👩", "🧑", "👴", "👵", "🧔", "👱", "🧓", "👨‍🦱"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Civilian,
    Undercover,
    MrWhite,
}

impl Role {
    /// Undercover and Mr. White form one camp for victory evaluation.
    pub fn is_infiltrator(&self) -> bool {
        matches!(self, Role::Undercover | Role::MrWhite)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Civilian => write!(f, "civilian"),
            Role::Undercover => write!(f, "undercover"),
            Role::MrWhite => write!(f, "mrwhite"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub role: Role,
    /// `None` for Mr. White, who has to bluff without a word.
    pub word: Option<String>,
    pub is_alive: bool,
    pub has_given_clue: bool,
    pub avatar: String,
}

impl Player {
    /// Fresh player at seat `index`: defaults to civilian with no word until
    /// roles are assigned, avatar drawn cyclically from the built-in pool.
    pub fn new(index: usize) -> Self {
        Self {
            id: format!("player-{index}"),
            name: format!("Player {}", index + 1),
            role: Role::Civilian,
            word: None,
            is_alive: true,
            has_given_clue: false,
            avatar: AVATARS[index % AVATARS.len()].to_string(),
        }
    }

    pub fn is_host(&self) -> bool {
        self.id == HOST_PLAYER_ID
    }
}
