use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::Player;
use super::word::{Difficulty, WordPair};
use crate::services::role_service;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("a game needs at least one player, got {0}")]
    InvalidPlayerCount(usize),
    #[error(
        "{undercover} undercover and {mr_white} mr. white leave no civilian in a roster of {roster}"
    )]
    InvalidRoleCounts {
        undercover: usize,
        mr_white: usize,
        roster: usize,
    },
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GamePhase {
    /// Title screen, before a roster exists.
    Home,
    /// Roster built, names and role counts being configured.
    Setup,
    /// Alive players take turns stating one clue each.
    ClueGiving,
    Voting,
    /// The voted-out player's role is shown before the next round.
    EliminationReveal,
    /// Terminal until `reset_game`.
    Victory,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Civilians,
    Infiltrators,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub sound_enabled: bool,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            sound_enabled: true,
            theme: Theme::Dark,
        }
    }
}

/// Partial settings patch; `None` fields are left as they are.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub difficulty: Option<Difficulty>,
    pub sound_enabled: Option<bool>,
    pub theme: Option<Theme>,
}

/// Canonical state of one game session. Plain mutable data; the holder is
/// responsible for serializing access (see [`crate::state::AppState`]).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub players: Vec<Player>,
    /// Index into the alive subset of `players`, not into `players` itself.
    pub current_player_index: usize,
    pub current_round: u32,
    pub word_pair: Option<WordPair>,
    /// Snapshot of the last eliminated player, for the reveal screen.
    pub eliminated_player: Option<Player>,
    pub winner: Option<Winner>,
    pub settings: Settings,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Home,
            players: Vec::new(),
            current_player_index: 0,
            current_round: 1,
            word_pair: None,
            eliminated_player: None,
            winner: None,
            settings: Settings::default(),
        }
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        debug!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// Builds a fresh roster of `count` players with sequential ids and
    /// default names, and rewinds the round counter and turn pointer.
    pub fn initialize_players(&mut self, count: usize) -> Result<(), GameError> {
        if count == 0 {
            return Err(GameError::InvalidPlayerCount(count));
        }
        self.players = (0..count).map(Player::new).collect();
        self.current_player_index = 0;
        self.current_round = 1;
        Ok(())
    }

    /// Runs the role assignment engine over the current roster and stores
    /// `word_pair` as the session's active pair. On invalid counts the
    /// roster and pair are left untouched.
    pub fn assign_roles(
        &mut self,
        word_pair: WordPair,
        undercover_count: usize,
        mr_white_count: usize,
    ) -> Result<(), GameError> {
        let assigned = role_service::assign(
            &self.players,
            &word_pair,
            undercover_count,
            mr_white_count,
            &mut rand::thread_rng(),
        )?;
        self.players = assigned;
        self.word_pair = Some(word_pair);
        Ok(())
    }

    pub fn alive_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_alive).collect()
    }

    /// Alive player whose turn it is, `None` while the roster is empty.
    pub fn current_player(&self) -> Option<&Player> {
        self.alive_players().get(self.current_player_index).copied()
    }

    /// Advances the turn pointer through the alive players, wrapping past
    /// the last one. No-op when nobody is alive.
    pub fn next_player(&mut self) {
        let alive_count = self.players.iter().filter(|p| p.is_alive).count();
        if alive_count == 0 {
            return;
        }
        self.current_player_index = (self.current_player_index + 1) % alive_count;
    }

    /// Idempotent; an unknown id is ignored.
    pub fn set_player_clue_given(&mut self, player_id: &str) {
        if let Some(player) = self.players.iter_mut().find(|p| p.id == player_id) {
            player.has_given_clue = true;
        }
    }

    /// Marks the player dead and keeps a pre-elimination snapshot around for
    /// the reveal screen. Unknown ids are ignored; eliminating an already
    /// dead player only refreshes the snapshot.
    pub fn eliminate_player(&mut self, player_id: &str) {
        if let Some(player) = self.players.iter_mut().find(|p| p.id == player_id) {
            let snapshot = player.clone();
            player.is_alive = false;
            info!("{} eliminated ({})", snapshot.name, snapshot.role);
            self.eliminated_player = Some(snapshot);
        }
    }

    /// Evaluates the victory rule over the current roster and, when one camp
    /// has won, records the winner and moves to the victory phase. Otherwise
    /// leaves the state alone.
    ///
    /// When every civilian is dead while infiltrators remain, neither rule
    /// fires and no winner is ever declared. Known gap in the rules as
    /// played; the front end never reaches that state because it checks
    /// after every single elimination.
    pub fn check_victory_condition(&mut self) {
        let alive_infiltrators = self
            .players
            .iter()
            .filter(|p| p.is_alive && p.role.is_infiltrator())
            .count();
        let alive_civilians = self
            .players
            .iter()
            .filter(|p| p.is_alive && !p.role.is_infiltrator())
            .count();

        if alive_infiltrators == 0 && alive_civilians > 0 {
            info!("civilians win, every infiltrator is out");
            self.winner = Some(Winner::Civilians);
            self.phase = GamePhase::Victory;
        } else if alive_civilians == 1 && alive_infiltrators > 0 {
            info!("infiltrators win, a single civilian remains");
            self.winner = Some(Winner::Infiltrators);
            self.phase = GamePhase::Victory;
        } else {
            debug!(
                "game continues, {alive_civilians} civilians vs {alive_infiltrators} infiltrators"
            );
        }
    }

    /// Starts the next clue round: bumps the round counter, clears every
    /// clue flag and rewinds the turn pointer.
    pub fn next_round(&mut self) {
        self.current_round += 1;
        self.current_player_index = 0;
        for player in &mut self.players {
            player.has_given_clue = false;
        }
        self.phase = GamePhase::ClueGiving;
    }

    /// Back to the title screen. Settings survive the reset.
    pub fn reset_game(&mut self) {
        self.phase = GamePhase::Home;
        self.players.clear();
        self.current_player_index = 0;
        self.current_round = 1;
        self.word_pair = None;
        self.eliminated_player = None;
        self.winner = None;
    }

    pub fn update_settings(&mut self, update: SettingsUpdate) {
        if let Some(difficulty) = update.difficulty {
            self.settings.difficulty = difficulty;
        }
        if let Some(sound_enabled) = update.sound_enabled {
            self.settings.sound_enabled = sound_enabled;
        }
        if let Some(theme) = update.theme {
            self.settings.theme = theme;
        }
    }

    /// Overwrites the active pair without touching roles; used by the manual
    /// re-roll flow before roles are dealt.
    pub fn set_word_pair(&mut self, word_pair: WordPair) {
        self.word_pair = Some(word_pair);
    }

    /// Positionally renames players. A missing or empty entry leaves that
    /// player's name as it is.
    pub fn update_player_names(&mut self, names: &[String]) {
        for (player, name) in self.players.iter_mut().zip(names) {
            if !name.is_empty() {
                player.name = name.clone();
            }
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GameState {{ phase: {:?}, round: {}, players: {} ({} alive), winner: {:?} }}",
            self.phase,
            self.current_round,
            self.players.len(),
            self.players.iter().filter(|p| p.is_alive).count(),
            self.winner,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::Role;

    fn pair() -> WordPair {
        WordPair::new("Tea", "Coffee", "Both are hot beverages")
    }

    #[test]
    fn new_game_starts_on_the_title_screen() {
        let game = GameState::new();
        assert_eq!(game.phase, GamePhase::Home);
        assert!(game.players.is_empty());
        assert_eq!(game.current_round, 1);
        assert_eq!(game.current_player_index, 0);
        assert_eq!(game.word_pair, None);
        assert_eq!(game.winner, None);
    }

    #[test]
    fn initialize_players_builds_sequential_roster() {
        let mut game = GameState::new();
        game.initialize_players(4).unwrap();
        let ids: Vec<&str> = game.players.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["player-0", "player-1", "player-2", "player-3"]);
        assert_eq!(game.players[3].name, "Player 4");
    }

    #[test]
    fn initialize_players_rejects_an_empty_roster() {
        let mut game = GameState::new();
        assert_eq!(
            game.initialize_players(0),
            Err(GameError::InvalidPlayerCount(0))
        );
    }

    #[test]
    fn initialize_players_rewinds_round_and_turn() {
        let mut game = GameState::new();
        game.initialize_players(3).unwrap();
        game.next_player();
        game.next_round();
        game.initialize_players(5).unwrap();
        assert_eq!(game.current_round, 1);
        assert_eq!(game.current_player_index, 0);
    }

    #[test]
    fn assign_roles_with_too_many_infiltrators_changes_nothing() {
        let mut game = GameState::new();
        game.initialize_players(4).unwrap();
        let result = game.assign_roles(pair(), 2, 2);
        assert!(matches!(result, Err(GameError::InvalidRoleCounts { .. })));
        assert_eq!(game.word_pair, None);
        assert!(game.players.iter().all(|p| p.role == Role::Civilian));
        assert!(game.players.iter().all(|p| p.word.is_none()));
    }

    #[test]
    fn next_player_cycles_through_alive_players_only() {
        let mut game = GameState::new();
        game.initialize_players(4).unwrap();
        game.eliminate_player("player-2");

        // 3 alive players, so the pointer must wrap inside [0, 3)
        for expected in [1, 2, 0, 1, 2, 0] {
            game.next_player();
            assert_eq!(game.current_player_index, expected);
        }
    }

    #[test]
    fn next_player_is_a_noop_on_an_empty_roster() {
        let mut game = GameState::new();
        game.next_player();
        assert_eq!(game.current_player_index, 0);
    }

    #[test]
    fn current_player_skips_the_dead() {
        let mut game = GameState::new();
        game.initialize_players(3).unwrap();
        game.eliminate_player("player-0");
        assert_eq!(game.current_player().unwrap().id, "player-1");
        game.next_player();
        assert_eq!(game.current_player().unwrap().id, "player-2");
    }

    #[test]
    fn clue_flag_is_idempotent_and_ignores_unknown_ids() {
        let mut game = GameState::new();
        game.initialize_players(2).unwrap();
        game.set_player_clue_given("player-1");
        game.set_player_clue_given("player-1");
        game.set_player_clue_given("player-99");
        assert!(!game.players[0].has_given_clue);
        assert!(game.players[1].has_given_clue);
    }

    #[test]
    fn elimination_records_a_pre_elimination_snapshot() {
        let mut game = GameState::new();
        game.initialize_players(3).unwrap();
        game.eliminate_player("player-1");

        let snapshot = game.eliminated_player.as_ref().unwrap();
        assert_eq!(snapshot.id, "player-1");
        assert!(snapshot.is_alive);
        assert!(!game.players[1].is_alive);
    }

    #[test]
    fn eliminating_twice_leaves_exactly_one_player_dead() {
        let mut game = GameState::new();
        game.initialize_players(3).unwrap();
        game.eliminate_player("player-1");
        game.eliminate_player("player-1");
        assert_eq!(game.players.iter().filter(|p| !p.is_alive).count(), 1);
        assert_eq!(game.eliminated_player.as_ref().unwrap().id, "player-1");
    }

    #[test]
    fn eliminating_an_unknown_id_is_a_noop() {
        let mut game = GameState::new();
        game.initialize_players(3).unwrap();
        game.eliminate_player("player-42");
        assert!(game.players.iter().all(|p| p.is_alive));
        assert!(game.eliminated_player.is_none());
    }

    #[test]
    fn next_round_clears_clue_flags_and_returns_to_clues() {
        let mut game = GameState::new();
        game.initialize_players(3).unwrap();
        game.set_phase(GamePhase::EliminationReveal);
        for id in ["player-0", "player-1", "player-2"] {
            game.set_player_clue_given(id);
        }
        game.next_player();

        game.next_round();
        assert_eq!(game.current_round, 2);
        assert_eq!(game.current_player_index, 0);
        assert_eq!(game.phase, GamePhase::ClueGiving);
        assert!(game.players.iter().all(|p| !p.has_given_clue));
    }

    #[test]
    fn update_settings_merges_only_given_fields() {
        let mut game = GameState::new();
        game.update_settings(SettingsUpdate {
            difficulty: Some(Difficulty::Hard),
            ..Default::default()
        });
        assert_eq!(game.settings.difficulty, Difficulty::Hard);
        assert!(game.settings.sound_enabled);
        assert_eq!(game.settings.theme, Theme::Dark);

        game.update_settings(SettingsUpdate {
            sound_enabled: Some(false),
            theme: Some(Theme::Light),
            ..Default::default()
        });
        assert_eq!(game.settings.difficulty, Difficulty::Hard);
        assert!(!game.settings.sound_enabled);
        assert_eq!(game.settings.theme, Theme::Light);
    }

    #[test]
    fn update_player_names_is_positional_and_skips_empty_entries() {
        let mut game = GameState::new();
        game.initialize_players(3).unwrap();
        game.update_player_names(&["Alice".to_string()]);
        assert_eq!(game.players[0].name, "Alice");
        assert_eq!(game.players[1].name, "Player 2");
        assert_eq!(game.players[2].name, "Player 3");

        game.update_player_names(&[String::new(), "Bob".to_string()]);
        assert_eq!(game.players[0].name, "Alice");
        assert_eq!(game.players[1].name, "Bob");
    }

    #[test]
    fn set_word_pair_overwrites_the_active_pair() {
        let mut game = GameState::new();
        game.set_word_pair(pair());
        game.set_word_pair(WordPair::new("Sun", "Moon", "Both are celestial bodies"));
        assert_eq!(game.word_pair.unwrap().civilian_word, "Sun");
    }

    #[test]
    fn phases_serialize_to_kebab_case() {
        assert_eq!(
            serde_json::to_string(&GamePhase::ClueGiving).unwrap(),
            "\"clue-giving\""
        );
        assert_eq!(
            serde_json::to_string(&GamePhase::EliminationReveal).unwrap(),
            "\"elimination-reveal\""
        );
    }
}
