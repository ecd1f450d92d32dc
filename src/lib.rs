//! Core rules for an "Undercover / Mr. White" social deduction party game:
//! secret role and word assignment, clue rounds, eliminations and round by
//! round victory evaluation, driven by whatever front end holds the
//! [`state::AppState`].

pub mod data;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
