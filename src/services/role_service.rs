//! Role assignment engine: deals secret roles and words over a roster.
//!
//! Two independent shuffles, then a host-fairness repair. The first shuffle
//! randomizes who draws which role, the second randomizes seat order so that
//! a player's position in the list reveals nothing about when their role was
//! dealt.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::game::GameError;
use crate::models::player::{Player, Role};
use crate::models::word::WordPair;

/// Returns a new roster with the same identities and `role`/`word` dealt:
/// `undercover_count` undercovers, `mr_white_count` Mr. Whites, civilians
/// for the rest. Fails when the counts leave no civilian.
pub fn assign<R: Rng>(
    players: &[Player],
    word_pair: &WordPair,
    undercover_count: usize,
    mr_white_count: usize,
    rng: &mut R,
) -> Result<Vec<Player>, GameError> {
    if undercover_count + mr_white_count >= players.len() {
        return Err(GameError::InvalidRoleCounts {
            undercover: undercover_count,
            mr_white: mr_white_count,
            roster: players.len(),
        });
    }

    let mut roster: Vec<Player> = players.to_vec();
    roster.shuffle(rng);

    for (i, player) in roster.iter_mut().enumerate() {
        if i < undercover_count {
            player.role = Role::Undercover;
            player.word = Some(word_pair.undercover_word.clone());
        } else if i < undercover_count + mr_white_count {
            player.role = Role::MrWhite;
            player.word = None;
        } else {
            player.role = Role::Civilian;
            player.word = Some(word_pair.civilian_word.clone());
        }
    }

    // Decorrelate seat order from deal order.
    roster.shuffle(rng);

    keep_host_out_of_mr_white(&mut roster);

    debug!(
        "dealt {} undercover, {} mrwhite, {} civilians",
        undercover_count,
        mr_white_count,
        roster.len() - undercover_count - mr_white_count
    );
    Ok(roster)
}

/// The host seat (the first player created at roster setup) never plays
/// Mr. White: bluffing with no word is the hardest job at the table. When
/// the deal lands Mr. White on the host, swap role and word with the first
/// non-Mr.-White player in list order. Exactly one swap, never a re-shuffle.
pub fn keep_host_out_of_mr_white(players: &mut [Player]) {
    let Some(host) = players.iter().position(|p| p.is_host()) else {
        return;
    };
    if players[host].role != Role::MrWhite {
        return;
    }
    if let Some(other) = players.iter().position(|p| p.role != Role::MrWhite) {
        let host_role = players[host].role;
        let host_word = players[host].word.clone();
        players[host].role = players[other].role;
        players[host].word = players[other].word.clone();
        players[other].role = host_role;
        players[other].word = host_word;
        debug!("host swapped out of mrwhite with {}", players[other].id);
    }
}
