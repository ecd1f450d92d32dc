use dotenvy::dotenv;
use env_logger::Builder;
use log::{info, LevelFilter};
use rand::seq::SliceRandom;

use undercover::models::game::GamePhase;
use undercover::services::word_service::WordGenerator;
use undercover::state::AppState;
use undercover::utils::config::CONFIG;

/// Scripted demo game: six players, one undercover, one Mr. White, a random
/// elimination every round until one camp wins.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    Builder::new().filter_level(LevelFilter::Info).init();

    let state = AppState::new();
    let generator = WordGenerator::from_config(&CONFIG);

    let mut game = state.game.lock().await;
    game.initialize_players(6)?;

    let word_pair = generator.generate(game.settings.difficulty).await;
    info!(
        "word pair: {} / {} ({})",
        word_pair.civilian_word, word_pair.undercover_word, word_pair.relationship
    );
    game.assign_roles(word_pair, 1, 1)?;
    game.set_phase(GamePhase::ClueGiving);

    for player in &game.players {
        info!(
            "{} {} -> {} [{}]",
            player.avatar,
            player.name,
            player.role,
            player.word.as_deref().unwrap_or("no word"),
        );
    }

    let mut rng = rand::thread_rng();
    while game.phase != GamePhase::Victory {
        info!("round {}", game.current_round);

        let alive: Vec<String> = game.alive_players().iter().map(|p| p.id.clone()).collect();
        for id in &alive {
            game.set_player_clue_given(id);
            game.next_player();
        }

        game.set_phase(GamePhase::Voting);
        let victim = alive.choose(&mut rng).expect("someone is always alive");
        game.eliminate_player(victim);
        game.set_phase(GamePhase::EliminationReveal);

        if let Some(out) = &game.eliminated_player {
            info!("{} {} was voted out ({})", out.avatar, out.name, out.role);
        }

        game.check_victory_condition();
        if game.phase != GamePhase::Victory {
            game.next_round();
        }
    }

    if let Some(winner) = game.winner {
        info!("{:?} win after {} rounds", winner, game.current_round);
    }
    info!("{}", *game);

    Ok(())
}
