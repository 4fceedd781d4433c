//! Interactive matching game over line-based input.

use anyhow::Result;
use chrono::Utc;
use lingo_core::{GameSession, ProgressRecorder, Selection, Side, TileId, WordPair};
use rand::Rng;
use std::io::{BufRead, Write};

/// Play one session, reading one tile number per line from `input`.
///
/// `q` or end of input abandons the session. Returns the recorder holding
/// the result of the game.
pub fn play<R, I, O>(words: &[WordPair], mut input: I, mut output: O, rng: R) -> Result<ProgressRecorder>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut session = GameSession::start_with(words, ProgressRecorder::new(), rng, Utc::now())?;
    writeln!(output, "Match French words with their meanings")?;
    writeln!(output, "Tap a French word, then its English translation (q to quit)")?;

    let mut line = String::new();
    while !session.phase().is_finished() {
        let numbered = render(&session, &mut output)?;

        line.clear();
        let at_end = input.read_line(&mut line)? == 0;
        let choice = line.trim();
        if at_end || choice.eq_ignore_ascii_case("q") {
            session.exit()?;
            writeln!(output)?;
            writeln!(output, "Bye!")?;
            break;
        }

        let Some(tile_id) = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| numbered.get(i))
        else {
            writeln!(output, "Pick a number between 1 and {}", numbered.len())?;
            continue;
        };

        match session.select_tile(tile_id)? {
            Selection::Ignored | Selection::Selected(_) | Selection::Deselected(_) => {}
            Selection::Matched { .. } => writeln!(output, "Match! +10")?,
            Selection::Mismatch { .. } => writeln!(output, "Not a match")?,
            Selection::RoundCompleted { next_round } => {
                writeln!(output, "Set complete! Starting set {}", next_round + 1)?
            }
            Selection::GameCompleted(outcome) => {
                writeln!(
                    output,
                    "Finished! Score {}, {} mistakes, {}s ({:.0}% accuracy)",
                    outcome.score,
                    outcome.mistakes,
                    outcome.time_spent_seconds,
                    outcome.accuracy()
                )?;
            }
        }
    }

    Ok(session.into_listener())
}

/// Print the open tiles of the current round, French column first, and
/// return the tile ids in the order they were numbered.
fn render<L, R, O: Write>(session: &GameSession<L, R>, output: &mut O) -> Result<Vec<TileId>> {
    writeln!(output)?;
    writeln!(
        output,
        "Score {} | Set {}/{} | Matches {}/{} | Mistakes {}",
        session.score(),
        session.current_round_index() + 1,
        session.round_count(),
        session.round_matches(),
        session.current_round().len(),
        session.mistakes()
    )?;

    let mut numbered = Vec::new();
    for (side, title) in [(Side::Source, "French"), (Side::Target, "English")] {
        writeln!(output, "{}:", title)?;
        for tile in session.open_tiles(side) {
            numbered.push(tile.id.clone());
            let marker = if tile.selected { "*" } else { " " };
            writeln!(output, " {}{:>2}. {}", marker, numbered.len(), tile.text)?;
        }
    }
    write!(output, "> ")?;
    output.flush()?;

    Ok(numbered)
}
