//! Line-oriented input parsing and text rendering for the terminal front end.

use std::str::FromStr;

use tracing::instrument;

use crate::engine::{Choice, Snapshot};
use crate::spectator::{Spectator, SpectatorRound};

/// A command typed during a single-spectator session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayInput {
    /// Apply a choice.
    Choose(Choice),
    /// Back to step 0.
    Reset,
    /// Write the session to disk.
    Export,
    /// Toggle perform mode.
    Perform,
    /// Select a word list by id.
    List(String),
    /// Select a catalog sequence by id.
    Sequence(String),
    /// Type a custom sequence.
    Custom(String),
    /// Show help.
    Help,
    /// Leave.
    Quit,
}

/// Help text for [`PlayInput`].
pub const PLAY_HELP: &str = "\
l / r            choose Left or Right
reset            start over with the same list
list <id>        select a word list
seq <id>         select a letter sequence
custom <letters> use your own letters (3-50)
perform          toggle perform mode
export           write the session to a JSON file
help             show this list
quit             leave";

impl FromStr for PlayInput {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        if let Ok(choice) = Choice::from_str(command) {
            return Ok(PlayInput::Choose(choice));
        }

        let needs_arg = |make: fn(String) -> PlayInput| {
            if arg.is_empty() {
                Err(format!("'{}' needs an argument", command))
            } else {
                Ok(make(arg.to_string()))
            }
        };

        match command.to_ascii_lowercase().as_str() {
            "reset" => Ok(PlayInput::Reset),
            "export" => Ok(PlayInput::Export),
            "perform" => Ok(PlayInput::Perform),
            "list" => needs_arg(PlayInput::List),
            "seq" | "sequence" => needs_arg(PlayInput::Sequence),
            "custom" => needs_arg(PlayInput::Custom),
            "help" | "?" => Ok(PlayInput::Help),
            "quit" | "exit" | "q" => Ok(PlayInput::Quit),
            "" => Err("Empty input".to_string()),
            other => Err(format!("Unknown command '{}'", other)),
        }
    }
}

/// A command typed during a two-spectator round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectatorInput {
    /// A spectator's choice, typed as `1l`, `2r`, ...
    Choose(Spectator, Choice),
    /// Clear both spectators and the session.
    Reset,
    /// Show help.
    Help,
    /// Leave.
    Quit,
}

/// Help text for [`SpectatorInput`].
pub const SPECTATOR_HELP: &str = "\
1l / 1r    spectator 1 chooses Left or Right
2l / 2r    spectator 2 chooses Left or Right
reset      start over
quit       leave";

impl FromStr for SpectatorInput {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim().to_ascii_lowercase();
        match line.as_str() {
            "reset" => return Ok(SpectatorInput::Reset),
            "help" | "?" => return Ok(SpectatorInput::Help),
            "quit" | "exit" | "q" => return Ok(SpectatorInput::Quit),
            _ => {}
        }

        let mut chars = line.chars();
        let spectator = match chars.next() {
            Some('1') => Spectator::First,
            Some('2') => Spectator::Second,
            _ => return Err(format!("Unknown command '{}'", line)),
        };
        let rest: String = chars.collect();
        let choice = Choice::from_str(rest.trim())
            .map_err(|_| format!("'{}' is not a choice (use l or r)", rest.trim()))?;
        Ok(SpectatorInput::Choose(spectator, choice))
    }
}

/// Renders a snapshot for the presenter.
///
/// Perform mode drops the headings so the pools can sit on screen
/// without drawing attention.
#[instrument(skip(snapshot))]
pub fn render_snapshot(snapshot: &Snapshot, perform_mode: bool) -> String {
    let left = snapshot.left_pool().join(", ");
    let right = snapshot.right_pool().join(", ");

    if perform_mode {
        return format!("{}  ·  {}  ·  {}", snapshot.current_letter(), left, right);
    }

    let mut out = format!(
        "Letter: {}   Step {}   Choices: {}\n",
        snapshot.current_letter(),
        snapshot.step_index(),
        Choice::format_sequence(snapshot.choice_history())
    );
    out.push_str(&format!(
        "Left Pattern ({}): {}\n",
        snapshot.left_pool().len(),
        left
    ));
    out.push_str(&format!(
        "Right Pattern ({}): {}",
        snapshot.right_pool().len(),
        right
    ));
    if *snapshot.is_complete() {
        out.push_str("\nComplete.");
    }
    out
}

/// Renders both spectators' histories.
#[instrument(skip(round))]
pub fn render_round(round: &SpectatorRound) -> String {
    [Spectator::First, Spectator::Second]
        .iter()
        .map(|s| {
            let history = round.history(*s);
            format!(
                "{} ({} choices): {}",
                s,
                history.len(),
                Choice::format_sequence(history)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{FilterSession, LetterSequence, WordList};

    #[test]
    fn test_parse_play_choices() {
        assert_eq!("l".parse::<PlayInput>(), Ok(PlayInput::Choose(Choice::Left)));
        assert_eq!(" R ".parse::<PlayInput>(), Ok(PlayInput::Choose(Choice::Right)));
        assert_eq!("right".parse::<PlayInput>(), Ok(PlayInput::Choose(Choice::Right)));
    }

    #[test]
    fn test_parse_play_commands_with_args() {
        assert_eq!(
            "list months-starsigns".parse::<PlayInput>(),
            Ok(PlayInput::List("months-starsigns".to_string()))
        );
        assert_eq!(
            "custom  abc ".parse::<PlayInput>(),
            Ok(PlayInput::Custom("abc".to_string()))
        );
        assert!("seq".parse::<PlayInput>().is_err());
    }

    #[test]
    fn test_parse_play_rejects_unknown() {
        assert!("dance".parse::<PlayInput>().is_err());
        assert!("".parse::<PlayInput>().is_err());
    }

    #[test]
    fn test_parse_spectator_input() {
        assert_eq!(
            "1l".parse::<SpectatorInput>(),
            Ok(SpectatorInput::Choose(Spectator::First, Choice::Left))
        );
        assert_eq!(
            "2 R".parse::<SpectatorInput>(),
            Ok(SpectatorInput::Choose(Spectator::Second, Choice::Right))
        );
        assert_eq!("reset".parse::<SpectatorInput>(), Ok(SpectatorInput::Reset));
        assert!("3l".parse::<SpectatorInput>().is_err());
        assert!("1x".parse::<SpectatorInput>().is_err());
    }

    #[test]
    fn test_render_snapshot_shows_pools() {
        let mut session = FilterSession::with_word_list(
            WordList::new("t", "Test", ["Necessary", "Toothbrush"]),
            LetterSequence::new("N").unwrap(),
        );
        let snap = session.apply_choice(Choice::Left).unwrap();
        let text = render_snapshot(&snap, false);
        assert!(text.contains("Left Pattern (1): Necessary"));
        assert!(text.contains("Right Pattern (1): Toothbrush"));
        assert!(text.contains("Letter: ✓"));
        assert!(text.contains("Complete."));
    }

    #[test]
    fn test_render_round() {
        let round = SpectatorRound::new();
        assert_eq!(
            render_round(&round),
            "Spectator 1 (0 choices): \nSpectator 2 (0 choices): "
        );
    }
}
