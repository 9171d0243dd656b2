/// Sound cues for the terminal front end.
///
/// One logical channel per event kind: a cue arriving while the previous cue
/// of the same kind is still "playing" restarts it rather than layering.
/// The only sound a terminal can make is the bell, so the big moments ring it
/// and every cue is logged. Failures are logged and dropped.

use std::collections::HashMap;
use std::io::Write;
use std::time::{Duration, Instant};

use crossterm::{style::Print, QueueableCommand};
use space_invaders::events::GameEvent;

/// Nominal length of a cue, used to tell a restart from a fresh play.
const CUE_LENGTH: Duration = Duration::from_millis(300);

pub struct TerminalAudio {
    started: HashMap<GameEvent, Instant>,
}

impl TerminalAudio {
    pub fn new() -> Self {
        TerminalAudio {
            started: HashMap::new(),
        }
    }

    pub fn play<W: Write>(&mut self, out: &mut W, event: GameEvent) {
        let now = Instant::now();
        let restarted = self
            .started
            .insert(event, now)
            .is_some_and(|prev| now.duration_since(prev) < CUE_LENGTH);
        log::debug!("audio cue {:?}{}", event, if restarted { " (restarted)" } else { "" });

        if rings_bell(event) {
            if let Err(e) = out.queue(Print('\x07')) {
                log::warn!("audio cue {:?} dropped: {}", event, e);
            }
        }
    }
}

fn rings_bell(event: GameEvent) -> bool {
    matches!(event, GameEvent::PlayerDestroyed | GameEvent::SessionStarted)
}
