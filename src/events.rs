/// Notifications the session raises for the audio collaborator.
///
/// Fire-and-forget: nothing in the simulation depends on whether they are
/// consumed.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameEvent {
    EnemyDestroyed,
    EnemyFired,
    /// Raised at most once per GameOver.
    PlayerDestroyed,
    /// Raised on the first start and on every restart.
    SessionStarted,
}
