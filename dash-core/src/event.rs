/// An action applied to the app on the GUI thread, once per frame until
/// it reports `Finished`.
pub trait AppEvent {
    type App;
    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String>;
}

/// Events that wait on something external (e.g. a file dialog running on
/// its own thread) report `Busy` and are retried next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventState {
    Finished,
    Busy,
}
