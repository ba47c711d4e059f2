//! Recording collaborators and kit builders for tests and demos.

use std::sync::Arc;

use app::{Kit, KitBuilder};
use hub::{GameContext, Host, PlayableGame, RenderSurface, Timer};
use parking_lot::Mutex;

/// One collaborator call observed by the recording mocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    TimerSetTime(u32),
    TimerStart,
    TimerStop,
    TimerResume,
    RenderOn(String),
    Render,
    StopRender,
    SetSize(u32, u32),
    Reload,
}

/// Shared, ordered log of collaborator calls.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    /// Copies every call recorded so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Returns and forgets every call recorded so far.
    pub fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock())
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.lock().iter().filter(|seen| *seen == call).count()
    }
}

/// Timer that records calls and never expires on its own.
pub struct RecordingTimer {
    log: CallLog,
}

impl RecordingTimer {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl Timer for RecordingTimer {
    fn set_time(&mut self, units: u32) {
        self.log.record(Call::TimerSetTime(units));
    }

    fn start(&mut self) {
        self.log.record(Call::TimerStart);
    }

    fn stop(&mut self) {
        self.log.record(Call::TimerStop);
    }

    fn resume(&mut self) {
        self.log.record(Call::TimerResume);
    }
}

/// Playable game that records calls instead of drawing.
pub struct RecordingGame {
    log: CallLog,
    ctx: GameContext,
}

impl RecordingGame {
    pub fn new(log: CallLog, ctx: GameContext) -> Self {
        Self { log, ctx }
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }
}

impl PlayableGame for RecordingGame {
    fn render_on(&mut self, surface: RenderSurface) {
        self.log.record(Call::RenderOn(surface.id));
    }

    fn render(&mut self) {
        self.log.record(Call::Render);
    }

    fn stop_render(&mut self) {
        self.log.record(Call::StopRender);
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.log.record(Call::SetSize(width, height));
    }
}

/// Host that records reload requests.
pub struct RecordingHost {
    log: CallLog,
}

impl RecordingHost {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl Host for RecordingHost {
    fn reload(&mut self) {
        self.log.record(Call::Reload);
    }
}

/// A built kit plus handles for observing and driving its collaborators.
pub struct Harness {
    pub kit: Kit,
    pub calls: CallLog,
    /// The context the playable game was constructed with.
    pub game: GameContext,
}

/// Creates a kit whose timer, game, and host all record into one log.
pub fn make_kit() -> Harness {
    let log = CallLog::new();
    let timer_log = log.clone();
    build(KitBuilder::new().timer(move |_, _| RecordingTimer::new(timer_log)), log)
}

/// Creates a kit driven by the real countdown; game and host still record.
pub fn make_kit_with_countdown() -> Harness {
    build(KitBuilder::new().countdown(), CallLog::new())
}

fn build(builder: KitBuilder, log: CallLog) -> Harness {
    let slot: Arc<Mutex<Option<GameContext>>> = Arc::new(Mutex::new(None));
    let game_slot = Arc::clone(&slot);
    let game_log = log.clone();

    let kit = builder
        .game(move |ctx| {
            *game_slot.lock() = Some(ctx.clone());
            RecordingGame::new(game_log, ctx)
        })
        .host(RecordingHost::new(log.clone()))
        .build()
        .expect("mock kit build");
    let game = slot.lock().take().expect("game factory ran");

    Harness {
        kit,
        calls: log,
        game,
    }
}
