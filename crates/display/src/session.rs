use crate::{frame::Screen, panel::Panel};
use oledstat_config::OledConfig;
use oledstat_core::{AppState, Line, Result, StatError, StatWidget};
use oledstat_renderer::{FrameRenderer, LayoutOffset};
use oledstat_system::{MetricsSource, Sampler};
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::trace;

/// Time source and pause between cycles.
pub trait Ticker {
    fn now(&self) -> Instant;

    fn sleep(&mut self, duration: Duration) -> impl Future<Output = ()>;
}

/// Wall clock with a non-blocking tokio sleep.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioTicker;

impl Ticker for TokioTicker {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

/// Everything one display loop owns: sampler, histories, layout offset and screen.
pub struct Session<S, P, T> {
    sampler:  Sampler<S>,
    state:    AppState,
    widgets:  Vec<Box<dyn StatWidget>>,
    renderer: FrameRenderer,
    offset:   LayoutOffset,
    screen:   Screen<P>,
    ticker:   T,
    rng:      fastrand::Rng,
    interval: Duration,
    height:   u32,
    cycles:   u64,
}

impl<S: MetricsSource, P: Panel, T: Ticker> Session<S, P, T> {
    /// Build the loop state.  Fails when the layout has fewer row slots than
    /// there are widgets, since no frame could ever be drawn.
    pub fn new(config: &OledConfig, source: S, panel: P, ticker: T) -> Result<Self> {
        let display = &config.display;
        let layout = config.layout.clone();
        let widgets = oledstat_widgets::default_widgets();

        if layout.line_anchors.len() < widgets.len() {
            return Err(StatError::Config(format!(
                "layout.line_anchors has {} slots but {} rows are drawn",
                layout.line_anchors.len(),
                widgets.len()
            )));
        }

        Ok(Self {
            sampler: Sampler::new(source, &config.monitor),
            state: AppState::new(layout.bar_width as usize),
            widgets,
            offset: LayoutOffset::initial(layout.strategy),
            renderer: FrameRenderer::new(layout),
            screen: Screen::new(panel, display.width, display.height),
            ticker,
            rng: fastrand::Rng::new(),
            interval: Duration::from_millis(config.monitor.interval_ms),
            height: display.height,
            cycles: 0,
        })
    }

    /// Seed the jitter generator, for reproducible frames.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    /// Sample, draw and present one frame, then move the layout on.
    pub fn cycle(&mut self) -> Result<()> {
        let readings = self.sampler.sample(self.ticker.now())?;
        self.state.apply(readings);

        let lines: Vec<Line> = self.widgets.iter().map(|w| w.view(&self.state)).collect();

        let mut frame = self.screen.begin_frame();
        self.renderer.render(&mut *frame, &lines, &self.offset)?;
        frame.present()?;

        self.offset
            .advance(self.renderer.layout(), self.height, &mut self.rng);
        self.cycles += 1;
        trace!(cycle = self.cycles, offset = ?self.offset, "cycle complete");
        Ok(())
    }

    /// Cycle and sleep until `limit` frames were drawn, or forever on `None`.
    pub async fn run(&mut self, limit: Option<u64>) -> Result<()> {
        loop {
            self.cycle()?;
            if limit.is_some_and(|max| self.cycles >= max) {
                return Ok(());
            }
            self.ticker.sleep(self.interval).await;
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn offset(&self) -> LayoutOffset {
        self.offset
    }

    pub fn screen(&self) -> &Screen<P> {
        &self.screen
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}
