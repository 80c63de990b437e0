use crate::state::AppState;

/// Content of one display line, before layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    /// Text at the left margin.
    pub label: String,
    /// Right-hand figure, drawn at the figure margin.
    pub figure: Option<String>,
    /// Percent samples for the histogram bar, oldest first.
    pub history: Option<Vec<f32>>,
}

impl Line {
    /// A line that is only left-aligned text.
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_figure(mut self, figure: impl Into<String>) -> Self {
        self.figure = Some(figure.into());
        self
    }

    pub fn with_history(mut self, history: Vec<f32>) -> Self {
        self.history = Some(history);
        self
    }
}

/// One logical row of the display.
///
/// Widgets are pure views: they read the current [`AppState`] and describe
/// what their row shows.  Placement on the panel is the renderer's job.
pub trait StatWidget: std::fmt::Debug {
    /// Unique string identifier, e.g. `"cpu"` or `"network"`.
    fn id(&self) -> &str;

    fn view(&self, state: &AppState) -> Line;
}
