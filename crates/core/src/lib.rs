pub mod canvas;
pub mod error;
pub mod history;
pub mod state;
pub mod widget;

pub use canvas::Canvas;
pub use error::{Result, StatError};
pub use history::{History, Metric};
pub use state::{AppState, NetworkReading, Readings};
pub use widget::{Line, StatWidget};
