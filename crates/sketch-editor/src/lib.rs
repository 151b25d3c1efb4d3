pub mod board;
pub mod config;
pub mod input;
pub mod recorder;
pub mod shortcuts;

pub use board::DrawingBoard;
pub use config::BoardConfig;
pub use input::InputEvent;
pub use recorder::StrokeRecorder;
pub use shortcuts::{ShortcutAction, ShortcutMap};
