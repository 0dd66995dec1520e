mod monitor;
mod tmux;

pub use monitor::{MonitorError, PaneMonitor};
pub use tmux::{PaneSource, PaneTarget, TmuxPane};
