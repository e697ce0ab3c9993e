//! Clipboard module
//!
//! Provides clipboard history tracking and monitoring functionality.
//!
//! - `history`: fixed-capacity, most-recent-first history values
//! - `poller`: change detection over clipboard samples
//! - `stack`: owner of the history, wiring poller, history and tray together
//! - `monitor`: async task that serializes polling and user selections

pub mod history;
pub mod monitor;
pub mod poller;
pub mod stack;

pub use history::ClipboardHistory;
pub use monitor::{ClipboardMonitor, StackCommand};
pub use poller::ClipboardPoller;
pub use stack::ClipStack;
