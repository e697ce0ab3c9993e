use super::stack::ClipStack;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

/// Requests from UI callbacks to the monitor task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackCommand {
    /// Paste back history slot N (menu click or shortcut press)
    Select(usize),
}

/// Handle to the running clipboard monitor.
///
/// Menu and shortcut callbacks run on the event-loop thread; they only
/// enqueue commands here and never touch the history themselves.
#[derive(Clone)]
pub struct ClipboardMonitor {
    commands: UnboundedSender<StackCommand>,
}

impl ClipboardMonitor {
    /// Create the handle and the receiving end the monitor task will own
    pub fn channel() -> (Self, UnboundedReceiver<StackCommand>) {
        let (commands, rx) = mpsc::unbounded_channel();
        (Self { commands }, rx)
    }

    /// Ask the monitor to paste back `slot`
    pub fn select(&self, slot: usize) {
        if self.commands.send(StackCommand::Select(slot)).is_err() {
            log::warn!("[Monitor] Not running, dropped selection of slot {}", slot);
        }
    }
}

/// Run the clipboard monitor until every `ClipboardMonitor` handle is dropped.
///
/// Primes the poller, shows the initial (empty) menu, then interleaves clipboard
/// polling with queued commands. All history mutation happens on this task.
/// Returns the stack when the command channel closes.
pub async fn run(
    mut stack: ClipStack,
    mut commands: UnboundedReceiver<StackCommand>,
    period: Duration,
) -> ClipStack {
    stack.prime();
    stack.sync();
    log::info!("[Monitor] Started monitoring, polling every {}ms", period.as_millis());

    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(StackCommand::Select(slot)) => stack.select(slot),
                None => break,
            },
            _ = ticker.tick() => stack.tick(),
        }
    }

    log::info!("[Monitor] Stopped");
    stack
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clipboard::stack::fakes::FakeClipboard;
    use crate::core::tray::fakes::{FakeShortcuts, RecordingMenu};
    use crate::core::tray::MenuEntry;
    use crate::shared::StackSettings;
    use std::sync::Arc;

    fn stack(clipboard: Arc<FakeClipboard>, menu: Arc<RecordingMenu>) -> ClipStack {
        ClipStack::new(
            StackSettings::default(),
            clipboard,
            Arc::new(FakeShortcuts::default()),
            menu,
        )
    }

    #[tokio::test]
    async fn test_initial_sync_shows_placeholder() {
        let menu = Arc::new(RecordingMenu::default());
        let (monitor, rx) = ClipboardMonitor::channel();
        drop(monitor);

        let stack = run(
            stack(Arc::new(FakeClipboard::default()), menu.clone()),
            rx,
            Duration::from_secs(3600),
        )
        .await;

        assert!(stack.history().is_empty());
        assert_eq!(
            menu.last()[0],
            MenuEntry::Placeholder { label: "<Empty>".to_string() }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_and_applies_queued_selections() {
        let clipboard = Arc::new(FakeClipboard::default());
        let menu = Arc::new(RecordingMenu::default());
        let (monitor, rx) = ClipboardMonitor::channel();

        let task = tokio::spawn(run(
            stack(clipboard.clone(), menu.clone()),
            rx,
            Duration::from_millis(1000),
        ));

        // Let the task prime on the empty clipboard first
        tokio::time::sleep(Duration::from_millis(1)).await;
        clipboard.copy("alpha");
        // First poll at 1000ms
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(menu.last().len(), 3);
        clipboard.copy("beta");
        // Second poll at 2000ms
        tokio::time::sleep(Duration::from_millis(1000)).await;

        monitor.select(1);
        drop(monitor);
        let stack = task.await.unwrap();

        assert_eq!(clipboard.current(), "alpha");
        assert_eq!(stack.history().entries(), ["beta"]);
    }
}
