use std::io::{self, Stdout, stdout};
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    is_raw_mode_enabled,
};
use futures::{Stream, StreamExt};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};
use tokio_util::sync::CancellationToken;

use super::event::Event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Quiet period a resize burst must reach before the viewer reflows.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(75);

/// Owns the terminal and forwards key presses and settled resizes.
pub struct TuiRunner {
    terminal: Tui,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
    task: Option<JoinHandle<()>>,
    cancellation_token: CancellationToken,
}

impl TuiRunner {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            event_rx,
            event_tx,
            task: None,
            cancellation_token: CancellationToken::new(),
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;

        let event_tx = self.event_tx.clone();
        let token = self.cancellation_token.clone();
        self.task = Some(tokio::spawn(async move {
            let _ = event_tx.send(Event::Init);
            pump_events(EventStream::new(), event_tx, token, RESIZE_DEBOUNCE).await;
        }));
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.cancellation_token.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
        restore_terminal()
    }

    pub async fn next_event(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

/// Leaves the alternate screen if the viewer still holds the terminal.
pub fn restore_terminal() -> Result<()> {
    if is_raw_mode_enabled()? {
        execute!(stdout(), LeaveAlternateScreen)?;
        disable_raw_mode()?;
    }
    Ok(())
}

/// Forwards terminal events until cancelled or the stream ends.
///
/// Resizes are held until `debounce` passes without another one, so a
/// window drag costs one reflow. A key press flushes the held size first.
pub async fn pump_events<S>(
    mut events: S,
    tx: UnboundedSender<Event>,
    token: CancellationToken,
    debounce: Duration,
) where
    S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
{
    let mut pending: Option<(u16, u16)> = None;
    let settle = sleep(debounce);
    tokio::pin!(settle);

    loop {
        let event = tokio::select! {
            () = token.cancelled() => break,
            () = &mut settle, if pending.is_some() => match pending.take() {
                Some((width, height)) => Event::Resize(width, height),
                None => continue,
            },
            next = events.next() => match next {
                Some(Ok(CrosstermEvent::Resize(width, height))) => {
                    pending = Some((width, height));
                    settle.as_mut().reset(Instant::now() + debounce);
                    continue;
                }
                Some(Ok(CrosstermEvent::Key(key)))
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    let flushed = pending.take().is_none_or(|(width, height)| {
                        tx.send(Event::Resize(width, height)).is_ok()
                    });
                    if !flushed {
                        break;
                    }
                    Event::Key(key)
                }
                Some(Ok(_)) => continue,
                Some(Err(_)) | None => {
                    if let Some((width, height)) = pending.take() {
                        let _ = tx.send(Event::Resize(width, height));
                    }
                    break;
                }
            },
        };

        if tx.send(event).is_err() {
            break;
        }
    }
}
