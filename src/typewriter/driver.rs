//! Live typewriter running on a background thread.
//!
//! The worker owns the [`Sequencer`] and is the only place it is mutated.
//! It sleeps on its control channel with a timeout equal to the time left
//! until the next tick, so there is exactly one pending timer per
//! typewriter and any control message can cut it short.

use std::sync::mpsc::{
    self, Receiver, RecvError, RecvTimeoutError, Sender, SyncSender, TryRecvError, TrySendError,
};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::options::TypewriterOptions;
use super::sequencer::Sequencer;

/// Messages from the handle to the worker.
enum Command {
    SetPhrases(Vec<String>),
    SetOptions(TypewriterOptions),
    Restart,
    Subscribe(SyncSender<()>),
    Stop,
}

/// Handle to a running typewriter.
///
/// Dropping the handle disposes it.
pub struct Typewriter {
    control: Sender<Command>,
    display: Arc<RwLock<String>>,
    worker: Option<JoinHandle<()>>,
}

impl Typewriter {
    /// Start cycling `phrases` immediately.
    pub fn spawn<I, S>(phrases: I, options: TypewriterOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sequencer = Sequencer::new(phrases, options);
        let display = Arc::new(RwLock::new(String::new()));
        let (control, control_rx) = mpsc::channel();

        tracing::info!(
            phrases = sequencer.phrase_count(),
            type_interval_ms = options.type_interval_ms,
            delete_interval_ms = options.delete_interval_ms,
            pause_ms = options.pause_ms,
            "starting typewriter"
        );

        let shared = Arc::clone(&display);
        let worker = thread::spawn(move || worker_loop(sequencer, control_rx, shared));

        Self {
            control,
            display,
            worker: Some(worker),
        }
    }

    /// Text currently on display.
    pub fn current(&self) -> String {
        read_display(&self.display)
    }

    /// Watch the display from now on.
    ///
    /// The current text is delivered first. A slow reader skips
    /// intermediate states and gets the latest text. The subscription
    /// disconnects when the typewriter is disposed.
    pub fn subscribe(&self) -> Subscription {
        let (notify, ready) = mpsc::sync_channel(1);
        let initial = notify.clone();
        // After disposal the sender is dropped with the failed message.
        if self.control.send(Command::Subscribe(notify)).is_ok() {
            let _ = initial.try_send(());
        }
        Subscription {
            ready,
            display: Arc::clone(&self.display),
            last: None,
        }
    }

    /// Replace the phrase list, restarting from its first phrase.
    pub fn set_phrases<I, S>(&self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases = phrases.into_iter().map(Into::into).collect();
        let _ = self.control.send(Command::SetPhrases(phrases));
    }

    /// Replace the timing, keeping the current display state.
    pub fn set_options(&self, options: TypewriterOptions) {
        let _ = self.control.send(Command::SetOptions(options));
    }

    /// Start over from the first phrase with an empty display.
    pub fn restart(&self) {
        let _ = self.control.send(Command::Restart);
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Cancel the pending tick and stop the worker. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        let _ = self.control.send(Command::Stop);
        if worker.join().is_err() {
            tracing::warn!("typewriter worker panicked");
        }
        tracing::debug!("typewriter disposed");
    }
}

impl Drop for Typewriter {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Latest-value view of a typewriter's display.
///
/// Holds at most one pending wake-up, so an idle reader never builds a
/// backlog however fast the typewriter runs. Each received text differs
/// from the one received before it.
pub struct Subscription {
    ready: Receiver<()>,
    display: Arc<RwLock<String>>,
    last: Option<String>,
}

impl Subscription {
    /// Block until the display changes.
    pub fn recv(&mut self) -> Result<String, RecvError> {
        loop {
            self.ready.recv()?;
            if let Some(text) = self.take_changed() {
                return Ok(text);
            }
        }
    }

    /// Like [`recv`](Self::recv), giving up after `timeout`.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<String, RecvTimeoutError> {
        let deadline = Instant::now() + timeout;
        loop {
            self.ready
                .recv_timeout(deadline.saturating_duration_since(Instant::now()))?;
            if let Some(text) = self.take_changed() {
                return Ok(text);
            }
        }
    }

    /// Latest text if it changed since the last call, without blocking.
    pub fn try_recv(&mut self) -> Result<String, TryRecvError> {
        loop {
            self.ready.try_recv()?;
            if let Some(text) = self.take_changed() {
                return Ok(text);
            }
        }
    }

    fn take_changed(&mut self) -> Option<String> {
        let text = read_display(&self.display);
        if self.last.as_deref() == Some(text.as_str()) {
            return None;
        }
        self.last = Some(text.clone());
        Some(text)
    }
}

impl Iterator for Subscription {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.recv().ok()
    }
}

fn read_display(display: &RwLock<String>) -> String {
    match display.read() {
        Ok(text) => text.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Worker state besides the sequencer itself.
struct Publisher {
    display: Arc<RwLock<String>>,
    subscribers: Vec<SyncSender<()>>,
}

impl Publisher {
    /// Store `text` and notify subscribers if it changed.
    fn publish(&mut self, text: &str) {
        {
            let mut current = match self.display.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if *current == text {
                return;
            }
            current.clear();
            current.push_str(text);
        }
        // A full slot already has a wake-up pending; gone receivers are dropped
        self.subscribers.retain(|subscriber| {
            !matches!(subscriber.try_send(()), Err(TrySendError::Disconnected(_)))
        });
    }
}

fn worker_loop(
    mut sequencer: Sequencer,
    control_rx: Receiver<Command>,
    display: Arc<RwLock<String>>,
) {
    let mut publisher = Publisher {
        display,
        subscribers: Vec::new(),
    };
    let mut deadline = schedule(&sequencer);

    loop {
        let message = match deadline {
            Some(at) => control_rx.recv_timeout(at.saturating_duration_since(Instant::now())),
            None => control_rx
                .recv()
                .map_err(|_| RecvTimeoutError::Disconnected),
        };

        match message {
            Err(RecvTimeoutError::Timeout) => {
                if let Some(tick) = sequencer.tick() {
                    tracing::trace!(
                        transition = ?tick.transition,
                        advanced_to = ?tick.advanced_to,
                        text = sequencer.display_text(),
                        "tick"
                    );
                    publisher.publish(sequencer.display_text());
                }
                deadline = schedule(&sequencer);
            }
            Ok(Command::SetPhrases(phrases)) => {
                tracing::debug!(phrases = phrases.len(), "phrase list replaced");
                sequencer.reset(phrases);
                publisher.publish(sequencer.display_text());
                deadline = schedule(&sequencer);
            }
            Ok(Command::SetOptions(options)) => {
                tracing::debug!(?options, "timing replaced");
                sequencer.set_options(options);
                deadline = schedule(&sequencer);
            }
            Ok(Command::Restart) => {
                sequencer.restart();
                publisher.publish(sequencer.display_text());
                deadline = schedule(&sequencer);
            }
            Ok(Command::Subscribe(subscriber)) => {
                publisher.subscribers.push(subscriber);
            }
            Ok(Command::Stop) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::debug!("typewriter worker stopped");
}

fn schedule(sequencer: &Sequencer) -> Option<Instant> {
    sequencer.next_delay().map(|delay| Instant::now() + delay)
}
