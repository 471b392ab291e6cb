//! Input pump - background decoding with a bounded hand-off channel.
//!
//! One thread blocks on the terminal's next-event call and forwards decoded
//! commands through a single-slot channel. The game loop polls the channel
//! without blocking, so at most one command is applied per tick.
//!
//! Overflow policy: **drop-newest**. A command already waiting in the slot
//! wins over anything typed after it within the same tick; the surplus is
//! discarded rather than queued. This keeps a burst of keypresses from
//! playing back over several later ticks.

use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::thread;

use crossterm::event::{self, Event, KeyEventKind};

use crate::map::decode;
use crate::types::InputCommand;

/// Outcome of offering a command to the hand-off slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Offer {
    Delivered,
    Dropped,
    Closed,
}

fn offer(tx: &SyncSender<InputCommand>, cmd: InputCommand) -> Offer {
    match tx.try_send(cmd) {
        Ok(()) => Offer::Delivered,
        Err(TrySendError::Full(_)) => Offer::Dropped,
        Err(TrySendError::Disconnected(_)) => Offer::Closed,
    }
}

/// Consumer end of the input hand-off.
///
/// Dropping the pump disconnects the channel; the background thread exits
/// after at most one more device event. Until then it stays blocked on the
/// device, which is fine for a process that is about to exit anyway.
pub struct InputPump {
    rx: Receiver<InputCommand>,
}

impl InputPump {
    /// Start the background reader thread and return the consumer end.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::sync_channel(1);
        thread::spawn(move || pump_events(tx));
        Self { rx }
    }

    /// Non-blocking read of the latest pending command, if any.
    pub fn poll(&self) -> Option<InputCommand> {
        self.rx.try_recv().ok()
    }

    /// Block until an end-screen acknowledgment: Enter confirms (true),
    /// `q`/`Esc`/`Ctrl-C` declines (false).
    ///
    /// Any command still pending from the final tick is discarded first so a
    /// keypress from the dying game cannot dismiss the end screen.
    pub fn wait_ack(&self) -> bool {
        while self.rx.try_recv().is_ok() {}
        loop {
            match self.rx.recv() {
                Ok(InputCommand::Fire) => return true,
                Ok(InputCommand::Quit) => return false,
                Ok(_) => continue,
                Err(_) => return false,
            }
        }
    }
}

fn pump_events(tx: SyncSender<InputCommand>) {
    loop {
        let Ok(ev) = event::read() else {
            return;
        };
        let Event::Key(key) = ev else {
            // Resize events need no forwarding: the renderer does a full
            // redraw whenever the viewport size changes.
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        let Some(cmd) = decode(key) else {
            continue;
        };
        if offer(&tx, cmd) == Offer::Closed {
            return;
        }
    }
}
