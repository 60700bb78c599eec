//! User intents flowing from the presentation layer to the engine.

use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::types::WindowHandle;

/// Every user-triggerable request a taskbar entry can make.
///
/// Clicks are translated into an `Intent` by the shell and delivered to the
/// engine through an [`IntentQueue`]; nothing in the presentation layer
/// talks to the gateway directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Raise and focus the window.
    Activate(WindowHandle),
    /// Ask the window to close gracefully.
    Close(WindowHandle),
}

impl Intent {
    pub fn handle(&self) -> WindowHandle {
        match self {
            Intent::Activate(h) | Intent::Close(h) => *h,
        }
    }

    /// Short verb used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Activate(_) => "activate",
            Intent::Close(_) => "close",
        }
    }
}

/// Cloneable producer side of an [`IntentQueue`].
#[derive(Debug, Clone)]
pub struct IntentSender {
    tx: mpsc::Sender<Intent>,
}

impl IntentSender {
    /// Queue an intent. Returns `false` if the queue has been dropped.
    pub fn send(&self, intent: Intent) -> bool {
        self.tx.send(intent).is_ok()
    }
}

/// Single-consumer queue of intents, drained on the event-loop thread.
pub struct IntentQueue {
    tx: mpsc::Sender<Intent>,
    rx: mpsc::Receiver<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> IntentSender {
        IntentSender {
            tx: self.tx.clone(),
        }
    }

    /// Take every intent queued so far, in arrival order, without blocking.
    pub fn drain(&self) -> Vec<Intent> {
        self.rx.try_iter().collect()
    }
}

impl Default for IntentQueue {
    fn default() -> Self {
        Self::new()
    }
}
