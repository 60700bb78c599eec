//! Deterministic in-memory gateway for tests and dry runs.
//!
//! The desktop is a scripted [`WindowSnapshot`] that the test mutates
//! through a [`ScriptHandle`] while the gateway itself is owned by the
//! engine. Failures can be injected per call and every command is recorded.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use taskstrip_common::{GatewayError, WindowHandle, WindowSnapshot};

use super::{Result, WindowManagerGateway};

/// A command observed by a [`ScriptedGateway`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedCommand {
    Connect,
    Disconnect,
    Activate(WindowHandle),
    Close(WindowHandle),
}

#[derive(Debug, Default)]
struct ScriptState {
    windows: WindowSnapshot,
    refuse_connect: bool,
    failing_lists: usize,
    fail_commands: bool,
    close_removes_window: bool,
    drop_connection_on_list: bool,
    list_calls: usize,
    commands: Vec<ScriptedCommand>,
}

/// Gateway whose desktop is whatever the paired [`ScriptHandle`] says.
#[derive(Debug)]
pub struct ScriptedGateway {
    state: Arc<Mutex<ScriptState>>,
    connected: bool,
}

/// Test-side control over a [`ScriptedGateway`].
#[derive(Debug, Clone)]
pub struct ScriptHandle {
    state: Arc<Mutex<ScriptState>>,
}

fn lock(state: &Mutex<ScriptState>) -> MutexGuard<'_, ScriptState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ScriptedGateway {
    pub fn new() -> (Self, ScriptHandle) {
        let state = Arc::new(Mutex::new(ScriptState::default()));
        let gateway = Self {
            state: Arc::clone(&state),
            connected: false,
        };
        (gateway, ScriptHandle { state })
    }
}

impl ScriptHandle {
    /// Replace the scripted desktop.
    pub fn set_windows(&self, windows: WindowSnapshot) {
        lock(&self.state).windows = windows;
    }

    /// Replace the scripted desktop from `(raw handle, name)` pairs.
    pub fn set_pairs<'a>(&self, pairs: impl IntoIterator<Item = (u64, &'a str)>) {
        self.set_windows(WindowSnapshot::from_pairs(pairs));
    }

    /// Make the next `count` calls to `list_windows` fail as unavailable.
    pub fn fail_next_lists(&self, count: usize) {
        lock(&self.state).failing_lists = count;
    }

    /// Make `connect` fail until cleared.
    pub fn refuse_connect(&self, refuse: bool) {
        lock(&self.state).refuse_connect = refuse;
    }

    /// Make `activate` and `close` fail with a dispatch error until cleared.
    pub fn fail_commands(&self, fail: bool) {
        lock(&self.state).fail_commands = fail;
    }

    /// When set, a successful close also removes the window from the desktop.
    pub fn close_removes_window(&self, removes: bool) {
        lock(&self.state).close_removes_window = removes;
    }

    /// Make the next `list_windows` call fail and drop the connection, as a
    /// dead X server would.
    pub fn drop_connection_on_next_list(&self) {
        lock(&self.state).drop_connection_on_list = true;
    }

    pub fn commands(&self) -> Vec<ScriptedCommand> {
        lock(&self.state).commands.clone()
    }

    pub fn list_calls(&self) -> usize {
        lock(&self.state).list_calls
    }
}

impl WindowManagerGateway for ScriptedGateway {
    fn connect(&mut self) -> Result<()> {
        let mut state = lock(&self.state);
        state.commands.push(ScriptedCommand::Connect);
        if state.refuse_connect {
            return Err(GatewayError::Unavailable("scripted connect refused".into()));
        }
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) {
        if self.connected {
            lock(&self.state).commands.push(ScriptedCommand::Disconnect);
        }
        self.connected = false;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn list_windows(&mut self) -> Result<WindowSnapshot> {
        let mut state = lock(&self.state);
        state.list_calls += 1;

        if !self.connected {
            return Err(GatewayError::Unavailable("not connected".into()));
        }
        if state.drop_connection_on_list {
            state.drop_connection_on_list = false;
            self.connected = false;
            return Err(GatewayError::Unavailable("scripted connection lost".into()));
        }
        if state.failing_lists > 0 {
            state.failing_lists -= 1;
            return Err(GatewayError::Unavailable("scripted list failure".into()));
        }
        Ok(state.windows.clone())
    }

    fn activate(&mut self, handle: WindowHandle) -> Result<()> {
        let mut state = lock(&self.state);
        state.commands.push(ScriptedCommand::Activate(handle));
        if state.fail_commands {
            return Err(GatewayError::dispatch("activate", handle, "scripted failure"));
        }
        Ok(())
    }

    fn close(&mut self, handle: WindowHandle) -> Result<()> {
        let mut state = lock(&self.state);
        state.commands.push(ScriptedCommand::Close(handle));
        if state.fail_commands {
            return Err(GatewayError::dispatch("close", handle, "scripted failure"));
        }
        if state.close_removes_window {
            let remaining = state
                .windows
                .iter()
                .filter(|e| e.handle != handle)
                .cloned()
                .collect();
            state.windows = remaining;
        }
        Ok(())
    }
}
