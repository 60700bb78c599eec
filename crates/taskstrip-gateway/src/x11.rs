//! EWMH gateway over X11.
//!
//! Reads `_NET_CLIENT_LIST_STACKING` from the root window and sends
//! `_NET_ACTIVE_WINDOW` / `_NET_CLOSE_WINDOW` client messages, the way a
//! pager is expected to. Uses x11rb's pure-Rust connection.

use taskstrip_common::{GatewayError, WindowHandle, WindowSnapshot};
use taskstrip_config::GatewayConfig;
use tracing::{debug, info, warn};
use x11rb::connection::Connection;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError};
use x11rb::protocol::xproto::{Atom, AtomEnum, ClientMessageEvent, ConnectionExt, EventMask, Window};
use x11rb::rust_connection::RustConnection;

use super::{Result, WindowManagerGateway};

x11rb::atom_manager! {
    pub Atoms: AtomsCookie {
        _NET_CLIENT_LIST_STACKING,
        _NET_CLIENT_LIST,
        _NET_ACTIVE_WINDOW,
        _NET_CLOSE_WINDOW,
        _NET_WM_DESKTOP,
        _NET_WM_NAME,
        UTF8_STRING,
    }
}

/// `_NET_WM_DESKTOP` value meaning "visible on every desktop".
const ALL_DESKTOPS: u32 = 0xFFFF_FFFF;

/// EWMH source indication for pagers and taskbars.
const SOURCE_PAGER: u32 = 2;

/// Longest window name fetched, in 32-bit units.
const NAME_LENGTH: u32 = 1024;

/// Why an X request failed: the connection itself, or just this request.
enum Failure {
    Connection(String),
    Request(String),
}

impl From<ConnectionError> for Failure {
    fn from(e: ConnectionError) -> Self {
        Failure::Connection(e.to_string())
    }
}

impl From<ReplyError> for Failure {
    fn from(e: ReplyError) -> Self {
        match e {
            ReplyError::ConnectionError(e) => Failure::Connection(e.to_string()),
            ReplyError::X11Error(e) => Failure::Request(format!("{:?}", e.error_kind)),
        }
    }
}

struct Session {
    conn: RustConnection,
    root: Window,
    atoms: Atoms,
}

impl Session {
    fn open(display: Option<&str>) -> std::result::Result<Self, String> {
        let (conn, screen_num) =
            x11rb::connect(display).map_err(|e: ConnectError| format!("cannot connect to X server: {e}"))?;
        let root = conn
            .setup()
            .roots
            .get(screen_num)
            .map(|screen| screen.root)
            .ok_or_else(|| format!("screen {screen_num} not found"))?;
        let atoms = Atoms::new(&conn)
            .map_err(|e| e.to_string())?
            .reply()
            .map_err(|e| e.to_string())?;

        Ok(Self { conn, root, atoms })
    }

    /// Client windows in stacking order, falling back to the unordered
    /// client list for window managers that only publish that.
    fn client_windows(&self) -> std::result::Result<Vec<Window>, Failure> {
        if let Some(windows) = self.root_window_list(self.atoms._NET_CLIENT_LIST_STACKING)? {
            return Ok(windows);
        }
        debug!("_NET_CLIENT_LIST_STACKING not set, falling back to _NET_CLIENT_LIST");
        self.root_window_list(self.atoms._NET_CLIENT_LIST)?
            .ok_or_else(|| Failure::Request("window manager publishes no client list".into()))
    }

    fn root_window_list(&self, property: Atom) -> std::result::Result<Option<Vec<Window>>, Failure> {
        let reply = self
            .conn
            .get_property(false, self.root, property, AtomEnum::WINDOW, 0, u32::MAX)?
            .reply()?;
        if reply.type_ == x11rb::NONE {
            return Ok(None);
        }
        Ok(reply.value32().map(|windows| windows.collect()))
    }

    /// `_NET_WM_NAME`, else `WM_NAME`. A window destroyed since the list
    /// was read has no name.
    fn window_name(&self, window: Window) -> std::result::Result<String, Failure> {
        let candidates: [(Atom, Atom); 2] = [
            (self.atoms._NET_WM_NAME, self.atoms.UTF8_STRING),
            (AtomEnum::WM_NAME.into(), AtomEnum::ANY.into()),
        ];
        for (property, type_) in candidates {
            match self.text_property(window, property, type_) {
                Ok(Some(bytes)) => return Ok(String::from_utf8_lossy(&bytes).into_owned()),
                Ok(None) => {}
                Err(Failure::Request(reason)) => {
                    debug!(
                        window = %WindowHandle::from(window),
                        %reason,
                        "window vanished while reading name"
                    );
                    return Ok(String::new());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(String::new())
    }

    fn text_property(
        &self,
        window: Window,
        property: Atom,
        type_: Atom,
    ) -> std::result::Result<Option<Vec<u8>>, Failure> {
        let reply = self
            .conn
            .get_property(false, window, property, type_, 0, NAME_LENGTH)?
            .reply()?;
        if reply.value.is_empty() {
            Ok(None)
        } else {
            Ok(Some(reply.value))
        }
    }

    fn send_root_message(
        &self,
        window: Window,
        message_type: Atom,
        data: [u32; 5],
    ) -> std::result::Result<(), Failure> {
        let event = ClientMessageEvent::new(32, window, message_type, data);
        self.conn.send_event(
            false,
            self.root,
            EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY,
            event,
        )?;
        Ok(())
    }
}

/// X11 gateway speaking the EWMH pager protocol.
pub struct EwmhGateway {
    display: Option<String>,
    activate_on_all_desktops: bool,
    session: Option<Session>,
}

impl EwmhGateway {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            display: config.display.clone(),
            activate_on_all_desktops: config.activate_on_all_desktops,
            session: None,
        }
    }

    /// Run `op` against the live session. A connection-level failure drops
    /// the session so the next `connect` starts fresh; request failures are
    /// mapped by `on_request`.
    fn with_session<T>(
        &mut self,
        op: impl FnOnce(&Session) -> std::result::Result<T, Failure>,
        on_request: impl FnOnce(String) -> GatewayError,
    ) -> Result<T> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| GatewayError::Unavailable("not connected".into()))?;

        match op(session) {
            Ok(value) => Ok(value),
            Err(Failure::Connection(reason)) => {
                warn!(%reason, "lost connection to X server");
                self.session = None;
                Err(GatewayError::Unavailable(reason))
            }
            Err(Failure::Request(reason)) => Err(on_request(reason)),
        }
    }
}

fn x11_window(command: &'static str, handle: WindowHandle) -> Result<Window> {
    Window::try_from(handle.0)
        .map_err(|_| GatewayError::dispatch(command, handle, "not an X11 window id"))
}

impl WindowManagerGateway for EwmhGateway {
    fn connect(&mut self) -> Result<()> {
        if self.session.is_some() {
            return Ok(());
        }
        let session = Session::open(self.display.as_deref()).map_err(GatewayError::Unavailable)?;
        info!(
            display = self.display.as_deref().unwrap_or("$DISPLAY"),
            root = %WindowHandle::from(session.root),
            "connected to X server"
        );
        self.session = Some(session);
        Ok(())
    }

    fn disconnect(&mut self) {
        if self.session.take().is_some() {
            info!("disconnected from X server");
        }
    }

    fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    fn list_windows(&mut self) -> Result<WindowSnapshot> {
        self.with_session(
            |session| {
                let mut snapshot = WindowSnapshot::new();
                for window in session.client_windows()? {
                    let name = session.window_name(window)?;
                    snapshot.push(WindowHandle::from(window), name);
                }
                Ok(snapshot)
            },
            GatewayError::Unavailable,
        )
    }

    fn activate(&mut self, handle: WindowHandle) -> Result<()> {
        let window = x11_window("activate", handle)?;
        let all_desktops = self.activate_on_all_desktops;
        self.with_session(
            |session| {
                if all_desktops {
                    session.send_root_message(
                        window,
                        session.atoms._NET_WM_DESKTOP,
                        [ALL_DESKTOPS, SOURCE_PAGER, 0, 0, 0],
                    )?;
                }
                session.send_root_message(
                    window,
                    session.atoms._NET_ACTIVE_WINDOW,
                    [SOURCE_PAGER, x11rb::CURRENT_TIME, 0, 0, 0],
                )?;
                session.conn.flush()?;
                Ok(())
            },
            |reason| GatewayError::dispatch("activate", handle, reason),
        )
    }

    fn close(&mut self, handle: WindowHandle) -> Result<()> {
        let window = x11_window("close", handle)?;
        self.with_session(
            |session| {
                session.send_root_message(
                    window,
                    session.atoms._NET_CLOSE_WINDOW,
                    [x11rb::CURRENT_TIME, SOURCE_PAGER, 0, 0, 0],
                )?;
                session.conn.flush()?;
                Ok(())
            },
            |reason| GatewayError::dispatch("close", handle, reason),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_gateway_is_disconnected() {
        let gateway = EwmhGateway::new(&GatewayConfig::default());
        assert!(!gateway.is_connected());
    }

    #[test]
    fn commands_without_connection_are_unavailable() {
        let mut gateway = EwmhGateway::new(&GatewayConfig::default());
        assert!(gateway.list_windows().unwrap_err().is_unavailable());
        assert!(gateway.activate(WindowHandle(1)).unwrap_err().is_unavailable());
        assert!(gateway.close(WindowHandle(1)).unwrap_err().is_unavailable());
    }

    #[test]
    fn oversized_handle_is_a_dispatch_error() {
        let mut gateway = EwmhGateway::new(&GatewayConfig::default());
        let err = gateway.close(WindowHandle(u64::MAX)).unwrap_err();
        assert!(matches!(err, GatewayError::CommandDispatch { command: "close", .. }));
    }

    #[test]
    fn bogus_display_fails_to_connect() {
        let config = GatewayConfig {
            display: Some(":not-a-display".into()),
            ..GatewayConfig::default()
        };
        let mut gateway = EwmhGateway::new(&config);
        assert!(gateway.connect().unwrap_err().is_unavailable());
        assert!(!gateway.is_connected());
    }

    #[test]
    #[ignore] // Requires an X11 display with an EWMH window manager
    fn lists_windows_on_live_display() {
        let mut gateway = EwmhGateway::new(&GatewayConfig::default());
        gateway.connect().unwrap();
        let snapshot = gateway.list_windows().unwrap();
        for entry in &snapshot {
            println!("{}  {}", entry.handle, entry.name);
        }
        gateway.disconnect();
    }
}
