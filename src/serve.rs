// ABOUTME: Interactive viewer host for the pitchdeck application
// ABOUTME: Serves the deck page and drives navigation over a websocket channel

use log::{debug, error, info, warn};
use parking_lot::Mutex;
use std::io::ErrorKind;
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tiny_http::{Header, Response, Server, StatusCode};
use tungstenite::{Message, WebSocket};

use crate::catalog::SlideRecord;
use crate::errors::{DeckError, Result};
use crate::export::{self, ExportConfig};
use crate::layout;
use crate::summary;
use crate::viewer::{NavCommand, ViewerState, COPY_ACK_MS};

/// Configuration for the viewer server
pub struct ServeConfig {
    /// Port for the HTTP page; the websocket control channel listens on the
    /// next port up.
    pub port: u16,
    pub export: ExportConfig,
    /// Where the export command writes the artifact.
    pub export_output: PathBuf,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            export: ExportConfig::default(),
            export_output: PathBuf::from(export::EXPORT_FILE_NAME),
        }
    }
}

/// Outcome of the most recent export run, sequenced so each connection can
/// report it exactly once.
#[derive(Default)]
struct ExportOutcome {
    seq: u64,
    success: bool,
}

struct Shared {
    slides: &'static [SlideRecord],
    state: Arc<Mutex<ViewerState>>,
    outcome: Arc<Mutex<ExportOutcome>>,
    export_config: ExportConfig,
    export_output: PathBuf,
}

/// Serve the interactive viewer. Blocks for the lifetime of the process: the
/// HTTP page is served from a background thread and this thread accepts
/// websocket control connections.
pub fn serve(
    slides: &'static [SlideRecord],
    state: Arc<Mutex<ViewerState>>,
    config: ServeConfig,
) -> Result<()> {
    let ws_port = config.port + 1;
    let page = Arc::new(layout::interactive_page(slides, ws_port));

    start_http_server(page, config.port)?;

    let shared = Arc::new(Shared {
        slides,
        state,
        outcome: Arc::new(Mutex::new(ExportOutcome::default())),
        export_config: config.export,
        export_output: config.export_output,
    });

    let listener = TcpListener::bind(("0.0.0.0", ws_port))
        .map_err(|e| DeckError::ServeError(format!("Failed to bind control port: {}", e)))?;
    info!("Control channel listening on port {}", ws_port);

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    if let Err(e) = handle_connection(stream, &shared) {
                        debug!("Control connection closed: {}", e);
                    }
                });
            }
            Err(e) => warn!("Failed to accept control connection: {}", e),
        }
    }

    Ok(())
}

/// Start a simple HTTP server that serves the viewer page at the root
fn start_http_server(page: Arc<String>, port: u16) -> Result<()> {
    let server = Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| DeckError::ServeError(format!("Failed to start HTTP server: {}", e)))?;

    let server = Arc::new(server);
    thread::spawn(move || {
        info!("Viewer listening on http://localhost:{}", port);
        println!("Viewer listening on http://localhost:{}", port);

        for request in server.incoming_requests() {
            let url_path = request.url();
            debug!("Request for {:?}", url_path);

            if url_path == "/" || url_path == "/index.html" {
                let header = Header::from_bytes("Content-Type", "text/html; charset=utf-8")
                    .expect("Failed to create content-type header");
                let response = Response::from_string(page.as_str()).with_header(header);
                if let Err(e) = request.respond(response) {
                    error!("Failed to send response: {}", e);
                }
            } else {
                let response =
                    Response::from_string("404 Not Found").with_status_code(StatusCode(404));
                let _ = request.respond(response);
            }
        }
    });

    Ok(())
}

fn handle_connection(stream: TcpStream, shared: &Shared) -> Result<()> {
    let mut ws = tungstenite::accept(stream)
        .map_err(|e| DeckError::ServeError(format!("Websocket handshake failed: {}", e)))?;

    // A short read timeout lets the loop interleave reading commands with
    // pushing state changes that originate elsewhere (export worker, copy
    // acknowledgement expiry).
    ws.get_ref()
        .set_read_timeout(Some(Duration::from_millis(100)))
        .map_err(DeckError::FileError)?;

    debug!("Control connection established");

    // Last values pushed to this client, for diffing.
    let mut sent_index = usize::MAX;
    let mut sent_busy = None;
    let mut sent_copied = None;
    let mut seen_outcome_seq = shared.outcome.lock().seq;

    loop {
        match ws.read() {
            Ok(Message::Text(text)) => handle_command(text.trim(), shared),
            Ok(Message::Close(_)) => return Ok(()),
            Ok(_) => {}
            Err(tungstenite::Error::Io(e))
                if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::TimedOut => {}
            Err(tungstenite::Error::ConnectionClosed)
            | Err(tungstenite::Error::AlreadyClosed) => return Ok(()),
            Err(e) => {
                return Err(DeckError::ServeError(format!(
                    "Control channel read failed: {}",
                    e
                )))
            }
        }

        push_state(&mut ws, shared, &mut sent_index, &mut sent_busy, &mut sent_copied)?;
        push_outcome(&mut ws, shared, &mut seen_outcome_seq)?;
    }
}

fn handle_command(command: &str, shared: &Shared) {
    debug!("Control command: {}", command);

    match command {
        "next" => {
            shared.state.lock().next();
        }
        "prev" => {
            shared.state.lock().previous();
        }
        "copy" => copy_current_slide(shared),
        "export" => start_export(shared),
        "fullscreen" => {
            let mut state = shared.state.lock();
            state.is_fullscreen = !state.is_fullscreen;
        }
        _ => {
            if let Some(key) = command.strip_prefix("key ") {
                // Unbound keys are ignored.
                if let Some(nav) = NavCommand::from_key(key) {
                    shared.state.lock().apply(nav);
                }
            } else {
                debug!("Ignoring unknown control command: {}", command);
            }
        }
    }
}

/// Summarize the current slide and copy it to the clipboard. On success the
/// acknowledgement flag is set and a timer clears it after the fixed delay,
/// unless the displayed slide changes first (the generation token moves on
/// and the expiry becomes a no-op).
fn copy_current_slide(shared: &Shared) {
    let index = shared.state.lock().current_index();
    let slide = &shared.slides[index];
    let text = summary::summarize(slide);

    if summary::copy_to_clipboard(&text) {
        let generation = shared.state.lock().acknowledge_copy(Instant::now());
        let state = Arc::clone(&shared.state);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(COPY_ACK_MS));
            state.lock().expire_copy_ack(generation);
        });
    }
    // Clipboard failures are silent: no acknowledgement, nothing else.
}

/// Kick off an export on a worker thread. The single-flight guard inside the
/// pipeline rejects the request if one is already running; that rejection is
/// not an outcome worth reporting, the button is already disabled.
fn start_export(shared: &Shared) {
    let slides = shared.slides;
    let state = Arc::clone(&shared.state);
    let config = shared.export_config.clone();
    let output = shared.export_output.clone();
    let outcome = Arc::clone(&shared.outcome);

    thread::spawn(move || {
        match export::export_deck(slides, &state, &config, &output) {
            Ok(path) => {
                info!("Export complete: {:?}", path);
                let mut outcome = outcome.lock();
                outcome.seq += 1;
                outcome.success = true;
            }
            Err(DeckError::ExportInFlight) => {
                debug!("Export request rejected, one is already running");
            }
            Err(e) => {
                error!("Export failed: {}", e);
                let mut outcome = outcome.lock();
                outcome.seq += 1;
                outcome.success = false;
            }
        }
    });
}

fn push_state(
    ws: &mut WebSocket<TcpStream>,
    shared: &Shared,
    sent_index: &mut usize,
    sent_busy: &mut Option<bool>,
    sent_copied: &mut Option<bool>,
) -> Result<()> {
    let (index, busy, copied) = {
        let state = shared.state.lock();
        (
            state.current_index(),
            state.export_status() == crate::viewer::ExportStatus::Exporting,
            state.is_copy_acknowledged(Instant::now()),
        )
    };

    if index != *sent_index {
        send(ws, format!("slide {}", index))?;
        *sent_index = index;
    }
    if Some(busy) != *sent_busy {
        send(ws, format!("export {}", if busy { "busy" } else { "idle" }))?;
        *sent_busy = Some(busy);
    }
    if Some(copied) != *sent_copied {
        send(ws, format!("copied {}", if copied { "1" } else { "0" }))?;
        *sent_copied = Some(copied);
    }

    Ok(())
}

fn push_outcome(
    ws: &mut WebSocket<TcpStream>,
    shared: &Shared,
    seen_seq: &mut u64,
) -> Result<()> {
    let (seq, success) = {
        let outcome = shared.outcome.lock();
        (outcome.seq, outcome.success)
    };
    if seq != *seen_seq {
        *seen_seq = seq;
        send(ws, format!("export {}", if success { "done" } else { "failed" }))?;
    }
    Ok(())
}

fn send(ws: &mut WebSocket<TcpStream>, message: String) -> Result<()> {
    ws.send(Message::Text(message))
        .map_err(|e| DeckError::ServeError(format!("Control channel send failed: {}", e)))
}
