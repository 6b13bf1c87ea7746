//! HTTP endpoint for the log page.
//!
//! Each connection is handled on its own task. Requests share nothing but
//! the read-only [`App`] settings; the template and records are read anew
//! for every request.

mod http;
mod routes;

use std::io::{self, ErrorKind};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::{signal, task, time};

pub use routes::{App, LOG_PAGE_PATH};

use http::{read_request, HttpError, Response};

/// Pause after an accept error that is not about a single connection.
const ACCEPT_BACKOFF: Duration = Duration::from_secs(1);

/// Accept connections on `bind` until interrupted with Ctrl-C.
///
/// Only binding and signal set-up end the loop with an error; failed
/// accepts are logged and retried.
pub async fn serve(bind: &str, app: App) -> io::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    log::info!(
        "serving http://{}{} (records in {})",
        listener.local_addr()?,
        LOG_PAGE_PATH,
        app.store.dir().display()
    );
    let app = Arc::new(app);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(accepted) => accepted,
                    Err(e) => {
                        log::warn!("accepting a connection: {e}");
                        if let Some(pause) = accept_backoff(&e) {
                            time::sleep(pause).await;
                        }
                        continue;
                    }
                };
                let app = Arc::clone(&app);
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, app).await {
                        log::warn!("connection from {peer}: {e}");
                    }
                });
            }
            interrupted = signal::ctrl_c() => {
                interrupted?;
                log::info!("shutting down");
                return Ok(());
            }
        }
    }
}

/// How long to wait before accepting again after `error`.
///
/// Errors tied to one connection are retried at once. Anything else, such as
/// running out of file descriptors, is likely to repeat, so accepting pauses.
fn accept_backoff(error: &io::Error) -> Option<Duration> {
    match error.kind() {
        ErrorKind::ConnectionAborted
        | ErrorKind::ConnectionRefused
        | ErrorKind::ConnectionReset
        | ErrorKind::Interrupted
        | ErrorKind::WouldBlock => None,
        _ => Some(ACCEPT_BACKOFF),
    }
}

async fn handle_connection(stream: TcpStream, app: Arc<App>) -> io::Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);

    let response = match read_request(&mut reader).await {
        Ok(request) => {
            log::debug!("{} {}", request.method, request.path);
            // Rendering reads files; keep it off the async workers.
            task::spawn_blocking(move || routes::handle(&request, &app))
                .await
                .unwrap_or_else(|e| Response::text(500, format!("request handler failed: {e}")))
        }
        Err(HttpError::Io(e)) if e.kind() == ErrorKind::InvalidData => {
            Response::text(400, format!("malformed request: {e}"))
        }
        Err(HttpError::Io(e)) => return Err(e),
        Err(e @ HttpError::TooLarge) => Response::text(413, e.to_string()),
        Err(e @ HttpError::Malformed(_)) => Response::text(400, e.to_string()),
    };

    writer.write_all(&response.to_bytes()).await?;
    writer.shutdown().await
}
