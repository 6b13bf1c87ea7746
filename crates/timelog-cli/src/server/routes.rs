//! Request dispatch for the log page.

use std::path::PathBuf;

use chrono::NaiveDate;
use timelog::{EventStore, TimeEntry};

use super::http::{Request, Response};
use crate::page::{local_today, render_log_page};

/// Path of the log page.
pub const LOG_PAGE_PATH: &str = "/log-time.html";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// What every request needs: where records live and which template to use.
#[derive(Debug, Clone)]
pub struct App {
    pub store: EventStore,
    pub template: PathBuf,
    /// Fixed "today" for the page; the local date when unset.
    pub today: Option<NaiveDate>,
}

/// Answer one request.
///
/// `POST /log-time.html` records the submitted entry, then every request for
/// the log page renders it. Other paths get a plain-text notice.
pub fn handle(request: &Request, app: &App) -> Response {
    if request.path != LOG_PAGE_PATH {
        log::debug!("{} {}: unknown path", request.method, request.path);
        return Response::text(200, format!("Unknown path: {}", request.path));
    }

    if request.method == "POST" {
        if let Err(response) = record_submission(request, app) {
            return response;
        }
    }

    let today = app.today.unwrap_or_else(local_today);
    match render_log_page(&app.template, &app.store, today) {
        Ok(page) => Response::html(page),
        Err(e) => {
            log::error!("failed to render log page: {e}");
            Response::text(500, e.to_string())
        }
    }
}

/// Decode the submitted form and append it to the store.
fn record_submission(request: &Request, app: &App) -> Result<(), Response> {
    if let Some(content_type) = request.header("content-type") {
        if !content_type.starts_with(FORM_CONTENT_TYPE) {
            log::warn!("decoding '{content_type}' body as {FORM_CONTENT_TYPE}");
        }
    }
    let entry = TimeEntry::from_form(&request.form()).map_err(|e| {
        log::warn!("rejected submission: {e}");
        Response::text(400, e.to_string())
    })?;
    let path = app.store.append(&entry).map_err(|e| {
        log::error!("failed to record entry: {e}");
        Response::text(500, e.to_string())
    })?;
    log::info!(
        "logged {} hours on {} for '{}' in {}",
        entry.total_hours,
        entry.day,
        entry.project,
        path.display()
    );
    Ok(())
}
