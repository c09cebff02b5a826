//! # Actions
//!
//! Everything that can happen to the dossier screen becomes an `Action`.
//! User presses `r`? That's `Action::Refresh`.
//! A fetch settles? That's `Action::ContentFetched { generation, result }`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the caller what I/O to start. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Overlapping refreshes are allowed. Each one bumps `generation`, and a
//! result is only applied if it carries the latest generation, so a slow
//! older request can never overwrite a newer one.

use chrono::Local;
use log::{debug, info};

use crate::content::{FetchError, PartialContentDocument, Resolution};
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    /// Start a new resolution cycle.
    Refresh,
    /// A fetch started by `Effect::Fetch` settled.
    ContentFetched {
        generation: u64,
        result: Result<PartialContentDocument, FetchError>,
    },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn a fetch and report back with this generation.
    Fetch { generation: u64 },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Refresh => {
            app.generation += 1;
            app.loading = true;
            app.status_message = String::from("Refreshing dossier...");
            info!("Refresh requested (generation {})", app.generation);
            Effect::Fetch {
                generation: app.generation,
            }
        }
        Action::ContentFetched { generation, result } => {
            if generation != app.generation {
                debug!(
                    "Discarding stale fetch result (generation {}, latest {})",
                    generation, app.generation
                );
                return Effect::None;
            }

            let resolution = Resolution::from_fetch(&app.fallback, result);
            app.error = resolution.error_message();
            app.content = resolution.content;
            app.loading = false;

            let now = Local::now();
            app.last_updated = Some(now);
            app.status_message = match &app.error {
                None => format!("Updated {}", now.format("%H:%M:%S")),
                Some(_) => String::from("Showing bundled dossier"),
            };
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
