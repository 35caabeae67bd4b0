//! Terminal form and output renderer.
//!
//! One input field takes a topic; submitting it runs the whole generation
//! pipeline and renders the title, the script and collapsible history and
//! research panels. Built with ratatui for terminal rendering.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod backend;
mod events;
mod runner;
mod ui;

pub use app::{Action, App, Focus, GenerationView, Outcome, Panel};
pub use backend::TuiBackend;
pub use events::{Event, EventHandler};
pub use runner::{handle_key, run_tui, submit};
pub use ui::draw;
