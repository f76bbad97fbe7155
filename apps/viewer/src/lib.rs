//! Headless view session for the vocabulary list.
//!
//! Wires the `vocab-core` pipeline to a debounce timer, an intersection
//! watcher and a render containment boundary. Rendering itself is left to
//! whatever consumes [`session::ViewSnapshot`] and [`events::ViewEvent`].

pub mod boundary;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod events;
pub mod layout;
pub mod session;
pub mod state;
pub mod watcher;

pub use boundary::{RenderBoundary, Rendered, SectionRenderer};
pub use commands::CommandError;
pub use config::ViewerConfig;
pub use events::{EventSink, NullSink, ViewEvent};
pub use session::{EntryView, SectionView, Session, ViewSnapshot};
pub use state::AppState;
pub use watcher::{IntersectionSignal, IntersectionWatcher, WatcherError};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber. `RUST_LOG` controls the filter,
/// defaulting to `info`. Calling this twice is harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
