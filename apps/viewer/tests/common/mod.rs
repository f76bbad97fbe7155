//! Common test utilities and fixtures for integration tests.
#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

use vocab_viewer_lib::commands::load_vocabulary;
use vocab_viewer_lib::{AppState, ViewEvent, ViewerConfig};

/// App state wired to a channel so tests can await events.
pub struct TestContext {
    pub state: AppState,
    pub events: UnboundedReceiver<ViewEvent>,
}

impl TestContext {
    pub fn new() -> Self {
        let config = ViewerConfig {
            viewport_width: 1280.0,
            viewport_height: 800.0,
            ..ViewerConfig::default()
        };
        let (tx, events) = unbounded_channel();
        Self {
            state: AppState::new(&config, Arc::new(tx)),
            events,
        }
    }

    /// Context with the fixture vocabulary loaded and its event consumed.
    pub async fn loaded() -> Self {
        let mut ctx = Self::new();
        load_vocabulary(fixtures::vocabulary(), &ctx.state)
            .await
            .expect("load fixtures");
        ctx.next_event().await;
        ctx
    }

    pub async fn next_event(&mut self) -> ViewEvent {
        self.events.recv().await.expect("event channel closed")
    }

    /// Assert nothing else has been emitted.
    pub fn assert_quiet(&mut self) {
        if let Ok(event) = self.events.try_recv() {
            panic!("unexpected event: {event:?}");
        }
    }

    pub fn view_builds(&self) -> u64 {
        vocab_viewer_lib::state::lock(&self.state.session)
            .stats()
            .view_builds
    }
}
