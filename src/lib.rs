// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Outsidely: activity tracking backend
//!
//! This crate provides the backend API for uploading GPS activity tracks,
//! deriving trip statistics and preview geometry from them, and serving
//! the recent-activity feed.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::ActivityStore;
use services::preview::PreviewSettings;
use services::ActivityProcessor;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn ActivityStore>,
    pub activity_processor: ActivityProcessor,
}

impl AppState {
    /// Build state over the given store.
    pub fn new(config: Config, store: Arc<dyn ActivityStore>) -> Self {
        let preview_settings =
            PreviewSettings::with_tile_url_template(config.map_tile_url_template.clone());
        let activity_processor = ActivityProcessor::new(store.clone(), preview_settings);
        Self {
            config,
            store,
            activity_processor,
        }
    }
}
