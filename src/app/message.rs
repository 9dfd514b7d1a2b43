// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::input::{FingerId, GridKey, ViewerKey};
use crate::domain::gallery::{AssetRef, ItemIndex};
use crate::error::Error;
use crate::media::FetchedAsset;
use crate::ui::{gallery, lightbox};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Lightbox(lightbox::Message),
    /// A grid focus key was pressed while the viewer is closed.
    GridKey(GridKey),
    /// A viewer shortcut was pressed outside any focused widget.
    ViewerKey(ViewerKey),
    Touch(TouchInput),
    /// A card thumbnail finished loading.
    ThumbnailLoaded {
        index: ItemIndex,
        result: Result<FetchedAsset, Error>,
    },
    /// A full-resolution asset finished loading.
    AssetFetched {
        asset: AssetRef,
        /// `true` when the fetch was a neighbor preload.
        prefetch: bool,
        result: Result<FetchedAsset, Error>,
    },
    /// Write the diagnostics log to disk.
    ExportDiagnostics,
}

/// Finger events relevant to swipe navigation, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchInput {
    Pressed { finger: FingerId, x: f32 },
    Lifted { finger: FingerId, x: f32 },
    Lost { finger: FingerId },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml and exported
    /// diagnostics). Takes precedence over the `ICED_GALLERY_CONFIG_DIR`
    /// environment variable.
    pub config_dir: Option<String>,
    /// Gallery manifest to open instead of the built-in demo.
    pub manifest_path: Option<PathBuf>,
}
