// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every message is turned into controller calls first. Afterwards the
//! surface is inspected: a newly displayed asset is looked up in the cache or
//! fetched, and queued neighbor preloads become background fetch tasks.

use super::message::TouchInput;
use super::{App, Message};
use crate::application::input::{Direction, GridKey, ViewerKey};
use crate::diagnostics::export::{default_export_directory, generate_default_filename};
use crate::diagnostics::{AppOperation, UserAction};
use crate::domain::gallery::{AssetRef, ItemIndex};
use crate::error::Error;
use crate::media::{fetch_asset, FetchedAsset};
use crate::ui::gallery::{self, Thumbnail};
use crate::ui::lightbox::{self, ViewerImage};
use iced::Task;

/// i18n key used when an error carries no fetch-specific reason.
const GENERIC_FETCH_ERROR_KEY: &str = "error-fetch-network";

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        self.diagnostics.process_pending();

        match message {
            Message::Gallery(message) => self.handle_gallery(message),
            Message::Lightbox(message) => self.handle_lightbox(message),
            Message::GridKey(key) => self.handle_grid_key(key),
            Message::ViewerKey(key) => self.handle_viewer_key(key),
            Message::Touch(input) => self.handle_touch(input),
            Message::ThumbnailLoaded { index, result } => {
                self.handle_thumbnail_loaded(index, result);
            }
            Message::AssetFetched {
                asset,
                prefetch,
                result,
            } => self.handle_asset_fetched(asset, prefetch, result),
            Message::ExportDiagnostics => self.export_diagnostics(),
        }

        match self.gallery.current() {
            Some(current) => self.focused = Some(current),
            // Finger events stop with the viewer, so a finger still down
            // would never be lifted.
            None => self.swipe.reset(),
        }

        self.sync_viewer_assets()
    }

    fn handle_gallery(&mut self, message: gallery::Message) {
        match message {
            gallery::Message::FilterSelected(filter) => {
                let token = filter.to_string();
                self.gallery.apply_filter(filter);
                if self
                    .focused
                    .is_some_and(|index| !self.gallery.visible().contains(index))
                {
                    self.focused = None;
                }
                self.diagnostics.log_action(UserAction::ApplyFilter {
                    filter: token,
                    visible: self.gallery.visible().len(),
                });
            }
            gallery::Message::CardActivated(index) => {
                if self.gallery.open(index) {
                    self.diagnostics.log_action(UserAction::OpenViewer {
                        index: index.value(),
                    });
                }
            }
        }
    }

    fn handle_lightbox(&mut self, message: lightbox::Message) {
        match message {
            lightbox::Message::Close => self.close_viewer(),
            lightbox::Message::BackdropReleased => {
                if self.swipe.backdrop_released() {
                    self.close_viewer();
                }
            }
            lightbox::Message::Navigate(direction) => self.navigate(direction),
        }
    }

    /// Moves the card focus or opens the focused card.
    fn handle_grid_key(&mut self, key: GridKey) {
        if self.gallery.is_open() {
            return;
        }
        match key.focus_offset() {
            Some(offset) => {
                self.focused = self.gallery.visible_neighbor(self.focused, offset);
            }
            None => {
                let Some(index) = self
                    .focused
                    .filter(|index| self.gallery.visible().contains(*index))
                else {
                    return;
                };
                if self.gallery.open(index) {
                    self.diagnostics.log_action_with_details(
                        UserAction::OpenViewer {
                            index: index.value(),
                        },
                        Some("keyboard".to_string()),
                    );
                }
            }
        }
    }

    fn handle_viewer_key(&mut self, key: ViewerKey) {
        let action = match key {
            ViewerKey::Escape => UserAction::CloseViewer,
            ViewerKey::ArrowLeft => UserAction::NavigatePrevious,
            ViewerKey::ArrowRight => UserAction::NavigateNext,
        };
        if self.gallery.handle_key(key) {
            self.diagnostics
                .log_action_with_details(action, Some("keyboard".to_string()));
        }
    }

    fn handle_touch(&mut self, input: TouchInput) {
        match input {
            TouchInput::Pressed { finger, x } => {
                if self.gallery.is_open() {
                    self.swipe.begin(finger, x);
                }
            }
            TouchInput::Lifted { finger, x } => match self.swipe.end(finger, x) {
                Some(direction) => {
                    if self.gallery.step(direction.offset()).is_some() {
                        self.diagnostics.log_action(UserAction::Swipe {
                            next: direction == Direction::Next,
                        });
                    }
                }
                None => {
                    if self.swipe.take_deferred_close() {
                        self.close_viewer();
                    }
                }
            },
            TouchInput::Lost { finger } => self.swipe.cancel(finger),
        }
    }

    fn close_viewer(&mut self) {
        if !self.gallery.is_open() {
            return;
        }
        self.gallery.close();
        self.diagnostics.log_action(UserAction::CloseViewer);
    }

    fn navigate(&mut self, direction: Direction) {
        if self.gallery.step(direction.offset()).is_none() {
            return;
        }
        self.diagnostics.log_action(match direction {
            Direction::Previous => UserAction::NavigatePrevious,
            Direction::Next => UserAction::NavigateNext,
        });
    }

    /// Writes the diagnostics log, with a cache usage snapshot appended.
    fn export_diagnostics(&mut self) {
        let stats = self.cache.stats();
        self.diagnostics.log_operation(AppOperation::CacheSnapshot {
            images: self.cache.len(),
            memory_bytes: self.cache.memory_usage(),
            hits: stats.hits,
            misses: stats.misses,
            hit_rate_percent: stats.hit_rate().round() as u32,
        });

        let path =
            default_export_directory(self.config_dir.clone()).join(generate_default_filename());
        self.status = Some(match self.diagnostics.export_to_file(&path) {
            Ok(written) => {
                let shown = written.display().to_string();
                self.i18n
                    .tr_with_args("diagnostics-exported", &[("path", shown.as_str())])
            }
            Err(err) => {
                let error = err.to_string();
                self.diagnostics.log_error(error.clone());
                self.i18n
                    .tr_with_args("diagnostics-export-error", &[("error", error.as_str())])
            }
        });
    }

    fn handle_thumbnail_loaded(&mut self, index: ItemIndex, result: Result<FetchedAsset, Error>) {
        match result {
            Ok(fetched) => {
                self.diagnostics.log_operation(AppOperation::AssetFetched {
                    duration_ms: fetched.elapsed.as_millis() as u64,
                    size_bytes: fetched.image.encoded_len() as u64,
                    prefetch: false,
                });
                self.thumbnails
                    .insert(index, Thumbnail::Ready(fetched.image));
            }
            Err(err) => {
                self.diagnostics
                    .log_warning(format!("thumbnail {index} unavailable: {err}"));
                self.thumbnails.insert(index, Thumbnail::Unavailable);
            }
        }
    }

    /// Stores a finished full-resolution fetch.
    ///
    /// Preload failures are only recorded; they are never retried and never
    /// shown unless the failed asset is the one on display.
    fn handle_asset_fetched(
        &mut self,
        asset: AssetRef,
        prefetch: bool,
        result: Result<FetchedAsset, Error>,
    ) {
        let is_displayed = self.displayed.as_ref() == Some(&asset);

        match result {
            Ok(fetched) => {
                if is_displayed {
                    self.viewer_image = ViewerImage::Ready(fetched.image.clone());
                }
                self.cache.insert(asset, fetched.image);
            }
            Err(err) => {
                self.cache.fetch_failed(&asset);
                self.diagnostics.log_warning(format!(
                    "{} {asset} failed: {err}",
                    if prefetch { "preload of" } else { "fetch of" }
                ));
                if is_displayed {
                    self.viewer_image = ViewerImage::Failed(error_key(&err));
                }
            }
        }
    }

    /// Follows the lightbox frame and drains queued preloads into tasks.
    fn sync_viewer_assets(&mut self) -> Task<Message> {
        let requests = self.gallery.surface_mut().take_prefetch_requests();
        let mut tasks = Vec::new();

        let wanted = self
            .gallery
            .surface()
            .viewer()
            .map(|frame| frame.asset.clone());

        if wanted != self.displayed {
            self.displayed.clone_from(&wanted);
            self.viewer_image = ViewerImage::Loading;

            if let Some(asset) = wanted {
                if let Some(image) = self.cache.get(&asset) {
                    self.viewer_image = ViewerImage::Ready(image);
                } else if self.fetcher.is_none() {
                    self.viewer_image = ViewerImage::Failed(GENERIC_FETCH_ERROR_KEY);
                } else if !self.cache.is_in_flight(&asset) {
                    self.cache.mark_in_flight(asset.clone());
                    tasks.push(self.fetch_task(asset, false));
                }
            }
        }

        if self.cache.is_enabled() && self.fetcher.is_some() {
            for asset in self.cache.assets_to_fetch(&requests) {
                self.cache.mark_in_flight(asset.clone());
                tasks.push(self.fetch_task(asset, true));
            }
        }

        Task::batch(tasks)
    }

    fn fetch_task(&self, asset: AssetRef, prefetch: bool) -> Task<Message> {
        let Some(fetcher) = self.fetcher.clone() else {
            return Task::none();
        };
        let diagnostics = self.diagnostics.handle();

        Task::perform(fetch_asset(fetcher, asset), move |(asset, result)| {
            if let Ok(fetched) = &result {
                diagnostics.log_operation(AppOperation::AssetFetched {
                    duration_ms: fetched.elapsed.as_millis() as u64,
                    size_bytes: fetched.image.encoded_len() as u64,
                    prefetch,
                });
            }
            Message::AssetFetched {
                asset,
                prefetch,
                result,
            }
        })
    }
}

fn error_key(err: &Error) -> &'static str {
    match err {
        Error::Fetch(fetch) => fetch.i18n_key(),
        _ => GENERIC_FETCH_ERROR_KEY,
    }
}
