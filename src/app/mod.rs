// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery controller
//! and the Iced runtime.
//!
//! The `App` struct wires together the controller, localization, asset
//! loading and diagnostics, and translates messages into controller calls and
//! fetch tasks.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, TouchInput};

use crate::application::input::SwipeTracker;
use crate::application::GalleryController;
use crate::catalog::{self, Catalog};
use crate::diagnostics::{AppOperation, DiagnosticsCollector};
use crate::domain::gallery::{AssetRef, Category, ItemIndex};
use crate::i18n::fluent::I18n;
use crate::media::{fetch_asset, AssetCache, AssetFetcher};
use crate::ui::gallery::Thumbnail;
use crate::ui::lightbox::ViewerImage;
use crate::ui::GallerySurface;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    title: String,
    gallery: GalleryController<GallerySurface>,
    /// Filter chips, in first-appearance order.
    categories: Vec<Category>,
    thumbnails: HashMap<ItemIndex, Thumbnail>,
    /// Card holding the keyboard focus while the grid is shown.
    focused: Option<ItemIndex>,
    /// Full-resolution asset the lightbox currently wants.
    displayed: Option<AssetRef>,
    viewer_image: ViewerImage,
    cache: AssetCache,
    fetcher: Option<AssetFetcher>,
    swipe: SwipeTracker,
    diagnostics: DiagnosticsCollector,
    /// Directory holding settings.toml and exported diagnostics.
    config_dir: Option<PathBuf>,
    /// Localized notice shown above the grid.
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("title", &self.title)
            .field("items", &self.gallery.items().len())
            .field("navigation", &self.gallery.navigation())
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 400;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and the gallery manifest, then starts fetching the card
    /// thumbnails.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_ref().map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut diagnostics = DiagnosticsCollector::new(config.diagnostics.buffer_capacity())
            .with_stderr_echo(config.diagnostics.log_to_stderr());

        let mut status = None;
        if let Some(key) = config_warning {
            diagnostics.log_warning(format!("settings ignored: {key}"));
            status = Some(i18n.tr(&key));
        }

        let started = Instant::now();
        let loaded = match flags.manifest_path.as_deref() {
            Some(path) => catalog::load_from_path(path),
            None => catalog::load_embedded(),
        };
        let catalog = match loaded {
            Ok(catalog) => {
                diagnostics.log_operation(AppOperation::CatalogLoaded {
                    items: catalog.items().len(),
                    duration_ms: started.elapsed().as_millis() as u64,
                });
                Some(catalog)
            }
            Err(err) => {
                diagnostics.log_error(err.to_string());
                let error = err.to_string();
                status = Some(i18n.tr_with_args("catalog-load-error", &[("error", error.as_str())]));
                None
            }
        };

        let title = catalog
            .as_ref()
            .and_then(Catalog::title)
            .map(str::to_string)
            .unwrap_or_else(|| i18n.tr("default-gallery-title"));
        let categories = catalog
            .as_ref()
            .map(Catalog::categories)
            .unwrap_or_default();
        let base_dir = catalog
            .as_ref()
            .and_then(|c| c.base_dir().map(std::path::Path::to_path_buf));
        let items = catalog.map(Catalog::into_items).unwrap_or_default();

        let fetcher = match AssetFetcher::new(base_dir) {
            Ok(fetcher) => Some(fetcher),
            Err(err) => {
                diagnostics.log_error(err.to_string());
                None
            }
        };

        let gallery = GalleryController::with_full_resolution(
            items,
            GallerySurface::new(),
            config.viewer.full_resolution(),
        );

        let mut app = App {
            i18n,
            title,
            gallery,
            categories,
            thumbnails: HashMap::new(),
            focused: None,
            displayed: None,
            viewer_image: ViewerImage::default(),
            cache: AssetCache::new(config.prefetch.cache_config()),
            fetcher,
            swipe: SwipeTracker::new(config.viewer.swipe_threshold()),
            diagnostics,
            config_dir,
            status,
        };

        let task = app.load_thumbnails();
        (app, task)
    }

    /// Starts one fetch per card; cards without a fetcher are marked
    /// unavailable right away.
    fn load_thumbnails(&mut self) -> Task<Message> {
        let Some(fetcher) = self.fetcher.clone() else {
            for item in self.gallery.items() {
                self.thumbnails
                    .insert(item.index(), Thumbnail::Unavailable);
            }
            return Task::none();
        };

        let tasks: Vec<Task<Message>> = self
            .gallery
            .items()
            .iter()
            .map(|item| {
                let index = item.index();
                self.thumbnails.insert(index, Thumbnail::Loading);
                Task::perform(
                    fetch_asset(fetcher.clone(), item.asset().clone()),
                    move |(_, result)| Message::ThumbnailLoaded { index, result },
                )
            })
            .collect();

        Task::batch(tasks)
    }

    fn title(&self) -> String {
        self.i18n
            .tr_with_args("window-title", &[("title", self.title.as_str())])
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.gallery.is_open())
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            title: &self.title,
            gallery: &self.gallery,
            categories: &self.categories,
            thumbnails: &self.thumbnails,
            focused: self.focused,
            viewer_image: &self.viewer_image,
            status: self.status.as_deref(),
        })
    }
}
