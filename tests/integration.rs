// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::config::{self, Config};
use iced_gallery::application::input::{Direction, FingerId, SwipeTracker, ViewerKey};
use iced_gallery::application::{GalleryController, NavigationState};
use iced_gallery::catalog::{self, Catalog};
use iced_gallery::domain::gallery::{
    Category, CategoryFilter, FullResolution, ItemIndex, SwipeThreshold,
};
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::test_utils::{sample_items, RecordingSurface, SurfaceCall};
use tempfile::tempdir;

fn controller(categories: &[&str]) -> GalleryController<RecordingSurface> {
    GalleryController::new(sample_items(categories), RecordingSurface::default())
}

fn only(label: &str) -> CategoryFilter {
    CategoryFilter::Only(Category::new(label))
}

fn indices(values: &[u32]) -> Vec<ItemIndex> {
    values.iter().copied().map(ItemIndex::new).collect()
}

// =============================================================================
// Filtering and navigation
// =============================================================================

#[test]
fn filter_keeps_matching_items_in_original_order() {
    let mut gallery = controller(&["A", "B", "A", "C", "A"]);

    for (label, expected) in [("A", vec![0, 2, 4]), ("B", vec![1]), ("C", vec![3])] {
        gallery.apply_filter(only(label));
        assert_eq!(gallery.visible().as_slice(), indices(&expected).as_slice());
        assert_eq!(gallery.surface().cards(), indices(&expected).as_slice());
    }

    gallery.apply_filter(CategoryFilter::All);
    assert_eq!(gallery.visible().len(), 5);
}

#[test]
fn step_then_inverse_step_returns_to_start() {
    let mut gallery = controller(&["A", "A", "A", "A", "A"]);
    for offset in [1_i64, 2, 3, 7, -4] {
        gallery.open(ItemIndex::new(1));
        gallery.step(offset);
        gallery.step(-offset);
        assert_eq!(gallery.current(), Some(ItemIndex::new(1)), "offset {offset}");
    }
}

#[test]
fn step_wraps_modulo_visible_count() {
    let len = 4_i64;
    for k in 1..=12_i64 {
        let mut long = controller(&["A"; 4]);
        let mut short = controller(&["A"; 4]);
        long.open(ItemIndex::new(0));
        short.open(ItemIndex::new(0));

        long.step(k);
        short.step(k % len);
        assert_eq!(long.current(), short.current(), "k = {k}");
    }
}

#[test]
fn open_unknown_index_changes_nothing() {
    let mut gallery = controller(&["A", "B"]);
    assert!(!gallery.open(ItemIndex::new(42)));
    assert_eq!(gallery.navigation(), NavigationState::Closed);

    gallery.open(ItemIndex::new(1));
    assert!(!gallery.open(ItemIndex::new(42)));
    assert_eq!(gallery.navigation(), NavigationState::Open(ItemIndex::new(1)));
}

#[test]
fn close_after_open_is_closed() {
    let mut gallery = controller(&["A", "B", "C"]);
    for index in 0..3 {
        gallery.open(ItemIndex::new(index));
        gallery.close();
        assert_eq!(gallery.navigation(), NavigationState::Closed);
        assert!(gallery.surface().viewer().is_none());
    }
}

#[test]
fn filtered_navigation_wraps_around() {
    let mut gallery = controller(&["A", "B", "A"]);
    gallery.apply_filter(only("A"));
    assert_eq!(gallery.visible().as_slice(), indices(&[0, 2]).as_slice());

    gallery.open(ItemIndex::new(0));
    assert_eq!(gallery.step(1), Some(ItemIndex::new(2)));
    assert_eq!(gallery.step(1), Some(ItemIndex::new(0)));
}

#[test]
fn empty_filter_makes_step_a_no_op() {
    let mut gallery = controller(&["A", "B", "A"]);
    gallery.open(ItemIndex::new(1));
    gallery.apply_filter(only("Z"));
    assert!(gallery.visible().is_empty());
    assert!(gallery.surface().cards().is_empty());

    gallery.surface_mut().clear_log();
    assert_eq!(gallery.step(1), None);
    assert_eq!(gallery.navigation(), NavigationState::Open(ItemIndex::new(1)));
    assert!(gallery.surface().calls().is_empty());
}

#[test]
fn left_swipe_moves_to_next_visible_item() {
    let mut gallery = controller(&["A", "B", "A"]);
    gallery.apply_filter(only("A"));
    gallery.open(ItemIndex::new(2));

    let mut swipe = SwipeTracker::default();
    swipe.begin(FingerId(0), 300.0);
    let direction = swipe.end(FingerId(0), 250.0);
    assert_eq!(direction, Some(Direction::Next));

    gallery.step(direction.map_or(0, Direction::offset));
    assert_eq!(gallery.current(), Some(ItemIndex::new(0)));
}

#[test]
fn keys_drive_the_viewer_only_while_open() {
    let mut gallery = controller(&["A", "A", "A"]);
    assert!(!gallery.handle_key(ViewerKey::ArrowRight));
    assert_eq!(gallery.navigation(), NavigationState::Closed);

    gallery.open(ItemIndex::new(0));
    assert!(gallery.handle_key(ViewerKey::ArrowLeft));
    assert_eq!(gallery.current(), Some(ItemIndex::new(2)));
    assert!(gallery.handle_key(ViewerKey::Escape));
    assert_eq!(gallery.navigation(), NavigationState::Closed);
}

#[test]
fn open_shows_full_resolution_frame_and_preloads_neighbors() {
    let mut gallery = GalleryController::with_full_resolution(
        sample_items(&["A", "A", "A"]),
        RecordingSurface::default(),
        FullResolution::new(2000, 1000),
    );
    gallery.surface_mut().clear_log();
    gallery.open(ItemIndex::new(0));

    let frame = gallery.surface().viewer().expect("viewer shown");
    assert_eq!(
        frame.asset.as_str(),
        "https://picsum.photos/seed/0/2000/1000"
    );
    assert!(matches!(gallery.surface().calls()[0], SurfaceCall::ShowViewer(_)));
    let preloaded: Vec<&str> = gallery
        .surface()
        .prefetched()
        .iter()
        .map(|a| a.as_str())
        .collect();
    assert_eq!(
        preloaded,
        vec![
            "https://picsum.photos/seed/2/2000/1000",
            "https://picsum.photos/seed/0/2000/1000",
            "https://picsum.photos/seed/1/2000/1000",
        ]
    );
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn manifest_on_disk_feeds_the_controller() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("gallery.toml");
    std::fs::write(
        &path,
        r#"
title = "Holiday"

[[item]]
category = "beach"
src = "https://picsum.photos/seed/a/600/400"

[[item]]
category = "city"
src = "photos/b.jpg"
alt = "Night street"

[[item]]
category = "beach"
src = "https://picsum.photos/seed/c/600/900"
"#,
    )
    .expect("write manifest");

    let catalog = catalog::load_from_path(&path).expect("load manifest");
    assert_eq!(catalog.title(), Some("Holiday"));
    assert_eq!(
        catalog.categories(),
        vec![Category::new("beach"), Category::new("city")]
    );

    let mut gallery = GalleryController::new(catalog.into_items(), RecordingSurface::default());
    gallery.apply_filter(only("beach"));
    gallery.open(ItemIndex::new(2));
    assert_eq!(gallery.step(1), Some(ItemIndex::new(0)));

    // Local paths have no size suffix and are displayed as-is.
    gallery.open(ItemIndex::new(1));
    let frame = gallery.surface().viewer().expect("viewer shown");
    assert_eq!(frame.asset.as_str(), "photos/b.jpg");
    assert_eq!(frame.alt, "Night street");
}

#[test]
fn embedded_demo_gallery_is_navigable() {
    let catalog = catalog::load_embedded().expect("demo manifest");
    let first_category = catalog.categories()[0].clone();
    let mut gallery = GalleryController::new(catalog.into_items(), RecordingSurface::default());

    gallery.apply_filter(CategoryFilter::Only(first_category.clone()));
    assert!(!gallery.visible().is_empty());
    assert!(gallery
        .visible()
        .iter()
        .all(|index| gallery.item(index).map(|i| i.category()) == Some(&first_category)));
}

#[test]
fn malformed_manifest_is_reported() {
    assert!(Catalog::parse("[[item]]\ncategory = 3\n", None).is_err());
}

// =============================================================================
// Configuration and localization
// =============================================================================

#[test]
fn language_from_saved_config_selects_locale() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("save config");
    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("save config");
    let loaded = config::load_from_path(&path).expect("load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("filter-all"), "Tout");
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn viewer_settings_round_trip_through_disk() {
    let dir = tempdir().expect("failed to create temp dir");

    let mut settings = Config::default();
    settings.viewer.swipe_threshold = Some(80.0);
    settings.viewer.full_resolution_width = Some(1920);
    settings.viewer.full_resolution_height = Some(1080);
    config::save_to_path(&settings, &dir.path().join("settings.toml")).expect("save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.viewer.swipe_threshold(), SwipeThreshold::new(80.0));
    assert_eq!(loaded.viewer.full_resolution(), FullResolution::new(1920, 1080));
}

#[test]
fn invalid_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("failed to create temp dir");
    std::fs::write(dir.path().join("settings.toml"), "viewer = [not toml").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    let key = warning.expect("warning key");

    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert!(!i18n.tr(&key).starts_with("MISSING"));
}
