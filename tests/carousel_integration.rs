//! Zodiac Carousel Integration Tests
//!
//! End-to-end tests driving the carousel controller the way the home
//! screen does: scroll streams, snaps, taps, key presses and picker
//! selections, with recording haptics, announcer and scroll surface.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use app_core::zodiac::{self, ZodiacSign};
use app_platform::{Announcer, HapticPattern, Haptics};
use app_ui::carousel::{
    CarouselConfig, CarouselController, CarouselPhase, ChangeReason, KeyDirection, ScrollRequest,
    ScrollSurface,
};
use app_ui::motion::MotionPreferences;
use chrono::NaiveDate;

/// Everything the collaborators observed, in order
#[derive(Debug, Default)]
struct Recorder {
    events: RefCell<Vec<(usize, usize, String, ChangeReason)>>,
    announcements: RefCell<Vec<String>>,
    haptics: RefCell<Vec<HapticPattern>>,
    scrolls: RefCell<Vec<ScrollRequest>>,
}

struct Speaker(Rc<Recorder>);
struct Vibrator(Rc<Recorder>);
struct Strip(Rc<Recorder>);

impl Announcer for Speaker {
    fn announce(&self, message: &str) {
        self.0.announcements.borrow_mut().push(message.to_string());
    }
}

impl Haptics for Vibrator {
    fn vibrate(&self, pattern: HapticPattern) {
        self.0.haptics.borrow_mut().push(pattern);
    }
}

impl ScrollSurface for Strip {
    fn scroll_to(&self, request: ScrollRequest) {
        self.0.scrolls.borrow_mut().push(request);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn zodiac_carousel(
    config: CarouselConfig,
) -> anyhow::Result<(CarouselController<ZodiacSign>, Rc<Recorder>)> {
    init_tracing();
    let recorder = Rc::new(Recorder::default());
    let sink = Rc::clone(&recorder);

    let mut carousel = CarouselController::new(zodiac::signs(), config)?
        .with_announcer(Speaker(Rc::clone(&recorder)))
        .with_haptics(Vibrator(Rc::clone(&recorder)))
        .with_scroll_surface(Strip(Rc::clone(&recorder)));
    carousel.on_active_change(move |event| {
        sink.events.borrow_mut().push((
            event.active_index,
            event.previous_index,
            event.active_item.id.clone(),
            event.reason,
        ));
    });

    Ok((carousel, recorder))
}

fn unit_config() -> CarouselConfig {
    CarouselConfig::default()
        .with_looping(true)
        .with_item_size(100.0, 0.0)
}

/// Drag from Aries to Taurus and let the strip settle
#[test]
fn test_drag_and_snap_scenario() -> anyhow::Result<()> {
    let (mut carousel, recorder) = zodiac_carousel(unit_config())?;
    let t0 = Instant::now();

    // First tick is below the hysteresis threshold but still announces Aries
    carousel.on_scroll_progress_at(0.05, t0);
    carousel.on_scroll_progress_at(1.0, t0 + Duration::from_millis(90));
    assert_eq!(carousel.phase(), CarouselPhase::Tracking);
    carousel.on_snap_complete(1);

    assert_eq!(carousel.active_index(), 1);
    assert_eq!(carousel.phase(), CarouselPhase::Idle);

    let events = recorder.events.borrow();
    assert_eq!(
        events.as_slice(),
        [
            (0, 0, "aries".to_string(), ChangeReason::Scroll),
            (1, 0, "taurus".to_string(), ChangeReason::Scroll),
        ]
    );
    assert_eq!(events.iter().filter(|e| e.0 == 1).count(), 1);

    assert_eq!(
        recorder.announcements.borrow().as_slice(),
        ["Aries selected, 1 of 12", "Taurus selected, 2 of 12"]
    );
    assert_eq!(recorder.haptics.borrow().as_slice(), [HapticPattern::Selection]);
    assert!(recorder.scrolls.borrow().is_empty());
    Ok(())
}

/// Fast jittery scrolling never produces more than one change per window
#[test]
fn test_jitter_is_filtered() -> anyhow::Result<()> {
    let (mut carousel, recorder) = zodiac_carousel(unit_config())?;
    let t0 = Instant::now();

    carousel.on_scroll_progress_at(0.0, t0);
    for (i, progress) in [0.45, 0.55, 0.48, 0.52, 0.6].iter().enumerate() {
        carousel.on_scroll_progress_at(*progress, t0 + Duration::from_millis(10 * (i as u64 + 1)));
    }
    assert_eq!(recorder.events.borrow().len(), 1);

    // Once the window has passed the strip may move on
    carousel.on_scroll_progress_at(0.6, t0 + Duration::from_millis(120));
    assert_eq!(carousel.active_index(), 1);
    assert_eq!(recorder.events.borrow().len(), 2);
    Ok(())
}

/// Picking a sign from a dialog scrolls the strip without a duplicate snap event
#[test]
fn test_picker_selection_suppresses_snap() -> anyhow::Result<()> {
    let (mut carousel, recorder) = zodiac_carousel(unit_config())?;

    carousel.set_active_index(5);
    {
        let scrolls = recorder.scrolls.borrow();
        assert_eq!(scrolls.len(), 1);
        assert_eq!(scrolls[0].index, 5);
        assert_eq!(scrolls[0].steps, 5);
        assert!(scrolls[0].animated);
    }

    carousel.on_snap_complete(5);

    assert_eq!(
        recorder.events.borrow().as_slice(),
        [(5, 5, "virgo".to_string(), ChangeReason::Programmatic)]
    );
    assert_eq!(recorder.haptics.borrow().as_slice(), [HapticPattern::Selection]);
    assert!(!carousel.has_pending_external_update());
    Ok(())
}

/// Tapping an item far around the loop scrolls backwards
#[test]
fn test_tap_takes_shortest_path() -> anyhow::Result<()> {
    let (mut carousel, recorder) = zodiac_carousel(unit_config().with_initial_index(1))?;

    carousel.on_item_tap(11);
    carousel.on_snap_complete(11);

    let scrolls = recorder.scrolls.borrow();
    assert_eq!(scrolls.len(), 1);
    assert_eq!(scrolls[0].steps, -2);
    assert_eq!(
        recorder.events.borrow().as_slice(),
        [(11, 11, "pisces".to_string(), ChangeReason::Click)]
    );
    assert_eq!(
        recorder.haptics.borrow().as_slice(),
        [HapticPattern::ImpactLight, HapticPattern::Selection]
    );
    Ok(())
}

/// Keyboard navigation wraps around and announces each sign
#[test]
fn test_keyboard_navigation() -> anyhow::Result<()> {
    let (mut carousel, recorder) = zodiac_carousel(unit_config())?;

    assert_eq!(carousel.on_keyboard_navigate(KeyDirection::Left), 11);
    assert_eq!(carousel.on_keyboard_navigate(KeyDirection::Home), 0);
    assert_eq!(carousel.on_keyboard_navigate(KeyDirection::End), 11);

    assert_eq!(
        recorder.announcements.borrow().as_slice(),
        [
            "Pisces selected, 12 of 12",
            "Aries selected, 1 of 12",
            "Pisces selected, 12 of 12",
        ]
    );
    // The caller drives the scroll for keyboard navigation
    assert!(recorder.scrolls.borrow().is_empty());
    Ok(())
}

/// A finite carousel clamps at both ends
#[test]
fn test_finite_carousel_clamps() -> anyhow::Result<()> {
    let (mut carousel, recorder) = zodiac_carousel(unit_config().with_looping(false))?;
    let t0 = Instant::now();

    carousel.on_scroll_progress_at(-3.0, t0);
    assert_eq!(carousel.active_index(), 0);
    carousel.on_scroll_progress_at(20.0, t0 + Duration::from_millis(100));
    assert_eq!(carousel.active_index(), 11);
    assert_eq!(carousel.on_keyboard_navigate(KeyDirection::Right), 11);

    assert_eq!(recorder.events.borrow().len(), 2);
    Ok(())
}

/// Reduced motion turns scroll requests into immediate jumps
#[test]
fn test_reduced_motion() -> anyhow::Result<()> {
    let (carousel, recorder) = zodiac_carousel(unit_config())?;
    let mut carousel = carousel.with_motion_preferences(MotionPreferences::reduced());

    carousel.on_item_tap(3);
    let scrolls = recorder.scrolls.borrow();
    assert!(!scrolls[0].animated);
    assert_eq!(scrolls[0].duration_ms, 0);

    let visuals = carousel.item_visuals(4, 3.0);
    assert_eq!(visuals.scale, 1.0);
    Ok(())
}

/// The initial sign can be seeded from a birth date
#[test]
fn test_initial_sign_from_birth_date() -> anyhow::Result<()> {
    let birthday = NaiveDate::from_ymd_opt(1992, 8, 14).ok_or_else(|| anyhow::anyhow!("bad date"))?;
    let index = zodiac::index_for_date(birthday);

    let (mut carousel, recorder) = zodiac_carousel(unit_config().with_initial_index(index))?;
    assert_eq!(carousel.active_item().name, "Leo");

    carousel.on_scroll_progress_at(index as f32, Instant::now());
    assert_eq!(
        recorder.events.borrow().as_slice(),
        [(4, 4, "leo".to_string(), ChangeReason::Scroll)]
    );
    Ok(())
}

/// Configuration loaded from JSON drives the controller
#[test]
fn test_config_from_json() -> anyhow::Result<()> {
    let config = CarouselConfig::from_json(
        r#"{"loop": false, "initial_index": 2, "debounce_ms": 40, "item_width": 80.0, "item_spacing": 20.0}"#,
    )?;
    let (carousel, _) = zodiac_carousel(config)?;

    assert!(!carousel.is_looping());
    assert_eq!(carousel.active_index(), 2);
    assert_eq!(carousel.config().item_stride(), 100.0);

    let err = CarouselController::new(Vec::<ZodiacSign>::new(), CarouselConfig::default())
        .unwrap_err();
    assert_eq!(err.to_string(), "Carousel requires at least one item");
    Ok(())
}
