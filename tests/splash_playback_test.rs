use std::collections::HashMap;
use std::time::Duration;

use brick_surface::core::{FieldSnapshot, MemoryScoreStore, RecordingPacer, SplashState};
use brick_surface::term::{MemorySink, RenderSurface};

type TestSurface = RenderSurface<MemorySink, MemoryScoreStore>;

/// Frame `i` lights column `i` of the top row.
fn frames(n: u16) -> Vec<FieldSnapshot> {
    (0..n)
        .map(|i| FieldSnapshot::empty().with_cell(i, 0, 1))
        .collect()
}

fn surface(pacer: &RecordingPacer) -> TestSurface {
    let mut source: HashMap<String, Vec<FieldSnapshot>> = HashMap::new();
    source.insert("attract".to_string(), frames(3));
    source.insert("blank".to_string(), Vec::new());

    let mut surface = RenderSurface::new(0, 0, MemorySink::new(60, 24), MemoryScoreStore::new())
        .unwrap()
        .with_pacer(pacer.clone())
        .with_splash_source(source);
    surface.sink_mut().reset_writes();
    surface
}

fn lit_column(surface: &TestSurface) -> Option<u16> {
    (0..10).find(|&c| surface.sink().frame().get(2 + c * 2, 1).unwrap().ch == '▣')
}

#[test]
fn attract_splash_draws_each_frame_then_stops() {
    let pacer = RecordingPacer::new();
    let mut surface = surface(&pacer);
    surface.set_splash("attract", 5).unwrap();
    assert!(surface.is_splash_playing());

    for i in 0..3 {
        surface.render(None).unwrap();
        assert_eq!(lit_column(&surface), Some(i));
        assert_eq!(pacer.delays().len(), i as usize + 1);
    }
    assert_eq!(pacer.delays(), vec![Duration::from_millis(5); 3]);

    let writes = surface.sink().writes();
    surface.render(None).unwrap();
    assert_eq!(surface.sink().writes(), writes);
    assert_eq!(pacer.delays().len(), 3);
    assert_eq!(surface.splash().state(), SplashState::Stopped);
}

#[test]
fn playing_splash_overrides_live_field_and_skips_status() {
    let pacer = RecordingPacer::new();
    let mut surface = surface(&pacer);
    surface.init_game("Tetris");
    surface.set_score(500);
    surface.set_splash("attract", 1).unwrap();

    let live = FieldSnapshot::from_fn(|_, _| true);
    surface.render(Some(&live)).unwrap();

    assert_eq!(lit_column(&surface), Some(0));
    assert_eq!(surface.sink().frame().get(4, 1).unwrap().ch, ' ');
    assert_eq!(surface.high_score(), 0);
    assert!(surface.store().writes().is_empty());
}

#[test]
fn live_field_renders_once_splash_has_finished() {
    let pacer = RecordingPacer::new();
    let mut surface = surface(&pacer);
    surface.set_splash("attract", 1).unwrap();
    for _ in 0..4 {
        surface.render(None).unwrap();
    }
    assert!(!surface.is_splash_playing());

    let live = FieldSnapshot::from_fn(|_, _| true);
    surface.render(Some(&live)).unwrap();
    assert_eq!(surface.sink().frame().get(20, 20).unwrap().ch, '▣');
    assert_eq!(pacer.delays().len(), 3);
}

#[test]
fn render_none_without_frames_is_a_silent_no_op() {
    let pacer = RecordingPacer::new();
    let mut surface = surface(&pacer);

    surface.render(None).unwrap();
    surface.start_splash();
    surface.render(None).unwrap();

    assert_eq!(surface.sink().writes(), 0);
    assert!(pacer.delays().is_empty());
    assert!(!surface.is_splash_playing());
}

#[test]
fn start_splash_replays_from_the_beginning() {
    let pacer = RecordingPacer::new();
    let mut surface = surface(&pacer);
    surface.set_splash("attract", 2).unwrap();
    surface.render(None).unwrap();
    surface.render(None).unwrap();
    assert_eq!(surface.splash().position(), 2);

    surface.start_splash();
    assert_eq!(surface.splash().position(), 0);
    surface.render(None).unwrap();
    assert_eq!(lit_column(&surface), Some(0));
}

#[test]
fn stop_splash_hands_rendering_back_to_the_live_field() {
    let pacer = RecordingPacer::new();
    let mut surface = surface(&pacer);
    surface.set_splash("attract", 2).unwrap();
    surface.render(None).unwrap();

    surface.stop_splash();
    assert_eq!(surface.splash().position(), 0);

    surface.render(Some(&FieldSnapshot::empty())).unwrap();
    assert_eq!(lit_column(&surface), None);
    assert_eq!(pacer.delays().len(), 1);
}

#[test]
fn empty_resource_stops_on_first_step() {
    let pacer = RecordingPacer::new();
    let mut surface = surface(&pacer);
    surface.set_splash("blank", 5).unwrap();
    assert!(surface.is_splash_playing());

    surface.render(None).unwrap();
    assert!(!surface.is_splash_playing());
    assert_eq!(surface.sink().writes(), 0);
}

#[test]
fn missing_resource_is_reported_and_keeps_previous_frames() {
    let pacer = RecordingPacer::new();
    let mut surface = surface(&pacer);
    surface.set_splash("attract", 5).unwrap();
    surface.stop_splash();

    let err = surface.set_splash("nope", 9).unwrap_err();
    assert!(format!("{err:#}").contains("nope"));
    assert!(!surface.is_splash_playing());
    assert_eq!(surface.splash().frame_count(), 3);
    assert_eq!(surface.splash().frame_delay(), Duration::from_millis(5));
}

#[test]
fn default_splash_delay_is_twenty_millis() {
    let pacer = RecordingPacer::new();
    let mut surface = surface(&pacer);
    surface.set_splash_default("attract").unwrap();
    surface.render(None).unwrap();
    assert_eq!(pacer.delays(), vec![Duration::from_millis(20)]);
}
