//! Escenarios de DOM en navegador: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_test::*;
use web_sys::{Element, Event};

use chronoberry::app::App;
use chronoberry::config::{TimerConfig, TrackSource, CONFIG};
use chronoberry::dom::{create_element, document, patch_player, EventListener};
use chronoberry::models::{SessionChoice, Track};
use chronoberry::models::route::Route;
use chronoberry::error::CatalogError;
use chronoberry::services::{navigation, AudioController, CatalogClient};
use chronoberry::state::app_state::AppState;
use chronoberry::state::player_state::{PlayerState, TrackSourceState};
use chronoberry::utils::{fixed_tracks, CATALOG_ERROR_MESSAGE};
use chronoberry::viewmodels::{PlayerViewModel, SessionViewModel};
use gloo_timers::future::TimeoutFuture;
use chronoberry::views::{render_music_player, render_work_session};

wasm_bindgen_test_configure!(run_in_browser);

fn text_of(root: &Element, selector: &str) -> Option<String> {
    root.query_selector(selector).ok().flatten().and_then(|e| e.text_content())
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).map(|l| l.length()).unwrap_or(0)
}

fn session_state(task: &str, config: TimerConfig) -> (AppState, Rc<SessionViewModel>) {
    let state = AppState::new(Route::WorkSession { task: task.to_string() });
    let vm = SessionViewModel::mount_with(&state, task.to_string(), config).unwrap();
    *state.session_vm.borrow_mut() = Some(vm.clone());
    (state, vm)
}

/// Puerto cerrado: el fetch falla con error de red
const UNREACHABLE_CATALOG: &str = "http://127.0.0.1:9/tracks";

fn player_vm(state: &AppState, source: TrackSource) -> Rc<PlayerViewModel> {
    let generation = state.bump_mount_generation();
    let client = CatalogClient::with_url(UNREACHABLE_CATALOG);
    PlayerViewModel::mount_with(state, generation, source, client, 50).unwrap()
}

async fn settled_source(vm: &PlayerViewModel) -> TrackSourceState {
    for _ in 0..50 {
        if vm.snapshot().source != TrackSourceState::Loading {
            break;
        }
        TimeoutFuture::new(100).await;
    }
    vm.snapshot().source
}

fn cover_tracks() -> Vec<Track> {
    let mut tracks = fixed_tracks();
    tracks.truncate(3);
    tracks[0].image = Some("/covers/a.jpg".to_string());
    tracks[1].image = Some("/covers/b.jpg".to_string());
    tracks
}

#[wasm_bindgen_test]
fn task_survives_navigation_encoding() {
    for task in ["Write report", "Leer & escribir 100% ✓", "a=b?c#d"] {
        let href = navigation::href(&Route::WorkSession { task: task.to_string() });
        let (path, search) = href.split_once('?').unwrap();
        assert_eq!(path, "/worksession");
        assert!(!search.contains(' '));

        let decoded = navigation::task_from_search(&format!("?{}", search));
        assert_eq!(
            Route::from_parts(path, decoded),
            Route::WorkSession { task: task.to_string() }
        );
    }
}

#[wasm_bindgen_test]
fn session_page_shows_task_verbatim() {
    let config = TimerConfig { work_seconds: 90, break_seconds: 30, tick_ms: 1000 };
    let (state, vm) = session_state("Write report", config);

    let page = render_work_session(&state).unwrap();
    assert_eq!(text_of(&page, "#session-task").as_deref(), Some("Write report"));
    assert_eq!(text_of(&page, "#countdown").as_deref(), Some("01:30"));
    assert_eq!(count(&page, "#session-choices button"), 0);

    vm.unmount();
}

#[wasm_bindgen_test]
fn elapsed_work_offers_exactly_two_choices() {
    let config = TimerConfig { work_seconds: 0, break_seconds: 5, tick_ms: 1000 };
    let (state, vm) = session_state("Write report", config);

    let page = render_work_session(&state).unwrap();
    let labels: Vec<String> = {
        let buttons = page.query_selector_all("#session-choices button").unwrap();
        (0..buttons.length())
            .filter_map(|i| buttons.item(i))
            .filter_map(|n| n.text_content())
            .collect()
    };
    assert_eq!(labels, vec!["Start a Break".to_string(), "Finish".to_string()]);
    assert_eq!(text_of(&page, "#countdown").as_deref(), Some("00:00"));

    vm.unmount();
}

#[wasm_bindgen_test]
fn unmount_cancels_timers() {
    let config = TimerConfig { work_seconds: 60, break_seconds: 5, tick_ms: 1000 };
    let (_state, vm) = session_state("x", config);
    assert_eq!(vm.active_timers(), 2);
    vm.unmount();
    assert_eq!(vm.active_timers(), 0);
    vm.unmount();
    assert_eq!(vm.active_timers(), 0);
}

#[wasm_bindgen_test]
fn failed_catalog_shows_message_without_controls() {
    let state = AppState::default();
    let player = PlayerState::new(TrackSourceState::Failed(CATALOG_ERROR_MESSAGE.to_string()), 50);

    let view = render_music_player(&state, &player).unwrap();
    assert_eq!(text_of(&view, "#player-status").as_deref(), Some(CATALOG_ERROR_MESSAGE));
    assert_eq!(count(&view, "button"), 0);
    assert_eq!(count(&view, "input"), 0);
}

#[wasm_bindgen_test]
fn ready_player_renders_controls() {
    let state = AppState::default();
    let player = PlayerState::new(TrackSourceState::Ready(fixed_tracks()), 50);

    let view = render_music_player(&state, &player).unwrap();
    assert_eq!(count(&view, "button"), 3);
    assert_eq!(text_of(&view, "#player-track-name").as_deref(), Some("Lofi Study Music 1"));
    assert_eq!(text_of(&view, "#player-counter").as_deref(), Some("1 / 8"));
    assert_eq!(text_of(&view, "#player-volume-label").as_deref(), Some("50%"));
}

#[wasm_bindgen_test]
fn loading_player_has_no_controls() {
    let state = AppState::default();
    let player = PlayerState::new(TrackSourceState::Loading, 50);
    let view = render_music_player(&state, &player).unwrap();
    assert_eq!(count(&view, "button"), 0);
}

#[wasm_bindgen_test]
fn event_listener_is_removed_on_drop() {
    let target = create_element("div").unwrap();
    let hits = Rc::new(Cell::new(0));

    let listener = {
        let hits = hits.clone();
        EventListener::new(&target, "ping", move |_e: Event| hits.set(hits.get() + 1)).unwrap()
    };
    assert_eq!(listener.event_type(), "ping");
    target.dispatch_event(&Event::new("ping").unwrap()).unwrap();
    assert_eq!(hits.get(), 1);

    drop(listener);
    target.dispatch_event(&Event::new("ping").unwrap()).unwrap();
    assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
fn app_renders_landing_and_task_entry() {
    let root = create_element("div").unwrap();
    let mut app = App::with_root(root.clone(), Route::Landing).unwrap();

    app.render().unwrap();
    assert_eq!(text_of(&root, ".landing-title").as_deref(), Some("ChronoBerry"));

    app.state().set_route(Route::TaskEntry);
    app.render().unwrap();
    assert!(text_of(&root, ".task-title").unwrap().contains("SET YOUR TASK"));
    let start = root.query_selector("#start-timer-btn").unwrap().unwrap();
    assert!(start.has_attribute("disabled"));
    assert_eq!(count(&root, ".btn-back"), 1);
}

#[wasm_bindgen_test]
fn audio_source_swaps_and_unloads() {
    let audio = AudioController::with_source("/audio/audio-ring.mp3").unwrap();
    assert!(audio.source().ends_with("/audio/audio-ring.mp3"));
    assert!(audio.is_paused());

    audio.set_source("/audio/other.mp3");
    assert!(audio.source().ends_with("/audio/other.mp3"));

    audio.unload();
    assert!(audio.source().is_empty());
}

#[wasm_bindgen_test]
async fn unreachable_catalog_is_an_error() {
    let client = CatalogClient::with_url("http://127.0.0.1:9/tracks");
    assert_eq!(client.request_url(), "http://127.0.0.1:9/tracks");

    let result = client.fetch_tracks().await;
    assert!(matches!(result, Err(CatalogError::Network(_))));
}

#[wasm_bindgen_test]
async fn break_countdown_gets_a_full_first_period() {
    let config = TimerConfig { work_seconds: 0, break_seconds: 5, tick_ms: 400 };
    let (state, vm) = session_state("x", config);

    TimeoutFuture::new(300).await;
    vm.choose(&state, SessionChoice::StartBreak).unwrap();
    assert_eq!(vm.remaining_seconds(), 5);
    assert_eq!(vm.active_timers(), 2);

    // El Interval del montaje habría disparado a los 400 ms
    TimeoutFuture::new(200).await;
    assert_eq!(vm.remaining_seconds(), 5);

    TimeoutFuture::new(300).await;
    assert_eq!(vm.remaining_seconds(), 4);

    vm.unmount();
}

#[wasm_bindgen_test]
async fn choice_and_unmount_silence_the_alarm() {
    let config = TimerConfig { work_seconds: 0, break_seconds: 60, tick_ms: 1000 };
    let (state, vm) = session_state("x", config);
    assert!(vm.alarm().source().ends_with(&CONFIG.alarm_sound_url));

    TimeoutFuture::new(50).await;
    vm.choose(&state, SessionChoice::StartBreak).unwrap();
    assert!(vm.alarm().is_paused());
    assert_eq!(vm.alarm().current_time(), 0.0);

    vm.unmount();
    assert!(vm.alarm().is_paused());
    assert_eq!(vm.alarm().current_time(), 0.0);
}

#[wasm_bindgen_test]
fn skip_and_ended_share_the_same_path() {
    let state = AppState::default();
    let vm = player_vm(&state, TrackSource::Fixed);
    let tracks = fixed_tracks();
    assert_eq!(vm.audio().source(), tracks[0].audio);

    vm.next(&state);
    assert_eq!(vm.audio().source(), tracks[1].audio);
    assert!(vm.audio().is_paused());

    vm.previous(&state);
    vm.previous(&state);
    assert_eq!(vm.snapshot().playback.current_track_index, 7);
    assert_eq!(vm.audio().source(), tracks[7].audio);

    // Fin natural de la última pista: vuelve a la primera
    vm.audio().dispatch(&Event::new("ended").unwrap()).unwrap();
    assert_eq!(vm.snapshot().playback.current_track_index, 0);
    assert_eq!(vm.audio().source(), tracks[0].audio);

    vm.unmount();
    vm.audio().dispatch(&Event::new("ended").unwrap()).unwrap();
    assert_eq!(vm.snapshot().playback.current_track_index, 0);
}

#[wasm_bindgen_test]
async fn unreachable_catalog_player_shows_failure_without_controls() {
    let state = AppState::default();
    let vm = player_vm(&state, TrackSource::Catalog);
    assert_eq!(vm.snapshot().source, TrackSourceState::Loading);

    let source = settled_source(&vm).await;
    assert_eq!(source, TrackSourceState::Failed(CATALOG_ERROR_MESSAGE.to_string()));

    let view = render_music_player(&state, &vm.snapshot()).unwrap();
    assert_eq!(text_of(&view, "#player-status").as_deref(), Some(CATALOG_ERROR_MESSAGE));
    assert_eq!(count(&view, "button"), 0);
    vm.unmount();
}

#[wasm_bindgen_test]
async fn catalog_result_of_previous_mount_is_dropped() {
    let state = AppState::default();
    let vm = player_vm(&state, TrackSource::Catalog);
    state.bump_mount_generation();

    TimeoutFuture::new(1500).await;
    assert_eq!(vm.snapshot().source, TrackSourceState::Loading);
    vm.unmount();
}

#[wasm_bindgen_test]
fn player_patch_keeps_slider_and_swaps_cover() {
    let state = AppState::default();
    let mut player = PlayerState::new(TrackSourceState::Ready(cover_tracks()), 50);
    let view = render_music_player(&state, &player).unwrap();
    let body = document().unwrap().body().unwrap();
    body.append_child(&view).unwrap();

    let slider = view.query_selector("#player-volume").unwrap().unwrap();
    let cover = view.query_selector("#player-cover").unwrap().unwrap();
    assert_eq!(cover.get_attribute("src").as_deref(), Some("/covers/a.jpg"));

    player.set_volume(80);
    player.next();
    patch_player(&player).unwrap();
    assert!(slider.is_connected());
    assert_eq!(text_of(&view, "#player-volume-label").as_deref(), Some("80%"));
    assert_eq!(cover.get_attribute("src").as_deref(), Some("/covers/b.jpg"));
    assert!(!cover.has_attribute("hidden"));

    // Pista sin portada: se oculta
    player.next();
    patch_player(&player).unwrap();
    assert!(cover.has_attribute("hidden"));
    assert_eq!(text_of(&view, "#player-counter").as_deref(), Some("3 / 3"));

    body.remove_child(&view).unwrap();
}
