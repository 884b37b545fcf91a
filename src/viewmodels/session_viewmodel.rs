// ============================================================================
// SESSION VIEWMODEL - Cuenta atrás + carrusel + alarma
// ============================================================================
// Dueño de los recursos de la página de sesión: dos Interval (tick del timer y
// tick del carrusel) y el audio de la alarma. unmount() los suelta todos.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::{TimerConfig, CONFIG};
use crate::error::SessionError;
use crate::models::route::Route;
use crate::models::session::{ChoiceOutcome, Mode, SessionChoice, SessionPhase};
use crate::services::audio::{play_logged, AudioController};
use crate::services::navigation;
use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
use crate::state::{ImageCarousel, SessionTimer, TickOutcome};
use crate::utils::{carousel_frames, format_countdown};

/// Posición del Interval de la cuenta atrás en `intervals`
const COUNTDOWN_SLOT: usize = 0;

pub struct SessionViewModel {
    task: String,
    state: AppState,
    tick_ms: u32,
    timer: Rc<RefCell<SessionTimer>>,
    carousel: Rc<RefCell<ImageCarousel>>,
    alarm: Rc<AudioController>,
    intervals: RefCell<Vec<Interval>>,
}

impl SessionViewModel {
    /// Montar la página: arranca en Running(Work) y programa los ticks
    pub fn mount(state: &AppState, task: String) -> Result<Rc<Self>, JsValue> {
        Self::mount_with(state, task, CONFIG.timer_config)
    }

    /// Igual que `mount` con duraciones explícitas
    pub fn mount_with(state: &AppState, task: String, config: TimerConfig) -> Result<Rc<Self>, JsValue> {
        let alarm = Rc::new(AudioController::with_source(&CONFIG.alarm_sound_url)?);
        let timer = Rc::new(RefCell::new(SessionTimer::new(config)));
        let carousel = Rc::new(RefCell::new(ImageCarousel::new(carousel_frames())));

        log::info!("🍓 [SESSION] Montando sesión para tarea: {:?}", task);

        let countdown = countdown_interval(state, &timer, &alarm, config.tick_ms);

        // Tick del carrusel (independiente del timer)
        let carousel_tick = {
            let state = state.clone();
            let carousel = carousel.clone();
            Interval::new(CONFIG.carousel_config.tick_ms, move || {
                carousel.borrow_mut().advance();
                state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::Carousel));
            })
        };

        let vm = Rc::new(Self {
            task,
            state: state.clone(),
            tick_ms: config.tick_ms,
            timer: timer.clone(),
            carousel,
            alarm: alarm.clone(),
            intervals: RefCell::new(vec![countdown, carousel_tick]),
        });

        let outcome = timer.borrow_mut().start(Mode::Work.duration_secs(&config));
        handle_outcome(state, &alarm, outcome);

        Ok(vm)
    }

    /// Elección del usuario en AwaitingChoice. Siempre corta la alarma primero.
    pub fn choose(&self, state: &AppState, choice: SessionChoice) -> Result<(), SessionError> {
        self.alarm.stop();
        let outcome = self.timer.borrow_mut().choose(choice)?;
        log::info!("🍓 [SESSION] Elección {:?} -> {:?}", choice, outcome);
        match outcome {
            ChoiceOutcome::Run(_) => {
                self.rearm_countdown();
                state.notify_subscribers();
            }
            ChoiceOutcome::Finish => navigation::navigate(state, Route::TaskEntry),
        }
        Ok(())
    }

    /// Nueva cuenta atrás: el primer tick llega un periodo completo después
    fn rearm_countdown(&self) {
        let mut intervals = self.intervals.borrow_mut();
        if intervals.is_empty() {
            return;
        }
        let fresh = countdown_interval(&self.state, &self.timer, &self.alarm, self.tick_ms);
        // El Interval anterior se cancela al soltarlo
        intervals[COUNTDOWN_SLOT] = fresh;
    }

    /// Botón atrás: salir sin completar
    pub fn leave(&self, state: &AppState) {
        self.alarm.stop();
        navigation::navigate(state, Route::TaskEntry);
    }

    /// Soltar timers y cortar la alarma (idempotente)
    pub fn unmount(&self) {
        let dropped = {
            let mut intervals = self.intervals.borrow_mut();
            let count = intervals.len();
            intervals.clear();
            count
        };
        self.timer.borrow_mut().stop();
        self.alarm.stop();
        if dropped > 0 {
            log::info!("🧹 [SESSION] Desmontada: {} timers cancelados", dropped);
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.timer.borrow().remaining_seconds()
    }

    pub fn countdown_label(&self) -> String {
        format_countdown(self.remaining_seconds())
    }

    pub fn phase(&self) -> SessionPhase {
        self.timer.borrow().phase()
    }

    pub fn choices(&self) -> &'static [SessionChoice] {
        self.timer.borrow().choices()
    }

    pub fn current_frame(&self) -> Option<String> {
        self.carousel.borrow().current().map(str::to_string)
    }

    pub fn alarm(&self) -> &AudioController {
        &self.alarm
    }

    pub fn active_timers(&self) -> usize {
        self.intervals.borrow().len()
    }
}

impl Drop for SessionViewModel {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Tick de la cuenta atrás
fn countdown_interval(
    state: &AppState,
    timer: &Rc<RefCell<SessionTimer>>,
    alarm: &Rc<AudioController>,
    tick_ms: u32,
) -> Interval {
    let state = state.clone();
    let timer = timer.clone();
    let alarm = alarm.clone();
    Interval::new(tick_ms, move || {
        let outcome = timer.borrow_mut().tick();
        handle_outcome(&state, &alarm, outcome);
    })
}

/// Reaccionar al resultado de un tick: texto nuevo o fin de la cuenta atrás
fn handle_outcome(state: &AppState, alarm: &Rc<AudioController>, outcome: TickOutcome) {
    match outcome {
        TickOutcome::Idle => {}
        TickOutcome::Ticked(_) => {
            state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::Countdown));
        }
        TickOutcome::Completed => {
            log::info!("⏰ [SESSION] Cuenta atrás terminada, sonando alarma");
            alarm.rewind();
            let alarm = alarm.clone();
            spawn_local(async move {
                play_logged(&alarm, "SESSION").await;
            });
            // Cambio de fase: aparecen los botones de elección
            state.notify_subscribers();
        }
    }
}
