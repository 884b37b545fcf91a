// ============================================================================
// SESSION TIMER - Cuenta atrás trabajo/descanso
// ============================================================================
// Un tick por segundo mientras está activa; se congela en cero y señala la
// finalización UNA sola vez. Sin persistencia: cerrar la página pierde el
// progreso.
// ============================================================================

use crate::config::TimerConfig;
use crate::error::SessionError;
use crate::models::session::{ChoiceOutcome, Mode, SessionChoice, SessionPhase};

/// Resultado de `start`/`tick`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer inactivo: el tick no hace nada
    Idle,
    /// Segundos restantes tras el tick
    Ticked(u32),
    /// Llegó a cero en este paso (solo se emite una vez por cuenta atrás)
    Completed,
}

#[derive(Clone, Debug)]
pub struct SessionTimer {
    config: TimerConfig,
    phase: SessionPhase,
    remaining_seconds: u32,
    active: bool,
}

impl SessionTimer {
    /// Timer en `Running(Work)` con la duración de trabajo, sin arrancar
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            phase: SessionPhase::Running(Mode::Work),
            remaining_seconds: config.work_seconds,
            active: false,
        }
    }

    /// Arrancar la cuenta atrás del modo actual con `duration` segundos.
    /// Con duración cero se completa inmediatamente.
    pub fn start(&mut self, duration: u32) -> TickOutcome {
        self.phase = SessionPhase::Running(self.phase.mode());
        self.remaining_seconds = duration;
        self.active = true;
        if duration == 0 {
            self.complete()
        } else {
            TickOutcome::Ticked(duration)
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.active {
            return TickOutcome::Idle;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.complete()
        } else {
            TickOutcome::Ticked(self.remaining_seconds)
        }
    }

    /// Detiene la cuenta actual, resetea a la duración fija del modo y reactiva
    pub fn switch_mode(&mut self, mode: Mode) -> TickOutcome {
        self.active = false;
        self.phase = SessionPhase::Running(mode);
        self.start(mode.duration_secs(&self.config))
    }

    /// Aplicar la elección del usuario tras completar
    pub fn choose(&mut self, choice: SessionChoice) -> Result<ChoiceOutcome, SessionError> {
        let outcome = self.phase.choose(choice)?;
        match outcome {
            ChoiceOutcome::Run(mode) => {
                self.switch_mode(mode);
            }
            ChoiceOutcome::Finish => {
                self.active = false;
            }
        }
        Ok(outcome)
    }

    /// Congelar sin completar (al desmontar la página)
    pub fn stop(&mut self) {
        self.active = false;
    }

    fn complete(&mut self) -> TickOutcome {
        self.active = false;
        self.phase = self.phase.complete();
        TickOutcome::Completed
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        self.phase.mode()
    }

    pub fn choices(&self) -> &'static [SessionChoice] {
        self.phase.choices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TimerConfig {
        TimerConfig { work_seconds: 10, break_seconds: 5, tick_ms: 1000 }
    }

    fn run_to_end(timer: &mut SessionTimer, duration: u32) -> usize {
        let mut completions = usize::from(timer.start(duration) == TickOutcome::Completed);
        for _ in 0..duration {
            if timer.tick() == TickOutcome::Completed {
                completions += 1;
            }
        }
        completions
    }

    #[test]
    fn ticking_duration_times_completes_exactly_once() {
        for duration in [0, 1, 2, 7, 60, 1500] {
            let mut timer = SessionTimer::new(config());
            assert_eq!(run_to_end(&mut timer, duration), 1, "duration {}", duration);
            assert_eq!(timer.remaining_seconds(), 0);
            assert!(!timer.is_active());
        }
    }

    #[test]
    fn extra_ticks_after_zero_are_idle() {
        let mut timer = SessionTimer::new(config());
        run_to_end(&mut timer, 3);
        for _ in 0..5 {
            assert_eq!(timer.tick(), TickOutcome::Idle);
        }
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.phase(), SessionPhase::AwaitingChoice(Mode::Work));
    }

    #[test]
    fn switch_mode_resets_to_fixed_constant() {
        let mut timer = SessionTimer::new(config());
        timer.start(10);
        timer.tick();
        timer.tick();
        assert_eq!(timer.remaining_seconds(), 8);

        timer.switch_mode(Mode::Break);
        assert_eq!(timer.remaining_seconds(), 5);
        assert!(timer.is_active());

        timer.tick();
        timer.switch_mode(Mode::Work);
        assert_eq!(timer.remaining_seconds(), 10);
        assert_eq!(timer.phase(), SessionPhase::Running(Mode::Work));
    }

    #[test]
    fn full_work_break_cycle() {
        let mut timer = SessionTimer::new(config());
        timer.switch_mode(Mode::Work);
        while timer.tick() != TickOutcome::Completed {}
        assert_eq!(timer.choices(), &[SessionChoice::StartBreak, SessionChoice::Finish]);

        assert_eq!(timer.choose(SessionChoice::StartBreak), Ok(ChoiceOutcome::Run(Mode::Break)));
        assert_eq!(timer.remaining_seconds(), 5);
        while timer.tick() != TickOutcome::Completed {}
        assert_eq!(timer.phase(), SessionPhase::AwaitingChoice(Mode::Break));

        assert_eq!(timer.choose(SessionChoice::Finish), Ok(ChoiceOutcome::Finish));
        assert!(!timer.is_active());
    }

    #[test]
    fn invalid_choice_leaves_timer_untouched() {
        let mut timer = SessionTimer::new(config());
        timer.start(10);
        timer.tick();
        assert!(timer.choose(SessionChoice::StartBreak).is_err());
        assert_eq!(timer.remaining_seconds(), 9);
        assert!(timer.is_active());
    }

    #[test]
    fn stop_freezes_without_completing() {
        let mut timer = SessionTimer::new(config());
        timer.start(4);
        timer.stop();
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining_seconds(), 4);
        assert_eq!(timer.phase(), SessionPhase::Running(Mode::Work));
    }
}
