use crate::config::TimerConfig;
use crate::error::SessionError;

/// Modo de la cuenta atrás
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Work,
    Break,
}

impl Mode {
    /// Duración fija del modo según la configuración
    pub fn duration_secs(self, config: &TimerConfig) -> u32 {
        match self {
            Mode::Work => config.work_seconds,
            Mode::Break => config.break_seconds,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Work => "work",
            Mode::Break => "break",
        }
    }
}

/// Elección del usuario al terminar una cuenta atrás
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionChoice {
    StartBreak,
    WorkAgain,
    Finish,
}

impl SessionChoice {
    pub fn label(self) -> &'static str {
        match self {
            SessionChoice::StartBreak => "Start a Break",
            SessionChoice::WorkAgain => "Work Again",
            SessionChoice::Finish => "Finish",
        }
    }
}

/// Resultado de aplicar una elección válida
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// Reiniciar la cuenta atrás en este modo
    Run(Mode),
    /// Terminal: salir de la página de sesión
    Finish,
}

/// Fase de la página de sesión
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Running(Mode),
    AwaitingChoice(Mode),
}

impl Default for SessionPhase {
    fn default() -> Self {
        SessionPhase::Running(Mode::Work)
    }
}

impl SessionPhase {
    pub fn mode(self) -> Mode {
        match self {
            SessionPhase::Running(mode) | SessionPhase::AwaitingChoice(mode) => mode,
        }
    }

    /// La cuenta atrás llegó a cero
    pub fn complete(self) -> Self {
        SessionPhase::AwaitingChoice(self.mode())
    }

    /// Opciones ofrecidas en esta fase (vacío mientras corre)
    pub fn choices(self) -> &'static [SessionChoice] {
        match self {
            SessionPhase::Running(_) => &[],
            SessionPhase::AwaitingChoice(Mode::Work) => &[SessionChoice::StartBreak, SessionChoice::Finish],
            SessionPhase::AwaitingChoice(Mode::Break) => &[SessionChoice::WorkAgain, SessionChoice::Finish],
        }
    }

    /// Aplicar una elección; las transiciones no alcanzables se rechazan
    pub fn choose(self, choice: SessionChoice) -> Result<ChoiceOutcome, SessionError> {
        match (self, choice) {
            (SessionPhase::AwaitingChoice(Mode::Work), SessionChoice::StartBreak) => Ok(ChoiceOutcome::Run(Mode::Break)),
            (SessionPhase::AwaitingChoice(Mode::Break), SessionChoice::WorkAgain) => Ok(ChoiceOutcome::Run(Mode::Work)),
            (SessionPhase::AwaitingChoice(_), SessionChoice::Finish) => Ok(ChoiceOutcome::Finish),
            (phase, choice) => Err(SessionError::InvalidChoice { phase, choice }),
        }
    }
}
