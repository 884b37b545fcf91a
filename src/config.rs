/// Origen de las pistas del reproductor de música
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackSource {
    /// Lista fija compilada en el binario
    Fixed,
    /// Catálogo remoto (Jamendo), se carga una sola vez al montar
    Catalog,
}

impl TrackSource {
    /// Parsear desde el valor de `TRACK_SOURCE` (desconocido => Fixed)
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "catalog" | "remote" | "jamendo" => TrackSource::Catalog,
            _ => TrackSource::Fixed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub enable_logging: bool,
    pub timer_config: TimerConfig,
    pub carousel_config: CarouselConfig,
    pub player_config: PlayerConfig,
    pub alarm_sound_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            timer_config: TimerConfig::default(),
            carousel_config: CarouselConfig::default(),
            player_config: PlayerConfig::default(),
            alarm_sound_url: "/audio/audio-ring.mp3".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TimerConfig {
    pub work_seconds: u32,
    pub break_seconds: u32,
    pub tick_ms: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_seconds: 25 * 60,
            break_seconds: 5 * 60,
            tick_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CarouselConfig {
    pub tick_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { tick_ms: 800 }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub enabled: bool,
    pub source: TrackSource,
    pub catalog_url: String,
    pub catalog_client_id: String,
    pub catalog_page_size: u32,
    pub default_volume: u8,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            source: TrackSource::Fixed,
            catalog_url: "https://api.jamendo.com/v3.0/tracks/".to_string(),
            catalog_client_id: "56d30c95".to_string(),
            catalog_page_size: 10,
            default_volume: 50,
        }
    }
}

/// Parsear un valor opcional de entorno, cayendo al default si falta o es inválido
fn parse_or<T: std::str::FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();
        Self::from_values(|key| match key {
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "WORK_SECONDS" => option_env!("WORK_SECONDS"),
            "BREAK_SECONDS" => option_env!("BREAK_SECONDS"),
            "CAROUSEL_TICK_MS" => option_env!("CAROUSEL_TICK_MS"),
            "TRACK_SOURCE" => option_env!("TRACK_SOURCE"),
            "MUSIC_PLAYER_ENABLED" => option_env!("MUSIC_PLAYER_ENABLED"),
            "CATALOG_URL" => option_env!("CATALOG_URL"),
            "CATALOG_CLIENT_ID" => option_env!("CATALOG_CLIENT_ID"),
            "CATALOG_PAGE_SIZE" => option_env!("CATALOG_PAGE_SIZE"),
            "ALARM_SOUND_URL" => option_env!("ALARM_SOUND_URL"),
            _ => None,
        }, defaults)
    }

    /// Construir la configuración a partir de un lookup de claves
    pub fn from_values<'a, F>(lookup: F, defaults: AppConfig) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let timer_defaults = defaults.timer_config;
        let player_defaults = defaults.player_config;

        Self {
            enable_logging: parse_or(lookup("ENABLE_LOGGING"), defaults.enable_logging),
            timer_config: TimerConfig {
                work_seconds: parse_or(lookup("WORK_SECONDS"), timer_defaults.work_seconds),
                break_seconds: parse_or(lookup("BREAK_SECONDS"), timer_defaults.break_seconds),
                tick_ms: timer_defaults.tick_ms,
            },
            carousel_config: CarouselConfig {
                tick_ms: parse_or(lookup("CAROUSEL_TICK_MS"), defaults.carousel_config.tick_ms),
            },
            player_config: PlayerConfig {
                enabled: parse_or(lookup("MUSIC_PLAYER_ENABLED"), player_defaults.enabled),
                source: lookup("TRACK_SOURCE")
                    .map(TrackSource::parse)
                    .unwrap_or(player_defaults.source),
                catalog_url: lookup("CATALOG_URL")
                    .map(|s| s.to_string())
                    .unwrap_or(player_defaults.catalog_url),
                catalog_client_id: lookup("CATALOG_CLIENT_ID")
                    .map(|s| s.to_string())
                    .unwrap_or(player_defaults.catalog_client_id),
                catalog_page_size: parse_or(lookup("CATALOG_PAGE_SIZE"), player_defaults.catalog_page_size),
                default_volume: player_defaults.default_volume,
            },
            alarm_sound_url: lookup("ALARM_SOUND_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.alarm_sound_url),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// URL completa de la página del catálogo (una sola página, sin paginación)
    pub fn catalog_request_url(&self) -> String {
        let player = &self.player_config;
        format!(
            "{}?client_id={}&format=json&limit={}",
            player.catalog_url, player.catalog_client_id, player.catalog_page_size
        )
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_pomodoro_durations() {
        let config = AppConfig::from_values(|_| None, AppConfig::default());
        assert_eq!(config.timer_config.work_seconds, 1500);
        assert_eq!(config.timer_config.break_seconds, 300);
        assert_eq!(config.carousel_config.tick_ms, 800);
        assert_eq!(config.player_config.source, TrackSource::Fixed);
        assert!(config.player_config.enabled);
    }

    #[test]
    fn overrides_and_invalid_values() {
        let config = AppConfig::from_values(
            |key| match key {
                "WORK_SECONDS" => Some("10"),
                "BREAK_SECONDS" => Some("not-a-number"),
                "TRACK_SOURCE" => Some("Catalog"),
                "MUSIC_PLAYER_ENABLED" => Some("false"),
                _ => None,
            },
            AppConfig::default(),
        );
        assert_eq!(config.timer_config.work_seconds, 10);
        assert_eq!(config.timer_config.break_seconds, 300);
        assert_eq!(config.player_config.source, TrackSource::Catalog);
        assert!(!config.player_config.enabled);
    }

    #[test]
    fn catalog_url_has_client_and_page_size() {
        let config = AppConfig::default();
        assert_eq!(
            config.catalog_request_url(),
            "https://api.jamendo.com/v3.0/tracks/?client_id=56d30c95&format=json&limit=10"
        );
    }
}
