use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                // Ignorar comentarios y líneas vacías
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE (se permiten comillas alrededor del valor)
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Las variables del entorno real tienen prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    // Recompilar si cambian las variables que lee config.rs
    for key in [
        "WORK_SECONDS",
        "BREAK_SECONDS",
        "CAROUSEL_TICK_MS",
        "TRACK_SOURCE",
        "MUSIC_PLAYER_ENABLED",
        "CATALOG_URL",
        "CATALOG_CLIENT_ID",
        "CATALOG_PAGE_SIZE",
        "ALARM_SOUND_URL",
        "ENABLE_LOGGING",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
