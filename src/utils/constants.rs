/// Logo de la app
pub const LOGO_URL: &str = "/images/strawberry.png";

/// Frames del carrusel de la página de sesión
pub const CAROUSEL_FRAMES: [&str; 5] = [
    "/images/s1.png",
    "/images/s2.png",
    "/images/s3.png",
    "/images/s4.png",
    "/images/s5.png",
];

/// Lista fija de pistas (Lofi Study Music, samirpaulb/music): (id, nombre, artista, audio)
pub const FIXED_TRACKS: [(&str, &str, &str, &str); 8] = [
    ("1", "Lofi Study Music 1", "Unknown", "https://spcdn.pages.dev/music/music-1.mp3"),
    ("2", "Lofi Study Music 2", "Unknown", "https://spcdn.pages.dev/music/music-2.mp3"),
    ("3", "Lofi Study Music 3", "Unknown", "https://spcdn.pages.dev/music/music-3.mp3"),
    ("4", "Lofi Study Music 4", "Unknown", "https://spcdn.pages.dev/music/music-4.mp3"),
    ("5", "Lofi Study Music 5", "Unknown", "https://spcdn.pages.dev/music/music-5.mp3"),
    ("6", "Lofi Study Music 6", "Unknown", "https://spcdn.pages.dev/music/music-6.mp3"),
    ("7", "Lofi Study Music 7", "Unknown", "https://spcdn.pages.dev/music/music-7.mp3"),
    ("8", "Lofi Study Music 8", "Unknown", "https://spcdn.pages.dev/music/music-8.mp3"),
];

/// Mensaje estático cuando el catálogo falla
pub const CATALOG_ERROR_MESSAGE: &str = "Could not load music. Please try again later.";
