/// Carrusel de imágenes: avanza un índice en cada tick, independiente del timer
#[derive(Clone, Debug)]
pub struct ImageCarousel {
    frames: Vec<String>,
    index: usize,
}

impl ImageCarousel {
    pub fn new(frames: Vec<String>) -> Self {
        Self { frames, index: 0 }
    }

    /// Avanzar con wrap (último -> primero). Secuencia vacía: no-op
    pub fn advance(&mut self) -> Option<&str> {
        if self.frames.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.frames.len();
        self.current()
    }

    pub fn current(&self) -> Option<&str> {
        self.frames.get(self.index).map(String::as_str)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}
