/// Tarea libre que el usuario quiere cumplir durante la sesión
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task(String);

impl Task {
    /// Recorta espacios; `None` si queda vacía
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_rejects_empty() {
        assert_eq!(Task::parse("  Write report \n").unwrap().as_str(), "Write report");
        assert!(Task::parse("").is_none());
        assert!(Task::parse("   \t").is_none());
    }

    #[test]
    fn keeps_inner_text_verbatim() {
        let task = Task::parse("Leer cap. 3 & 4 — 50%").unwrap();
        assert_eq!(task.to_string(), "Leer cap. 3 & 4 — 50%");
    }
}
