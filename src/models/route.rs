/// Páginas de la app (una ruta por página)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    TaskEntry,
    /// La tarea llega ya decodificada desde el query string
    WorkSession { task: String },
}

pub const LANDING_PATH: &str = "/";
pub const TASK_ENTRY_PATH: &str = "/timerpage";
pub const WORK_SESSION_PATH: &str = "/worksession";

/// Nombre del parámetro que transporta la tarea
pub const TASK_PARAM: &str = "task";

impl Route {
    /// Resolver ruta desde pathname + parámetro `task` ya decodificado.
    /// Rutas desconocidas vuelven al landing.
    pub fn from_parts(pathname: &str, task: Option<String>) -> Self {
        let path = pathname.trim_end_matches('/');
        match path {
            TASK_ENTRY_PATH => Route::TaskEntry,
            WORK_SESSION_PATH => Route::WorkSession {
                task: task.unwrap_or_default(),
            },
            _ => Route::Landing,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => LANDING_PATH,
            Route::TaskEntry => TASK_ENTRY_PATH,
            Route::WorkSession { .. } => WORK_SESSION_PATH,
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Landing
    }
}
