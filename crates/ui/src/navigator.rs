use std::sync::{Arc, PoisonError, RwLock};

use easytv_domain::routes::Route;
use tracing::debug;

/// Current location, shared by every controller of one console.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Arc<RwLock<Route>>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: Arc::new(RwLock::new(start)),
        }
    }

    pub fn current(&self) -> Route {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn view(&self) -> Option<String> {
        self.current().view
    }

    pub fn navigate(&self, route: Route) {
        debug!("导航到 {}", route);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = route;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::login())
    }
}
