//! In-app routing between the events list and the create-event page.

use client_core::{Navigator, Route};

#[derive(Debug, Clone, Default)]
pub struct AppRouter {
    current: Route,
    refresh_requested: bool,
}

impl AppRouter {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            refresh_requested: false,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Returns and clears a pending refresh request.
    pub fn take_refresh(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }
}

impl Navigator for AppRouter {
    fn push(&mut self, route: Route) {
        tracing::debug!(from = self.current.path(), to = route.path(), "navigate");
        self.current = route;
    }

    fn refresh(&mut self) {
        self.refresh_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_is_consumed_once() {
        let mut router = AppRouter::new(Route::CreateEvent);
        router.push(Route::Home);
        router.refresh();

        assert_eq!(router.current(), Route::Home);
        assert!(router.take_refresh());
        assert!(!router.take_refresh());
    }
}
