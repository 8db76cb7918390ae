//! Navigation targets and the push-style navigation seam
//!
//! Navigation is one-way: flows push a route and never inspect a back
//! stack. The `Navigator` trait is the boundary to whatever presentation
//! layer hosts the flows.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::role::UserRole;

/// The routes the flows navigate to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Landing page; also the redirect target when no session exists.
    Root,
    StudentDashboard,
    TeacherDashboard,
    ChatList,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::StudentDashboard => "/student/dashboard",
            Self::TeacherDashboard => "/teacher/dashboard",
            Self::ChatList => "/chat",
        }
    }

    /// The dashboard a freshly authenticated user lands on.
    pub fn dashboard_for(role: UserRole) -> Self {
        match role {
            UserRole::Student => Self::StudentDashboard,
            UserRole::Teacher => Self::TeacherDashboard,
        }
    }
}

/// Push-style navigation boundary.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that records every pushed route. Used by tests and by
/// headless drivers that only need to observe where a flow went.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().expect("navigator lock poisoned").clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes
            .lock()
            .expect("navigator lock poisoned")
            .push(route);
    }
}
