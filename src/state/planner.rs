#[cfg(test)]
#[path = "planner_test.rs"]
mod planner_test;

use crate::net::types::School;

/// Map page state: which schools are picked as stops and the last planning
/// error, if any. The visiting order itself is just the order of `stops`
/// after [`PlannerState::apply_plan`].
#[derive(Clone, Debug, Default)]
pub struct PlannerState {
    pub stops: Vec<School>,
    pub planning: bool,
    pub error: Option<String>,
}

impl PlannerState {
    /// Add the school as a stop, or remove it if already picked.
    pub fn toggle(&mut self, school: &School) {
        if let Some(pos) = self.stops.iter().position(|s| s.id == school.id) {
            self.stops.remove(pos);
        } else {
            self.stops.push(school.clone());
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.stops.iter().any(|s| s.id == id)
    }

    /// Reorder stops to the backend's visiting order. Ids the backend did
    /// not return are dropped (it only orders what it was sent); ids it
    /// invented are ignored.
    pub fn apply_plan(&mut self, order: &[i64]) {
        let mut ordered = Vec::with_capacity(self.stops.len());
        for id in order {
            if let Some(pos) = self.stops.iter().position(|s| s.id == *id) {
                ordered.push(self.stops.remove(pos));
            }
        }
        self.stops = ordered;
    }

    pub fn clear(&mut self) {
        self.stops.clear();
        self.error = None;
    }
}
