use crate::core::{Rng, Vec2};
use crate::domain::CategoryTable;
use crate::rigid_body::{BodyId, SimulatedBody};

use super::registry::{materialize_body, BodyMeasurement};

/// Owns every simulated body for the session
pub struct BodySet {
    bodies: Vec<SimulatedBody>,
    materialized: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaterializeResult {
    pub created: u32,
    pub skipped: u32,
}

impl BodySet {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            materialized: false,
        }
    }

    /// One-time snapshot of the measured elements.
    ///
    /// Body ids are the measurement indices, so a skipped element leaves a gap
    /// and the host can keep indexing its own element list. A second call is ignored.
    pub fn materialize(
        &mut self,
        measurements: &[BodyMeasurement],
        table: &CategoryTable,
        rng: &mut Rng,
    ) -> MaterializeResult {
        if self.materialized {
            console_warn!("bodies already materialized; ignoring {} measurements", measurements.len());
            return MaterializeResult::default();
        }
        self.materialized = true;

        let mut result = MaterializeResult::default();
        self.bodies.reserve(measurements.len());
        for (idx, m) in measurements.iter().enumerate() {
            match materialize_body(idx as BodyId, m, table, rng) {
                Some(body) => {
                    self.bodies.push(body);
                    result.created += 1;
                }
                None => {
                    console_warn!("skipping element {}: unusable bounding box {:?}", idx, m);
                    result.skipped += 1;
                }
            }
        }
        result
    }

    pub fn is_materialized(&self) -> bool {
        self.materialized
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[SimulatedBody] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [SimulatedBody] {
        &mut self.bodies
    }

    pub fn get(&self, id: BodyId) -> Option<&SimulatedBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut SimulatedBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Top-most body under a point. Later elements paint over earlier ones.
    pub fn hit_test(&self, point: Vec2) -> Option<BodyId> {
        self.bodies.iter().rev().find(|b| b.contains(point)).map(|b| b.id)
    }
}

impl Default for BodySet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BodyCategory;

    fn measurements() -> Vec<BodyMeasurement> {
        vec![
            BodyMeasurement::new(BodyCategory::Letter, 0.0, 0.0, 50.0, 50.0),
            BodyMeasurement::new(BodyCategory::Icon, 10.0, 10.0, 0.0, 0.0),
            BodyMeasurement::new(BodyCategory::Badge, 20.0, 20.0, 50.0, 50.0),
        ]
    }

    #[test]
    fn skipped_elements_leave_id_gaps() {
        let mut set = BodySet::new();
        let res = set.materialize(&measurements(), &CategoryTable::default(), &mut Rng::new(1));
        assert_eq!(res, MaterializeResult { created: 2, skipped: 1 });
        assert!(set.get(0).is_some());
        assert!(set.get(1).is_none());
        assert_eq!(set.get(2).map(|b| b.category), Some(BodyCategory::Badge));
    }

    #[test]
    fn materialize_happens_once() {
        let mut set = BodySet::new();
        let mut rng = Rng::new(1);
        set.materialize(&measurements(), &CategoryTable::default(), &mut rng);
        let again = set.materialize(&measurements(), &CategoryTable::default(), &mut rng);
        assert_eq!(again, MaterializeResult::default());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn hit_test_prefers_the_top_most_body() {
        let mut set = BodySet::new();
        set.materialize(&measurements(), &CategoryTable::default(), &mut Rng::new(1));
        assert_eq!(set.hit_test(Vec2::new(40.0, 40.0)), Some(2));
        assert_eq!(set.hit_test(Vec2::new(5.0, 5.0)), Some(0));
        assert_eq!(set.hit_test(Vec2::new(500.0, 5.0)), None);
    }
}
