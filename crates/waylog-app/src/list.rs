//! Rendered workout list.

use waylog_core::models::{Workout, WorkoutDetails, WorkoutId};

/// One rendered list entry, addressed by workout id
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutCard {
    pub id: WorkoutId,
    pub title: String,
    pub lines: Vec<String>,
}

impl WorkoutCard {
    /// Project a record into its display form
    fn from_workout(workout: &Workout) -> Self {
        let mut lines = vec![
            format!("{} km", workout.distance),
            format!("{} min", workout.duration),
        ];

        match workout.details {
            WorkoutDetails::Running { cadence, pace } => {
                lines.push(format!("{:.1} min/km", pace));
                lines.push(format!("{} spm", cadence));
            }
            WorkoutDetails::Cycling { elevation_gain, speed } => {
                lines.push(format!("{:.1} km/h", speed));
                lines.push(format!("{} m", elevation_gain));
            }
        }

        Self {
            id: workout.id,
            title: workout.description.clone(),
            lines,
        }
    }
}

/// Projection of the workout collection onto the display surface.
///
/// Every card is inserted at the anchor, the head of the list, so the visible
/// order is newest-created-first: the reverse of the collection's insertion
/// order. Replaying the collection oldest-first through `render` reproduces
/// that inversion after a reload.
#[derive(Debug, Default)]
pub struct ListRenderer {
    cards: Vec<WorkoutCard>,
}

impl ListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a record and insert its card at the anchor
    pub fn render(&mut self, workout: &Workout) {
        self.cards.insert(0, WorkoutCard::from_workout(workout));
    }

    /// Remove the card for `id`; no-op if absent
    pub fn remove_by_id(&mut self, id: WorkoutId) {
        self.cards.retain(|card| card.id != id);
    }

    /// Remove every card
    pub fn remove_all(&mut self) {
        self.cards.clear();
    }

    /// Cards in visible order, newest first
    pub fn cards(&self) -> &[WorkoutCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waylog_core::models::{GeoPoint, WorkoutDraft};

    fn running(distance: f64, duration: f64) -> Workout {
        Workout::create(WorkoutDraft::running(
            GeoPoint::new(39.0, -12.0),
            distance,
            duration,
            178.0,
        ))
        .unwrap()
    }

    #[test]
    fn test_visible_order_is_newest_first() {
        let mut list = ListRenderer::new();
        let (a, b, c) = (running(1.0, 10.0), running(2.0, 10.0), running(3.0, 10.0));
        let ids = [a.id, b.id, c.id];

        list.render(&a);
        list.render(&b);
        list.render(&c);

        let visible: Vec<WorkoutId> = list.cards().iter().map(|card| card.id).collect();
        assert_eq!(visible, vec![ids[2], ids[1], ids[0]]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut list = ListRenderer::new();
        let (a, b, c) = (running(1.0, 10.0), running(2.0, 10.0), running(3.0, 10.0));

        list.render(&a);
        list.render(&b);
        list.render(&c);
        list.remove_by_id(b.id);

        let visible: Vec<WorkoutId> = list.cards().iter().map(|card| card.id).collect();
        assert_eq!(visible, vec![c.id, a.id]);
    }

    #[test]
    fn test_remove_absent_is_a_no_op() {
        let mut list = ListRenderer::new();
        list.render(&running(1.0, 10.0));

        list.remove_by_id(WorkoutId::generate());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_card_shows_pace_to_one_decimal() {
        let mut list = ListRenderer::new();
        let workout = running(5.2, 24.0);
        list.render(&workout);

        let card = &list.cards()[0];
        assert_eq!(card.title, workout.description);
        assert_eq!(
            card.lines,
            vec!["5.2 km", "24 min", "4.6 min/km", "178 spm"]
        );
    }
}
