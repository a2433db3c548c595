use std::sync::Arc;
use tracing::info;

use crate::confirm::Confirmation;
use crate::error::BookingError;
use crate::models::{SeatGrid, SeatMapView};
use crate::services::lifecycle::{BookingLifecycle, CommitOutcome};
use crate::services::selection::{self, ToggleOutcome};
use crate::store::KeyValueStore;

pub const RESET_PROMPT: &str = "Reset all bookings? This removes every committed booking.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Reset,
    Declined,
}

/// Одна интерактивная сессия: сетка плюс хранилище. Других путей изменить
/// сетку, кроме четырёх действий ниже, нет.
pub struct SeatBookingSession {
    grid: SeatGrid,
    lifecycle: BookingLifecycle,
}

impl SeatBookingSession {
    /// Создаёт сетку и один раз сверяет её с сохранёнными бронями
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let lifecycle = BookingLifecycle::new(store);
        let grid = lifecycle.restore();
        info!("Seat booking session opened");
        Self { grid, lifecycle }
    }

    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    pub fn view(&self) -> SeatMapView {
        SeatMapView::from(&self.grid)
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> ToggleOutcome {
        selection::toggle(&mut self.grid, row, col)
    }

    pub fn commit(&mut self, confirmation: &dyn Confirmation) -> Result<CommitOutcome, BookingError> {
        self.lifecycle.commit(&mut self.grid, confirmation)
    }

    pub fn clear_selection(&mut self) -> usize {
        self.lifecycle.clear_selection(&mut self.grid)
    }

    /// Полный сброс уничтожает зафиксированные брони, поэтому спрашиваем явно
    pub fn reset_all(&mut self, confirmation: &dyn Confirmation) -> Result<ResetOutcome, BookingError> {
        if !confirmation.confirm(RESET_PROMPT) {
            return Ok(ResetOutcome::Declined);
        }
        self.lifecycle.reset_all(&mut self.grid)?;
        Ok(ResetOutcome::Reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeatStatus;
    use crate::store::MemoryStore;

    #[test]
    fn declined_reset_keeps_bookings() {
        let store = Arc::new(MemoryStore::new());
        let mut session = SeatBookingSession::open(store);
        session.toggle(0, 0);
        session.commit(&|_: &str| true).unwrap();

        assert_eq!(session.reset_all(&|_: &str| false).unwrap(), ResetOutcome::Declined);
        assert_eq!(session.view().booked_count, 1);

        assert_eq!(session.reset_all(&|_: &str| true).unwrap(), ResetOutcome::Reset);
        assert_eq!(session.view().booked_count, 0);
    }

    #[test]
    fn reopened_session_sees_bookings() {
        let store = Arc::new(MemoryStore::new());
        let mut session = SeatBookingSession::open(store.clone());
        session.toggle(0, 0);
        session.toggle(0, 1);
        session.commit(&|_: &str| true).unwrap();

        let reopened = SeatBookingSession::open(store);
        let booked: Vec<_> = reopened
            .grid()
            .seats_with(SeatStatus::Booked)
            .map(|s| s.id().to_string())
            .collect();
        assert_eq!(booked, vec!["0-0", "0-1"]);
        assert_eq!(reopened.view().available_count, 78);
    }
}
