//! Жизненный цикл брони: фиксация выбранных мест, сброс выбора, полный сброс
//! и восстановление сетки из хранилища при старте сессии.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::confirm::Confirmation;
use crate::error::BookingError;
use crate::models::{SeatGrid, SeatId, SeatStatus};
use crate::services::pricing;
use crate::store::{KeyValueStore, BOOKED_SEATS_KEY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommitOutcome {
    /// Выбранных мест нет, подтверждение не запрашивалось
    NothingSelected,
    Declined { prompt: String },
    Booked { seats: Vec<SeatId>, count: usize, total: u32 },
}

pub struct BookingLifecycle {
    store: Arc<dyn KeyValueStore>,
}

impl BookingLifecycle {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Свежая сетка, сверенная с сохранёнными бронями
    pub fn restore(&self) -> SeatGrid {
        let mut grid = SeatGrid::new();
        let booked = self.load_booked();
        for id in &booked {
            if !grid.set_status(id.row, id.col, SeatStatus::Booked) {
                debug!("skipping persisted seat {} outside the grid", id);
            }
        }
        info!("Restored {} booked seats", pricing::booked_count(&grid));
        grid
    }

    /// Сохранённые идентификаторы. Отсутствующее или испорченное значение = броней нет.
    pub fn load_booked(&self) -> Vec<SeatId> {
        match self.store.load(BOOKED_SEATS_KEY) {
            Ok(Some(raw)) => decode_booked(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to load booked seats, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Переводит все выбранные места в Booked после подтверждения.
    /// Сначала пишет в хранилище, потом меняет сетку: при ошибке записи сетка не тронута.
    pub fn commit(
        &self,
        grid: &mut SeatGrid,
        confirmation: &dyn Confirmation,
    ) -> Result<CommitOutcome, BookingError> {
        let selected = grid.ids_with(SeatStatus::Selected);
        if selected.is_empty() {
            return Ok(CommitOutcome::NothingSelected);
        }

        let count = selected.len();
        let total = pricing::total_for_selected(grid);
        let prompt = booking_prompt(count, total);
        if !confirmation.confirm(&prompt) {
            debug!("booking of {} seats declined", count);
            return Ok(CommitOutcome::Declined { prompt });
        }

        // полный набор забронированных мест после фиксации, построчно
        let booked: Vec<SeatId> = grid
            .all_seats()
            .filter(|s| !s.is(SeatStatus::Available))
            .map(|s| s.id())
            .collect();
        self.persist(&booked)?;

        grid.replace_status(SeatStatus::Selected, SeatStatus::Booked);
        info!("Booked {} seats for ₹{}", count, total);
        Ok(CommitOutcome::Booked { seats: selected, count, total })
    }

    /// Снимает выбор со всех мест. Хранилище не трогает.
    pub fn clear_selection(&self, grid: &mut SeatGrid) -> usize {
        let cleared = grid.replace_status(SeatStatus::Selected, SeatStatus::Available);
        debug!("cleared {} selected seats", cleared);
        cleared
    }

    /// Освобождает все места и очищает сохранённые брони.
    /// Подтверждение - забота вызывающей стороны.
    pub fn reset_all(&self, grid: &mut SeatGrid) -> Result<(), BookingError> {
        self.persist(&[])?;
        grid.fill(SeatStatus::Available);
        warn!("RESET: all seats released, persisted bookings cleared");
        Ok(())
    }

    fn persist(&self, booked: &[SeatId]) -> Result<(), BookingError> {
        let value = serde_json::to_string(booked).map_err(crate::error::StoreError::from)?;
        self.store.save(BOOKED_SEATS_KEY, &value)?;
        Ok(())
    }
}

pub fn booking_prompt(count: usize, total: u32) -> String {
    format!("Confirm booking?\nSeats: {}\nTotal Price: ₹{}", count, total)
}

// Непонятные элементы массива пропускаются, не-массив = пустой набор
fn decode_booked(raw: &str) -> Vec<SeatId> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(ids) => ids.iter().filter_map(|id| id.parse().ok()).collect(),
        Err(e) => {
            debug!("ignoring malformed booked seats value: {}", e);
            Vec::new()
        }
    }
}
