use serde::Serialize;

use super::{Seat, SeatGrid, SeatId, SeatStatus};
use crate::services::pricing::{self, PriceTier};

/// Место в ответе клиенту
#[derive(Debug, Clone, Serialize)]
pub struct SeatView {
    pub id: SeatId,
    pub row: usize,
    pub col: usize,
    /// Буква ряда, A-H
    pub row_label: char,
    /// Номер места в ряду, с 1
    pub number: usize,
    pub status: SeatStatus,
    pub tier: PriceTier,
    pub price: u32,
}

impl From<&Seat> for SeatView {
    fn from(seat: &Seat) -> Self {
        let tier = PriceTier::for_row(seat.row());
        SeatView {
            id: seat.id(),
            row: seat.row(),
            col: seat.col(),
            row_label: row_label(seat.row()),
            number: seat.col() + 1,
            status: seat.status,
            tier,
            price: tier.price(),
        }
    }
}

/// Всё, что нужно клиенту для отрисовки зала. Только для чтения.
#[derive(Debug, Clone, Serialize)]
pub struct SeatMapView {
    pub seats: Vec<SeatView>,
    pub available_count: usize,
    pub selected_count: usize,
    pub booked_count: usize,
    pub total_selected_price: u32,
    pub can_book: bool,
    pub can_clear: bool,
    pub price_note: String,
}

impl From<&SeatGrid> for SeatMapView {
    fn from(grid: &SeatGrid) -> Self {
        let selected_count = pricing::selected_count(grid);
        SeatMapView {
            seats: grid.all_seats().map(SeatView::from).collect(),
            available_count: pricing::available_count(grid),
            selected_count,
            booked_count: pricing::booked_count(grid),
            total_selected_price: pricing::total_for_selected(grid),
            can_book: selected_count > 0,
            can_clear: selected_count > 0,
            price_note: pricing::price_note(),
        }
    }
}

pub fn row_label(row: usize) -> char {
    u8::try_from(row)
        .ok()
        .and_then(|r| b'A'.checked_add(r))
        .map(char::from)
        .unwrap_or('?')
}
