//! Выбор мест кликом: Available <-> Selected с учётом лимита и непрерывности ряда.

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{SeatGrid, SeatId, SeatStatus};
use crate::services::{continuity, pricing};

/// Максимум одновременно выбранных мест во всём зале
pub const MAX_SEATS_PER_BOOKING: usize = 8;

/// Почему выбор места отклонён
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionWarning {
    CapacityReached,
    ContinuityBroken,
}

impl SelectionWarning {
    pub fn message(self) -> &'static str {
        match self {
            SelectionWarning::CapacityReached => "You can book a maximum of 8 seats.",
            SelectionWarning::ContinuityBroken => "Seat selection must be continuous.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// Место забронировано или не существует
    Ignored,
    Rejected(SelectionWarning),
}

/// Обрабатывает клик по месту. При отказе сетка не меняется.
pub fn toggle(grid: &mut SeatGrid, row: usize, col: usize) -> ToggleOutcome {
    let Some(seat) = grid.get(row, col) else {
        debug!("toggle on unknown seat {}-{}", row, col);
        return ToggleOutcome::Ignored;
    };
    let (id, status) = (seat.id(), seat.status);

    match status {
        SeatStatus::Booked => ToggleOutcome::Ignored,
        SeatStatus::Selected => {
            // снятие выбора не ограничено ни лимитом, ни непрерывностью
            grid.set_status(row, col, SeatStatus::Available);
            debug!("seat {} deselected", id);
            ToggleOutcome::Deselected
        }
        SeatStatus::Available => select(grid, id),
    }
}

fn select(grid: &mut SeatGrid, id: SeatId) -> ToggleOutcome {
    if pricing::selected_count(grid) >= MAX_SEATS_PER_BOOKING {
        return reject(id, SelectionWarning::CapacityReached);
    }

    // проверяем ряд так, как он будет выглядеть после выбора
    let mut candidate_row = match grid.row(id.row) {
        Some(row) => row.to_vec(),
        None => return ToggleOutcome::Ignored,
    };
    candidate_row[id.col].status = SeatStatus::Selected;

    if !continuity::is_continuity_valid(&candidate_row, id.col) {
        return reject(id, SelectionWarning::ContinuityBroken);
    }

    grid.set_status(id.row, id.col, SeatStatus::Selected);
    debug!("seat {} selected", id);
    ToggleOutcome::Selected
}

fn reject(id: SeatId, warning: SelectionWarning) -> ToggleOutcome {
    warn!("seat {} rejected: {}", id, warning.message());
    ToggleOutcome::Rejected(warning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::SEATS_PER_ROW;

    fn status(grid: &SeatGrid, row: usize, col: usize) -> SeatStatus {
        grid.get(row, col).map(|s| s.status).unwrap()
    }

    #[test]
    fn select_and_deselect() {
        let mut grid = SeatGrid::new();
        assert_eq!(toggle(&mut grid, 2, 3), ToggleOutcome::Selected);
        assert_eq!(status(&grid, 2, 3), SeatStatus::Selected);

        assert_eq!(toggle(&mut grid, 2, 3), ToggleOutcome::Deselected);
        assert_eq!(grid, SeatGrid::new());
    }

    #[test]
    fn booked_seat_is_ignored() {
        let mut grid = SeatGrid::new();
        grid.set_status(1, 1, SeatStatus::Booked);
        let before = grid.clone();

        assert_eq!(toggle(&mut grid, 1, 1), ToggleOutcome::Ignored);
        assert_eq!(grid, before);
    }

    #[test]
    fn unknown_seat_is_ignored() {
        let mut grid = SeatGrid::new();
        assert_eq!(toggle(&mut grid, 8, 0), ToggleOutcome::Ignored);
        assert_eq!(toggle(&mut grid, 0, SEATS_PER_ROW), ToggleOutcome::Ignored);
        assert_eq!(grid, SeatGrid::new());
    }

    #[test]
    fn ninth_seat_is_rejected() {
        let mut grid = SeatGrid::new();
        for col in 0..MAX_SEATS_PER_BOOKING {
            assert_eq!(toggle(&mut grid, 0, col), ToggleOutcome::Selected);
        }
        let before = grid.clone();

        assert_eq!(
            toggle(&mut grid, 0, 8),
            ToggleOutcome::Rejected(SelectionWarning::CapacityReached)
        );
        // в другом ряду лимит тот же
        assert_eq!(
            toggle(&mut grid, 5, 0),
            ToggleOutcome::Rejected(SelectionWarning::CapacityReached)
        );
        assert_eq!(grid, before);

        // снятие выбора на лимите разрешено
        assert_eq!(toggle(&mut grid, 0, 7), ToggleOutcome::Deselected);
        assert_eq!(toggle(&mut grid, 0, 7), ToggleOutcome::Selected);
    }

    #[test]
    fn gap_in_row_is_rejected() {
        let mut grid = SeatGrid::new();
        assert_eq!(toggle(&mut grid, 3, 1), ToggleOutcome::Selected);
        let before = grid.clone();

        assert_eq!(
            toggle(&mut grid, 3, 3),
            ToggleOutcome::Rejected(SelectionWarning::ContinuityBroken)
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn neighbour_of_selected_is_accepted() {
        let mut grid = SeatGrid::new();
        assert_eq!(toggle(&mut grid, 0, 1), ToggleOutcome::Selected);
        assert_eq!(toggle(&mut grid, 0, 2), ToggleOutcome::Selected);
        assert_eq!(status(&grid, 0, 2), SeatStatus::Selected);
    }

    #[test]
    fn separate_rows_are_independent() {
        let mut grid = SeatGrid::new();
        assert_eq!(toggle(&mut grid, 0, 0), ToggleOutcome::Selected);
        assert_eq!(toggle(&mut grid, 1, 9), ToggleOutcome::Selected);
        assert_eq!(toggle(&mut grid, 7, 5), ToggleOutcome::Selected);
    }

    #[test]
    fn booked_seat_bridges_selection() {
        let mut grid = SeatGrid::new();
        grid.set_status(4, 1, SeatStatus::Booked);
        assert_eq!(toggle(&mut grid, 4, 0), ToggleOutcome::Selected);
        assert_eq!(toggle(&mut grid, 4, 2), ToggleOutcome::Selected);
    }

    #[test]
    fn deselect_may_split_block() {
        // повторная валидация при снятии выбора не выполняется
        let mut grid = SeatGrid::new();
        for col in 0..3 {
            assert_eq!(toggle(&mut grid, 6, col), ToggleOutcome::Selected);
        }
        assert_eq!(toggle(&mut grid, 6, 1), ToggleOutcome::Deselected);
        assert_eq!(status(&grid, 6, 0), SeatStatus::Selected);
        assert_eq!(status(&grid, 6, 2), SeatStatus::Selected);

        // место в разрыве снова можно выбрать
        assert_eq!(toggle(&mut grid, 6, 1), ToggleOutcome::Selected);
    }
}
