use super::seat::{Seat, SeatId, SeatStatus};

/// Количество рядов в зале (A-H)
pub const ROWS: usize = 8;
/// Мест в каждом ряду
pub const SEATS_PER_ROW: usize = 10;

/// Сетка мест ROWS x SEATS_PER_ROW. Единственный источник истины для
/// счётчиков и цен. Сама ничего не проверяет: инварианты держат
/// `services::selection` и `services::lifecycle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    rows: Vec<Vec<Seat>>,
}

impl SeatGrid {
    /// Все места свободны
    pub fn new() -> Self {
        let rows = (0..ROWS)
            .map(|row| (0..SEATS_PER_ROW).map(|col| Seat::new(row, col)).collect())
            .collect();
        Self { rows }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Seat> {
        self.rows.get(row)?.get(col)
    }

    pub fn row(&self, row: usize) -> Option<&[Seat]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Все места построчно, порядок стабильный
    pub fn all_seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flatten()
    }

    pub fn seats_with(&self, status: SeatStatus) -> impl Iterator<Item = &Seat> {
        self.all_seats().filter(move |s| s.is(status))
    }

    pub fn ids_with(&self, status: SeatStatus) -> Vec<SeatId> {
        self.seats_with(status).map(Seat::id).collect()
    }

    /// Меняет статус ровно одного места. Возвращает false, если такого места нет.
    pub fn set_status(&mut self, row: usize, col: usize, status: SeatStatus) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(seat) => {
                seat.status = status;
                true
            }
            None => false,
        }
    }

    /// Переводит все места со статусом `from` в `to`, возвращает их количество
    pub fn replace_status(&mut self, from: SeatStatus, to: SeatStatus) -> usize {
        let mut changed = 0;
        for seat in self.rows.iter_mut().flatten().filter(|s| s.status == from) {
            seat.status = to;
            changed += 1;
        }
        changed
    }

    pub fn fill(&mut self, status: SeatStatus) {
        for seat in self.rows.iter_mut().flatten() {
            seat.status = status;
        }
    }
}

impl Default for SeatGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_has_every_cell() {
        let grid = SeatGrid::new();
        assert_eq!(grid.all_seats().count(), ROWS * SEATS_PER_ROW);
        assert!(grid.all_seats().all(|s| s.is(SeatStatus::Available)));

        let mut ids: Vec<SeatId> = grid.all_seats().map(Seat::id).collect();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn all_seats_is_row_major() {
        let grid = SeatGrid::new();
        let ids: Vec<SeatId> = grid.all_seats().take(12).map(Seat::id).collect();
        assert_eq!(ids[0], SeatId::new(0, 0));
        assert_eq!(ids[9], SeatId::new(0, 9));
        assert_eq!(ids[10], SeatId::new(1, 0));
        assert_eq!(ids[11], SeatId::new(1, 1));
    }

    #[test]
    fn set_status_touches_one_seat() {
        let mut grid = SeatGrid::new();
        assert!(grid.set_status(4, 5, SeatStatus::Booked));
        assert_eq!(grid.get(4, 5).map(|s| s.status), Some(SeatStatus::Booked));
        assert_eq!(grid.seats_with(SeatStatus::Booked).count(), 1);
    }

    #[test]
    fn out_of_range_is_harmless() {
        let mut grid = SeatGrid::new();
        assert!(grid.get(ROWS, 0).is_none());
        assert!(grid.get(0, SEATS_PER_ROW).is_none());
        assert!(grid.row(ROWS).is_none());
        assert!(!grid.set_status(ROWS, 0, SeatStatus::Booked));
        assert_eq!(grid, SeatGrid::new());
    }

    #[test]
    fn replace_status_counts_changes() {
        let mut grid = SeatGrid::new();
        grid.set_status(0, 0, SeatStatus::Selected);
        grid.set_status(0, 1, SeatStatus::Selected);
        grid.set_status(1, 1, SeatStatus::Booked);

        assert_eq!(grid.replace_status(SeatStatus::Selected, SeatStatus::Available), 2);
        assert_eq!(grid.seats_with(SeatStatus::Booked).count(), 1);
    }
}
