//! Цены и счётчики. Всё считается заново по сетке при каждом вызове,
//! никаких кешированных значений.

use serde::Serialize;

use crate::models::{SeatGrid, SeatStatus};

/// Ценовая категория ряда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    /// Ряды A-C (0-2)
    Premium,
    /// Ряды D-F (3-5)
    Standard,
    /// Ряды G-H (6-7)
    Economy,
}

impl PriceTier {
    pub fn for_row(row: usize) -> Self {
        match row {
            0..=2 => PriceTier::Premium,
            3..=5 => PriceTier::Standard,
            _ => PriceTier::Economy,
        }
    }

    pub fn price(self) -> u32 {
        match self {
            PriceTier::Premium => 1000,
            PriceTier::Standard => 750,
            PriceTier::Economy => 500,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PriceTier::Premium => "Premium",
            PriceTier::Standard => "Standard",
            PriceTier::Economy => "Economy",
        }
    }

    /// Метки рядов категории, например "A-C"
    pub fn row_range(self) -> &'static str {
        match self {
            PriceTier::Premium => "A-C",
            PriceTier::Standard => "D-F",
            PriceTier::Economy => "G-H",
        }
    }
}

pub fn price_for_row(row: usize) -> u32 {
    PriceTier::for_row(row).price()
}

/// Сумма по всем выбранным местам
pub fn total_for_selected(grid: &SeatGrid) -> u32 {
    grid.seats_with(SeatStatus::Selected)
        .map(|s| price_for_row(s.row()))
        .sum()
}

pub fn available_count(grid: &SeatGrid) -> usize {
    grid.seats_with(SeatStatus::Available).count()
}

pub fn selected_count(grid: &SeatGrid) -> usize {
    grid.seats_with(SeatStatus::Selected).count()
}

pub fn booked_count(grid: &SeatGrid) -> usize {
    grid.seats_with(SeatStatus::Booked).count()
}

/// Подпись с ценами для клиента
pub fn price_note() -> String {
    [PriceTier::Premium, PriceTier::Standard, PriceTier::Economy]
        .iter()
        .map(|t| format!("{} ({}): ₹{}", t.name(), t.row_range(), t.price()))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_by_row() {
        assert_eq!(price_for_row(0), 1000);
        assert_eq!(price_for_row(2), 1000);
        assert_eq!(price_for_row(3), 750);
        assert_eq!(price_for_row(4), 750);
        assert_eq!(price_for_row(5), 750);
        assert_eq!(price_for_row(6), 500);
        assert_eq!(price_for_row(7), 500);
    }

    #[test]
    fn total_sums_each_selected_seat() {
        let mut grid = SeatGrid::new();
        assert_eq!(total_for_selected(&grid), 0);

        grid.set_status(0, 0, SeatStatus::Selected);
        assert_eq!(total_for_selected(&grid), 1000);

        grid.set_status(4, 3, SeatStatus::Selected);
        grid.set_status(7, 9, SeatStatus::Selected);
        assert_eq!(total_for_selected(&grid), 2250);

        // забронированные места в сумму не входят
        grid.set_status(1, 1, SeatStatus::Booked);
        assert_eq!(total_for_selected(&grid), 2250);
    }

    #[test]
    fn counts_follow_grid() {
        let mut grid = SeatGrid::new();
        grid.set_status(0, 0, SeatStatus::Selected);
        grid.set_status(0, 1, SeatStatus::Booked);
        grid.set_status(0, 2, SeatStatus::Booked);

        assert_eq!(available_count(&grid), 77);
        assert_eq!(selected_count(&grid), 1);
        assert_eq!(booked_count(&grid), 2);
    }

    #[test]
    fn note_matches_tiers() {
        assert_eq!(
            price_note(),
            "Premium (A-C): ₹1000 | Standard (D-F): ₹750 | Economy (G-H): ₹500"
        );
    }
}
