use crate::models::{Seat, SeatStatus};

/// Проверяет, что кандидат (уже помеченный как Selected) примыкает к другому
/// выбранному месту своего ряда. Забронированные места прозрачны, свободное
/// место разрывает цепочку.
///
/// Проверяется только кандидат: уже выбранные места ряда повторно не валидируются.
pub fn is_continuity_valid(row_seats: &[Seat], candidate: usize) -> bool {
    let selected = row_seats.iter().filter(|s| s.is(SeatStatus::Selected)).count();

    // единственное выбранное место в ряду всегда допустимо
    if selected <= 1 {
        return true;
    }

    let left = row_seats[..candidate.min(row_seats.len())].iter().rev();
    if reaches_selected(left) {
        return true;
    }

    let right = row_seats.iter().skip(candidate + 1);
    reaches_selected(right)
}

// Идём от кандидата наружу: Booked пропускаем, Selected - успех, Available - стоп
fn reaches_selected<'a>(seats: impl Iterator<Item = &'a Seat>) -> bool {
    for seat in seats {
        match seat.status {
            SeatStatus::Booked => continue,
            SeatStatus::Selected => return true,
            SeatStatus::Available => return false,
        }
    }
    false
}
