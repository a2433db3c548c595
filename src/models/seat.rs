use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Статус места. В каждый момент времени у места ровно один статус.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Selected,
    Booked,
}

/// Идентификатор места: пара (ряд, номер в ряду), в текстовом виде `"row-col"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId {
    pub row: usize,
    pub col: usize,
}

impl SeatId {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid seat id: {0:?}")]
pub struct ParseSeatIdError(pub String);

impl FromStr for SeatId {
    type Err = ParseSeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once('-')
            .ok_or_else(|| ParseSeatIdError(s.to_string()))?;
        let row = row.parse().map_err(|_| ParseSeatIdError(s.to_string()))?;
        let col = col.parse().map_err(|_| ParseSeatIdError(s.to_string()))?;
        Ok(SeatId { row, col })
    }
}

// В JSON идентификатор всегда строка "row-col"
impl Serialize for SeatId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeatId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Место в зале. `row`/`col` неизменяемы, меняется только статус.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat {
    row: usize,
    col: usize,
    pub status: SeatStatus,
}

impl Seat {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col, status: SeatStatus::Available }
    }

    pub fn id(&self) -> SeatId {
        SeatId::new(self.row, self.col)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is(&self, status: SeatStatus) -> bool {
        self.status == status
    }
}
