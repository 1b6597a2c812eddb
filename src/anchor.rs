use chrono::{NaiveDate, Weekday};

use crate::BsDate;
use crate::consts::{
    ANCHOR_AD_DAY, ANCHOR_AD_MONTH, ANCHOR_AD_YEAR, ANCHOR_BS_DAY, ANCHOR_BS_MONTH, ANCHOR_BS_YEAR,
};
use crate::error::OutOfRange;
use crate::table::CalendarTable;
use crate::types::Month;

/// One Gregorian day known to coincide with one BS day.
///
/// All conversions count days away from this pivot, so the weekday is stored
/// alongside to let [`crate::Calendar::new`] cross-check the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceAnchor {
    gregorian: NaiveDate,
    bs: BsDate,
    weekday: Weekday,
}

impl ReferenceAnchor {
    pub const fn new(gregorian: NaiveDate, bs: BsDate, weekday: Weekday) -> Self {
        Self {
            gregorian,
            bs,
            weekday,
        }
    }

    /// 2023-04-14 AD = 2080-01-01 BS, a Friday.
    ///
    /// # Errors
    /// Returns `OutOfRange::Anchor` if the anchor constants do not form valid
    /// dates in `table`.
    pub fn standard(table: &CalendarTable) -> Result<Self, OutOfRange> {
        let gregorian = NaiveDate::from_ymd_opt(ANCHOR_AD_YEAR, ANCHOR_AD_MONTH, ANCHOR_AD_DAY)
            .ok_or_else(|| {
                OutOfRange::Anchor(format!(
                    "{ANCHOR_AD_YEAR:04}-{ANCHOR_AD_MONTH:02}-{ANCHOR_AD_DAY:02}"
                ))
            })?;
        let month = Month::new(ANCHOR_BS_MONTH)?;
        let day = table.day(ANCHOR_BS_YEAR, month, i32::from(ANCHOR_BS_DAY))?;
        let bs = BsDate::from_parts(ANCHOR_BS_YEAR, month, day);
        Ok(Self::new(gregorian, bs, Weekday::Fri))
    }

    pub const fn gregorian(&self) -> NaiveDate {
        self.gregorian
    }

    pub const fn bs(&self) -> BsDate {
        self.bs
    }

    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }
}
