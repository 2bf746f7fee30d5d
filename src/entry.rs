use std::ops::RangeInclusive;

/// One of the five schedule fields of a cron entry, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl Field {
    /// The five fields in the order they appear in an expression.
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    /// Legal values for this field. Constant per field kind.
    pub fn domain(self) -> RangeInclusive<u8> {
        match self {
            Field::Minute => 0..=59,
            Field::Hour => 0..=23,
            Field::DayOfMonth => 1..=31,
            Field::Month => 1..=12,
            Field::DayOfWeek => 0..=6,
        }
    }

    /// Row label used by the table formatter.
    pub fn label(self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day of month",
            Field::Month => "month",
            Field::DayOfWeek => "day of week",
        }
    }
}

/// A fully expanded cron entry.
///
/// Each field holds the explicit, ascending, duplicate-free list of values
/// the original expression matches; the command is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronEntry {
    pub minutes: Vec<u8>,
    pub hours: Vec<u8>,
    pub days_of_month: Vec<u8>,
    pub months: Vec<u8>,
    pub days_of_week: Vec<u8>,
    pub command: String,
}

impl CronEntry {
    /// The expanded value set for one field.
    pub fn values(&self, field: Field) -> &[u8] {
        match field {
            Field::Minute => &self.minutes,
            Field::Hour => &self.hours,
            Field::DayOfMonth => &self.days_of_month,
            Field::Month => &self.months,
            Field::DayOfWeek => &self.days_of_week,
        }
    }
}
