/// First BS year covered by the embedded month table (inclusive)
pub const MIN_BS_YEAR: u16 = 2070;
/// Last BS year covered by the embedded month table (inclusive)
pub const MAX_BS_YEAR: u16 = 2090;

/// Number of months in a BS year
pub const MONTHS_PER_YEAR: usize = 12;
/// Highest month number (Chaitra)
pub const MAX_MONTH: u8 = 12;
/// Month number for Baisakh, the first month of the BS year
pub const BAISAKH: u8 = 1;
/// Month number for Chaitra, the last month of the BS year
pub const CHAITRA: u8 = 12;

/// First day of month, used as the roll-over target of a forward walk
pub const MIN_DAY: u8 = 1;

/// Shortest month length observed in almanac data
pub const MIN_MONTH_DAYS: u8 = 28;
/// Longest month length observed in almanac data
pub const MAX_MONTH_DAYS: u8 = 32;

/// Day counts of each month for BS 2070..=2090, one row per year.
/// Row 0 is 2070 BS, row 10 is 2080 BS (the anchor year).
pub const BS_MONTH_DAYS: [[u8; MONTHS_PER_YEAR]; 21] = [
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2070
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2071
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2072
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2073
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2074
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2075
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2076
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2077
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2079
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2081
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2082
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2083
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2084
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2085
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 31], // 2086
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2087
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2088
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2089
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 31], // 2090
];

/// BS month names (index 0 is Baisakh)
pub const MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "Baisakh", "Jestha", "Ashad", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// Gregorian side of the reference anchor: 2023-04-14 AD
pub const ANCHOR_AD_YEAR: i32 = 2023;
pub const ANCHOR_AD_MONTH: u32 = 4;
pub const ANCHOR_AD_DAY: u32 = 14;

/// BS side of the reference anchor: 2080-01-01 BS
pub const ANCHOR_BS_YEAR: u16 = 2080;
pub const ANCHOR_BS_MONTH: u8 = BAISAKH;
pub const ANCHOR_BS_DAY: u8 = MIN_DAY;

/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';

/// Column header of the month grid, Sunday first
pub const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";
/// Columns in the month grid
pub const DAYS_PER_WEEK: u32 = 7;
