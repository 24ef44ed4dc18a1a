//! WHO Child Growth Standards (2006), 0-24 months
//!
//! LMS parameters at monthly breakpoints to 12 months, then quarterly to 24.
//! Values are the published figures to their printed precision; do not round.

use super::{Breakpoint, Lms, ReferenceTable, TableKey};
use crate::types::{GrowthMeasurement, Sex};

const fn lms(age_months: f64, l: f64, m: f64, s: f64) -> Breakpoint<Lms> {
    Breakpoint::new(age_months, Lms::new(l, m, s))
}

/// Select the LMS table for a sex x measurement pair.
pub fn table(sex: Sex, measurement: GrowthMeasurement) -> ReferenceTable<'static, Lms> {
    let points: &'static [Breakpoint<Lms>] = match (sex, measurement) {
        (Sex::Male, GrowthMeasurement::WeightForAge) => &WEIGHT_FOR_AGE_BOYS,
        (Sex::Female, GrowthMeasurement::WeightForAge) => &WEIGHT_FOR_AGE_GIRLS,
        (Sex::Male, GrowthMeasurement::LengthForAge) => &LENGTH_FOR_AGE_BOYS,
        (Sex::Female, GrowthMeasurement::LengthForAge) => &LENGTH_FOR_AGE_GIRLS,
    };
    ReferenceTable::new(TableKey::Growth { sex, measurement }, points)
}

/// Weight-for-age, boys (kg)
pub static WEIGHT_FOR_AGE_BOYS: [Breakpoint<Lms>; 17] = [
    lms(0.0, 0.3487, 3.3464, 0.14602),
    lms(1.0, 0.2297, 4.4709, 0.13395),
    lms(2.0, 0.1970, 5.5675, 0.12385),
    lms(3.0, 0.1738, 6.3762, 0.11727),
    lms(4.0, 0.1553, 7.0023, 0.11316),
    lms(5.0, 0.1395, 7.5105, 0.11080),
    lms(6.0, 0.1257, 7.9340, 0.10958),
    lms(7.0, 0.1134, 8.2970, 0.10902),
    lms(8.0, 0.1021, 8.6151, 0.10882),
    lms(9.0, 0.0917, 8.9014, 0.10881),
    lms(10.0, 0.0822, 9.1649, 0.10891),
    lms(11.0, 0.0736, 9.4122, 0.10906),
    lms(12.0, 0.0657, 9.6479, 0.10925),
    lms(15.0, 0.0450, 10.3002, 0.10983),
    lms(18.0, 0.0293, 10.9000, 0.11041),
    lms(21.0, 0.0175, 11.4746, 0.11099),
    lms(24.0, 0.0088, 12.0435, 0.11157),
];

/// Weight-for-age, girls (kg)
pub static WEIGHT_FOR_AGE_GIRLS: [Breakpoint<Lms>; 17] = [
    lms(0.0, 0.3809, 3.2322, 0.14171),
    lms(1.0, 0.1714, 4.1873, 0.13724),
    lms(2.0, 0.0962, 5.1282, 0.13000),
    lms(3.0, 0.0402, 5.8458, 0.12619),
    lms(4.0, -0.0050, 6.4237, 0.12402),
    lms(5.0, -0.0430, 6.8985, 0.12274),
    lms(6.0, -0.0756, 7.2970, 0.12204),
    lms(7.0, -0.1039, 7.6422, 0.12172),
    lms(8.0, -0.1288, 7.9487, 0.12162),
    lms(9.0, -0.1507, 8.2254, 0.12166),
    lms(10.0, -0.1700, 8.4800, 0.12179),
    lms(11.0, -0.1872, 8.7192, 0.12199),
    lms(12.0, -0.2024, 8.9481, 0.12223),
    lms(15.0, -0.2372, 9.5722, 0.12296),
    lms(18.0, -0.2630, 10.1541, 0.12378),
    lms(21.0, -0.2824, 10.7138, 0.12467),
    lms(24.0, -0.2971, 11.2759, 0.12561),
];

/// Length-for-age, boys (cm)
pub static LENGTH_FOR_AGE_BOYS: [Breakpoint<Lms>; 17] = [
    lms(0.0, 1.0, 49.8842, 0.03795),
    lms(1.0, 1.0, 54.7244, 0.03557),
    lms(2.0, 1.0, 58.4249, 0.03424),
    lms(3.0, 1.0, 61.4292, 0.03328),
    lms(4.0, 1.0, 63.8860, 0.03257),
    lms(5.0, 1.0, 65.9026, 0.03204),
    lms(6.0, 1.0, 67.6236, 0.03165),
    lms(7.0, 1.0, 69.1645, 0.03139),
    lms(8.0, 1.0, 70.5994, 0.03124),
    lms(9.0, 1.0, 71.9687, 0.03117),
    lms(10.0, 1.0, 73.2812, 0.03118),
    lms(11.0, 1.0, 74.5388, 0.03126),
    lms(12.0, 1.0, 75.7488, 0.03138),
    lms(15.0, 1.0, 79.1942, 0.03192),
    lms(18.0, 1.0, 82.2468, 0.03262),
    lms(21.0, 1.0, 85.0748, 0.03337),
    lms(24.0, 1.0, 87.8161, 0.03411),
];

/// Length-for-age, girls (cm)
pub static LENGTH_FOR_AGE_GIRLS: [Breakpoint<Lms>; 17] = [
    lms(0.0, 1.0, 49.1477, 0.03790),
    lms(1.0, 1.0, 53.6872, 0.03561),
    lms(2.0, 1.0, 57.0673, 0.03514),
    lms(3.0, 1.0, 59.8029, 0.03441),
    lms(4.0, 1.0, 62.0899, 0.03386),
    lms(5.0, 1.0, 64.0301, 0.03347),
    lms(6.0, 1.0, 65.7311, 0.03319),
    lms(7.0, 1.0, 67.2873, 0.03303),
    lms(8.0, 1.0, 68.7498, 0.03296),
    lms(9.0, 1.0, 70.1435, 0.03298),
    lms(10.0, 1.0, 71.4818, 0.03306),
    lms(11.0, 1.0, 72.7710, 0.03320),
    lms(12.0, 1.0, 74.0153, 0.03339),
    lms(15.0, 1.0, 77.5049, 0.03407),
    lms(18.0, 1.0, 80.7128, 0.03490),
    lms(21.0, 1.0, 83.6593, 0.03579),
    lms(24.0, 1.0, 86.4000, 0.03668),
];
