//! AAP 2017 pediatric blood-pressure normative tables
//!
//! One row per integer age year (1-17), one column per height percentile.
//! Rows are never blended across ages: a 10.5-year-old is scored against the
//! age-10 row by the caller's choice of integer age.

use serde::{Deserialize, Serialize};

use super::{TableError, TableKey};
use crate::types::clinical_thresholds::{BP_MAX_AGE_YEARS, BP_MIN_AGE_YEARS};
use crate::types::{HeightPercentile, Sex};

/// Systolic and diastolic mean/SD for one (sex, age, height percentile) cell (mmHg)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BpParams {
    pub sys_mean: f64,
    pub sys_sd: f64,
    pub dia_mean: f64,
    pub dia_sd: f64,
}

impl BpParams {
    pub const fn new(sys_mean: f64, sys_sd: f64, dia_mean: f64, dia_sd: f64) -> Self {
        Self {
            sys_mean,
            sys_sd,
            dia_mean,
            dia_sd,
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.sys_mean, self.sys_sd, self.dia_mean, self.dia_sd]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

const fn bp(sys_mean: f64, sys_sd: f64, dia_mean: f64, dia_sd: f64) -> BpParams {
    BpParams::new(sys_mean, sys_sd, dia_mean, dia_sd)
}

/// Age-indexed normative rows for one sex
#[derive(Debug, Clone, Copy)]
pub struct BpTable {
    sex: Sex,
    rows: &'static [[BpParams; 7]],
}

impl BpTable {
    pub fn key(&self) -> TableKey {
        TableKey::BloodPressure { sex: self.sex }
    }

    pub fn rows(&self) -> &'static [[BpParams; 7]] {
        self.rows
    }

    /// Exact integer-age lookup; `None` outside the covered ages.
    pub fn row(&self, age_years: i32, height: HeightPercentile) -> Option<&'static BpParams> {
        if !(BP_MIN_AGE_YEARS..=BP_MAX_AGE_YEARS).contains(&age_years) {
            return None;
        }
        let index = usize::try_from(age_years - BP_MIN_AGE_YEARS).ok()?;
        self.rows.get(index).map(|row| &row[height.column()])
    }

    /// One row per covered age year, every cell positive and finite.
    pub fn validate(&self) -> Result<(), TableError> {
        let expected = usize::try_from(BP_MAX_AGE_YEARS - BP_MIN_AGE_YEARS + 1).unwrap_or(0);
        if self.rows.len() != expected {
            return Err(TableError::RowCount {
                key: self.key(),
                expected,
                found: self.rows.len(),
            });
        }
        for (index, row) in self.rows.iter().enumerate() {
            if !row.iter().all(BpParams::is_valid) {
                return Err(TableError::InvalidParams {
                    key: self.key(),
                    index,
                });
            }
        }
        Ok(())
    }
}

/// Select the normative table for a sex.
pub fn table(sex: Sex) -> BpTable {
    let rows: &'static [[BpParams; 7]] = match sex {
        Sex::Male => &MALE_ROWS,
        Sex::Female => &FEMALE_ROWS,
    };
    BpTable { sex, rows }
}

/// AAP 2017 normative BP, boys: `[age 1..=17][height p5..p95]`
pub static MALE_ROWS: [[BpParams; 7]; 17] = [
    // Age 1
    [
        bp(84.0, 7.0, 39.0, 6.0),
        bp(85.0, 7.0, 40.0, 6.0),
        bp(86.0, 7.0, 41.0, 6.0),
        bp(87.0, 7.0, 42.0, 6.0),
        bp(88.0, 7.0, 42.0, 6.0),
        bp(89.0, 7.0, 43.0, 6.0),
        bp(90.0, 7.0, 43.0, 6.0),
    ],
    // Age 2
    [
        bp(87.0, 7.0, 43.0, 6.0),
        bp(88.0, 7.0, 44.0, 6.0),
        bp(89.0, 7.0, 45.0, 6.0),
        bp(91.0, 7.0, 46.0, 6.0),
        bp(92.0, 7.0, 47.0, 6.0),
        bp(93.0, 7.0, 47.0, 6.0),
        bp(93.0, 7.0, 48.0, 6.0),
    ],
    // Age 3
    [
        bp(88.0, 7.0, 46.0, 6.0),
        bp(89.0, 7.0, 47.0, 6.0),
        bp(91.0, 7.0, 48.0, 6.0),
        bp(92.0, 7.0, 49.0, 6.0),
        bp(93.0, 7.0, 49.0, 6.0),
        bp(94.0, 7.0, 50.0, 6.0),
        bp(95.0, 7.0, 50.0, 6.0),
    ],
    // Age 4
    [
        bp(90.0, 7.0, 49.0, 5.0),
        bp(91.0, 7.0, 50.0, 5.0),
        bp(92.0, 7.0, 51.0, 5.0),
        bp(93.0, 7.0, 52.0, 5.0),
        bp(95.0, 7.0, 52.0, 5.0),
        bp(96.0, 7.0, 53.0, 5.0),
        bp(96.0, 7.0, 53.0, 5.0),
    ],
    // Age 5
    [
        bp(91.0, 7.0, 52.0, 5.0),
        bp(92.0, 7.0, 52.0, 5.0),
        bp(93.0, 7.0, 53.0, 5.0),
        bp(95.0, 7.0, 54.0, 5.0),
        bp(96.0, 7.0, 55.0, 5.0),
        bp(97.0, 7.0, 55.0, 5.0),
        bp(98.0, 7.0, 56.0, 5.0),
    ],
    // Age 6
    [
        bp(92.0, 7.0, 54.0, 5.0),
        bp(93.0, 7.0, 55.0, 5.0),
        bp(94.0, 7.0, 56.0, 5.0),
        bp(96.0, 7.0, 56.0, 5.0),
        bp(97.0, 7.0, 57.0, 5.0),
        bp(98.0, 7.0, 58.0, 5.0),
        bp(99.0, 7.0, 58.0, 5.0),
    ],
    // Age 7
    [
        bp(93.0, 7.0, 56.0, 5.0),
        bp(94.0, 7.0, 57.0, 5.0),
        bp(95.0, 7.0, 57.0, 5.0),
        bp(97.0, 7.0, 58.0, 5.0),
        bp(98.0, 7.0, 59.0, 5.0),
        bp(100.0, 7.0, 59.0, 5.0),
        bp(100.0, 7.0, 60.0, 5.0),
    ],
    // Age 8
    [
        bp(94.0, 7.0, 57.0, 5.0),
        bp(95.0, 7.0, 58.0, 5.0),
        bp(97.0, 7.0, 59.0, 5.0),
        bp(98.0, 7.0, 59.0, 5.0),
        bp(100.0, 7.0, 60.0, 5.0),
        bp(101.0, 7.0, 61.0, 5.0),
        bp(101.0, 7.0, 61.0, 5.0),
    ],
    // Age 9
    [
        bp(95.0, 8.0, 58.0, 5.0),
        bp(96.0, 8.0, 59.0, 5.0),
        bp(98.0, 8.0, 60.0, 5.0),
        bp(99.0, 8.0, 60.0, 5.0),
        bp(101.0, 8.0, 61.0, 5.0),
        bp(102.0, 8.0, 62.0, 5.0),
        bp(103.0, 8.0, 62.0, 5.0),
    ],
    // Age 10
    [
        bp(97.0, 8.0, 59.0, 5.0),
        bp(97.0, 8.0, 60.0, 5.0),
        bp(99.0, 8.0, 61.0, 5.0),
        bp(101.0, 8.0, 61.0, 5.0),
        bp(102.0, 8.0, 62.0, 5.0),
        bp(103.0, 8.0, 63.0, 5.0),
        bp(104.0, 8.0, 63.0, 5.0),
    ],
    // Age 11
    [
        bp(99.0, 8.0, 60.0, 5.0),
        bp(99.0, 8.0, 61.0, 5.0),
        bp(101.0, 8.0, 61.0, 5.0),
        bp(103.0, 8.0, 62.0, 5.0),
        bp(104.0, 8.0, 63.0, 5.0),
        bp(105.0, 8.0, 63.0, 5.0),
        bp(106.0, 8.0, 64.0, 5.0),
    ],
    // Age 12
    [
        bp(101.0, 8.0, 61.0, 5.0),
        bp(102.0, 8.0, 61.0, 5.0),
        bp(103.0, 8.0, 62.0, 5.0),
        bp(105.0, 8.0, 63.0, 5.0),
        bp(106.0, 8.0, 63.0, 5.0),
        bp(108.0, 8.0, 64.0, 5.0),
        bp(108.0, 8.0, 64.0, 5.0),
    ],
    // Age 13
    [
        bp(104.0, 8.0, 61.0, 5.0),
        bp(104.0, 8.0, 62.0, 5.0),
        bp(106.0, 8.0, 62.0, 5.0),
        bp(107.0, 8.0, 63.0, 5.0),
        bp(109.0, 8.0, 64.0, 5.0),
        bp(110.0, 8.0, 64.0, 5.0),
        bp(111.0, 8.0, 65.0, 5.0),
    ],
    // Age 14
    [
        bp(106.0, 8.0, 62.0, 5.0),
        bp(107.0, 8.0, 62.0, 5.0),
        bp(108.0, 8.0, 63.0, 5.0),
        bp(110.0, 8.0, 63.0, 5.0),
        bp(111.0, 8.0, 64.0, 5.0),
        bp(113.0, 8.0, 65.0, 5.0),
        bp(113.0, 8.0, 65.0, 5.0),
    ],
    // Age 15
    [
        bp(109.0, 8.0, 63.0, 5.0),
        bp(109.0, 8.0, 63.0, 5.0),
        bp(111.0, 8.0, 63.0, 5.0),
        bp(112.0, 8.0, 64.0, 5.0),
        bp(114.0, 8.0, 65.0, 5.0),
        bp(115.0, 8.0, 65.0, 5.0),
        bp(116.0, 8.0, 66.0, 5.0),
    ],
    // Age 16
    [
        bp(111.0, 9.0, 64.0, 5.0),
        bp(112.0, 9.0, 64.0, 5.0),
        bp(113.0, 9.0, 64.0, 5.0),
        bp(114.0, 9.0, 65.0, 5.0),
        bp(116.0, 9.0, 65.0, 5.0),
        bp(117.0, 9.0, 66.0, 5.0),
        bp(118.0, 9.0, 66.0, 5.0),
    ],
    // Age 17
    [
        bp(114.0, 9.0, 65.0, 5.0),
        bp(114.0, 9.0, 65.0, 5.0),
        bp(115.0, 9.0, 65.0, 5.0),
        bp(117.0, 9.0, 66.0, 5.0),
        bp(118.0, 9.0, 66.0, 5.0),
        bp(119.0, 9.0, 67.0, 5.0),
        bp(120.0, 9.0, 67.0, 5.0),
    ],
];

/// AAP 2017 normative BP, girls: `[age 1..=17][height p5..p95]`
pub static FEMALE_ROWS: [[BpParams; 7]; 17] = [
    // Age 1
    [
        bp(84.0, 7.0, 41.0, 6.0),
        bp(85.0, 7.0, 42.0, 6.0),
        bp(86.0, 7.0, 42.0, 6.0),
        bp(87.0, 7.0, 43.0, 6.0),
        bp(88.0, 7.0, 44.0, 6.0),
        bp(89.0, 7.0, 44.0, 6.0),
        bp(89.0, 7.0, 45.0, 6.0),
    ],
    // Age 2
    [
        bp(87.0, 7.0, 45.0, 6.0),
        bp(87.0, 7.0, 46.0, 6.0),
        bp(88.0, 7.0, 46.0, 6.0),
        bp(90.0, 7.0, 47.0, 6.0),
        bp(91.0, 7.0, 48.0, 6.0),
        bp(91.0, 7.0, 49.0, 6.0),
        bp(92.0, 7.0, 49.0, 6.0),
    ],
    // Age 3
    [
        bp(88.0, 7.0, 48.0, 5.0),
        bp(88.0, 7.0, 48.0, 5.0),
        bp(89.0, 7.0, 49.0, 5.0),
        bp(91.0, 7.0, 50.0, 5.0),
        bp(92.0, 7.0, 51.0, 5.0),
        bp(93.0, 7.0, 51.0, 5.0),
        bp(93.0, 7.0, 52.0, 5.0),
    ],
    // Age 4
    [
        bp(89.0, 7.0, 51.0, 5.0),
        bp(89.0, 7.0, 51.0, 5.0),
        bp(91.0, 7.0, 52.0, 5.0),
        bp(92.0, 7.0, 52.0, 5.0),
        bp(93.0, 7.0, 53.0, 5.0),
        bp(94.0, 7.0, 54.0, 5.0),
        bp(95.0, 7.0, 54.0, 5.0),
    ],
    // Age 5
    [
        bp(90.0, 7.0, 53.0, 5.0),
        bp(90.0, 7.0, 53.0, 5.0),
        bp(91.0, 7.0, 54.0, 5.0),
        bp(93.0, 7.0, 54.0, 5.0),
        bp(94.0, 7.0, 55.0, 5.0),
        bp(95.0, 7.0, 56.0, 5.0),
        bp(96.0, 7.0, 56.0, 5.0),
    ],
    // Age 6
    [
        bp(91.0, 7.0, 55.0, 5.0),
        bp(92.0, 7.0, 55.0, 5.0),
        bp(93.0, 7.0, 55.0, 5.0),
        bp(94.0, 7.0, 56.0, 5.0),
        bp(95.0, 7.0, 57.0, 5.0),
        bp(96.0, 7.0, 57.0, 5.0),
        bp(97.0, 7.0, 58.0, 5.0),
    ],
    // Age 7
    [
        bp(92.0, 7.0, 56.0, 5.0),
        bp(93.0, 7.0, 56.0, 5.0),
        bp(94.0, 7.0, 57.0, 5.0),
        bp(95.0, 7.0, 57.0, 5.0),
        bp(96.0, 7.0, 58.0, 5.0),
        bp(97.0, 7.0, 59.0, 5.0),
        bp(98.0, 7.0, 59.0, 5.0),
    ],
    // Age 8
    [
        bp(93.0, 7.0, 57.0, 5.0),
        bp(94.0, 7.0, 57.0, 5.0),
        bp(95.0, 7.0, 58.0, 5.0),
        bp(96.0, 7.0, 58.0, 5.0),
        bp(98.0, 7.0, 59.0, 5.0),
        bp(99.0, 7.0, 60.0, 5.0),
        bp(99.0, 7.0, 60.0, 5.0),
    ],
    // Age 9
    [
        bp(95.0, 8.0, 58.0, 5.0),
        bp(95.0, 8.0, 58.0, 5.0),
        bp(96.0, 8.0, 59.0, 5.0),
        bp(98.0, 8.0, 59.0, 5.0),
        bp(99.0, 8.0, 60.0, 5.0),
        bp(100.0, 8.0, 61.0, 5.0),
        bp(101.0, 8.0, 61.0, 5.0),
    ],
    // Age 10
    [
        bp(96.0, 8.0, 59.0, 5.0),
        bp(97.0, 8.0, 59.0, 5.0),
        bp(98.0, 8.0, 60.0, 5.0),
        bp(99.0, 8.0, 60.0, 5.0),
        bp(101.0, 8.0, 61.0, 5.0),
        bp(102.0, 8.0, 62.0, 5.0),
        bp(103.0, 8.0, 62.0, 5.0),
    ],
    // Age 11
    [
        bp(98.0, 8.0, 60.0, 5.0),
        bp(99.0, 8.0, 60.0, 5.0),
        bp(100.0, 8.0, 60.0, 5.0),
        bp(101.0, 8.0, 61.0, 5.0),
        bp(103.0, 8.0, 62.0, 5.0),
        bp(104.0, 8.0, 62.0, 5.0),
        bp(104.0, 8.0, 63.0, 5.0),
    ],
    // Age 12
    [
        bp(100.0, 8.0, 61.0, 5.0),
        bp(101.0, 8.0, 61.0, 5.0),
        bp(102.0, 8.0, 61.0, 5.0),
        bp(103.0, 8.0, 62.0, 5.0),
        bp(105.0, 8.0, 62.0, 5.0),
        bp(106.0, 8.0, 63.0, 5.0),
        bp(106.0, 8.0, 63.0, 5.0),
    ],
    // Age 13
    [
        bp(102.0, 8.0, 61.0, 5.0),
        bp(102.0, 8.0, 62.0, 5.0),
        bp(104.0, 8.0, 62.0, 5.0),
        bp(105.0, 8.0, 63.0, 5.0),
        bp(106.0, 8.0, 63.0, 5.0),
        bp(107.0, 8.0, 64.0, 5.0),
        bp(108.0, 8.0, 64.0, 5.0),
    ],
    // Age 14
    [
        bp(103.0, 8.0, 62.0, 5.0),
        bp(103.0, 8.0, 62.0, 5.0),
        bp(105.0, 8.0, 63.0, 5.0),
        bp(106.0, 8.0, 63.0, 5.0),
        bp(107.0, 8.0, 64.0, 5.0),
        bp(108.0, 8.0, 64.0, 5.0),
        bp(109.0, 8.0, 65.0, 5.0),
    ],
    // Age 15
    [
        bp(103.0, 8.0, 63.0, 5.0),
        bp(104.0, 8.0, 63.0, 5.0),
        bp(105.0, 8.0, 63.0, 5.0),
        bp(107.0, 8.0, 64.0, 5.0),
        bp(108.0, 8.0, 64.0, 5.0),
        bp(109.0, 8.0, 65.0, 5.0),
        bp(109.0, 8.0, 65.0, 5.0),
    ],
    // Age 16
    [
        bp(104.0, 8.0, 63.0, 5.0),
        bp(104.0, 8.0, 64.0, 5.0),
        bp(106.0, 8.0, 64.0, 5.0),
        bp(107.0, 8.0, 64.0, 5.0),
        bp(108.0, 8.0, 65.0, 5.0),
        bp(109.0, 8.0, 66.0, 5.0),
        bp(110.0, 8.0, 66.0, 5.0),
    ],
    // Age 17
    [
        bp(104.0, 8.0, 64.0, 5.0),
        bp(105.0, 8.0, 64.0, 5.0),
        bp(106.0, 8.0, 64.0, 5.0),
        bp(107.0, 8.0, 65.0, 5.0),
        bp(108.0, 8.0, 65.0, 5.0),
        bp(110.0, 8.0, 66.0, 5.0),
        bp(110.0, 8.0, 66.0, 5.0),
    ],
];
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_year_old_male_p50_row() {
        let row = table(Sex::Male).row(10, HeightPercentile::P50).unwrap();
        assert_eq!(row.sys_mean, 101.0);
        assert_eq!(row.sys_sd, 8.0);
        assert_eq!(row.dia_mean, 61.0);
        assert_eq!(row.dia_sd, 5.0);
    }

    #[test]
    fn test_ten_year_old_female_p50_row() {
        let row = table(Sex::Female).row(10, HeightPercentile::P50).unwrap();
        assert_eq!(row.sys_mean, 99.0);
        assert_eq!(row.sys_sd, 8.0);
    }

    #[test]
    fn test_row_outside_ages_is_none() {
        let t = table(Sex::Male);
        assert!(t.row(0, HeightPercentile::P50).is_none());
        assert!(t.row(18, HeightPercentile::P50).is_none());
        assert!(t.row(-3, HeightPercentile::P5).is_none());
        assert!(t.row(1, HeightPercentile::P5).is_some());
        assert!(t.row(17, HeightPercentile::P95).is_some());
    }

    #[test]
    fn test_tables_validate() {
        assert!(table(Sex::Male).validate().is_ok());
        assert!(table(Sex::Female).validate().is_ok());
    }
}
