// Test fixtures - reusable test data
// Provides consistent catalogs and tables across all test files

#![allow(dead_code)]

use std::sync::Arc;

use timetable_planner::models::lecture::{Catalog, Lecture};
use timetable_planner::models::schedule::{ScheduleEntry, ScheduleFragment};
use timetable_planner::models::table::{TableId, TableState, TimetableCollection, INITIAL_TABLE_ID};

/// Sample lectures for testing
pub mod lectures {
    use super::*;

    /// CS201 Data Structures, grade 2, Mon 1~2 and Wed 3
    pub fn data_structures() -> Lecture {
        Lecture::new("CS201", "Data Structures", "3", "CS", 2).with_schedule("Mon1~2(101)<p>Wed3(102)")
    }

    /// BIO101 General Biology, grade 1, Tue 5~6
    pub fn biology() -> Lecture {
        Lecture::new("BIO101", "General Biology", "3", "BIO", 1).with_schedule("Tue5~6(B12)")
    }

    /// ART110 Drawing, a two-credit evening class
    pub fn drawing() -> Lecture {
        Lecture::new("ART110", "Drawing", "2", "ART", 1).with_schedule("Thu19~20(Studio)")
    }

    /// GE100 Writing, no fixed schedule
    pub fn writing() -> Lecture {
        Lecture::new("GE100", "Writing", "2", "General", 1)
    }
}

/// Small catalog: majors partition followed by liberal arts.
pub fn sample_catalog() -> Catalog {
    Catalog::from_partitions(vec![
        vec![lectures::data_structures(), lectures::biology()],
        vec![lectures::drawing(), lectures::writing()],
    ])
}

/// Catalog of `count` generated lectures spread over the week.
pub fn generated_catalog(count: usize) -> Catalog {
    const DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];
    Catalog::new(
        (0..count)
            .map(|n| {
                let start = n % 22 + 1;
                Lecture::new(
                    format!("GEN{:04}", n),
                    format!("Generated Lecture {}", n),
                    format!("{}", n % 3 + 1),
                    ["CS", "BIO", "ART"][n % 3],
                    (n % 4 + 1) as u8,
                )
                .with_schedule(format!("{}{}~{}(R{})", DAYS[n % 5], start, start + 2, n))
            })
            .collect(),
    )
}

pub fn entry(lecture: &Arc<Lecture>, day: &str, range: Vec<u8>) -> ScheduleEntry {
    ScheduleEntry::from_fragment(ScheduleFragment::new(day, range, "101"), Arc::clone(lecture))
}

/// Two tables: the initial one holding `entries`, and an untouched second one.
pub fn two_tables(entries: Vec<ScheduleEntry>) -> TimetableCollection {
    let other = Arc::new(lectures::biology());
    TimetableCollection::with_initial_table()
        .with_table(TableId::from(INITIAL_TABLE_ID), TableState::new(entries))
        .with_table(TableId::from("schedule-2"), TableState::new(vec![entry(&other, "Fri", vec![9])]))
}
