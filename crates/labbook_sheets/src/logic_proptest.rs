#[cfg(test)]
mod tests {
    use crate::logic::{build_week_grid, week_dates, SlotState, TIME_SLOTS};
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use labbook_common::services::Record;
    use proptest::prelude::*;

    prop_compose! {
        fn arb_date()(days in 0i64..36_500) -> NaiveDate {
            // Any day in roughly 1970..2070.
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Duration::days(days)
        }
    }

    proptest! {
        #[test]
        fn week_is_seven_consecutive_days_starting_saturday(reference in arb_date()) {
            let dates = week_dates(reference);

            prop_assert_eq!(dates[0].weekday(), Weekday::Sat);
            for i in 1..7 {
                prop_assert_eq!(dates[i], dates[i - 1] + Duration::days(1));
            }
            prop_assert!(dates.contains(&reference));
        }

        #[test]
        fn same_week_references_share_a_week_start(
            reference in arb_date(),
            offset in 0i64..7,
        ) {
            let start = week_dates(reference)[0];
            let other = week_dates(start + Duration::days(offset))[0];
            prop_assert_eq!(start, other);
        }

        #[test]
        fn grid_shape_is_always_seven_by_twenty_five(
            reference in arb_date(),
            today in arb_date(),
        ) {
            let grid = build_week_grid(reference, &[], today);

            prop_assert_eq!(grid.days.len(), 7);
            for day in &grid.days {
                prop_assert_eq!(day.cells.len(), TIME_SLOTS.len());
            }
        }

        #[test]
        fn cells_before_today_are_past_and_cells_on_or_after_are_not(
            reference in arb_date(),
            today in arb_date(),
            slot in 0usize..25,
            user in "[a-zA-Z]{1,12}",
        ) {
            // One record per day of the week, all on the same slot.
            let records: Vec<Record> = week_dates(reference)
                .iter()
                .map(|d| Record::new(d.format("%Y-%m-%d").to_string(), TIME_SLOTS[slot], user.clone(), "tan"))
                .collect();
            let grid = build_week_grid(reference, &records, today);

            for day in &grid.days {
                if day.date < today {
                    prop_assert!(day.cells.iter().all(|c| *c == SlotState::Past));
                } else {
                    prop_assert!(
                        matches!(day.cells[slot], SlotState::Booked { .. }),
                        "expected SlotState::Booked at slot {}",
                        slot
                    );
                    prop_assert!(!day.cells.iter().any(|c| *c == SlotState::Past));
                }
            }
        }
    }
}
