//! # Agenda Module
//!
//! Pure date-based aggregation over the availability collection. Everything
//! here works on snapshots: callers pass in the collections, nothing is read
//! from storage and nothing is cached. The calendar grid and the list views
//! are both built on these functions.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

use crate::domain::mappers::AvailabilityMapper;
use crate::domain::models::availability::Availability;
use crate::domain::models::member::FamilyMember;
use shared::AgendaDay;

/// One calendar day's worth of availability entries.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub availabilities: Vec<Availability>,
}

impl DayGroup {
    /// Locale-independent day identifier in "YYYY-MM-DD" form
    pub fn day_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Number of different members with at least one entry on this day
    pub fn distinct_member_count(&self) -> usize {
        let members: HashSet<&str> = self
            .availabilities
            .iter()
            .map(|a| a.member_id.as_str())
            .collect();
        members.len()
    }
}

/// Group availability entries by calendar day, days in ascending order.
/// Within a day, entries keep the order they appear in the input.
pub fn group_by_date(availabilities: &[Availability]) -> Vec<DayGroup> {
    let mut by_day: BTreeMap<NaiveDate, Vec<Availability>> = BTreeMap::new();

    for availability in availabilities {
        by_day
            .entry(availability.date)
            .or_default()
            .push(availability.clone());
    }

    by_day
        .into_iter()
        .map(|(date, availabilities)| DayGroup {
            date,
            availabilities,
        })
        .collect()
}

/// Days on which more than one distinct member is available.
/// Two entries from the same member never make a day "common".
pub fn common_dates(availabilities: &[Availability]) -> Vec<DayGroup> {
    group_by_date(availabilities)
        .into_iter()
        .filter(|group| group.distinct_member_count() > 1)
        .collect()
}

/// Look up a member by ID
pub fn resolve_member<'a>(members: &'a [FamilyMember], member_id: &str) -> Option<&'a FamilyMember> {
    members.iter().find(|m| m.id == member_id)
}

/// Color for rendering an entry, falling back to the default for entries
/// whose member cannot be resolved
pub fn member_color<'a>(members: &'a [FamilyMember], member_id: &str) -> &'a str {
    resolve_member(members, member_id)
        .map(|m| m.color.as_str())
        .unwrap_or(shared::DEFAULT_MEMBER_COLOR)
}

/// Drop entries whose member no longer exists. Views skip such entries
/// silently; the records themselves stay in storage untouched.
pub fn retain_resolvable(
    members: &[FamilyMember],
    availabilities: &[Availability],
) -> Vec<Availability> {
    availabilities
        .iter()
        .filter(|a| resolve_member(members, &a.member_id).is_some())
        .cloned()
        .collect()
}

/// Assemble the full agenda list view: resolvable entries grouped by day.
pub fn agenda_days(members: &[FamilyMember], availabilities: &[Availability]) -> Vec<AgendaDay> {
    let visible = retain_resolvable(members, availabilities);
    group_by_date(&visible).into_iter().map(to_agenda_day).collect()
}

/// Assemble the "everyone's free" list view: days where more than one
/// distinct member has an entry, after dropping unresolvable entries.
pub fn common_days(members: &[FamilyMember], availabilities: &[Availability]) -> Vec<AgendaDay> {
    let visible = retain_resolvable(members, availabilities);
    common_dates(&visible).into_iter().map(to_agenda_day).collect()
}

fn to_agenda_day(group: DayGroup) -> AgendaDay {
    AgendaDay {
        date: group.day_key(),
        availabilities: group
            .availabilities
            .into_iter()
            .map(AvailabilityMapper::to_dto)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, name: &str) -> FamilyMember {
        FamilyMember {
            id: id.to_string(),
            name: name.to_string(),
            color: "#8b5cf6".to_string(),
            avatar: None,
        }
    }

    fn entry(id: &str, member_id: &str, date: NaiveDate) -> Availability {
        Availability {
            id: id.to_string(),
            member_id: member_id.to_string(),
            date,
            all_day: true,
            time_slots: None,
            note: None,
        }
    }

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_group_by_date_empty_input() {
        assert!(group_by_date(&[]).is_empty());
        assert!(common_dates(&[]).is_empty());
    }

    #[test]
    fn test_group_by_date_orders_days_ascending() {
        let entries = vec![
            entry("availability::3", "member::a", june(15)),
            entry("availability::1", "member::a", june(1)),
            entry("availability::2", "member::a", june(8)),
        ];

        let groups = group_by_date(&entries);
        let dates: Vec<NaiveDate> = groups.iter().map(|g| g.date).collect();
        assert_eq!(dates, vec![june(1), june(8), june(15)]);
    }

    #[test]
    fn test_group_by_date_partitions_every_entry_exactly_once() {
        let entries = vec![
            entry("availability::1", "member::a", june(1)),
            entry("availability::2", "member::b", june(1)),
            entry("availability::3", "member::a", june(8)),
        ];

        let groups = group_by_date(&entries);
        let total: usize = groups.iter().map(|g| g.availabilities.len()).sum();
        assert_eq!(total, entries.len());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].availabilities.len(), 2);
        assert_eq!(groups[1].availabilities.len(), 1);
    }

    #[test]
    fn test_group_by_date_keeps_input_order_within_a_day() {
        let entries = vec![
            entry("availability::1", "member::a", june(1)),
            entry("availability::2", "member::b", june(1)),
            entry("availability::3", "member::c", june(1)),
        ];

        let groups = group_by_date(&entries);
        let ids: Vec<&str> = groups[0]
            .availabilities
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["availability::1", "availability::2", "availability::3"]);
    }

    #[test]
    fn test_day_key_format() {
        let group = DayGroup {
            date: june(3),
            availabilities: Vec::new(),
        };
        assert_eq!(group.day_key(), "2024-06-03");
    }

    #[test]
    fn test_common_dates_requires_distinct_members() {
        // Two entries by the same member on the same day is not a common date
        let same_member = vec![
            entry("availability::1", "member::a", june(1)),
            entry("availability::2", "member::a", june(1)),
        ];
        assert!(common_dates(&same_member).is_empty());

        // Two different members on the same day is
        let two_members = vec![
            entry("availability::1", "member::a", june(1)),
            entry("availability::2", "member::b", june(1)),
        ];
        let common = common_dates(&two_members);
        assert_eq!(common.len(), 1);
        assert_eq!(common[0].date, june(1));
    }

    #[test]
    fn test_common_dates_is_subset_of_grouped_days() {
        let entries = vec![
            entry("availability::1", "member::a", june(1)),
            entry("availability::2", "member::b", june(1)),
            entry("availability::3", "member::a", june(8)),
            entry("availability::4", "member::b", june(15)),
            entry("availability::5", "member::c", june(15)),
        ];

        let all_days = group_by_date(&entries);
        let common = common_dates(&entries);

        assert_eq!(all_days.len(), 3);
        assert_eq!(common.len(), 2);
        for group in &common {
            assert!(all_days.contains(group));
        }
    }

    #[test]
    fn test_distinct_member_count() {
        let group = DayGroup {
            date: june(1),
            availabilities: vec![
                entry("availability::1", "member::a", june(1)),
                entry("availability::2", "member::a", june(1)),
                entry("availability::3", "member::b", june(1)),
            ],
        };
        assert_eq!(group.distinct_member_count(), 2);
    }

    #[test]
    fn test_resolve_member_and_color_fallback() {
        let members = vec![member("member::a", "Alice")];

        assert!(resolve_member(&members, "member::a").is_some());
        assert!(resolve_member(&members, "member::gone").is_none());

        assert_eq!(member_color(&members, "member::a"), "#8b5cf6");
        assert_eq!(member_color(&members, "member::gone"), shared::DEFAULT_MEMBER_COLOR);
    }

    #[test]
    fn test_agenda_days_skips_entries_of_vanished_members() {
        let members = vec![member("member::a", "Alice")];
        let entries = vec![
            entry("availability::1", "member::a", june(1)),
            entry("availability::2", "member::gone", june(1)),
            entry("availability::3", "member::gone", june(8)),
        ];

        let days = agenda_days(&members, &entries);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, "2024-06-01");
        assert_eq!(days[0].availabilities.len(), 1);
        assert_eq!(days[0].availabilities[0].id, "availability::1");
    }

    #[test]
    fn test_common_days_ignores_vanished_members() {
        // member::gone would make June 1st look common if stale entries counted
        let members = vec![member("member::a", "Alice"), member("member::b", "Bob")];
        let entries = vec![
            entry("availability::1", "member::a", june(1)),
            entry("availability::2", "member::gone", june(1)),
            entry("availability::3", "member::a", june(8)),
            entry("availability::4", "member::b", june(8)),
        ];

        let days = common_days(&members, &entries);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, "2024-06-08");
    }

    #[test]
    fn test_agenda_days_dates_come_back_sorted() {
        let members = vec![member("member::a", "Alice")];
        let entries = vec![
            entry("availability::1", "member::a", june(20)),
            entry("availability::2", "member::a", june(2)),
            entry("availability::3", "member::a", june(11)),
        ];

        let days = agenda_days(&members, &entries);
        let keys: Vec<&str> = days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(keys, vec!["2024-06-02", "2024-06-11", "2024-06-20"]);
    }
}
