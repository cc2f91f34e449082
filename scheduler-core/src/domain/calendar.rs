//! Calendar domain logic for the family scheduler.
//!
//! This module contains all business logic related to calendar operations:
//! month-grid generation, date calculations, and focus-date navigation. The
//! UI should only handle presentation concerns, while all calendar
//! computations and business rules are handled here.

use shared::{Availability, CalendarDay, CalendarDayType, CalendarFocusDate, CalendarMonth};
use std::collections::HashMap;
use chrono::{Local, Datelike};
use std::sync::{Arc, Mutex};
use log::{self, info};

use crate::domain::agenda;
use crate::domain::availability_service::AvailabilityService;
use crate::domain::mappers::AvailabilityMapper;
use crate::domain::member_service::MemberService;
use anyhow::{anyhow, Result};

/// Calendar service that handles all calendar-related business logic
#[derive(Clone)]
pub struct CalendarService {
    /// Current focus date for calendar navigation (month/year only)
    /// This is kept in memory and never persisted
    current_focus_date: Arc<Mutex<CalendarFocusDate>>,
}

impl CalendarService {
    /// Create a new CalendarService instance
    pub fn new() -> Self {
        Self {
            current_focus_date: Arc::new(Mutex::new(CalendarFocusDate::default())),
        }
    }

    /// Get the month grid with each day's availability entries.
    ///
    /// Orchestrates the read from both domain services: entries whose member
    /// no longer exists are skipped here, so the grid never shows them.
    pub fn calendar_month(
        &self,
        month: u32,
        year: u32,
        member_service: &MemberService,
        availability_service: &AvailabilityService,
    ) -> Result<CalendarMonth> {
        info!("🗓️ CALENDAR: Building month view for {}/{}", month, year);

        let members = member_service.list_members()?.members;
        let listed = availability_service.list_availabilities()?.availabilities;

        let visible = agenda::retain_resolvable(&members, &listed);
        if visible.len() < listed.len() {
            info!(
                "🗓️ CALENDAR: Skipping {} entries without a resolvable member",
                listed.len() - visible.len()
            );
        }

        let dto_entries: Vec<Availability> = visible
            .into_iter()
            .map(AvailabilityMapper::to_dto)
            .collect();

        info!("🗓️ CALENDAR: {} entries feed the {}/{} grid", dto_entries.len(), month, year);

        let calendar_month = self.generate_calendar_month(month, year, dto_entries);

        info!("🗓️ CALENDAR: Generated calendar with {} day cells", calendar_month.days.len());

        Ok(calendar_month)
    }

    /// Generate a calendar month view from availability entries
    pub fn generate_calendar_month(
        &self,
        month: u32,
        year: u32,
        availabilities: Vec<Availability>,
    ) -> CalendarMonth {
        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);

        log::debug!("🗓️ CALENDAR DEBUG: Generating calendar for {}/{}", month, year);
        log::debug!(
            "🗓️ CALENDAR DEBUG: Days in month: {}, first day of week: {}",
            days_in_month,
            first_day
        );

        let availabilities_by_day = self.group_availabilities_by_day(month, year, &availabilities);

        let mut calendar_days = Vec::new();

        // Empty cells so day 1 lands on its weekday column (Sunday-first grid)
        log::debug!("🗓️ CALENDAR DEBUG: Adding {} padding days before month", first_day);
        for _ in 0..first_day {
            calendar_days.push(CalendarDay {
                day: 0,
                availabilities: Vec::new(),
                day_type: CalendarDayType::PaddingBefore,
            });
        }

        for day in 1..=days_in_month {
            let day_availabilities = availabilities_by_day.get(&day).cloned().unwrap_or_default();
            calendar_days.push(CalendarDay {
                day,
                availabilities: day_availabilities,
                day_type: CalendarDayType::MonthDay,
            });
        }

        log::debug!("🗓️ CALENDAR DEBUG: Total calendar days created: {}", calendar_days.len());

        CalendarMonth {
            month,
            year,
            days: calendar_days,
            first_day_of_week: first_day,
        }
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: u32) -> u32 {
        match month {
            2 => if self.is_leap_year(year) { 29 } else { 28 },
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: u32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: u32) -> u32 {
        use chrono::{NaiveDate, Datelike};

        if let Some(date) = NaiveDate::from_ymd_opt(year as i32, month, 1) {
            // chrono's weekday(): Monday = 1, ..., Sunday = 7
            // Our format: Sunday = 0, Monday = 1, ..., Saturday = 6
            date.weekday().num_days_from_sunday()
        } else {
            // Invalid date, fallback to 0 (Sunday)
            0
        }
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Group availability entries by day for a specific month and year
    fn group_availabilities_by_day(
        &self,
        month: u32,
        year: u32,
        availabilities: &[Availability],
    ) -> HashMap<u32, Vec<Availability>> {
        let mut availabilities_by_day: HashMap<u32, Vec<Availability>> = HashMap::new();

        for availability in availabilities {
            if let Some((a_year, a_month, a_day)) = self.parse_entry_date(&availability.date) {
                if a_month == month && a_year == year {
                    availabilities_by_day
                        .entry(a_day)
                        .or_insert_with(Vec::new)
                        .push(availability.clone());
                }
            }
        }

        availabilities_by_day
    }

    /// Parse an RFC 3339 date string to extract year, month, day
    pub fn parse_entry_date(&self, date_str: &str) -> Option<(u32, u32, u32)> {
        // Parse RFC 3339 dates (e.g., "2024-06-01T00:00:00+00:00"); a bare
        // "YYYY-MM-DD" also goes through since there is no 'T' to split on
        if let Some(date_part) = date_str.split('T').next() {
            let parts: Vec<&str> = date_part.split('-').collect();
            if parts.len() == 3 {
                if let (Ok(year), Ok(month), Ok(day)) = (
                    parts[0].parse::<u32>(),
                    parts[1].parse::<u32>(),
                    parts[2].parse::<u32>(),
                ) {
                    return Some((year, month, day));
                }
            }
        }
        None
    }

    /// Format a date for human-readable display
    pub fn format_date_for_display(&self, date_str: &str) -> String {
        if let Some((year, month, day)) = self.parse_entry_date(date_str) {
            format!("{} {}, {}", self.month_name(month), day, year)
        } else {
            // Fallback to original string
            date_str.to_string()
        }
    }

    /// Get the current focus date for calendar navigation
    pub fn focus_date(&self) -> CalendarFocusDate {
        self.current_focus_date.lock().unwrap().clone()
    }

    /// Set the focus date for calendar navigation
    pub fn set_focus_date(&self, month: u32, year: u32) -> Result<CalendarFocusDate> {
        if month < 1 || month > 12 {
            return Err(anyhow!("Invalid month: {}. Must be between 1 and 12", month));
        }

        if year < 1 {
            return Err(anyhow!("Invalid year: {}. Must be 1 or later", year));
        }

        let new_focus_date = CalendarFocusDate { month, year };

        {
            let mut focus_date = self.current_focus_date.lock().unwrap();
            *focus_date = new_focus_date.clone();
        }

        Ok(new_focus_date)
    }

    /// Navigate to the previous month
    pub fn previous_month(&self) -> CalendarFocusDate {
        let current = self.focus_date();
        // The year saturates at zero instead of wrapping around
        let new_focus_date = if current.month == 1 {
            CalendarFocusDate { month: 12, year: current.year.saturating_sub(1) }
        } else {
            CalendarFocusDate { month: current.month - 1, year: current.year }
        };

        {
            let mut focus_date = self.current_focus_date.lock().unwrap();
            *focus_date = new_focus_date.clone();
        }

        new_focus_date
    }

    /// Navigate to the next month
    pub fn next_month(&self) -> CalendarFocusDate {
        let current = self.focus_date();
        let new_focus_date = if current.month == 12 {
            CalendarFocusDate { month: 1, year: current.year + 1 }
        } else {
            CalendarFocusDate { month: current.month + 1, year: current.year }
        };

        {
            let mut focus_date = self.current_focus_date.lock().unwrap();
            *focus_date = new_focus_date.clone();
        }

        new_focus_date
    }

    /// Jump the focus back to the current local month
    pub fn today(&self) -> CalendarFocusDate {
        let now = Local::now();
        let new_focus_date = CalendarFocusDate {
            month: now.month(),
            year: now.year() as u32,
        };

        {
            let mut focus_date = self.current_focus_date.lock().unwrap();
            *focus_date = new_focus_date.clone();
        }

        new_focus_date
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}
