//! Conversions between the wire DTOs in `shared` and the domain models.
//!
//! The DTO date field carries a full RFC 3339 timestamp for compatibility with
//! the persisted layout; the domain only cares about the calendar day, so
//! mapping inbound takes the date in UTC and mapping outbound pins the
//! timestamp to midnight UTC.

use crate::domain::models::availability::{Availability as DomainAvailability, TimeSlot as DomainTimeSlot};
use crate::domain::models::member::FamilyMember as DomainMember;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use shared::{Availability as SharedAvailability, FamilyMember as SharedMember, TimeSlot as SharedTimeSlot};

/// Mapper to convert between shared FamilyMember DTOs and domain models.
pub struct MemberMapper;

impl MemberMapper {
    pub fn to_domain(dto: SharedMember) -> DomainMember {
        DomainMember {
            id: dto.id,
            name: dto.name,
            color: dto.color,
            avatar: dto.avatar,
        }
    }

    pub fn to_dto(domain: DomainMember) -> SharedMember {
        SharedMember {
            id: domain.id,
            name: domain.name,
            color: domain.color,
            avatar: domain.avatar,
        }
    }
}

/// Mapper to convert between shared Availability DTOs and domain models.
pub struct AvailabilityMapper;

impl AvailabilityMapper {
    /// Converts a shared Availability DTO to a domain model.
    /// Fails when the date field is not a valid RFC 3339 timestamp.
    pub fn to_domain(dto: SharedAvailability) -> Result<DomainAvailability> {
        let date = parse_wire_date(&dto.date)
            .with_context(|| format!("Failed to parse availability date '{}'", dto.date))?;

        Ok(DomainAvailability {
            id: dto.id,
            member_id: dto.member_id,
            date,
            all_day: dto.all_day,
            time_slots: dto
                .time_slots
                .map(|slots| slots.into_iter().map(Self::slot_to_domain).collect()),
            note: dto.note,
        })
    }

    /// Converts a domain model to a shared Availability DTO.
    pub fn to_dto(domain: DomainAvailability) -> SharedAvailability {
        SharedAvailability {
            id: domain.id,
            member_id: domain.member_id,
            date: format_wire_date(domain.date),
            time_slots: domain
                .time_slots
                .map(|slots| slots.into_iter().map(Self::slot_to_dto).collect()),
            all_day: domain.all_day,
            note: domain.note,
        }
    }

    fn slot_to_domain(dto: SharedTimeSlot) -> DomainTimeSlot {
        DomainTimeSlot {
            start: dto.start,
            end: dto.end,
        }
    }

    fn slot_to_dto(domain: DomainTimeSlot) -> SharedTimeSlot {
        SharedTimeSlot {
            start: domain.start,
            end: domain.end,
        }
    }
}

/// Parse a wire timestamp down to the calendar day it names, interpreted in UTC.
pub fn parse_wire_date(raw: &str) -> Result<NaiveDate> {
    let timestamp = DateTime::parse_from_rfc3339(raw)?;
    Ok(timestamp.with_timezone(&Utc).date_naive())
}

/// Render a calendar day as the wire timestamp: midnight UTC, RFC 3339.
pub fn format_wire_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN).and_utc().to_rfc3339()
}
