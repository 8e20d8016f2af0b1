//! Overlap checking, rental pricing, and the guarded booking insert.
//!
//! Two `confirmed` bookings for the same vehicle may never share a day.
//! The check runs app-side for readable replies, and the `bookings` table
//! carries a gist exclusion constraint over the same range, so a race
//! between two overlapping requests loses on insert rather than slipping
//! through between check and write.

use crate::model::{Booking, BookingStatus, NewBooking, Vehicle};
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;

#[derive(Debug)]
pub enum BookingError {
    Unavailable,
    VehicleNotFound,
    Pool(diesel::r2d2::PoolError),
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for BookingError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            // The exclusion constraint fired: another confirmed booking
            // for this vehicle committed an overlapping range first.
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ExclusionViolation, _) => {
                BookingError::Unavailable
            }
            other => BookingError::Database(other),
        }
    }
}

pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub vehicle_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Booking dates travel as ISO `YYYY-MM-DD` strings on the wire.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Inclusive date-range overlap: the requested start falls inside the
/// existing range, the requested end does, or the requested range
/// encompasses the existing one. Sharing a single day counts.
pub fn overlaps(
    existing_start: NaiveDate,
    existing_end: NaiveDate,
    requested_start: NaiveDate,
    requested_end: NaiveDate,
) -> bool {
    (existing_start <= requested_start && requested_start <= existing_end)
        || (existing_start <= requested_end && requested_end <= existing_end)
        || (requested_start <= existing_start && existing_end <= requested_end)
}

/// Billed day count. Dates are whole days, so this is already the ceiling
/// of the duration; validation guarantees end > start, hence at least 1.
pub fn rental_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

pub fn confirmed_spans(
    conn: &mut PgConnection,
    vehicle: i32,
) -> QueryResult<Vec<(NaiveDate, NaiveDate)>> {
    use crate::schema::bookings::dsl::*;
    bookings
        .filter(vehicle_id.eq(vehicle))
        .filter(status.eq(BookingStatus::Confirmed))
        .select((start_date, end_date))
        .load::<(NaiveDate, NaiveDate)>(conn)
}

pub fn vehicle_is_available(
    conn: &mut PgConnection,
    vehicle: i32,
    requested_start: NaiveDate,
    requested_end: NaiveDate,
) -> QueryResult<bool> {
    let spans = confirmed_spans(conn, vehicle)?;
    Ok(spans
        .into_iter()
        .all(|(s, e)| !overlaps(s, e, requested_start, requested_end)))
}

/// Availability check, vehicle lookup, pricing and insert in one
/// transaction. Returns the stored booking, its vehicle and the billed
/// day count.
pub fn create_booking(
    conn: &mut PgConnection,
    request: BookingRequest,
) -> Result<(Booking, Vehicle, i64), BookingError> {
    conn.transaction(|conn| {
        if !vehicle_is_available(
            conn,
            request.vehicle_id,
            request.start_date,
            request.end_date,
        )? {
            return Err(BookingError::Unavailable);
        }

        use crate::schema::vehicles::dsl::*;
        let vehicle = vehicles
            .filter(id.eq(request.vehicle_id))
            .get_result::<Vehicle>(conn)
            .optional()?
            .ok_or(BookingError::VehicleNotFound)?;

        let days = rental_days(request.start_date, request.end_date);
        let total = days as f64 * vehicle.price_per_day;

        let to_be_inserted = NewBooking {
            first_name: request.first_name,
            last_name: request.last_name,
            vehicle_id: request.vehicle_id,
            start_date: request.start_date,
            end_date: request.end_date,
            total_price: total,
            status: BookingStatus::Confirmed,
        };
        use crate::schema::bookings::dsl::bookings;
        let booking = diesel::insert_into(bookings)
            .values(&to_be_inserted)
            .get_result::<Booking>(conn)?;

        Ok((booking, vehicle, days))
    })
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn request_starting_inside_existing_overlaps() {
        assert!(overlaps(
            d("2026-09-01"),
            d("2026-09-05"),
            d("2026-09-04"),
            d("2026-09-10"),
        ));
    }

    #[test]
    fn request_ending_inside_existing_overlaps() {
        assert!(overlaps(
            d("2026-09-05"),
            d("2026-09-10"),
            d("2026-09-01"),
            d("2026-09-06"),
        ));
    }

    #[test]
    fn request_encompassing_existing_overlaps() {
        assert!(overlaps(
            d("2026-09-04"),
            d("2026-09-06"),
            d("2026-09-01"),
            d("2026-09-10"),
        ));
    }

    #[test]
    fn request_inside_existing_overlaps() {
        assert!(overlaps(
            d("2026-09-01"),
            d("2026-09-10"),
            d("2026-09-04"),
            d("2026-09-06"),
        ));
    }

    #[test]
    fn shared_boundary_day_overlaps() {
        // Drop-off day of one booking is the pickup day of the other.
        assert!(overlaps(
            d("2026-09-01"),
            d("2026-09-05"),
            d("2026-09-05"),
            d("2026-09-08"),
        ));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        assert!(!overlaps(
            d("2026-09-01"),
            d("2026-09-05"),
            d("2026-09-06"),
            d("2026-09-08"),
        ));
        assert!(!overlaps(
            d("2026-09-06"),
            d("2026-09-08"),
            d("2026-09-01"),
            d("2026-09-05"),
        ));
    }

    #[test]
    fn iso_dates_parse_and_junk_does_not() {
        assert_eq!(parse_iso_date("2026-09-01"), Some(d("2026-09-01")));
        assert_eq!(parse_iso_date("2026-13-01"), None);
        assert_eq!(parse_iso_date("tomorrow"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn three_day_rental_at_2500_costs_7500() {
        let days = rental_days(d("2026-09-01"), d("2026-09-04"));
        assert_eq!(days, 3);
        assert_eq!(days as f64 * 2500.0, 7500.0);
    }

    #[test]
    fn one_night_is_one_day() {
        assert_eq!(rental_days(d("2026-09-01"), d("2026-09-02")), 1);
    }
}
