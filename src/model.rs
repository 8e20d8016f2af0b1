use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

// Diesel requires us to define a custom mapping between the Rust enum
// and the database type, if we are not using string.
use crate::schema::*;
use diesel::deserialize::{self, FromSql};
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, Output, ToSql};
use diesel::{AsExpression, FromSqlRow};
use std::io::Write;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[diesel(sql_type = sql_types::BookingStatusEnum)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

//This is for postgres. For other databases the type might be different.
impl ToSql<sql_types::BookingStatusEnum, Pg> for BookingStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            BookingStatus::Confirmed => out.write_all(b"confirmed")?,
            BookingStatus::Cancelled => out.write_all(b"cancelled")?,
        }
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<sql_types::BookingStatusEnum, Pg> for BookingStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"confirmed" => Ok(BookingStatus::Confirmed),
            b"cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

#[derive(Queryable, Identifiable, Deserialize, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = vehicle_types)]
#[serde(rename_all = "camelCase")]
pub struct VehicleType {
    pub id: i32,
    pub name: String,
    pub wheels: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Queryable, Identifiable, Associations, Deserialize, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = vehicles)]
#[diesel(belongs_to(VehicleType, foreign_key = type_id))]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub type_id: i32,
    pub model: String,
    pub year: i32,
    pub price_per_day: f64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Queryable, Identifiable, Associations, Deserialize, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = bookings)]
#[diesel(belongs_to(Vehicle))]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub vehicle_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = bookings)]
pub struct NewBooking {
    pub first_name: String,
    pub last_name: String,
    pub vehicle_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub status: BookingStatus,
}
