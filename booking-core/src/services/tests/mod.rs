use super::*;
use crate::db::Database;
use chrono::{NaiveDate, NaiveTime};
use shared::models::{DiningTable, Reservation, Restaurant, User};
use shared::{Entity, UserType};


fn t(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn sample_user() -> User {
    User {
        id: None,
        email: "e@x.com".to_string(),
        password: "p".to_string(),
        is_active: true,
        user_type: UserType::Standard,
    }
}

fn sample_restaurant() -> Restaurant {
    Restaurant {
        id: None,
        name: "Trattoria Roma".to_string(),
        address: "Via Roma 1, Milano".to_string(),
        open_hour: t(9, 30),
        close_hour: t(22, 0),
    }
}

fn table_for(restaurant_id: i64) -> DiningTable {
    DiningTable {
        id: None,
        seats: 4,
        restaurant_id,
    }
}

fn reservation_at(user_id: i64, table_id: i64, time: NaiveTime) -> Reservation {
    Reservation {
        id: None,
        user_id,
        table_id,
        time,
        date: d(2016, 7, 11),
    }
}

struct Seed {
    user_id: i64,
    restaurant_id: i64,
    table_id: i64,
}

/// Database seeded with one user, one restaurant (09:30-22:00), one table
fn seeded_db() -> (Database, Seed) {
    let mut db = Database::new();
    let user_id = user::add(&mut db, sample_user()).unwrap();
    let restaurant_id = restaurant::add(&mut db, sample_restaurant()).unwrap();
    let table_id = dining_table::add(&mut db, table_for(restaurant_id)).unwrap();
    (
        db,
        Seed {
            user_id,
            restaurant_id,
            table_id,
        },
    )
}
