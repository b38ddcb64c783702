//! Test Helpers

use crate::{
    domain::{
        bookings::data::NewBooking,
        listings::{
            ListingsService,
            data::NewListing,
            records::{ListingRecord, ListingUuid},
        },
        users::{
            UsersService,
            data::NewUser,
            records::{Identity, UserUuid},
        },
    },
    test::TestContext,
};

pub(crate) async fn seed_user(ctx: &TestContext, username: &str) -> Identity {
    ctx.users
        .create_user(NewUser {
            uuid: UserUuid::new(),
            username: username.to_string(),
        })
        .await
        .expect("Failed to seed test user")
        .identity()
}

pub(crate) async fn seed_listing(ctx: &TestContext, host: &Identity, price: u64) -> ListingRecord {
    ctx.listings
        .create_listing(NewListing {
            uuid: ListingUuid::new(),
            host_uuid: host.uuid,
            price,
        })
        .await
        .expect("Failed to seed test listing")
}

pub(crate) fn booking_draft(start_date: &str, end_date: &str, guests: i64) -> NewBooking {
    NewBooking {
        start_date: Some(start_date.to_string()),
        end_date: Some(end_date.to_string()),
        guests: Some(guests),
        payment_method: None,
    }
}
