//! DTOs mirrored from the backend: plain records with `id`, audit timestamps,
//! and an `active`/status flag. They have no client-owned lifecycle; the
//! client displays them and re-requests them.

mod catalog;
mod content;
mod learning;
mod marketing;
mod orders;
mod people;

pub use catalog::{Product, PRODUCTS};
pub use content::{EmailTemplate, Page, Testimonial, PAGES, TEMPLATES, TESTIMONIALS};
pub use learning::{Course, COURSES};
pub use marketing::{
    Commission, CommissionStatus, Coupon, DiscountType, COMMISSIONS, COUPONS,
};
pub use orders::{Order, OrderStatus, ORDERS};
pub use people::{ApplicantStatus, Dispenser, User, DISPENSERS, USERS};

/// Rows addressable by their backend id; lets list state patch and remove rows.
pub trait Identifiable {
    fn id(&self) -> i64;
}

macro_rules! identifiable {
    ($($ty:ty),* $(,)?) => {
        $(impl Identifiable for $ty {
            fn id(&self) -> i64 {
                self.id
            }
        })*
    };
}

identifiable!(
    Commission,
    Coupon,
    Course,
    Dispenser,
    EmailTemplate,
    Order,
    Page,
    Product,
    Testimonial,
    User,
);
