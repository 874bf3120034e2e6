pub mod phone;

pub use phone::{NumberClass, PhoneNumber};
