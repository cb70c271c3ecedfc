//! Toast queue: an ordered, auto-expiring list of user-visible notifications.

mod store;
mod types;


pub use store::{SubscriptionId, ToastObserver, ToastStore};
pub use types::{ToastId, ToastRecord, ToastRequest, ToastVariant};
