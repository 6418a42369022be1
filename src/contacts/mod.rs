//! Contact data: the model, the grouping engine, and the asynchronous
//! store the list is fed from.

mod error;
mod grouping;
mod model;
mod store;
mod worker;

pub use error::FetchError;
pub use grouping::{group_contacts, ContactGroup, GroupKey};
pub use model::{Contact, ContactId};
pub use store::{ContactFile, ContactStore, FileContactStore, SampleContactStore};
pub use worker::{spawn_fetch_worker, FetchOutcome, FetchRequest, FetchRequestSender};
