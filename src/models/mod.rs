pub mod activity;
pub mod replies;

pub use activity::{ActivityCatalog, ActivityDetails};
pub use replies::{ErrorReply, MutationReply};
