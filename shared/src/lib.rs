pub mod error;
pub mod models;
pub mod validation;
pub mod schedule;
pub mod session;
pub mod tally;

pub use error::ErrorResponse;
pub use models::*;
pub use validation::*;
pub use schedule::{current_slot, Slot};
pub use session::{VoteRefused, VoteStatus, VotingSession};
pub use tally::{tally_records, RouteTally, Tally};
