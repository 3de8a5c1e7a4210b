use std::collections::HashSet;
use thiserror::Error;
use crate::models::RouteId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteStatus {
    NotVoted,
    Voting,
    Voted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VoteRefused {
    #[error("a vote for {0} has already been sent in this session")]
    AlreadyVoted(RouteId),
    #[error("a vote for {0} is still being sent")]
    InFlight(RouteId),
}

/// Per-session voting flags. Nothing here is persisted, so a new session
/// starts with every route open again.
///
/// Only one submission may be in flight at a time, across all routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VotingSession {
    voted: HashSet<RouteId>,
    in_flight: Option<RouteId>,
}

impl VotingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, route: RouteId) -> VoteStatus {
        if self.in_flight == Some(route) {
            VoteStatus::Voting
        } else if self.voted.contains(&route) {
            VoteStatus::Voted
        } else {
            VoteStatus::NotVoted
        }
    }

    pub fn in_flight(&self) -> Option<RouteId> {
        self.in_flight
    }

    pub fn is_locked(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn check(&self, route: RouteId) -> Result<(), VoteRefused> {
        if self.voted.contains(&route) {
            return Err(VoteRefused::AlreadyVoted(route));
        }
        if let Some(current) = self.in_flight {
            return Err(VoteRefused::InFlight(current));
        }
        Ok(())
    }

    pub fn begin(&mut self, route: RouteId) -> Result<(), VoteRefused> {
        self.check(route)?;
        self.in_flight = Some(route);
        Ok(())
    }

    /// Ends the submission for `route`. The route counts as voted whatever
    /// the outcome of the request was. Returns `false` if `route` was not the
    /// one in flight.
    pub fn finish(&mut self, route: RouteId) -> bool {
        if self.in_flight != Some(route) {
            return false;
        }
        self.in_flight = None;
        self.voted.insert(route);
        true
    }
}
