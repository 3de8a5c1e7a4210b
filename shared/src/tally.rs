use serde::{Deserialize, Serialize};
use crate::models::{DelayRange, RouteId, VoteRecord};

/// Vote counts of one route, one field per delay range so every cell is
/// always present on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTally {
    #[serde(rename = "pontual")]
    pub on_time: u64,
    #[serde(rename = "menos1")]
    pub under_one_minute: u64,
    #[serde(rename = "ate5")]
    pub up_to_five_minutes: u64,
    #[serde(rename = "ate10")]
    pub up_to_ten_minutes: u64,
    #[serde(rename = "mais10")]
    pub over_ten_minutes: u64,
}

impl RouteTally {
    pub fn count(&self, range: DelayRange) -> u64 {
        match range {
            DelayRange::OnTime => self.on_time,
            DelayRange::UnderOneMinute => self.under_one_minute,
            DelayRange::UpToFiveMinutes => self.up_to_five_minutes,
            DelayRange::UpToTenMinutes => self.up_to_ten_minutes,
            DelayRange::OverTenMinutes => self.over_ten_minutes,
        }
    }

    fn count_mut(&mut self, range: DelayRange) -> &mut u64 {
        match range {
            DelayRange::OnTime => &mut self.on_time,
            DelayRange::UnderOneMinute => &mut self.under_one_minute,
            DelayRange::UpToFiveMinutes => &mut self.up_to_five_minutes,
            DelayRange::UpToTenMinutes => &mut self.up_to_ten_minutes,
            DelayRange::OverTenMinutes => &mut self.over_ten_minutes,
        }
    }

    pub fn total(&self) -> u64 {
        DelayRange::ALL.iter().map(|&range| self.count(range)).sum()
    }

    /// Percentage of this route's votes in `range`; 0 when nobody voted.
    pub fn share(&self, range: DelayRange) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(range) as f64 / total as f64 * 100.0,
        }
    }

    pub fn rounded_share(&self, range: DelayRange) -> u32 {
        self.share(range).round() as u32
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub iate: RouteTally,
    pub parangaba: RouteTally,
}

impl Tally {
    pub fn route(&self, route: RouteId) -> &RouteTally {
        match route {
            RouteId::Iate => &self.iate,
            RouteId::Parangaba => &self.parangaba,
        }
    }

    fn route_mut(&mut self, route: RouteId) -> &mut RouteTally {
        match route {
            RouteId::Iate => &mut self.iate,
            RouteId::Parangaba => &mut self.parangaba,
        }
    }

    pub fn add(&mut self, route: RouteId, range: DelayRange) {
        *self.route_mut(route).count_mut(range) += 1;
    }

    /// Counts a stored record. Returns `false` and leaves the tally untouched
    /// when the route or delay range is not one we know.
    pub fn record(&mut self, record: &VoteRecord) -> bool {
        match (record.route.parse::<RouteId>(), record.delay_range.parse::<DelayRange>()) {
            (Ok(route), Ok(range)) => {
                self.add(route, range);
                true
            }
            _ => false,
        }
    }

    pub fn total(&self) -> u64 {
        RouteId::ALL.iter().map(|&route| self.route(route).total()).sum()
    }
}

/// Builds a tally from stored records, returning it with the number of
/// records that had to be skipped.
pub fn tally_records<'a, I>(records: I) -> (Tally, usize)
where
    I: IntoIterator<Item = &'a VoteRecord>,
{
    let mut tally = Tally::default();
    let skipped = records
        .into_iter()
        .filter(|record| !tally.record(record))
        .count();
    (tally, skipped)
}
