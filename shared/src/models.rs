use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

/// Direction of travel, named after the terminus it departs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteId {
    Iate,
    Parangaba,
}

impl RouteId {
    pub const ALL: [RouteId; 2] = [RouteId::Iate, RouteId::Parangaba];

    /// Order in which the route cards are shown.
    pub const DISPLAY_ORDER: [RouteId; 2] = [RouteId::Parangaba, RouteId::Iate];

    pub const fn as_str(self) -> &'static str {
        match self {
            RouteId::Iate => "iate",
            RouteId::Parangaba => "parangaba",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RouteId::Iate => "Iate → Parangaba",
            RouteId::Parangaba => "Parangaba → Iate",
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteId {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteId::ALL
            .into_iter()
            .find(|route| route.as_str() == s)
            .ok_or_else(|| UnknownValue { kind: "route", value: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DelayRange {
    #[serde(rename = "pontual")]
    OnTime,
    #[serde(rename = "menos1")]
    UnderOneMinute,
    #[serde(rename = "ate5")]
    UpToFiveMinutes,
    #[serde(rename = "ate10")]
    UpToTenMinutes,
    #[serde(rename = "mais10")]
    OverTenMinutes,
}

impl DelayRange {
    pub const ALL: [DelayRange; 5] = [
        DelayRange::OnTime,
        DelayRange::UnderOneMinute,
        DelayRange::UpToFiveMinutes,
        DelayRange::UpToTenMinutes,
        DelayRange::OverTenMinutes,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            DelayRange::OnTime => "pontual",
            DelayRange::UnderOneMinute => "menos1",
            DelayRange::UpToFiveMinutes => "ate5",
            DelayRange::UpToTenMinutes => "ate10",
            DelayRange::OverTenMinutes => "mais10",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DelayRange::OnTime => "Sem atraso",
            DelayRange::UnderOneMinute => "Menos de 1 minuto",
            DelayRange::UpToFiveMinutes => "2 a 5 minutos",
            DelayRange::UpToTenMinutes => "6 a 10 minutos",
            DelayRange::OverTenMinutes => "Mais de 10 minutos",
        }
    }
}

impl fmt::Display for DelayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DelayRange {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DelayRange::ALL
            .into_iter()
            .find(|range| range.as_str() == s)
            .ok_or_else(|| UnknownValue { kind: "delay range", value: s.to_string() })
    }
}

/// A vote that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVote {
    pub route: RouteId,
    pub delay_range: DelayRange,
    pub scheduled_time: String,
}

/// A stored vote as read back. Columns stay as text since the store does not
/// enforce the enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
pub struct VoteRecord {
    pub route: String,
    pub delay_range: String,
    pub scheduled_time: String,
}

impl From<&NewVote> for VoteRecord {
    fn from(vote: &NewVote) -> Self {
        Self {
            route: vote.route.as_str().to_string(),
            delay_range: vote.delay_range.as_str().to_string(),
            scheduled_time: vote.scheduled_time.clone(),
        }
    }
}

/// Body sent by the client when casting a vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteRequest {
    #[serde(rename = "rotaId")]
    pub rota_id: RouteId,
    pub faixa: DelayRange,
    pub horario_previsto: String,
}

/// Server-side decode of a vote body. Fields that are missing or not strings
/// come through as `None` so they fail validation rather than parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VoteSubmission {
    #[serde(rename = "rotaId", deserialize_with = "lenient_string")]
    pub rota_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub faixa: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub horario_previsto: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Other(#[allow(dead_code)] serde::de::IgnoredAny),
    }

    Ok(match Field::deserialize(deserializer)? {
        Field::Text(text) => Some(text),
        Field::Other(_) => None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
}

impl SubmitResponse {
    pub const fn ok() -> Self {
        Self { success: true }
    }
}
