//! Ticket records as served by the ticket REST API.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Name of the directory holding local ticketdesk state.
pub const TICKETDESK_DIR: &str = ".ticketdesk";

/// Stage of a ticket in the intake pipeline.
///
/// The backend sends the stage as a small integer, sometimes encoded as a
/// string (`"2"`). Values past the named stages are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TicketStatus(u8);

impl TicketStatus {
    pub const CREATED: TicketStatus = TicketStatus(0);
    pub const CONNECTOR_ASSIGNED: TicketStatus = TicketStatus(1);
    pub const PRO_ASSIGNED: TicketStatus = TicketStatus(2);

    pub const fn new(stage: u8) -> Self {
        TicketStatus(stage)
    }

    pub const fn as_num(self) -> u8 {
        self.0
    }

    /// A connector has been assigned, so connector details are meaningful.
    pub fn has_connector(self) -> bool {
        self >= Self::CONNECTOR_ASSIGNED
    }

    /// A professional has been assigned, so pro details are meaningful.
    pub fn has_pro(self) -> bool {
        self >= Self::PRO_ASSIGNED
    }

    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "Created",
            1 => "Connector Assigned",
            2 => "Pro Assigned",
            _ => "In Progress",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TicketStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for TicketStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u8),
            Str(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Ok(TicketStatus(n)),
            Raw::Str(s) => s
                .trim()
                .parse::<u8>()
                .map(TicketStatus)
                .map_err(|_| serde::de::Error::custom(format!("invalid ticket status '{s}'"))),
        }
    }
}

/// The customer who opened the ticket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Owner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Contact details of the assigned professional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProDetail {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub zip_address: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Contact details of the connector handling intake
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectorDetail {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A single appointment request moving through connector and pro stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,
    pub owner: Owner,
    pub created_at: Timestamp,
    pub ticket_status: TicketStatus,
    #[serde(default)]
    pub appointment_date: Option<Timestamp>,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub intake_call_date: Option<Timestamp>,
    #[serde(default)]
    pub is_intake_call: bool,
    /// Id of the assigned professional
    #[serde(default)]
    pub pro: Option<u64>,
    #[serde(default)]
    pub pro_detail: Option<ProDetail>,
    #[serde(default)]
    pub connector_detail: Option<ConnectorDetail>,
}

/// One page of the ticket list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketPage {
    pub results: Vec<Ticket>,
    /// Total number of tickets across all pages
    pub count: u64,
}
