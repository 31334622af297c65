use serde::Deserialize;

/// Placeholder shown for missing names and addresses.
pub const PLACEHOLDER: &str = "N/A";

/// One row of the `describe-instances` projection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstanceRecord {
    #[serde(rename = "InstanceId")]
    pub instance_id: String,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "PrivateIpAddress", default)]
    pub private_ip: Option<String>,
}

impl InstanceRecord {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(PLACEHOLDER)
    }

    pub fn display_private_ip(&self) -> &str {
        self.private_ip
            .as_deref()
            .filter(|ip| !ip.is_empty())
            .unwrap_or(PLACEHOLDER)
    }
}

/// Parses the reservation-grouped payload and flattens it, keeping
/// reservation order first and instance order within each reservation.
pub fn normalize(payload: &[u8]) -> Result<Vec<InstanceRecord>, serde_json::Error> {
    let reservations: Vec<Vec<InstanceRecord>> = serde_json::from_slice(payload)?;
    Ok(reservations.into_iter().flatten().collect())
}
