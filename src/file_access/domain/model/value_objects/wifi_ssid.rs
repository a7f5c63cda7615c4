/// Self-reported WiFi network name. Never empty.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct WifiSsid(String);

impl WifiSsid {
    /// Normalises a client claim: a missing, empty or blank SSID is no SSID.
    pub fn from_claim(value: Option<String>) -> Option<Self> {
        value.filter(|ssid| !ssid.trim().is_empty()).map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, allowed_ssid: &str) -> bool {
        self.0.trim().to_lowercase() == allowed_ssid.trim().to_lowercase()
    }
}
