use gloo_net::http::Request;
use serde::Deserialize;

use crate::coords::Coordinates;

const LOOKUP_URL: &str = "https://ipapi.co/json/";

// The lookup answers with a large profile of the caller's network; only the
// coordinate fields are consumed. Error payloads from the service omit them.
#[derive(Clone, Debug, Deserialize)]
struct IpLocation {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl IpLocation {
    fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        }
    }
}

/// Coarse position inferred from the caller's network address.
///
/// Both coordinate fields must be present and numeric; anything else
/// discards the response.
pub async fn lookup() -> anyhow::Result<Coordinates> {
    let location: IpLocation = Request::get(LOOKUP_URL).send().await?.json().await?;

    location
        .coordinates()
        .ok_or_else(|| anyhow::Error::msg("ip lookup response carried no usable coordinates"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_response_consumes_both_coordinates() {
        let location: IpLocation = serde_json::from_str(
            r#"{"ip": "203.0.113.7", "city": "Wellington", "latitude": -41.2866, "longitude": 174.7756, "org": "Example"}"#,
        )
        .unwrap();
        assert_eq!(
            location.coordinates(),
            Some(Coordinates::new(-41.2866, 174.7756))
        );
    }

    #[test]
    fn missing_longitude_discards_the_result() {
        let location: IpLocation =
            serde_json::from_str(r#"{"latitude": -41.2866}"#).unwrap();
        assert_eq!(location.coordinates(), None);
    }

    #[test]
    fn error_payload_discards_the_result() {
        let location: IpLocation =
            serde_json::from_str(r#"{"error": true, "reason": "RateLimited"}"#).unwrap();
        assert_eq!(location.coordinates(), None);
    }

    #[test]
    fn non_numeric_coordinates_fail_deserialization() {
        let parsed = serde_json::from_str::<IpLocation>(r#"{"latitude": "x", "longitude": "y"}"#);
        assert!(parsed.is_err());
    }
}
