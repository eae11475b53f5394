use gloo_net::http::Request;
use serde::Deserialize;

use crate::coords::Coordinates;

const REVERSE_URL: &str = "https://nominatim.openstreetmap.org/reverse";
const SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

#[derive(Clone, Debug, Deserialize)]
struct ReverseResp {
    display_name: Option<String>,
}

// Nominatim serializes coordinates as strings in search results.
#[derive(Clone, Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

impl SearchHit {
    fn coordinates(&self) -> anyhow::Result<Coordinates> {
        Ok(Coordinates::new(self.lat.parse()?, self.lon.parse()?))
    }
}

/// Resolves a coordinate pair to a human-readable address.
///
/// Any network or parse failure, and any response without a display name,
/// degrades to the formatted-coordinate label; the caller never sees an error.
pub async fn reverse_geocode(coords: Coordinates) -> String {
    match fetch_display_name(coords).await {
        Ok(Some(name)) => name,
        Ok(None) | Err(_) => coords.fallback_label(),
    }
}

async fn fetch_display_name(coords: Coordinates) -> anyhow::Result<Option<String>> {
    let lat = coords.lat.to_string();
    let lon = coords.lng.to_string();

    let resp: ReverseResp = Request::get(REVERSE_URL)
        .header("Accept", "application/json")
        .query([
            ("format", "json"),
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("zoom", "18"),
            ("addressdetails", "1"),
        ])
        .send()
        .await?
        .json()
        .await?;

    Ok(resp.display_name)
}

/// Resolves a free-text query to at most one coordinate pair.
///
/// `Ok(None)` means the service answered with zero results; `Err` means the
/// request or its payload could not be processed. The two are handled
/// differently by the caller.
pub async fn search_address(query: &str) -> anyhow::Result<Option<Coordinates>> {
    let hits: Vec<SearchHit> = Request::get(SEARCH_URL)
        .header("Accept", "application/json")
        .query([("format", "json"), ("q", query), ("limit", "1")])
        .send()
        .await?
        .json()
        .await?;

    match hits.first() {
        Some(hit) => Ok(Some(hit.coordinates()?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_response_consumes_display_name() {
        let resp: ReverseResp = serde_json::from_str(
            r#"{"place_id": 12345, "display_name": "221B Baker Street, Marylebone, London", "osm_type": "way"}"#,
        )
        .unwrap();
        assert_eq!(
            resp.display_name.as_deref(),
            Some("221B Baker Street, Marylebone, London")
        );
    }

    #[test]
    fn reverse_response_without_display_name_is_none() {
        let resp: ReverseResp = serde_json::from_str(r#"{"error": "Unable to geocode"}"#).unwrap();
        assert!(resp.display_name.is_none());
    }

    #[test]
    fn search_hit_parses_string_coordinates() {
        let hits: Vec<SearchHit> =
            serde_json::from_str(r#"[{"lat": "51.5237", "lon": "-0.1585", "class": "building"}]"#)
                .unwrap();
        let coords = hits[0].coordinates().unwrap();
        assert_eq!(coords, Coordinates::new(51.5237, -0.1585));
    }

    #[test]
    fn search_hit_with_unparseable_coordinates_fails() {
        let hits: Vec<SearchHit> =
            serde_json::from_str(r#"[{"lat": "not-a-number", "lon": "-0.1585"}]"#).unwrap();
        assert!(hits[0].coordinates().is_err());
    }

    #[test]
    fn empty_search_payload_has_no_hits() {
        let hits: Vec<SearchHit> = serde_json::from_str("[]").unwrap();
        assert!(hits.is_empty());
    }
}
