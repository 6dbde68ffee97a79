//! Decode target for the composite API response.
//!
//! The API answers every request with one JSON document whose sub-fields
//! correspond to the requested features. Sub-fields for features that were
//! not requested are simply absent; every field here carries
//! `#[serde(default)]` so they decode to zero values. The dispatcher never
//! renders a sub-field that was not requested.

use serde::Deserialize;

/// The single decoded response document covering every feature.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ObservationSet {
    pub alerts: Vec<Alert>,
    pub almanac: Almanac,
    pub current_observation: CurrentObservation,
    pub forecast: Forecast,
    pub history: History,
    pub location: Location,
    pub moon_phase: MoonPhase,
    pub tide: Tide,
    pub trip: Trip,
}

/// Date/time block shared by several feature sub-structures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiDate {
    pub pretty: String,
    pub hour: String,
    pub min: String,
    pub mon: String,
    pub mday: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub date: String,
    pub expires: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Almanac {
    pub airport_code: String,
    pub temp_high: AlmanacTemp,
    pub temp_low: AlmanacTemp,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlmanacTemp {
    pub normal: TempScale,
    pub record: TempScale,
    pub recordyear: String,
}

/// Temperature reported on both scales, as the API sends it (strings).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TempScale {
    #[serde(rename = "F")]
    pub fahrenheit: String,
    #[serde(rename = "C")]
    pub celsius: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrentObservation {
    pub display_location: DisplayLocation,
    pub station_id: String,
    pub observation_time: String,
    pub weather: String,
    pub temperature_string: String,
    pub relative_humidity: String,
    pub wind_string: String,
    pub pressure_in: String,
    pub pressure_mb: String,
    pub pressure_trend: String,
    pub dewpoint_string: String,
    pub visibility_mi: String,
    pub precip_today_string: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DisplayLocation {
    pub full: String,
    pub elevation: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Forecast {
    pub txt_forecast: TxtForecast,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TxtForecast {
    pub date: String,
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForecastDay {
    pub title: String,
    pub fcttext: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct History {
    pub date: ApiDate,
    pub dailysummary: Vec<DailySummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DailySummary {
    pub fog: String,
    pub rain: String,
    pub snow: String,
    pub maxtempi: String,
    pub maxtempm: String,
    pub mintempi: String,
    pub mintempm: String,
    pub meantempi: String,
    pub meantempm: String,
    pub precipi: String,
    pub precipm: String,
    pub maxwspdi: String,
    pub maxwspdm: String,
}

/// Geolookup result: where the station query landed, plus nearby stations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
    pub nearby_weather_stations: NearbyStations,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NearbyStations {
    pub airport: AirportStations,
    pub pws: PwsStations,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AirportStations {
    pub station: Vec<AirportStation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AirportStation {
    pub city: String,
    pub state: String,
    pub country: String,
    pub icao: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PwsStations {
    pub station: Vec<PwsStation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PwsStation {
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub id: String,
}

/// Lunar phase plus sunrise/sunset times, as served by the astronomy
/// feature.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MoonPhase {
    #[serde(rename = "percentIlluminated")]
    pub percent_illuminated: String,
    #[serde(rename = "ageOfMoon")]
    pub age_of_moon: String,
    pub sunrise: HourMinute,
    pub sunset: HourMinute,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HourMinute {
    pub hour: String,
    pub minute: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Tide {
    #[serde(rename = "tideInfo")]
    pub tide_info: Vec<TideSite>,
    #[serde(rename = "tideSummary")]
    pub tide_summary: Vec<TideSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TideSite {
    #[serde(rename = "tideSite")]
    pub tide_site: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TideSummary {
    pub date: ApiDate,
    pub data: TideData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TideData {
    pub height: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Trip-planner summary over a historical period of record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Trip {
    pub title: String,
    pub airport_code: String,
    pub period_of_record: PeriodOfRecord,
    pub temp_high: TripTemp,
    pub temp_low: TripTemp,
    pub chance_of: ChanceOf,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PeriodOfRecord {
    pub date_start: ApiDate,
    pub date_end: ApiDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TripTemp {
    pub min: TempScale,
    pub avg: TempScale,
    pub max: TempScale,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChanceOf {
    pub chanceofsunnycloudyday: Chance,
    pub chanceofpartlycloudyday: Chance,
    pub chanceofcloudyday: Chance,
    pub chanceofrainday: Chance,
    pub chanceofsnowonground: Chance,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Chance {
    pub name: String,
    pub percentage: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_features_decode_to_zero_values() {
        let body = r#"{
            "current_observation": {
                "station_id": "KCASANFR58",
                "weather": "Partly Cloudy",
                "temperature_string": "66.3 F (19.1 C)",
                "display_location": { "full": "San Francisco, CA" }
            }
        }"#;

        let obs: ObservationSet = serde_json::from_str(body).expect("body must decode");

        assert_eq!(obs.current_observation.station_id, "KCASANFR58");
        assert_eq!(obs.current_observation.display_location.full, "San Francisco, CA");

        assert!(obs.alerts.is_empty());
        assert!(obs.almanac.airport_code.is_empty());
        assert!(obs.forecast.txt_forecast.forecastday.is_empty());
        assert!(obs.history.dailysummary.is_empty());
        assert!(obs.location.city.is_empty());
        assert!(obs.moon_phase.percent_illuminated.is_empty());
        assert!(obs.tide.tide_summary.is_empty());
        assert!(obs.trip.title.is_empty());
    }

    #[test]
    fn unknown_top_level_fields_are_ignored() {
        let body = r#"{
            "response": { "version": "0.1" },
            "almanac": {
                "airport_code": "KSFO",
                "temp_high": {
                    "normal": { "F": "71", "C": "22" },
                    "record": { "F": "95", "C": "35" },
                    "recordyear": "1970"
                }
            }
        }"#;

        let obs: ObservationSet = serde_json::from_str(body).expect("body must decode");

        assert_eq!(obs.almanac.airport_code, "KSFO");
        assert_eq!(obs.almanac.temp_high.normal.fahrenheit, "71");
        assert_eq!(obs.almanac.temp_high.record.celsius, "35");
        assert_eq!(obs.almanac.temp_high.recordyear, "1970");
        assert!(obs.almanac.temp_low.recordyear.is_empty());
    }

    #[test]
    fn renamed_fields_match_the_wire_names() {
        let body = r#"{
            "moon_phase": {
                "percentIlluminated": "81",
                "ageOfMoon": "10",
                "sunrise": { "hour": "7", "minute": "01" },
                "sunset": { "hour": "18", "minute": "56" }
            },
            "tide": {
                "tideInfo": [ { "tideSite": "Newport Bay Entrance" } ],
                "tideSummary": [
                    {
                        "date": { "pretty": "2:47 PM PDT" },
                        "data": { "height": "2.47 ft", "type": "High Tide" }
                    }
                ]
            }
        }"#;

        let obs: ObservationSet = serde_json::from_str(body).expect("body must decode");

        assert_eq!(obs.moon_phase.percent_illuminated, "81");
        assert_eq!(obs.moon_phase.sunrise.hour, "7");
        assert_eq!(obs.tide.tide_info[0].tide_site, "Newport Bay Entrance");
        assert_eq!(obs.tide.tide_summary[0].data.kind, "High Tide");
    }
}
