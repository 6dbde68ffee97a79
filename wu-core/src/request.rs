use regex::Regex;
use std::fmt;

/// Root of the composite API; the key and feature path are appended.
pub const API_ROOT: &str = "http://api.wunderground.com/api/";

/// Station used when neither `-s` nor the config file names one.
pub const DEFAULT_STATION: &str = "KLNK";

/// One kind of weather data to request and display.
///
/// `History` and `Planner` carry the raw date strings taken from their
/// flags (`YYYYMMDD` and `MMDDMMDD`). The strings are forwarded to the API
/// unvalidated; a malformed date comes back as a bad status or an
/// undecodable body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature {
    Conditions,
    Forecast,
    Forecast10Day,
    Alerts,
    Almanac,
    History(String),
    Planner(String),
    Yesterday,
    Astronomy,
    Tide,
    Geolookup,
}

impl Feature {
    /// Base name of the feature, without any date payload.
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Conditions => "conditions",
            Feature::Forecast => "forecast",
            Feature::Forecast10Day => "forecast10day",
            Feature::Alerts => "alerts",
            Feature::Almanac => "almanac",
            Feature::History(_) => "history",
            Feature::Planner(_) => "planner",
            Feature::Yesterday => "yesterday",
            Feature::Astronomy => "astronomy",
            Feature::Tide => "tide",
            Feature::Geolookup => "geolookup",
        }
    }

    /// Path segment used in the request URL; the dated features append
    /// their date with an underscore.
    pub fn path_segment(&self) -> String {
        match self {
            Feature::History(date) => format!("history_{date}"),
            Feature::Planner(range) => format!("planner_{range}"),
            other => other.name().to_string(),
        }
    }

    /// The full feature list requested by `--all`, in canonical order.
    pub fn all(history: &str, planner: &str) -> Vec<Feature> {
        vec![
            Feature::Conditions,
            Feature::Forecast,
            Feature::Forecast10Day,
            Feature::Alerts,
            Feature::Almanac,
            Feature::History(history.to_string()),
            Feature::Planner(planner.to_string()),
            Feature::Yesterday,
            Feature::Astronomy,
            Feature::Tide,
            Feature::Geolookup,
        ]
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rewrite a "City, State" station into the API's path form.
///
/// `"San Francisco, CA"` becomes `"CA/San_Francisco"`; any other station
/// form (airport code, zipcode, LAT,LONG) passes through unchanged.
pub fn normalize_station(station: &str) -> String {
    let city_state = Regex::new(r"([A-Za-z ]+), ([A-Za-z ]+)").expect("valid pattern");

    match city_state.captures(station) {
        Some(caps) => format!("{}/{}", &caps[2], &caps[1]).replace(' ', "_"),
        None => station.to_string(),
    }
}

/// Build the composite request URL for an ordered feature list.
///
/// Features appear in the path in the order given, which is also the order
/// the report is printed in.
pub fn build_url(key: &str, features: &[Feature], station: &str) -> String {
    let path: Vec<String> = features.iter().map(Feature::path_segment).collect();
    format!("{}{}/{}/q/{}.json", API_ROOT, key, path.join("/"), station)
}
