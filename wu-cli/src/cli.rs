use std::io;

use anyhow::{Context, Result, bail};
use clap::Parser;

use wu_core::{ApiClient, Config, DEFAULT_STATION, Feature, build_url, normalize_station, retrieve};

use crate::report;

const LOOKUP_USAGE: &str = "Usage: wu --lookup STATION where STATION is a \"city, state-abbreviation\", \
     (US or Canadian) zipcode, 3- or 4-letter airport code, or LAT,LONG";

/// Command-line flags for `wu`.
///
/// Feature flags combine; the report follows a fixed canonical order rather
/// than argv order. With no feature flags at all, current conditions are
/// reported.
#[derive(Debug, Parser)]
#[command(
    name = "wu",
    version,
    about = "Retrieve weather data from Weather Underground"
)]
pub struct Args {
    /// Report the current weather conditions
    #[arg(long)]
    pub conditions: bool,

    /// Report any active weather alerts
    #[arg(long)]
    pub alerts: bool,

    /// Look up the codes for the weather stations in a particular area
    #[arg(long)]
    pub lookup: bool,

    /// Station to look up (only with --lookup)
    #[arg(value_name = "STATION")]
    pub lookup_station: Option<String>,

    /// Report sunrise, sunset, and lunar phase
    #[arg(long)]
    pub astro: bool,

    /// Report the current (3-day) forecast
    #[arg(long)]
    pub forecast: bool,

    /// Report the current (10-day) forecast
    #[arg(long)]
    pub forecast10: bool,

    /// Report average high, low and record temperatures
    #[arg(long)]
    pub almanac: bool,

    /// Report yesterday's weather data
    #[arg(long)]
    pub yesterday: bool,

    /// Report historical data for a particular day
    #[arg(long, value_name = "YYYYMMDD")]
    pub history: Option<String>,

    /// Report historical data for a particular date range (30-day max)
    #[arg(long, value_name = "MMDDMMDD")]
    pub planner: Option<String>,

    /// Report tidal data (if available)
    #[arg(long)]
    pub tides: bool,

    /// Show all weather data
    #[arg(long)]
    pub all: bool,

    /// Weather station: "city, state-abbreviation", (US or Canadian)
    /// zipcode, 3- or 4-letter airport code, or LAT,LONG
    #[arg(short, value_name = "STATION")]
    pub station: Option<String>,
}

impl Args {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;

        // A lookup needs exactly one trailing station argument; anything
        // else is a usage error, reported before any network work.
        if self.lookup != self.lookup_station.is_some() {
            println!("{LOOKUP_USAGE}");
            return Ok(());
        }

        if self.history_date().is_some() && self.planner_date().is_some() {
            bail!(
                "Weather Underground does not support making a history\n\
                 request and a planner request at the same time."
            );
        }

        let station = self.resolve_station(&config);
        let features = self.features();
        let url = build_url(&config.key, &features, &station);

        let client = ApiClient::new()?;
        let observation = retrieve(&client, &url)
            .await
            .with_context(|| format!("Failed to retrieve weather data for {station}"))?;

        report::render(&mut io::stdout().lock(), &features, &observation, &station)
            .context("Failed to write report")?;

        Ok(())
    }

    /// Resolve the station identifier: `-s` flag, else the configured
    /// default, else the built-in fallback; `--lookup` replaces it with the
    /// lookup target. The result is normalized into URL-path form.
    fn resolve_station(&self, config: &Config) -> String {
        let mut station = match &self.station {
            Some(s) => s.clone(),
            None if !config.station.is_empty() => config.station.clone(),
            None => DEFAULT_STATION.to_string(),
        };

        if self.lookup {
            station = self.lookup_station.clone().unwrap_or(station);
        }

        normalize_station(&station)
    }

    /// Build the ordered feature list. `--all` contributes the full
    /// canonical list first; individual flags append afterwards, duplicates
    /// allowed. An empty result falls back to current conditions.
    fn features(&self) -> Vec<Feature> {
        let history = self.history.clone().unwrap_or_default();
        let planner = self.planner.clone().unwrap_or_default();

        let mut features = Vec::new();

        if self.all {
            features = Feature::all(&history, &planner);
        }
        if self.alerts {
            features.push(Feature::Alerts);
        }
        if self.almanac {
            features.push(Feature::Almanac);
        }
        if self.astro {
            features.push(Feature::Astronomy);
        }
        if self.conditions {
            features.push(Feature::Conditions);
        }
        if self.forecast {
            features.push(Feature::Forecast);
        }
        if self.forecast10 {
            features.push(Feature::Forecast10Day);
        }
        if self.history_date().is_some() {
            features.push(Feature::History(history));
        }
        if self.yesterday {
            features.push(Feature::Yesterday);
        }
        if self.planner_date().is_some() {
            features.push(Feature::Planner(planner));
        }
        if self.tides {
            features.push(Feature::Tide);
        }
        if self.lookup {
            features.push(Feature::Geolookup);
        }

        if features.is_empty() {
            features.push(Feature::Conditions);
        }

        features
    }

    fn history_date(&self) -> Option<&str> {
        self.history.as_deref().filter(|d| !d.is_empty())
    }

    fn planner_date(&self) -> Option<&str> {
        self.planner.as_deref().filter(|d| !d.is_empty())
    }
}
