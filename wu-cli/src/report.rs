//! Dispatcher and per-feature text formatters.
//!
//! Each formatter reads only its own sub-field of the composite
//! observation; sub-fields for features that were not requested are never
//! touched. Output goes to the supplied writer so the binary can hand over
//! stdout while tests capture a buffer.

use std::io::{self, Write};

use wu_core::Feature;
use wu_core::model::{
    Alert, Almanac, CurrentObservation, Forecast, History, Location, MoonPhase, ObservationSet,
    Tide, Trip,
};

/// Write one report block per requested feature, in request order.
pub fn render<W: Write>(
    w: &mut W,
    features: &[Feature],
    observation: &ObservationSet,
    station: &str,
) -> io::Result<()> {
    for feature in features {
        match feature {
            Feature::Conditions => print_conditions(w, &observation.current_observation)?,
            Feature::Forecast => print_forecast(w, &observation.forecast, station)?,
            Feature::Forecast10Day => print_forecast10(w, &observation.forecast, station)?,
            Feature::Alerts => print_alerts(w, &observation.alerts, station)?,
            Feature::Almanac => print_almanac(w, &observation.almanac, station)?,
            Feature::History(_) | Feature::Yesterday => {
                print_history(w, &observation.history, station)?;
            }
            Feature::Planner(_) => print_planner(w, &observation.trip)?,
            Feature::Astronomy => print_astronomy(w, &observation.moon_phase, station)?,
            Feature::Tide => print_tides(w, &observation.tide, station)?,
            Feature::Geolookup => print_lookup(w, &observation.location)?,
        }
    }
    Ok(())
}

fn print_conditions<W: Write>(w: &mut W, current: &CurrentObservation) -> io::Result<()> {
    writeln!(
        w,
        "Current conditions at {} ({})",
        current.display_location.full, current.station_id
    )?;
    writeln!(w, "{}", current.observation_time)?;
    writeln!(w, "{}, {}", current.weather, current.temperature_string)?;
    writeln!(w, "Relative humidity: {}", current.relative_humidity)?;
    writeln!(w, "Wind: {}", current.wind_string)?;
    writeln!(
        w,
        "Pressure: {} in ({} mb), trending {}",
        current.pressure_in, current.pressure_mb, current.pressure_trend
    )?;
    writeln!(w, "Dewpoint: {}", current.dewpoint_string)?;
    writeln!(w, "Visibility: {} miles", current.visibility_mi)?;
    writeln!(w, "Precipitation today: {}", current.precip_today_string)?;
    Ok(())
}

fn print_forecast<W: Write>(w: &mut W, forecast: &Forecast, station: &str) -> io::Result<()> {
    let txt = &forecast.txt_forecast;
    writeln!(w, "Forecast for {station}")?;
    writeln!(w, "Issued at {}", txt.date)?;
    for day in &txt.forecastday {
        writeln!(w, "{}: {}", day.title, day.fcttext)?;
    }
    Ok(())
}

fn print_forecast10<W: Write>(w: &mut W, forecast: &Forecast, station: &str) -> io::Result<()> {
    let txt = &forecast.txt_forecast;
    writeln!(w, "10-day forecast for {station}")?;
    writeln!(w, "Issued at {}", txt.date)?;
    for day in &txt.forecastday {
        writeln!(w, "{}: {}", day.title, day.fcttext)?;
    }
    Ok(())
}

fn print_alerts<W: Write>(w: &mut W, alerts: &[Alert], station: &str) -> io::Result<()> {
    if alerts.is_empty() {
        writeln!(w, "No active weather alerts for {station}")?;
        return Ok(());
    }

    writeln!(w, "Weather alerts for {station}")?;
    for alert in alerts {
        writeln!(w, "{} ({})", alert.description, alert.kind)?;
        writeln!(w, "Issued: {}", alert.date)?;
        writeln!(w, "Expires: {}", alert.expires)?;
        writeln!(w, "{}", alert.message)?;
    }
    Ok(())
}

fn print_almanac<W: Write>(w: &mut W, almanac: &Almanac, station: &str) -> io::Result<()> {
    writeln!(w, "Almanac for {station}")?;
    writeln!(
        w,
        "Normal high: {} F ({} C)",
        almanac.temp_high.normal.fahrenheit, almanac.temp_high.normal.celsius
    )?;
    writeln!(
        w,
        "Record high: {} F ({} C) in {}",
        almanac.temp_high.record.fahrenheit,
        almanac.temp_high.record.celsius,
        almanac.temp_high.recordyear
    )?;
    writeln!(
        w,
        "Normal low: {} F ({} C)",
        almanac.temp_low.normal.fahrenheit, almanac.temp_low.normal.celsius
    )?;
    writeln!(
        w,
        "Record low: {} F ({} C) in {}",
        almanac.temp_low.record.fahrenheit,
        almanac.temp_low.record.celsius,
        almanac.temp_low.recordyear
    )?;
    Ok(())
}

fn print_history<W: Write>(w: &mut W, history: &History, station: &str) -> io::Result<()> {
    writeln!(w, "Weather history for {station}")?;
    writeln!(w, "{}", history.date.pretty)?;
    for summary in &history.dailysummary {
        writeln!(w, "High: {} F ({} C)", summary.maxtempi, summary.maxtempm)?;
        writeln!(w, "Low: {} F ({} C)", summary.mintempi, summary.mintempm)?;
        writeln!(w, "Mean: {} F ({} C)", summary.meantempi, summary.meantempm)?;
        writeln!(
            w,
            "Precipitation: {} in ({} mm)",
            summary.precipi, summary.precipm
        )?;
        writeln!(
            w,
            "Max wind: {} mph ({} kph)",
            summary.maxwspdi, summary.maxwspdm
        )?;

        let mut events = Vec::new();
        if summary.fog == "1" {
            events.push("fog");
        }
        if summary.rain == "1" {
            events.push("rain");
        }
        if summary.snow == "1" {
            events.push("snow");
        }
        if !events.is_empty() {
            writeln!(w, "Observed: {}", events.join(", "))?;
        }
    }
    Ok(())
}

fn print_planner<W: Write>(w: &mut W, trip: &Trip) -> io::Result<()> {
    writeln!(w, "{}", trip.title)?;
    writeln!(
        w,
        "Period of record: {} to {}",
        trip.period_of_record.date_start.pretty, trip.period_of_record.date_end.pretty
    )?;
    writeln!(
        w,
        "High temperature: min {} F, average {} F, max {} F",
        trip.temp_high.min.fahrenheit, trip.temp_high.avg.fahrenheit, trip.temp_high.max.fahrenheit
    )?;
    writeln!(
        w,
        "Low temperature: min {} F, average {} F, max {} F",
        trip.temp_low.min.fahrenheit, trip.temp_low.avg.fahrenheit, trip.temp_low.max.fahrenheit
    )?;

    let chances = [
        &trip.chance_of.chanceofsunnycloudyday,
        &trip.chance_of.chanceofpartlycloudyday,
        &trip.chance_of.chanceofcloudyday,
        &trip.chance_of.chanceofrainday,
        &trip.chance_of.chanceofsnowonground,
    ];
    for chance in chances {
        if !chance.name.is_empty() {
            writeln!(w, "Chance of {}: {}%", chance.name, chance.percentage)?;
        }
    }
    Ok(())
}

fn print_astronomy<W: Write>(w: &mut W, moon: &MoonPhase, station: &str) -> io::Result<()> {
    writeln!(w, "Astronomy for {station}")?;
    writeln!(
        w,
        "Moon is {}% illuminated, {} days old",
        moon.percent_illuminated, moon.age_of_moon
    )?;
    writeln!(w, "Sunrise: {}:{}", moon.sunrise.hour, moon.sunrise.minute)?;
    writeln!(w, "Sunset: {}:{}", moon.sunset.hour, moon.sunset.minute)?;
    Ok(())
}

fn print_tides<W: Write>(w: &mut W, tide: &Tide, station: &str) -> io::Result<()> {
    if tide.tide_summary.is_empty() {
        writeln!(w, "No tidal data available for {station}")?;
        return Ok(());
    }

    match tide.tide_info.first() {
        Some(site) => writeln!(w, "Tidal data for {}", site.tide_site)?,
        None => writeln!(w, "Tidal data for {station}")?,
    }
    for summary in &tide.tide_summary {
        writeln!(
            w,
            "{}: {}, {}",
            summary.date.pretty, summary.data.kind, summary.data.height
        )?;
    }
    Ok(())
}

fn print_lookup<W: Write>(w: &mut W, location: &Location) -> io::Result<()> {
    writeln!(
        w,
        "Stations near {}, {}:",
        location.city, location.state
    )?;
    let nearby = &location.nearby_weather_stations;
    if !nearby.airport.station.is_empty() {
        writeln!(w, "Airports:")?;
        for airport in &nearby.airport.station {
            writeln!(w, "  {}, {} ({})", airport.city, airport.state, airport.icao)?;
        }
    }
    if !nearby.pws.station.is_empty() {
        writeln!(w, "Personal weather stations:")?;
        for pws in &nearby.pws.station {
            writeln!(w, "  {}, {} ({})", pws.neighborhood, pws.city, pws.id)?;
        }
    }
    Ok(())
}
