//! Prints everything the dashboard would draw for a small in-memory station feed.

use chrono::{TimeZone, Utc};
use serde_json::json;
use weather_view::{
    compass_labels, radar_rings, CanvasSize, DataStore, LoadOptions, TimeFilter, ViewContext,
    WeatherView, WeatherViewError,
};

fn main() -> Result<(), WeatherViewError> {
    // --- Raw feed, one record is malformed and gets skipped ---
    let feed = json!([
        { "dateutc": "2025-07-07", "tempf": 64.2, "humidity": 81.0, "dewptf": 58.3, "pressure": 29.88,
          "windchillf": 64.2, "windspeedmph": 3.4, "winddir": 200, "rainin": 0.0, "UV": 2 },
        { "dateutc": "2025-07-08", "tempf": 71.9, "humidity": 62.0, "dewptf": 57.8, "pressure": 29.95,
          "windchillf": 70.1, "windspeedmph": 8.9, "winddir": 250, "rainin": 0.12, "UV": 6 },
        { "dateutc": "2025-07-08", "tempf": "warm" },
        { "dateutc": "2025-07-09", "tempf": 68.4, "humidity": 70.0, "dewptf": 58.0, "pressure": 29.91,
          "windchillf": 66.0, "windspeedmph": 5.2, "winddir": 310, "rainin": 0.0, "UV": 4 }
    ]);
    let store = DataStore::from_json_slice(feed.to_string().as_bytes(), &LoadOptions::default())?;
    println!("Loaded {} observations, {} skipped", store.len(), store.skipped());

    let now = Utc.with_ymd_and_hms(2025, 7, 9, 12, 0, 0).unwrap();

    for filter in TimeFilter::ALL {
        let context = ViewContext::from_filter(filter, now, store.observations());
        let view = WeatherView::new(&store, &context);

        println!("\n--- {} ({}) ---", filter, context.range);
        for (quantity, stat) in view.info_boxes() {
            match stat {
                Some(stat) => println!(
                    "{:<16} now {:>10}  max {:>10} at {}  min {:>10} at {}",
                    quantity.label(),
                    quantity.format_value(stat.current),
                    quantity.format_value(stat.max),
                    view.tick_style().format(stat.max_at),
                    quantity.format_value(stat.min),
                    view.tick_style().format(stat.min_at),
                ),
                None => println!("{:<16} no data", quantity.label()),
            }
        }

        let axes = view.axis_domain();
        println!(
            "Time axis {} .. {}, value axis {:.1} .. {:.1}",
            axes.x.start, axes.x.end, axes.y.min, axes.y.max
        );
    }

    // --- Wind radar for the whole record, zoomed and dragged ---
    let context = ViewContext::from_filter(TimeFilter::All, now, store.observations())
        .with_zoom(2.0)
        .with_drag(-25.0);
    let view = WeatherView::new(&store, &context);
    let size = CanvasSize::new(300.0, 300.0);
    let radar = view.wind_radar();

    println!("\n--- Wind radar (max {} mph) ---", radar.max_speed);
    for projected in radar.project(size) {
        println!(
            "{:>5.1} mph from {:>3}° -> ({:.1}, {:.1}) rgb {:?}",
            projected.point.radius,
            projected.point.angle,
            projected.position.x,
            projected.position.y,
            projected.color.to_rgb()
        );
    }
    for ring in radar_rings(radar.max_speed, size) {
        println!("Ring r={:.1} labelled {}", ring.radius, ring.label());
    }
    for label in compass_labels(size, 12.0) {
        println!("{} at ({:.1}, {:.1})", label.label, label.position.x, label.position.y);
    }
    Ok(())
}
