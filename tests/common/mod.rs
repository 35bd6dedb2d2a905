#![allow(dead_code)]

use ratatui::{Terminal, backend::TestBackend};
use serde_json::json;
use weather_globe::{app::state::AppState, cli::Cli, domain::weather::DEFAULT_ICON_BASE, ui};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const API_KEY: &str = "test-key";

pub fn test_cli(api_url: &str) -> Cli {
    Cli {
        city: None,
        api_key: Some(API_KEY.to_string()),
        api_url: api_url.to_string(),
        icon_base: DEFAULT_ICON_BASE.to_string(),
        fps: 30,
        no_animation: false,
        clock_zones: Vec::new(),
        discard_stale: false,
        one_shot: false,
        log_file: None,
    }
}

pub fn current_body(city: &str, main: &str, icon: &str) -> serde_json::Value {
    json!({
        "name": city,
        "main": {"temp": 18.4, "humidity": 64},
        "weather": [{"main": main, "description": main.to_lowercase(), "icon": icon}],
        "wind": {"speed": 3.6}
    })
}

/// Three-hourly list covering `days` days from 2026-02-12, 00:00 first.
pub fn forecast_body(days: u32) -> serde_json::Value {
    let list: Vec<_> = (0..days)
        .flat_map(|day| {
            (0..24).step_by(3).map(move |hour| {
                json!({
                    "dt_txt": format!("2026-02-{:02} {hour:02}:00:00", 12 + day),
                    "main": {"temp": f64::from(day) + f64::from(hour) / 10.0},
                    "weather": [{"main": "Clouds", "description": "broken clouds", "icon": "04d"}]
                })
            })
        })
        .collect();
    json!({ "cod": "200", "list": list })
}

pub async fn mount_city(server: &MockServer, city: &str, main: &str) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", city))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(city, main, "01d")))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("q", city))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(6)))
        .mount(server)
        .await;
}

pub fn render_lines(state: &AppState, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| ui::render(frame, state))
        .expect("draw");
    let buffer = terminal.backend().buffer().clone();
    (0..height)
        .map(|y| {
            let line: String = (0..width).map(|x| buffer[(x, y)].symbol()).collect();
            line.trim_end().to_string()
        })
        .collect()
}
