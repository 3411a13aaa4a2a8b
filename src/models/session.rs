use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One parsed session-log file.
///
/// Assembled in a single pass by [`crate::parsers::session::parse_session`]
/// and never mutated afterwards. The settings/statistics sub-records are
/// `None` when their section failed to decode; `kills` is empty in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_hash: String,
    pub time: NaiveDateTime,
    pub general_settings: Option<GeneralSettings>,
    pub weapon_settings: Option<WeaponSettings>,
    pub statistics: Option<Statistics>,
    pub kills: Vec<Kill>,
}

/// Game-wide settings from the key/value section at the end of the file.
/// All typed fields are required; the label fields pass through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    pub input_lag: f64,
    pub max_fps: f64,
    pub sens_scale: String,
    pub horiz_sens: f64,
    pub vert_sens: f64,
    pub fov: f64,
    pub hide_gun: bool,
    pub crosshair: String,
    pub crosshair_scale: f64,
    pub crosshair_color: String,
}

/// Per-weapon aggregates from the tabular weapon section.
///
/// `shots`/`hits`/`damage_done`/`damage_possible` are required; the
/// secondary sensitivity/crosshair block is absent from many scenarios and
/// defaults to zero values when missing or unreadable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponSettings {
    pub weapon: String,
    pub shots: i64,
    pub hits: i64,
    pub damage_done: f64,
    pub damage_possible: f64,
    pub sens_scale: String,
    pub horiz_sens: f64,
    pub vert_sens: f64,
    pub fov: f64,
    pub hide_gun: bool,
    pub crosshair: String,
    pub crosshair_scale: f64,
    pub crosshair_color: String,
    pub ads_sens: f64,
    pub ads_zoom_scale: f64,
}

/// Whole-session aggregates from the key/value statistics section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub kills: f64,
    pub deaths: f64,
    pub fight_time: f64,
    pub avg_ttk: f64,
    pub damage_done: f64,
    pub damage_taken: f64,
    pub midairs: f64,
    pub midaired: f64,
    pub directs: f64,
    pub directed: f64,
    pub distance_traveled: f64,
    pub scenario: String,
    pub score: f64,
    pub hash: String,
    pub game_version: String,
}

/// One row of the kill-log table. Every column is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kill {
    pub kill_number: f64,
    pub timestamp: String,
    pub bot: String,
    pub weapon: String,
    pub ttk: String,
    pub shots: f64,
    pub hits: f64,
    pub accuracy: f64,
    pub damage_done: f64,
    pub damage_possible: f64,
    pub efficiency: f64,
    pub cheated: bool,
}
