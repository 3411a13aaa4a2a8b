//! Decoders for the two key/value sections: general settings and session
//! statistics. Both are all-or-nothing: the first required field that is
//! missing or unreadable fails the whole section.

use crate::models::{GeneralSettings, Statistics};
use crate::parsers::error::ParseError;
use crate::parsers::fields::FieldTable;

/// Decode the general-settings section (the last block of the file).
pub fn decode_general_settings(block: &str) -> Result<GeneralSettings, ParseError> {
    let fields = FieldTable::parse(block);
    Ok(GeneralSettings {
        input_lag: fields.require("Input Lag")?,
        max_fps: fields.require("Max FPS (config)")?,
        sens_scale: fields.text("Sens Scale"),
        horiz_sens: fields.require("Horiz Sens")?,
        vert_sens: fields.require("Vert Sens")?,
        fov: fields.require("FOV")?,
        hide_gun: fields.require("Hide Gun")?,
        crosshair: fields.text("Crosshair"),
        crosshair_scale: fields.require("Crosshair Scale")?,
        crosshair_color: fields.text("Crosshair Color"),
    })
}

/// Decode the session-statistics section (the third block of the file).
pub fn decode_session_stats(block: &str) -> Result<Statistics, ParseError> {
    let fields = FieldTable::parse(block);
    Ok(Statistics {
        kills: fields.require("Kills")?,
        deaths: fields.require("Deaths")?,
        fight_time: fields.require("Fight Time")?,
        avg_ttk: fields.require("Avg TTK")?,
        damage_done: fields.require("Damage Done")?,
        damage_taken: fields.require("Damage Taken")?,
        midairs: fields.require("Midairs")?,
        midaired: fields.require("Midaired")?,
        directs: fields.require("Directs")?,
        directed: fields.require("Directed")?,
        distance_traveled: fields.require("Distance Traveled")?,
        scenario: fields.text("Scenario"),
        score: fields.require("Score")?,
        hash: fields.text("Hash"),
        game_version: fields.text("Game Version"),
    })
}
