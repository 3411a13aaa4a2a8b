//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const KILL_HEADER: &str =
    "Kill #,Timestamp,Bot,Weapon,TTK,Shots,Hits,Accuracy,Damage Done,Damage Possible,Efficiency,Cheated";

pub const WEAPON_HEADER: &str = "Weapon,Shots,Hits,Damage Done,Damage Possible";

/// Builder for raw session-file content (four CRLF-blank-line separated
/// sections in the fixed order: kills, weapons, statistics, general)
pub struct SessionContentBuilder {
    kills: String,
    weapons: String,
    stats: String,
    general: String,
}

impl SessionContentBuilder {
    /// Create a builder holding a complete, well-formed session
    pub fn new() -> Self {
        Self {
            kills: format!(
                "{KILL_HEADER}\r\n1,14:05:01,bot_easy,AR,0.45s,5,4,0.8,400,500,0.8,false"
            ),
            weapons: format!("{WEAPON_HEADER}\r\nAR,5,4,400,500"),
            stats: "Kills:,1\r\nDeaths:,0\r\nFight Time:,60\r\nAvg TTK:,0.45\r\nDamage Done:,400\r\nDamage Taken:,0\r\nMidairs:,0\r\nMidaired:,0\r\nDirects:,0\r\nDirected:,0\r\nDistance Traveled:,1.0\r\nScore:,50\r\nScenario:,1v1novawall\r\nHash:,abc123\r\nGame Version:,3.1.4.0"
                .to_string(),
            general: "Input Lag:,5\r\nMax FPS (config):,240\r\nSens Scale:,cm/360\r\nHoriz Sens:,1.2\r\nVert Sens:,1.2\r\nFOV:,103\r\nHide Gun:,true\r\nCrosshair:,dot.png\r\nCrosshair Scale:,1.0\r\nCrosshair Color:,white"
                .to_string(),
        }
    }

    /// Replace the kill-log section with a header plus `count` data rows
    pub fn with_kill_count(mut self, count: usize) -> Self {
        let mut section = String::from(KILL_HEADER);
        for i in 1..=count {
            section.push_str(&format!(
                "\r\n{i},14:05:{:02},bot_easy,AR,0.45s,5,4,0.8,400,500,0.8,false",
                i % 60
            ));
        }
        self.kills = section;
        self
    }

    /// Replace the kill-log section verbatim
    pub fn with_kills(mut self, section: &str) -> Self {
        self.kills = section.to_string();
        self
    }

    /// Replace the weapon-settings section verbatim
    pub fn with_weapons(mut self, section: &str) -> Self {
        self.weapons = section.to_string();
        self
    }

    /// Replace the statistics section verbatim
    pub fn with_stats(mut self, section: &str) -> Self {
        self.stats = section.to_string();
        self
    }

    /// Replace the general-settings section verbatim
    pub fn with_general(mut self, section: &str) -> Self {
        self.general = section.to_string();
        self
    }

    pub fn build(self) -> String {
        format!(
            "{}\r\n\r\n{}\r\n\r\n{}\r\n\r\n{}",
            self.kills, self.weapons, self.stats, self.general
        )
    }
}

impl Default for SessionContentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a directory of session files
pub struct SessionDirBuilder {
    temp_dir: TempDir,
}

impl SessionDirBuilder {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a session file with the given name and content
    pub fn with_session(self, file_name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(file_name), content)
            .expect("Failed to write session file");
        self
    }

    /// Add a well-formed session file under the given name
    pub fn with_default_session(self, file_name: &str) -> Self {
        let content = SessionContentBuilder::new().build();
        self.with_session(file_name, &content)
    }

    /// Add an exporter.json destination config
    pub fn with_config(self, bucket_name: &str) -> Self {
        let config = format!(
            r#"{{"projectId":"reporting","bucketName":"{bucket_name}","credentialsPath":"credentials.json"}}"#
        );
        fs::write(self.temp_dir.path().join("exporter.json"), config)
            .expect("Failed to write exporter.json");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SessionDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// File name following the trainer's convention, with the timestamp token as
/// the last ` - `-anchored fragment
pub fn stats_file_name(scenario: &str, token: &str) -> String {
    format!("{scenario} - Challenge - {token} Stats.csv")
}
