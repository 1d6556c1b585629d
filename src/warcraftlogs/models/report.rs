use serde::Deserialize;

/// One recorded raid session, as returned by `report/fights/{code}`.
#[derive(Deserialize, Debug, Clone)]
pub struct Report {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub fights: Vec<Fight>,

    #[serde(default, rename = "exportedCharacters")]
    pub exported_characters: Vec<ExportedCharacter>,

    #[serde(default)]
    pub friendlies: Vec<Friendly>,
}

impl Report {
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => "Warcraft Logs Report",
        }
    }
}

/// One encounter attempt within a report.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Fight {
    pub id: i32,

    #[serde(default)]
    pub name: Option<String>,

    /// Boss encounter ID, `0` for trash.
    #[serde(default)]
    pub boss: i32,

    #[serde(default, rename = "zoneName")]
    pub zone_name: Option<String>,

    /// Start offset within the report, milliseconds.
    #[serde(default)]
    pub start: Option<i64>,

    /// End offset within the report, milliseconds.
    #[serde(default)]
    pub end: Option<i64>,

    #[serde(default)]
    pub kill: Option<bool>,
}

impl Fight {
    /// Raid fights are boss encounters in the configured target zone.
    pub fn is_raid_fight(&self, target_zone: &str) -> bool {
        self.boss != 0 && self.zone_name.as_deref() == Some(target_zone)
    }

    /// Tab label, falling back to the fight ID for unnamed fights.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Fight {}", self.id),
        }
    }

    pub fn duration_ms(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}

/// Character exported with the report, the source of the roster.
#[derive(Deserialize, Debug, Clone)]
pub struct ExportedCharacter {
    pub name: String,
    pub server: String,
    pub region: String,
}

/// Actor listed in the report's friendlies table.
#[derive(Deserialize, Debug, Clone)]
pub struct Friendly {
    pub name: String,

    #[serde(default)]
    pub server: Option<String>,

    #[serde(rename = "type")]
    pub class: String,

    #[serde(default)]
    pub icon: Option<String>,
}

impl Friendly {
    /// The spec is encoded in the icon name, after the class part.
    pub fn spec(&self) -> Option<&str> {
        self.icon.as_deref()?.split('-').nth(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_report_ok() -> crate::prelude::Result {
        let report = serde_json::from_str::<Report>(
            // language=JSON
            r#"{
                "title": "Wednesday clear",
                "fights": [
                    {"id": 3, "name": "Vexie and the Geargrinders", "boss": 3009, "zoneName": "Liberation of Undermine", "start": 1000, "end": 266000, "kill": true},
                    {"id": 4, "boss": 0, "start": 266000, "end": 280000}
                ],
                "exportedCharacters": [{"name": "Aldra", "server": "Tarren Mill", "region": "EU"}],
                "friendlies": [{"name": "Aldra", "server": "Tarren Mill", "type": "Mage", "icon": "Mage-Frost"}]
            }"#,
        )?;
        assert_eq!(report.display_title(), "Wednesday clear");
        assert_eq!(report.fights.len(), 2);
        assert_eq!(report.fights[0].duration_ms(), Some(265000));
        assert_eq!(report.fights[0].kill, Some(true));
        assert_eq!(report.exported_characters[0].region, "EU");
        assert_eq!(report.friendlies[0].spec(), Some("Frost"));
        Ok(())
    }

    #[test]
    fn missing_title_falls_back_ok() -> crate::prelude::Result {
        let report = serde_json::from_str::<Report>(
            // language=JSON
            r#"{"fights": []}"#,
        )?;
        assert_eq!(report.display_title(), "Warcraft Logs Report");
        assert!(report.exported_characters.is_empty());
        Ok(())
    }

    #[test]
    fn raid_fight_filter_ok() {
        let fight = Fight {
            id: 3,
            name: None,
            boss: 3009,
            zone_name: Some("Liberation of Undermine".to_string()),
            start: None,
            end: None,
            kill: None,
        };
        assert!(fight.is_raid_fight("Liberation of Undermine"));
        assert!(!fight.is_raid_fight("Nerub-ar Palace"));
        assert!(!Fight { boss: 0, ..fight.clone() }.is_raid_fight("Liberation of Undermine"));
        assert_eq!(fight.display_name(), "Fight 3");
    }
}
