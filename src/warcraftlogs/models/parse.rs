use serde::Deserialize;

/// One historical parse from `parses/character/{name}/{server}/{region}`.
#[derive(Deserialize, Debug, Clone)]
pub struct CharacterParse {
    #[serde(default, rename = "reportID")]
    pub report_id: String,

    #[serde(default, rename = "fightID")]
    pub fight_id: i32,

    #[serde(default)]
    pub percentile: Option<f64>,

    #[serde(default)]
    pub spec: Option<String>,

    #[serde(default)]
    pub class: Option<String>,
}

impl CharacterParse {
    /// Floored percentile, a missing value counts as zero.
    pub fn floored_percentile(&self) -> i32 {
        self.percentile.unwrap_or_default().floor() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_character_parses_ok() -> crate::prelude::Result {
        let parses = serde_json::from_str::<Vec<CharacterParse>>(
            // language=JSON
            r#"[
                {"reportID": "a1b2c3", "fightID": 3, "percentile": 99.6, "spec": "Frost", "class": "Mage"},
                {"reportID": "a1b2c3", "fightID": 5}
            ]"#,
        )?;
        assert_eq!(parses[0].floored_percentile(), 99);
        assert_eq!(parses[0].spec.as_deref(), Some("Frost"));
        assert_eq!(parses[1].floored_percentile(), 0);
        assert_eq!(parses[1].class, None);
        Ok(())
    }
}
