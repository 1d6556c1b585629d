//! Bundled class data: the official class colors.

/// Neutral gray rendered for an unknown or missing class.
pub const DEFAULT_CLASS_COLOR: &str = "#888888";

/// Class colors keyed by the API's class name. NPCs and pets share a muted gray.
static CLASS_COLORS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "DeathKnight" => "#C41E3A",
    "DemonHunter" => "#A330C9",
    "Druid" => "#FF7C0A",
    "Evoker" => "#33937F",
    "Hunter" => "#AAD372",
    "Mage" => "#3FC7EB",
    "Monk" => "#00FF98",
    "Paladin" => "#F48CBA",
    "Priest" => "#FFFFFF",
    "Rogue" => "#FFF468",
    "Shaman" => "#0070DD",
    "Warlock" => "#8788EE",
    "Warrior" => "#C69B6D",
    "NPC" => "#999999",
    "Pet" => "#999999",
};

/// Looks up the class color, falling back to [`DEFAULT_CLASS_COLOR`].
pub fn class_color(class: Option<&str>) -> &'static str {
    class
        .and_then(|class| CLASS_COLORS.get(class))
        .copied()
        .unwrap_or(DEFAULT_CLASS_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_class_colors_ok() {
        for (class, color) in [
            ("DeathKnight", "#C41E3A"),
            ("DemonHunter", "#A330C9"),
            ("Druid", "#FF7C0A"),
            ("Evoker", "#33937F"),
            ("Hunter", "#AAD372"),
            ("Mage", "#3FC7EB"),
            ("Monk", "#00FF98"),
            ("Paladin", "#F48CBA"),
            ("Priest", "#FFFFFF"),
            ("Rogue", "#FFF468"),
            ("Shaman", "#0070DD"),
            ("Warlock", "#8788EE"),
            ("Warrior", "#C69B6D"),
        ] {
            assert_eq!(class_color(Some(class)), color);
        }
    }

    #[test]
    fn non_player_actors_are_muted_ok() {
        assert_eq!(class_color(Some("NPC")), "#999999");
        assert_eq!(class_color(Some("Pet")), "#999999");
    }

    #[test]
    fn unknown_class_falls_back_ok() {
        assert_eq!(class_color(Some("Tinker")), DEFAULT_CLASS_COLOR);
        assert_eq!(class_color(None), DEFAULT_CLASS_COLOR);
    }
}
