use serde::Deserialize;

/// Starfield tuning, fixed for the lifetime of an animator.
///
/// Defaults match the stock landing-page look; a host page can override
/// individual fields through a JSON `data-config` attribute on the canvas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarfieldConfig {
    /// Stars per square logical pixel.
    pub density: f64,
    pub r_min: f64,
    pub r_max: f64,
    /// Base upward speed, logical pixels per 60Hz frame.
    pub speed: f64,
    pub twinkle: bool,
    pub max_stars: usize,
    /// Per-frame probability of spawning a shooting star.
    pub shooting_chance: f64,
    /// Base shooting-star speed before the random bonus.
    pub shooting_speed: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            density: 0.00012,
            r_min: 0.4,
            r_max: 1.6,
            speed: 0.02,
            twinkle: true,
            max_stars: 800,
            shooting_chance: 0.01,
            shooting_speed: 6.0,
        }
    }
}

impl StarfieldConfig {
    /// Repair degenerate values instead of failing: radius bounds are
    /// reordered, rates are floored at zero.
    pub fn normalize(mut self) -> Self {
        if self.r_min > self.r_max {
            std::mem::swap(&mut self.r_min, &mut self.r_max);
        }
        self.density = self.density.max(0.0);
        self.speed = self.speed.max(0.0);
        self.shooting_chance = self.shooting_chance.clamp(0.0, 1.0);
        self.shooting_speed = self.shooting_speed.max(0.0);
        self
    }

    /// Parse a JSON override blob on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::normalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_tuning() {
        let cfg = StarfieldConfig::default();
        assert_eq!(cfg.density, 0.00012);
        assert_eq!(cfg.r_min, 0.4);
        assert_eq!(cfg.r_max, 1.6);
        assert_eq!(cfg.speed, 0.02);
        assert!(cfg.twinkle);
        assert_eq!(cfg.max_stars, 800);
        assert_eq!(cfg.shooting_chance, 0.01);
        assert_eq!(cfg.shooting_speed, 6.0);
    }

    #[test]
    fn json_overrides_apply_over_defaults() {
        let cfg = StarfieldConfig::from_json(
            r#"{"density": 0.0005, "twinkle": false, "rMin": 0.8, "maxStars": 200}"#,
        )
        .unwrap();
        assert_eq!(cfg.density, 0.0005);
        assert!(!cfg.twinkle);
        assert_eq!(cfg.r_min, 0.8);
        assert_eq!(cfg.max_stars, 200);
        // untouched fields keep their defaults
        assert_eq!(cfg.shooting_speed, 6.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(StarfieldConfig::from_json("{not json").is_err());
    }

    #[test]
    fn normalize_reorders_radius_bounds() {
        let cfg = StarfieldConfig {
            r_min: 2.0,
            r_max: 0.5,
            ..Default::default()
        }
        .normalize();
        assert_eq!(cfg.r_min, 0.5);
        assert_eq!(cfg.r_max, 2.0);
    }

    #[test]
    fn normalize_floors_rates() {
        let cfg = StarfieldConfig {
            density: -1.0,
            shooting_chance: 3.0,
            ..Default::default()
        }
        .normalize();
        assert_eq!(cfg.density, 0.0);
        assert_eq!(cfg.shooting_chance, 1.0);
    }
}
