// Player tuning values

/// Movement and combat tuning for the player character
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    // Movement
    /// Walking speed, scaled by the tick delta into a per-tick displacement
    pub speed: f32,
    /// Smoothing factor for velocity interpolation (0.0 = never reaches target, 1.0 = instant)
    pub friction: f32,

    // Combat
    /// Speed the player lunges forward with while attacking
    pub lunge_speed: f32,
    /// Seconds without attacking before the combo resets to the first move
    pub attack_cooldown: f32,

    // Dimensions (for the physics collider around the feet)
    pub width: f32,
    pub height: f32,
}

pub const BASE_STATS: PlayerStats = PlayerStats {
    speed: 80.0,
    friction: 0.2,

    lunge_speed: 10.0,
    attack_cooldown: 0.5,

    width: 16.0,
    height: 6.0,
};

impl Default for PlayerStats {
    fn default() -> Self {
        BASE_STATS
    }
}

/// A tuning value outside its usable range
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("friction must be in (0, 1], got {0}")]
    Friction(f32),

    #[error("speed must be positive, got {0}")]
    Speed(f32),

    #[error("lunge speed must be positive, got {0}")]
    LungeSpeed(f32),

    #[error("attack cooldown must be positive, got {0}")]
    AttackCooldown(f32),

    #[error("collider size must be positive, got {0}x{1}")]
    Size(f32, f32),
}

/// Positive and finite; NaN fails every comparison
fn is_positive(value: f32) -> bool {
    value > 0.0 && value.is_finite()
}

impl PlayerStats {
    pub fn standard() -> Self {
        BASE_STATS
    }

    /// Check the values are usable, reporting the first problem found
    pub fn validate(&self) -> Result<(), StatsError> {
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(StatsError::Friction(self.friction));
        }
        if !is_positive(self.speed) {
            return Err(StatsError::Speed(self.speed));
        }
        if !is_positive(self.lunge_speed) {
            return Err(StatsError::LungeSpeed(self.lunge_speed));
        }
        if !is_positive(self.attack_cooldown) {
            return Err(StatsError::AttackCooldown(self.attack_cooldown));
        }
        if !is_positive(self.width) || !is_positive(self.height) {
            return Err(StatsError::Size(self.width, self.height));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = PlayerStats::default();
        assert_eq!(stats.speed, 80.0);
        assert_eq!(stats.friction, 0.2);
        assert_eq!(stats.lunge_speed, 10.0);
    }

    #[test]
    fn test_standard_equals_default() {
        assert_eq!(PlayerStats::standard(), PlayerStats::default());
    }

    #[test]
    fn test_base_stats_are_valid() {
        assert!(BASE_STATS.validate().is_ok());
    }

    #[test]
    fn test_invalid_friction() {
        let stats = PlayerStats {
            friction: 0.0,
            ..BASE_STATS
        };
        assert_eq!(stats.validate(), Err(StatsError::Friction(0.0)));

        let stats = PlayerStats {
            friction: f32::NAN,
            ..BASE_STATS
        };
        assert!(stats.validate().is_err());
    }

    #[test]
    fn test_invalid_cooldown() {
        let stats = PlayerStats {
            attack_cooldown: 0.0,
            ..BASE_STATS
        };
        assert_eq!(stats.validate(), Err(StatsError::AttackCooldown(0.0)));
    }

    #[test]
    fn test_nan_speed_is_rejected() {
        let stats = PlayerStats {
            speed: f32::NAN,
            ..BASE_STATS
        };
        assert!(matches!(stats.validate(), Err(StatsError::Speed(_))));

        let stats = PlayerStats {
            speed: f32::INFINITY,
            ..BASE_STATS
        };
        assert!(matches!(stats.validate(), Err(StatsError::Speed(_))));
    }

    #[test]
    fn test_invalid_lunge_speed() {
        for lunge_speed in [0.0, -10.0, f32::NAN] {
            let stats = PlayerStats {
                lunge_speed,
                ..BASE_STATS
            };
            assert!(matches!(stats.validate(), Err(StatsError::LungeSpeed(_))));
        }
    }

    #[test]
    fn test_invalid_size() {
        let stats = PlayerStats {
            height: 0.0,
            ..BASE_STATS
        };
        let err = stats.validate().unwrap_err();
        assert_eq!(err, StatsError::Size(16.0, 0.0));
        assert_eq!(err.to_string(), "collider size must be positive, got 16x0");
    }
}
