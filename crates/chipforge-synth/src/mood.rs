//! Mood parameter sets.
//!
//! A mood is a named preset bundle selecting an alternate sound palette for
//! the same generator logic: the music bed's chord progression and layer
//! gains, the shared delay settings, and the ambient drone's voicing. The
//! set of moods is closed; unrecognized keys resolve to the default.

use serde::Serialize;

/// A four-note chord voicing in Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    /// Root frequency.
    pub root: f64,
    /// Third frequency.
    pub third: f64,
    /// Fifth frequency.
    pub fifth: f64,
    /// Seventh frequency.
    pub seventh: f64,
}

impl Chord {
    const fn new(root: f64, third: f64, fifth: f64, seventh: f64) -> Self {
        Self {
            root,
            third,
            fifth,
            seventh,
        }
    }
}

/// Per-layer gain weights for the music bed.
#[derive(Debug, Clone, Copy)]
pub struct LayerGains {
    pub kick: f64,
    pub snare: f64,
    pub hat: f64,
    pub bass: f64,
    pub pad: f64,
    pub arp: f64,
}

/// Feedback delay settings shared by a mood's assets.
#[derive(Debug, Clone, Copy)]
pub struct DelaySettings {
    /// Tap distance in seconds.
    pub time_seconds: f64,
    /// Recursive gain.
    pub feedback: f64,
    /// Wet mix.
    pub mix: f64,
}

/// Ambient drone voicing for a mood.
#[derive(Debug, Clone, Copy)]
pub struct DroneSettings {
    /// Base frequency of the detuned partial pair in Hz.
    pub base_freq: f64,
    /// Pitch-drift LFO rate in Hz.
    pub drift_hz: f64,
    /// Gain of the constant noise floor.
    pub air_gain: f64,
    /// Gain of the LFO-gated sparkle partial.
    pub sparkle_gain: f64,
}

/// The full parameter bundle selected by a [`Mood`].
#[derive(Debug, Clone, Copy)]
pub struct MoodParams {
    /// Bar-indexed chord progression (one chord per 4-second bar).
    pub progression: [Chord; 4],
    /// Music-bed layer gains.
    pub gains: LayerGains,
    /// Delay applied to the mood's music bed (and, at half mix, its drone).
    pub delay: DelaySettings,
    /// Ambient drone voicing.
    pub drone: DroneSettings,
}

/// The closed set of moods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Default palette: mid-tempo minor-seventh wandering.
    Explore,
    /// Driving, percussion-forward palette.
    Battle,
    /// Low, heavy palette.
    Boss,
    /// Sparse, airy palette.
    Sanctuary,
}

impl Mood {
    /// The documented fallback for unrecognized keys.
    pub const DEFAULT: Mood = Mood::Explore;

    /// Resolves a mood key, falling back to [`Mood::DEFAULT`] for anything
    /// outside the recognized set.
    pub fn from_key(key: &str) -> Mood {
        match key {
            "explore" => Mood::Explore,
            "battle" => Mood::Battle,
            "boss" => Mood::Boss,
            "sanctuary" => Mood::Sanctuary,
            _ => Mood::DEFAULT,
        }
    }

    /// The canonical key for this mood.
    pub fn key(&self) -> &'static str {
        match self {
            Mood::Explore => "explore",
            Mood::Battle => "battle",
            Mood::Boss => "boss",
            Mood::Sanctuary => "sanctuary",
        }
    }

    /// The parameter bundle for this mood.
    pub fn params(&self) -> &'static MoodParams {
        match self {
            Mood::Explore => &EXPLORE,
            Mood::Battle => &BATTLE,
            Mood::Boss => &BOSS,
            Mood::Sanctuary => &SANCTUARY,
        }
    }
}

static EXPLORE: MoodParams = MoodParams {
    progression: [
        Chord::new(55.0, 69.3, 82.41, 98.0),
        Chord::new(61.74, 77.78, 92.5, 110.0),
        Chord::new(49.0, 61.74, 73.42, 92.5),
        Chord::new(65.41, 82.41, 98.0, 117.0),
    ],
    gains: LayerGains {
        kick: 0.66,
        snare: 0.38,
        hat: 0.16,
        bass: 0.24,
        pad: 0.09,
        arp: 0.17,
    },
    delay: DelaySettings {
        time_seconds: 0.22,
        feedback: 0.32,
        mix: 0.34,
    },
    drone: DroneSettings {
        base_freq: 55.0,
        drift_hz: 0.08,
        air_gain: 0.12,
        sparkle_gain: 0.07,
    },
};

static BATTLE: MoodParams = MoodParams {
    progression: [
        Chord::new(82.41, 98.0, 123.47, 146.83),
        Chord::new(73.42, 87.31, 110.0, 130.81),
        Chord::new(65.41, 77.78, 98.0, 116.54),
        Chord::new(92.5, 110.0, 138.59, 164.81),
    ],
    gains: LayerGains {
        kick: 0.78,
        snare: 0.52,
        hat: 0.22,
        bass: 0.30,
        pad: 0.06,
        arp: 0.20,
    },
    delay: DelaySettings {
        time_seconds: 0.18,
        feedback: 0.26,
        mix: 0.24,
    },
    drone: DroneSettings {
        base_freq: 41.2,
        drift_hz: 0.11,
        air_gain: 0.18,
        sparkle_gain: 0.05,
    },
};

static BOSS: MoodParams = MoodParams {
    progression: [
        Chord::new(41.2, 49.0, 61.74, 73.42),
        Chord::new(43.65, 51.91, 65.41, 77.78),
        Chord::new(36.71, 43.65, 55.0, 65.41),
        Chord::new(46.25, 55.0, 69.3, 82.41),
    ],
    gains: LayerGains {
        kick: 0.82,
        snare: 0.44,
        hat: 0.10,
        bass: 0.34,
        pad: 0.12,
        arp: 0.12,
    },
    delay: DelaySettings {
        time_seconds: 0.26,
        feedback: 0.30,
        mix: 0.28,
    },
    drone: DroneSettings {
        base_freq: 36.71,
        drift_hz: 0.05,
        air_gain: 0.22,
        sparkle_gain: 0.03,
    },
};

static SANCTUARY: MoodParams = MoodParams {
    progression: [
        Chord::new(65.41, 82.41, 98.0, 123.47),
        Chord::new(87.31, 110.0, 130.81, 164.81),
        Chord::new(73.42, 87.31, 110.0, 130.81),
        Chord::new(98.0, 123.47, 146.83, 174.61),
    ],
    gains: LayerGains {
        kick: 0.30,
        snare: 0.16,
        hat: 0.08,
        bass: 0.20,
        pad: 0.16,
        arp: 0.14,
    },
    delay: DelaySettings {
        time_seconds: 0.30,
        feedback: 0.34,
        mix: 0.40,
    },
    drone: DroneSettings {
        base_freq: 65.41,
        drift_hz: 0.06,
        air_gain: 0.10,
        sparkle_gain: 0.11,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Mood; 4] = [Mood::Explore, Mood::Battle, Mood::Boss, Mood::Sanctuary];

    #[test]
    fn test_from_key_roundtrip() {
        for mood in ALL {
            assert_eq!(Mood::from_key(mood.key()), mood);
        }
    }

    #[test]
    fn test_unrecognized_key_falls_back_to_default() {
        assert_eq!(Mood::from_key("default"), Mood::DEFAULT);
        assert_eq!(Mood::from_key(""), Mood::DEFAULT);
        assert_eq!(Mood::from_key("dungeon"), Mood::DEFAULT);
    }

    #[test]
    fn test_progressions_have_positive_frequencies() {
        for mood in ALL {
            for chord in &mood.params().progression {
                assert!(chord.root > 0.0);
                assert!(chord.third > 0.0);
                assert!(chord.fifth > 0.0);
                assert!(chord.seventh > 0.0);
            }
        }
    }

    #[test]
    fn test_delay_settings_stay_stable() {
        // Feedback stays inside the range the delay effect accepts.
        for mood in ALL {
            let delay = mood.params().delay;
            assert!(delay.feedback < 0.95);
            assert!((0.0..=1.0).contains(&delay.mix));
            assert!(delay.time_seconds > 0.0);
        }
    }

    #[test]
    fn test_drone_settings_sane() {
        for mood in ALL {
            let drone = mood.params().drone;
            assert!(drone.base_freq > 20.0);
            assert!(drone.drift_hz > 0.0);
        }
    }
}
