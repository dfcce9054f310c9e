//! The fixed asset catalog.
//!
//! The catalog owns the enumeration of which assets exist, their file
//! names, and their variant parameters. Per-asset seeds derive from a base
//! seed via BLAKE3 keyed by a seed key, so re-running the catalog is
//! bit-reproducible regardless of generation order. Variants that share a
//! seed key intentionally alias the same noise stream (e.g. a transposed
//! impact keeps the identical blast texture).

use chipforge_synth::rng::derive_seed;
use chipforge_synth::{AssetKind, AssetSpec, Mood};

/// Default base seed for catalog generation.
pub const BASE_SEED: u32 = 1234;

/// One cataloged asset.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Output file stem.
    pub name: &'static str,
    /// Key for seed derivation; shared between intentionally aliased
    /// variants.
    seed_key: &'static str,
    /// Archetype and variant parameters.
    pub kind: AssetKind,
}

impl CatalogEntry {
    /// The seed this entry derives from a base seed.
    pub fn seed(&self, base_seed: u32) -> u32 {
        derive_seed(base_seed, self.seed_key)
    }

    /// The generation spec for this entry.
    pub fn spec(&self, base_seed: u32) -> AssetSpec {
        AssetSpec {
            kind: self.kind,
            seed: self.seed(base_seed),
        }
    }
}

const fn entry(name: &'static str, seed_key: &'static str, kind: AssetKind) -> CatalogEntry {
    CatalogEntry {
        name,
        seed_key,
        kind,
    }
}

/// Every asset the generator produces.
pub static CATALOG: &[CatalogEntry] = &[
    // Music beds, one per mood.
    entry("music_explore", "music_explore", AssetKind::MusicBed { mood: Mood::Explore }),
    entry("music_battle", "music_battle", AssetKind::MusicBed { mood: Mood::Battle }),
    entry("music_boss", "music_boss", AssetKind::MusicBed { mood: Mood::Boss }),
    entry("music_sanctuary", "music_sanctuary", AssetKind::MusicBed { mood: Mood::Sanctuary }),
    // Ambient drones, one per mood.
    entry("drone_explore", "drone_explore", AssetKind::Drone { mood: Mood::Explore }),
    entry("drone_battle", "drone_battle", AssetKind::Drone { mood: Mood::Battle }),
    entry("drone_boss", "drone_boss", AssetKind::Drone { mood: Mood::Boss }),
    entry("drone_sanctuary", "drone_sanctuary", AssetKind::Drone { mood: Mood::Sanctuary }),
    // Impact variants share a seed key: same blast, shifted register.
    entry("sfx_impact_01", "sfx_impact", AssetKind::Impact { transpose_semitones: 0.0 }),
    entry("sfx_impact_02", "sfx_impact", AssetKind::Impact { transpose_semitones: -1.0 }),
    entry("sfx_impact_03", "sfx_impact", AssetKind::Impact { transpose_semitones: 1.0 }),
    entry("sfx_hit_01", "sfx_hit_01", AssetKind::Hit { transpose_semitones: 0.0 }),
    entry("sfx_hit_02", "sfx_hit_02", AssetKind::Hit { transpose_semitones: 2.0 }),
    entry("sfx_footstep_01", "sfx_footstep_01", AssetKind::Footstep { transpose_semitones: 0.0 }),
    entry("sfx_footstep_02", "sfx_footstep_02", AssetKind::Footstep { transpose_semitones: -0.7 }),
    entry("sfx_footstep_03", "sfx_footstep_03", AssetKind::Footstep { transpose_semitones: 0.5 }),
    entry("sfx_footstep_04", "sfx_footstep_04", AssetKind::Footstep { transpose_semitones: -0.3 }),
    entry("sfx_ui_click", "sfx_ui_click", AssetKind::UiClick { transpose_semitones: 0.0 }),
    entry("sfx_beam", "sfx_beam", AssetKind::Beam { transpose_semitones: 0.0 }),
    entry("sfx_boomerang", "sfx_boomerang", AssetKind::Boomerang { transpose_semitones: 0.0 }),
    entry("sfx_surge", "sfx_surge", AssetKind::Surge { transpose_semitones: 0.0 }),
    entry("sfx_critical_hit", "sfx_critical_hit", AssetKind::CriticalHit { transpose_semitones: 0.0 }),
    entry("sfx_level_up", "sfx_level_up", AssetKind::LevelUp { transpose_semitones: 0.0 }),
    entry("sfx_hurt", "sfx_hurt", AssetKind::Hurt { transpose_semitones: 0.0 }),
    entry("sfx_death", "sfx_death", AssetKind::Death { transpose_semitones: 0.0 }),
    // Enemy death variants alias the same crumble, transposed down.
    entry("sfx_enemy_death_01", "sfx_enemy_death", AssetKind::EnemyDeath { transpose_semitones: 0.0 }),
    entry("sfx_enemy_death_02", "sfx_enemy_death", AssetKind::EnemyDeath { transpose_semitones: -3.0 }),
    entry("sfx_boss_roar", "sfx_boss_roar", AssetKind::BossRoar { transpose_semitones: 0.0 }),
    entry("sfx_boss_slam", "sfx_boss_slam", AssetKind::BossSlam { transpose_semitones: 0.0 }),
    entry("sfx_boss_death", "sfx_boss_death", AssetKind::BossDeath { transpose_semitones: 0.0 }),
];

/// Looks up a catalog entry by name.
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = CATALOG.iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_every_archetype_is_cataloged() {
        let mut kinds: Vec<&str> = CATALOG.iter().map(|e| e.kind.name()).collect();
        kinds.sort_unstable();
        kinds.dedup();
        // 15 one-shots + music_bed + drone
        assert_eq!(kinds.len(), 17);
    }

    #[test]
    fn test_every_mood_has_a_bed_and_drone() {
        for mood in [Mood::Explore, Mood::Battle, Mood::Boss, Mood::Sanctuary] {
            assert!(CATALOG
                .iter()
                .any(|e| e.kind == AssetKind::MusicBed { mood }));
            assert!(CATALOG.iter().any(|e| e.kind == AssetKind::Drone { mood }));
        }
    }

    #[test]
    fn test_seed_derivation_is_stable() {
        let entry = find("sfx_beam").expect("beam is cataloged");
        assert_eq!(entry.seed(BASE_SEED), entry.seed(BASE_SEED));
        assert_ne!(entry.seed(BASE_SEED), entry.seed(BASE_SEED + 1));
    }

    #[test]
    fn test_impact_variants_alias_one_stream() {
        let first = find("sfx_impact_01").expect("cataloged");
        let second = find("sfx_impact_02").expect("cataloged");
        assert_eq!(first.seed(BASE_SEED), second.seed(BASE_SEED));
        assert_ne!(first.kind, second.kind);
    }

    #[test]
    fn test_find_unknown_name() {
        assert!(find("sfx_unknown").is_none());
    }
}
