//! Sampled engagement runs

use ballistics_core::{simulate_engagement, Ammo, Armor, DamageModel};
use rand::Rng;

/// Aggregate of repeated sampled engagements on one zone
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    pub runs: u32,
    /// Runs that depleted the zone within the shot budget
    pub kills: u32,
    pub mean_shots: Option<f64>,
    pub best: Option<u32>,
    pub worst: Option<u32>,
    /// Average rolled penetrations per run
    pub mean_penetrations: f64,
}

impl SampleSummary {
    /// Run `runs` sampled engagements of up to `max_shots` each
    pub fn run(
        model: &DamageModel,
        ammo: &Ammo,
        zone: &str,
        equipped: &[Armor],
        runs: u32,
        max_shots: u32,
        rng: &mut impl Rng,
    ) -> Self {
        let mut kills = 0u32;
        let mut shot_total = 0u64;
        let mut penetrations = 0u64;
        let mut best: Option<u32> = None;
        let mut worst: Option<u32> = None;

        for _ in 0..runs {
            let run = simulate_engagement(model, ammo, zone, equipped, max_shots, &mut *rng);
            penetrations += run.steps.iter().filter(|s| s.penetrated == Some(true)).count() as u64;

            if let Some(shots) = run.incapacitated_after {
                kills += 1;
                shot_total += u64::from(shots);
                best = Some(best.map_or(shots, |b| b.min(shots)));
                worst = Some(worst.map_or(shots, |w| w.max(shots)));
            }
        }

        let mean_shots = (kills > 0).then(|| shot_total as f64 / f64::from(kills));
        let mean_penetrations = if runs > 0 {
            penetrations as f64 / f64::from(runs)
        } else {
            0.0
        };

        tracing::debug!(zone, runs, kills, ?mean_shots, "sampled engagements");

        SampleSummary {
            runs,
            kills,
            mean_shots,
            best,
            worst,
            mean_penetrations,
        }
    }

    /// Share of runs that depleted the zone, percent
    pub fn kill_rate(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        f64::from(self.kills) / f64::from(self.runs) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_exposed_zone_is_deterministic() {
        let ammo = Ammo::new("PSO", 30.0, 10.0);
        let mut rng = StdRng::seed_from_u64(1);
        let summary = SampleSummary::run(DamageModel::standard(), &ammo, "leftLeg", &[], 25, 10, &mut rng);

        assert_eq!(summary.kills, 25);
        assert_eq!(summary.best, Some(3));
        assert_eq!(summary.worst, Some(3));
        assert!((summary.kill_rate() - 100.0).abs() < f64::EPSILON);
        assert!((summary.mean_penetrations - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_seed_same_summary() {
        let ammo = Ammo::new("M855A1", 49.0, 44.0);
        let vest = vec![Armor::new("6B13", 4, 47.0, "ceramic").covering(["thorax"])];

        let mut rng = StdRng::seed_from_u64(99);
        let first = SampleSummary::run(DamageModel::standard(), &ammo, "thorax", &vest, 50, 20, &mut rng);
        let mut rng = StdRng::seed_from_u64(99);
        let second = SampleSummary::run(DamageModel::standard(), &ammo, "thorax", &vest, 50, 20, &mut rng);

        assert_eq!(first, second);
        if let (Some(best), Some(worst)) = (first.best, first.worst) {
            assert!(best <= worst);
        }
    }

    #[test]
    fn test_zero_runs() {
        let ammo = Ammo::new("PSO", 30.0, 10.0);
        let mut rng = StdRng::seed_from_u64(5);
        let summary = SampleSummary::run(DamageModel::standard(), &ammo, "thorax", &[], 0, 10, &mut rng);
        assert_eq!(summary.kills, 0);
        assert!(summary.mean_shots.is_none());
        assert!((summary.kill_rate() - 0.0).abs() < f64::EPSILON);
    }
}
