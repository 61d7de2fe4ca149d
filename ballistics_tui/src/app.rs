//! Application state

use crate::simulation::SampleSummary;
use ballistics_core::{
    project_engagement, Ammo, AmmoComparison, Armor, BodyPart, Catalog, CatalogError, DamageModel,
    EngagementProjection, FragmentationDamage, TimeToKill, ZoneDamageResult,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const DEFAULT_FIRE_RATE: f64 = 650.0;
const FIRE_RATE_STEP: f64 = 50.0;
const MIN_FIRE_RATE: f64 = 50.0;
const MAX_FIRE_RATE: f64 = 1200.0;
const ANGLE_STEP: f64 = 15.0;
const MAX_ANGLE: f64 = 90.0;
pub const PROJECTION_SHOTS: u32 = 30;
pub const SAMPLE_RUNS: u32 = 500;
const RNG_SEED: u64 = 0x7a4c_0ff5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Compare,
    Zones,
    Ttk,
    Wear,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Compare, Tab::Zones, Tab::Ttk, Tab::Wear, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Compare => "Compare",
            Tab::Zones => "Zones",
            Tab::Ttk => "TTK",
            Tab::Wear => "Wear",
            Tab::Help => "Help",
        }
    }
}

/// Everything the Zones and TTK tabs show for one body part
#[derive(Debug, Clone)]
pub struct ZoneRow {
    pub part: BodyPart,
    pub damage: ZoneDamageResult,
    pub fragmentation: FragmentationDamage,
    pub time_to_kill: TimeToKill,
}

pub struct App {
    pub current_tab: Tab,
    pub model: DamageModel,
    pub catalog: Catalog,
    /// Ammo A: the round under study
    pub selected_ammo: usize,
    /// Ammo B: the round it is compared against
    pub compare_ammo: usize,
    /// Armor used by the Compare tab and toggled by `e`
    pub selected_armor: usize,
    /// Per catalog armor entry, whether it is part of the worn set
    pub equipped: Vec<bool>,
    pub selected_zone: usize,
    pub fire_rate: f64,
    /// Impact angle in degrees for ricochet
    pub impact_angle: f64,
    pub sample: Option<SampleSummary>,
    pub rng: StdRng,
    pub show_help: bool,
    pub status: String,
}

impl App {
    pub fn new(catalog: Catalog, model: DamageModel) -> Result<Self, CatalogError> {
        if catalog.ammo.is_empty() || catalog.armor.is_empty() {
            return Err(CatalogError::ValidationError(
                "catalog needs at least one ammo and one armor entry".to_string(),
            ));
        }

        // Start with a vest and a helmet on, if the catalog has them
        let mut equipped = vec![false; catalog.armor.len()];
        for zone in [BodyPart::Thorax, BodyPart::Head] {
            if let Some(index) = catalog.armor.iter().position(|a| a.covers(zone.as_str())) {
                equipped[index] = true;
            }
        }

        let compare_ammo = 1.min(catalog.ammo.len() - 1);
        let selected_zone = BodyPart::all()
            .iter()
            .position(|p| *p == BodyPart::Thorax)
            .unwrap_or(0);

        Ok(App {
            current_tab: Tab::Compare,
            model,
            catalog,
            selected_ammo: 0,
            compare_ammo,
            selected_armor: 0,
            equipped,
            selected_zone,
            fire_rate: DEFAULT_FIRE_RATE,
            impact_angle: 0.0,
            sample: None,
            rng: StdRng::seed_from_u64(RNG_SEED),
            show_help: false,
            status: String::from("Ready"),
        })
    }

    pub fn ammo(&self) -> &Ammo {
        &self.catalog.ammo[self.selected_ammo]
    }

    pub fn second_ammo(&self) -> &Ammo {
        &self.catalog.ammo[self.compare_ammo]
    }

    pub fn armor(&self) -> &Armor {
        &self.catalog.armor[self.selected_armor]
    }

    pub fn zone(&self) -> BodyPart {
        BodyPart::all()[self.selected_zone]
    }

    /// The worn armor set, in catalog order
    pub fn equipped_armor(&self) -> Vec<Armor> {
        self.catalog
            .armor
            .iter()
            .zip(&self.equipped)
            .filter(|(_, on)| **on)
            .map(|(armor, _)| armor.clone())
            .collect()
    }

    pub fn is_equipped(&self, index: usize) -> bool {
        self.equipped.get(index).copied().unwrap_or(false)
    }

    /// Ammo A vs ammo B against the selected armor and zone
    pub fn comparison(&self) -> AmmoComparison {
        self.model
            .compare_ammunition(self.ammo(), self.second_ammo(), self.armor(), Some(self.zone().as_str()))
    }

    /// Ammo A against the worn set, every body part
    pub fn zone_rows(&self) -> Vec<ZoneRow> {
        let ammo = self.ammo();
        let worn = self.equipped_armor();
        BodyPart::all()
            .iter()
            .map(|part| ZoneRow {
                part: *part,
                damage: self.model.zone_damage(ammo, part.as_str(), &worn),
                fragmentation: self.model.total_damage_with_fragmentation(ammo, part.as_str(), &worn),
                time_to_kill: self.model.time_to_kill(ammo, part.as_str(), &worn, Some(self.fire_rate)),
            })
            .collect()
    }

    /// Shot-by-shot expected engagement on the selected zone
    pub fn projection(&self) -> EngagementProjection {
        project_engagement(
            &self.model,
            self.ammo(),
            self.zone().as_str(),
            &self.equipped_armor(),
            PROJECTION_SHOTS,
        )
    }

    /// Ricochet chance of ammo A off the selected armor
    pub fn ricochet_chance(&self) -> f64 {
        let armor = self.armor();
        self.model
            .ricochet_chance(self.ammo(), armor.class, &armor.material, Some(self.impact_angle))
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 { tabs.len() - 1 } else { current_idx - 1 };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.current_tab = *tab;
        }
    }

    pub fn on_up(&mut self) {
        self.selected_ammo = step_back(self.selected_ammo, self.catalog.ammo.len());
        self.ammo_changed();
    }

    pub fn on_down(&mut self) {
        self.selected_ammo = step_forward(self.selected_ammo, self.catalog.ammo.len());
        self.ammo_changed();
    }

    pub fn on_left(&mut self) {
        self.compare_ammo = step_back(self.compare_ammo, self.catalog.ammo.len());
        self.status = format!("Ammo B: {}", self.second_ammo().name);
    }

    pub fn on_right(&mut self) {
        self.compare_ammo = step_forward(self.compare_ammo, self.catalog.ammo.len());
        self.status = format!("Ammo B: {}", self.second_ammo().name);
    }

    pub fn cycle_armor(&mut self) {
        self.selected_armor = step_forward(self.selected_armor, self.catalog.armor.len());
        self.status = format!("Armor: {}", self.armor().name);
    }

    pub fn cycle_zone(&mut self) {
        self.selected_zone = step_forward(self.selected_zone, BodyPart::all().len());
        self.sample = None;
        self.status = format!("Zone: {}", self.zone().label());
    }

    pub fn raise_fire_rate(&mut self) {
        self.fire_rate = (self.fire_rate + FIRE_RATE_STEP).min(MAX_FIRE_RATE);
    }

    pub fn lower_fire_rate(&mut self) {
        self.fire_rate = (self.fire_rate - FIRE_RATE_STEP).max(MIN_FIRE_RATE);
    }

    pub fn steepen_angle(&mut self) {
        self.impact_angle = (self.impact_angle + ANGLE_STEP).min(MAX_ANGLE);
    }

    pub fn flatten_angle(&mut self) {
        self.impact_angle = (self.impact_angle - ANGLE_STEP).max(0.0);
    }

    /// Put the selected armor on, or take it off
    pub fn toggle_equipped(&mut self) {
        let index = self.selected_armor;
        let Some(slot) = self.equipped.get_mut(index) else {
            return;
        };
        *slot = !*slot;
        let on = *slot;
        self.sample = None;

        let name = self.catalog.armor[index].name.clone();
        tracing::debug!(armor = %name, equipped = on, "toggled armor");
        self.status = if on {
            format!("Equipped {}", name)
        } else {
            format!("Removed {}", name)
        };
    }

    /// Roll sampled engagements for the Wear tab
    pub fn run_sample(&mut self) {
        let ammo = self.ammo().clone();
        let zone = self.zone();
        let worn = self.equipped_armor();
        let summary = SampleSummary::run(
            &self.model,
            &ammo,
            zone.as_str(),
            &worn,
            SAMPLE_RUNS,
            PROJECTION_SHOTS,
            &mut self.rng,
        );
        self.status = format!(
            "Sampled {} runs: {:.0}% depleted {}",
            summary.runs,
            summary.kill_rate(),
            zone.label()
        );
        self.sample = Some(summary);
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.current_tab = Tab::Help;
        }
    }

    fn ammo_changed(&mut self) {
        self.sample = None;
        self.status = format!("Ammo A: {}", self.ammo().name);
    }
}

fn step_forward(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

fn step_back(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}
