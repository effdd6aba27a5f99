use chrono::Timelike;
use macroquad::prelude::*;
use tracing::info;

pub const DRY_BELOW: f32 = 30.0;
pub const WET_ABOVE: f32 = 70.0;

pub const DROPLET_X: f32 = 500.0;
pub const PIPE_OUTLET_Y: f32 = 210.0;
pub const POT_RIM_Y: f32 = 350.0;
pub const STEPS_PER_DROPLET: u32 = 18;

// ~55 ms per step, the old BIOS timer tick rate
const STEP_SECS: f32 = 0.055;
const SETTLE_SECS: f32 = 1.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SoilCondition {
    Dry,
    Normal,
    OverMoist,
}

impl SoilCondition {
    pub fn classify(moisture: f32) -> Self {
        if moisture < DRY_BELOW {
            SoilCondition::Dry
        } else if moisture > WET_ABOVE {
            SoilCondition::OverMoist
        } else {
            SoilCondition::Normal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SoilCondition::Dry => "Dry Soil",
            SoilCondition::Normal => "Normal",
            SoilCondition::OverMoist => "Over Moist",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DayPhase {
    Day,
    Night,
}

impl DayPhase {
    pub fn from_hour(hour: u32) -> Self {
        if hour >= 19 || hour < 6 {
            DayPhase::Night
        } else {
            DayPhase::Day
        }
    }

    pub fn current() -> Self {
        Self::from_hour(chrono::Local::now().hour())
    }

    // fewer drops at night
    pub fn droplet_count(self) -> u32 {
        match self {
            DayPhase::Day => 10,
            DayPhase::Night => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayPhase::Day => "Mode: Day",
            DayPhase::Night => "Mode: Night",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Phase {
    Settle { remaining: f32 },
    Flowing { droplet: u32, step: u32, tick: f32 },
    Finished,
}

pub struct Scene {
    pub moisture: f32,
    pub condition: SoilCondition,
    pub day_phase: DayPhase,
    pub total_droplets: u32,
    pub phase: Phase,
}

impl Scene {
    pub fn new(moisture: f32, day_phase: DayPhase) -> Self {
        Self {
            moisture,
            condition: SoilCondition::classify(moisture),
            day_phase,
            total_droplets: day_phase.droplet_count(),
            phase: Phase::Settle {
                remaining: SETTLE_SECS,
            },
        }
    }

    pub fn step(&mut self, dt: f32) {
        self.phase = match self.phase {
            Phase::Settle { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    Phase::Settle { remaining }
                } else if self.condition == SoilCondition::Normal {
                    info!("soil moisture normal, no action needed");
                    Phase::Finished
                } else {
                    info!(condition = ?self.condition, droplets = self.total_droplets, "flow started");
                    Phase::Flowing {
                        droplet: 0,
                        step: 0,
                        tick: 0.0,
                    }
                }
            }
            Phase::Flowing {
                mut droplet,
                mut step,
                mut tick,
            } => {
                tick += dt;
                let mut exhausted = false;
                while tick >= STEP_SECS && !exhausted {
                    tick -= STEP_SECS;
                    if step < STEPS_PER_DROPLET {
                        step += 1;
                    } else {
                        step = 0;
                        droplet += 1;
                        exhausted = droplet >= self.total_droplets;
                    }
                }
                if exhausted {
                    info!(condition = ?self.condition, "flow complete");
                    Phase::Finished
                } else {
                    Phase::Flowing { droplet, step, tick }
                }
            }
            Phase::Finished => Phase::Finished,
        };
    }

    pub fn finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    // pipe stays filled once a run starts, completion screen included
    pub fn flow_active(&self) -> bool {
        self.condition != SoilCondition::Normal && !matches!(self.phase, Phase::Settle { .. })
    }

    pub fn droplet(&self) -> Option<Vec2> {
        let Phase::Flowing { step, .. } = self.phase else {
            return None;
        };
        let t = step as f32 / STEPS_PER_DROPLET as f32;
        let y = match self.condition {
            // watering falls from the pipe into the pot
            SoilCondition::Dry => PIPE_OUTLET_Y + (POT_RIM_Y - PIPE_OUTLET_Y) * t,
            // draining runs backwards, pot up to the pipe
            SoilCondition::OverMoist => POT_RIM_Y - (POT_RIM_Y - PIPE_OUTLET_Y) * t,
            SoilCondition::Normal => return None,
        };
        Some(vec2(DROPLET_X, y))
    }

    pub fn droplet_progress(&self) -> Option<(u32, u32)> {
        match self.phase {
            Phase::Flowing { droplet, .. } => Some((droplet + 1, self.total_droplets)),
            _ => None,
        }
    }

    pub fn action_text(&self) -> Option<&'static str> {
        if matches!(self.phase, Phase::Settle { .. }) {
            return None;
        }
        Some(match self.condition {
            SoilCondition::Dry => "Soil Dry! Watering Plant...",
            SoilCondition::OverMoist => "Soil Over Moist - Draining...",
            SoilCondition::Normal => "Soil Moisture Normal - No Action Needed.",
        })
    }

    pub fn completion_text(&self) -> Option<&'static str> {
        if !self.finished() {
            return None;
        }
        match self.condition {
            SoilCondition::Dry => Some("Watering Complete!"),
            SoilCondition::OverMoist => Some("Drainage Complete!"),
            SoilCondition::Normal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(moisture: f32) -> Scene {
        let mut scene = Scene::new(moisture, DayPhase::Day);
        scene.step(SETTLE_SECS);
        scene
    }

    #[test]
    fn classify_is_exact_at_thresholds() {
        assert_eq!(SoilCondition::classify(29.9), SoilCondition::Dry);
        assert_eq!(SoilCondition::classify(30.0), SoilCondition::Normal);
        assert_eq!(SoilCondition::classify(70.0), SoilCondition::Normal);
        assert_eq!(SoilCondition::classify(70.1), SoilCondition::OverMoist);
        // face value, no clamping
        assert_eq!(SoilCondition::classify(-5.0), SoilCondition::Dry);
        assert_eq!(SoilCondition::classify(130.0), SoilCondition::OverMoist);
    }

    #[test]
    fn night_runs_from_seven_pm_to_six_am() {
        assert_eq!(DayPhase::from_hour(5), DayPhase::Night);
        assert_eq!(DayPhase::from_hour(6), DayPhase::Day);
        assert_eq!(DayPhase::from_hour(18), DayPhase::Day);
        assert_eq!(DayPhase::from_hour(19), DayPhase::Night);
        assert_eq!(DayPhase::from_hour(23), DayPhase::Night);
        assert_eq!(DayPhase::from_hour(0), DayPhase::Night);

        assert_eq!(DayPhase::Day.droplet_count(), 10);
        assert_eq!(DayPhase::Night.droplet_count(), 5);
    }

    #[test]
    fn settle_holds_pipe_empty() {
        let mut scene = Scene::new(10.0, DayPhase::Day);
        assert!(!scene.flow_active());
        assert!(scene.droplet().is_none());
        assert!(scene.action_text().is_none());

        scene.step(SETTLE_SECS * 0.5);
        assert!(matches!(scene.phase, Phase::Settle { .. }));
        assert!(!scene.flow_active());
    }

    #[test]
    fn normal_soil_never_animates() {
        let mut scene = settled(50.0);
        assert!(scene.finished());
        assert!(!scene.flow_active());
        assert!(scene.droplet().is_none());
        assert_eq!(
            scene.action_text(),
            Some("Soil Moisture Normal - No Action Needed.")
        );
        assert_eq!(scene.completion_text(), None);

        // stepping a finished scene changes nothing
        scene.step(10.0);
        assert!(scene.finished());
        assert!(scene.droplet().is_none());
    }

    #[test]
    fn watering_falls_from_pipe_to_pot() {
        let mut scene = settled(10.0);
        assert!(scene.flow_active());
        assert_eq!(scene.action_text(), Some("Soil Dry! Watering Plant..."));

        let start = scene.droplet().unwrap();
        assert_eq!(start.x, DROPLET_X);
        assert_eq!(start.y, PIPE_OUTLET_Y);

        let mut prev = start.y;
        for _ in 0..STEPS_PER_DROPLET {
            scene.step(STEP_SECS);
            let y = scene.droplet().unwrap().y;
            assert!(y > prev);
            prev = y;
        }
        assert_eq!(prev, POT_RIM_Y);
    }

    #[test]
    fn draining_rises_from_pot_to_pipe() {
        let mut scene = settled(90.0);
        assert!(scene.flow_active());
        assert_eq!(scene.action_text(), Some("Soil Over Moist - Draining..."));

        let start = scene.droplet().unwrap();
        assert_eq!(start.y, POT_RIM_Y);

        let mut prev = start.y;
        for _ in 0..STEPS_PER_DROPLET {
            scene.step(STEP_SECS);
            let y = scene.droplet().unwrap().y;
            assert!(y < prev);
            prev = y;
        }
        assert_eq!(prev, PIPE_OUTLET_Y);
    }

    #[test]
    fn run_length_is_droplets_times_steps() {
        let mut scene = settled(10.0);

        // 19 ticks per droplet: steps 0..=18, then the rollover tick
        let ticks = scene.total_droplets * (STEPS_PER_DROPLET + 1);
        for i in 0..ticks {
            assert!(!scene.finished(), "finished early at tick {i}");
            scene.step(STEP_SECS);
        }
        assert!(scene.finished());
        assert!(scene.flow_active());
        assert_eq!(scene.completion_text(), Some("Watering Complete!"));
    }

    #[test]
    fn droplet_progress_counts_up() {
        let mut scene = settled(10.0);
        assert_eq!(scene.droplet_progress(), Some((1, 10)));

        for _ in 0..(STEPS_PER_DROPLET + 1) {
            scene.step(STEP_SECS);
        }
        assert_eq!(scene.droplet_progress(), Some((2, 10)));
    }

    #[test]
    fn night_mode_shortens_the_run() {
        let mut scene = Scene::new(90.0, DayPhase::Night);
        scene.step(SETTLE_SECS);
        assert_eq!(scene.total_droplets, 5);

        for _ in 0..(5 * (STEPS_PER_DROPLET + 1)) {
            scene.step(STEP_SECS);
        }
        assert!(scene.finished());
        assert_eq!(scene.completion_text(), Some("Drainage Complete!"));
    }
}
