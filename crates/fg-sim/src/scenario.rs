//! Scenario files: one config describing a whole run, and the factory that
//! turns it into a ready simulation.
//!
//! With the `serde` feature every section deserializes with defaults, so a
//! scenario file only needs the keys it changes:
//!
//! ```toml
//! model = "grid"
//!
//! [run]
//! seed = 7
//!
//! [foragers]
//! count  = 35
//! social = true
//!
//! [food]
//! mode       = "multi_spot"
//! spots      = 4
//! total_food = 12250
//! ```

use fg_agent::{ForagerProfile, ForagerStore, ForagerStoreBuilder, Sensing, Variant, Weights};
use fg_behavior::{BlendedHeading, ForagingBehavior, SwarmParams};
use fg_core::{Cell, FgError, FgResult, Point, SimConfig, SimRng};
use fg_food::{FoodLayout, SpotCount};
use fg_spatial::{Grid, Neighborhood, Torus};
use tracing::info;

use crate::{GridSimBuilder, SimResult, Simulation, SwarmSimBuilder};

/// RNG stream offsets split off the master seed for setup.
const FOOD_STREAM: u64 = 1;
const PLACEMENT_STREAM: u64 = 2;

/// Which world the foragers live in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModelKind {
    /// Discrete toroidal grid with food.
    #[default]
    Grid,
    /// Continuous torus with signal trails, no food.
    Continuous,
}

impl ModelKind {
    /// Sensing defaults appropriate to the model.
    pub fn default_sensing(self) -> Sensing {
        match self {
            ModelKind::Grid       => Sensing::default(),
            ModelKind::Continuous => Sensing { sensing_range: 20.0, align_dist: 10.0, ..Sensing::default() },
        }
    }
}

/// World dimensions.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpaceConfig {
    /// Side of the square grid, in cells.
    pub grid_size:   i32,
    /// Side of the continuous torus.
    pub domain_size: f64,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self { grid_size: 35, domain_size: 500.0 }
    }
}

/// The population: how many, which variant, where they start.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ForagerConfig {
    pub count:           usize,
    pub social:          bool,
    pub strain_specific: bool,
    /// Start packed around one spot instead of spread over the world.
    pub clustered:       bool,
    pub weights:         Weights,
    /// Overrides [`ModelKind::default_sensing`].
    pub sensing:         Option<Sensing>,
}

impl Default for ForagerConfig {
    fn default() -> Self {
        Self {
            count:           35,
            social:          false,
            strain_specific: false,
            clustered:       false,
            weights:         Weights::default(),
            sensing:         None,
        }
    }
}

impl ForagerConfig {
    pub fn variant(&self) -> Variant {
        Variant::from_flags(self.social, self.strain_specific)
    }

    /// The profile every forager of the population shares.
    pub fn profile(&self, model: ModelKind) -> FgResult<ForagerProfile> {
        let sensing = self.sensing.unwrap_or_else(|| model.default_sensing());
        ForagerProfile::new(self.variant(), self.weights, sensing)
    }
}

/// A complete run description.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScenarioConfig {
    pub run:      SimConfig,
    pub model:    ModelKind,
    pub space:    SpaceConfig,
    pub foragers: ForagerConfig,
    /// Grid model only.
    pub food:     FoodLayout,
    /// Continuous model only.
    pub swarm:    SwarmParams,
}

impl ScenarioConfig {
    /// Check every section relevant to `model`.
    pub fn validate(&self) -> FgResult<()> {
        self.run.validate()?;
        self.foragers.profile(self.model)?;
        match self.model {
            ModelKind::Grid => {
                if self.space.grid_size <= 0 {
                    return Err(FgError::config(
                        "space.grid_size",
                        format!("must be > 0, got {}", self.space.grid_size),
                    ));
                }
                let cells = (self.space.grid_size as usize).pow(2);
                if self.foragers.count > cells {
                    return Err(FgError::config(
                        "foragers.count",
                        format!("{} foragers do not fit on {cells} cells", self.foragers.count),
                    ));
                }
                self.food.validate()
            }
            ModelKind::Continuous => {
                if !(self.space.domain_size.is_finite() && self.space.domain_size > 0.0) {
                    return Err(FgError::config(
                        "space.domain_size",
                        format!("must be a finite value > 0, got {}", self.space.domain_size),
                    ));
                }
                if self.foragers.variant() != Variant::Solitary {
                    return Err(FgError::config(
                        "foragers.variant",
                        format!("{} foragers are not supported in the continuous domain", self.foragers.variant()),
                    ));
                }
                self.swarm.validate()
            }
        }
    }
}

/// Build the simulation `config` describes, with its standard behavior.
pub fn build_simulation(config: &ScenarioConfig) -> SimResult<Box<dyn Simulation>> {
    config.validate()?;
    let profile = config.foragers.profile(config.model)?;
    let mut setup = SimRng::new(config.run.seed);
    info!(model = ?config.model, variant = %profile.variant, foragers = config.foragers.count, "building scenario");

    match config.model {
        ModelKind::Grid => {
            let grid = Grid::square(config.space.grid_size)?;
            let food = fg_food::generate(&config.food, grid, &mut setup.child(FOOD_STREAM))?;
            let foragers = grid_foragers(&grid, config, profile, &mut setup.child(PLACEMENT_STREAM))?;
            let sim = GridSimBuilder::new(config.run.clone(), food, foragers, ForagingBehavior).build()?;
            Ok(Box::new(sim))
        }
        ModelKind::Continuous => {
            let torus = Torus::new(config.space.domain_size)?;
            let foragers = swarm_foragers(&torus, config, profile, &mut setup.child(PLACEMENT_STREAM))?;
            let sim = SwarmSimBuilder::new(config.run.clone(), torus, foragers, BlendedHeading)
                .params(config.swarm)
                .build()?;
            Ok(Box::new(sim))
        }
    }
}

// ── Placement ─────────────────────────────────────────────────────────────────

/// Where a clustered population is centred.
///
/// Multi-spot layouts with one or two spots start the population in a
/// corner away from the food; four spots start it in the middle, between
/// the spots.  Otherwise the centre is random.
pub fn cluster_centre(grid: &Grid, food: &FoodLayout, radius: i32, rng: &mut SimRng) -> Cell {
    let n = grid.width().min(grid.height());
    match food.spots() {
        Some(SpotCount::One | SpotCount::Two) => Cell::new(n - radius - 1, radius),
        Some(SpotCount::Four) => Cell::new(grid.width() / 2, grid.height() / 2),
        None => grid.random_cell(rng),
    }
}

/// One forager per distinct cell, each facing a random heading.
fn grid_foragers(
    grid:    &Grid,
    config:  &ScenarioConfig,
    profile: ForagerProfile,
    rng:     &mut SimRng,
) -> SimResult<ForagerStore<Cell>> {
    let count = config.foragers.count;
    let pool: Vec<Cell> = if config.foragers.clustered {
        let radius = ((count as f64).sqrt() / 2.0).ceil() as i32;
        let centre = cluster_centre(grid, &config.food, radius, rng);
        grid.neighborhood(centre, Neighborhood::Moore, true, radius)?
    } else {
        grid.cells().collect()
    };

    let mut builder = ForagerStoreBuilder::new(profile).with_capacity(count);
    for cell in rng.sample(&pool, count) {
        let heading = rng.heading();
        builder = builder.forager(cell, heading);
    }
    Ok(builder.build()?)
}

/// Uniform positions and headings over the torus.
fn swarm_foragers(
    torus:   &Torus,
    config:  &ScenarioConfig,
    profile: ForagerProfile,
    rng:     &mut SimRng,
) -> SimResult<ForagerStore<Point>> {
    let mut builder = ForagerStoreBuilder::new(profile).with_capacity(config.foragers.count);
    for _ in 0..config.foragers.count {
        let position = torus.random_point(rng);
        let heading = rng.heading();
        builder = builder.forager(position, heading);
    }
    Ok(builder.build()?)
}
