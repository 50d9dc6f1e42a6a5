use crate::color::Rgb;

// Default tuning constants. `EngineParams::default()` is built from these.

// Background
pub const BASE_COLOR: Rgb = Rgb::BLACK; // color a panel shows with no sources nearby

// Panel geometry
pub const ADJACENT_PANEL_DISTANCE: f32 = 86.599_995; // centroid spacing of two touching panels
pub const TRANSITION_TIME: u16 = 1; // fade hint sent with every frame record, in 100 ms units

// Source spawning
pub const MIN_INTENSITY: f32 = 0.2; // dimmest a freshly spawned source can be
pub const TRIGGER_THRESHOLD: f32 = 0.7; // fraction of the running max a sample must clear
pub const SPAWN_AMOUNT: usize = 1; // sources spawned per detected beat
pub const LIFESPAN: u32 = 1; // ticks a source survives after the one it was spawned in

// Light diffusion
pub const TEMPO_WEIGHTED: bool = false; // fold the tempo into the falloff multiplier
pub const MIN_MULTIPLIER: f32 = 1.5; // falloff multiplier, and the floor when tempo weighted

// Driver
pub const WARMUP_TICKS: u32 = 50; // ticks skipped while upstream pipelines settle

// Band tracker seed values
pub const INITIAL_RUNNING_MAX: u32 = 50; // lets the detector fire sensibly from the first tick
pub const INITIAL_MAX_TRIGGER: u32 = 1;
pub const RUNNING_MAX_TRAIL: u32 = 4; // approximate number of peaks the running max remembers
