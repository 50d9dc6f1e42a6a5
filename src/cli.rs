//! Command-line argument parsing.

use clap::Parser;
use tiles_core::{EngineParams, LIFESPAN, SPAWN_AMOUNT};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "dancing-tiles")]
#[command(about = "Beat-driven light sources on simulated light panels", long_about = None)]
pub struct Args {
    /// Number of panels in the generated layout
    #[arg(long, value_name = "COUNT", default_value_t = 12)]
    pub panels: usize,

    /// Palette preset (aurora, fire, ocean, mono) or a list like "#ff0000,#00ff00"
    #[arg(long, value_name = "PALETTE", default_value = "aurora")]
    pub palette: String,

    /// Ticks to run, warm-up included (0 runs until interrupted)
    #[arg(long, value_name = "COUNT", default_value_t = 400)]
    pub ticks: u64,

    /// Time between ticks
    #[arg(long, value_name = "MS", default_value_t = 50)]
    pub interval_ms: u64,

    /// Seed for the synthetic spectrum and panel picking
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Tempo of the synthetic spectrum, also reported to the engine
    #[arg(long, default_value_t = 120.0)]
    pub bpm: f32,

    /// Ticks a light source survives
    #[arg(long, value_name = "TICKS", default_value_t = LIFESPAN)]
    pub lifespan: u32,

    /// Light sources spawned per detected beat
    #[arg(long, value_name = "COUNT", default_value_t = SPAWN_AMOUNT)]
    pub spawn_amount: usize,

    /// Tighten the glow around sources as the tempo rises
    #[arg(long)]
    pub tempo_weighted: bool,

    /// Skip per-frame output and print only the summary
    #[arg(long)]
    pub quiet: bool,
}

impl Args {
    pub fn engine_params(&self) -> EngineParams {
        EngineParams {
            lifespan: self.lifespan,
            spawn_amount: self.spawn_amount,
            tempo_weighted: self.tempo_weighted,
            ..EngineParams::default()
        }
    }

    /// Seed for the synthetic spectrum, kept apart from the picker's seed.
    pub fn spectrum_seed(&self) -> u64 {
        self.seed ^ 0x9E37_79B9_7F4A_7C15
    }
}
