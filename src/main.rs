use anyhow::Context;
use clap::Parser;
use std::io;
use std::thread;
use std::time::{Duration, Instant};

use dancing_tiles::cli::Args;
use dancing_tiles::sink::{FrameStats, TerminalSink};
use dancing_tiles::spectrum::SyntheticSpectrum;
use dancing_tiles::tempo::FixedTempo;
use dancing_tiles::{layout_gen, palette};
use tiles_core::{FrameDriver, FrameRecord, ADJACENT_PANEL_DISTANCE};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let layout = layout_gen::lattice(args.panels, ADJACENT_PANEL_DISTANCE)
        .context("building panel layout")?;
    let colors = palette::resolve(&args.palette)?;
    let tempo = FixedTempo::from_bpm(args.bpm);
    let mut spectrum = SyntheticSpectrum::new(
        args.bpm,
        args.interval_ms as f32 / 1000.0,
        args.spectrum_seed(),
    );

    let mut driver = FrameDriver::with_seed(
        &layout,
        &colors,
        &mut spectrum,
        args.engine_params(),
        args.seed,
    )
    .context("initialising engine")?;

    let mut frames = vec![FrameRecord::default(); layout.len()];
    let mut sink = TerminalSink::new(io::stdout().lock());
    let mut stats = FrameStats::default();
    let interval = Duration::from_millis(args.interval_ms);
    log::info!("[host] running {} ticks every {:?}", args.ticks, interval);

    let mut tick = 0u64;
    while args.ticks == 0 || tick < args.ticks {
        let started = Instant::now();
        spectrum.advance();
        let written = driver.tick(&spectrum, &tempo, &mut frames);
        stats.record(&frames[..written]);
        if written > 0 && !args.quiet {
            sink.write_frame(&frames[..written])
                .context("writing frame to terminal")?;
        }
        tick += 1;
        if let Some(rest) = interval.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }

    driver.shutdown();
    log::info!(
        "[stats] frames: {} records: {} lit: {:.1}% mean brightness: {:.3}",
        stats.frames,
        stats.records,
        stats.lit_ratio() * 100.0,
        stats.mean_brightness()
    );
    Ok(())
}
