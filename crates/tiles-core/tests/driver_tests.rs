// End-to-end tests for the per-tick frame driver.

use glam::Vec2;
use tiles_core::*;

const RED: Rgb = Rgb::new(255, 0, 0);
const GREEN: Rgb = Rgb::new(0, 255, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

/// Panels far enough apart that a source only lights its own panel.
fn far_apart_layout(n: u32) -> Layout {
    Layout::new(
        (0..n)
            .map(|i| Panel::new(i + 1, i as f32 * 10_000.0, 0.0))
            .collect(),
    )
    .unwrap()
}

fn strip_layout(n: u32) -> Layout {
    Layout::new(
        (0..n)
            .map(|i| Panel::new(100 + i, i as f32 * ADJACENT_PANEL_DISTANCE, 0.0))
            .collect(),
    )
    .unwrap()
}

fn run_warmup<R: PanelPicker>(
    driver: &mut FrameDriver<R>,
    spectrum: &Vec<u32>,
    frames: &mut [FrameRecord],
) {
    for _ in 0..driver.params().warmup_ticks {
        assert_eq!(driver.tick(spectrum, &NoTempo, frames), 0);
    }
}

fn colors(frames: &[FrameRecord]) -> Vec<Rgb> {
    frames.iter().map(|f| f.color).collect()
}

#[test]
fn first_fifty_ticks_produce_no_frames() {
    let layout = far_apart_layout(5);
    let palette = vec![RED, GREEN, BLUE];
    let mut spectrum = Vec::new();
    let mut driver =
        FrameDriver::with_seed(&layout, &palette, &mut spectrum, EngineParams::default(), 1)
            .unwrap();
    let mut frames = vec![FrameRecord::default(); 5];

    for tick in 0..WARMUP_TICKS {
        assert!(driver.is_warming_up());
        assert_eq!(driver.tick(&spectrum, &NoTempo, &mut frames), 0, "tick {tick}");
    }
    assert!(!driver.is_warming_up());
    assert_eq!(driver.tick(&spectrum, &NoTempo, &mut frames), 5);
    assert_eq!(driver.tick_count(), WARMUP_TICKS as u64 + 1);

    let ids: Vec<u32> = frames.iter().map(|f| f.panel_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    for f in &frames {
        assert_eq!(f.transition_time, TRANSITION_TIME);
        assert_eq!(f.color, Rgb::BLACK);
    }
}

#[test]
fn palette_is_truncated_to_panel_count_minus_two() {
    let layout = far_apart_layout(5);
    let palette: Vec<Rgb> = (0..10).map(|i| Rgb::new(i * 20, 0, 0)).collect();
    let mut spectrum = Vec::new();
    let driver =
        FrameDriver::with_seed(&layout, &palette, &mut spectrum, EngineParams::default(), 1)
            .unwrap();

    assert_eq!(driver.palette(), &palette[..3]);
    assert_eq!(driver.bands().len(), 3);
    assert_eq!(spectrum.len(), 3, "spectrum should be enabled for the usable bands");
    assert_eq!(driver.capacity(), 5);
}

#[test]
fn beat_spawns_source_on_picked_panel() {
    let layout = far_apart_layout(4);
    let palette = vec![RED, GREEN, BLUE];
    let mut spectrum = Vec::new();
    let mut driver = FrameDriver::init(
        &layout,
        &palette,
        &mut spectrum,
        EngineParams::default(),
        ScriptedPicker::new(vec![2]),
    )
    .unwrap();
    let mut frames = vec![FrameRecord::default(); 4];
    run_warmup(&mut driver, &spectrum, &mut frames);

    spectrum[0] = 100;
    assert_eq!(driver.tick(&spectrum, &NoTempo, &mut frames), 4);
    assert_eq!(colors(&frames), vec![Rgb::BLACK, Rgb::BLACK, RED, Rgb::BLACK]);
    assert_eq!(driver.beat_counts(), &[1, 0]);
    assert_eq!(driver.bands()[0].max_trigger(), 100);
    assert_eq!(driver.sources().count(), 1);
    assert_eq!(driver.sources().at(0).map(|s| s.position), Some(Vec2::new(20_000.0, 0.0)));
}

#[test]
fn source_is_visible_until_lifespan_ticks_after_spawn() {
    let layout = far_apart_layout(4);
    let palette = vec![RED, GREEN];
    let mut spectrum = Vec::new();
    let mut driver = FrameDriver::init(
        &layout,
        &palette,
        &mut spectrum,
        EngineParams::default(),
        ScriptedPicker::new(vec![1]),
    )
    .unwrap();
    let mut frames = vec![FrameRecord::default(); 4];
    run_warmup(&mut driver, &spectrum, &mut frames);

    // Spawn tick
    spectrum[0] = 100;
    driver.tick(&spectrum, &NoTempo, &mut frames);
    assert_eq!(frames[1].color, RED);
    assert_eq!(driver.sources().at(0).map(|s| s.age), Some(1));

    // Spawn tick + lifespan: still rendered, then removed in the age phase
    spectrum[0] = 0;
    driver.tick(&spectrum, &NoTempo, &mut frames);
    assert_eq!(frames[1].color, RED);
    assert!(driver.sources().is_empty());

    driver.tick(&spectrum, &NoTempo, &mut frames);
    assert_eq!(colors(&frames), vec![Rgb::BLACK; 4]);
}

#[test]
fn spawn_amount_is_bounded_by_pool_capacity() {
    let layout = far_apart_layout(3);
    let palette = vec![RED];
    let mut spectrum = Vec::new();
    let params = EngineParams {
        spawn_amount: 5,
        lifespan: 2,
        ..EngineParams::default()
    };
    let mut driver = FrameDriver::with_seed(&layout, &palette, &mut spectrum, params, 9).unwrap();
    assert_eq!(driver.capacity(), 6);
    let mut frames = vec![FrameRecord::default(); 3];
    run_warmup(&mut driver, &spectrum, &mut frames);

    for t in 0..200 {
        spectrum[0] = if t % 4 == 0 { 200 } else { 3 };
        driver.tick(&spectrum, &NoTempo, &mut frames);
        assert!(driver.sources().count() <= driver.capacity());
        assert!(driver.sources().iter().all(|s| s.age <= 2));
    }
    assert!(driver.beat_counts()[0] > 0);
}

#[test]
fn same_seed_and_input_give_identical_frames() {
    fn run(seed: u64) -> Vec<FrameRecord> {
        let layout = strip_layout(6);
        let palette = vec![RED, GREEN, BLUE, Rgb::WHITE];
        let mut spectrum = Vec::new();
        let mut driver =
            FrameDriver::with_seed(&layout, &palette, &mut spectrum, EngineParams::default(), seed)
                .unwrap();
        let mut frames = vec![FrameRecord::default(); 6];
        let mut all = Vec::new();
        for t in 0..300usize {
            for (b, p) in spectrum.iter_mut().enumerate() {
                *p = if (t + b * 3) % 8 == 0 { 150 } else { 5 };
            }
            let n = driver.tick(&spectrum, &NoTempo, &mut frames);
            all.extend_from_slice(&frames[..n]);
        }
        all
    }

    let a = run(42);
    assert_eq!(a, run(42));
    assert_eq!(a.len(), (300 - WARMUP_TICKS as usize) * 6);
    assert!(a.iter().any(|f| f.color != Rgb::BLACK), "expected some lit panels");
}

#[test]
fn tempo_weighting_tightens_the_glow() {
    let layout = Layout::new(vec![
        Panel::new(1, 0.0, 0.0),
        Panel::new(2, ADJACENT_PANEL_DISTANCE, 0.0),
        Panel::new(3, 20_000.0, 0.0),
        Panel::new(4, 30_000.0, 0.0),
    ])
    .unwrap();
    let palette = vec![RED, GREEN];

    let neighbour_red = |tempo_weighted: bool| {
        let mut spectrum = Vec::new();
        let params = EngineParams {
            tempo_weighted,
            ..EngineParams::default()
        };
        let mut driver =
            FrameDriver::init(&layout, &palette, &mut spectrum, params, ScriptedPicker::new(vec![0]))
                .unwrap();
        let mut frames = vec![FrameRecord::default(); 4];
        run_warmup(&mut driver, &spectrum, &mut frames);
        spectrum[0] = 100;
        driver.tick(&spectrum, &10.0f32, &mut frames);
        assert_eq!(frames[0].color, RED);
        frames[1].color.r
    };

    let plain = neighbour_red(false);
    let weighted = neighbour_red(true);
    assert!((101..=102).contains(&plain), "got {plain}");
    assert!(weighted < plain, "weighted {weighted} should be dimmer than {plain}");
}

#[test]
fn tiny_layouts_render_base_color_without_spawning() {
    let params = EngineParams {
        base_color: Rgb::new(1, 2, 3),
        warmup_ticks: 0,
        ..EngineParams::default()
    };

    let one = far_apart_layout(1);
    let mut spectrum = Vec::new();
    let mut driver =
        FrameDriver::with_seed(&one, &vec![RED], &mut spectrum, params.clone(), 3).unwrap();
    assert!(driver.bands().is_empty());
    let mut frames = vec![FrameRecord::default(); 1];
    assert_eq!(driver.tick(&spectrum, &NoTempo, &mut frames), 1);
    assert_eq!(frames[0].color, Rgb::new(1, 2, 3));
    assert!(driver.sources().is_empty());

    let empty = Layout::empty();
    let mut spectrum = Vec::new();
    let mut driver =
        FrameDriver::with_seed(&empty, &vec![RED], &mut spectrum, params, 3).unwrap();
    assert_eq!(driver.capacity(), 0);
    let mut frames: Vec<FrameRecord> = Vec::new();
    assert_eq!(driver.tick(&spectrum, &NoTempo, &mut frames), 0);
    driver.shutdown();
}

#[test]
fn short_frame_buffer_is_filled_without_overrun() {
    let layout = far_apart_layout(4);
    let mut spectrum = Vec::new();
    let params = EngineParams {
        warmup_ticks: 0,
        ..EngineParams::default()
    };
    let mut driver =
        FrameDriver::with_seed(&layout, &vec![RED, GREEN], &mut spectrum, params, 5).unwrap();
    let mut frames = vec![FrameRecord::default(); 2];
    assert_eq!(driver.tick(&spectrum, &NoTempo, &mut frames), 2);
    assert_eq!(frames[1].panel_id, 2);
}

#[test]
fn invalid_params_are_rejected_at_init() {
    let layout = far_apart_layout(4);
    let mut spectrum = Vec::new();
    let params = EngineParams {
        lifespan: 0,
        ..EngineParams::default()
    };
    let result = FrameDriver::with_seed(&layout, &vec![RED], &mut spectrum, params, 1);
    assert!(matches!(result, Err(ParamsError::ZeroLifespan)));
}
