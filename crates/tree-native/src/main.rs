use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use glam::Vec2;
use tree_core::{
    synthetic_hand, Category, ChoreographyParams, Detection, DetectionMailbox, Gesture,
    GestureReading, HandTracker, TreeScene,
};

const DETECTION_HZ: f64 = 30.0;
const FRAME_HZ: f64 = 60.0;
const DEFAULT_SECONDS: f32 = 16.0;
const DEFAULT_PHOTOS: usize = 3;

/// One leg of the scripted hand performance.
struct Segment {
    seconds: f64,
    hand: Option<[bool; 5]>,
    circle: bool,
}

// thumb, index, middle, ring, pinky
const SCRIPT: &[Segment] = &[
    Segment {
        seconds: 2.0,
        hand: None,
        circle: false,
    },
    Segment {
        seconds: 2.0,
        hand: Some([false, false, false, false, false]),
        circle: false,
    },
    Segment {
        seconds: 3.0,
        hand: Some([true, true, true, true, true]),
        circle: true,
    },
    Segment {
        seconds: 3.0,
        hand: Some([false, true, false, false, false]),
        circle: false,
    },
    Segment {
        seconds: 2.0,
        hand: Some([false, true, true, false, false]),
        circle: true,
    },
    Segment {
        seconds: 2.0,
        hand: Some([false, false, false, false, false]),
        circle: false,
    },
];

fn script_hand(t: f64) -> Option<tree_core::LandmarkSet> {
    let total: f64 = SCRIPT.iter().map(|s| s.seconds).sum();
    let mut local = t % total;
    for seg in SCRIPT {
        if local < seg.seconds {
            let fingers = seg.hand?;
            let palm = if seg.circle {
                let a = (local * 1.5) as f32;
                Vec2::new(0.5 + 0.2 * a.cos(), 0.5 + 0.2 * a.sin())
            } else {
                Vec2::splat(0.5)
            };
            return Some(synthetic_hand(fingers, palm));
        }
        local -= seg.seconds;
    }
    None
}

/// Stand-in for a camera + landmark model running at its own cadence.
fn spawn_synthetic_source(
    mailbox: DetectionMailbox,
    stop: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let period = Duration::from_secs_f64(1.0 / DETECTION_HZ);
        let mut frame = 0u64;
        while !stop.load(Ordering::Relaxed) {
            let timestamp = frame as f64 / DETECTION_HZ;
            mailbox.post(Detection {
                timestamp,
                hand: script_hand(timestamp),
            });
            frame += 1;
            thread::sleep(period);
        }
    })
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(v) => v.parse::<T>().with_context(|| format!("invalid {key}={v}")),
        Err(_) => Ok(default),
    }
}

fn mean_offset(scene: &TreeScene, exploded: bool) -> f32 {
    let field = scene.field();
    let mut sum = 0.0f32;
    let mut n = 0usize;
    for cat in &field.categories {
        let targets = if exploded { &cat.exploded } else { &cat.assembled };
        let current = scene.choreographer().current_positions(cat.category);
        for (c, t) in current.iter().zip(targets.iter()) {
            sum += c.distance(*t);
            n += 1;
        }
    }
    sum / n.max(1) as f32
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seconds: f32 = env_or("TREE_SECONDS", DEFAULT_SECONDS)?;
    let seed: Option<u64> = match std::env::var("TREE_SEED") {
        Ok(v) => Some(v.parse().with_context(|| format!("invalid TREE_SEED={v}"))?),
        Err(_) => None,
    };

    let mut scene = match seed {
        Some(s) => TreeScene::new(s, ChoreographyParams::default()),
        None => TreeScene::from_entropy(),
    };
    for i in 0..DEFAULT_PHOTOS {
        scene.add_photo(format!("photo-{i}.jpg"));
    }
    log::info!(
        "[native] particles={} photos={} seconds={:.1} seed={:?}",
        scene.field().total(),
        scene.photos().len(),
        seconds,
        seed
    );

    let latest = Rc::new(Cell::new(GestureReading::default()));
    let latest_obs = latest.clone();
    let mut tracker = HandTracker::new(move |reading| latest_obs.set(reading));

    let mailbox = DetectionMailbox::new();
    let stop = Arc::new(AtomicBool::new(false));
    let source = spawn_synthetic_source(mailbox.clone(), stop.clone());

    let frame_period = Duration::from_secs_f64(1.0 / FRAME_HZ);
    let start = Instant::now();
    let mut last = start;
    let mut last_report = 0u32;
    let mut instances = Vec::new();
    let mut frames = 0u64;

    while start.elapsed().as_secs_f32() < seconds {
        let now = Instant::now();
        let dt = (now - last).as_secs_f32();
        last = now;

        tracker.poll(&mailbox);
        let reading = latest.get();
        scene.step(reading, dt);

        instances.clear();
        for cat in Category::ALL {
            scene.write_instances(cat, &mut instances);
        }
        frames += 1;

        let whole = scene.elapsed() as u32;
        if whole > last_report {
            last_report = whole;
            let g = scene.group();
            log::info!(
                "[native] t={:>2}s gesture={:<9} focus={:?} pitch={:+.2} yaw={:+.2} to_tree={:.2} to_burst={:.2} instances={}",
                whole,
                reading.gesture.label(),
                scene.focused(),
                g.pitch,
                g.yaw,
                mean_offset(&scene, false),
                mean_offset(&scene, true),
                instances.len()
            );
            if reading.gesture == Gesture::Pointing {
                if let Some(p) = scene.focused().and_then(|i| scene.photos().get(i)) {
                    let world = scene.group_matrix().transform_point3(p.pose.position);
                    log::info!(
                        "[native] focused '{}' world=({:.2},{:.2},{:.2}) scale={:.2}",
                        p.source,
                        world.x,
                        world.y,
                        world.z,
                        p.pose.scale
                    );
                }
            }
        }

        let spent = now.elapsed();
        if spent < frame_period {
            thread::sleep(frame_period - spent);
        }
    }

    stop.store(true, Ordering::Relaxed);
    source
        .join()
        .map_err(|_| anyhow::anyhow!("synthetic landmark source panicked"))?;
    log::info!("[native] done: {} frames", frames);
    Ok(())
}
