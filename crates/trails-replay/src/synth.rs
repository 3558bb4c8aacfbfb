//! Seeded random touch input: fingers land, wander and lift.

use crate::script::{ScriptFrame, ScriptTouch};
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct SynthParams {
    pub seed: u64,
    pub frames: usize,
    pub fingers: usize,
    pub frame_ms: u64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug)]
struct Finger {
    id: u64,
    x: f64,
    y: f64,
    down: bool,
}

// Per-frame odds of a finger landing or lifting
const LAND_PROB: f64 = 0.08;
const LIFT_PROB: f64 = 0.03;
const STEP_PX: f64 = 12.0;

pub fn generate(p: &SynthParams) -> Vec<ScriptFrame> {
    let mut rng = StdRng::seed_from_u64(p.seed);
    let mut next_id = 0u64;
    let mut fingers: Vec<Finger> = (0..p.fingers)
        .map(|_| Finger {
            id: 0,
            x: 0.0,
            y: 0.0,
            down: false,
        })
        .collect();

    let mut out = Vec::with_capacity(p.frames);
    for frame in 0..p.frames {
        for f in fingers.iter_mut() {
            if f.down {
                if rng.gen::<f64>() < LIFT_PROB {
                    f.down = false;
                    continue;
                }
                f.x = (f.x + rng.gen_range(-STEP_PX..=STEP_PX)).clamp(0.0, p.width);
                f.y = (f.y + rng.gen_range(-STEP_PX..=STEP_PX)).clamp(0.0, p.height);
            } else if rng.gen::<f64>() < LAND_PROB {
                // Hosts hand out a fresh id for every new contact.
                f.id = next_id;
                next_id += 1;
                f.x = rng.gen_range(0.0..p.width);
                f.y = rng.gen_range(0.0..p.height);
                f.down = true;
            }
        }
        let touches = fingers
            .iter()
            .filter(|f| f.down)
            .map(|f| ScriptTouch {
                id: f.id,
                x: Some(f.x),
                y: Some(f.y),
            })
            .collect();
        out.push(ScriptFrame {
            t_ms: frame as u64 * p.frame_ms,
            touches,
            reset: false,
        });
    }
    out
}
