use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::Path;
use trails_core::RawContact;

/// One recorded contact. Coordinates may be `null` in captured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptTouch {
    pub id: u64,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl From<&ScriptTouch> for RawContact {
    fn from(t: &ScriptTouch) -> Self {
        RawContact {
            id: t.id,
            x: t.x,
            y: t.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptFrame {
    pub t_ms: u64,
    #[serde(default)]
    pub touches: Vec<ScriptTouch>,
    /// Reset gesture fired before this frame is observed.
    #[serde(default)]
    pub reset: bool,
}

impl ScriptFrame {
    pub fn contacts(&self) -> Vec<RawContact> {
        self.touches.iter().map(RawContact::from).collect()
    }
}

pub fn parse(json: &str) -> anyhow::Result<Vec<ScriptFrame>> {
    let frames: Vec<ScriptFrame> = serde_json::from_str(json).context("parsing replay script")?;
    check_monotonic(&frames)?;
    Ok(frames)
}

pub fn load(path: &Path) -> anyhow::Result<Vec<ScriptFrame>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading replay script {}", path.display()))?;
    parse(&text).with_context(|| format!("in {}", path.display()))
}

fn check_monotonic(frames: &[ScriptFrame]) -> anyhow::Result<()> {
    for (i, pair) in frames.windows(2).enumerate() {
        if pair[1].t_ms < pair[0].t_ms {
            bail!(
                "frame {} goes back in time ({} ms after {} ms)",
                i + 1,
                pair[1].t_ms,
                pair[0].t_ms
            );
        }
    }
    Ok(())
}
