//! The per-frame simulation loop.
//!
//! Each iteration: poll at most one key, integrate it into the player pose,
//! compose every column into the frame buffer, present it only when it
//! differs from the last presented frame (if enabled), write the status
//! lines, then sleep off leftover frame time.

use std::time::Instant;

use anyhow::Result;

use crate::config::RaycastConfig;
use crate::core::{Control, GameMap, InputMapper, PlayerState};
use crate::input::KeySource;
use crate::pacer::{instantaneous_fps, FramePacer};
use crate::term::{Display, FrameBuffer, SceneView, Viewport};

/// Loop state machine: `Running -> Running -> ... -> Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// All mutable simulation state, owned by the loop thread.
#[derive(Debug, Clone)]
pub struct SimContext {
    pub map: GameMap,
    pub player: PlayerState,
    /// Frame being composed.
    pub frame: FrameBuffer,
    /// Last frame handed to the display. It is the only copy: the display
    /// receives it as the diff base instead of keeping its own.
    pub presented: Option<FrameBuffer>,
}

impl SimContext {
    pub fn new(map: GameMap, player: PlayerState, viewport: Viewport) -> Self {
        Self {
            map,
            player,
            frame: FrameBuffer::new(viewport.width, viewport.height),
            presented: None,
        }
    }

    /// Whether the composed frame matches the last presented one cell-for-cell.
    pub fn frame_unchanged(&self) -> bool {
        self.presented.as_ref() == Some(&self.frame)
    }
}

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub frames: u64,
    pub presents: u64,
    pub skipped: u64,
}

pub struct GameLoop {
    ctx: SimContext,
    scene: SceneView,
    mapper: InputMapper,
    viewport: Viewport,
    pacer: FramePacer,
    skip_unchanged: bool,
    state: LoopState,
    stats: LoopStats,
}

impl GameLoop {
    pub fn new(config: &RaycastConfig, map: GameMap) -> Self {
        let viewport = Viewport::new(config.screen_width, config.screen_height);
        let scene = SceneView::new(config.fov, config.ray_params(), config.star_seed)
            .with_overlays(config.overlays());
        Self {
            ctx: SimContext::new(map, config.start, viewport),
            scene,
            mapper: config.input_mapper(),
            viewport,
            pacer: FramePacer::new(config.target_fps),
            skip_unchanged: config.skip_unchanged,
            state: LoopState::Running,
            stats: LoopStats::default(),
        }
    }

    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    pub fn player(&self) -> PlayerState {
        self.ctx.player
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Run one iteration with `dt` seconds elapsed since the previous one.
    pub fn step<D: Display, K: KeySource>(
        &mut self,
        dt: f64,
        display: &mut D,
        keys: &mut K,
    ) -> Result<LoopState> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        let key = keys.poll_key();
        if self.mapper.apply_key(key, dt, &mut self.ctx.player, &self.ctx.map) == Control::Quit {
            tracing::info!(frames = self.stats.frames, "quit requested");
            self.state = LoopState::Terminated;
            return Ok(self.state);
        }

        self.scene.render_into(
            &self.ctx.player,
            &self.ctx.map,
            self.viewport,
            &mut self.ctx.frame,
        );
        self.stats.frames += 1;

        if self.skip_unchanged && self.ctx.frame_unchanged() {
            self.stats.skipped += 1;
            tracing::trace!(frame = self.stats.frames, "frame unchanged; redraw skipped");
        } else {
            display.present(&self.ctx.frame, self.ctx.presented.as_ref())?;
            self.stats.presents += 1;
            match self.ctx.presented.as_mut() {
                Some(prev) => prev.clone_from(&self.ctx.frame),
                None => self.ctx.presented = Some(self.ctx.frame.clone()),
            }
        }

        // Each status line gets its own absolute row so nothing ever scrolls.
        for (row, line) in (self.viewport.height..).zip(status_lines(dt, &self.ctx.player)) {
            display.set_cursor(row, 0)?;
            display.write_line(&line)?;
        }
        display.flush()?;

        Ok(self.state)
    }

    /// Drive frames on the monotonic clock until quit or error.
    pub fn run<D: Display, K: KeySource>(
        &mut self,
        display: &mut D,
        keys: &mut K,
    ) -> Result<LoopStats> {
        tracing::info!(
            width = self.viewport.width,
            height = self.viewport.height,
            target_fps = ?self.pacer.target_fps(),
            skip_unchanged = self.skip_unchanged,
            "game loop started"
        );

        let mut previous = Instant::now();
        loop {
            let frame_start = Instant::now();
            let dt = frame_start.duration_since(previous).as_secs_f64();
            previous = frame_start;

            if self.step(dt, display, keys)? == LoopState::Terminated {
                break;
            }

            if let Some(sleep) = self.pacer.sleep_time(frame_start.elapsed().as_secs_f64()) {
                std::thread::sleep(sleep);
            }
        }

        tracing::info!(
            frames = self.stats.frames,
            presents = self.stats.presents,
            skipped = self.stats.skipped,
            "game loop stopped"
        );
        Ok(self.stats)
    }
}

/// FPS line and pose line shown under the view.
pub fn status_lines(dt: f64, player: &PlayerState) -> [String; 2] {
    [
        format!("FPS: {:.1}", instantaneous_fps(dt)),
        format!(
            "X: {:.3}, Y: {:.3}, Angle: {:.3}",
            player.x, player.y, player.angle
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lines_report_fps_and_pose() {
        let [fps, pose] = status_lines(0.5, &PlayerState::new(8.0, 13.0, 0.0));
        assert_eq!(fps, "FPS: 2.0");
        assert_eq!(pose, "X: 8.000, Y: 13.000, Angle: 0.000");
    }

    #[test]
    fn context_detects_identical_frames() {
        let vp = Viewport::new(4, 4);
        let mut ctx = SimContext::new(GameMap::open_room(4, 4), PlayerState::default(), vp);
        assert!(!ctx.frame_unchanged());
        ctx.presented = Some(ctx.frame.clone());
        assert!(ctx.frame_unchanged());
    }
}
