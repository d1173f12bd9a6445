//! SceneView: composes the first-person view into a terminal framebuffer.
//!
//! This module is pure (no I/O). Layers are written in a fixed order so the
//! last write wins: sky/wall/floor base scene, then the minimap, then the
//! player marker.

use crate::core::{
    floor_band, floor_position, heading_for, project_column, wall_band, ColumnProjection,
    GameMap, PlayerState, RayParams,
};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::starfield::Starfield;
use crate::types::{Bg, CellKind, Fg, FloorBand, WallBand, FIELD_OF_VIEW};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Which overlays are drawn on top of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlays {
    pub minimap: bool,
    pub marker: bool,
}

impl Default for Overlays {
    fn default() -> Self {
        Self {
            minimap: true,
            marker: true,
        }
    }
}

const WALL_STYLE: CellStyle = CellStyle::new(Fg::Red, Bg::Black);
const MAP_WALL_STYLE: CellStyle = CellStyle::new(Fg::White, Bg::Black);
const MAP_OPEN_STYLE: CellStyle = CellStyle::new(Fg::DarkGray, Bg::Black);
const MARKER_STYLE: CellStyle = CellStyle::new(Fg::Black, Bg::White);

pub fn wall_cell(band: WallBand) -> Cell {
    WALL_STYLE.into_cell(band.glyph())
}

pub fn floor_cell(band: FloorBand) -> Cell {
    let style = match band {
        FloorBand::Near => CellStyle::new(Fg::Default, Bg::Black),
        FloorBand::VeryNear | FloorBand::Mid | FloorBand::Far => {
            CellStyle::new(Fg::Black, Bg::DarkGray)
        }
    };
    style.into_cell(band.glyph())
}

/// The frame compositor.
pub struct SceneView {
    fov: f64,
    params: RayParams,
    overlays: Overlays,
    sky: Starfield,
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new(FIELD_OF_VIEW, RayParams::default(), 1)
    }
}

impl SceneView {
    pub fn new(fov: f64, params: RayParams, sky_seed: u32) -> Self {
        Self {
            fov,
            params,
            overlays: Overlays::default(),
            sky: Starfield::new(0, 0, sky_seed),
        }
    }

    pub fn with_overlays(mut self, overlays: Overlays) -> Self {
        self.overlays = overlays;
        self
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn params(&self) -> RayParams {
        self.params
    }

    /// Render the full frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(
        &mut self,
        player: &PlayerState,
        map: &GameMap,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        self.sky.fit(viewport.width, viewport.height);

        for x in 0..viewport.width {
            self.compose_column(x, viewport, player, map, fb);
        }

        if self.overlays.minimap {
            self.draw_minimap(fb, map);
        }
        if self.overlays.marker {
            self.draw_marker(fb, player);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &mut self,
        player: &PlayerState,
        map: &GameMap,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(player, map, viewport, &mut fb);
        fb
    }

    /// Cast the ray for column `x` and write every row of that column.
    pub fn compose_column(
        &self,
        x: u16,
        viewport: Viewport,
        player: &PlayerState,
        map: &GameMap,
        fb: &mut FrameBuffer,
    ) -> ColumnProjection {
        let camera = player.camera(self.fov);
        let proj = project_column(x, viewport.width, viewport.height, &camera, map, self.params);
        for y in 0..viewport.height {
            fb.set(x, y, self.column_cell(x, y, viewport.height, &proj));
        }
        proj
    }

    /// Base-scene cell for row `y` of a projected column.
    pub fn column_cell(
        &self,
        x: u16,
        y: u16,
        screen_height: u16,
        proj: &ColumnProjection,
    ) -> Cell {
        let row = f64::from(y);
        if row < proj.ceiling {
            self.sky.cell(x, y)
        } else if proj.is_wall_row(row) {
            wall_cell(wall_band(proj.ray.distance, self.params.max_depth))
        } else {
            floor_cell(floor_band(floor_position(row, f64::from(screen_height))))
        }
    }

    fn draw_minimap(&self, fb: &mut FrameBuffer, map: &GameMap) {
        for my in 0..map.height() {
            for mx in 0..map.width() {
                let (Ok(x), Ok(y)) = (u16::try_from(mx), u16::try_from(my)) else {
                    continue;
                };
                let Some(kind) = map.get(mx as i64, my as i64) else {
                    continue;
                };
                let style = match kind {
                    CellKind::Wall => MAP_WALL_STYLE,
                    CellKind::Open => MAP_OPEN_STYLE,
                };
                fb.put_char(x, y, kind.glyph(), style);
            }
        }
    }

    fn draw_marker(&self, fb: &mut FrameBuffer, player: &PlayerState) {
        let (cx, cy) = player.cell();
        let (Ok(x), Ok(y)) = (u16::try_from(cx), u16::try_from(cy)) else {
            return;
        };
        fb.put_char(x, y, heading_for(player.angle).glyph(), MARKER_STYLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(minimap: bool) -> SceneView {
        SceneView::default().with_overlays(Overlays {
            minimap,
            marker: minimap,
        })
    }

    #[test]
    fn test_column_layers_sky_wall_floor() {
        let map = GameMap::open_room(16, 16);
        let player = PlayerState::new(8.0, 8.0, 0.0);
        let mut fb = FrameBuffer::new(120, 40);
        let view = scene(false);
        let vp = Viewport::new(120, 40);
        let proj = view.compose_column(60, vp, &player, &map, &mut fb);

        // distance ~7.0 => ceiling ~14.3, floor ~25.7
        assert!(proj.ceiling > 14.0 && proj.ceiling < 15.0);
        assert_eq!(
            fb.get(60, 0).unwrap().style,
            CellStyle::new(Fg::Gray, Bg::Black)
        );
        assert_eq!(fb.get(60, 20).unwrap(), wall_cell(WallBand::Far));
        assert_eq!(fb.get(60, 39).unwrap(), floor_cell(FloorBand::VeryNear));
    }

    #[test]
    fn test_ceiling_row_exactly_on_boundary_is_wall() {
        let view = scene(false);
        let map = GameMap::open_room(4, 4);
        let player = PlayerState::default();
        let camera = player.camera(1.0);
        let mut proj = project_column(0, 10, 40, &camera, &map, RayParams::default());
        proj.ray.distance = 4.0;
        proj.ceiling = 10.0;
        proj.floor = 30.0;
        assert_eq!(view.column_cell(0, 10, 40, &proj).ch, WallBand::Near.glyph());
        assert_eq!(view.column_cell(0, 30, 40, &proj).ch, WallBand::Near.glyph());
        // b = 1 - 11/20 = 0.45
        assert_eq!(
            view.column_cell(0, 31, 40, &proj),
            floor_cell(FloorBand::Near)
        );
    }

    #[test]
    fn test_minimap_and_marker_overwrite_scene() {
        let map = GameMap::open_room(16, 16);
        let player = PlayerState::new(8.5, 8.5, std::f64::consts::FRAC_PI_2);
        let mut view = scene(true);
        let fb = view.render(&player, &map, Viewport::new(120, 40));

        assert_eq!(fb.get(0, 0).unwrap().ch, '#');
        assert_eq!(fb.get(1, 1).unwrap().ch, '.');
        assert_eq!(fb.get(8, 8).unwrap().ch, '→');
        assert_eq!(fb.get(8, 8).unwrap().style, MARKER_STYLE);
    }

    #[test]
    fn test_marker_outside_screen_is_skipped() {
        let map = GameMap::open_room(16, 16);
        let player = PlayerState::new(-3.0, 2.0, 0.0);
        let mut view = scene(true);
        let fb = view.render(&player, &map, Viewport::new(20, 20));
        assert_eq!(fb.get(2, 2).unwrap().ch, '.');
    }

    #[test]
    fn test_render_is_deterministic() {
        let map = GameMap::default_level();
        let player = PlayerState::new(8.0, 8.0, 0.3);
        let mut a = SceneView::default();
        let mut b = SceneView::default();
        let vp = Viewport::new(80, 24);
        assert_eq!(a.render(&player, &map, vp), b.render(&player, &map, vp));
    }
}
