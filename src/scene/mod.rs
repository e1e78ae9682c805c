//! Scene state: view modes, figure groups, hover.
//!
//! [`SceneState`] owns every [`CurveFigure`] in both view modes and decides
//! which ones render. It is deliberately GPU-free: picking, settings
//! application, and hover publication all run on plain data, so the whole
//! view-switching contract is testable headless. The engine layers GPU
//! buffers and the camera on top.

mod figure;
pub mod hover;

use glam::{Vec2, Vec3};
use rand::Rng;
use web_time::Duration;

pub use figure::CurveFigure;
pub use hover::{
    hover_channel, HoverHit, HoverPublisher, HoverReader, HoverState,
};

use crate::camera::{Camera, Viewpoint};
use crate::curve::{
    CurveParameters, FULL_POINT_COUNT, MINIATURE_POINT_COUNT,
};
use crate::error::LissaError;
use crate::picking::{self, PickCandidate};
use crate::settings::Settings;

/// Name of the one full-resolution figure shown in single view.
pub const SINGLE_FIGURE_NAME: &str = "lissajous-single";

/// Side length of the group view's figure grid.
pub const GROUP_GRID_DIM: usize = 4;

/// World-space distance between adjacent grid cells.
pub const GROUP_GRID_SPACING: f32 = 4.0;

/// Uniform scale applied to every miniature grid figure.
pub const GROUP_FIGURE_SCALE: f32 = 0.35;

/// Figure-construction knobs, fixed at scene construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Point count for the single-view figure.
    pub full_point_count: usize,
    /// Point count for each miniature grid figure.
    pub miniature_point_count: usize,
    /// World-space distance between adjacent grid cells.
    pub grid_spacing: f32,
    /// Uniform scale applied to every miniature figure.
    pub figure_scale: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            full_point_count: FULL_POINT_COUNT,
            miniature_point_count: MINIATURE_POINT_COUNT,
            grid_spacing: GROUP_GRID_SPACING,
            figure_scale: GROUP_FIGURE_SCALE,
        }
    }
}

// ---------------------------------------------------------------------------
// ViewMode
// ---------------------------------------------------------------------------

/// The two scene presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// One full-resolution figure at the origin with live controls.
    #[default]
    Single,
    /// Sixteen fixed miniatures on a grid with hover picking.
    Group,
}

impl ViewMode {
    /// The viewpoint the camera flies to when this mode activates.
    #[must_use]
    pub fn viewpoint(self) -> Viewpoint {
        match self {
            Self::Single => Viewpoint::Initial,
            Self::Group => Viewpoint::Top,
        }
    }

    /// Whether the parameter panel is shown in this mode.
    #[must_use]
    pub fn shows_panel(self) -> bool {
        matches!(self, Self::Single)
    }

    /// Lowercase mode name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Group => "group",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = LissaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "group" => Ok(Self::Group),
            _ => Err(LissaError::InvalidViewMode(s.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// SceneState
// ---------------------------------------------------------------------------

/// Owns both figure groups, the active view mode, and the hover channel.
pub struct SceneState {
    config: SceneConfig,
    single: Option<CurveFigure>,
    group: Vec<CurveFigure>,
    mode: ViewMode,
    /// Construct-once tags, separate from the figure storage so that the
    /// first-entry behavior is explicit state rather than a hidden branch.
    single_initialized: bool,
    group_initialized: bool,
    hover: HoverPublisher,
    hover_reader: Option<HoverReader>,
    /// Index into `group` of the currently hovered figure.
    hovered: Option<usize>,
    disposed: bool,
}

impl SceneState {
    /// An empty scene in single mode with no figures constructed yet.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// Like [`Self::new`] but with explicit group-grid layout.
    #[must_use]
    pub fn with_config(config: SceneConfig) -> Self {
        let (hover, hover_reader) = hover_channel();
        Self {
            config,
            single: None,
            group: Vec::new(),
            mode: ViewMode::default(),
            single_initialized: false,
            group_initialized: false,
            hover,
            hover_reader: Some(hover_reader),
            hovered: None,
            disposed: false,
        }
    }

    /// Hand the read side of the hover channel to the embedding UI.
    /// Returns `None` after the first call.
    pub fn take_hover_reader(&mut self) -> Option<HoverReader> {
        self.hover_reader.take()
    }

    /// The active view mode.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Whether [`Self::dispose`] has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // -- View switching --

    /// Activate a view mode.
    ///
    /// The mode's figures are constructed on first entry only; later
    /// entries reuse them. Visibility always re-applies, so calling with
    /// the current mode is harmless. Any published hover is cleared.
    pub fn set_view(&mut self, mode: ViewMode) {
        if self.disposed {
            return;
        }
        match mode {
            ViewMode::Single => self.ensure_single(),
            ViewMode::Group => self.ensure_group(),
        }
        self.mode = mode;
        self.apply_visibility();
        self.hovered = None;
        self.hover.publish_cleared();
    }

    fn ensure_single(&mut self) {
        if self.single_initialized {
            return;
        }
        self.single = Some(CurveFigure::new(
            SINGLE_FIGURE_NAME,
            CurveParameters::default(),
            self.config.full_point_count,
        ));
        self.single_initialized = true;
    }

    /// Build the 4×4 miniature grid, row-major, centered on the origin.
    /// Frequencies are drawn once, here, and stay fixed for the lifetime
    /// of the scene.
    fn ensure_group(&mut self) {
        if self.group_initialized {
            return;
        }
        let mut rng = rand::rng();
        let half = (GROUP_GRID_DIM as f32 - 1.0) / 2.0;
        for row in 0..GROUP_GRID_DIM {
            for col in 0..GROUP_GRID_DIM {
                let index = row * GROUP_GRID_DIM + col;
                let params = CurveParameters::with_frequencies(
                    rng.random_range(1..=10) as f32 / 10.0,
                    rng.random_range(1..=10) as f32 / 10.0,
                    rng.random_range(1..=10) as f32 / 10.0,
                );
                let mut figure = CurveFigure::new(
                    format!("lissajous-group-{index}"),
                    params,
                    self.config.miniature_point_count,
                );
                figure.position = Vec3::new(
                    (col as f32 - half) * self.config.grid_spacing,
                    0.0,
                    (row as f32 - half) * self.config.grid_spacing,
                );
                figure.scale = self.config.figure_scale;
                self.group.push(figure);
            }
        }
        self.group_initialized = true;
    }

    fn apply_visibility(&mut self) {
        let single_active = self.mode == ViewMode::Single;
        if let Some(figure) = self.single.as_mut() {
            figure.visible = single_active;
        }
        for figure in &mut self.group {
            figure.visible = !single_active;
        }
    }

    // -- Per-frame work --

    /// One frame of scene work: apply the settings snapshot to the active
    /// single figure, tick shader time, and run the glow-noise gate.
    /// Only visible figures pay anything.
    pub fn advance_frame(
        &mut self,
        settings: &Settings,
        dt: f32,
        elapsed: Duration,
    ) {
        if self.disposed {
            return;
        }
        if self.mode == ViewMode::Single {
            if let Some(figure) = self.single.as_mut() {
                figure.set_frequencies(
                    settings.x_frequency,
                    settings.y_frequency,
                    settings.z_frequency,
                );
                figure.set_color(settings.color);
            }
        }
        for figure in self.figures_mut() {
            if figure.visible {
                figure.advance_time(dt);
                figure.update_noise(elapsed);
            }
        }
    }

    // -- Pointer & hover --

    /// Handle a pointer move in normalized device coordinates.
    ///
    /// Picking runs in group mode only; single mode publishes an empty
    /// hover without constructing a ray. Never touches geometry or the
    /// camera.
    pub fn pointer_moved(&mut self, ndc: Vec2, camera: &Camera) {
        if self.disposed {
            return;
        }
        if self.mode != ViewMode::Group {
            self.hovered = None;
            self.hover.publish_cleared();
            return;
        }

        let candidates: Vec<PickCandidate<'_>> = self
            .group
            .iter()
            .filter(|f| f.visible)
            .map(CurveFigure::pick_candidate)
            .collect();

        match picking::pick(ndc, camera, &candidates) {
            Some(hit) => {
                let index =
                    self.group.iter().position(|f| f.name == hit.name);
                let state = HoverState {
                    hit: index.map(|i| {
                        let figure = &self.group[i];
                        HoverHit {
                            name: figure.name.clone(),
                            parameters: figure.parameters(),
                            position: figure.position,
                        }
                    }),
                };
                self.hovered = index;
                self.hover.publish(state);
            }
            None => {
                self.hovered = None;
                self.hover.publish_cleared();
            }
        }
    }

    /// Republish the current hover after a camera change, so consumers
    /// projecting the hit to screen space re-run with the new view.
    pub fn camera_changed(&mut self) {
        if self.disposed {
            return;
        }
        let Some(figure) = self.hovered.and_then(|i| self.group.get(i))
        else {
            return;
        };
        let state = HoverState {
            hit: Some(HoverHit {
                name: figure.name.clone(),
                parameters: figure.parameters(),
                position: figure.position,
            }),
        };
        self.hover.publish(state);
    }

    /// The hovered figure, if any.
    #[must_use]
    pub fn hovered_figure(&self) -> Option<&CurveFigure> {
        self.hovered.and_then(|i| self.group.get(i))
    }

    // -- Figure access --

    /// The single-view figure, once constructed.
    #[must_use]
    pub fn single_figure(&self) -> Option<&CurveFigure> {
        self.single.as_ref()
    }

    /// The grid figures, once constructed (row-major order).
    #[must_use]
    pub fn group_figures(&self) -> &[CurveFigure] {
        &self.group
    }

    /// Every constructed figure, single first.
    pub fn figures(&self) -> impl Iterator<Item = &CurveFigure> {
        self.single.iter().chain(self.group.iter())
    }

    /// Mutable access to every constructed figure, single first.
    pub fn figures_mut(&mut self) -> impl Iterator<Item = &mut CurveFigure> {
        self.single.iter_mut().chain(self.group.iter_mut())
    }

    // -- Disposal --

    /// Tear the scene down: publish an empty hover, drop every figure,
    /// and reset the construct-once tags. Afterwards every other method
    /// is a no-op. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.hover.publish_cleared();
        self.hovered = None;
        self.single = None;
        self.group.clear();
        self.single_initialized = false;
        self.group_initialized = false;
        self.disposed = true;
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::BASE_SCALE;

    fn top_camera() -> Camera {
        Camera::looking_at_origin(
            Viewpoint::Top.eye(),
            Viewpoint::Top.up(),
            1.25,
        )
    }

    #[test]
    fn test_view_mode_parses_documented_names_only() {
        assert_eq!("single".parse::<ViewMode>().ok(), Some(ViewMode::Single));
        assert_eq!("GROUP".parse::<ViewMode>().ok(), Some(ViewMode::Group));
        assert!(matches!(
            "gallery".parse::<ViewMode>(),
            Err(LissaError::InvalidViewMode(name)) if name == "gallery"
        ));
    }

    #[test]
    fn test_single_view_constructs_one_figure_once() {
        let mut scene = SceneState::new();
        scene.set_view(ViewMode::Single);

        let figure = scene.single_figure().unwrap();
        assert_eq!(figure.name, SINGLE_FIGURE_NAME);
        assert_eq!(figure.sample().point_count(), FULL_POINT_COUNT);
        assert_eq!(figure.position, Vec3::ZERO);
        assert_eq!(figure.scale, 1.0);

        // Mark the figure, re-enter the mode, and check the mark survived:
        // a rebuild would have reset it.
        scene.single.as_mut().unwrap().set_color([1.0, 0.0, 0.0]);
        scene.set_view(ViewMode::Single);
        assert_eq!(scene.single_figure().unwrap().color, [1.0, 0.0, 0.0]);
        assert_eq!(scene.figures().count(), 1);
    }

    #[test]
    fn test_group_view_builds_a_row_major_grid() {
        let mut scene = SceneState::new();
        scene.set_view(ViewMode::Group);

        let figures = scene.group_figures();
        assert_eq!(figures.len(), GROUP_GRID_DIM * GROUP_GRID_DIM);
        for (i, figure) in figures.iter().enumerate() {
            assert_eq!(figure.name, format!("lissajous-group-{i}"));
            assert_eq!(
                figure.sample().point_count(),
                MINIATURE_POINT_COUNT
            );
            assert_eq!(figure.scale, GROUP_FIGURE_SCALE);
            assert_eq!(figure.position.y, 0.0);
        }
        // Row-major: index 0 is the corner, 5 is one cell in on both
        // axes, 15 is the opposite corner.
        assert_eq!(figures[0].position, Vec3::new(-6.0, 0.0, -6.0));
        assert_eq!(figures[5].position, Vec3::new(-2.0, 0.0, -2.0));
        assert_eq!(figures[15].position, Vec3::new(6.0, 0.0, 6.0));
    }

    #[test]
    fn test_group_frequencies_are_tenths_and_survive_round_trips() {
        let mut scene = SceneState::new();
        scene.set_view(ViewMode::Group);

        let freqs: Vec<[f32; 3]> = scene
            .group_figures()
            .iter()
            .map(|f| {
                let p = f.parameters();
                [p.x_frequency, p.y_frequency, p.z_frequency]
            })
            .collect();
        for triple in &freqs {
            for &f in triple {
                assert!((0.1..=1.0).contains(&f));
                assert!((f * 10.0 - (f * 10.0).round()).abs() < 1e-4);
            }
        }

        scene.set_view(ViewMode::Single);
        scene.set_view(ViewMode::Group);
        let after: Vec<[f32; 3]> = scene
            .group_figures()
            .iter()
            .map(|f| {
                let p = f.parameters();
                [p.x_frequency, p.y_frequency, p.z_frequency]
            })
            .collect();
        assert_eq!(freqs, after);
    }

    #[test]
    fn test_switching_modes_toggles_visibility() {
        let mut scene = SceneState::new();
        scene.set_view(ViewMode::Single);
        scene.set_view(ViewMode::Group);
        assert!(!scene.single_figure().unwrap().visible);
        assert!(scene.group_figures().iter().all(|f| f.visible));

        scene.set_view(ViewMode::Single);
        assert!(scene.single_figure().unwrap().visible);
        assert!(scene.group_figures().iter().all(|f| !f.visible));
    }

    #[test]
    fn test_single_mode_pointer_never_hovers() {
        let mut scene = SceneState::new();
        let mut reader = scene.take_hover_reader().unwrap();
        scene.set_view(ViewMode::Single);

        // Dead center, straight at the figure: still no hover in single
        // mode.
        let camera = Camera::looking_at_origin(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::Y,
            1.25,
        );
        scene.pointer_moved(Vec2::ZERO, &camera);
        assert!(!reader.latest().is_hovering());
        assert!(scene.hovered_figure().is_none());
    }

    #[test]
    fn test_hover_reports_the_group_cell_under_the_pointer() {
        let mut scene = SceneState::new();
        let mut reader = scene.take_hover_reader().unwrap();
        scene.set_view(ViewMode::Group);
        let camera = top_camera();

        // Project cell 5's center into the camera and point exactly
        // there.
        let center = scene.group_figures()[5].position;
        let ndc = picking::project_to_ndc(center, &camera).unwrap();
        scene.pointer_moved(ndc, &camera);

        let state = reader.latest().clone();
        let hit = state.hit.expect("pointer over cell 5 should hover");
        assert_eq!(hit.name, "lissajous-group-5");
        assert_eq!(hit.position, center);
        let expected = scene.group_figures()[5].parameters();
        assert_eq!(hit.parameters, expected);

        // Off every figure: hover clears.
        scene.pointer_moved(Vec2::new(0.98, 0.98), &camera);
        assert!(!reader.latest().is_hovering());
    }

    #[test]
    fn test_camera_change_republishes_the_active_hover() {
        let mut scene = SceneState::new();
        let mut reader = scene.take_hover_reader().unwrap();
        scene.set_view(ViewMode::Group);
        let camera = top_camera();

        let center = scene.group_figures()[5].position;
        let ndc = picking::project_to_ndc(center, &camera).unwrap();
        scene.pointer_moved(ndc, &camera);
        let _ = reader.latest();
        assert!(!reader.has_update());

        scene.camera_changed();
        assert!(reader.has_update());
        assert_eq!(
            reader.latest().hit.as_ref().map(|h| h.name.as_str()),
            Some("lissajous-group-5")
        );

        // No hover, no republication.
        scene.pointer_moved(Vec2::new(0.98, 0.98), &camera);
        let _ = reader.latest();
        scene.camera_changed();
        assert!(!reader.has_update());
    }

    #[test]
    fn test_settings_apply_to_the_single_figure_only() {
        let mut scene = SceneState::new();
        scene.set_view(ViewMode::Single);

        let settings = Settings {
            x_frequency: 0.3,
            y_frequency: 0.7,
            z_frequency: 0.9,
            color: [1.0, 0.0, 0.0],
        };
        scene.advance_frame(&settings, 0.016, Duration::from_millis(16));

        let figure = scene.single_figure().unwrap();
        let params = figure.parameters();
        assert_eq!(params.x_frequency, 0.3);
        assert_eq!(params.y_frequency, 0.7);
        assert_eq!(params.z_frequency, 0.9);
        assert_eq!(figure.color, [1.0, 0.0, 0.0]);
        assert!((figure.time - 0.016).abs() < 1e-6);

        // Group figures keep their fixed startup frequencies.
        scene.set_view(ViewMode::Group);
        let before: Vec<f32> = scene
            .group_figures()
            .iter()
            .map(|f| f.parameters().x_frequency)
            .collect();
        scene.advance_frame(&settings, 0.016, Duration::from_millis(32));
        let after: Vec<f32> = scene
            .group_figures()
            .iter()
            .map(|f| f.parameters().x_frequency)
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_miniature_bounding_spheres_stay_inside_their_cells() {
        let mut scene = SceneState::new();
        scene.set_view(ViewMode::Group);
        for figure in scene.group_figures() {
            // Default amplitudes: envelope √3.
            let radius = figure.bounding_radius();
            assert!(
                (radius - GROUP_FIGURE_SCALE * 3.0_f32.sqrt() * BASE_SCALE)
                    .abs()
                    < 1e-5
            );
            assert!(radius * 2.0 < GROUP_GRID_SPACING);
        }
    }

    #[test]
    fn test_dispose_twice_is_safe_and_final() {
        let mut scene = SceneState::new();
        let mut reader = scene.take_hover_reader().unwrap();
        scene.set_view(ViewMode::Group);
        let camera = top_camera();
        let center = scene.group_figures()[5].position;
        let ndc = picking::project_to_ndc(center, &camera).unwrap();
        scene.pointer_moved(ndc, &camera);
        assert!(reader.latest().is_hovering());

        scene.dispose();
        assert!(scene.is_disposed());
        assert!(!reader.latest().is_hovering());
        assert_eq!(scene.figures().count(), 0);

        scene.dispose();

        // Everything after disposal is inert.
        scene.set_view(ViewMode::Single);
        assert!(scene.single_figure().is_none());
        scene.advance_frame(
            &Settings::default(),
            0.016,
            Duration::from_millis(16),
        );
        scene.pointer_moved(ndc, &camera);
        assert!(!reader.latest().is_hovering());
    }
}
