//! Bevy window for a finished simulation
//!
//! Everything is computed before the window opens: [`build_scene`] turns a
//! `SimulationResult` into screen-space polylines once, and the systems here
//! only draw them with gizmos every frame.
//!
//! - left column: one chart per quantity (x, v and optionally a vs t),
//!   one line per body
//! - right panel (two-body runs): dashed position traces with a marker per
//!   body that steps through the samples on a fixed 50 ms tick and loops

use std::f32::consts::FRAC_PI_2;

use anyhow::{bail, Result};
use bevy::app::AppExit;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::simulation::grid::TimeGrid;
use crate::simulation::runner::SimulationResult;
use crate::visualization::frame::{padded_range, value_range, NVec2, PlotFrame};
use crate::visualization::sink::{ChartLayout, Quantity, RenderSink};

const WINDOW_WIDTH: f32 = 1280.0;
const WINDOW_HEIGHT: f32 = 900.0;

/// Space left around each panel for titles and tick labels
const MARGIN: f64 = 55.0;

/// Playback tick
const FRAME_INTERVAL_SECS: f64 = 0.05;

const MARKER_RADIUS: f32 = 7.0;
const TRACE_ALPHA: f32 = 0.5;
const FRAME_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);
const TEXT_COLOR: Color = Color::srgb(0.1, 0.1, 0.1);
const ZERO_LINE_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);

/// Body colours: red, blue, then a few more for larger scenarios
const PALETTE: [(f32, f32, f32); 5] = [
    (0.85, 0.10, 0.10),
    (0.10, 0.25, 0.85),
    (0.10, 0.60, 0.20),
    (0.90, 0.55, 0.00),
    (0.55, 0.20, 0.70),
];

pub fn body_color(body: usize, alpha: f32) -> Color {
    let (r, g, b) = PALETTE[body % PALETTE.len()];
    Color::srgba(r, g, b, alpha)
}

/// Screen-space polyline of one body
#[derive(Debug, Clone)]
pub struct Series {
    pub body: usize,
    pub points: Vec<Vec2>,
}

/// One static chart
#[derive(Debug, Clone)]
pub struct ChartPanel {
    pub quantity: Quantity,
    pub frame: PlotFrame,
    pub series: Vec<Series>,
}

/// Position traces the markers move along
#[derive(Debug, Clone)]
pub struct AnimationPanel {
    pub frame: PlotFrame,
    pub traces: Vec<Series>,
}

/// Everything the window draws, precomputed
#[derive(Resource, Debug, Clone)]
pub struct ChartScene {
    pub labels: Vec<String>, // body labels, legend order
    pub charts: Vec<ChartPanel>,
    pub animation: Option<AnimationPanel>,
    pub frame_count: usize, // samples per body
}

/// Current animation frame
#[derive(Resource, Debug, Default)]
struct Playback {
    frame: usize,
}

/// Opens a window and blocks until it is closed
pub struct BevyViewer {
    title: String,
}

impl BevyViewer {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl RenderSink for BevyViewer {
    fn render(&mut self, result: &SimulationResult, grid: &TimeGrid, layout: ChartLayout) -> Result<()> {
        let scene = build_scene(result, grid, layout);
        log::info!(
            "opening viewer: {} charts, animation {}",
            scene.charts.len(),
            if scene.animation.is_some() { "on" } else { "off" }
        );
        run_viewer(scene, &self.title)
    }
}

/// Screen rectangles `(center, size)` for `count` stacked charts and,
/// optionally, the animation panel on the right half of the window
pub fn panel_rects(count: usize, animate: bool) -> (Vec<(NVec2, NVec2)>, Option<(NVec2, NVec2)>) {
    let w = WINDOW_WIDTH as f64;
    let h = WINDOW_HEIGHT as f64;

    let column_w = if animate { w * 0.5 } else { w };
    let cell_h = h / count.max(1) as f64;
    let column_x = -w * 0.5 + column_w * 0.5;

    let charts = (0..count)
        .map(|k| {
            let center = NVec2::new(column_x, h * 0.5 - cell_h * (k as f64 + 0.5));
            let size = NVec2::new(column_w - 2.0 * MARGIN, cell_h - 2.0 * MARGIN);
            (center, size)
        })
        .collect();

    let animation = animate.then(|| {
        let center = NVec2::new(w * 0.25, 0.0);
        let size = NVec2::new(w * 0.5 - 2.0 * MARGIN, h * 0.6);
        (center, size)
    });

    (charts, animation)
}

/// Turn a result into screen-space geometry for the given layout
pub fn build_scene(result: &SimulationResult, grid: &TimeGrid, layout: ChartLayout) -> ChartScene {
    let quantities = layout.quantities();
    let (chart_rects, anim_rect) = panel_rects(quantities.len(), layout.animate);
    let x_range = (0.0, grid.max_time());

    let charts = quantities
        .iter()
        .zip(chart_rects)
        .map(|(&quantity, (center, size))| {
            let all = result.trajectories.iter().flat_map(|traj| quantity.values(traj).iter().copied());
            let (lo, hi) = value_range(all).unwrap_or((0.0, 0.0));
            let frame = PlotFrame::new(x_range, padded_range(lo, hi), center, size);
            let series = result
                .trajectories
                .iter()
                .enumerate()
                .map(|(body, traj)| Series {
                    body,
                    points: project(&frame, &result.times, quantity.values(traj)),
                })
                .collect();
            ChartPanel { quantity, frame, series }
        })
        .collect();

    let animation = anim_rect.map(|(center, size)| {
        // exact position limits, like the marker traces; open up only when flat
        let (lo, hi) = result.position_bounds().unwrap_or((0.0, 0.0));
        let y_range = if hi > lo { (lo, hi) } else { padded_range(lo, hi) };
        let frame = PlotFrame::new(x_range, y_range, center, size);
        let traces = result
            .trajectories
            .iter()
            .enumerate()
            .map(|(body, traj)| Series {
                body,
                points: project(&frame, &result.times, &traj.positions),
            })
            .collect();
        AnimationPanel { frame, traces }
    });

    ChartScene {
        labels: result.trajectories.iter().map(|t| t.label.clone()).collect(),
        charts,
        animation,
        frame_count: result.times.len(),
    }
}

fn project(frame: &PlotFrame, times: &[f64], values: &[f64]) -> Vec<Vec2> {
    times
        .iter()
        .zip(values)
        .map(|(&t, &v)| to_vec2(frame.to_screen(NVec2::new(t, v))))
        .collect()
}

fn to_vec2(p: NVec2) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

fn run_viewer(scene: ChartScene, title: &str) -> Result<()> {
    let exit = App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(Time::<Fixed>::from_seconds(FRAME_INTERVAL_SECS))
        .insert_resource(scene)
        .init_resource::<Playback>()
        // env_logger owns the `log` facade, keep Bevy's subscriber out of the way
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>().set(WindowPlugin {
            primary_window: Some(Window {
                title: title.to_string(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_scene_system)
        .add_systems(Update, draw_scene_system)
        .add_systems(FixedUpdate, advance_playback_system)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("viewer exited with code {code}"),
    }
}

fn spawn_text(commands: &mut Commands, value: impl Into<String>, at: Vec2, size: f32, color: Color, rotation: f32) {
    commands.spawn(Text2dBundle {
        text: Text::from_section(
            value,
            TextStyle {
                font_size: size,
                color,
                ..default()
            },
        )
        .with_justify(JustifyText::Center),
        transform: Transform::from_xyz(at.x, at.y, 1.0).with_rotation(Quat::from_rotation_z(rotation)),
        ..default()
    });
}

/// Camera plus all static text: titles, axis labels, tick values, legends
fn setup_scene_system(mut commands: Commands, scene: Res<ChartScene>) {
    commands.spawn(Camera2dBundle::default());

    let last_chart = scene.charts.len().saturating_sub(1);
    for (k, chart) in scene.charts.iter().enumerate() {
        let f = &chart.frame;
        let lo = to_vec2(f.screen_min);
        let hi = to_vec2(f.screen_max);
        let mid = to_vec2(f.screen_center());

        spawn_text(&mut commands, chart.quantity.title(), Vec2::new(mid.x, hi.y + 16.0), 18.0, TEXT_COLOR, 0.0);
        spawn_text(&mut commands, chart.quantity.axis_label(), Vec2::new(lo.x - 38.0, mid.y), 13.0, TEXT_COLOR, FRAC_PI_2);
        spawn_tick_labels(&mut commands, f);
        if k == last_chart {
            spawn_text(&mut commands, "Time (s)", Vec2::new(mid.x, lo.y - 30.0), 13.0, TEXT_COLOR, 0.0);
        }

        // legend, top-right inside the frame
        for (body, label) in scene.labels.iter().enumerate() {
            let at = Vec2::new(hi.x - 50.0, hi.y - 14.0 - 16.0 * body as f32);
            spawn_text(&mut commands, label.clone(), at, 13.0, body_color(body, 1.0), 0.0);
        }
    }

    if let Some(anim) = &scene.animation {
        let f = &anim.frame;
        let lo = to_vec2(f.screen_min);
        let hi = to_vec2(f.screen_max);
        let mid = to_vec2(f.screen_center());

        spawn_text(&mut commands, "Motion Animation", Vec2::new(mid.x, hi.y + 16.0), 18.0, TEXT_COLOR, 0.0);
        spawn_text(&mut commands, "Position (m)", Vec2::new(lo.x - 38.0, mid.y), 13.0, TEXT_COLOR, FRAC_PI_2);
        spawn_text(&mut commands, "Time (s)", Vec2::new(mid.x, lo.y - 30.0), 13.0, TEXT_COLOR, 0.0);
        spawn_tick_labels(&mut commands, f);

        for (body, label) in scene.labels.iter().enumerate() {
            let at = Vec2::new(hi.x - 50.0, hi.y - 14.0 - 16.0 * body as f32);
            spawn_text(&mut commands, label.clone(), at, 13.0, body_color(body, 1.0), 0.0);
        }
    }
}

/// Data limits written at the ends of both axes
fn spawn_tick_labels(commands: &mut Commands, f: &PlotFrame) {
    let lo = to_vec2(f.screen_min);
    let hi = to_vec2(f.screen_max);

    spawn_text(commands, format!("{:.1}", f.data_min.x), Vec2::new(lo.x, lo.y - 12.0), 11.0, TEXT_COLOR, 0.0);
    spawn_text(commands, format!("{:.1}", f.data_max.x), Vec2::new(hi.x, lo.y - 12.0), 11.0, TEXT_COLOR, 0.0);
    spawn_text(commands, format!("{:.1}", f.data_min.y), Vec2::new(lo.x - 18.0, lo.y), 11.0, TEXT_COLOR, 0.0);
    spawn_text(commands, format!("{:.1}", f.data_max.y), Vec2::new(lo.x - 18.0, hi.y), 11.0, TEXT_COLOR, 0.0);
}

fn draw_frame(gizmos: &mut Gizmos, f: &PlotFrame) {
    gizmos.linestrip_2d(f.outline().map(to_vec2), FRAME_COLOR);

    // zero line when the value axis crosses zero
    if f.data_min.y < 0.0 && f.data_max.y > 0.0 {
        let y0 = to_vec2(f.to_screen(NVec2::new(f.data_min.x, 0.0))).y;
        let lo = to_vec2(f.screen_min);
        let hi = to_vec2(f.screen_max);
        gizmos.line_2d(Vec2::new(lo.x, y0), Vec2::new(hi.x, y0), ZERO_LINE_COLOR);
    }
}

/// Immediate-mode drawing of every chart, trace and marker
fn draw_scene_system(mut gizmos: Gizmos, scene: Res<ChartScene>, playback: Res<Playback>) {
    for chart in &scene.charts {
        draw_frame(&mut gizmos, &chart.frame);
        for s in &chart.series {
            gizmos.linestrip_2d(s.points.iter().copied(), body_color(s.body, 1.0));
        }
    }

    if let Some(anim) = &scene.animation {
        draw_frame(&mut gizmos, &anim.frame);
        for s in &anim.traces {
            // dashed: every other segment
            for seg in s.points.windows(2).step_by(2) {
                gizmos.line_2d(seg[0], seg[1], body_color(s.body, TRACE_ALPHA));
            }
            if let Some(p) = s.points.get(playback.frame) {
                gizmos.circle_2d(*p, MARKER_RADIUS, body_color(s.body, 1.0));
            }
        }
    }
}

/// Step the markers forward, looping at the end
fn advance_playback_system(mut playback: ResMut<Playback>, scene: Res<ChartScene>) {
    if scene.frame_count > 0 {
        playback.frame = (playback.frame + 1) % scene.frame_count;
    }
}
