use super::*;
use crate::render::plan::{Scene, compile_frame};
use crate::render::style::StrokeStyle;
use crate::sequencer::engine::{Phase, RunToken, SequencerSnapshot};
use crate::stroke::geometry::Viewport;
use crate::stroke::model::{StrokeSet, path_length};

#[test]
fn replay_preserves_order_and_colors() {
    let strokes = StrokeSet::from_svg_paths(["M0,0 L10,0", "M0,10 L20,10"]).unwrap();
    let style = StrokeStyle::default();
    let scene = Scene {
        strokes: &strokes,
        animated: &[0, 1],
        highlighted: &[],
        style: &style,
        viewport: Viewport::identity(),
    };
    let snapshot = SequencerSnapshot {
        phase: Phase::Playing,
        cursor: Some(1),
        stroke: Some(1),
        progress: 0.25,
        token: RunToken::default(),
    };
    let plan = compile_frame(&scene, &snapshot).unwrap();

    let mut canvas = RecordingCanvas::default();
    replay_plan(&mut canvas, &plan);

    assert_eq!(canvas.calls.len(), 4);
    assert!(matches!(
        &canvas.calls[0],
        CanvasCall::Path { color, .. } if *color == style.placeholder_color
    ));
    assert!(matches!(
        &canvas.calls[1],
        CanvasCall::Path { color, .. } if *color == style.stroke_color
    ));
    assert!(matches!(
        &canvas.calls[2],
        CanvasCall::Partial { visible_fraction, .. } if *visible_fraction == 0.25
    ));
    assert!(matches!(
        &canvas.calls[3],
        CanvasCall::Marker { center, .. } if *center == Point::new(5.0, 10.0)
    ));
}

#[derive(Default)]
struct PathsOnly {
    lengths: Vec<f64>,
}

impl StrokeCanvas for PathsOnly {
    fn draw_path(&mut self, path: &BezPath, _color: Rgba8, _width: f64) {
        self.lengths.push(path_length(path));
    }

    fn draw_marker(&mut self, _center: Point, _radius: f64, _color: Rgba8) {}
}

#[test]
fn default_partial_draw_trims_geometry() {
    let path = BezPath::from_svg("M0,0 L40,0").unwrap();
    let plan = FramePlan {
        phase: Phase::Playing,
        ops: vec![DrawOp::Partial {
            stroke: 0,
            path,
            visible_fraction: 0.25,
            dash: Dash {
                on: 10.0,
                off: 40.0,
            },
            color: Rgba8::rgb(0, 0, 0),
            width: 1.0,
        }],
    };
    let mut canvas = PathsOnly::default();
    replay_plan(&mut canvas, &plan);
    assert_eq!(canvas.lengths.len(), 1);
    assert!((canvas.lengths[0] - 10.0).abs() < 1e-9);
}
