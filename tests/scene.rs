// SPDX: CC0-1.0

use approx::assert_relative_eq;
use canvas_plot::{
    coord::{setup_coord, AxisConfig, CurveOptions},
    draw,
    frame::{FixedStep, Flow, FrameLoop},
    motion::{update_in_box, BoundingBox, Damping, MovableCircle},
    style::{Color, Style},
    surface::Canvas,
    svg::SvgSurface,
    Circle, Number, RenderError, Velocity,
};

#[test]
fn plot_log_curve_to_svg() {
    let mut canvas = Canvas::with_surface(200, 100, SvgSurface::new(200, 100, None));
    let axis = AxisConfig {
        domain: [-1.0, 4.0],
        range: [-3.0, 2.0],
        ..AxisConfig::default()
    };
    axis.validate().unwrap();

    let space = setup_coord(&canvas, &axis);
    space.setup(&mut canvas).unwrap();
    let options = CurveOptions {
        rate: 8,
        label: Some("ln".into()),
        ..CurveOptions::default()
    };
    let samples = space.draw(&mut canvas, Number::ln, &options).unwrap();

    // x = -4, -3, ..., 4; ln is only finite for x > 0
    assert_eq!(samples.candidates, 9);
    assert_eq!(samples.pixels.len(), 4);
    let peak = samples.peak.unwrap();
    assert_relative_eq!(peak.math.x, 4.0);
    assert_relative_eq!(peak.math.y, 4.0_f64.ln());

    let svg = canvas.surface_mut().unwrap().finish();
    // two axes and the curve
    assert_eq!(svg.matches("<path").count(), 3);
    assert!(svg.contains(">ln</text>"));
}

#[test]
fn drawing_without_surface_is_fatal() {
    let mut canvas = Canvas::<SvgSurface>::new(10, 10);
    let space = setup_coord(&canvas, &AxisConfig::default());
    let err = space
        .draw(&mut canvas, |x| x, &CurveOptions::default())
        .unwrap_err();
    assert_eq!(err, RenderError::NoSurface);
}

#[test]
fn ball_settles_inside_box() {
    let bounds = BoundingBox {
        w_box: [0.0, 300.0],
        h_box: [0.0, 200.0],
    };
    let damping = Damping {
        collision: 0.8,
        friction: 0.05,
    };
    let mut ball = MovableCircle::new(Circle::new(150.0, 100.0, 10.0), Velocity { vx: 12.0, vy: -9.0 });
    let mut surface = SvgSurface::new(300, 200, None);
    let mut last_tick = 0.0;

    {
        let mut frames = FrameLoop::new(FixedStep::new(16.0));
        let _cancel = frames.start(|now| {
            assert!(now > last_tick);
            last_tick = now;
            ball.advance();
            update_in_box(&mut ball, &bounds, Some(&damping));
            draw::draw_cycle(&mut surface, ball.x, ball.y, ball.r, &Style::fill(Color::RED));
            if ball.vx == 0.0 && ball.vy == 0.0 {
                Flow::Stop
            } else {
                Flow::Continue
            }
        });
        let ran = frames.run();
        assert!(ran > 10);
        assert!(!frames.is_active());
    }

    assert!(ball.x - ball.r >= 0.0 && ball.x + ball.r <= 300.0);
    assert!(ball.y - ball.r >= 0.0 && ball.y + ball.r <= 200.0);
    assert!(surface.finish().matches("<path").count() > 10);
}
