// SPDX: CC0-1.0

use anyhow::Context;
use canvas_plot::{
    coord::{self, AxisConfig, CurveOptions, Label},
    curves::{self, Curves},
    draw::{self, GridOptions, SegmentEvent},
    frame::{ease_step, Flow, FrameLoop, Realtime},
    helix::{HelixOptions, HelixPoints},
    motion::{self, BoundingBox, Damping, MovableCircle},
    sample::MAX_RATE,
    shell::{self, Command},
    style::{Color, Style},
    surface::Canvas,
    svg::SvgSurface,
    Circle, Number, Point, Velocity,
};
use chrono::{DateTime, Local};
use core::num::NonZeroU32;
use std::{
    fs::OpenOptions,
    io::{self, stdin, stdout, BufRead, BufWriter, Write},
    process::ExitCode,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const BACKGROUND: Color = Color::rgb(0x10, 0x14, 0x18);

fn output_svg_filename(now: DateTime<Local>, what: &str) -> String {
    format!(
        "{}_{what}-{}.{}",
        env!("CARGO_PKG_NAME"),
        now.format("%Y-%m-%d_%H-%M-%S"),
        "svg"
    )
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("unexpected error: {err}");
            let chain = err.chain();
            if chain.len() > 1 {
                eprintln!();
                eprintln!("context:");
                for it in chain.skip(1) {
                    eprintln!("  {it}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug)]
struct State {
    name: Option<&'static str>,
    curves: Curves,
    axis: AxisConfig,
    size: [u32; 2],
    rate: u32,
}

fn try_main() -> anyhow::Result<()> {
    let mut state = State {
        name: Some("sin"),
        curves: curves::standard_curves(),
        axis: AxisConfig::default(),
        size: [960, 540],
        rate: CurveOptions::default().rate,
    };

    let mut stdin = stdin().lock();
    let mut stdout = BufWriter::new(stdout());
    loop {
        if let Some(name) = state.name {
            writeln!(stdout, "y = {name}(x)")?;
        } else {
            writeln!(stdout, "no function is chosen")?;
        }

        let Some(mut try_cmd) = shell::input(&mut stdin, &mut stdout, "> ")? else {
            writeln!(stdout)?;
            break;
        };
        try_cmd.make_ascii_lowercase();
        writeln!(stdout)?;

        match try_cmd.parse::<Command>() {
            Ok(cmd) => match cmd {
                Command::Help => {
                    for c in Command::exhaustive() {
                        writeln!(stdout, "{name}: {help}", name = c.name(), help = c.help())?;
                    }
                }

                Command::Quit => break,

                Command::SetFn => set_fn(&mut stdin, &mut stdout, &mut state)?,

                Command::List => {
                    for name in state.curves.keys() {
                        writeln!(stdout, "  {name}")?;
                    }
                }

                Command::SetWin => set_win(&mut stdin, &mut stdout, &mut state)?,

                Command::Plot => plot(&mut stdout, &state)?,

                Command::Bounce => bounce(&mut stdin, &mut stdout, &state)?,
            },

            Err(()) => {
                writeln!(stdout, r#"Unknown command, try "help" for help"#)?;
                let names = Command::exhaustive().iter().map(|c| c.name());
                if let Some(similar) = curves::suggest(&try_cmd, names) {
                    writeln!(stdout, "note: command '{similar}' has a similar name")?;
                }
            }
        }

        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

fn set_fn<R: BufRead, W: Write>(src: R, mut out: W, state: &mut State) -> anyhow::Result<()> {
    let input = shell::input(src, &mut out, "y = ")?
        .unwrap_or_default()
        .to_ascii_lowercase();
    if input.is_empty() {
        return Ok(());
    }

    if let Some((name, _)) = state.curves.get_key_value(input.as_str()) {
        state.name = Some(*name);
        return Ok(());
    }

    writeln!(out, "error: unknown function '{input}'")?;
    if let Some(similar) = curves::suggest(&input, state.curves.keys().copied()) {
        writeln!(out, "note: function '{similar}' has a similar name")?;
    } else {
        writeln!(out, r#"note: try "list" to see every function"#)?;
    }
    Ok(())
}

fn set_win<R: BufRead, W: Write>(mut src: R, mut out: W, state: &mut State) -> anyhow::Result<()> {
    writeln!(out, "axis = {:?}", state.axis)?;
    writeln!(out, "canvas = {}x{}, rate = {}", state.size[0], state.size[1], state.rate)?;
    writeln!(out)?;
    writeln!(out, "note: leave blank to skip")?;

    let [x_min, x_max] = &mut state.axis.domain;
    let [y_min, y_max] = &mut state.axis.range;
    for (name, dst) in [
        ("x min", x_min),
        ("x max", x_max),
        ("y min", y_min),
        ("y max", y_max),
    ] {
        match shell::read_fromstr::<_, _, Number>(
            &mut src,
            &mut out,
            format_args!("?{name} (is {cur}) = ", cur = *dst),
            true,
        )? {
            Ok(Some(new)) => *dst = new,
            Ok(None) => {}
            Err(_) => return Ok(()),
        }
    }

    writeln!(out, "note: sizes and rate must be integers")?;
    let [width, height] = &mut state.size;
    for (name, dst) in [
        ("canvas width", width),
        ("canvas height", height),
        ("rate", &mut state.rate),
    ] {
        match shell::read_fromstr::<_, _, u32>(
            &mut src,
            &mut out,
            format_args!("?{name} (is {cur}) = ", cur = *dst),
            true,
        )? {
            Ok(Some(new)) => *dst = new,
            Ok(None) => {}
            Err(_) => return Ok(()),
        }
    }
    if state.rate > MAX_RATE {
        writeln!(out, "warning: rate {} is too high, using {MAX_RATE}", state.rate)?;
        state.rate = MAX_RATE;
    }

    for (name, dst) in [
        ("x axis length", &mut state.axis.x_size),
        ("y axis length", &mut state.axis.y_size),
    ] {
        let cur = dst.map_or_else(|| String::from("full"), |v| v.to_string());
        match shell::read_fromstr::<_, _, Number>(
            &mut src,
            &mut out,
            format_args!("?{name} (is {cur}) = "),
            true,
        )? {
            Ok(Some(new)) => *dst = Some(new),
            Ok(None) => {}
            Err(_) => return Ok(()),
        }
    }

    if let Err(err) = state.axis.validate() {
        writeln!(out, "warning: {err}")?;
        writeln!(out, "note: plotting will fail until both bounds are nonzero")?;
    }
    Ok(())
}

fn save_svg(svg: &str, path: &str) -> anyhow::Result<()> {
    let mut file = BufWriter::new(
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .context("failed to open output svg file")?,
    );
    file.write_all(svg.as_bytes())
        .context("failed to write to output svg file")?;
    file.flush()?;
    file.get_mut().sync_data()?;
    Ok(())
}

fn plot<W: Write>(mut out: W, state: &State) -> anyhow::Result<()> {
    let Some(name) = state.name else {
        shell::fn_undefined(&mut out)?;
        return Ok(());
    };
    let Some(&fx) = state.curves.get(name) else {
        shell::fn_undefined(&mut out)?;
        return Ok(());
    };
    if let Err(err) = state.axis.validate() {
        writeln!(out, "error: {err}")?;
        return Ok(());
    }

    let [w, h] = state.size;
    let mut canvas = Canvas::with_surface(w, h, SvgSurface::new(w, h, Some(BACKGROUND)));
    let grid = GridOptions {
        grid_size: NonZeroU32::new(w.min(h) / 10).unwrap_or(NonZeroU32::MIN),
        line_width: 0.5,
        color: Color::rgba(255, 255, 255, 24),
    };
    draw::setup_grid(&mut canvas, &grid)?;

    let space = coord::setup_coord(&canvas, &state.axis);
    space.setup(&mut canvas)?;
    let samples = space.draw(
        &mut canvas,
        fx,
        &CurveOptions {
            rate: state.rate,
            style: Style::stroke(Color::rgb(0xff, 0x55, 0x55)).with_line_width(2.0),
            label: Some(Label::from(format!("{name}(x)").as_str())),
        },
    )?;

    writeln!(
        out,
        "sampled {} points, dropped {}",
        samples.candidates,
        samples.dropped()
    )?;
    if let Some(peak) = samples.peak {
        writeln!(out, "highest point: {}", peak.math)?;
    }
    if samples.pixels.len() < 2 {
        writeln!(out, "note: too few valid samples to draw a curve")?;
    }

    let path = output_svg_filename(Local::now(), "plot");
    save_svg(&canvas.surface_mut()?.finish(), &path)?;
    info!(%path, "plot written");
    writeln!(out, "wrote {path}")?;
    Ok(())
}

fn bounce<R: BufRead, W: Write>(src: R, mut out: W, state: &State) -> anyhow::Result<()> {
    let prompt = "?frames (is 240) = ";
    let frames = match shell::read_fromstr::<_, _, u32>(src, &mut out, prompt, true)? {
        Ok(n) => n.unwrap_or(240),
        Err(_) => return Ok(()),
    };

    let [w, h] = state.size;
    let (wf, hf) = (Number::from(w), Number::from(h));
    let bounds = BoundingBox {
        w_box: [0.0, wf],
        h_box: [0.0, hf],
    };
    let damping = Damping {
        collision: 0.9,
        friction: 0.01,
    };
    let target_r = wf.min(hf) / 24.0;
    let mut ball = MovableCircle::new(
        Circle::new(wf / 2.0, hf / 2.0, 1.0),
        Velocity { vx: 9.0, vy: -6.5 },
    );
    let mut trail = vec![ball.center()];

    let mut seen = 0;
    let mut report_failed: Option<io::Error> = None;
    {
        let mut frame_loop = FrameLoop::new(Realtime::display());
        let _handle = frame_loop.start(|now| {
            seen += 1;
            ball.r = ease_step(ball.r, target_r, 0.1);
            ball.advance();
            motion::update_in_box(&mut ball, &bounds, Some(&damping));
            trail.push(ball.center());
            if seen % 60 == 0 {
                let report = writeln!(out, "  {now:>8.0} ms  at {}", ball.center())
                    .and_then(|()| out.flush());
                if let Err(err) = report {
                    report_failed = Some(err);
                    return Flow::Stop;
                }
            }
            if seen >= frames {
                Flow::Stop
            } else {
                Flow::Continue
            }
        });
        let ran = frame_loop.run();
        info!(ran, "bounce finished");
    }
    if let Some(err) = report_failed {
        return Err(err).context("failed to report animation progress");
    }

    let mut canvas = Canvas::with_surface(w, h, SvgSurface::new(w, h, Some(BACKGROUND)));
    let surface = canvas.surface_mut()?;
    draw::draw_rect(
        surface,
        0.5,
        0.5,
        wf - 1.0,
        hf - 1.0,
        &Style::stroke(Color::WHITE),
        Some(&[8.0, 4.0]),
    );

    let spiral: Vec<Point<Number>> = HelixPoints::new(
        &HelixOptions {
            count: 200,
            deg_start: 0.0,
            deg_end: 360.0 * 3.0,
            r_start: 0.0,
            r_end: wf.min(hf) / 3.0,
        },
        Point::new(wf / 2.0, hf / 2.0),
    )
    .collect();
    let mut gradient = |ev: SegmentEvent| {
        let c = Color::rgba(40, 80, 160, 160).lerp(Color::rgba(160, 40, 120, 160), ev.progress());
        Some(Style::stroke(c))
    };
    draw::draw_helix_curve(surface, &spiral, Some(&mut gradient));

    draw::draw_line(
        surface,
        &Style::stroke(Color::rgb(0x55, 0xff, 0x99))
            .with_fill(Color::WHITE)
            .with_font("14px monospace"),
        true,
        &trail,
    );
    draw::draw_cycle(
        surface,
        ball.x,
        ball.y,
        ball.r,
        &Style::fill(Color::rgb(0xff, 0xcc, 0x33)).with_stroke(Color::WHITE),
    );

    let path = output_svg_filename(Local::now(), "bounce");
    save_svg(&surface.finish(), &path)?;
    writeln!(out, "wrote {path}")?;
    Ok(())
}
