// File: crates/window-demo/src/main.rs
// Summary: Windowed scatter viewer that renders scatter-core to a window via RGBA blit (CPU) using winit + softbuffer.
// Keys: x / y / s / o cycle the attribute bound to that channel, r resets the platform filter.
// Mouse: hover a point for its tooltip, left-click a legend entry to show only that platform.

use anyhow::{anyhow, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scatter_core::{Channel, ChartConfig, ChartController, RenderOptions};
use std::num::NonZeroU32;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let raw = std::env::args().nth(1).unwrap_or_else(|| "data/cpus.csv".to_string());
    let mut rng = StdRng::from_entropy();
    let mut chart = ChartController::from_csv_path(&raw, ChartConfig::default(), &mut rng)
        .with_context(|| format!("failed to load CSV '{raw}'"))?;
    let cfg = *chart.config();

    // Window + softbuffer setup; physical size keeps cursor and chart pixels 1:1
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title(&chart))
        .with_inner_size(winit::dpi::PhysicalSize::new(cfg.width as u32, cfg.height as u32))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e:?}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e:?}"))?;

    let opts = RenderOptions::default();
    let mut cursor: Option<(f64, f64)> = None;
    // Last rendered chart frame as 0RGB words; rebuilt only after a state change.
    let mut frame_cache: Option<Vec<u32>> = None;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(_) => window.request_redraw(),
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                    let before = chart.hovered();
                    chart.hover_at(position.x, position.y);
                    if chart.hovered() != before {
                        frame_cache = None;
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    if chart.hovered().is_some() {
                        chart.unhover();
                        frame_cache = None;
                        window.request_redraw();
                    }
                }
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    if let Some((x, y)) = cursor {
                        if let Some(platform) = chart.click_at(x as f32, y as f32) {
                            tracing::info!(%platform, "showing single platform");
                            frame_cache = None;
                            window.request_redraw();
                        }
                    }
                }
                WindowEvent::ReceivedCharacter(c) => {
                    let changed = match c.to_ascii_lowercase() {
                        'x' => cycle(&mut chart, Channel::X),
                        'y' => cycle(&mut chart, Channel::Y),
                        's' => cycle(&mut chart, Channel::Size),
                        'o' => cycle(&mut chart, Channel::Opacity),
                        'r' => {
                            chart.reset_platform();
                            true
                        }
                        _ => false,
                    };
                    if changed {
                        window.set_title(&title(&chart));
                        frame_cache = None;
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if frame_cache.is_none() {
                    match chart.render_to_rgba8(&opts) {
                        Ok((rgba, ..)) => frame_cache = Some(rgba_to_0rgb(&rgba)),
                        Err(e) => {
                            tracing::error!("render failed: {e:#}");
                            return;
                        }
                    }
                }
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else { return };
                if let Err(e) = surface.resize(w, h) {
                    tracing::error!("resize error: {e:?}");
                    return;
                }
                let Some(src) = frame_cache.as_deref() else { return };
                let mut frame = match surface.buffer_mut() {
                    Ok(frame) => frame,
                    Err(e) => {
                        tracing::error!("frame error: {e:?}");
                        return;
                    }
                };
                blit(&mut frame, size.width as usize, size.height as usize, src, cfg.width as usize, cfg.height as usize);
                if let Err(e) = frame.present() {
                    tracing::error!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}

fn cycle(chart: &mut ChartController, channel: Channel) -> bool {
    let next = chart.mapping().get(channel).next();
    chart.select(channel, next);
    tracing::info!(%channel, attribute = %next, "channel remapped");
    true
}

fn title(chart: &ChartController) -> String {
    let m = chart.mapping();
    format!("CPU Scatter: x={} y={} size={} opacity={}", m.x, m.y, m.size, m.opacity)
}

fn rgba_to_0rgb(rgba: &[u8]) -> Vec<u32> {
    rgba.chunks_exact(4)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}

/// Copy the chart frame into the top-left of the window buffer; the rest stays white.
fn blit(dst: &mut [u32], dst_w: usize, dst_h: usize, src: &[u32], src_w: usize, src_h: usize) {
    dst.fill(0x00ff_ffff);
    let w = dst_w.min(src_w);
    for y in 0..dst_h.min(src_h) {
        let d = y * dst_w;
        let s = y * src_w;
        if d + w > dst.len() || s + w > src.len() {
            break;
        }
        dst[d..d + w].copy_from_slice(&src[s..s + w]);
    }
}
