// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A keyboard walk across the bundled presentation.
//!
//! Opens a presentation-mode session, steps through every slide with
//! the right-arrow binding, and prints the viewport requests a host
//! would animate.
//!
//! Run:
//! - `cargo run -p headway_demos --example walkthrough`

use headway_canvas::{CanvasConfig, MetroCanvas};
use headway_content::{bundled_deck, bundled_topology};
use headway_nav::{NavKey, ViewportTarget};
use headway_store::MemoryStorage;
use headway_zoom::ZoomPresentation;

fn main() {
    env_logger::init();

    let mut canvas = MetroCanvas::new(
        bundled_deck(),
        bundled_topology(),
        MemoryStorage::new(),
        CanvasConfig::presentation(None),
    )
    .expect("in-memory storage never fails to open");

    // A presenter starts by clicking the first stop on the map.
    canvas.on_stop_clicked("metro-slide-01");
    report(&mut canvas);

    // Then drives the rest of the talk from the keyboard.
    loop {
        let before = canvas.nav().current_slide().map(String::from);
        canvas.on_key(NavKey::ArrowRight);
        if canvas.nav().current_slide().map(String::from) == before {
            break;
        }
        report(&mut canvas);
    }

    // Escape pulls back to the whole map.
    canvas.on_key(NavKey::Escape);
    for request in canvas.take_viewport_requests() {
        println!("  overview -> {:?} {:?}", request.target, request.options);
    }

    // As the camera animates out, zoom-gated detail fades off the map.
    println!();
    for zoom in [1.0, 0.7, 0.6, 0.5, 0.3] {
        let detail = ZoomPresentation::at(zoom, false, false);
        println!(
            "  zoom {zoom:.1}: detail opacity {:.2}, thumbnails x{:.2}{}",
            detail.opacity,
            detail.scale,
            if detail.visible { "" } else { "  (hidden)" },
        );
    }
}

fn report(canvas: &mut MetroCanvas<MemoryStorage>) {
    let Some(id) = canvas.nav().current_slide().map(String::from) else {
        return;
    };
    let section = canvas.nav().current_section().unwrap_or("?").to_string();
    let title = canvas
        .deck()
        .slide(&id)
        .map(|slide| slide.title.clone())
        .unwrap_or_default();
    println!("{id:>9}  [{section}]  {title}");

    for request in canvas.take_viewport_requests() {
        if let ViewportTarget::Slide(target) = &request.target {
            println!(
                "           fit {target} (padding {}, {} ms)",
                request.options.padding,
                request.options.duration_ms
            );
        }
    }
}
