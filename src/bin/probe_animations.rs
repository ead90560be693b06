use framegen::{get_animation, AnimationKind, AnimationOptions};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;

/// Outcome of rendering the first frame of an animation
enum Probe {
    Rendered { tag: String, kind: &'static str, elements: usize, elapsed: Duration },
    Invalid(String),
    Panicked,
}

fn probe(kind: AnimationKind, options: &AnimationOptions) -> Probe {
    let result = catch_unwind(AssertUnwindSafe(|| -> framegen::Result<Option<_>> {
        let mut animation = get_animation(kind, options)?;
        let started = Instant::now();
        animation.start();
        let Some(frame) = animation.schedule().iter().next() else {
            return Ok(None);
        };
        let payload = animation.render_frame(frame);
        Ok(Some((animation.tag().to_string(), payload.kind_name(), payload.element_count(), started.elapsed())))
    }));

    match result {
        Ok(Ok(Some((tag, kind, elements, elapsed)))) => Probe::Rendered { tag, kind, elements, elapsed },
        Ok(Ok(None)) => Probe::Invalid("empty schedule".to_string()),
        Ok(Err(e)) => Probe::Invalid(e.to_string()),
        Err(_) => Probe::Panicked,
    }
}

/// Whether a panicking animation can be caught and reported, rather than aborting the process
fn panics_reported() -> bool {
    cfg!(panic = "unwind")
}

fn main() {
    // Small sizes unless asked otherwise, the defaults take a while in debug builds
    let full = std::env::args().any(|arg| arg == "--full");
    let options = if full {
        AnimationOptions { seed: Some(1), ..Default::default() }
    } else {
        AnimationOptions {
            width: Some(64),
            height: Some(64),
            samples: Some(100),
            depth: Some(3),
            particles: Some(1000),
            seed: Some(1),
            ..Default::default()
        }
    };

    if panics_reported() {
        // Panics are reported in the summary instead
        std::panic::set_hook(Box::new(|_| {}));
    } else {
        println!("note: this build aborts on panic, a panicking animation stops the probe (use --release)");
    }

    let size = if full { "full" } else { "reduced" };
    println!("\nProbing {} animations ({size} size)\n", AnimationKind::iter().count());
    let mut working = Vec::new();
    let mut broken = Vec::new();

    for kind in AnimationKind::iter() {
        match probe(kind, &options) {
            Probe::Rendered { tag, kind: payload, elements, elapsed } => {
                println!("{kind:20} {tag:32} {payload:9} {elements:>10} {elapsed:>12.2?}");
                working.push(kind);
            }
            Probe::Invalid(reason) => broken.push((kind, reason)),
            Probe::Panicked => broken.push((kind, "panicked".to_string())),
        }
    }

    if panics_reported() {
        let _ = std::panic::take_hook();
    }

    println!("\n=== RESULTS ===");
    println!("Working animations: {} / {}", working.len(), working.len() + broken.len());
    if !broken.is_empty() {
        println!("\n=== BROKEN ANIMATIONS ({}) ===", broken.len());
        for (kind, reason) in broken.iter() {
            println!("  - {kind}: {reason}");
        }
    }
}
