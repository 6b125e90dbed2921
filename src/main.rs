//! Bounce Ray entry point
//!
//! Loads a scene file, traces either one ray from the command line or every
//! ray the scene lists, and prints the resulting paths.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use bounce_ray::{BouncePath, BounceTracer, LayerMask, Scene, SceneFile};
use cli::Args;

fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    let file = match SceneFile::load(&args.scene) {
        Ok(file) => file,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let settings = file
        .settings
        .override_budget(args.budget)
        .override_layers(args.layers.map(LayerMask))
        .override_max_bounces(args.max_bounces);
    if let Err(e) = settings.validate() {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }

    let rays = args.rays(&file.rays);
    if rays.is_empty() {
        log::warn!("Scene has no rays; pass --origin and --direction to trace one");
    }

    let tracer = BounceTracer::new(&file.scene).with_max_bounces(settings.max_bounces);
    let paths: Vec<BouncePath> = rays
        .iter()
        .map(|ray| tracer.trace(ray.origin, ray.direction, settings.budget, settings.layers))
        .collect();

    if args.json {
        match serde_json::to_string_pretty(&paths) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Failed to serialize paths: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        for (i, path) in paths.iter().enumerate() {
            print_path(i, path, &file.scene);
        }
    }

    ExitCode::SUCCESS
}

fn print_path(index: usize, path: &BouncePath, scene: &Scene) {
    println!(
        "ray {}: from ({:.3}, {:.3}), {} bounce(s), length {:.3}",
        index,
        path.origin.x,
        path.origin.y,
        path.bounce_count(),
        path.length()
    );
    for hit in &path.contacts {
        let label = scene.collider(hit.collider).map_or("?", |c| c.label());
        println!(
            "  hit {} at ({:.3}, {:.3}) normal ({:.3}, {:.3})",
            label, hit.point.x, hit.point.y, hit.normal.x, hit.normal.y
        );
    }
    match path.terminal_point() {
        Some(end) => println!("  end at ({:.3}, {:.3})", end.x, end.y),
        None => println!("  no travel (budget spent)"),
    }
    println!(
        "  final direction ({:.3}, {:.3})",
        path.final_direction.x, path.final_direction.y
    );
}
