//! # CeilSpan CLI Application
//!
//! Terminal front-end for the ceiling spacing engine. Holds the input
//! state, runs the pipeline once per invocation, and renders the result;
//! all decision logic lives in ceiling_core.

use std::io::{self, BufRead, Write};

use ceiling_core::ceiling::{calculate, CeilingInput};
use ceiling_core::loads::{AssemblyConfig, CloudClass, CloudInventory, MountMode};
use ceiling_core::spacing::SpacingConstraints;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_f64(prompt, default as f64) as u32
}

fn prompt_yes_no(prompt: &str, default: bool) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

fn main() {
    println!("CeilSpan CLI - Suspended Ceiling Fastener Spacing");
    println!("=================================================");
    println!();

    let area_sqft = prompt_f64("Ceiling area (ft²) [600.0]: ", 600.0);
    let board = prompt_yes_no("Include board layer? (y/n) [y]: ", true);
    let board_load = prompt_f64("Board layer load (psf) [2.5]: ", 2.5);
    let finish_count = prompt_u32("Number of finish layers [2]: ", 2);
    let finish_load = prompt_f64("Load per finish layer (psf) [0.55]: ", 0.55);
    let insulation = prompt_f64("Insulation load (psf) [0.5]: ", 0.5);
    let misc = prompt_f64("Misc distributed load (psf) [0.0]: ", 0.0);

    println!();
    let cloud_counts: Vec<u32> = CloudClass::ALL
        .iter()
        .map(|class| prompt_u32(&format!("{} count [0]: ", class.description()), 0))
        .collect();
    let mut clouds = CloudInventory::new();
    for (class, count) in CloudClass::ALL.iter().zip(cloud_counts) {
        clouds.set_count(*class, count);
    }

    let dedicated = prompt_yes_no("Dedicated fasteners per cloud? (y/n) [n]: ", false);
    let constrained = prompt_yes_no("Constrain clips to structure spacing? (y/n) [n]: ", false);
    let structure_spacing = if constrained {
        prompt_f64("Structure spacing (in) [48.0]: ", 48.0)
    } else {
        48.0
    };

    let input = CeilingInput {
        label: "CLI-Demo".to_string(),
        area_sqft,
        assembly: AssemblyConfig {
            include_board_layer: board,
            board_load_psf: board_load,
            finish_layer_count: finish_count,
            finish_layer_load_psf: finish_load,
            insulation_load_psf: insulation,
            misc_load_psf: misc,
        },
        clouds,
        mount: if dedicated {
            MountMode::Dedicated
        } else {
            MountMode::Distributed
        },
        constraints: SpacingConstraints {
            channel_spacings_in: vec![12.0, 16.0, 24.0],
            clip_spacings_in: vec![24.0, 32.0, 36.0, 48.0],
            constrain_to_structure: constrained,
            structure_spacing_in: structure_spacing,
        },
    };

    println!();
    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  CEILING SPACING RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Grid load: {:.2} psf over {:.0} ft²", result.grid_load_psf, area_sqft);
            println!();
            println!("Combinations (widest first):");
            for combo in &result.combinations {
                println!(
                    "  {:>4.0}\" x {:>4.0}\"  trib {:>5.2} ft²  load {:>6.2} lb  {}",
                    combo.channel_spacing_in,
                    combo.clip_spacing_in,
                    combo.tributary_sqft,
                    combo.load_per_fastener_lb,
                    status_icon(combo.passes)
                );
            }
            println!();
            println!("Recommendation: {}", result.summary());
            println!();
            println!("Fasteners:");
            println!("  Grid:      {}", result.fastening.grid_fastener_count);
            println!("  Dedicated: {}", result.fastening.dedicated_fastener_count);
            println!("  Total:     {}", result.fastening.total_fastener_count);

            if !result.dedicated_checks.is_empty() {
                println!();
                println!("Dedicated mount checks (4 fasteners per cloud):");
                for check in &result.dedicated_checks {
                    println!(
                        "  {:<20} {:>5.2} lb/fastener  {}",
                        check.class.description(),
                        check.per_fastener_load_lb,
                        status_icon(check.passes)
                    );
                }
            }

            println!();
            println!("═══════════════════════════════════════");
            println!(
                "  RESULT: {}",
                if result.passes() { "PASS" } else { "FAIL" }
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
