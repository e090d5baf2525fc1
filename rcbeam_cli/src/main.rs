//! # RcBeam CLI Application
//!
//! Terminal front end for the NDT beam assessment engine. Collects the
//! six inputs and the steel grade, then runs the pipeline exactly once
//! and prints both a human-readable report and its JSON form.
//!
//! The regression artifact is loaded once at startup into a
//! process-wide cell; a load failure is fatal since no assessment is
//! possible without it. Pass an alternative artifact path as the first
//! argument.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use once_cell::sync::OnceCell;

use rcbeam_core::calculations::moment::NEUTRAL_AXIS_NOTE;
use rcbeam_core::calculations::{assess, AssessmentInput, InspectionReading, SectionInput};
use rcbeam_core::materials::SteelGrade;
use rcbeam_core::{CalcError, CapacityCheck, StrengthPredictor};

/// Artifact location when no path argument is given
const DEFAULT_MODEL_PATH: &str = "rcbeam_core/assets/fck_model.json";

/// Loaded once at startup, shared read-only for the process lifetime.
static PREDICTOR: OnceCell<StrengthPredictor> = OnceCell::new();

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

/// Prompt for a value and clamp it to the documented input bounds,
/// noting when a reading had to be clamped.
fn prompt_bounded(prompt: &str, default: f64, min: f64, max: f64) -> f64 {
    let value = prompt_f64(prompt, default);
    let clamped = value.clamp(min, max);
    if clamped != value {
        if max.is_infinite() {
            println!("  (clamped {} to {} - minimum is {})", value, clamped, min);
        } else {
            println!(
                "  (clamped {} to {} - allowed range is [{}, {}])",
                value, clamped, min, max
            );
        }
    }
    clamped
}

fn prompt_grade(default: SteelGrade) -> SteelGrade {
    println!("Grade of steel:");
    for (i, grade) in SteelGrade::ALL.iter().enumerate() {
        println!("  {}) {}", i + 1, grade);
    }
    print!("Select [1-3] or type grade [{}]: ", default);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }
    let trimmed = input.trim();

    match trimmed {
        "" => default,
        "1" => SteelGrade::Fe250,
        "2" => SteelGrade::Fe415,
        "3" => SteelGrade::Fe500,
        other => other.parse().unwrap_or_else(|_| {
            println!("  (unrecognized grade '{}', using {})", other, default);
            default
        }),
    }
}

fn print_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(&e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    println!("RcBeam CLI - RC Beam NDT Assessment");
    println!("===================================");
    println!();
    println!("Applicable ONLY for singly reinforced rectangular RC beams");
    println!("as per IS 456:2000 Annex G (Clause G-1.1(b)).");
    println!();

    let model_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());

    let predictor = match StrengthPredictor::load(&model_path) {
        Ok(p) => p,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };
    // First and only install for this process.
    let predictor = PREDICTOR.get_or_init(|| predictor);
    println!("Loaded strength model: {}", model_path);
    println!();

    let (rn_min, rn_max) = InspectionReading::REBOUND_RANGE;
    let (upv_min, upv_max) = InspectionReading::VELOCITY_RANGE;

    let rebound_number = prompt_bounded("Rebound Number (RN) [35.0]: ", 35.0, rn_min, rn_max);
    let pulse_velocity_kms =
        prompt_bounded("UPV (km/s) [4.0]: ", 4.0, upv_min, upv_max);
    let width_mm =
        prompt_bounded("Beam width b (mm) [300.0]: ", 300.0, 150.0, f64::INFINITY);
    let effective_depth_mm =
        prompt_bounded("Effective depth d (mm) [500.0]: ", 500.0, 200.0, f64::INFINITY);
    let steel_area_mm2 = prompt_bounded(
        "Area of tension steel Ast (mm²) [1500.0]: ",
        1500.0,
        1.0,
        f64::INFINITY,
    );
    let steel_grade = prompt_grade(SteelGrade::Fe415);

    let input = AssessmentInput {
        reading: InspectionReading {
            rebound_number,
            pulse_velocity_kms,
        },
        section: SectionInput {
            label: "CLI".to_string(),
            width_mm,
            effective_depth_mm,
            steel_area_mm2,
            steel_grade,
        },
    };

    println!();
    println!("Calculating...");
    println!();

    match assess(&input, predictor) {
        Ok(report) => {
            println!("═══════════════════════════════════════");
            println!("  BEAM ASSESSMENT RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  RN:       {:.1}", rebound_number);
            println!("  UPV:      {:.2} km/s", pulse_velocity_kms);
            println!("  Section:  b={:.0} mm, d={:.0} mm", width_mm, effective_depth_mm);
            println!("  Steel:    Ast={:.0} mm², {}", steel_area_mm2, steel_grade);
            println!();
            println!("Predicted Concrete Strength fck = {:.2} MPa", report.fck_mpa);
            println!("Concrete Quality (IS 13311): {}", report.quality);
            println!();
            match &report.capacity {
                CapacityCheck::Admissible { mu_knm, .. } => {
                    println!("Ultimate Moment Capacity Mu = {:.2} kN·m", mu_knm);
                    println!();
                    println!("{}", NEUTRAL_AXIS_NOTE);
                }
                CapacityCheck::RedesignRequired { tension_ratio } => {
                    println!("Section exceeds singly reinforced limit (ratio = {:.2}).", tension_ratio);
                    println!("Redesign required as per IS 456:2000.");
                }
            }
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for programmatic use):");
            if let Ok(json) = serde_json::to_string_pretty(&report) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}
