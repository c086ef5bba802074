//! Plain-text report for the CLI. Presentation only: every number here
//! comes straight out of the generated plan.

use std::fmt::Write;

use crate::compliance::Severity;
use crate::config::PlanConfig;
use crate::PlanResult;

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Good => "[ok]",
        Severity::Acceptable => "[~ ]",
        Severity::Poor => "[!!]",
    }
}

/// Render a human-readable summary of a generated plan
pub fn render_report(config: &PlanConfig, result: &PlanResult) -> String {
    let mut out = String::new();

    writeln!(out, "VASTU PLAN").unwrap();
    writeln!(out, "==========").unwrap();
    writeln!(
        out,
        "Plot {}x{} ft, facing {}, {} floor(s)",
        config.plot_width, config.plot_depth, config.facing, config.floors
    )
    .unwrap();
    writeln!(
        out,
        "Envelope {}x{} ft (setbacks: front {}, rear {}, sides {}/{})",
        result.envelope.width,
        result.envelope.depth,
        result.setbacks.front,
        result.setbacks.rear,
        result.setbacks.left,
        result.setbacks.right
    )
    .unwrap();
    writeln!(
        out,
        "Road edge: {}  Rear edge: {}",
        result.side_labels.bottom, result.side_labels.top
    )
    .unwrap();

    for floor in &result.floors {
        writeln!(out).unwrap();
        writeln!(out, "{}", floor.label).unwrap();
        writeln!(out, "{}", "-".repeat(floor.label.len())).unwrap();
        for room in &floor.rooms {
            let mut flags = Vec::new();
            if room.is_wet {
                flags.push("wet");
            }
            if room.is_open {
                flags.push("open");
            }
            if room.is_outside {
                flags.push("outside");
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };
            writeln!(
                out,
                "  {:<18} {:>4} zone  {:>5.1} x {:<5.1} ft at ({:.1}, {:.1}){}",
                room.name,
                room.zone.label(),
                room.rect.width,
                room.rect.height,
                room.rect.x,
                room.rect.y,
                flags
            )
            .unwrap();
        }
        writeln!(
            out,
            "  {} door(s), {} window(s)",
            floor.doors.len(),
            floor.windows.len()
        )
        .unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "Compliance: {}/100", result.compliance.score).unwrap();
    for finding in &result.compliance.findings {
        writeln!(out, "  {} {}", severity_marker(finding.severity), finding.message).unwrap();
    }

    out
}
