//! `recenter plan`: preview where a window would be snapped.

use std::str::FromStr;

use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::cli::output::print_highlighted_json;
use crate::config::{self, clamp_margin};
use crate::error::RecenterError;
use crate::snap::{Rect, plan_frame, to_accessibility};

/// A rectangle given on the command line as `X,Y,W,H`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameArg(pub Rect);

impl FromStr for FrameArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| format!("Invalid frame '{s}'. Expected four numbers: X,Y,W,H"))?;

        let [x, y, width, height] = values[..] else {
            return Err(format!("Invalid frame '{s}'. Expected four numbers: X,Y,W,H"));
        };

        if values.iter().any(|value| !value.is_finite()) {
            return Err(format!("Invalid frame '{s}'. Values must be finite"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(format!("Invalid frame '{s}'. Width and height must be positive"));
        }

        Ok(Self(Rect::new(x, y, width, height)))
    }
}

/// Arguments for `recenter plan`.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Visible frame of the screen in display coordinates (bottom-left origin).
    #[arg(long, short, value_name = "X,Y,W,H", allow_hyphen_values = true)]
    pub frame: FrameArg,

    /// Horizontal margin in points. Defaults to the configured margin.
    #[arg(long, short, value_name = "PX")]
    pub margin: Option<f64>,

    /// Top edge (maxY) of the primary display. When given, the frame is also
    /// printed in accessibility coordinates (top-left origin).
    #[arg(long, value_name = "Y")]
    pub primary_max_y: Option<f64>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// The computed plan, ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub visible_frame: Rect,
    pub horizontal_margin: f64,
    pub frame: Rect,
    pub accessibility_frame: Option<Rect>,
}

impl Plan {
    #[must_use]
    pub fn compute(visible_frame: Rect, horizontal_margin: f64, primary_max_y: Option<f64>) -> Self {
        let horizontal_margin = clamp_margin(horizontal_margin);
        let frame = plan_frame(visible_frame, horizontal_margin);
        Self {
            visible_frame,
            horizontal_margin,
            frame,
            accessibility_frame: primary_max_y.map(|max_y| to_accessibility(frame, max_y)),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "visibleFrame": self.visible_frame,
            "horizontalMargin": self.horizontal_margin,
            "frame": self.frame,
            "accessibilityFrame": self.accessibility_frame,
        })
    }
}

/// Execute the plan command.
///
/// # Errors
///
/// Currently infallible; returns `Result` for a uniform command signature.
#[allow(clippy::unnecessary_wraps)]
pub fn execute(args: &PlanArgs) -> Result<(), RecenterError> {
    let margin = args.margin.unwrap_or_else(|| config::get_config().horizontal_margin());
    let plan = Plan::compute(args.frame.0, margin, args.primary_max_y);

    if args.json {
        print_highlighted_json(&plan.to_json());
        return Ok(());
    }

    println!("{:<20}{}", "Visible frame".bold(), plan.visible_frame);
    println!("{:<20}{} px", "Horizontal margin".bold(), plan.horizontal_margin);
    println!("{:<20}{}", "Planned frame".bold(), plan.frame.to_string().green());
    if let Some(ax_frame) = plan.accessibility_frame {
        println!("{:<20}{}", "Accessibility frame".bold(), ax_frame.to_string().cyan());
    }

    Ok(())
}
