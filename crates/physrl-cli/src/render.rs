//! Terminal rendering of discretization results

use std::fmt::Write;

use physrl_core::{Dimension, DiscretizeResponse, StateVector};

/// Width of a full bar in characters
pub const BAR_WIDTH: usize = 40;

/// Fill ratio of a bar: `index / (count - 1)`, clamped to `[0, 1]`.
///
/// A dimension with one bin (or none) has nothing to scale against and
/// renders empty.
pub fn bar_ratio(index: i64, count: i64) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    (index as f64 / (count - 1) as f64).clamp(0.0, 1.0)
}

pub fn render_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn format_hint(dim: Dimension) -> String {
    let (low, high) = dim.range_hint();
    format!("[{low:?}, {high:?}]")
}

fn format_state(state: &StateVector) -> String {
    let values: Vec<String> = state.as_array().iter().map(ToString::to_string).collect();
    format!("[{}]", values.join(", "))
}

fn format_tuple(values: &[i64]) -> String {
    let values: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("({})", values.join(", "))
}

/// Render a response as a table with one bar per dimension.
///
/// Each row reads `index / last_index`, the same scale the bar is drawn on.
pub fn render_result(response: &DiscretizeResponse) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Discretized State");
    let _ = writeln!(out, "=================\n");

    if !response.success {
        let reason = response.error.as_deref().unwrap_or("no reason given");
        let _ = writeln!(out, "Backend reported failure: {reason}");
        return out;
    }

    for (dim, index, count) in response.bins() {
        let _ = writeln!(
            out,
            "{:<22} {:<16} {:>3} / {:<3} {}",
            dim.label(),
            format_hint(dim),
            index,
            count - 1,
            render_bar(bar_ratio(index, count), BAR_WIDTH)
        );
    }

    let _ = writeln!(out, "\nDiscretized:  {}", format_tuple(&response.discretized));
    let _ = writeln!(out, "State shape:  {}", format_tuple(&response.state_shape));
    if let Some(state) = &response.original_state {
        let _ = writeln!(out, "Input state:  {}", format_state(state));
    }

    out
}

/// Render the list of dimensions with their display hints
pub fn render_dimensions() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{:<6} {:<22} {:<18} {:<16}", "INDEX", "DIMENSION", "QUERY KEY", "RANGE");
    let _ = writeln!(out, "{}", "-".repeat(64));
    for dim in Dimension::ALL {
        let _ = writeln!(
            out,
            "{:<6} {:<22} {:<18} {:<16}",
            dim.index(),
            dim.label(),
            dim.query_key(),
            format_hint(dim)
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered() -> DiscretizeResponse {
        DiscretizeResponse {
            success: true,
            discretized: vec![10, 10, 10, 10],
            state_shape: vec![20, 20, 20, 20],
            original_state: Some(StateVector::default()),
            error: None,
        }
    }

    #[test]
    fn test_bar_ratio() {
        assert_eq!(bar_ratio(0, 20), 0.0);
        assert_eq!(bar_ratio(19, 20), 1.0);
        assert_eq!(bar_ratio(5, 11), 0.5);
    }

    #[test]
    fn test_bar_ratio_degenerate_shape() {
        assert_eq!(bar_ratio(0, 1), 0.0);
        assert_eq!(bar_ratio(3, 0), 0.0);
        // index beyond the last bin still renders a full bar
        assert_eq!(bar_ratio(25, 20), 1.0);
        assert_eq!(bar_ratio(-1, 0), 0.0);
        assert_eq!(bar_ratio(-1, 20), 0.0);
    }

    #[test]
    fn test_render_zero_bin_reply() {
        let response = DiscretizeResponse {
            success: true,
            discretized: vec![-1, -1, -1, -1],
            state_shape: vec![0, 0, 0, 0],
            original_state: Some(StateVector::default()),
            error: None,
        };
        let out = render_result(&response);

        assert!(out.contains("Discretized:  (-1, -1, -1, -1)"));
        assert!(out.contains("State shape:  (0, 0, 0, 0)"));
        assert!(out.contains(&render_bar(0.0, BAR_WIDTH)));
    }

    #[test]
    fn test_render_bar() {
        assert_eq!(render_bar(0.0, 4), "░░░░");
        assert_eq!(render_bar(0.5, 4), "██░░");
        assert_eq!(render_bar(1.0, 4), "████");
        assert_eq!(render_bar(0.5, BAR_WIDTH).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_render_result_lists_every_dimension() {
        let out = render_result(&centered());

        for dim in Dimension::ALL {
            assert!(out.contains(dim.label()), "missing {dim}");
        }
        assert!(out.contains("10 / 19"));
        assert!(!out.contains("10 / 20"));
        assert!(out.contains("Discretized:  (10, 10, 10, 10)"));
        assert!(out.contains("State shape:  (20, 20, 20, 20)"));
        assert!(out.contains("Input state:  [0, 0, 0, 0]"));
    }

    #[test]
    fn test_render_result_without_echo() {
        let mut response = centered();
        response.original_state = None;
        let out = render_result(&response);
        assert!(!out.contains("Input state"));
    }

    #[test]
    fn test_render_unsuccessful_body() {
        let response = DiscretizeResponse {
            success: false,
            discretized: Vec::new(),
            state_shape: Vec::new(),
            original_state: None,
            error: Some("Invalid JSON".to_string()),
        };
        let out = render_result(&response);
        assert!(out.contains("Backend reported failure: Invalid JSON"));
    }

    #[test]
    fn test_render_dimensions() {
        let out = render_dimensions();
        assert!(out.contains("angular_velocity"));
        assert!(out.contains("[-0.418, 0.418]"));
        assert!(out.contains("[-4.8, 4.8]"));
    }
}
