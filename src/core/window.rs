use crate::core::ballistics::SimulationState;

const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio
const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Axis spans for plotting a recorded trajectory: the data extent plus a
/// little padding, widened so the window is never narrower than 2:1. Keeps
/// flat drag trajectories from rendering as a sliver.
pub fn trajectory_axis_window(samples: &[SimulationState]) -> (f64, f64) {
    let raw_max_x = samples.iter().fold(0.0f64, |acc, s| acc.max(s.x_m));
    let raw_max_y = samples.iter().fold(0.0f64, |acc, s| acc.max(s.y_m));

    let x_pad = raw_max_x.max(1.0) * X_PADDING_RATIO;
    let y_pad = raw_max_y.max(1.0) * Y_PADDING_RATIO;

    let mut x_span = (raw_max_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x_m: f64, y_m: f64) -> SimulationState {
        SimulationState {
            x_m,
            y_m,
            vx_mps: 0.0,
            vy_mps: 0.0,
            time_s: 0.0,
        }
    }

    #[test]
    fn window_covers_the_data_with_padding() {
        let samples = [sample(0.0, 0.0), sample(4.0, 1.2), sample(10.0, 0.1)];
        let (x_span, y_span) = trajectory_axis_window(&samples);

        assert!(x_span > 10.0);
        assert!(y_span > 1.2);
    }

    #[test]
    fn window_keeps_the_minimum_aspect_ratio() {
        let samples = [sample(0.0, 0.0), sample(0.5, 0.2)];
        let (x_span, y_span) = trajectory_axis_window(&samples);

        assert!(x_span / y_span >= DISTANCE_TO_HEIGHT_RATIO - 1e-9);
        assert!(x_span >= 1.0 && y_span >= 1.0);
    }

    #[test]
    fn empty_input_still_yields_a_usable_window() {
        let (x_span, y_span) = trajectory_axis_window(&[]);

        assert!(x_span >= 1.0 && y_span >= 1.0);
    }
}
