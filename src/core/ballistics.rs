pub const EARTH_GRAVITY_MPS2: f64 = 9.8;
pub const SEA_LEVEL_AIR_DENSITY_KG_M3: f64 = 1.225;

/// Hard ceiling on recorded samples. A step size too fine to reach the
/// ground within this budget stops here instead of looping on; the
/// collector reports hitting the cap as an error.
pub const MAX_SIM_STEPS: usize = 1_000_000;

#[derive(Clone, Copy, Debug)]
pub struct DragParameters {
    pub time_step_s: f64,
    pub gravity_mps2: f64,
    pub mass_kg: f64,
    pub area_m2: f64,
    pub air_density_kg_m3: f64,
    pub drag_coefficient: f64,
}

impl DragParameters {
    /// Parameters for a round-section body launched at sea level on Earth,
    /// with the default 0.01 s step.
    pub fn round_body(mass_kg: f64, radius_m: f64, drag_coefficient: f64) -> Self {
        Self {
            time_step_s: 0.01,
            gravity_mps2: EARTH_GRAVITY_MPS2,
            mass_kg,
            area_m2: std::f64::consts::PI * radius_m * radius_m,
            air_density_kg_m3: SEA_LEVEL_AIR_DENSITY_KG_M3,
            drag_coefficient,
        }
    }

    pub fn validated(self) -> Result<Self, String> {
        let fields = [
            ("time step", self.time_step_s),
            ("gravity", self.gravity_mps2),
            ("mass", self.mass_kg),
            ("area", self.area_m2),
            ("air density", self.air_density_kg_m3),
            ("drag coefficient", self.drag_coefficient),
        ];
        for (label, value) in fields {
            if !value.is_finite() {
                return Err(format!("Invalid {label}: {value}. Must be finite."));
            }
        }
        for (label, value) in &fields[..4] {
            if *value <= 0.0 {
                return Err(format!(
                    "Invalid {label}: {value}. Must be strictly positive."
                ));
            }
        }
        if self.air_density_kg_m3 < 0.0 {
            return Err(format!(
                "Invalid air density: {}. Cannot be negative.",
                self.air_density_kg_m3
            ));
        }
        if self.drag_coefficient < 0.0 {
            return Err(format!(
                "Invalid drag coefficient: {}. Cannot be negative.",
                self.drag_coefficient
            ));
        }
        Ok(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationState {
    pub x_m: f64,
    pub y_m: f64,
    pub vx_mps: f64,
    pub vy_mps: f64,
    pub time_s: f64,
}

impl SimulationState {
    fn launched(vx_mps: f64, vy_mps: f64) -> Self {
        Self {
            x_m: 0.0,
            y_m: 0.0,
            vx_mps,
            vy_mps,
            time_s: 0.0,
        }
    }

    pub fn speed_mps(&self) -> f64 {
        ((self.vx_mps * self.vx_mps) + (self.vy_mps * self.vy_mps)).sqrt()
    }
}

/// One semi-implicit Euler step: velocity first, then position from the
/// already-updated velocity. Drag opposes the velocity vector on both axes;
/// gravity acts only vertically.
fn step(params: DragParameters, state: &mut SimulationState) {
    let dt = params.time_step_s;
    let v = state.speed_mps();

    let drag_force_n =
        0.5 * params.air_density_kg_m3 * params.drag_coefficient * params.area_m2 * v * v;

    // Exact zero check, matching the reference recurrence. A motionless body
    // has no drag, so both components are zero.
    let (ax_drag, ay_drag) = if v != 0.0 {
        let decel = drag_force_n / params.mass_kg;
        (-decel * (state.vx_mps / v), -decel * (state.vy_mps / v))
    } else {
        (0.0, 0.0)
    };

    let ax = ax_drag;
    let ay = ay_drag - params.gravity_mps2;

    state.vx_mps += ax * dt;
    state.vy_mps += ay * dt;
    state.x_m += state.vx_mps * dt;
    state.y_m += state.vy_mps * dt;
    state.time_s += dt;
}

/// Lazy sample sequence for one launch. Yields the current state, then
/// advances it, so the first sample is always the launch state at t = 0 and
/// no sample with y below ground is ever yielded.
#[derive(Debug)]
pub struct TrajectoryIter {
    params: DragParameters,
    state: SimulationState,
    steps_taken: usize,
}

impl Iterator for TrajectoryIter {
    type Item = SimulationState;

    fn next(&mut self) -> Option<SimulationState> {
        if self.state.y_m < 0.0 || self.steps_taken >= MAX_SIM_STEPS {
            return None;
        }
        let sample = self.state;
        step(self.params, &mut self.state);
        self.steps_taken += 1;
        Some(sample)
    }
}

/// Builds a fresh trajectory iterator. Each call restarts from the launch
/// state; parameter validation happens here, before any stepping.
pub fn trajectory(
    params: DragParameters,
    vx0_mps: f64,
    vy0_mps: f64,
) -> Result<TrajectoryIter, String> {
    let params = params.validated()?;
    if !vx0_mps.is_finite() || !vy0_mps.is_finite() {
        return Err(format!(
            "Initial velocity must be finite, got ({vx0_mps}, {vy0_mps})."
        ));
    }
    Ok(TrajectoryIter {
        params,
        state: SimulationState::launched(vx0_mps, vy0_mps),
        steps_taken: 0,
    })
}

/// Runs one launch to ground contact and collects every recorded sample.
pub fn simulate_trajectory(
    params: DragParameters,
    vx0_mps: f64,
    vy0_mps: f64,
) -> Result<Vec<SimulationState>, String> {
    let samples: Vec<SimulationState> = trajectory(params, vx0_mps, vy0_mps)?.collect();
    if samples.len() >= MAX_SIM_STEPS {
        return Err(format!(
            "Simulation did not land within {MAX_SIM_STEPS} steps. Check your parameters."
        ));
    }
    Ok(samples)
}

/// Flight time and horizontal range of a recorded trajectory, read off the
/// last sample. A run always records at least the launch sample.
pub fn flight_time_and_range(samples: &[SimulationState]) -> (f64, f64) {
    match samples.last() {
        Some(last) => (last.time_s, last.x_m),
        None => (0.0, 0.0),
    }
}
