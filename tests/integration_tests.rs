use approx::assert_relative_eq;
use rocket_engine_simulation::{
    errors::SimulationError, EngineConstants, PerformanceReport, RocketEngine, SimulationConfig,
    BURN_TIME, CHAMBER_PRESSURE,
};

// Helper function to create the default fixed-nozzle engine
fn fixed_engine(constants: &EngineConstants) -> RocketEngine<'_> {
    RocketEngine::fixed(constants, 0.1).expect("default fixed engine should be valid")
}

#[test]
fn test_scenario_a_full_burn_fixed_nozzle() {
    println!("INTEGRATION TEST: Full burn with fixed nozzle");

    let constants = EngineConstants::default();
    let engine = fixed_engine(&constants);
    let run = engine
        .simulate(CHAMBER_PRESSURE, BURN_TIME)
        .expect("default run should be accepted");

    assert_eq!(run.trace.len(), 121, "one entry per second including t = 0");

    let expected_times: Vec<f64> = (0..=120).map(|t| t as f64).collect();
    assert_eq!(run.trace.times(), expected_times);

    let pressures = run.trace.pressures();
    assert_ne!(pressures[0], CHAMBER_PRESSURE);
    for window in pressures.windows(2) {
        assert_ne!(
            window[0], window[1],
            "chamber pressure should change every step"
        );
    }

    assert!(run.is_healthy());
    assert_relative_eq!(run.final_chamber_pressure, 5_820.550143, max_relative = 1e-6);
    println!(
        "Final chamber pressure: {:.2} Pa, exit velocity: {:.2} m/s",
        run.final_chamber_pressure, run.final_exit_velocity
    );
}

#[test]
fn test_scenario_b_zero_burn_time() {
    let constants = EngineConstants::default();
    let engine = fixed_engine(&constants);
    let run = engine.simulate(CHAMBER_PRESSURE, 0.0).unwrap();

    assert_eq!(run.trace.len(), 1);
    let point = run.trace.points()[0];
    assert_eq!(point.time, 0.0);
    assert_eq!(
        point.chamber_pressure,
        CHAMBER_PRESSURE + engine.pressure_delta(CHAMBER_PRESSURE, 0.1)
    );
}

#[test]
fn test_negative_burn_time_never_produces_a_trace() {
    let constants = EngineConstants::default();
    let engine = fixed_engine(&constants);

    match engine.simulate(CHAMBER_PRESSURE, -1.0) {
        Err(SimulationError::InvalidConfiguration { parameter, .. }) => {
            assert_eq!(parameter, "burn_time")
        }
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_runs_are_deterministic() {
    let constants = EngineConstants::default();

    for engine in [
        fixed_engine(&constants),
        RocketEngine::variable(&constants).unwrap(),
    ] {
        let first = engine.simulate(CHAMBER_PRESSURE, BURN_TIME).unwrap();
        let second = engine.simulate(CHAMBER_PRESSURE, BURN_TIME).unwrap();

        let first_bits: Vec<u64> = first.trace.pressures().iter().map(|p| p.to_bits()).collect();
        let second_bits: Vec<u64> = second.trace.pressures().iter().map(|p| p.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }
}

#[test]
fn test_variable_nozzle_run_surfaces_domain_fault() {
    println!("INTEGRATION TEST: Variable nozzle divergence");

    let constants = EngineConstants::default();
    let engine = RocketEngine::variable(&constants).unwrap();
    let run = engine.simulate(CHAMBER_PRESSURE, BURN_TIME).unwrap();

    // The loop is bounded regardless of numerical health.
    assert_eq!(run.trace.len(), 121);

    let fault = run.trace.first_fault().expect("variable run should leave the domain");
    assert_eq!(fault.time, 13.0);
    assert!(fault.chamber_pressure < 0.0);

    let after = run.trace.points()[14];
    assert!(after.chamber_pressure.is_nan(), "NaN should flow through the trace");
    assert!(run.final_chamber_pressure.is_nan());
    assert!(run.final_exit_velocity.is_nan());

    match run.ensure_healthy() {
        Err(SimulationError::DomainFault { time, .. }) => assert_eq!(time, 13.0),
        other => panic!("expected domain fault, got {:?}", other),
    }
}

#[test]
fn test_variable_nozzle_healthy_prefix_matches_mapper() {
    let constants = EngineConstants::default();
    let engine = RocketEngine::variable(&constants).unwrap();
    let run = engine.simulate(CHAMBER_PRESSURE, 2.0).unwrap();
    let points = run.trace.points();

    // First step starts at the setpoint, so it matches the fixed nozzle at minimum diameter.
    let fixed = fixed_engine(&constants).simulate(CHAMBER_PRESSURE, 0.0).unwrap();
    assert_eq!(points[0], fixed.trace.points()[0]);

    let diameter = engine.exit_diameter(points[0].chamber_pressure);
    assert!(diameter < constants.exit_diameter_min);
    assert_eq!(
        points[1].chamber_pressure,
        points[0].chamber_pressure + engine.pressure_delta(points[0].chamber_pressure, diameter)
    );
}

#[test]
fn test_config_driven_run_and_report() {
    let config = SimulationConfig::from_toml_str(
        r#"
        [engine]
        burn_rate = 0.02

        [run]
        nozzle = "fixed"
        exit_diameter = 0.12
        burn_time = 60.0
        "#,
    )
    .unwrap();

    let engine = RocketEngine::from_config(&config).unwrap();
    let run = engine
        .simulate(config.initial_pressure(), config.burn_time())
        .unwrap();
    let report = PerformanceReport::from_run(&engine, &run, config.burn_time()).unwrap();

    assert_eq!(run.trace.len(), 61);
    assert_eq!(report.exit_diameter, 0.12);
    assert_eq!(report.burn_rate, 0.02);
    assert!(report.total_impulse > 0.0);
    assert_relative_eq!(
        report.specific_impulse,
        run.final_exit_velocity / config.engine.gravity,
        epsilon = 1e-12
    );
}

#[test]
fn test_invalid_config_rejected_before_simulation() {
    let config = SimulationConfig::from_toml_str("[engine]\nthroat_diameter = 0.0\n").unwrap();
    assert!(matches!(
        RocketEngine::from_config(&config),
        Err(SimulationError::InvalidConfiguration {
            parameter: "throat_diameter",
            ..
        })
    ));
}
