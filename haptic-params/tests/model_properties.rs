use std::sync::{Arc, Mutex};

use haptic_params::{ChangeLogger, HapticParameter, ModelConfig, ParameterModel, ParameterRange};
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = ModelConfig> {
    prop_oneof![
        Just(ModelConfig::linear_gain()),
        Just(ModelConfig::decibel()),
    ]
}

/// A model of either variant in an arbitrary valid state
fn model_strategy() -> impl Strategy<Value = ParameterModel> {
    config_strategy().prop_flat_map(|config| {
        let intensity = config.range(HapticParameter::Intensity);
        let spectrum = config.range(HapticParameter::Spectrum);

        (
            Just(config.clone()),
            intensity.min()..=intensity.max(),
            spectrum.min()..=spectrum.max(),
        )
    })
    .prop_map(|(config, intensity, spectrum)| {
        let mut model = ParameterModel::with_config(config).unwrap();
        model.set_intensity(intensity);
        model.set_spectrum(spectrum);
        model
    })
}

fn recording_logger() -> (ChangeLogger, Arc<Mutex<Vec<String>>>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = lines.clone();
    let logger: ChangeLogger = Arc::new(move |line: &str| sink.lock().unwrap().push(line.to_string()));
    (logger, lines)
}

proptest! {
    /// Property: direct setters saturate to the nearest bound
    #[test]
    fn direct_setters_saturate(mut model in model_strategy(), excess in 0.001f64..1000.0) {
        let intensity = *model.config().range(HapticParameter::Intensity);
        let spectrum = *model.config().range(HapticParameter::Spectrum);

        model.set_intensity(intensity.max() + excess);
        prop_assert_eq!(model.intensity(), intensity.max());
        model.set_intensity(intensity.min() - excess);
        prop_assert_eq!(model.intensity(), intensity.min());

        model.set_spectrum(spectrum.max() + excess);
        prop_assert_eq!(model.spectrum(), spectrum.max());
        model.set_spectrum(spectrum.min() - excess);
        prop_assert_eq!(model.spectrum(), spectrum.min());
    }

    /// Property: writing back a derived value after setting the other one changes nothing
    #[test]
    fn movement_vibration_roundtrip(mut model in model_strategy(), movement in -40.0f64..10.0) {
        model.set_movement(movement);
        let movement_before = model.movement();
        let vibration_before = model.vibration();

        model.set_vibration(vibration_before);
        prop_assert!((model.movement() - movement_before).abs() <= 1.0);
        prop_assert_eq!(model.vibration(), vibration_before);
    }

    /// Property: setting one derived level holds the other one
    #[test]
    fn derived_setters_are_orthogonal(mut model in model_strategy(), level in -20.0f64..=0.0) {
        let vibration = model.vibration();
        model.set_movement(level);
        prop_assert_eq!(model.vibration(), vibration);
        prop_assert!((model.movement() - level).abs() <= 0.5 + 1e-9);

        let movement = model.movement();
        model.set_vibration(level);
        prop_assert_eq!(model.movement(), movement);
        prop_assert!((model.vibration() - level).abs() <= 0.5 + 1e-9);
    }

    /// Property: reconciling whole-dB levels inside the derived range reads them back exactly
    #[test]
    fn reconcile_reads_back(mut model in model_strategy(), movement in -20i32..=0, vibration in -20i32..=0) {
        model.reconcile(movement as f64, vibration as f64);
        prop_assert_eq!(model.levels(), (movement as f64, vibration as f64));
    }

    /// Property: re-applying the current value is a no-op with an identical message
    #[test]
    fn direct_setters_are_idempotent(mut model in model_strategy()) {
        let (logger, lines) = recording_logger();
        model.set_change_logger(Some(logger));

        let intensity = model.intensity();
        let spectrum = model.spectrum();
        let levels = model.levels();

        model.set_intensity(intensity);
        model.set_intensity(model.intensity());
        prop_assert_eq!(model.intensity(), intensity);

        model.set_spectrum(spectrum);
        model.set_spectrum(model.spectrum());
        prop_assert_eq!(model.spectrum(), spectrum);
        prop_assert_eq!(model.levels(), levels);

        let lines = lines.lock().unwrap();
        prop_assert_eq!(lines.len(), 4);
        prop_assert_eq!(&lines[0], &lines[1]);
        prop_assert_eq!(&lines[2], &lines[3]);
    }

    /// Property: near-silent gains read as the clipped safe floor, never NaN or -inf
    #[test]
    fn near_zero_intensity_is_safe(intensity in 0.0f64..0.001, spectrum in -1.0f64..=1.0) {
        let mut model = ParameterModel::new();
        model.set_intensity(intensity);
        model.set_spectrum(spectrum);

        prop_assert_eq!(model.movement(), -20.0);
        prop_assert_eq!(model.vibration(), -20.0);
    }

    /// Property: no sequence of setter calls leaves the stored values out of range
    #[test]
    fn stored_values_stay_in_range(
        mut model in model_strategy(),
        calls in prop::collection::vec((0usize..4, -100.0f64..100.0), 0..40),
    ) {
        for (index, value) in calls {
            model.set_value(HapticParameter::ALL[index], value);

            let config = model.config();
            prop_assert!(config.range(HapticParameter::Intensity).contains(model.intensity()));
            prop_assert!(config.range(HapticParameter::Spectrum).contains(model.spectrum()));

            let (movement, vibration) = model.levels();
            prop_assert!(config.range(HapticParameter::Movement).contains(movement));
            prop_assert!(config.range(HapticParameter::Vibration).contains(vibration));
            prop_assert_eq!(movement, movement.round());
        }
    }
}
