use std::{fmt::Display, sync::Arc};

use crate::{
    change_log::ChangeLogger,
    config::ModelConfig,
    conversion::{levels_from_upper_and_difference, round_db, upper_and_difference_from_levels, LevelTransform},
    error::Error,
    event::Event,
    parameters::{
        formatter::{DecibelFormatter, FloatFormatter, ParameterFormatter},
        info::ParameterInfo,
        kind::HapticParameter,
        range::ParameterRange,
        ParameterValue,
    },
};

const LINEAR_STEP: f64 = 0.01;
const DECIBEL_STEP: f64 = 1.0;

/// Hardware intensity and spectrum, plus the perceptual movement and
/// vibration levels computed from them.
///
/// Only intensity and spectrum are stored. Movement and vibration are
/// recomputed on every read, rounded to whole dB and clipped to their ranges.
/// Setting one of them back-solves the stored pair while holding the other
/// level at its currently displayed value.
#[derive(Clone)]
pub struct ParameterModel {
    config: ModelConfig,
    transform: LevelTransform,

    intensity: f64,
    spectrum: f64,

    infos: [ParameterInfo; 4],
    formatters: [Arc<dyn ParameterFormatter<f64>>; 4],

    change_logger: Option<ChangeLogger>,
}

impl ParameterModel {
    pub fn new() -> Self {
        Self::from_valid_config(ModelConfig::default())
    }

    pub fn with_config(config: ModelConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ModelConfig) -> Self {
        let (value_step, value_unit) = if config.linear_amplitude() {
            (LINEAR_STEP, "")
        } else {
            (DECIBEL_STEP, DecibelFormatter::UNIT)
        };

        let infos = HapticParameter::ALL.map(|parameter| {
            let info = ParameterInfo::new(parameter, *config.range(parameter));

            if parameter.is_derived() {
                info.with_step(DECIBEL_STEP).with_unit(DecibelFormatter::UNIT)
            } else {
                info.with_step(value_step).with_unit(value_unit)
            }
        });

        let formatters = HapticParameter::ALL.map(|parameter| -> Arc<dyn ParameterFormatter<f64>> {
            match parameter {
                _ if parameter.is_derived() => Arc::new(DecibelFormatter::new()),
                _ if config.linear_amplitude() => Arc::new(FloatFormatter::default()),
                HapticParameter::Spectrum => Arc::new(DecibelFormatter::new().with_plus_sign()),
                _ => Arc::new(DecibelFormatter::new()),
            }
        });

        Self {
            transform: config.transform(),
            intensity: config.default_intensity(),
            spectrum: config.default_spectrum(),
            config,
            infos,
            formatters,
            change_logger: None,
        }
    }

    pub fn with_change_logger(mut self, change_logger: ChangeLogger) -> Self {
        self.change_logger = Some(change_logger);
        self
    }

    pub fn with_formatter(mut self, parameter: HapticParameter, formatter: Arc<dyn ParameterFormatter<f64>>) -> Self {
        self.formatters[Self::index(parameter)] = formatter;
        self
    }

    pub fn set_change_logger(&mut self, change_logger: Option<ChangeLogger>) {
        self.change_logger = change_logger;
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn info(&self, parameter: HapticParameter) -> &ParameterInfo {
        &self.infos[Self::index(parameter)]
    }

    pub fn formatter(&self, parameter: HapticParameter) -> &dyn ParameterFormatter<f64> {
        self.formatters[Self::index(parameter)].as_ref()
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn spectrum(&self) -> f64 {
        self.spectrum
    }

    pub fn movement(&self) -> f64 {
        self.levels().0
    }

    pub fn vibration(&self) -> f64 {
        self.levels().1
    }

    /// `(movement, vibration)` as displayed
    pub fn levels(&self) -> (f64, f64) {
        let upper_db = self.transform.amplitude_db(self.intensity);
        let difference_db = self.transform.difference_db(self.spectrum);
        let (movement, vibration) = levels_from_upper_and_difference(upper_db, difference_db);

        (
            self.derived_level(HapticParameter::Movement, movement),
            self.derived_level(HapticParameter::Vibration, vibration),
        )
    }

    pub fn set_intensity(&mut self, value: f64) {
        log::trace!("ParameterModel::set_intensity({value})");

        self.intensity = self.clamped(HapticParameter::Intensity, value, self.intensity);
        self.log(&format!("Intensity set to {:?}", self.intensity));
    }

    pub fn set_spectrum(&mut self, value: f64) {
        log::trace!("ParameterModel::set_spectrum({value})");

        self.spectrum = self.clamped(HapticParameter::Spectrum, value, self.spectrum);
        self.log(&format!("Spectrum set to {:?}", self.spectrum));
    }

    pub fn set_movement(&mut self, movement: f64) {
        log::trace!("ParameterModel::set_movement({movement})");
        self.log(&format!("Updating movement to {movement:?}"));

        // Vibration must be read before anything changes
        let vibration = self.vibration();
        self.reconcile(movement, vibration);
    }

    pub fn set_vibration(&mut self, vibration: f64) {
        log::trace!("ParameterModel::set_vibration({vibration})");
        self.log(&format!("Updating vibration to {vibration:?}"));

        let movement = self.movement();
        self.reconcile(movement, vibration);
    }

    /// Stores the intensity and spectrum that produce the given levels, clipped to their ranges.
    ///
    /// A NaN level leaves both stored values as they are.
    pub fn reconcile(&mut self, movement: f64, vibration: f64) {
        // f64::max drops a NaN operand, so check before solving
        if !movement.is_nan() && !vibration.is_nan() {
            let (upper_db, difference_db) = upper_and_difference_from_levels(movement, vibration);

            let intensity = self.transform.inverse_amplitude(upper_db);
            let spectrum = self.transform.inverse_difference(difference_db);

            self.intensity = self.clamped(HapticParameter::Intensity, intensity, self.intensity);
            self.spectrum = self.clamped(HapticParameter::Spectrum, spectrum, self.spectrum);
        }

        self.log(&format!("  Intensity set to {:?}", self.intensity));
        self.log(&format!("  Spectrum set to {:?}", self.spectrum));
    }

    pub fn value(&self, parameter: HapticParameter) -> f64 {
        match parameter {
            HapticParameter::Intensity => self.intensity(),
            HapticParameter::Spectrum => self.spectrum(),
            HapticParameter::Movement => self.movement(),
            HapticParameter::Vibration => self.vibration(),
        }
    }

    pub fn set_value(&mut self, parameter: HapticParameter, value: f64) {
        match parameter {
            HapticParameter::Intensity => self.set_intensity(value),
            HapticParameter::Spectrum => self.set_spectrum(value),
            HapticParameter::Movement => self.set_movement(value),
            HapticParameter::Vibration => self.set_vibration(value),
        }
    }

    /// Slider position of the current value
    pub fn normalized_value(&self, parameter: HapticParameter) -> ParameterValue {
        self.info(parameter).range()
            .plain_to_normalized(self.value(parameter))
            .unwrap_or_default()
    }

    /// Sets the value at a slider position, snapped to the parameter's step
    pub fn set_normalized_value(&mut self, parameter: HapticParameter, normalized: ParameterValue) {
        let info = self.info(parameter);
        let range = info.range();
        let mut value = range.normalized_to_plain(normalized);

        if info.step() > 0.0 {
            let steps = ((value - range.min()) / info.step()).round();
            value = range.clamp(range.min() + steps * info.step());
        }

        self.set_value(parameter, value);
    }

    pub fn display_value(&self, parameter: HapticParameter) -> String {
        self.formatter(parameter).value_to_string(self.value(parameter))
    }

    pub fn set_value_from_string(&mut self, parameter: HapticParameter, string: &str) -> Result<(), Error> {
        let value = self.formatter(parameter)
            .string_to_value(string)
            .ok_or_else(|| Error::Parse(string.to_string()))?;

        self.set_value(parameter, value);
        Ok(())
    }

    pub fn process_event(&mut self, event: &Event) -> Result<(), Error> {
        match event {
            Event::ParameterValue { id, value } => {
                let parameter = HapticParameter::from_id(*id).ok_or(Error::UnknownParameter(*id))?;
                self.set_value(parameter, *value);
            },

            Event::ParameterNormalized { id, normalized } => {
                let parameter = HapticParameter::from_id(*id).ok_or(Error::UnknownParameter(*id))?;
                self.set_normalized_value(parameter, *normalized);
            },
        }

        Ok(())
    }

    fn index(parameter: HapticParameter) -> usize {
        parameter.id() as usize
    }

    fn derived_level(&self, parameter: HapticParameter, level_db: f64) -> f64 {
        self.config.range(parameter).clamp(round_db(level_db))
    }

    // NaN has no nearest bound, keep what we had
    fn clamped(&self, parameter: HapticParameter, value: f64, current: f64) -> f64 {
        if value.is_nan() {
            return current;
        }

        self.config.range(parameter).clamp(value)
    }

    fn log(&self, text: &str) {
        log::debug!("{text}");

        if let Some(change_logger) = self.change_logger.as_ref() {
            change_logger(text);
        }
    }
}

impl Default for ParameterModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParameterModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParameterModel")
            .field("config", &self.config)
            .field("intensity", &self.intensity)
            .field("spectrum", &self.spectrum)
            .finish_non_exhaustive()
    }
}

impl Display for ParameterModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut separator = "";

        for parameter in HapticParameter::ALL {
            write!(f, "{separator}{parameter}: {}", self.display_value(parameter))?;
            separator = ", ";
        }

        Ok(())
    }
}
