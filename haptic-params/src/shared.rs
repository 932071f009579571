use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{error::Error, event::Event, model::ParameterModel, parameters::kind::HapticParameter};

/// A [`ParameterModel`] behind one coarse lock, so every interaction from
/// any thread lands as a single serialized setter call.
#[derive(Clone, Default)]
pub struct SharedParameterModel {
    model: Arc<Mutex<ParameterModel>>,
}

impl SharedParameterModel {
    pub fn new(model: ParameterModel) -> Self {
        Self {
            model: Arc::new(Mutex::new(model)),
        }
    }

    /// Every setter leaves the model valid, so a poisoned lock is still usable
    pub fn lock(&self) -> MutexGuard<'_, ParameterModel> {
        self.model.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, parameter: HapticParameter) -> f64 {
        self.lock().value(parameter)
    }

    pub fn set(&self, parameter: HapticParameter, value: f64) {
        self.lock().set_value(parameter, value);
    }

    pub fn process_event(&self, event: &Event) -> Result<(), Error> {
        self.lock().process_event(event)
    }
}

impl From<ParameterModel> for SharedParameterModel {
    fn from(model: ParameterModel) -> Self {
        Self::new(model)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use crate::{model::ParameterModel, parameters::kind::HapticParameter};

    use super::SharedParameterModel;

    #[test]
    fn serialized_updates_from_threads() {
        let shared = SharedParameterModel::from(ParameterModel::new());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        shared.set(HapticParameter::Movement, -(i as f64) * 5.0);
                        shared.set(HapticParameter::Spectrum, 0.1 * i as f64);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let model = shared.lock();
        assert!((0.0..=1.0).contains(&model.intensity()));
        assert!((-1.0..=1.0).contains(&model.spectrum()));
        assert!((-20.0..=0.0).contains(&model.movement()));
    }
}
