pub use self::flashlight::FlashlightEvaluator;

mod flashlight;
