use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use json::{JsonValue, object};

use crate::{
    error::{DitherbendError, Result},
    params::ParameterSet,
    registry,
};

/// Full processing pipeline configuration for the CLI: which algorithm to
/// run, its parameter overrides, and the preprocessing knobs around the
/// engine call.
#[derive(Debug)]
pub struct ProcessConfig {
    pub algorithm: String,
    pub parameters: ParameterSet,
    pub processing_width: u32,
    pub processing_height: u32,
    pub brightness_delta: i32,
    pub contrast_delta: f32,
    pub output_scale: u32,
}

impl ProcessConfig {
    fn from_json(json_string: &str) -> Result<ProcessConfig> {
        let parsed = json::parse(json_string)
            .map_err(|e| DitherbendError::Config(format!("invalid config json: {e}")))?;

        let algorithm = match parsed["algorithm"].as_str() {
            Some(id) => id.to_string(),
            None => return config_err("couldn't parse algorithm"),
        };
        // the engine itself only warns on unknown ids; a config file naming
        // one is a mistake worth failing loudly on
        if registry::descriptor(&algorithm).is_none() {
            return config_err(&format!("unknown algorithm {algorithm:?}"));
        }

        let processing_width = match parsed["processing_width"].as_u32() {
            Some(val) => val,
            None => return config_err("couldn't parse processing_width"),
        };
        let processing_height = match parsed["processing_height"].as_u32() {
            Some(val) => val,
            None => return config_err("couldn't parse processing_height"),
        };

        let brightness_delta = parsed["brightness_delta"].as_i32().unwrap_or(0);
        let contrast_delta = parsed["contrast_delta"].as_f32().unwrap_or(0.0);
        let output_scale = parsed["output_scale"].as_u32().unwrap_or(1).max(1);

        let mut parameters = ParameterSet::new();
        for (name, value) in parsed["parameters"].entries() {
            match value.as_f64() {
                Some(val) => parameters.set(name, val),
                None => return config_err(&format!("couldn't parse parameters.{name}")),
            }
        }

        Ok(ProcessConfig {
            algorithm,
            parameters,
            processing_width,
            processing_height,
            brightness_delta,
            contrast_delta,
            output_scale,
        })
    }

    fn to_json(&self) -> String {
        let mut parameters = JsonValue::new_object();
        for (name, value) in self.parameters.iter() {
            parameters[name] = value.into();
        }

        let data = object! {
            algorithm: self.algorithm.clone(),
            parameters: parameters,
            processing_width: self.processing_width,
            processing_height: self.processing_height,
            brightness_delta: self.brightness_delta,
            contrast_delta: self.contrast_delta,
            output_scale: self.output_scale,
        };

        data.to_string()
    }

    pub fn read_config<P: AsRef<Path>>(path: P) -> Result<ProcessConfig> {
        let mut file = File::open(path)?;
        let mut buff: Vec<u8> = Vec::new();
        let _ = file.read_to_end(&mut buff)?;

        let json_string = String::from_utf8(buff)
            .map_err(|e| DitherbendError::Config(format!("config is not valid utf-8: {e}")))?;

        ProcessConfig::from_json(&json_string)
    }

    pub fn write_config<P: AsRef<Path>>(&self, path: P) -> Result {
        let string = self.to_json();
        let mut file = File::create(path)?;
        file.write_all(string.as_bytes())?;
        Ok(())
    }
}

fn config_err<T>(msg: &str) -> Result<T> {
    Err(DitherbendError::Config(msg.to_string()))
}
