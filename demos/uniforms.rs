//! A uniform-value table: the kind of consumer a renderer would build on
//! top of `AnyValue`, keying heterogeneous shader parameters by name.

use std::collections::HashMap;

use anycell::{cast, cast_ref, AnyValue, BadAnyCast};

/// Named slots of heterogeneous values, one `AnyValue` per uniform.
struct UniformTable {
    slots: HashMap<String, AnyValue>,
}

impl UniformTable {
    fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    fn set<T: anycell::HeldValue>(&mut self, name: &str, value: T) {
        self.slots
            .entry(name.to_string())
            .or_insert_with(AnyValue::empty)
            .set(value);
    }

    fn get<T: Clone + 'static>(&self, name: &str) -> Result<T, BadAnyCast> {
        match self.slots.get(name) {
            Some(slot) => cast::<T>(slot),
            None => cast::<T>(&AnyValue::empty()),
        }
    }

    fn describe(&self) {
        for (name, slot) in &self.slots {
            println!("  {} : {}", name, slot.type_token());
        }
    }
}

fn main() -> Result<(), BadAnyCast> {
    let mut uniforms = UniformTable::new();

    // Different shader parameters, different types, one table.
    uniforms.set("u_time", 0.0f32);
    uniforms.set("u_light_color", [1.0f32, 0.9, 0.8]);
    uniforms.set("u_use_shadows", true);
    uniforms.set("u_model_name", String::from("nanosuit"));

    println!("uniform table:");
    uniforms.describe();

    // A frame tick: read, update, write back.
    let time = uniforms.get::<f32>("u_time")?;
    uniforms.set("u_time", time + 0.016);
    println!("u_time advanced to {}", uniforms.get::<f32>("u_time")?);

    // Typed reads are checked against what the slot actually holds.
    let color = uniforms.get::<[f32; 3]>("u_light_color")?;
    println!("light color: {:?}", color);

    match uniforms.get::<i32>("u_use_shadows") {
        Ok(_) => unreachable!("shadows are stored as bool"),
        Err(e) => println!("expected failure: {}", e),
    }

    // Probing without extraction.
    if let Some(slot) = uniforms.slots.get("u_model_name") {
        if let Some(name) = cast_ref::<String>(slot) {
            println!("drawing model: {}", name);
        }
    }

    Ok(())
}
