use anycell::{cast, cast_into, cast_mut, cast_ref, AnyValue, BadAnyCast, TypeToken};

fn main() -> Result<(), BadAnyCast> {
    // Store a value; the concrete type is erased behind the container.
    let mut slot = AnyValue::new(42i32);
    println!("slot holds: {}", slot.type_token());

    // Probe with the reference form; a miss is just None.
    match cast_ref::<String>(&slot) {
        Some(text) => println!("text: {}", text),
        None => println!("slot does not hold a String"),
    }

    // The value form reports failures as BadAnyCast.
    match cast::<f64>(&slot) {
        Ok(number) => println!("number: {}", number),
        Err(e) => println!("cast failed: {}", e),
    }

    // Extract with the right type using ? for early return.
    let number = cast::<i32>(&slot)?;
    println!("extracted: {}", number);

    // Update in place.
    if let Some(held) = cast_mut::<i32>(&mut slot) {
        *held *= 2;
    }
    println!("doubled: {}", cast::<i32>(&slot)?);

    // Replace the content with a different type entirely.
    slot.set(String::from("now a string"));
    assert_eq!(slot.type_token(), TypeToken::of::<String>());

    // Clones are independent copies.
    let copy = slot.clone();
    if let Some(text) = cast_mut::<String>(&mut slot) {
        text.push_str(" (modified)");
    }
    println!("original: {}", cast_ref::<String>(&slot).unwrap());
    println!("copy:     {}", cast_ref::<String>(&copy).unwrap());

    // Move the value out without cloning.
    let owned: String = cast_into(copy)?;
    println!("owned: {}", owned);

    Ok(())
}
