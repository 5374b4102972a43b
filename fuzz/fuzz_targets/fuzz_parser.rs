#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|contents: &str| {
    for ingredient in cookscale::parse_recipe(contents) {
        assert!(ingredient.quantity > 0.0);
        let _ = cookscale::format_kitchen_quantity(ingredient.quantity, &ingredient.unit);
    }
});
