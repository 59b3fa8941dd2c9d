//! Smoke harness: replay the builder scenario and the demos against the
//! library and report each check.
use pattern_demos::demo;
use pattern_demos::menu::{Drink, MainItem, MealBuilder, SideItem};
use serde_json::{Value, json};

fn burger_combo() -> anyhow::Result<(Value, Value)> {
    let mut builder = MealBuilder::new();
    let first = builder
        .set_main_item(MainItem::Burger)
        .add_side(SideItem::Fries)
        .add_side([SideItem::OnionRings])
        .set_drink(Drink::Soda)
        .build();
    let second = builder.build();
    Ok((serde_json::to_value(&first)?, serde_json::to_value(&second)?))
}

fn main() -> anyhow::Result<()> {
    let mut failures = 0usize;
    let mut check = |label: &str, ok: bool| {
        if ok {
            eprintln!("✅ {label}");
        } else {
            eprintln!("❌ {label}");
            failures += 1;
        }
    };

    let (first, second) = burger_combo()?;
    check(
        "burger combo",
        first == json!({"main_item": "BURGER", "sides": ["FRIES", "ONION_RINGS"], "drink": "SODA", "dessert": null}),
    );
    check(
        "builder resets after finalize",
        second == json!({"main_item": null, "sides": [], "drink": null, "dessert": null}),
    );

    let lines = demo::all()?;
    check("demo sections", lines.iter().filter(|l| l.starts_with("== ")).count() == 3);
    check("fresh process sees the initial weather", lines.iter().any(|l| l == "Sunny, 25C"));
    check("weather update is shared", lines.iter().any(|l| l == "same instance: true"));

    if failures > 0 {
        anyhow::bail!("{failures} check(s) failed");
    }
    Ok(())
}
