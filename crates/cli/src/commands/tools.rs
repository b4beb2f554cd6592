//! `taskwright tools` — list the available tools.

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let registry = taskwright_tools::default_registry();
    for (name, description) in registry.catalog() {
        println!("  {name:<12} {description}");
    }
    Ok(())
}
