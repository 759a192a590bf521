// Creational Patterns demo: factory functions and singletons.

use colored::Colorize;
use design_patterns::factory::{create_user, create_user_of_kind, greeter, UserParams};
use design_patterns::logging::init_tracing;
use design_patterns::singleton::{instance, ProcessManager, ProcessState};

fn factory_example() -> Result<(), Box<dyn std::error::Error>> {
    let mut bob = create_user(UserParams {
        user_name: "Bob".to_string(),
        id: 5,
        avatar: "bob.png".to_string(),
        ..Default::default()
    });
    println!("{:?}", bob);

    bob.set_user_name("Robert").set_user_name("Rob");
    println!("Renamed: {}", bob.user_name);

    let john = create_user(UserParams {
        user_name: "John".to_string(),
        ..Default::default()
    });
    println!("With defaults: {:?}", john);

    let admin = create_user_of_kind("admin", UserParams::default())?;
    println!("Admin permissions: {:?}", admin.kind.permissions());

    if let Err(err) = create_user_of_kind("superuser", UserParams::default()) {
        println!("Rejected: {err}");
    }

    let hello = greeter("Hello");
    println!("{}", hello(&bob));
    Ok(())
}

fn singleton_example() {
    let first = ProcessManager::global();
    let second = ProcessManager::global();
    first.spawn(ProcessState::Running);
    println!("Same manager: {}", std::ptr::eq(first, second));
    println!("Processes seen by second handle: {}", second.num_process());

    println!("Same instance: {}", std::ptr::eq(instance(), instance()));

    // Injected managers keep their own counts
    let local = ProcessManager::new();
    println!("Injected manager processes: {}", local.num_process());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("info");

    println!("{}", "=== Factory Functions ===".bold().green());
    factory_example()?;
    println!();

    println!("{}", "=== Singleton ===".bold().green());
    singleton_example();
    Ok(())
}
